//! Procedural stand-in meshes, one per model url.

use glam::Vec3;
use zodiac_core::catalog::{ZodiacSign, ZODIAC_ORDER};
use zodiac_core::constants::{FLOOR_HEIGHT, FLOOR_RADIUS, MAIN_HORSE_MODEL_URL};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Append an ellipsoid as a UV sphere scaled by `radii`.
    pub fn ellipsoid(&mut self, center: Vec3, radii: Vec3, color: [f32; 3], rings: u32, segments: u32) {
        let base = self.vertices.len() as u32;
        for r in 0..=rings {
            let v = r as f32 / rings as f32;
            let theta = v * std::f32::consts::PI;
            for s in 0..=segments {
                let u = s as f32 / segments as f32;
                let phi = u * std::f32::consts::TAU;
                let unit = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
                let normal = (unit / radii).normalize_or_zero();
                self.vertices.push(Vertex {
                    position: (center + unit * radii).to_array(),
                    normal: normal.to_array(),
                    color,
                });
            }
        }
        let stride = segments + 1;
        for r in 0..rings {
            for s in 0..segments {
                let a = base + r * stride + s;
                let b = a + stride;
                self.indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
            }
        }
    }

    /// Append a flat disc facing +Y.
    pub fn disc(&mut self, center: Vec3, radius: f32, color: [f32; 3], segments: u32) {
        let base = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: center.to_array(),
            normal: [0.0, 1.0, 0.0],
            color,
        });
        for s in 0..=segments {
            let phi = s as f32 / segments as f32 * std::f32::consts::TAU;
            self.vertices.push(Vertex {
                position: (center + Vec3::new(phi.cos() * radius, 0.0, phi.sin() * radius)).to_array(),
                normal: [0.0, 1.0, 0.0],
                color,
            });
        }
        for s in 0..segments {
            self.indices.extend_from_slice(&[base, base + s + 2, base + s + 1]);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Silhouette {
    FourLegs,
    Serpent,
    Bird,
}

fn silhouette(sign: ZodiacSign) -> Silhouette {
    match sign {
        ZodiacSign::Snake | ZodiacSign::Dragon => Silhouette::Serpent,
        ZodiacSign::Rooster => Silhouette::Bird,
        _ => Silhouette::FourLegs,
    }
}

fn coat(sign: ZodiacSign) -> [f32; 3] {
    match sign {
        ZodiacSign::Rat => [0.55, 0.55, 0.60],
        ZodiacSign::Ox => [0.45, 0.30, 0.20],
        ZodiacSign::Tiger => [0.95, 0.55, 0.15],
        ZodiacSign::Rabbit => [0.92, 0.90, 0.88],
        ZodiacSign::Dragon => [0.20, 0.60, 0.35],
        ZodiacSign::Snake => [0.45, 0.65, 0.20],
        ZodiacSign::Horse => [0.55, 0.35, 0.20],
        ZodiacSign::Sheep => [0.95, 0.93, 0.85],
        ZodiacSign::Monkey => [0.60, 0.42, 0.28],
        ZodiacSign::Rooster => [0.90, 0.85, 0.80],
        ZodiacSign::Dog => [0.80, 0.62, 0.40],
        ZodiacSign::Pig => [0.95, 0.70, 0.72],
    }
}

const RED_HORSE_COAT: [f32; 3] = [0.85, 0.12, 0.10];

/// Sign a model url was exported for, if any.
pub fn sign_for_url(url: &str) -> Option<ZodiacSign> {
    let stem = url
        .rsplit('/')
        .next()?
        .trim_end_matches(".glb")
        .trim_end_matches("-ani");
    ZODIAC_ORDER.iter().copied().find(|s| s.model_stem() == stem)
}

fn four_legs(mesh: &mut MeshData, color: [f32; 3]) {
    let dark = color.map(|c| c * 0.7);
    mesh.ellipsoid(Vec3::new(0.0, 0.45, 0.0), Vec3::new(0.28, 0.22, 0.38), color, 12, 16);
    mesh.ellipsoid(Vec3::new(0.0, 0.70, 0.36), Vec3::new(0.16, 0.16, 0.18), color, 10, 14);
    for (x, z) in [(0.15, 0.22), (-0.15, 0.22), (0.15, -0.22), (-0.15, -0.22)] {
        mesh.ellipsoid(Vec3::new(x, 0.18, z), Vec3::new(0.06, 0.18, 0.06), dark, 6, 8);
    }
    for x in [0.08, -0.08] {
        mesh.ellipsoid(Vec3::new(x, 0.86, 0.34), Vec3::new(0.04, 0.07, 0.03), dark, 5, 6);
    }
    mesh.ellipsoid(Vec3::new(0.0, 0.50, -0.40), Vec3::new(0.04, 0.04, 0.10), dark, 5, 6);
}

fn serpent(mesh: &mut MeshData, color: [f32; 3]) {
    for i in 0..6 {
        let t = i as f32 / 5.0;
        let x = (t * std::f32::consts::TAU).sin() * 0.18;
        let z = 0.45 - t * 0.9;
        let r = 0.14 - t * 0.07;
        mesh.ellipsoid(Vec3::new(x, 0.16 + r, z), Vec3::splat(r), color, 8, 12);
    }
    mesh.ellipsoid(Vec3::new(0.0, 0.42, 0.55), Vec3::new(0.12, 0.10, 0.16), color, 10, 12);
}

fn bird(mesh: &mut MeshData, color: [f32; 3]) {
    let comb = [0.85, 0.10, 0.10];
    mesh.ellipsoid(Vec3::new(0.0, 0.45, 0.0), Vec3::new(0.22, 0.24, 0.28), color, 12, 16);
    mesh.ellipsoid(Vec3::new(0.0, 0.76, 0.16), Vec3::splat(0.12), color, 10, 12);
    mesh.ellipsoid(Vec3::new(0.0, 0.90, 0.16), Vec3::new(0.03, 0.06, 0.08), comb, 5, 6);
    mesh.ellipsoid(Vec3::new(0.0, 0.74, 0.30), Vec3::new(0.03, 0.03, 0.05), [0.95, 0.75, 0.2], 5, 6);
    for x in [0.08, -0.08] {
        mesh.ellipsoid(Vec3::new(x, 0.12, 0.0), Vec3::new(0.025, 0.12, 0.025), [0.95, 0.75, 0.2], 4, 6);
    }
    mesh.ellipsoid(Vec3::new(0.0, 0.60, -0.28), Vec3::new(0.05, 0.16, 0.08), color, 6, 8);
}

/// Build the stand-in for `url`. Unknown urls get a neutral four-legged
/// figure so the scene still loads.
pub fn build_model(url: &str) -> MeshData {
    let mut mesh = MeshData::default();
    if url == MAIN_HORSE_MODEL_URL {
        four_legs(&mut mesh, RED_HORSE_COAT);
        return mesh;
    }
    match sign_for_url(url) {
        Some(sign) => match silhouette(sign) {
            Silhouette::FourLegs => four_legs(&mut mesh, coat(sign)),
            Silhouette::Serpent => serpent(&mut mesh, coat(sign)),
            Silhouette::Bird => bird(&mut mesh, coat(sign)),
        },
        None => {
            log::warn!("[assets] no stand-in for {url}; using a generic figure");
            four_legs(&mut mesh, [0.7, 0.7, 0.7]);
        }
    }
    mesh
}

pub fn build_floor(color: [f32; 3]) -> MeshData {
    let mut mesh = MeshData::default();
    mesh.disc(Vec3::new(0.0, FLOOR_HEIGHT, 0.0), FLOOR_RADIUS, color, 64);
    mesh
}

/// Axes plus a grid in the XY plane (the fortune page is Z-up).
pub fn build_helpers(size: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let thin = 0.01;
    mesh.ellipsoid(Vec3::new(size * 0.25, 0.0, 0.0), Vec3::new(size * 0.25, thin * 2.0, thin * 2.0), [1.0, 0.2, 0.2], 3, 6);
    mesh.ellipsoid(Vec3::new(0.0, size * 0.25, 0.0), Vec3::new(thin * 2.0, size * 0.25, thin * 2.0), [0.2, 1.0, 0.2], 3, 6);
    mesh.ellipsoid(Vec3::new(0.0, 0.0, size * 0.25), Vec3::new(thin * 2.0, thin * 2.0, size * 0.25), [0.3, 0.4, 1.0], 3, 6);
    let half = size * 0.5;
    let grey = [0.45, 0.45, 0.5];
    for i in 0..=10 {
        let p = -half + size * i as f32 / 10.0;
        mesh.ellipsoid(Vec3::new(p, 0.0, 0.0), Vec3::new(thin, half, thin), grey, 2, 4);
        mesh.ellipsoid(Vec3::new(0.0, p, 0.0), Vec3::new(half, thin, thin), grey, 2, 4);
    }
    mesh
}
