//! Camera description shared by every scene and the web renderer.
//!
//! The camera is a plain value: scenes mutate `eye`/`target`/`up` each frame
//! and the renderer and bubble tracker read the resulting matrices. Nothing
//! here touches platform APIs, so projections can be verified on the host.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Y-up camera at `eye` looking at the origin.
    pub fn new(eye: Vec3, fovy_deg: f32) -> Self {
        Self {
            eye,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: fovy_deg.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn with_up(mut self, up: Vec3) -> Self {
        self.up = up;
        self
    }

    pub fn with_clip(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Re-aim the camera without moving it.
    #[inline]
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Keep the aspect ratio in step with the viewport.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates.
    ///
    /// Returns `None` for points at or behind the camera plane.
    pub fn project(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// Map a world point to pixel coordinates in a `width` × `height` viewport.
    ///
    /// `x = (ndc.x * 0.5 + 0.5) * width`, `y = (-(ndc.y * 0.5) + 0.5) * height`.
    pub fn world_to_screen(&self, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
        let ndc = self.project(world)?;
        Some(Vec2::new(
            (ndc.x * 0.5 + 0.5) * width,
            (-(ndc.y * 0.5) + 0.5) * height,
        ))
    }

    /// Compute a world-space ray from pixel coordinates.
    ///
    /// Returns `(ray_origin, ray_direction)` with a normalized direction.
    pub fn screen_to_world_ray(&self, sx: f32, sy: f32, width: f32, height: f32) -> (Vec3, Vec3) {
        let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
        let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.eye;
        let rd = (p1 - ro).normalize_or_zero();
        (ro, rd)
    }
}
