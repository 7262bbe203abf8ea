use crate::constants::DRAG_THRESHOLD_PX;
use glam::{Vec2, Vec3};

/// Pointer state in canvas pixels.
#[derive(Default, Clone, Copy, Debug)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// What a pointer event amounted to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Moved past the threshold with the button held; emitted once.
    DragStart,
    /// Incremental drag in pixels.
    Drag(Vec2),
    /// Released without dragging.
    Click(Vec2),
    /// Released after dragging.
    DragEnd,
    /// Moved with no button held.
    Hover(Vec2),
}

/// Tells clicks from drags.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerTracker {
    pub mouse: MouseState,
    press: Vec2,
    dragging: bool,
}

impl PointerTracker {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn down(&mut self, pos: Vec2) {
        self.mouse = MouseState {
            x: pos.x,
            y: pos.y,
            down: true,
        };
        self.press = pos;
        self.dragging = false;
    }

    /// Returns up to two gestures (a `DragStart` followed by its first `Drag`).
    pub fn moved(&mut self, pos: Vec2) -> [Option<Gesture>; 2] {
        let prev = Vec2::new(self.mouse.x, self.mouse.y);
        self.mouse.x = pos.x;
        self.mouse.y = pos.y;
        if !self.mouse.down {
            return [Some(Gesture::Hover(pos)), None];
        }
        if !self.dragging {
            if pos.distance(self.press) < DRAG_THRESHOLD_PX {
                return [None, None];
            }
            self.dragging = true;
            return [Some(Gesture::DragStart), Some(Gesture::Drag(pos - self.press))];
        }
        [Some(Gesture::Drag(pos - prev)), None]
    }

    pub fn up(&mut self, pos: Vec2) -> Gesture {
        self.mouse.down = false;
        self.mouse.x = pos.x;
        self.mouse.y = pos.y;
        if std::mem::take(&mut self.dragging) {
            Gesture::DragEnd
        } else {
            Gesture::Click(pos)
        }
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the nearest sphere hit by the ray.
pub fn pick_nearest(
    ray_origin: Vec3,
    ray_dir: Vec3,
    spheres: impl IntoIterator<Item = (Vec3, f32)>,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, (center, radius)) in spheres.into_iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
