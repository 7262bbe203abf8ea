//! Speech bubbles pinned above points in the 3D scene.
//!
//! Bubbles remember only their world anchor. The on-screen position is
//! re-projected every frame through the live camera, so a bubble follows its
//! animal while the user orbits or zooms.

use crate::camera::Camera;
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

pub type BubbleId = u64;

/// What a bubble is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// Index into the scene's entity list.
    Entity(usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
    pub id: BubbleId,
    pub anchor: Anchor,
    pub message: String,
    pub world_pos: Vec3,
    /// Last projection; `None` when the anchor is behind the camera.
    pub screen_pos: Option<Vec2>,
    pub created_at_ms: f64,
}

/// Project `world_pos` raised by `offset` into pixel coordinates.
#[inline]
pub fn project_bubble(camera: &Camera, world_pos: Vec3, offset: f32, width: f32, height: f32) -> Option<Vec2> {
    camera.world_to_screen(world_pos + Vec3::Y * offset, width, height)
}

/// The live bubbles of one scene.
#[derive(Clone, Debug)]
pub struct BubbleBoard {
    bubbles: SmallVec<[Bubble; 4]>,
    next_id: BubbleId,
    offset: f32,
}

impl BubbleBoard {
    pub fn new(offset: f32) -> Self {
        Self {
            bubbles: SmallVec::new(),
            next_id: 1,
            offset,
        }
    }

    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.iter()
    }

    pub fn get(&self, id: BubbleId) -> Option<&Bubble> {
        self.bubbles.iter().find(|b| b.id == id)
    }

    pub fn has_anchor(&self, anchor: Anchor) -> bool {
        self.bubbles.iter().any(|b| b.anchor == anchor)
    }

    pub fn show(&mut self, anchor: Anchor, message: impl Into<String>, world_pos: Vec3, now_ms: f64) -> BubbleId {
        let id = self.next_id;
        self.next_id += 1;
        self.bubbles.push(Bubble {
            id,
            anchor,
            message: message.into(),
            world_pos,
            screen_pos: None,
            created_at_ms: now_ms,
        });
        id
    }

    /// Replace whatever is showing with a single bubble.
    pub fn show_only(&mut self, anchor: Anchor, message: impl Into<String>, world_pos: Vec3, now_ms: f64) -> BubbleId {
        self.bubbles.clear();
        self.show(anchor, message, world_pos, now_ms)
    }

    pub fn dismiss(&mut self, id: BubbleId) -> bool {
        let before = self.bubbles.len();
        self.bubbles.retain(|b| b.id != id);
        before != self.bubbles.len()
    }

    pub fn clear(&mut self) {
        self.bubbles.clear();
    }

    /// Move bubbles whose anchors moved (e.g. a spinning ring).
    pub fn reanchor(&mut self, mut world_of: impl FnMut(Anchor) -> Option<Vec3>) {
        for b in &mut self.bubbles {
            if let Some(pos) = world_of(b.anchor) {
                b.world_pos = pos;
            }
        }
    }

    /// Re-project every bubble through the current camera.
    pub fn track(&mut self, camera: &Camera, width: f32, height: f32) {
        for b in &mut self.bubbles {
            b.screen_pos = project_bubble(camera, b.world_pos, self.offset, width, height);
        }
    }
}
