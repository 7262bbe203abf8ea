//! Fixed placements and the randomized group-photo layout.

use crate::catalog::{ZodiacSign, ZODIAC_ORDER};
use crate::constants::{INFO_RED_HORSE_POSITION, RING_RADIUS};
use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Group photo slots: front row (4), middle row (5), back row (4), each row
/// staggered between the gaps of the row in front.
pub const PHOTO_SLOTS: [Vec3; 13] = [
    // front
    Vec3::new(-0.85, 0.0, 0.15),
    Vec3::new(-0.28, 0.0, 0.15),
    Vec3::new(0.28, 0.0, 0.15),
    Vec3::new(0.85, 0.0, 0.15),
    // middle
    Vec3::new(-1.0, 0.3, -0.35),
    Vec3::new(-0.5, 0.3, -0.35),
    Vec3::new(0.0, 0.3, -0.35),
    Vec3::new(0.5, 0.3, -0.35),
    Vec3::new(1.0, 0.3, -0.35),
    // back
    Vec3::new(-0.75, 0.55, -0.8),
    Vec3::new(-0.25, 0.55, -0.8),
    Vec3::new(0.25, 0.55, -0.8),
    Vec3::new(0.75, 0.55, -0.8),
];

/// Front-center slots reserved for the main horse.
pub const MAIN_SLOT_CHOICES: [usize; 2] = [1, 2];

pub const FRONT_ROW: std::ops::Range<usize> = 0..4;
pub const MIDDLE_ROW: std::ops::Range<usize> = 4..9;
pub const BACK_ROW: std::ops::Range<usize> = 9..13;

/// One session's assignment of animals to photo slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoLayout {
    pub main_slot: usize,
    /// `(sign, slot index)` in assignment order.
    pub assignments: Vec<(ZodiacSign, usize)>,
}

impl PhotoLayout {
    pub fn main_position(&self) -> Vec3 {
        PHOTO_SLOTS[self.main_slot]
    }

    pub fn slot_of(&self, sign: ZodiacSign) -> Option<usize> {
        self.assignments
            .iter()
            .find(|(s, _)| *s == sign)
            .map(|&(_, slot)| slot)
    }

    pub fn placements(&self) -> impl Iterator<Item = (ZodiacSign, Vec3)> + '_ {
        self.assignments
            .iter()
            .map(|&(sign, slot)| (sign, PHOTO_SLOTS[slot]))
    }
}

/// Place the main horse in one of the front-center slots and scatter the
/// twelve signs over the remaining slots.
pub fn generate_photo_layout<R: Rng + ?Sized>(rng: &mut R) -> PhotoLayout {
    let main_slot = MAIN_SLOT_CHOICES[rng.gen_range(0..MAIN_SLOT_CHOICES.len())];
    let mut slots: Vec<usize> = (0..PHOTO_SLOTS.len()).filter(|&i| i != main_slot).collect();
    slots.shuffle(rng);
    let mut signs = ZODIAC_ORDER;
    signs.shuffle(rng);
    let assignments = signs.iter().copied().zip(slots).collect();
    PhotoLayout {
        main_slot,
        assignments,
    }
}

/// Ring placement on the main page: `(position, yaw)` facing outward.
pub fn ring_placement(sign: ZodiacSign) -> (Vec3, f32) {
    let angle = sign.index() as f32 / 12.0 * TAU;
    let position = Vec3::new(angle.cos() * RING_RADIUS, 0.0, angle.sin() * RING_RADIUS);
    (position, -angle + FRAC_PI_2)
}

/// 6×2 grid on the zodiac info page, in traditional order.
pub fn info_grid_position(sign: ZodiacSign) -> Vec3 {
    const XS: [f32; 6] = [-1.5, -0.9, -0.3, 0.3, 0.9, 1.5];
    let i = sign.index();
    if i < 6 {
        Vec3::new(XS[i], 0.0, 0.3)
    } else {
        Vec3::new(XS[i - 6], 0.25, -0.4)
    }
}

pub fn info_red_horse_position() -> Vec3 {
    INFO_RED_HORSE_POSITION
}
