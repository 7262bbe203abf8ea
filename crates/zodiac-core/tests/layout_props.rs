// Host-side property tests for the group photo and ring layouts.

use glam::Vec3;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use zodiac_core::layout::{
    generate_photo_layout, info_grid_position, ring_placement, MAIN_SLOT_CHOICES, PHOTO_SLOTS,
};
use zodiac_core::{ZodiacSign, ZODIAC_ORDER};

proptest! {
    #[test]
    fn photo_layout_uses_every_sign_and_free_slot_once(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = generate_photo_layout(&mut rng);

        prop_assert!(MAIN_SLOT_CHOICES.contains(&layout.main_slot));
        prop_assert_eq!(layout.assignments.len(), 12);

        let signs: HashSet<ZodiacSign> = layout.assignments.iter().map(|&(s, _)| s).collect();
        let slots: HashSet<usize> = layout.assignments.iter().map(|&(_, i)| i).collect();
        prop_assert_eq!(signs.len(), 12);
        prop_assert_eq!(slots.len(), 12);
        prop_assert!(!slots.contains(&layout.main_slot));
        prop_assert!(slots.iter().all(|&i| i < PHOTO_SLOTS.len()));
    }

    #[test]
    fn same_seed_gives_same_layout(seed in any::<u64>()) {
        let a = generate_photo_layout(&mut StdRng::seed_from_u64(seed));
        let b = generate_photo_layout(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}

#[test]
fn ring_places_rat_on_plus_x_and_faces_center() {
    let (pos, yaw) = ring_placement(ZodiacSign::Rat);
    assert!((pos - Vec3::new(2.25, 0.0, 0.0)).length() < 1e-5);
    assert!((yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn ring_positions_are_evenly_spaced() {
    for pair in ZODIAC_ORDER.windows(2) {
        let (a, _) = ring_placement(pair[0]);
        let (b, _) = ring_placement(pair[1]);
        assert!((a.length() - 2.25).abs() < 1e-5);
        // chord for 30 degrees on a 2.25 radius
        let chord = 2.0 * 2.25 * (std::f32::consts::PI / 12.0).sin();
        assert!(((a - b).length() - chord).abs() < 1e-4);
    }
}

#[test]
fn info_grid_has_two_rows_of_six() {
    let front: Vec<Vec3> = ZODIAC_ORDER[..6].iter().map(|&s| info_grid_position(s)).collect();
    let back: Vec<Vec3> = ZODIAC_ORDER[6..].iter().map(|&s| info_grid_position(s)).collect();
    assert!(front.iter().all(|p| p.z == 0.3 && p.y == 0.0));
    assert!(back.iter().all(|p| p.z == -0.4 && p.y == 0.25));
    assert_eq!(front[0].x, -1.5);
    assert_eq!(back[5].x, 1.5);
}
