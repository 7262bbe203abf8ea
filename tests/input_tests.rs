// Host-side tests for pointer gestures and ray picking.

use glam::{Vec2, Vec3};
use proptest::prelude::*;
use zodiac_core::input::{pick_nearest, ray_sphere, Gesture, PointerTracker};

#[test]
fn ray_sphere_intersection_basic() {
    // Ray from origin pointing in +Z direction
    let ray_origin = Vec3::ZERO;
    let ray_dir = Vec3::Z;

    // Sphere at (0, 0, 5) with radius 2
    let t = ray_sphere(ray_origin, ray_dir, Vec3::new(0.0, 0.0, 5.0), 2.0).expect("hit");
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_intersection_miss() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(5.0, 0.0, 5.0), 1.0);
    assert!(hit.is_none());
}

#[test]
fn ray_sphere_behind_origin_is_ignored() {
    let hit = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0);
    assert!(hit.is_none());
}

#[test]
fn pick_nearest_prefers_closest_hit() {
    let spheres = [
        (Vec3::new(0.0, 0.0, 10.0), 1.0),
        (Vec3::new(0.0, 0.0, 4.0), 1.0),
        (Vec3::new(3.0, 0.0, 2.0), 1.0),
    ];
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::Z, spheres), Some(1));
    assert_eq!(pick_nearest(Vec3::ZERO, Vec3::NEG_Z, spheres), None);
}

#[test]
fn small_wobble_is_still_a_click() {
    let mut tracker = PointerTracker::default();
    tracker.down(Vec2::new(10.0, 10.0));
    assert_eq!(tracker.moved(Vec2::new(12.0, 11.0)), [None, None]);
    assert_eq!(tracker.up(Vec2::new(12.0, 11.0)), Gesture::Click(Vec2::new(12.0, 11.0)));
}

#[test]
fn crossing_threshold_starts_drag_once() {
    let mut tracker = PointerTracker::default();
    tracker.down(Vec2::new(0.0, 0.0));
    let first = tracker.moved(Vec2::new(5.0, 0.0));
    assert_eq!(
        first,
        [Some(Gesture::DragStart), Some(Gesture::Drag(Vec2::new(5.0, 0.0)))]
    );
    assert!(tracker.is_dragging());
    let second = tracker.moved(Vec2::new(7.0, 1.0));
    assert_eq!(second, [Some(Gesture::Drag(Vec2::new(2.0, 1.0))), None]);
    assert_eq!(tracker.up(Vec2::new(7.0, 1.0)), Gesture::DragEnd);
    assert!(!tracker.is_dragging());
}

#[test]
fn moving_without_button_hovers() {
    let mut tracker = PointerTracker::default();
    let p = Vec2::new(40.0, 30.0);
    assert_eq!(tracker.moved(p), [Some(Gesture::Hover(p)), None]);
}

proptest! {
    #[test]
    fn moves_inside_threshold_never_drag(dx in -2.5f32..2.5, dy in -2.5f32..2.5) {
        let mut tracker = PointerTracker::default();
        let start = Vec2::new(100.0, 100.0);
        tracker.down(start);
        let end = start + Vec2::new(dx, dy);
        prop_assert_eq!(tracker.moved(end), [None, None]);
        prop_assert_eq!(tracker.up(end), Gesture::Click(end));
    }

    #[test]
    fn drag_deltas_sum_to_displacement(steps in prop::collection::vec((-20f32..20.0, -20f32..20.0), 1..20)) {
        let mut tracker = PointerTracker::default();
        tracker.down(Vec2::ZERO);
        let mut pos = Vec2::ZERO;
        let mut total = Vec2::ZERO;
        for (dx, dy) in steps {
            pos += Vec2::new(dx, dy);
            for g in tracker.moved(pos).into_iter().flatten() {
                if let Gesture::Drag(d) = g {
                    total += d;
                }
            }
        }
        if tracker.is_dragging() {
            prop_assert!((total - pos).length() < 1e-3);
        } else {
            prop_assert_eq!(total, Vec2::ZERO);
        }
    }
}
