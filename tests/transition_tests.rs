// Host-side tests for the selection camera move on the main page.

use glam::Vec3;
use proptest::prelude::*;
use zodiac_core::config::{AppConfig, TransitionConfig};
use zodiac_core::easing::{ease_out_cubic, progress};
use zodiac_core::i18n::Language;
use zodiac_core::route::{Page, Route};
use zodiac_core::scene::{AppContext, FrameTick, MainScene, SceneEvent};
use zodiac_core::transition::CameraTransition;
use zodiac_core::ZodiacSign;

const FRAME_MS: f64 = 16.0;

fn approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

fn context() -> AppContext {
    AppContext::new(Language::Ko, AppConfig::default())
}

#[test]
fn ease_out_cubic_endpoints_and_midpoint() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    // clamped outside [0, 1]
    assert_eq!(ease_out_cubic(-1.0), 0.0);
    assert_eq!(ease_out_cubic(2.0), 1.0);
}

#[test]
fn ease_out_cubic_is_monotonic() {
    let mut prev = 0.0;
    for i in 0..=100 {
        let v = ease_out_cubic(i as f32 / 100.0);
        assert!(v >= prev);
        prev = v;
    }
}

proptest! {
    #[test]
    fn ease_out_cubic_never_decreases(a in 0f32..=1.0, b in 0f32..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ease_out_cubic(lo) <= ease_out_cubic(hi));
        prop_assert!(ease_out_cubic(lo) >= lo - 1e-6);
    }
}

#[test]
fn progress_handles_zero_duration() {
    assert_eq!(progress(0.0, 0.0), 1.0);
    assert_eq!(progress(600.0, 1200.0), 0.5);
    assert_eq!(progress(5000.0, 1200.0), 1.0);
}

#[test]
fn framing_pose_sits_outside_the_ring() {
    let t = CameraTransition::default();
    let (camera, look_at) = t.framing_pose(Vec3::new(2.25, 0.0, 0.0));
    assert!(approx(look_at, Vec3::new(2.25, 0.5, 0.0)));
    let polar = 10f32.to_radians();
    let expected = Vec3::new(2.25 + 4.0 * polar.cos(), 0.5 + 4.0 * polar.sin(), 0.0);
    assert!(approx(camera, expected));
}

#[test]
fn framing_pose_at_origin_falls_back_to_plus_z() {
    let t = CameraTransition::default();
    let (camera, _) = t.framing_pose(Vec3::ZERO);
    assert!(camera.z > 0.0);
    assert!(camera.x.abs() < 1e-6);
}

#[test]
fn transition_interpolates_and_finishes_once() {
    let mut t = CameraTransition::default();
    let start_eye = Vec3::new(0.0, 8.0, 12.0);
    assert!(t.start(Vec3::new(2.25, 0.0, 0.0), start_eye, Vec3::ZERO, 1000.0));
    assert!(t.is_animating());

    let first = t.update(1000.0).expect("animating");
    assert!(approx(first.camera_pos, start_eye));
    assert_eq!(first.spotlight.intensity, 0.0);
    assert!(!first.finished);

    let last = t.update(2200.0).expect("final tick");
    assert!(last.finished);
    assert!(approx(last.camera_pos, t.state().target_camera_pos));
    assert!((last.spotlight.intensity - 500.0).abs() < 1e-3);
    assert_eq!(last.spotlight.position.y, 8.0);

    // no further steps until reset
    assert!(t.update(2300.0).is_none());
    assert!(t.is_engaged());
}

#[test]
fn second_selection_is_ignored_while_engaged() {
    let mut t = CameraTransition::default();
    assert!(t.start(Vec3::X, Vec3::Z * 10.0, Vec3::ZERO, 0.0));
    assert!(!t.start(Vec3::NEG_X, Vec3::Z * 10.0, Vec3::ZERO, 100.0));
    t.update(2000.0);
    // arrived but not reset: still refusing
    assert!(!t.start(Vec3::NEG_X, Vec3::Z * 10.0, Vec3::ZERO, 2100.0));
    t.reset();
    assert!(t.start(Vec3::NEG_X, Vec3::Z * 10.0, Vec3::ZERO, 2200.0));
}

#[test]
fn zero_duration_finishes_on_first_tick() {
    let mut t = CameraTransition::new(TransitionConfig::default().with_duration_ms(0.0));
    t.start(Vec3::X, Vec3::Z * 10.0, Vec3::ZERO, 0.0);
    let step = t.update(0.0).expect("step");
    assert!(step.finished);
    assert_eq!(step.eased, 1.0);
}

#[test]
fn selecting_tiger_navigates_once_after_delay() {
    let ctx = context();
    let mut scene = MainScene::new(&ctx, 0.0);
    scene.stage.resize(800.0, 600.0);
    assert!(scene.select(ZodiacSign::Tiger, 0.0));

    let target = scene.transition().state().target_camera_pos;

    let mut navigations = Vec::new();
    let mut tracked = 0;
    let mut framed = false;
    let mut now = 0.0;
    while now <= 3000.0 {
        let mut out = Vec::new();
        scene.tick(
            FrameTick {
                now_ms: now,
                dt: (FRAME_MS / 1000.0) as f32,
            },
            &ctx,
            &mut out,
        );
        if now >= 1200.0 && !framed {
            assert!(approx(scene.stage.camera.eye, target));
            framed = true;
        }
        for e in out {
            match e {
                SceneEvent::Navigate(route) => navigations.push((now, route)),
                SceneEvent::Track(_) => tracked += 1,
                _ => {}
            }
        }
        now += FRAME_MS;
    }

    assert_eq!(navigations.len(), 1);
    let (at, route) = navigations[0];
    assert_eq!(route, Route::new(Language::Ko, Page::Fortune(ZodiacSign::Tiger)));
    assert!(at >= 1500.0 && at < 1500.0 + FRAME_MS, "navigated at {at}");
    assert_eq!(tracked, 1);
    assert!(framed);
}

#[test]
fn rat_click_during_ox_transition_is_ignored() {
    let ctx = context();
    let mut scene = MainScene::new(&ctx, 0.0);
    scene.stage.resize(800.0, 600.0);
    assert!(scene.select(ZodiacSign::Ox, 0.0));
    let target = scene.transition().state().target_camera_pos;
    let look_at = scene.transition().state().target_look_at;

    let mut navigations = Vec::new();
    let mut settled_at = None;
    let mut now = 0.0;
    while now <= 2500.0 {
        if (400.0..400.0 + FRAME_MS).contains(&now) {
            assert!(!scene.select(ZodiacSign::Rat, now));
        }
        let mut out = Vec::new();
        scene.tick(
            FrameTick {
                now_ms: now,
                dt: (FRAME_MS / 1000.0) as f32,
            },
            &ctx,
            &mut out,
        );
        if now >= 1200.0 && settled_at.is_none() {
            assert!(
                approx(scene.stage.camera.eye, target),
                "eye {:?} target {:?}",
                scene.stage.camera.eye,
                target
            );
            settled_at = Some(now);
        }
        for e in out {
            if let SceneEvent::Navigate(route) = e {
                navigations.push((now, route));
            }
        }
        now += FRAME_MS;
    }

    assert!(settled_at.is_some());
    assert_eq!(scene.selected(), Some(ZodiacSign::Ox));
    assert!(approx(scene.transition().state().target_camera_pos, target));
    assert!(approx(scene.transition().state().target_look_at, look_at));
    assert_eq!(navigations.len(), 1);
    let (at, route) = navigations[0];
    assert_eq!(route, Route::new(Language::Ko, Page::Fortune(ZodiacSign::Ox)));
    assert!(at >= 1500.0, "navigated at {at}");
}

#[test]
fn selection_targets_the_rotated_ring_position() {
    let ctx = context();
    let mut scene = MainScene::new(&ctx, 0.0);
    for i in 0..60 {
        let mut out = Vec::new();
        scene.tick(
            FrameTick {
                now_ms: i as f64 * FRAME_MS,
                dt: 0.016,
            },
            &ctx,
            &mut out,
        );
    }
    assert!(scene.ring_angle() < 0.0);
    let pos = scene.sign_position(ZodiacSign::Dragon);
    scene.select(ZodiacSign::Dragon, 1000.0);
    let expected = scene.transition().framing_pose(pos).1;
    assert!(approx(scene.transition().state().target_look_at, expected));
}

#[test]
fn ring_stops_while_transition_runs() {
    let ctx = context();
    let mut scene = MainScene::new(&ctx, 0.0);
    scene.select(ZodiacSign::Pig, 0.0);
    let before = scene.ring_angle();
    let mut out = Vec::new();
    scene.tick(FrameTick { now_ms: 16.0, dt: 0.5 }, &ctx, &mut out);
    assert_eq!(scene.ring_angle(), before);
}

#[test]
fn selection_disables_controls_and_clears_bubbles() {
    let ctx = context();
    let mut scene = MainScene::new(&ctx, 0.0);
    assert_eq!(scene.stage.bubbles.len(), 1);
    scene.select(ZodiacSign::Snake, 0.0);
    assert!(scene.stage.bubbles.is_empty());
    assert!(!scene.controls.enabled);
}
