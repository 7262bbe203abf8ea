// Host-side tests for the fortune page turntable rig.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use zodiac_core::config::OrbitRigConfig;
use zodiac_core::orbit::OrbitRig;

#[test]
fn starts_behind_the_model_facing_front() {
    let rig = OrbitRig::default();
    assert_eq!(rig.angle(), PI);
    assert!(rig.is_front_facing());
    let eye = rig.camera_position();
    // target (0, 0, 1), radius 5: sin(π) = 0, cos(π) = -1
    assert!((eye - Vec3::new(0.0, -5.0, 1.0)).length() < 1e-4);
}

#[test]
fn front_window_is_open_interval() {
    let mut config = OrbitRigConfig::default();
    config.start_angle = FRAC_PI_2;
    assert!(!OrbitRig::new(config.clone()).is_front_facing());
    config.start_angle = 3.0 * FRAC_PI_2;
    assert!(!OrbitRig::new(config.clone()).is_front_facing());
    config.start_angle = 0.0;
    assert!(!OrbitRig::new(config.clone()).is_front_facing());
    config.start_angle = PI + TAU;
    assert!(OrbitRig::new(config).is_front_facing());
}

#[test]
fn speeds_follow_multipliers() {
    let rig = OrbitRig::default();
    assert!((rig.angular_speed() - 0.3 * 1.5).abs() < 1e-6);
    let mut config = OrbitRigConfig::default();
    config.start_angle = 0.0;
    let back = OrbitRig::new(config);
    assert!((back.angular_speed() - 0.3 * 6.0).abs() < 1e-6);
}

#[test]
fn front_half_takes_four_times_as_long_as_back_half() {
    let mut rig = OrbitRig::default();
    let start = rig.angle();
    let dt = 0.001;
    let (mut front, mut back) = (0.0f32, 0.0f32);
    while rig.angle() < start + TAU {
        if rig.is_front_facing() {
            front += dt;
        } else {
            back += dt;
        }
        rig.update(dt);
    }
    let ratio = front / back;
    assert!((ratio - 4.0).abs() < 0.05, "ratio {ratio}");
}

#[test]
fn camera_stays_on_circle_in_xy_plane() {
    let mut rig = OrbitRig::default();
    for _ in 0..500 {
        let (eye, target) = rig.update(0.016).expect("enabled");
        assert_eq!(eye.z, target.z);
        assert!(((eye - target).length() - 5.0).abs() < 1e-3);
    }
}

#[test]
fn disabled_rig_does_not_move() {
    let mut rig = OrbitRig::default();
    rig.set_enabled(false);
    let before = rig.angle();
    assert!(rig.update(1.0).is_none());
    assert_eq!(rig.angle(), before);
}
