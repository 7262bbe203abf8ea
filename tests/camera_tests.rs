// Host-side tests for projection, picking rays and the orbit controls.

use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use zodiac_core::bubble::project_bubble;
use zodiac_core::camera::Camera;
use zodiac_core::controls::{ControlLimits, OrbitControls};

fn camera_800x600() -> Camera {
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 5.0), 45.0);
    cam.set_viewport(800.0, 600.0);
    cam
}

#[test]
fn target_projects_to_viewport_center() {
    let cam = camera_800x600();
    let p = cam.world_to_screen(Vec3::ZERO, 800.0, 600.0).expect("in front");
    assert!((p - Vec2::new(400.0, 300.0)).length() < 1e-3);
}

#[test]
fn screen_y_grows_downward() {
    let cam = camera_800x600();
    let above = cam.world_to_screen(Vec3::new(0.0, 1.0, 0.0), 800.0, 600.0).expect("in front");
    assert!(above.y < 300.0);
    let right = cam.world_to_screen(Vec3::new(1.0, 0.0, 0.0), 800.0, 600.0).expect("in front");
    assert!(right.x > 400.0);
}

#[test]
fn points_behind_camera_do_not_project() {
    let cam = camera_800x600();
    assert!(cam.world_to_screen(Vec3::new(0.0, 0.0, 10.0), 800.0, 600.0).is_none());
    assert!(project_bubble(&cam, Vec3::new(0.0, 0.0, 6.0), 0.4, 800.0, 600.0).is_none());
}

#[test]
fn center_ray_points_at_target() {
    let cam = camera_800x600();
    let (ro, rd) = cam.screen_to_world_ray(400.0, 300.0, 800.0, 600.0);
    assert_eq!(ro, cam.eye);
    assert!((rd - Vec3::NEG_Z).length() < 1e-4);
}

#[test]
fn ray_through_projected_pixel_passes_the_point() {
    let mut cam = Camera::new(Vec3::new(3.0, 4.0, 9.0), 50.0);
    cam.set_viewport(1024.0, 768.0);
    let world = Vec3::new(0.7, 0.3, -1.2);
    let px = cam.world_to_screen(world, 1024.0, 768.0).expect("in front");
    let (ro, rd) = cam.screen_to_world_ray(px.x, px.y, 1024.0, 768.0);
    let along = (world - ro).dot(rd);
    let closest = ro + rd * along;
    assert!((closest - world).length() < 1e-2);
}

#[test]
fn group_limits_clamp_zoom_and_tilt() {
    let mut cam = Camera::new(Vec3::new(0.0, 2.0, 8.0), 50.0);
    let mut controls = OrbitControls::from_camera(&cam, ControlLimits::group_photo());

    controls.dolly(-200.0);
    assert!((controls.distance() - 3.0).abs() < 1e-4);
    controls.dolly(200.0);
    assert!((controls.distance() - 15.0).abs() < 1e-4);

    controls.rotate(0.0, 10_000.0);
    assert!((controls.polar_angle() - FRAC_PI_4).abs() < 1e-4);
    controls.rotate(0.0, -10_000.0);
    assert!((controls.polar_angle() - FRAC_PI_2).abs() < 1e-4);

    controls.apply(&mut cam);
    assert!(((cam.eye - cam.target).length() - 15.0).abs() < 1e-3);
    // never below the floor plane
    assert!(cam.eye.y >= -1e-3);
}

#[test]
fn main_page_limits_follow_start_pose() {
    let eye = Vec3::new(0.0, 8.0, 12.0);
    let limits = ControlLimits::main_page(eye);
    let d = eye.length();
    assert!((limits.max_distance - d).abs() < 1e-4);
    assert!((limits.min_distance - d / 3.0).abs() < 1e-4);
    let base = (8.0 / d).acos();
    assert!(limits.min_polar < base && base < limits.max_polar);
}

#[test]
fn disabled_controls_ignore_input() {
    let cam = Camera::new(Vec3::new(0.0, 2.0, 8.0), 50.0);
    let mut controls = OrbitControls::from_camera(&cam, ControlLimits::group_photo());
    controls.enabled = false;
    let (d, p, a) = (controls.distance(), controls.polar_angle(), controls.azimuth_angle());
    controls.dolly(3.0);
    controls.rotate(50.0, 50.0);
    assert_eq!((d, p, a), (controls.distance(), controls.polar_angle(), controls.azimuth_angle()));
}

#[test]
fn z_up_controls_round_trip_the_pose() {
    let mut cam = Camera::new(Vec3::new(0.0, 5.0, 3.5), 50.0).with_up(Vec3::Z);
    cam.look_at(Vec3::new(0.0, 0.0, 1.0));
    let controls = OrbitControls::from_camera(&cam, ControlLimits::default());
    let before = cam.eye;
    controls.apply(&mut cam);
    assert!((cam.eye - before).length() < 1e-3);
}

#[test]
fn horizontal_drag_keeps_elevation() {
    let mut cam = Camera::new(Vec3::new(0.0, 2.0, 4.0), 50.0);
    let mut controls = OrbitControls::from_camera(&cam, ControlLimits::zodiac_info());
    let height = cam.eye.y;
    controls.rotate(120.0, 0.0);
    controls.apply(&mut cam);
    assert!((cam.eye.y - height).abs() < 1e-3);
    assert!(cam.eye.x.abs() > 0.1);
}
