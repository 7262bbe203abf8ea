// Host-side tests for the speech bubble board.

use glam::Vec3;
use zodiac_core::bubble::{Anchor, BubbleBoard};
use zodiac_core::Camera;

fn camera() -> Camera {
    let mut cam = Camera::new(Vec3::new(0.0, 2.0, 6.0), 50.0);
    cam.set_viewport(800.0, 600.0);
    cam
}

#[test]
fn show_assigns_fresh_ids() {
    let mut board = BubbleBoard::new(0.4);
    let a = board.show(Anchor::Entity(0), "hi", Vec3::ZERO, 0.0);
    let b = board.show(Anchor::Entity(1), "yo", Vec3::X, 10.0);
    assert_ne!(a, b);
    assert_eq!(board.len(), 2);
    assert_eq!(board.get(b).map(|x| x.message.as_str()), Some("yo"));
    assert!(board.has_anchor(Anchor::Entity(1)));
}

#[test]
fn show_only_replaces_everything() {
    let mut board = BubbleBoard::new(0.4);
    board.show(Anchor::Entity(0), "a", Vec3::ZERO, 0.0);
    board.show(Anchor::Entity(1), "b", Vec3::ZERO, 0.0);
    let id = board.show_only(Anchor::Entity(2), "c", Vec3::ZERO, 5.0);
    assert_eq!(board.len(), 1);
    assert_eq!(board.iter().next().map(|b| b.id), Some(id));
}

#[test]
fn dismiss_reports_whether_it_removed() {
    let mut board = BubbleBoard::new(0.4);
    let id = board.show(Anchor::Entity(0), "a", Vec3::ZERO, 0.0);
    assert!(board.dismiss(id));
    assert!(!board.dismiss(id));
    assert!(board.is_empty());
}

#[test]
fn tracking_projects_above_the_anchor() {
    let cam = camera();
    let mut board = BubbleBoard::new(0.4);
    let id = board.show(Anchor::Entity(0), "a", Vec3::ZERO, 0.0);
    board.track(&cam, 800.0, 600.0);
    let above = board.get(id).and_then(|b| b.screen_pos).expect("visible");
    let base = cam.world_to_screen(Vec3::ZERO, 800.0, 600.0).expect("visible");
    assert!(above.y < base.y);
    assert!((above.x - base.x).abs() < 1e-3);
}

#[test]
fn reanchor_follows_moving_entities() {
    let cam = camera();
    let mut board = BubbleBoard::new(0.4);
    let id = board.show(Anchor::Entity(3), "a", Vec3::ZERO, 0.0);
    board.reanchor(|Anchor::Entity(i)| (i == 3).then_some(Vec3::new(1.0, 0.0, 0.0)));
    board.track(&cam, 800.0, 600.0);
    let b = board.get(id).expect("bubble");
    assert_eq!(b.world_pos, Vec3::X);
    assert!(b.screen_pos.expect("visible").x > 400.0);
}

#[test]
fn anchors_behind_the_camera_hide() {
    let cam = camera();
    let mut board = BubbleBoard::new(0.4);
    let id = board.show(Anchor::Entity(0), "a", Vec3::new(0.0, 0.0, 20.0), 0.0);
    board.track(&cam, 800.0, 600.0);
    assert_eq!(board.get(id).and_then(|b| b.screen_pos), None);
}
