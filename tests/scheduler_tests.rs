// Host-side tests for scene timers, the model cache and load progress.

use std::rc::Rc;
use zodiac_core::assets::{LoadProgress, ModelCache};
use zodiac_core::scheduler::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum T {
    A,
    B,
    Tick,
}

#[test]
fn timeouts_fire_once_in_due_order() {
    let mut s = Scheduler::new();
    s.set_timeout(T::B, 200.0, 0.0).expect("live");
    s.set_timeout(T::A, 100.0, 0.0).expect("live");
    assert!(s.poll(99.0).is_empty());
    assert_eq!(s.poll(250.0).as_slice(), &[T::A, T::B]);
    assert!(s.poll(1_000.0).is_empty());
    assert_eq!(s.pending(), 0);
}

#[test]
fn interval_fires_once_per_poll_without_burst() {
    let mut s = Scheduler::new();
    s.set_interval(T::Tick, 100.0, 0.0);
    assert_eq!(s.poll(100.0).as_slice(), &[T::Tick]);
    // a long stall does not replay missed periods
    assert_eq!(s.poll(1_050.0).as_slice(), &[T::Tick]);
    assert!(s.poll(1_099.0).is_empty());
    assert_eq!(s.poll(1_100.0).as_slice(), &[T::Tick]);
}

#[test]
fn clear_cancels_by_id_and_kind() {
    let mut s = Scheduler::new();
    let a = s.set_timeout(T::A, 10.0, 0.0).expect("live");
    s.set_timeout(T::B, 10.0, 0.0);
    s.set_interval(T::Tick, 5.0, 0.0);
    assert!(s.clear(a));
    assert!(!s.clear(a));
    s.clear_where(|k| *k == T::Tick);
    assert_eq!(s.poll(100.0).as_slice(), &[T::B]);
}

#[test]
fn teardown_refuses_new_timers() {
    let mut s = Scheduler::new();
    s.set_interval(T::Tick, 5.0, 0.0);
    s.teardown();
    assert!(s.is_torn_down());
    assert_eq!(s.pending(), 0);
    assert!(s.set_timeout(T::A, 1.0, 0.0).is_none());
    assert!(s.poll(1_000.0).is_empty());
}

#[test]
fn templates_are_built_once_and_shared() {
    let mut cache: ModelCache<Vec<u32>> = ModelCache::new();
    let mut builds = 0;
    let a = cache.template("/models/tiger.glb", |_| {
        builds += 1;
        vec![1, 2, 3]
    });
    let b = cache.template("/models/tiger.glb", |_| {
        builds += 1;
        vec![9]
    });
    assert_eq!(builds, 1);
    assert!(Rc::ptr_eq(&a, &b));
    assert!(cache.contains("/models/tiger.glb"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn each_url_gets_its_own_template() {
    let mut cache: ModelCache<String> = ModelCache::default();
    let dog = cache.template("/models/dog.glb", |url| url.to_string());
    let pig = cache.template("/models/pig.glb", |url| url.to_string());
    assert!(!Rc::ptr_eq(&dog, &pig));
    assert_eq!(pig.as_str(), "/models/pig.glb");
    assert_eq!(cache.len(), 2);
}

#[test]
fn load_progress_counts_to_one_hundred() {
    let mut p = LoadProgress::new(3);
    assert_eq!(p.percent(), 0);
    assert!(!p.mark_loaded());
    assert_eq!(p.percent(), 33);
    assert!(!p.mark_loaded());
    assert!(p.mark_loaded());
    assert_eq!(p.percent(), 100);
    // extra loads do not complete twice
    assert!(!p.mark_loaded());
    assert_eq!(p.loaded, 3);
}

#[test]
fn empty_load_is_already_done() {
    let p = LoadProgress::new(0);
    assert!(p.is_done());
    assert_eq!(p.percent(), 100);
}
