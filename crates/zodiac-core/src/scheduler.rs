//! Per-scene timers driven by the frame clock.
//!
//! Scenes never touch `setTimeout`: every delay (transition completion,
//! bubble auto-hide, periodic greeting re-roll, loading fade) is registered
//! here and surfaces as an event from [`Scheduler::poll`]. Tearing the scene
//! down clears everything, so nothing fires into a disposed scene.

use smallvec::SmallVec;

pub type TimerId = u64;

#[derive(Clone, Debug)]
struct Timer<K> {
    id: TimerId,
    due_ms: f64,
    /// Re-arm period for intervals.
    every_ms: Option<f64>,
    kind: K,
}

#[derive(Clone, Debug)]
pub struct Scheduler<K> {
    timers: Vec<Timer<K>>,
    next_id: TimerId,
    torn_down: bool,
}

impl<K: Clone> Scheduler<K> {
    pub fn new() -> Self {
        Self {
            timers: Vec::new(),
            next_id: 1,
            torn_down: false,
        }
    }

    /// Number of pending timers and intervals.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Fire `kind` once at `now_ms + delay_ms`.
    pub fn set_timeout(&mut self, kind: K, delay_ms: f64, now_ms: f64) -> Option<TimerId> {
        self.insert(kind, now_ms + delay_ms.max(0.0), None)
    }

    /// Fire `kind` every `period_ms`, first at `now_ms + period_ms`.
    pub fn set_interval(&mut self, kind: K, period_ms: f64, now_ms: f64) -> Option<TimerId> {
        let period = period_ms.max(1.0);
        self.insert(kind, now_ms + period, Some(period))
    }

    fn insert(&mut self, kind: K, due_ms: f64, every_ms: Option<f64>) -> Option<TimerId> {
        if self.torn_down {
            log::warn!("[scheduler] timer requested after teardown; ignored");
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            due_ms,
            every_ms,
            kind,
        });
        Some(id)
    }

    pub fn clear(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        before != self.timers.len()
    }

    /// Drop every timer matching `pred`.
    pub fn clear_where(&mut self, mut pred: impl FnMut(&K) -> bool) {
        self.timers.retain(|t| !pred(&t.kind));
    }

    /// Collect the kinds due at `now_ms`, earliest first.
    ///
    /// An interval fires at most once per poll even if several periods
    /// elapsed (a backgrounded tab must not burst on return).
    pub fn poll(&mut self, now_ms: f64) -> SmallVec<[K; 4]> {
        let mut due: SmallVec<[(f64, TimerId, K); 4]> = SmallVec::new();
        self.timers.retain_mut(|t| {
            if t.due_ms > now_ms {
                return true;
            }
            due.push((t.due_ms, t.id, t.kind.clone()));
            match t.every_ms {
                Some(period) => {
                    while t.due_ms <= now_ms {
                        t.due_ms += period;
                    }
                    true
                }
                None => false,
            }
        });
        due.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        due.into_iter().map(|(_, _, kind)| kind).collect()
    }

    /// Clear all timers and refuse new ones.
    pub fn teardown(&mut self) {
        if !self.timers.is_empty() {
            log::debug!("[scheduler] teardown cleared {} timer(s)", self.timers.len());
        }
        self.timers.clear();
        self.torn_down = true;
    }
}

impl<K: Clone> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}
