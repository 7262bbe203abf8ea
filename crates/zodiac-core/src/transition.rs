//! Selection camera transition for the main scene.
//!
//! When an animal on the ring is picked the camera flies from wherever the
//! user left it to a pose just outside the animal, looking back at it, while
//! a spotlight fades in above it. The controller only does the math; the
//! owning scene decides when the move counts as "complete" (it schedules the
//! navigation a short delay after [`TransitionStep::finished`]).

use crate::config::TransitionConfig;
use crate::easing::{ease_out_cubic, progress};
use glam::Vec3;

/// Spotlight state driven in lockstep with the camera.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spotlight {
    pub position: Vec3,
    pub target: Vec3,
    pub intensity: f32,
}

/// Transient record of one camera move.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionState {
    pub is_animating: bool,
    pub start_time_ms: f64,
    pub start_camera_pos: Vec3,
    pub target_camera_pos: Vec3,
    pub start_look_at: Vec3,
    pub target_look_at: Vec3,
    pub target_entity_position: Vec3,
}

/// Output of one animation tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionStep {
    pub camera_pos: Vec3,
    pub look_at: Vec3,
    pub spotlight: Spotlight,
    pub eased: f32,
    /// True on exactly one tick: the one where progress reached 1.
    pub finished: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Animating,
    /// Reached the target; stays here until `reset`.
    Arrived,
}

#[derive(Clone, Debug)]
pub struct CameraTransition {
    config: TransitionConfig,
    state: TransitionState,
    phase: Phase,
    last_spotlight: Spotlight,
}

impl CameraTransition {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            config,
            state: TransitionState::default(),
            phase: Phase::Idle,
            last_spotlight: Spotlight::default(),
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase == Phase::Animating
    }

    /// True from `start` until `reset`: a selection is being handled.
    #[inline]
    pub fn is_engaged(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Spotlight as of the last tick (dark while idle).
    pub fn spotlight(&self) -> Spotlight {
        self.last_spotlight
    }

    /// Camera pose framing `entity_pos` from outside the ring.
    ///
    /// Returns `(camera_target, look_at_target)`.
    pub fn framing_pose(&self, entity_pos: Vec3) -> (Vec3, Vec3) {
        let mut look_at = entity_pos;
        look_at.y = self.config.look_at_height;
        let dir = Vec3::new(look_at.x, 0.0, look_at.z)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        let polar = self.config.polar_deg.to_radians();
        let horizontal = self.config.camera_distance * polar.cos();
        let height = look_at.y + self.config.camera_distance * polar.sin();
        let camera = Vec3::new(
            look_at.x + dir.x * horizontal,
            height,
            look_at.z + dir.z * horizontal,
        );
        (camera, look_at)
    }

    /// Begin a move toward `entity_pos`.
    ///
    /// Ignored (returns `false`) while another selection is still being
    /// handled; there is no queue and no interruption.
    pub fn start(&mut self, entity_pos: Vec3, camera_pos: Vec3, look_at: Vec3, now_ms: f64) -> bool {
        if self.phase != Phase::Idle {
            log::debug!("[transition] selection ignored; transition in progress");
            return false;
        }
        let (target_camera_pos, target_look_at) = self.framing_pose(entity_pos);
        self.state = TransitionState {
            is_animating: true,
            start_time_ms: now_ms,
            start_camera_pos: camera_pos,
            target_camera_pos,
            start_look_at: look_at,
            target_look_at,
            target_entity_position: target_look_at,
        };
        self.phase = Phase::Animating;
        true
    }

    /// Advance the move. Returns `None` when no move is animating.
    pub fn update(&mut self, now_ms: f64) -> Option<TransitionStep> {
        if self.phase != Phase::Animating {
            return None;
        }
        let s = &self.state;
        let p = progress(now_ms - s.start_time_ms, self.config.duration_ms);
        let eased = ease_out_cubic(p);
        let camera_pos = s.start_camera_pos.lerp(s.target_camera_pos, eased);
        let look_at = s.start_look_at.lerp(s.target_look_at, eased);
        let target = s.target_entity_position;
        let spotlight = Spotlight {
            position: Vec3::new(target.x, self.config.spotlight_height, target.z),
            target: Vec3::new(target.x, 0.0, target.z),
            intensity: eased * self.config.spotlight_peak,
        };
        self.last_spotlight = spotlight;

        let finished = p >= 1.0;
        if finished {
            self.state.is_animating = false;
            self.phase = Phase::Arrived;
        }
        Some(TransitionStep {
            camera_pos,
            look_at,
            spotlight,
            eased,
            finished,
        })
    }

    /// Forget the current selection so a new one can start.
    pub fn reset(&mut self) {
        self.state = TransitionState::default();
        self.phase = Phase::Idle;
        self.last_spotlight = Spotlight::default();
    }
}

impl Default for CameraTransition {
    fn default() -> Self {
        Self::new(TransitionConfig::default())
    }
}
