//! Typed configuration for the animated components and the app shell.

use crate::constants::*;
use crate::error::{ZodiacError, ZodiacResult};
use glam::Vec3;

/// Tuning for the selection camera transition.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionConfig {
    pub duration_ms: f64,
    pub complete_delay_ms: f64,
    pub camera_distance: f32,
    pub polar_deg: f32,
    pub look_at_height: f32,
    pub spotlight_peak: f32,
    pub spotlight_height: f32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: TRANSITION_DURATION_MS,
            complete_delay_ms: TRANSITION_COMPLETE_DELAY_MS,
            camera_distance: TRANSITION_CAMERA_DISTANCE,
            polar_deg: TRANSITION_POLAR_DEG,
            look_at_height: TRANSITION_LOOK_AT_HEIGHT,
            spotlight_peak: SPOTLIGHT_PEAK_INTENSITY,
            spotlight_height: SPOTLIGHT_HEIGHT,
        }
    }
}

impl TransitionConfig {
    /// Set the transition duration; negative values become zero.
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    pub fn with_complete_delay_ms(mut self, delay_ms: f64) -> Self {
        self.complete_delay_ms = delay_ms.max(0.0);
        self
    }
}

/// Tuning for the turntable rig on the fortune page.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRigConfig {
    pub start_angle: f32,
    pub base_speed: f32,
    pub front_multiplier: f32,
    pub back_multiplier: f32,
    pub radius: f32,
    pub target: Vec3,
}

impl Default for OrbitRigConfig {
    fn default() -> Self {
        Self {
            start_angle: ORBIT_START_ANGLE,
            base_speed: ORBIT_BASE_SPEED,
            front_multiplier: ORBIT_FRONT_MULTIPLIER,
            back_multiplier: ORBIT_BACK_MULTIPLIER,
            radius: ORBIT_RADIUS,
            target: ORBIT_TARGET,
        }
    }
}

impl OrbitRigConfig {
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius.max(0.0);
        self
    }

    pub fn with_target(mut self, target: Vec3) -> Self {
        self.target = target;
        self
    }
}

/// Timing and placement for greeting bubbles.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleConfig {
    pub reroll_ms: f64,
    pub lifetime_ms: f64,
    pub max_bubbles: usize,
    pub offset: f32,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            reroll_ms: GREETING_REROLL_MS,
            lifetime_ms: GREETING_LIFETIME_MS,
            max_bubbles: GREETING_MAX_BUBBLES,
            offset: BUBBLE_OFFSET_GROUP,
        }
    }
}

impl BubbleConfig {
    /// Cap on simultaneous bubbles (at least one).
    pub fn with_max_bubbles(mut self, max: usize) -> Self {
        self.max_bubbles = max.max(1);
        self
    }
}

/// Session-wide settings read from the page URL query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Start the fortune page in debug mode (free camera, helpers).
    pub debug: bool,
    /// Seed for the group-photo layout; unseeded when `None`.
    pub layout_seed: Option<u64>,
    /// Forward analytics events to the page's tracker.
    pub analytics: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            layout_seed: None,
            analytics: true,
        }
    }
}

impl AppConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_layout_seed(mut self, seed: u64) -> Self {
        self.layout_seed = Some(seed);
        self
    }

    /// Parse `?debug=1&seed=42&analytics=0`. Unknown keys are ignored.
    pub fn from_query(query: &str) -> ZodiacResult<Self> {
        let mut cfg = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "debug" => cfg.debug = parse_flag(key, value)?,
                "analytics" => cfg.analytics = parse_flag(key, value)?,
                "seed" => {
                    let seed = value.parse::<u64>().map_err(|_| invalid(key, value))?;
                    cfg.layout_seed = Some(seed);
                }
                _ => {}
            }
        }
        Ok(cfg)
    }
}

fn parse_flag(key: &str, value: &str) -> ZodiacResult<bool> {
    match value {
        "" | "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ZodiacError {
    ZodiacError::InvalidConfig {
        key: key.to_string(),
        value: value.to_string(),
    }
}
