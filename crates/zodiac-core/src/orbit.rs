//! Turntable camera rig for the fortune page.
//!
//! The camera circles the model in the XY plane (Z is up on this page),
//! lingering while the model's front is in view and sweeping quickly round
//! the back. "Front" is the fixed window (90°, 270°) of the rig angle.

use crate::config::OrbitRigConfig;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};

#[derive(Clone, Debug)]
pub struct OrbitRig {
    config: OrbitRigConfig,
    angle: f32,
    enabled: bool,
}

impl OrbitRig {
    pub fn new(config: OrbitRigConfig) -> Self {
        Self {
            angle: config.start_angle,
            config,
            enabled: true,
        }
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn target(&self) -> Vec3 {
        self.config.target
    }

    /// Rig angle folded into `[0, 2π)`.
    #[inline]
    pub fn normalized_angle(&self) -> f32 {
        self.angle.rem_euclid(TAU)
    }

    #[inline]
    pub fn is_front_facing(&self) -> bool {
        let a = self.normalized_angle();
        a > FRAC_PI_2 && a < 3.0 * FRAC_PI_2
    }

    /// Angular speed for the current angle, in rad/s.
    pub fn angular_speed(&self) -> f32 {
        let multiplier = if self.is_front_facing() {
            self.config.front_multiplier
        } else {
            self.config.back_multiplier
        };
        self.config.base_speed * multiplier
    }

    /// Camera position for the current angle.
    pub fn camera_position(&self) -> Vec3 {
        let t = self.config.target;
        Vec3::new(
            t.x + self.angle.sin() * self.config.radius,
            t.y + self.angle.cos() * self.config.radius,
            t.z,
        )
    }

    /// Advance by `dt_sec`. Returns the new `(eye, target)` or `None` when
    /// the rig is disabled.
    pub fn update(&mut self, dt_sec: f32) -> Option<(Vec3, Vec3)> {
        if !self.enabled {
            return None;
        }
        self.angle += self.angular_speed() * dt_sec;
        Some((self.camera_position(), self.config.target))
    }
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self::new(OrbitRigConfig::default())
    }
}
