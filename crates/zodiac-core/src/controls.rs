//! Drag-to-rotate / wheel-to-zoom camera controls around a target.
//!
//! Works in spherical coordinates about a configurable up axis so the same
//! controls serve the Y-up scenes and the Z-up fortune page.

use crate::camera::Camera;
use crate::constants::{
    MAIN_CONTROLS_DOWN_LIMIT_DEG, MAIN_CONTROLS_UP_LIMIT_DEG, ROTATE_SPEED, ZOOM_STEP,
};
use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

#[derive(Clone, Debug, PartialEq)]
pub struct ControlLimits {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub min_azimuth: f32,
    pub max_azimuth: f32,
}

impl Default for ControlLimits {
    fn default() -> Self {
        Self {
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            min_polar: 0.0,
            max_polar: PI,
            min_azimuth: f32::NEG_INFINITY,
            max_azimuth: f32::INFINITY,
        }
    }
}

impl ControlLimits {
    pub fn distance(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    pub fn polar(mut self, min: f32, max: f32) -> Self {
        self.min_polar = min.max(0.0);
        self.max_polar = max.min(PI);
        self
    }

    /// Main page: zoom in to a third of the start distance, tilt a little
    /// above and further below the start elevation.
    pub fn main_page(start_eye: Vec3) -> Self {
        let d = start_eye.length();
        let base = (start_eye.y / d).acos();
        Self::default().distance(d / 3.0, d).polar(
            base - MAIN_CONTROLS_UP_LIMIT_DEG.to_radians(),
            base + MAIN_CONTROLS_DOWN_LIMIT_DEG.to_radians(),
        )
    }

    pub fn group_photo() -> Self {
        Self::default().distance(3.0, 15.0).polar(FRAC_PI_4, FRAC_PI_2)
    }

    pub fn zodiac_info() -> Self {
        Self::default().distance(2.0, 8.0).polar(FRAC_PI_4, PI / 2.2)
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub enabled: bool,
    limits: ControlLimits,
    /// Rotates world space into controls space, where the up axis is +Y.
    to_local: Quat,
    radius: f32,
    polar: f32,
    azimuth: f32,
}

impl OrbitControls {
    /// Controls starting from the camera's current pose.
    pub fn from_camera(camera: &Camera, limits: ControlLimits) -> Self {
        let to_local = Quat::from_rotation_arc(camera.up.normalize(), Vec3::Y);
        let mut controls = Self {
            target: camera.target,
            enabled: true,
            limits,
            to_local,
            radius: 1.0,
            polar: 0.0,
            azimuth: 0.0,
        };
        controls.sync_from(camera);
        controls
    }

    pub fn limits(&self) -> &ControlLimits {
        &self.limits
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.polar
    }

    pub fn azimuth_angle(&self) -> f32 {
        self.azimuth
    }

    /// Re-read spherical coordinates after something else moved the camera.
    pub fn sync_from(&mut self, camera: &Camera) {
        self.target = camera.target;
        let offset = self.to_local * (camera.eye - camera.target);
        self.radius = offset.length().max(1e-4);
        self.polar = (offset.y / self.radius).clamp(-1.0, 1.0).acos();
        self.azimuth = offset.x.atan2(offset.z);
        self.clamp();
    }

    fn clamp(&mut self) {
        let l = &self.limits;
        self.radius = self.radius.clamp(l.min_distance.max(1e-4), l.max_distance.max(1e-4));
        self.polar = self.polar.clamp(l.min_polar.max(1e-4), l.max_polar.min(PI - 1e-4));
        if l.min_azimuth.is_finite() || l.max_azimuth.is_finite() {
            self.azimuth = self.azimuth.clamp(l.min_azimuth, l.max_azimuth);
        }
    }

    /// Drag by `(dx, dy)` pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.azimuth -= dx * ROTATE_SPEED;
        self.polar -= dy * ROTATE_SPEED;
        self.clamp();
    }

    /// Wheel by `notches` (positive zooms out).
    pub fn dolly(&mut self, notches: f32) {
        if !self.enabled {
            return;
        }
        self.radius *= ZOOM_STEP.powf(-notches);
        self.clamp();
    }

    /// Write the controlled pose into the camera.
    pub fn apply(&self, camera: &mut Camera) {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        let local = Vec3::new(self.radius * sp * sa, self.radius * cp, self.radius * sp * ca);
        camera.eye = self.target + self.to_local.inverse() * local;
        camera.target = self.target;
    }
}
