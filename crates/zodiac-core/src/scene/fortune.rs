//! Fortune page: one animated model under a turntable camera.

use super::{AppContext, EntityRole, FrameTick, PlacedEntity, SceneEvent, SceneInput, Stage};
use crate::camera::Camera;
use crate::catalog::ZodiacSign;
use crate::config::OrbitRigConfig;
use crate::constants::*;
use crate::controls::{ControlLimits, OrbitControls};
use crate::fortune_card::FortuneCard;
use crate::input::Gesture;
use crate::orbit::OrbitRig;
use crate::scheduler::Scheduler;
use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FortuneTimer {
    HideLoading,
}

/// Where the model stands; a few models are authored off-center.
pub fn model_position(sign: ZodiacSign) -> Vec3 {
    match sign {
        ZodiacSign::Monkey => Vec3::new(-5.0, 2.5, -1.5),
        ZodiacSign::Tiger => Vec3::new(0.0, 0.5, -1.5),
        _ => Vec3::new(0.0, 2.5, -1.5),
    }
}

#[derive(Debug)]
pub struct FortuneScene {
    pub stage: Stage,
    pub rig: OrbitRig,
    pub controls: OrbitControls,
    sign: ZodiacSign,
    card: FortuneCard,
    timers: Scheduler<FortuneTimer>,
    debug: bool,
    playing: bool,
    idle_phase: f32,
}

impl FortuneScene {
    pub fn new(sign: ZodiacSign, ctx: &AppContext, _now_ms: f64) -> Self {
        let rig = OrbitRig::new(OrbitRigConfig::default());
        let mut camera = Camera::new(FORTUNE_CAMERA_POSITION, FORTUNE_FOV_DEG)
            .with_up(Vec3::Z)
            .with_clip(0.01, 1000.0);
        camera.look_at(rig.target());
        let mut controls = OrbitControls::from_camera(&camera, ControlLimits::default());
        controls.enabled = false;

        // Models are authored Y-up; this page is Z-up.
        let entity = PlacedEntity::new(
            EntityRole::Sign(sign),
            sign.animated_model_url(),
            model_position(sign),
            FORTUNE_MODEL_SCALE,
        )
        .with_rotation(Quat::from_rotation_x(FRAC_PI_2));

        let mut scene = Self {
            stage: Stage::new(camera, vec![entity], 0.0),
            rig,
            controls,
            sign,
            card: FortuneCard::build(sign, ctx.lang),
            timers: Scheduler::new(),
            debug: false,
            playing: true,
            idle_phase: 0.0,
        };
        if ctx.config.debug {
            scene.set_debug(true);
        }
        scene
    }

    pub fn sign(&self) -> ZodiacSign {
        self.sign
    }

    pub fn card(&self) -> &FortuneCard {
        &self.card
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Debug mode swaps the turntable for free controls.
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
        self.rig.set_enabled(!debug);
        self.controls.enabled = debug;
        if debug {
            self.controls.sync_from(&self.stage.camera);
        }
        log::info!("[scene] fortune debug mode {}", if debug { "on" } else { "off" });
    }

    pub fn tick(&mut self, tick: FrameTick, out: &mut Vec<SceneEvent>) {
        if let Some((eye, target)) = self.rig.update(tick.dt) {
            self.stage.camera.eye = eye;
            self.stage.camera.look_at(target);
        } else if self.controls.enabled {
            self.controls.apply(&mut self.stage.camera);
        }

        if self.playing {
            self.idle_phase += IDLE_BOB_SPEED * tick.dt;
        }
        let base = model_position(self.sign);
        if let Some(model) = self.stage.entities.first_mut() {
            model.position = base + Vec3::Z * (self.idle_phase.sin().abs() * IDLE_BOB_HEIGHT);
        }

        for timer in self.timers.poll(tick.now_ms) {
            match timer {
                FortuneTimer::HideLoading => out.push(SceneEvent::LoadingDone),
            }
        }
    }

    pub fn input(&mut self, input: SceneInput, out: &mut Vec<SceneEvent>) {
        match input {
            SceneInput::Key(key) => match key.as_str() {
                "r" | "R" | "ㄱ" => {
                    self.set_debug(!self.debug);
                    out.push(SceneEvent::DebugChanged(self.debug));
                }
                "1" => {
                    // stopping rewinds to the rest pose
                    self.playing = false;
                    self.idle_phase = 0.0;
                }
                "2" => self.playing = true,
                _ => {}
            },
            SceneInput::Wheel(notches) => self.controls.dolly(notches),
            other => {
                for gesture in self.stage.gestures(&other) {
                    if let Gesture::Drag(d) = gesture {
                        self.controls.rotate(d.x, d.y);
                    }
                }
            }
        }
    }

    pub fn model_loaded(&mut self, now_ms: f64, out: &mut Vec<SceneEvent>) {
        if self.stage.model_loaded(out) {
            self.timers.set_timeout(FortuneTimer::HideLoading, LOADING_FADE_DELAY_MS, now_ms);
        }
    }

    pub fn teardown(&mut self) {
        self.timers.teardown();
    }
}
