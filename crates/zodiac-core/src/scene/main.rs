//! Landing page: the twelve signs on a slowly turning ring around the horse.

use super::{AppContext, EntityRole, FrameTick, PlacedEntity, SceneEvent, SceneInput, Stage};
use crate::analytics::AnalyticsEvent;
use crate::bubble::Anchor;
use crate::camera::Camera;
use crate::catalog::{ZodiacSign, ZODIAC_ORDER};
use crate::config::TransitionConfig;
use crate::constants::*;
use crate::controls::{ControlLimits, OrbitControls};
use crate::i18n::Key;
use crate::input::Gesture;
use crate::layout::ring_placement;
use crate::route::{Page, Route};
use crate::scheduler::Scheduler;
use crate::transition::{CameraTransition, Spotlight};
use glam::{Quat, Vec3};
use smallvec::SmallVec;

/// Index of the center horse in `stage.entities`; ring signs follow in
/// traditional order.
pub const CENTER_HORSE: usize = 0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainTimer {
    HorseBubble,
    Complete(ZodiacSign),
    HideLoading,
}

#[derive(Debug)]
pub struct MainScene {
    pub stage: Stage,
    pub controls: OrbitControls,
    transition: CameraTransition,
    timers: Scheduler<MainTimer>,
    ring_angle: f32,
    horse_angle: f32,
    horse_line: usize,
    selected: Option<ZodiacSign>,
}

impl MainScene {
    pub fn new(ctx: &AppContext, now_ms: f64) -> Self {
        Self::with_transition(ctx, TransitionConfig::default(), now_ms)
    }

    pub fn with_transition(ctx: &AppContext, config: TransitionConfig, now_ms: f64) -> Self {
        let mut camera = Camera::new(MAIN_CAMERA_POSITION, MAIN_FOV_DEG);
        camera.look_at(Vec3::ZERO);
        let controls = OrbitControls::from_camera(&camera, ControlLimits::main_page(MAIN_CAMERA_POSITION));

        let mut entities = Vec::with_capacity(13);
        entities.push(PlacedEntity::new(
            EntityRole::MainHorse,
            MAIN_HORSE_MODEL_URL,
            CENTER_HORSE_POSITION,
            CENTER_HORSE_SCALE,
        ));
        for sign in ZODIAC_ORDER {
            let (pos, yaw) = ring_placement(sign);
            entities.push(
                PlacedEntity::new(EntityRole::Sign(sign), sign.model_url(), pos, RING_MODEL_SCALE).with_yaw(yaw),
            );
        }

        let mut stage = Stage::new(camera, entities, BUBBLE_OFFSET_MAIN);
        stage.bubbles.show(
            Anchor::Entity(CENTER_HORSE),
            ctx.translator.t(Key::HorseBubble1),
            CENTER_HORSE_POSITION,
            now_ms,
        );
        let mut timers = Scheduler::new();
        timers.set_interval(MainTimer::HorseBubble, HORSE_BUBBLE_INTERVAL_MS, now_ms);

        Self {
            stage,
            controls,
            transition: CameraTransition::new(config),
            timers,
            ring_angle: 0.0,
            horse_angle: 0.0,
            horse_line: 0,
            selected: None,
        }
    }

    pub fn transition(&self) -> &CameraTransition {
        &self.transition
    }

    pub fn selected(&self) -> Option<ZodiacSign> {
        self.selected
    }

    pub fn ring_angle(&self) -> f32 {
        self.ring_angle
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Entity index of `sign` on the ring.
    pub fn ring_index(sign: ZodiacSign) -> usize {
        sign.index() + 1
    }

    /// Current world position of `sign`, ring rotation included.
    pub fn sign_position(&self, sign: ZodiacSign) -> Vec3 {
        self.stage.entities[Self::ring_index(sign)].position
    }

    fn place_entities(&mut self) {
        let ring = Quat::from_rotation_y(self.ring_angle);
        for (i, entity) in self.stage.entities.iter_mut().enumerate() {
            match entity.role {
                EntityRole::Sign(sign) => {
                    let (pos, yaw) = ring_placement(sign);
                    entity.position = ring * pos;
                    entity.rotation = ring * Quat::from_rotation_y(yaw);
                    entity.scale = if self.stage.hovered == Some(i) {
                        RING_MODEL_SCALE * HOVER_SCALE
                    } else {
                        RING_MODEL_SCALE
                    };
                }
                _ => entity.rotation = Quat::from_rotation_y(self.horse_angle),
            }
        }
    }

    pub fn tick(&mut self, tick: FrameTick, ctx: &AppContext, out: &mut Vec<SceneEvent>) {
        if !self.transition.is_engaged() {
            self.ring_angle -= RING_SPIN_SPEED * tick.dt;
        }
        self.horse_angle += CENTER_HORSE_SPIN_SPEED * tick.dt;
        self.place_entities();

        if let Some(step) = self.transition.update(tick.now_ms) {
            self.stage.camera.eye = step.camera_pos;
            self.stage.camera.look_at(step.look_at);
            if step.finished {
                if let Some(sign) = self.selected {
                    let delay = self.transition.config().complete_delay_ms;
                    self.timers.set_timeout(MainTimer::Complete(sign), delay, tick.now_ms);
                }
            }
        } else if !self.transition.is_engaged() {
            self.controls.apply(&mut self.stage.camera);
        }

        for timer in self.timers.poll(tick.now_ms) {
            match timer {
                MainTimer::HorseBubble => {
                    self.horse_line ^= 1;
                    let key = if self.horse_line == 0 { Key::HorseBubble1 } else { Key::HorseBubble2 };
                    self.stage.bubbles.show_only(
                        Anchor::Entity(CENTER_HORSE),
                        ctx.translator.t(key),
                        CENTER_HORSE_POSITION,
                        tick.now_ms,
                    );
                }
                MainTimer::Complete(sign) => {
                    log::info!("[scene] selection complete: {sign}");
                    out.push(SceneEvent::Track(AnalyticsEvent::Select { sign, lang: ctx.lang }));
                    out.push(SceneEvent::Navigate(Route::new(ctx.lang, Page::Fortune(sign))));
                }
                MainTimer::HideLoading => out.push(SceneEvent::LoadingDone),
            }
        }

        self.stage.track_bubbles(|e| e.position);
    }

    /// Start the camera move toward `sign`. Ignored while a selection is
    /// already being handled.
    pub fn select(&mut self, sign: ZodiacSign, now_ms: f64) -> bool {
        if self.transition.is_engaged() {
            log::debug!("[scene] {sign} ignored; transition in progress");
            return false;
        }
        let pos = self.sign_position(sign);
        let cam = &self.stage.camera;
        if !self.transition.start(pos, cam.eye, cam.target, now_ms) {
            return false;
        }
        log::info!("[scene] selected {sign}");
        self.selected = Some(sign);
        self.controls.enabled = false;
        self.stage.hovered = None;
        self.stage.bubbles.clear();
        self.timers.clear_where(|t| *t == MainTimer::HorseBubble);
        true
    }

    pub fn input(&mut self, input: SceneInput, now_ms: f64) {
        if let SceneInput::Wheel(notches) = input {
            self.controls.dolly(notches);
            return;
        }
        for gesture in self.stage.gestures(&input) {
            match gesture {
                Gesture::Drag(d) => self.controls.rotate(d.x, d.y),
                Gesture::Hover(p) if !self.transition.is_engaged() => {
                    self.stage.hovered = self
                        .stage
                        .pick(p)
                        .filter(|&i| self.stage.entities[i].sign().is_some());
                }
                Gesture::Click(p) => {
                    let sign = self.stage.pick(p).and_then(|i| self.stage.entities[i].sign());
                    if let Some(sign) = sign {
                        self.select(sign, now_ms);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn model_loaded(&mut self, now_ms: f64, out: &mut Vec<SceneEvent>) {
        if self.stage.model_loaded(out) {
            self.timers.set_timeout(MainTimer::HideLoading, LOADING_FADE_DELAY_MS, now_ms);
        }
    }

    pub fn spotlights(&self) -> SmallVec<[Spotlight; 2]> {
        let mut lights = SmallVec::new();
        lights.push(Spotlight {
            position: Vec3::new(0.0, SPOTLIGHT_HEIGHT, 0.0),
            target: Vec3::ZERO,
            intensity: SPOTLIGHT_PEAK_INTENSITY,
        });
        let selection = self.transition.spotlight();
        if selection.intensity > 0.0 {
            lights.push(selection);
        }
        lights
    }

    pub fn teardown(&mut self) {
        self.timers.teardown();
        self.stage.bubbles.clear();
    }
}
