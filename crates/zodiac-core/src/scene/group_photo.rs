//! New Year group photo: a shuffled line-up with greeting bubbles.

use super::{AppContext, EntityRole, FrameTick, PlacedEntity, SceneEvent, SceneInput, Stage};
use crate::bubble::{Anchor, BubbleId};
use crate::camera::Camera;
use crate::config::BubbleConfig;
use crate::constants::*;
use crate::controls::{ControlLimits, OrbitControls};
use crate::i18n::new_year_messages;
use crate::input::Gesture;
use crate::layout::{generate_photo_layout, PhotoLayout};
use crate::scheduler::Scheduler;
use glam::Vec3;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupTimer {
    Reroll,
    Expire(BubbleId),
    HideLoading,
}

#[derive(Debug)]
pub struct GroupPhotoScene {
    pub stage: Stage,
    pub controls: OrbitControls,
    layout: PhotoLayout,
    config: BubbleConfig,
    timers: Scheduler<GroupTimer>,
    rng: StdRng,
}

impl GroupPhotoScene {
    pub fn new(ctx: &mut AppContext, now_ms: f64) -> Self {
        Self::with_config(ctx, BubbleConfig::default(), now_ms)
    }

    pub fn with_config(ctx: &mut AppContext, config: BubbleConfig, now_ms: f64) -> Self {
        let layout = generate_photo_layout(&mut ctx.rng);
        let rng = StdRng::seed_from_u64(ctx.rng.gen());

        let mut camera = Camera::new(GROUP_CAMERA_POSITION, GROUP_FOV_DEG);
        camera.look_at(Vec3::ZERO);
        let controls = OrbitControls::from_camera(&camera, ControlLimits::group_photo());

        let mut entities = Vec::with_capacity(13);
        entities.push(PlacedEntity::new(
            EntityRole::MainHorse,
            MAIN_HORSE_MODEL_URL,
            layout.main_position(),
            GROUP_MAIN_SCALE,
        ));
        entities.extend(layout.placements().map(|(sign, pos)| {
            PlacedEntity::new(EntityRole::Sign(sign), sign.model_url(), pos, GROUP_ANIMAL_SCALE)
        }));
        log::info!("[scene] group photo: main horse in slot {}", layout.main_slot);

        let mut timers = Scheduler::new();
        timers.set_interval(GroupTimer::Reroll, config.reroll_ms, now_ms);

        Self {
            stage: Stage::new(camera, entities, config.offset),
            controls,
            layout,
            config,
            timers,
            rng,
        }
    }

    pub fn layout(&self) -> &PhotoLayout {
        &self.layout
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    fn greet(&mut self, entity: usize, ctx: &AppContext, now_ms: f64) {
        let messages = new_year_messages(ctx.lang);
        let Some(message) = messages.choose(&mut self.rng) else {
            return;
        };
        let pos = self.stage.entities[entity].position;
        let id = self.stage.bubbles.show(Anchor::Entity(entity), *message, pos, now_ms);
        self.timers
            .set_timeout(GroupTimer::Expire(id), self.config.lifetime_ms, now_ms);
    }

    fn dismiss_all(&mut self) {
        self.stage.bubbles.clear();
        self.timers.clear_where(|t| matches!(t, GroupTimer::Expire(_)));
    }

    /// Replace every bubble with one greeting from `entity`.
    pub fn click_entity(&mut self, entity: usize, ctx: &AppContext, now_ms: f64) {
        self.dismiss_all();
        self.greet(entity, ctx, now_ms);
    }

    fn reroll(&mut self, ctx: &AppContext, now_ms: f64) {
        if self.stage.bubbles.len() >= self.config.max_bubbles {
            return;
        }
        let free: Vec<usize> = (0..self.stage.entities.len())
            .filter(|&i| !self.stage.bubbles.has_anchor(Anchor::Entity(i)))
            .collect();
        if let Some(&entity) = free.choose(&mut self.rng) {
            self.greet(entity, ctx, now_ms);
        }
    }

    pub fn tick(&mut self, tick: FrameTick, ctx: &AppContext, out: &mut Vec<SceneEvent>) {
        self.controls.apply(&mut self.stage.camera);
        for timer in self.timers.poll(tick.now_ms) {
            match timer {
                GroupTimer::Reroll => self.reroll(ctx, tick.now_ms),
                GroupTimer::Expire(id) => {
                    self.stage.bubbles.dismiss(id);
                }
                GroupTimer::HideLoading => out.push(SceneEvent::LoadingDone),
            }
        }
        self.stage.track_bubbles(|e| e.position);
    }

    pub fn input(&mut self, input: SceneInput, now_ms: f64, ctx: &AppContext) {
        if let SceneInput::Wheel(notches) = input {
            self.controls.dolly(notches);
            return;
        }
        for gesture in self.stage.gestures(&input) {
            match gesture {
                Gesture::DragStart => self.dismiss_all(),
                Gesture::Drag(d) => self.controls.rotate(d.x, d.y),
                Gesture::Click(p) => match self.stage.pick(p) {
                    Some(i) => self.click_entity(i, ctx, now_ms),
                    None => self.dismiss_all(),
                },
                _ => {}
            }
        }
    }

    pub fn model_loaded(&mut self, now_ms: f64, out: &mut Vec<SceneEvent>) {
        if self.stage.model_loaded(out) {
            self.timers.set_timeout(GroupTimer::HideLoading, LOADING_FADE_DELAY_MS, now_ms);
        }
    }

    pub fn teardown(&mut self) {
        self.timers.teardown();
        self.stage.bubbles.clear();
    }
}
