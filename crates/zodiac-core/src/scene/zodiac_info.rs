//! "What's my sign?" page: the twelve signs in a grid, each answering with
//! its birth years.

use super::{AppContext, EntityRole, FrameTick, PlacedEntity, SceneEvent, SceneInput, Stage};
use crate::bubble::Anchor;
use crate::camera::Camera;
use crate::catalog::{ZodiacSign, ZODIAC_ORDER};
use crate::constants::*;
use crate::controls::{ControlLimits, OrbitControls};
use crate::i18n::{Key, Language, Translator};
use crate::input::Gesture;
use crate::layout::{info_grid_position, info_red_horse_position};
use crate::scheduler::Scheduler;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoTimer {
    HideLoading,
}

/// Bubble text for a sign: its name and every birth year on record.
pub fn born_in_message(sign: ZodiacSign, lang: Language) -> String {
    let years: Vec<String> = sign.years().iter().map(u16::to_string).collect();
    Translator::new(lang).t_with(
        Key::ZodiacBornIn,
        &[("name", sign.name(lang)), ("years", &years.join(", "))],
    )
}

#[derive(Debug)]
pub struct ZodiacInfoScene {
    pub stage: Stage,
    pub controls: OrbitControls,
    timers: Scheduler<InfoTimer>,
}

impl ZodiacInfoScene {
    pub fn new(_ctx: &AppContext, _now_ms: f64) -> Self {
        let mut camera = Camera::new(INFO_CAMERA_POSITION, INFO_FOV_DEG);
        camera.look_at(Vec3::ZERO);
        let controls = OrbitControls::from_camera(&camera, ControlLimits::zodiac_info());

        let mut entities: Vec<PlacedEntity> = ZODIAC_ORDER
            .iter()
            .map(|&sign| {
                PlacedEntity::new(
                    EntityRole::Sign(sign),
                    sign.model_url(),
                    info_grid_position(sign),
                    INFO_ANIMAL_SCALE,
                )
            })
            .collect();
        entities.push(PlacedEntity::new(
            EntityRole::RedHorse,
            MAIN_HORSE_MODEL_URL,
            info_red_horse_position(),
            INFO_RED_HORSE_SCALE,
        ));

        Self {
            stage: Stage::new(camera, entities, BUBBLE_OFFSET_INFO),
            controls,
            timers: Scheduler::new(),
        }
    }

    /// Show the answer for `entity`, replacing any open bubble.
    pub fn click_entity(&mut self, entity: usize, ctx: &AppContext, now_ms: f64) {
        let Some(placed) = self.stage.entities.get(entity) else {
            return;
        };
        let message = match placed.role {
            EntityRole::Sign(sign) => born_in_message(sign, ctx.lang),
            _ => ctx.translator.t(Key::ZodiacFortuneExplain).to_string(),
        };
        let pos = placed.position;
        self.stage
            .bubbles
            .show_only(Anchor::Entity(entity), message, pos, now_ms);
    }

    pub fn tick(&mut self, tick: FrameTick, out: &mut Vec<SceneEvent>) {
        self.controls.apply(&mut self.stage.camera);
        for timer in self.timers.poll(tick.now_ms) {
            match timer {
                InfoTimer::HideLoading => out.push(SceneEvent::LoadingDone),
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
                Gesture::Drag(d) => self.controls.rotate(d.x, d.y),
                Gesture::Click(p) => match self.stage.pick(p) {
                    Some(i) => self.click_entity(i, ctx, now_ms),
                    None => self.stage.bubbles.clear(),
                },
                _ => {}
            }
        }
    }

    pub fn model_loaded(&mut self, now_ms: f64, out: &mut Vec<SceneEvent>) {
        if self.stage.model_loaded(out) {
            self.timers.set_timeout(InfoTimer::HideLoading, LOADING_FADE_DELAY_MS, now_ms);
        }
    }

    pub fn teardown(&mut self) {
        self.timers.teardown();
        self.stage.bubbles.clear();
    }
}
