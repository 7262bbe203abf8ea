//! Page scenes: what is placed where, how it moves, and how it reacts to
//! input. Each scene is advanced by [`FrameTick`]s from the host's frame loop
//! and reports what the host should do through [`SceneEvent`]s.

pub mod fortune;
pub mod group_photo;
pub mod main;
pub mod zodiac_info;

use crate::analytics::AnalyticsEvent;
use crate::assets::LoadProgress;
use crate::bubble::BubbleBoard;
use crate::camera::Camera;
use crate::catalog::ZodiacSign;
use crate::config::AppConfig;
use crate::constants::PICK_SPHERE_RADIUS;
use crate::i18n::{Language, Translator};
use crate::input::{pick_nearest, Gesture, PointerTracker};
use crate::route::{Page, Route};
use crate::transition::Spotlight;
use glam::{Mat4, Quat, Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;

pub use fortune::FortuneScene;
pub use group_photo::GroupPhotoScene;
pub use main::MainScene;
pub use zodiac_info::ZodiacInfoScene;

/// Session state handed to every page.
#[derive(Debug)]
pub struct AppContext {
    pub lang: Language,
    pub translator: Translator,
    pub config: AppConfig,
    pub rng: StdRng,
}

impl AppContext {
    pub fn new(lang: Language, config: AppConfig) -> Self {
        let rng = match config.layout_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            lang,
            translator: Translator::new(lang),
            config,
            rng,
        }
    }

    pub fn set_language(&mut self, lang: Language) {
        self.lang = lang;
        self.translator = Translator::new(lang);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityRole {
    Sign(ZodiacSign),
    /// The horse at the center of the ring or the front of the photo.
    MainHorse,
    /// The red horse behind the info grid.
    RedHorse,
}

/// One model placed in a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedEntity {
    pub role: EntityRole,
    pub model_url: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl PlacedEntity {
    pub fn new(role: EntityRole, model_url: impl Into<String>, position: Vec3, scale: f32) -> Self {
        Self {
            role,
            model_url: model_url.into(),
            position,
            rotation: Quat::IDENTITY,
            scale,
        }
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.rotation = Quat::from_rotation_y(yaw);
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn sign(&self) -> Option<ZodiacSign> {
        match self.role {
            EntityRole::Sign(sign) => Some(sign),
            _ => None,
        }
    }

    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.position)
    }

    /// Sphere used for picking: centered half a model-height up.
    pub fn pick_sphere(&self) -> (Vec3, f32) {
        let up = self.rotation * Vec3::Y;
        (
            self.position + up * (self.scale * 0.5),
            PICK_SPHERE_RADIUS * self.scale * 1.2,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub now_ms: f64,
    pub dt: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneInput {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp(Vec2),
    /// Wheel notches; positive zooms out.
    Wheel(f32),
    Key(String),
}

/// Requests from a scene to its host.
#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    Navigate(Route),
    Track(AnalyticsEvent),
    LoadingProgress(u8),
    /// The loading overlay's fade delay elapsed.
    LoadingDone,
    DebugChanged(bool),
}

/// State every scene carries.
#[derive(Clone, Debug)]
pub struct Stage {
    pub camera: Camera,
    pub entities: Vec<PlacedEntity>,
    pub bubbles: BubbleBoard,
    pub pointer: PointerTracker,
    pub hovered: Option<usize>,
    pub viewport: Vec2,
    pub loading: LoadProgress,
}

impl Stage {
    pub fn new(camera: Camera, entities: Vec<PlacedEntity>, bubble_offset: f32) -> Self {
        let loading = LoadProgress::new(unique_urls(&entities).len());
        Self {
            camera,
            entities,
            bubbles: BubbleBoard::new(bubble_offset),
            pointer: PointerTracker::default(),
            hovered: None,
            viewport: Vec2::new(1.0, 1.0),
            loading,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
        self.camera.set_viewport(self.viewport.x, self.viewport.y);
    }

    /// Entity under the pixel `at`, nearest first.
    pub fn pick(&self, at: Vec2) -> Option<usize> {
        let (ro, rd) = self
            .camera
            .screen_to_world_ray(at.x, at.y, self.viewport.x, self.viewport.y);
        pick_nearest(ro, rd, self.entities.iter().map(PlacedEntity::pick_sphere))
    }

    /// Feed a pointer input through the tracker.
    pub fn gestures(&mut self, input: &SceneInput) -> SmallVec<[Gesture; 2]> {
        let mut out = SmallVec::new();
        match *input {
            SceneInput::PointerDown(p) => self.pointer.down(p),
            SceneInput::PointerMove(p) => out.extend(self.pointer.moved(p).into_iter().flatten()),
            SceneInput::PointerUp(p) => out.push(self.pointer.up(p)),
            _ => {}
        }
        out
    }

    /// Anchor positions follow their entities, then re-project.
    pub fn track_bubbles(&mut self, height_of: impl Fn(&PlacedEntity) -> Vec3) {
        let entities = &self.entities;
        self.bubbles.reanchor(|anchor| match anchor {
            crate::bubble::Anchor::Entity(i) => entities.get(i).map(&height_of),
        });
        self.bubbles
            .track(&self.camera, self.viewport.x, self.viewport.y);
    }

    /// Record one loaded model. Returns true once all are in.
    pub fn model_loaded(&mut self, out: &mut Vec<SceneEvent>) -> bool {
        let done = self.loading.mark_loaded();
        out.push(SceneEvent::LoadingProgress(self.loading.percent()));
        done
    }
}

/// Distinct model urls of `entities`, in first-use order.
pub fn unique_urls(entities: &[PlacedEntity]) -> Vec<String> {
    let mut urls: Vec<String> = Vec::new();
    for e in entities {
        if !urls.iter().any(|u| *u == e.model_url) {
            urls.push(e.model_url.clone());
        }
    }
    urls
}

/// The scene mounted for the current route.
#[derive(Debug)]
pub enum ActiveScene {
    Main(MainScene),
    Fortune(FortuneScene),
    GroupPhoto(GroupPhotoScene),
    ZodiacInfo(ZodiacInfoScene),
}

impl ActiveScene {
    pub fn mount(page: Page, ctx: &mut AppContext, now_ms: f64) -> Self {
        match page {
            Page::Main => ActiveScene::Main(MainScene::new(ctx, now_ms)),
            Page::Fortune(sign) => ActiveScene::Fortune(FortuneScene::new(sign, ctx, now_ms)),
            Page::GroupPhoto => ActiveScene::GroupPhoto(GroupPhotoScene::new(ctx, now_ms)),
            Page::ZodiacInfo => ActiveScene::ZodiacInfo(ZodiacInfoScene::new(ctx, now_ms)),
        }
    }

    pub fn stage(&self) -> &Stage {
        match self {
            ActiveScene::Main(s) => &s.stage,
            ActiveScene::Fortune(s) => &s.stage,
            ActiveScene::GroupPhoto(s) => &s.stage,
            ActiveScene::ZodiacInfo(s) => &s.stage,
        }
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        match self {
            ActiveScene::Main(s) => &mut s.stage,
            ActiveScene::Fortune(s) => &mut s.stage,
            ActiveScene::GroupPhoto(s) => &mut s.stage,
            ActiveScene::ZodiacInfo(s) => &mut s.stage,
        }
    }

    pub fn tick(&mut self, tick: FrameTick, ctx: &mut AppContext, out: &mut Vec<SceneEvent>) {
        match self {
            ActiveScene::Main(s) => s.tick(tick, ctx, out),
            ActiveScene::Fortune(s) => s.tick(tick, out),
            ActiveScene::GroupPhoto(s) => s.tick(tick, ctx, out),
            ActiveScene::ZodiacInfo(s) => s.tick(tick, out),
        }
    }

    pub fn input(&mut self, input: SceneInput, now_ms: f64, ctx: &mut AppContext, out: &mut Vec<SceneEvent>) {
        match self {
            ActiveScene::Main(s) => s.input(input, now_ms),
            ActiveScene::Fortune(s) => s.input(input, out),
            ActiveScene::GroupPhoto(s) => s.input(input, now_ms, ctx),
            ActiveScene::ZodiacInfo(s) => s.input(input, now_ms, ctx),
        }
    }

    pub fn model_loaded(&mut self, now_ms: f64, out: &mut Vec<SceneEvent>) {
        match self {
            ActiveScene::Main(s) => s.model_loaded(now_ms, out),
            ActiveScene::Fortune(s) => s.model_loaded(now_ms, out),
            ActiveScene::GroupPhoto(s) => s.model_loaded(now_ms, out),
            ActiveScene::ZodiacInfo(s) => s.model_loaded(now_ms, out),
        }
    }

    /// Lights over the stage beyond the ambient fill.
    pub fn spotlights(&self) -> SmallVec<[Spotlight; 2]> {
        match self {
            ActiveScene::Main(s) => s.spotlights(),
            _ => SmallVec::new(),
        }
    }

    /// Whether the floor disc and debug helpers should be drawn.
    pub fn show_floor(&self) -> bool {
        matches!(self, ActiveScene::Main(_))
    }

    pub fn show_helpers(&self) -> bool {
        matches!(self, ActiveScene::Fortune(s) if s.debug())
    }

    /// Cancel timers; the scene must not emit anything afterwards.
    pub fn teardown(&mut self) {
        match self {
            ActiveScene::Main(s) => s.teardown(),
            ActiveScene::Fortune(s) => s.teardown(),
            ActiveScene::GroupPhoto(s) => s.teardown(),
            ActiveScene::ZodiacInfo(s) => s.teardown(),
        }
    }
}
