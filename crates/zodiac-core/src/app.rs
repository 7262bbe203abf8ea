//! Session driver: owns the context and the mounted scene, handles routing,
//! and turns scene events into work for the browser shell.

use crate::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::config::AppConfig;
use crate::fortune_card::SharePayload;
use crate::route::{PageMeta, Resolution, Route};
use crate::scene::{unique_urls, ActiveScene, AppContext, FrameTick, SceneEvent, SceneInput};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
    /// The browser already moved (back/forward).
    Keep,
}

/// Work for the browser shell.
#[derive(Clone, Debug, PartialEq)]
pub enum AppEffect {
    /// A new page is mounted; rebuild the overlay and sync the URL.
    Mounted {
        route: Route,
        meta: PageMeta,
        history: HistoryMode,
    },
    LoadingProgress(u8),
    HideLoading,
    DebugChanged(bool),
}

pub struct App {
    ctx: AppContext,
    route: Route,
    scene: ActiveScene,
    sink: Box<dyn AnalyticsSink>,
    viewport: (f32, f32),
    scene_events: Vec<SceneEvent>,
}

impl App {
    /// Mount whatever `path` resolves to. Unknown paths redirect.
    pub fn new(
        path: &str,
        config: AppConfig,
        sink: Box<dyn AnalyticsSink>,
        now_ms: f64,
        out: &mut Vec<AppEffect>,
    ) -> Self {
        let (route, history) = match Route::resolve(path) {
            Resolution::Show(route) => (route, HistoryMode::Keep),
            Resolution::Redirect(route) => (route, HistoryMode::Replace),
        };
        let mut ctx = AppContext::new(route.lang, config);
        let scene = ActiveScene::mount(route.page, &mut ctx, now_ms);
        let mut app = Self {
            ctx,
            route,
            scene,
            sink,
            viewport: (1.0, 1.0),
            scene_events: Vec::new(),
        };
        app.announce(history, out);
        app
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn scene(&self) -> &ActiveScene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut ActiveScene {
        &mut self.scene
    }

    /// Model urls the mounted scene needs, deduplicated.
    pub fn model_urls(&self) -> Vec<String> {
        unique_urls(&self.scene.stage().entities)
    }

    fn announce(&mut self, history: HistoryMode, out: &mut Vec<AppEffect>) {
        log::info!("[route] mounted {}", self.route.path());
        self.track(AnalyticsEvent::PageView {
            path: self.route.path(),
        });
        out.push(AppEffect::Mounted {
            route: self.route,
            meta: self.route.meta(),
            history,
        });
    }

    pub fn track(&mut self, event: AnalyticsEvent) {
        if self.ctx.config.analytics {
            self.sink.track(&event);
        }
    }

    fn mount(&mut self, route: Route, history: HistoryMode, now_ms: f64, out: &mut Vec<AppEffect>) {
        self.scene.teardown();
        self.route = route;
        if self.ctx.lang != route.lang {
            self.ctx.set_language(route.lang);
        }
        self.scene = ActiveScene::mount(route.page, &mut self.ctx, now_ms);
        let (w, h) = self.viewport;
        self.scene.stage_mut().resize(w, h);
        self.announce(history, out);
    }

    /// In-app navigation (links, selection completion).
    pub fn navigate(&mut self, route: Route, now_ms: f64, out: &mut Vec<AppEffect>) {
        self.mount(route, HistoryMode::Push, now_ms, out);
    }

    /// Browser back/forward.
    pub fn pop_state(&mut self, path: &str, now_ms: f64, out: &mut Vec<AppEffect>) {
        let (route, history) = match Route::resolve(path) {
            Resolution::Show(route) => (route, HistoryMode::Keep),
            Resolution::Redirect(route) => (route, HistoryMode::Replace),
        };
        self.mount(route, history, now_ms, out);
    }

    /// Same page in the other language.
    pub fn switch_language(&mut self, now_ms: f64, out: &mut Vec<AppEffect>) {
        let to = self.route.lang.other();
        self.track(AnalyticsEvent::LanguageSwitch { to });
        self.navigate(self.route.with_language(to), now_ms, out);
    }

    pub fn share_payload(&mut self, origin: &str) -> SharePayload {
        self.track(AnalyticsEvent::Share {
            path: self.route.path(),
        });
        SharePayload::for_route(&self.route, origin)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.scene.stage_mut().resize(width, height);
    }

    pub fn input(&mut self, input: SceneInput, now_ms: f64, out: &mut Vec<AppEffect>) {
        let mut events = std::mem::take(&mut self.scene_events);
        self.scene.input(input, now_ms, &mut self.ctx, &mut events);
        self.dispatch(&mut events, now_ms, out);
        self.scene_events = events;
    }

    pub fn model_loaded(&mut self, now_ms: f64, out: &mut Vec<AppEffect>) {
        let mut events = std::mem::take(&mut self.scene_events);
        self.scene.model_loaded(now_ms, &mut events);
        self.dispatch(&mut events, now_ms, out);
        self.scene_events = events;
    }

    pub fn tick(&mut self, tick: FrameTick, out: &mut Vec<AppEffect>) {
        let mut events = std::mem::take(&mut self.scene_events);
        self.scene.tick(tick, &mut self.ctx, &mut events);
        self.dispatch(&mut events, tick.now_ms, out);
        self.scene_events = events;
    }

    fn dispatch(&mut self, events: &mut Vec<SceneEvent>, now_ms: f64, out: &mut Vec<AppEffect>) {
        for event in events.drain(..) {
            match event {
                SceneEvent::Navigate(route) => self.navigate(route, now_ms, out),
                SceneEvent::Track(e) => self.track(e),
                SceneEvent::LoadingProgress(p) => out.push(AppEffect::LoadingProgress(p)),
                SceneEvent::LoadingDone => out.push(AppEffect::HideLoading),
                SceneEvent::DebugChanged(on) => out.push(AppEffect::DebugChanged(on)),
            }
        }
    }
}
