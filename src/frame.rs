use crate::constants::HOVER_TINT;
use crate::events::Listener;
use crate::nav;
use crate::overlay::{self, UiAction};
use crate::render::mesh::{self, MeshData};
use crate::render::{self, DrawBatch, FrameDraw, InstanceRaw};
use crate::share;
use glam::Mat4;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use zodiac_core::assets::ModelCache;
use zodiac_core::scene::{ActiveScene, FrameTick};
use zodiac_core::{App, AppEffect};

/// State shared between DOM listeners and the frame loop. Listeners only
/// queue work here; the loop applies it.
pub struct Session {
    pub app: RefCell<App>,
    pub effects: RefCell<Vec<AppEffect>>,
    pub actions: RefCell<Vec<UiAction>>,
}

impl Session {
    pub fn new(app: App, effects: Vec<AppEffect>) -> Self {
        Self {
            app: RefCell::new(app),
            effects: RefCell::new(effects),
            actions: RefCell::new(Vec::new()),
        }
    }
}

pub struct FrameContext<'a> {
    pub session: Rc<Session>,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub models: ModelCache<MeshData>,
    pub pending_models: VecDeque<String>,

    pub page_listeners: Vec<Listener>,
    pub window_listeners: Vec<Listener>,

    pub last_instant: Instant,
    pub draw: FrameDraw,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let now_ms = crate::dom::now_ms();

        // mounts apply before loading so the queue matches the current page
        let mut effects = std::mem::take(&mut *self.session.effects.borrow_mut());
        self.run_actions(now_ms, &mut effects);
        self.flush(&mut effects);
        self.load_next_model(now_ms, &mut effects);
        self.session.app.borrow_mut().tick(
            FrameTick {
                now_ms,
                dt: dt.as_secs_f32(),
            },
            &mut effects,
        );
        self.flush(&mut effects);

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        }
        let app = self.session.app.borrow();
        build_draw(app.scene(), &mut self.draw);
        if let Some(gpu) = self.gpu.as_mut() {
            if let Err(e) = gpu.render(&self.draw) {
                log::error!("render error: {:?}", e);
            }
        }
        overlay::sync_bubbles(&self.document, &app.scene().stage().bubbles);
    }

    fn run_actions(&mut self, now_ms: f64, effects: &mut Vec<AppEffect>) {
        let actions = std::mem::take(&mut *self.session.actions.borrow_mut());
        let mut app = self.session.app.borrow_mut();
        for action in actions {
            match action {
                UiAction::Navigate(route) => app.navigate(route, now_ms, effects),
                UiAction::SwitchLanguage => app.switch_language(now_ms, effects),
                UiAction::Share => {
                    let payload = app.share_payload(&nav::origin());
                    share::share(&self.document, &payload, &app.context().translator);
                }
                UiAction::Input(input) => app.input(input, now_ms, effects),
                UiAction::PopState(path) => app.pop_state(&path, now_ms, effects),
                UiAction::Resize(w, h) => app.resize(w, h),
            }
        }
    }

    /// One model per frame keeps the loading bar moving.
    fn load_next_model(&mut self, now_ms: f64, effects: &mut Vec<AppEffect>) {
        let Some(url) = self.pending_models.pop_front() else {
            return;
        };
        let data = self.models.template(&url, mesh::build_model);
        if let Some(gpu) = self.gpu.as_mut() {
            if !gpu.has_mesh(&url) {
                gpu.upload_mesh(&url, &data);
            }
        }
        log::debug!("[assets] ready {url}");
        self.session.app.borrow_mut().model_loaded(now_ms, effects);
    }

    fn flush(&mut self, effects: &mut Vec<AppEffect>) {
        for effect in effects.drain(..) {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: AppEffect) {
        match effect {
            AppEffect::Mounted { route, meta, history } => {
                nav::sync_history(&route.path(), history);
                nav::apply_meta(&self.document, &meta, route.lang);
                let app = self.session.app.borrow();
                let (card, debug) = match app.scene() {
                    ActiveScene::Fortune(s) => (Some(s.card()), s.debug()),
                    _ => (None, false),
                };
                self.page_listeners = overlay::mount_page(&self.document, &route, card, &self.session);
                overlay::set_debug_indicator(&self.document, debug, &app.context().translator);
                self.pending_models = app.model_urls().into();
            }
            AppEffect::LoadingProgress(p) => overlay::set_progress(&self.document, p),
            AppEffect::HideLoading => overlay::hide(&self.document, "loading"),
            AppEffect::DebugChanged(on) => {
                let app = self.session.app.borrow();
                overlay::set_debug_indicator(&self.document, on, &app.context().translator);
            }
        }
    }
}

/// Group the scene's entities by mesh for instanced drawing.
fn build_draw(scene: &ActiveScene, draw: &mut FrameDraw) {
    let stage = scene.stage();
    draw.view_proj = stage.camera.view_projection();
    draw.eye = stage.camera.eye;
    draw.spotlights = scene.spotlights();
    draw.batches.clear();

    if scene.show_floor() {
        draw.batches.push(DrawBatch {
            mesh: render::FLOOR_MESH.to_string(),
            instances: vec![InstanceRaw::new(Mat4::IDENTITY, [1.0; 4])],
        });
    }
    if scene.show_helpers() {
        draw.batches.push(DrawBatch {
            mesh: render::HELPERS_MESH.to_string(),
            instances: vec![InstanceRaw::new(Mat4::IDENTITY, [1.0; 4])],
        });
    }
    for (i, entity) in stage.entities.iter().enumerate() {
        let tint = if stage.hovered == Some(i) { HOVER_TINT } else { [1.0; 4] };
        let instance = InstanceRaw::new(entity.transform(), tint);
        match draw.batches.iter_mut().find(|b| b.mesh == entity.model_url) {
            Some(batch) => batch.instances.push(instance),
            None => draw.batches.push(DrawBatch {
                mesh: entity.model_url.clone(),
                instances: vec![instance],
            }),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Running animation-frame loop; dropping it cancels the next frame and
/// releases the callback.
pub struct AnimationLoop {
    handle: Rc<Cell<i32>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.handle.get());
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, handle: &Cell<i32>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            handle.set(id);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(0));
    let tick_clone = tick.clone();
    let handle_clone = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &handle_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &handle);
    AnimationLoop { handle, tick }
}
