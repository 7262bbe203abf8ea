#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;
use zodiac_core::analytics::{AnalyticsSink, LogSink, NullSink};
use zodiac_core::assets::ModelCache;
use zodiac_core::{App, AppConfig};

mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod overlay;
mod render;
mod share;

thread_local! {
    static FRAME_LOOP: RefCell<Option<frame::AnimationLoop>> = const { RefCell::new(None) };
}

fn load_config() -> AppConfig {
    let query = nav::current_query();
    match AppConfig::from_query(&query) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring query {query:?}: {e}");
            AppConfig::default()
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("zodiac-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let config = load_config();
    if config.debug {
        log::set_max_level(log::LevelFilter::Debug);
    }
    let sink: Box<dyn AnalyticsSink> = if config.analytics {
        Box::new(LogSink)
    } else {
        Box::new(NullSink)
    };

    let mut effects = Vec::new();
    let mut app = App::new(&nav::current_path(), config, sink, dom::now_ms(), &mut effects);
    let (w, h) = dom::css_size(&canvas);
    app.resize(w, h);
    let session = Rc::new(frame::Session::new(app, effects));

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("rendering disabled; pages still work without the 3D view");
    }

    let mut window_listeners = events::wire_canvas_input(&canvas, &session);
    window_listeners.extend(events::wire_window(&window, &canvas, &session));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        document,
        canvas,
        gpu,
        models: ModelCache::new(),
        pending_models: VecDeque::new(),
        page_listeners: Vec::new(),
        window_listeners,
        last_instant: Instant::now(),
        draw: render::FrameDraw::default(),
    }));

    let frame_loop = frame::start_loop(frame_ctx);
    FRAME_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop));
    Ok(())
}
