//! Address bar and document metadata.

use wasm_bindgen::JsValue;
use web_sys as web;
use zodiac_core::route::PageMeta;
use zodiac_core::{HistoryMode, Language};

pub fn current_path() -> String {
    web::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_query() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn origin() -> String {
    web::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Bring the address bar in line with `path`.
pub fn sync_history(path: &str, mode: HistoryMode) {
    let Some(history) = web::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = match mode {
        HistoryMode::Push => history.push_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Replace => history.replace_state_with_url(&JsValue::NULL, "", Some(path)),
        HistoryMode::Keep => Ok(()),
    };
    if let Err(e) = result {
        log::warn!("[nav] history update failed: {:?}", e);
    }
}

pub fn apply_meta(document: &web::Document, meta: &PageMeta, lang: Language) {
    document.set_title(&meta.title);
    if let Ok(Some(el)) = document.query_selector("meta[name=\"description\"]") {
        _ = el.set_attribute("content", &meta.description);
    }
    if let Some(root) = document.document_element() {
        _ = root.set_attribute("lang", lang.tag());
    }
}
