//! Share button: native share sheet when the browser has one, otherwise the
//! link goes to the clipboard. The user always sees success.

use crate::overlay;
use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;
use zodiac_core::fortune_card::SharePayload;
use zodiac_core::{Key, Translator};

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.dyn_into::<Function>().ok())
}

fn settle(result: Result<JsValue, JsValue>, what: &'static str) {
    match result.map(|v| v.dyn_into::<Promise>()) {
        Ok(Ok(promise)) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::debug!("[share] {what} rejected: {:?}", e);
            }
        }),
        Ok(Err(_)) => {}
        Err(e) => log::debug!("[share] {what} failed: {:?}", e),
    }
}

fn copy_with_textarea(document: &web::Document, text: &str) {
    let Ok(el) = document.create_element("textarea") else {
        return;
    };
    let Ok(area) = el.dyn_into::<web::HtmlTextAreaElement>() else {
        return;
    };
    area.set_value(text);
    let Some(body) = document.body() else {
        return;
    };
    _ = body.append_child(&area);
    area.select();
    if let Some(html_doc) = document.dyn_ref::<web::HtmlDocument>() {
        _ = html_doc.exec_command("copy");
    }
    area.remove();
}

pub fn share(document: &web::Document, payload: &SharePayload, t: &Translator) {
    let Some(window) = web::window() else {
        return;
    };
    let navigator: JsValue = window.navigator().into();

    if let Some(share_fn) = method(&navigator, "share") {
        let data = Object::new();
        _ = Reflect::set(&data, &"title".into(), &payload.title.as_str().into());
        _ = Reflect::set(&data, &"text".into(), &payload.text.as_str().into());
        _ = Reflect::set(&data, &"url".into(), &payload.url.as_str().into());
        settle(share_fn.call1(&navigator, &data), "navigator.share");
        return;
    }

    let clipboard = Reflect::get(&navigator, &"clipboard".into()).unwrap_or(JsValue::UNDEFINED);
    match method(&clipboard, "writeText") {
        Some(write) => settle(write.call1(&clipboard, &payload.url.as_str().into()), "clipboard"),
        None => copy_with_textarea(document, &payload.url),
    }
    overlay::toast(document, t.t(Key::LinkCopied));
}
