//! Page chrome drawn over the canvas: headers, the fortune card, the loading
//! screen and the speech bubbles.

use crate::constants::TOAST_DURATION_MS;
use crate::dom::markup;
use crate::events::Listener;
use crate::frame::Session;
use std::fmt::Write;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use zodiac_core::bubble::BubbleBoard;
use zodiac_core::fortune_card::{FortuneCard, MatchEntry};
use zodiac_core::route::{Page, Route};
use zodiac_core::scene::SceneInput;
use zodiac_core::{Key, Translator};

/// DOM events queued for the frame loop, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum UiAction {
    Navigate(Route),
    SwitchLanguage,
    Share,
    Input(SceneInput),
    PopState(String),
    /// CSS-pixel canvas size.
    Resize(f32, f32),
}

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

fn lang_button(t: &Translator) -> String {
    format!(
        "<button id=\"btn-lang\" class=\"lang-switch\">{}</button>",
        markup(t.t(Key::LanguageSwitch))
    )
}

fn main_html(t: &Translator) -> String {
    format!(
        "<header class=\"page-header\"><h1>{}</h1><p>{}</p></header>\
         <p class=\"hint\">{}<br><span class=\"hint-desktop\">{}</span><span class=\"hint-mobile\">{}</span></p>\
         <nav class=\"page-links\"><button id=\"btn-group\">{}</button><button id=\"btn-info\">{}</button></nav>{}",
        markup(t.t(Key::MainTitle)),
        markup(t.t(Key::MainSubtitle)),
        markup(t.t(Key::SelectZodiac)),
        markup(t.t(Key::ControlHintDesktop)),
        markup(t.t(Key::ControlHintMobile)),
        markup(t.t(Key::GroupPhotoLink)),
        markup(t.t(Key::ZodiacInfoLink)),
        lang_button(t),
    )
}

fn match_list(out: &mut String, title: &str, entries: &[MatchEntry]) {
    _ = write!(out, "<div class=\"matches\"><h3>{}</h3><ul>", markup(title));
    for m in entries {
        _ = write!(out, "<li>{} {}</li>", m.emoji, markup(m.name));
    }
    out.push_str("</ul></div>");
}

/// Fortune card markup; every text field comes from the catalog.
pub fn fortune_card_html(card: &FortuneCard, t: &Translator) -> String {
    let mut out = String::with_capacity(2048);
    _ = write!(
        out,
        "<article class=\"fortune-card\"><h2>{} {}</h2>",
        card.emoji,
        markup(&card.title)
    );
    let e = &card.element;
    _ = write!(
        out,
        "<section class=\"element\"><span class=\"chip element-fire\">{}</span>\
         <span class=\"chip {}\">{} {}</span><span class=\"relation {}\">{}</span><p>{}</p></section>",
        markup(e.year_label),
        e.css_class,
        e.sign_hanja,
        markup(e.sign_label),
        if e.favorable { "favorable" } else { "caution" },
        markup(e.relation),
        markup(card.element_description),
    );

    _ = write!(out, "<section class=\"lucky\"><h3>{}</h3><div class=\"colors\">", markup(t.t(Key::LuckyColor)));
    for chip in &card.lucky_colors {
        _ = write!(
            out,
            "<span class=\"color-chip\"><i style=\"background:{}\"></i>{}</span>",
            chip.hex,
            markup(chip.name)
        );
    }
    _ = write!(
        out,
        "</div><p><b>{}</b> {}</p><p><b>{}</b> {}</p></section>",
        markup(t.t(Key::LuckyNumber)),
        markup(&card.lucky_numbers),
        markup(t.t(Key::LuckyDirection)),
        markup(card.lucky_direction),
    );

    out.push_str("<section class=\"compat\">");
    match_list(&mut out, t.t(Key::GoodMatch), &card.good_matches);
    match_list(&mut out, t.t(Key::BadMatch), &card.bad_matches);
    out.push_str("</section>");

    _ = write!(
        out,
        "<section class=\"advice\"><p class=\"dont\"><b>{}</b> {}</p><p class=\"do\"><b>{}</b> {}</p></section>\
         <blockquote>{}<br>{}</blockquote>",
        markup(t.t(Key::AdviceDont)),
        markup(card.advice_dont),
        markup(t.t(Key::AdviceDo)),
        markup(card.advice_do),
        markup(card.quote[0]),
        markup(card.quote[1]),
    );
    _ = write!(
        out,
        "<footer class=\"card-actions\"><button id=\"btn-back\">{}</button>\
         <button id=\"btn-share\">{}</button></footer></article>",
        markup(t.t(Key::OtherZodiac)),
        markup(t.t(Key::ShareTitle)),
    );
    out
}

fn group_html(t: &Translator) -> String {
    format!(
        "<header class=\"page-header\"><h1>{}</h1><p>{}</p></header>\
         <footer class=\"page-footer\"><p>{}</p><p>{}</p><p>{}</p></footer>\
         <nav class=\"page-links\"><button id=\"btn-back\">{}</button><button id=\"btn-share\">{}</button></nav>{}",
        markup(t.t(Key::HeaderYear)),
        markup(t.t(Key::HeaderRedHorse)),
        markup(t.t(Key::FooterNewYear)),
        markup(t.t(Key::FooterBlessing)),
        markup(t.t(Key::FooterWishes)),
        markup(t.t(Key::Back)),
        markup(t.t(Key::ShareTitle)),
        lang_button(t),
    )
}

fn info_html(t: &Translator) -> String {
    format!(
        "<header class=\"page-header\"><h1>{}</h1><p>{}</p><p>{}</p></header>\
         <nav class=\"page-links\"><button id=\"btn-back\">{}</button></nav>{}",
        markup(t.t(Key::ZodiacInfoTitle)),
        markup(t.t(Key::ZodiacInfoHint)),
        markup(t.t(Key::ZodiacRedHorseHint)),
        markup(t.t(Key::Back)),
        lang_button(t),
    )
}

fn loading_html(route: &Route, t: &Translator) -> String {
    match route.page {
        Page::Main => format!(
            "<h2>{}</h2><p>{}</p>",
            markup(t.t(Key::LoadingMainTitle)),
            markup(t.t(Key::LoadingMainSubtitle))
        ),
        Page::Fortune(sign) => format!(
            "<img src=\"{}\" alt=\"\"><h2>{}</h2><p>{}</p>",
            sign.image_url(),
            markup(&t.t_with(Key::LoadingFortuneTitle, &[("name", sign.name(route.lang))])),
            markup(t.t(Key::LoadingFortuneSubtitle))
        ),
        Page::GroupPhoto | Page::ZodiacInfo => format!(
            "<h2>{}</h2><p>{}</p>",
            markup(t.t(Key::LoadingTitle)),
            markup(t.t(Key::LoadingSubtitle))
        ),
    }
}

/// Rebuild the overlay for a freshly mounted page and wire its buttons.
/// Dropping the returned listeners unhooks them.
pub fn mount_page(
    document: &web::Document,
    route: &Route,
    card: Option<&FortuneCard>,
    session: &Rc<Session>,
) -> Vec<Listener> {
    let t = route.translator();
    let html = match (route.page, card) {
        (Page::Fortune(_), Some(card)) => format!("{}{}", fortune_card_html(card, &t), lang_button(&t)),
        (Page::Fortune(_), None) | (Page::Main, _) => main_html(&t),
        (Page::GroupPhoto, _) => group_html(&t),
        (Page::ZodiacInfo, _) => info_html(&t),
    };
    crate::dom::set_inner_html(document, "overlay", &html);
    crate::dom::set_inner_html(document, "bubbles", "");
    crate::dom::set_inner_html(document, "loading-body", &loading_html(route, &t));
    set_progress(document, 0);
    show(document, "loading");

    let mut listeners = Vec::new();
    let mut wire = |id: &str, action: UiAction| {
        if let Some(el) = document.get_element_by_id(id) {
            let s = session.clone();
            listeners.push(Listener::new(&el, "click", move |_| {
                s.actions.borrow_mut().push(action.clone());
            }));
        }
    };
    wire("btn-lang", UiAction::SwitchLanguage);
    wire("btn-share", UiAction::Share);
    wire("btn-back", UiAction::Navigate(route.back()));
    wire("btn-group", UiAction::Navigate(Route::new(route.lang, Page::GroupPhoto)));
    wire("btn-info", UiAction::Navigate(Route::new(route.lang, Page::ZodiacInfo)));
    listeners
}

pub fn set_progress(document: &web::Document, percent: u8) {
    if let Some(bar) = document.get_element_by_id("loading-bar") {
        _ = bar.set_attribute("style", &format!("width:{percent}%"));
    }
    if let Some(label) = document.get_element_by_id("loading-percent") {
        label.set_text_content(Some(&format!("{percent}%")));
    }
}

pub fn set_debug_indicator(document: &web::Document, on: bool, t: &Translator) {
    if on {
        crate::dom::set_inner_html(document, "debug-indicator", &markup(t.t(Key::DebugMode)));
        show(document, "debug-indicator");
    } else {
        hide(document, "debug-indicator");
    }
}

/// Brief notice; hides itself.
pub fn toast(document: &web::Document, message: &str) {
    let Some(el) = document.get_element_by_id("toast") else {
        return;
    };
    el.set_text_content(Some(message));
    show(document, "toast");
    let doc = document.clone();
    let closure = Closure::once(move || hide(&doc, "toast"));
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            TOAST_DURATION_MS,
        );
    }
    closure.forget();
}

/// Sync bubble divs with the board: create new ones, move live ones, drop
/// the rest. Positions are CSS pixels.
pub fn sync_bubbles(document: &web::Document, board: &BubbleBoard) {
    let Some(layer) = document.get_element_by_id("bubbles") else {
        return;
    };
    let live: Vec<String> = board.iter().map(|b| format!("bubble-{}", b.id)).collect();

    let children = layer.children();
    let mut stale = Vec::new();
    for i in 0..children.length() {
        if let Some(child) = children.item(i) {
            if !live.contains(&child.id()) {
                stale.push(child);
            }
        }
    }
    for child in stale {
        child.remove();
    }

    for (bubble, dom_id) in board.iter().zip(&live) {
        let el = match document.get_element_by_id(dom_id) {
            Some(el) => el,
            None => {
                let Ok(el) = document.create_element("div") else {
                    continue;
                };
                el.set_id(dom_id);
                el.set_class_name("bubble");
                el.set_inner_html(&markup(&bubble.message));
                _ = layer.append_child(&el);
                el
            }
        };
        let style = match bubble.screen_pos {
            Some(p) => format!("left:{:.1}px;top:{:.1}px", p.x, p.y),
            None => "display:none".to_string(),
        };
        _ = el.set_attribute("style", &style);
    }
}
