//! DOM event wiring. Every listener is owned by a [`Listener`] and removed
//! when that handle drops.

use crate::dom;
use crate::frame::Session;
use crate::nav;
use crate::overlay::UiAction;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use zodiac_core::scene::SceneInput;

pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(target: &web::EventTarget, event: &'static str, handler: impl FnMut(web::Event) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

#[inline]
fn pointer_pos(ev: &web::Event) -> Option<(Vec2, web::PointerEvent)> {
    let pe = ev.clone().dyn_into::<web::PointerEvent>().ok()?;
    Some((Vec2::new(pe.offset_x() as f32, pe.offset_y() as f32), pe))
}

fn feed(session: &Session, input: SceneInput) {
    session.actions.borrow_mut().push(UiAction::Input(input));
}

pub fn wire_canvas_input(canvas: &web::HtmlCanvasElement, session: &Rc<Session>) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(4);

    let s = session.clone();
    let c = canvas.clone();
    listeners.push(Listener::new(canvas, "pointerdown", move |ev| {
        if let Some((pos, pe)) = pointer_pos(&ev) {
            _ = c.set_pointer_capture(pe.pointer_id());
            feed(&s, SceneInput::PointerDown(pos));
        }
    }));

    let s = session.clone();
    listeners.push(Listener::new(canvas, "pointermove", move |ev| {
        if let Some((pos, _)) = pointer_pos(&ev) {
            feed(&s, SceneInput::PointerMove(pos));
        }
    }));

    let s = session.clone();
    listeners.push(Listener::new(canvas, "pointerup", move |ev| {
        if let Some((pos, _)) = pointer_pos(&ev) {
            feed(&s, SceneInput::PointerUp(pos));
        }
    }));

    let s = session.clone();
    listeners.push(Listener::new(canvas, "wheel", move |ev| {
        if let Some(we) = ev.dyn_ref::<web::WheelEvent>() {
            ev.prevent_default();
            let dy = we.delta_y();
            if dy != 0.0 {
                feed(&s, SceneInput::Wheel(dy.signum() as f32));
            }
        }
    }));

    listeners
}

/// Keyboard, back/forward and resize on the window.
pub fn wire_window(window: &web::Window, canvas: &web::HtmlCanvasElement, session: &Rc<Session>) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(3);

    let s = session.clone();
    listeners.push(Listener::new(window, "keydown", move |ev| {
        if let Some(ke) = ev.dyn_ref::<web::KeyboardEvent>() {
            if ke.repeat() {
                return;
            }
            feed(&s, SceneInput::Key(ke.key()));
        }
    }));

    let s = session.clone();
    listeners.push(Listener::new(window, "popstate", move |_| {
        let path = nav::current_path();
        log::info!("[nav] popstate {path}");
        s.actions.borrow_mut().push(UiAction::PopState(path));
    }));

    let s = session.clone();
    let c = canvas.clone();
    listeners.push(Listener::new(window, "resize", move |_| {
        dom::sync_canvas_backing_size(&c);
        let (w, h) = dom::css_size(&c);
        s.actions.borrow_mut().push(UiAction::Resize(w, h));
    }));

    listeners
}
