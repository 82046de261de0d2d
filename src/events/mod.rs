pub mod pointer;

pub use pointer::wire_cursor_listeners;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Registered event listeners, kept so they can be removed again.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<(web::EventTarget, &'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        match target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()) {
            Ok(()) => self.entries.push((target.clone(), kind, closure)),
            Err(e) => log::warn!("[events] {} listener failed: {:?}", kind, e),
        }
    }

    /// Remove every listener and drop its closure.
    pub fn detach(&mut self) {
        for (target, kind, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Run `on_unload` when the page is about to unload. This closure is
/// forgotten rather than kept in [`Listeners`], since it detaches them.
pub fn wire_unload(mut on_unload: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || on_unload()) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
