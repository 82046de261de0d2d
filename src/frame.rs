use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One `requestAnimationFrame` callback plus a pending flag, so any number of
/// tick requests inside a frame turn into a single frame callback.
#[derive(Default)]
pub struct TickSlot {
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<bool>,
}

impl TickSlot {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Request the next frame unless one is already pending.
    pub fn request(&self) {
        if self.pending.replace(true) {
            return;
        }
        let requested = match (web::window(), self.callback.borrow().as_ref()) {
            (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
            _ => false,
        };
        if !requested {
            self.pending.set(false);
        }
    }

    /// Drop the frame callback; later requests do nothing.
    pub fn clear(&self) {
        self.callback.borrow_mut().take();
        self.pending.set(false);
    }
}

/// Install `step` as the frame callback of `slot`, run against `target`.
///
/// `target` usually owns the surface that owns `slot`; the slot is held
/// weakly from inside the callback, and [`TickSlot::clear`] breaks the
/// remaining cycle at teardown.
pub fn install<T: 'static>(
    slot: &Rc<TickSlot>,
    target: Rc<RefCell<T>>,
    mut step: impl FnMut(&mut T) + 'static,
) {
    let slot_weak: Weak<TickSlot> = Rc::downgrade(slot);
    let closure = Closure::wrap(Box::new(move || {
        let slot = slot_weak.upgrade();
        if let Some(s) = &slot {
            s.pending.set(false);
        }
        match target.try_borrow_mut() {
            Ok(mut t) => step(&mut t),
            Err(_) => {
                log::warn!("[frame] target busy, retrying next frame");
                if let Some(s) = &slot {
                    s.request();
                }
            }
        }
    }) as Box<dyn FnMut()>);
    *slot.callback.borrow_mut() = Some(closure);
}
