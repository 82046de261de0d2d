use super::Listeners;
use crate::constants::HOVER_SELECTOR;
use crate::core::{CrystalCursor, InputEvent};
use crate::dom::DomSurface;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedCursor = Rc<RefCell<CrystalCursor<DomSurface>>>;

#[inline]
fn client_pos(ev: &web::Event) -> Option<Vec2> {
    ev.dyn_ref::<web::MouseEvent>()
        .map(|m| Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

/// True when the event targeted `<html>` or `<body>` rather than page content.
fn targets_root(ev: &web::Event, document: &web::Document) -> bool {
    let Some(node) = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok()) else {
        return false;
    };
    let is = |el: Option<web::Element>| {
        el.map(|e| node.is_same_node(Some(e.as_ref())))
            .unwrap_or(false)
    };
    is(document.document_element()) || is(document.body().map(Into::into))
}

fn dispatch(cursor: &SharedCursor, ev: InputEvent) {
    match cursor.try_borrow_mut() {
        Ok(mut c) => c.handle(ev),
        Err(_) => log::warn!("[events] cursor busy, dropped {:?}", ev),
    }
}

/// Forward a DOM event as `build(ev)`, skipping it when `build` yields nothing.
fn forward(
    listeners: &mut Listeners,
    target: &web::EventTarget,
    kind: &'static str,
    cursor: &SharedCursor,
    build: impl Fn(&web::Event) -> Option<InputEvent> + 'static,
) {
    let cursor = cursor.clone();
    listeners.add(target, kind, move |ev| {
        if let Some(input) = build(&ev) {
            dispatch(&cursor, input);
        }
    });
}

pub fn wire_cursor_listeners(
    document: &web::Document,
    cursor: &SharedCursor,
    listeners: &mut Listeners,
) {
    let doc_target: &web::EventTarget = document.as_ref();

    forward(listeners, doc_target, "mousemove", cursor, |ev| {
        client_pos(ev).map(|pos| InputEvent::PointerMove { pos })
    });

    let doc = document.clone();
    forward(listeners, doc_target, "mousedown", cursor, move |ev| {
        client_pos(ev).map(|pos| InputEvent::PointerDown {
            pos,
            on_root: targets_root(ev, &doc),
        })
    });

    forward(listeners, doc_target, "mouseup", cursor, |ev| {
        let m = ev.dyn_ref::<web::MouseEvent>()?;
        Some(InputEvent::PointerUp {
            pos: Vec2::new(m.client_x() as f32, m.client_y() as f32),
            buttons: m.buttons(),
        })
    });

    forward(listeners, doc_target, "dragstart", cursor, |_| {
        Some(InputEvent::DragStart)
    });
    forward(listeners, doc_target, "drag", cursor, |_| Some(InputEvent::Drag));
    forward(listeners, doc_target, "dragend", cursor, |ev| {
        Some(InputEvent::DragEnd {
            pos: client_pos(ev),
        })
    });

    // enter/leave on the root element track the pointer entering the viewport
    if let Some(root) = document.document_element() {
        let root_target: &web::EventTarget = root.as_ref();
        forward(listeners, root_target, "mouseenter", cursor, |_| {
            Some(InputEvent::PointerEnter)
        });
        forward(listeners, root_target, "mouseleave", cursor, |_| {
            Some(InputEvent::PointerLeave)
        });
    }

    if let Some(window) = web::window() {
        forward(listeners, window.as_ref(), "scroll", cursor, |_| {
            Some(InputEvent::Scroll)
        });
    }

    wire_hover_targets(document, cursor, listeners);
}

fn wire_hover_targets(document: &web::Document, cursor: &SharedCursor, listeners: &mut Listeners) {
    let nodes = match document.query_selector_all(HOVER_SELECTOR) {
        Ok(n) => n,
        Err(e) => {
            log::warn!("[events] hover selector failed: {:?}", e);
            return;
        }
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else {
            continue;
        };
        let target: &web::EventTarget = node.as_ref();
        forward(listeners, target, "mouseenter", cursor, |_| {
            Some(InputEvent::HoverEnter)
        });
        forward(listeners, target, "mouseleave", cursor, |_| {
            Some(InputEvent::HoverLeave)
        });
    }
    log::info!("[events] hover targets: {}", nodes.length());
}
