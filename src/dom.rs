use crate::constants::*;
use crate::core::{GlyphFlags, Look, Surface, VisualFrame, VisualId, VisualKind, Viewport};
use crate::frame::TickSlot;
use fnv::FnvHashMap;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve once the document has finished parsing.
pub async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

pub fn inject_styles(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(STYLE_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| anyhow::anyhow!("no <head>"))?;
    let style = document
        .create_element("style")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

/// Remove the stylesheet and the petal layer added by this crate.
pub fn remove_injected(document: &web::Document) {
    for id in [STYLE_ID, PETAL_LAYER_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            el.remove();
        }
    }
}

/// Full-viewport container behind the page content for the petals.
pub fn petal_layer(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(PETAL_LAYER_ID) {
        return Ok(el);
    }
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let layer = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    layer.set_id(PETAL_LAYER_ID);
    body.append_child(&layer)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(layer)
}

#[inline]
fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

#[inline]
fn clear_style(el: &web::HtmlElement, prop: &str) {
    _ = el.style().remove_property(prop);
}

struct Visual {
    el: web::HtmlElement,
    kind: VisualKind,
}

/// [`Surface`] over real DOM elements appended to one parent element.
pub struct DomSurface {
    document: web::Document,
    parent: web::Element,
    visuals: FnvHashMap<VisualId, Visual>,
    next_id: u32,
    ticks: Rc<TickSlot>,
    clock: Instant,
}

impl DomSurface {
    pub fn new(document: web::Document, parent: web::Element) -> Self {
        Self {
            document,
            parent,
            visuals: FnvHashMap::default(),
            next_id: 0,
            ticks: TickSlot::new(),
            clock: Instant::now(),
        }
    }

    pub fn ticks(&self) -> &Rc<TickSlot> {
        &self.ticks
    }

    /// Stop frame callbacks and forget any element still tracked.
    pub fn shutdown(&mut self) {
        self.ticks.clear();
        for (_, v) in self.visuals.drain() {
            v.el.remove();
        }
    }

    fn build(&self, kind: VisualKind) -> anyhow::Result<web::HtmlElement> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        match kind {
            VisualKind::Glyph => {
                el.set_id(GLYPH_ID);
                el.set_class_name(GLYPH_CLASS);
            }
            VisualKind::Trail => el.set_class_name(TRAIL_CLASS),
            VisualKind::Burst => el.set_class_name(BURST_CLASS),
            VisualKind::Shockwave => el.set_class_name(SHOCKWAVE_CLASS),
            VisualKind::Petal => {
                el.set_class_name(PETAL_CLASS);
                let size = format!("{}px", PETAL_SIZE_PX);
                set_style(&el, "width", &size);
                set_style(&el, "height", &size);
            }
        }
        if kind != VisualKind::Glyph {
            set_style(&el, "display", "none");
        }
        self.parent
            .append_child(&el)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(el)
    }
}

impl Surface for DomSurface {
    fn now_ms(&self) -> f64 {
        self.clock.elapsed().as_secs_f64() * 1000.0
    }

    fn create_visual(&mut self, kind: VisualKind) -> Option<VisualId> {
        match self.build(kind) {
            Ok(el) => {
                let visuals = &self.visuals;
                let id = VisualId::next_free(&mut self.next_id, |id| visuals.contains_key(&id));
                self.visuals.insert(id, Visual { el, kind });
                Some(id)
            }
            Err(e) => {
                log::warn!("[dom] create {:?} failed: {:?}", kind, e);
                None
            }
        }
    }

    fn show_visual(&mut self, id: VisualId, look: Look) {
        let Some(v) = self.visuals.get(&id) else {
            return;
        };
        let hue = look.hue;
        match v.kind {
            VisualKind::Glyph => {}
            VisualKind::Trail => {
                set_style(
                    &v.el,
                    "background",
                    &format!(
                        "linear-gradient(to bottom, hsla({hue}, 100%, 70%, 0.9), hsla({}, 100%, 50%, 0.5))",
                        hue + 20.0
                    ),
                );
                set_style(
                    &v.el,
                    "box-shadow",
                    &format!("0 0 5px hsla({hue}, 100%, 70%, 0.8)"),
                );
            }
            VisualKind::Burst => {
                let color = format!("hsl({hue}, 60%, 60%)");
                set_style(&v.el, "background-color", &color);
                set_style(&v.el, "filter", &format!("drop-shadow(0 0 3px {color})"));
            }
            VisualKind::Shockwave => {
                set_style(&v.el, "border-color", &format!("hsl({hue}, 68%, 58%)"));
            }
            VisualKind::Petal => {
                set_style(&v.el, "background", &format!("hsl({hue}, 70%, 70%)"));
            }
        }
        set_style(&v.el, "display", "block");
    }

    fn place_visual(&mut self, id: VisualId, frame: &VisualFrame) {
        let Some(v) = self.visuals.get(&id) else {
            return;
        };
        let el = &v.el;
        match v.kind {
            VisualKind::Glyph => {
                set_style(el, "left", &format!("{}px", frame.pos.x));
                set_style(el, "top", &format!("{}px", frame.pos.y));
            }
            VisualKind::Petal => {
                set_style(
                    el,
                    "transform",
                    &format!(
                        "translate({}px, {}px) rotate({}rad) scale({})",
                        frame.pos.x, frame.pos.y, frame.rotation, frame.scale
                    ),
                );
                set_style(el, "opacity", &frame.opacity.to_string());
            }
            VisualKind::Trail | VisualKind::Burst | VisualKind::Shockwave => {
                set_style(el, "left", &format!("{}px", frame.pos.x));
                set_style(el, "top", &format!("{}px", frame.pos.y));
                set_style(el, "width", &format!("{}px", frame.width));
                set_style(el, "height", &format!("{}px", frame.height));
                set_style(
                    el,
                    "transform",
                    &format!(
                        "translate(-50%, -50%) rotate({}rad) scale({})",
                        frame.rotation, frame.scale
                    ),
                );
                set_style(el, "opacity", &frame.opacity.to_string());
                if v.kind == VisualKind::Shockwave {
                    set_style(el, "border-width", &format!("{}px", frame.border));
                }
            }
        }
    }

    fn release_visual(&mut self, id: VisualId) {
        if let Some(v) = self.visuals.get(&id) {
            set_style(&v.el, "display", "none");
            for prop in ["transform", "opacity", "background", "box-shadow"] {
                clear_style(&v.el, prop);
            }
        }
    }

    fn dispose_visual(&mut self, id: VisualId) {
        if let Some(v) = self.visuals.remove(&id) {
            v.el.remove();
        }
    }

    fn set_glyph_flags(&mut self, id: VisualId, flags: GlyphFlags) {
        let Some(v) = self.visuals.get(&id) else {
            return;
        };
        let cl = v.el.class_list();
        _ = cl.toggle_with_force(HIDDEN_CLASS, flags.hidden);
        _ = cl.toggle_with_force(ACTIVE_CLASS, flags.active);
        _ = cl.toggle_with_force(HOVER_CLASS, flags.hover);
    }

    fn schedule_tick(&mut self) {
        self.ticks.request();
    }

    fn viewport(&self) -> Viewport {
        let (width, height) = web::window()
            .map(|w| {
                let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                (iw as f32, ih as f32)
            })
            .unwrap_or((0.0, 0.0));
        match self.document.document_element() {
            Some(root) => Viewport {
                width,
                height,
                scroll_width: root.scroll_width() as f32,
                scroll_height: root.scroll_height() as f32,
                client_width: root.client_width() as f32,
                client_height: root.client_height() as f32,
            },
            None => Viewport::fixed(width, height),
        }
    }

    fn supports_hover(&self) -> bool {
        let no_hover = web::window()
            .and_then(|w| w.match_media(NO_HOVER_QUERY).ok().flatten())
            .map(|mq| mq.matches())
            .unwrap_or(false);
        !no_hover
    }
}
