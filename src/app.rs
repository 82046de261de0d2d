use crate::core::{CrystalCursor, CursorConfig, InputEvent, PetalConfig, PetalField};
use crate::dom::{self, DomSurface};
use crate::events::{self, Listeners};
use crate::frame;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct Mounted {
    cursor: Option<Rc<RefCell<CrystalCursor<DomSurface>>>>,
    petals: Option<Rc<RefCell<PetalField<DomSurface>>>>,
    listeners: Listeners,
    document: web::Document,
}

impl Mounted {
    fn teardown(&mut self) {
        self.listeners.detach();
        if let Some(cursor) = self.cursor.take() {
            let mut c = cursor.borrow_mut();
            c.handle(InputEvent::Unload);
            c.surface_mut().shutdown();
        }
        if let Some(petals) = self.petals.take() {
            let mut p = petals.borrow_mut();
            p.teardown();
            p.surface_mut().shutdown();
        }
        dom::remove_injected(&self.document);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("crystal-cursor starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom::document_ready(&document).await?;
    dom::inject_styles(&document)?;

    let mut listeners = Listeners::default();
    let cursor = mount_cursor(&document, &mut listeners)?;
    let petals = match mount_petals(&document) {
        Ok(p) => Some(p),
        Err(e) => {
            log::warn!("petals disabled: {:?}", e);
            None
        }
    };
    if listeners.is_empty() {
        log::info!("no cursor listeners wired");
    } else {
        log::info!("listeners wired: {}", listeners.len());
    }

    let mut mounted = Mounted {
        cursor,
        petals,
        listeners,
        document,
    };
    events::wire_unload(move || mounted.teardown());
    Ok(())
}

/// Build the cursor on `<body>`. `Ok(None)` when the pointer cannot hover.
fn mount_cursor(
    document: &web::Document,
    listeners: &mut Listeners,
) -> anyhow::Result<Option<Rc<RefCell<CrystalCursor<DomSurface>>>>> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    let surface = DomSurface::new(document.clone(), body.into());
    let ticks = surface.ticks().clone();
    let Some(cursor) = CrystalCursor::new(surface, CursorConfig::default()) else {
        return Ok(None);
    };
    let cursor = Rc::new(RefCell::new(cursor));
    frame::install(&ticks, cursor.clone(), |c| {
        c.tick();
    });
    events::wire_cursor_listeners(document, &cursor, listeners);
    Ok(Some(cursor))
}

fn mount_petals(document: &web::Document) -> anyhow::Result<Rc<RefCell<PetalField<DomSurface>>>> {
    let layer = dom::petal_layer(document)?;
    let surface = DomSurface::new(document.clone(), layer);
    let ticks = surface.ticks().clone();
    let petals = Rc::new(RefCell::new(PetalField::new(surface, PetalConfig::default())));
    frame::install(&ticks, petals.clone(), |p| {
        p.tick();
    });
    petals.borrow_mut().start();
    Ok(petals)
}
