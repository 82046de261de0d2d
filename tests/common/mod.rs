// Recording surface shared by the host-side tests.

#![allow(dead_code)]

use crystal_cursor::core::{GlyphFlags, Look, Surface, VisualFrame, VisualId, VisualKind, Viewport};
use std::cell::Cell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

/// Manually advanced clock shared between a test and the surface it gave away.
#[derive(Clone, Default)]
pub struct Clock(Rc<Cell<f64>>);

impl Clock {
    pub fn now(&self) -> f64 {
        self.0.get()
    }

    pub fn advance(&self, ms: f64) {
        self.0.set(self.0.get() + ms);
    }
}

pub struct FakeSurface {
    clock: Clock,
    pub viewport: Viewport,
    pub hover: bool,
    /// Refuse to create more visuals once this many exist in total.
    pub create_limit: Option<usize>,
    next_id: u32,
    pub kinds: HashMap<VisualId, VisualKind>,
    pub visible: HashSet<VisualId>,
    pub frames: HashMap<VisualId, VisualFrame>,
    pub released: Vec<VisualId>,
    pub disposed: Vec<VisualId>,
    pub glyph_flags: Option<GlyphFlags>,
    pub tick_requests: usize,
}

impl FakeSurface {
    pub fn new() -> (Self, Clock) {
        let clock = Clock::default();
        let surface = Self {
            clock: clock.clone(),
            viewport: Viewport::fixed(1280.0, 720.0),
            hover: true,
            create_limit: None,
            next_id: 0,
            kinds: HashMap::new(),
            visible: HashSet::new(),
            frames: HashMap::new(),
            released: Vec::new(),
            disposed: Vec::new(),
            glyph_flags: None,
            tick_requests: 0,
        };
        (surface, clock)
    }

    /// Visuals of `kind` that exist and are visible.
    pub fn visible_of(&self, kind: VisualKind) -> usize {
        self.visible
            .iter()
            .filter(|id| self.kinds.get(id) == Some(&kind))
            .count()
    }

    /// Visuals of `kind` that exist, visible or not.
    pub fn existing_of(&self, kind: VisualKind) -> usize {
        self.kinds.values().filter(|k| **k == kind).count()
    }

    pub fn released_count(&self, id: VisualId) -> usize {
        self.released.iter().filter(|r| **r == id).count()
    }

    pub fn disposed_count(&self, id: VisualId) -> usize {
        self.disposed.iter().filter(|r| **r == id).count()
    }
}

impl Surface for FakeSurface {
    fn now_ms(&self) -> f64 {
        self.clock.now()
    }

    fn create_visual(&mut self, kind: VisualKind) -> Option<VisualId> {
        if let Some(limit) = self.create_limit {
            if self.next_id as usize >= limit {
                return None;
            }
        }
        let kinds = &self.kinds;
        let id = VisualId::next_free(&mut self.next_id, |id| kinds.contains_key(&id));
        self.kinds.insert(id, kind);
        Some(id)
    }

    fn show_visual(&mut self, id: VisualId, _look: Look) {
        assert!(self.kinds.contains_key(&id), "show on unknown visual {:?}", id);
        self.visible.insert(id);
    }

    fn place_visual(&mut self, id: VisualId, frame: &VisualFrame) {
        assert!(self.kinds.contains_key(&id), "place on unknown visual {:?}", id);
        self.frames.insert(id, *frame);
    }

    fn release_visual(&mut self, id: VisualId) {
        self.visible.remove(&id);
        self.frames.remove(&id);
        self.released.push(id);
    }

    fn dispose_visual(&mut self, id: VisualId) {
        self.kinds.remove(&id);
        self.visible.remove(&id);
        self.frames.remove(&id);
        self.disposed.push(id);
    }

    fn set_glyph_flags(&mut self, _id: VisualId, flags: GlyphFlags) {
        self.glyph_flags = Some(flags);
    }

    fn schedule_tick(&mut self) {
        self.tick_requests += 1;
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn supports_hover(&self) -> bool {
        self.hover
    }
}
