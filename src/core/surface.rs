//! Rendering surface abstraction.
//!
//! The effects never touch a page directly. Everything they draw goes through
//! a [`Surface`], which the browser front-end implements with DOM elements and
//! the tests implement with a recorder.

use glam::Vec2;

/// Opaque handle to one visual element owned by a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VisualId(pub u32);

impl VisualId {
    /// Next id from a wrapping `counter`, skipping ids for which `taken`
    /// holds so a long-lived visual is never handed out twice.
    pub fn next_free(counter: &mut u32, taken: impl Fn(VisualId) -> bool) -> VisualId {
        loop {
            let id = VisualId(*counter);
            *counter = counter.wrapping_add(1);
            if !taken(id) {
                return id;
            }
        }
    }
}

/// What a visual is used for; surfaces pick element type and base style from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VisualKind {
    Glyph,
    Trail,
    Burst,
    Shockwave,
    Petal,
}

/// Appearance applied when a visual becomes visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Look {
    pub hue: f32,
}

/// Geometry pushed to a visual on every update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualFrame {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Radians.
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    pub border: f32,
}

impl VisualFrame {
    pub fn at(pos: Vec2) -> Self {
        Self {
            pos,
            width: 0.0,
            height: 0.0,
            rotation: 0.0,
            scale: 1.0,
            opacity: 1.0,
            border: 0.0,
        }
    }
}

/// Cursor glyph presentation flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphFlags {
    pub hidden: bool,
    pub active: bool,
    pub hover: bool,
}

/// Viewport and document extents, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_width: f32,
    pub scroll_height: f32,
    pub client_width: f32,
    pub client_height: f32,
}

impl Viewport {
    /// Viewport with no overflow in either direction.
    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            scroll_width: width,
            scroll_height: height,
            client_width: width,
            client_height: height,
        }
    }

    #[inline]
    pub fn overflows_y(&self) -> bool {
        self.scroll_height > self.client_height
    }

    #[inline]
    pub fn overflows_x(&self) -> bool {
        self.scroll_width > self.client_width
    }
}

/// Capabilities the effects need from the hosting page.
pub trait Surface {
    /// Milliseconds on a monotonic clock.
    fn now_ms(&self) -> f64;

    /// Create a hidden visual. `None` means the element could not be made
    /// and the caller skips whatever it was for.
    fn create_visual(&mut self, kind: VisualKind) -> Option<VisualId>;

    /// Make a visual visible with the given appearance.
    fn show_visual(&mut self, id: VisualId, look: Look);

    fn place_visual(&mut self, id: VisualId, frame: &VisualFrame);

    /// Hide a pooled visual and reset its per-use state; it stays allocated.
    fn release_visual(&mut self, id: VisualId);

    /// Remove a visual permanently.
    fn dispose_visual(&mut self, id: VisualId);

    fn set_glyph_flags(&mut self, id: VisualId, flags: GlyphFlags);

    /// Ask for one more tick on the next frame. Repeated requests before the
    /// frame fires coalesce.
    fn schedule_tick(&mut self);

    fn viewport(&self) -> Viewport;

    /// Whether the primary pointer can hover. Without it the cursor effects
    /// stay off for the whole session.
    fn supports_hover(&self) -> bool;
}
