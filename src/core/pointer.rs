use super::constants::POINTER_SETTLE_PX;
use super::surface::Viewport;
use glam::Vec2;

/// Raw pointer position and the smoothed position the glyph is drawn at.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub raw: Option<Vec2>,
    pub smoothed: Option<Vec2>,
}

impl PointerState {
    /// Record a raw position. The first one also seeds the smoothed position.
    pub fn track(&mut self, p: Vec2) {
        self.raw = Some(p);
        if self.smoothed.is_none() {
            self.smoothed = Some(p);
        }
    }

    /// Snap both positions to `p`.
    pub fn sync(&mut self, p: Vec2) {
        self.raw = Some(p);
        self.smoothed = Some(p);
    }

    /// Move the smoothed position toward the raw one by `weight` and return
    /// the distance left. Snaps once within [`POINTER_SETTLE_PX`].
    pub fn step(&mut self, weight: f32) -> f32 {
        let (Some(raw), Some(smoothed)) = (self.raw, self.smoothed) else {
            return 0.0;
        };
        let next = smoothed.lerp(raw, weight);
        let left = next.distance(raw);
        if left < POINTER_SETTLE_PX {
            self.smoothed = Some(raw);
            0.0
        } else {
            self.smoothed = Some(next);
            left
        }
    }

    /// Distance between the smoothed and the raw position.
    pub fn lag(&self) -> f32 {
        match (self.raw, self.smoothed) {
            (Some(r), Some(s)) => s.distance(r),
            _ => 0.0,
        }
    }
}

/// Whether a press at `p` on the document root most likely landed on a
/// native scrollbar: near the right edge with vertical overflow, or near the
/// bottom edge with horizontal overflow.
pub fn is_scrollbar_hit(p: Vec2, on_root: bool, viewport: &Viewport, margin: f32) -> bool {
    if !on_root {
        return false;
    }
    let right = viewport.width - p.x < margin && viewport.overflows_y();
    let bottom = viewport.height - p.y < margin && viewport.overflows_x();
    right || bottom
}
