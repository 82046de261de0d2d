//! Animation instances: trail particles, burst particles, shockwaves, petals.
//!
//! Each instance owns one visual. `update` advances it from wall-clock time and
//! returns `false` once it has finished, at which point the visual has already
//! been handed back. `dispose` does the same on demand and is safe to call
//! more than once.

use super::constants::*;
use super::stage::Stage;
use super::surface::{Look, Surface, VisualFrame, VisualId, VisualKind, Viewport};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

pub trait Animation<S: Surface> {
    /// Advance to `now_ms`. Returns whether the instance is still alive.
    fn update(&mut self, now_ms: f64, stage: &mut Stage<S>) -> bool;

    /// Release the visual immediately.
    fn dispose(&mut self, stage: &mut Stage<S>);
}

#[inline]
fn progress(started_ms: f64, now_ms: f64, duration_ms: f64) -> f32 {
    ((now_ms - started_ms) / duration_ms).max(0.0) as f32
}

// ---------------- Trail ----------------

/// Pool-backed streak left behind the cursor.
#[derive(Debug)]
pub struct Trail {
    visual: Option<VisualId>,
    pos: Vec2,
    angle: f32,
    life: f32,
    size: f32,
    speed: f32,
    last_ms: f64,
}

impl Trail {
    /// `None` when the pool is exhausted.
    pub fn spawn<S: Surface, R: Rng>(
        stage: &mut Stage<S>,
        origin: Vec2,
        angle: f32,
        rng: &mut R,
    ) -> Option<Self> {
        let hue = TRAIL_HUE + (rng.gen::<f32>() - 0.5) * TRAIL_HUE_SPREAD;
        let visual = stage.acquire_pooled(Look { hue })?;
        let trail = Self {
            visual: Some(visual),
            pos: origin,
            angle,
            life: 1.0,
            size: TRAIL_SIZE_MIN + rng.gen::<f32>() * TRAIL_SIZE_SPAN,
            speed: TRAIL_SPEED_MIN + rng.gen::<f32>() * TRAIL_SPEED_SPAN,
            last_ms: stage.now_ms(),
        };
        stage.place(visual, &trail.frame());
        Some(trail)
    }

    #[inline]
    pub fn life(&self) -> f32 {
        self.life
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    fn frame(&self) -> VisualFrame {
        let tail = TRAIL_TAIL_BASE + (1.0 - self.life) * TRAIL_TAIL_GROWTH;
        VisualFrame {
            width: self.size,
            height: self.size * tail,
            rotation: self.angle + FRAC_PI_2,
            opacity: self.life * TRAIL_OPACITY,
            ..VisualFrame::at(self.pos)
        }
    }
}

impl<S: Surface> Animation<S> for Trail {
    fn update(&mut self, now_ms: f64, stage: &mut Stage<S>) -> bool {
        let Some(visual) = self.visual else {
            return false;
        };
        // decay constants are per 60 Hz frame; scale by elapsed time
        let frames = ((now_ms - self.last_ms).max(0.0) / FRAME_MS) as f32;
        self.last_ms = now_ms;

        self.life -= self.speed * TRAIL_DECAY_PER_FRAME * frames;
        if self.life <= 0.0 {
            self.dispose(stage);
            return false;
        }

        let distance = (1.0 - self.life) * TRAIL_DRIFT_PX;
        self.pos += Vec2::from_angle(self.angle) * distance * TRAIL_DRIFT_GAIN * frames;
        stage.place(visual, &self.frame());
        true
    }

    fn dispose(&mut self, stage: &mut Stage<S>) {
        if let Some(visual) = self.visual.take() {
            stage.release_pooled(visual);
        }
    }
}

// ---------------- Burst ----------------

/// One shard of the click burst. Created and removed on the surface directly.
#[derive(Debug)]
pub struct Burst {
    visual: Option<VisualId>,
    origin: Vec2,
    heading: f32,
    velocity: f32,
    size: f32,
    rotation: f32,
    lifetime_ms: f64,
    started_ms: f64,
}

impl Burst {
    pub fn spawn<S: Surface, R: Rng>(
        stage: &mut Stage<S>,
        origin: Vec2,
        rng: &mut R,
    ) -> Option<Self> {
        let hue = BURST_HUES[rng.gen_range(0..BURST_HUES.len())];
        let visual = stage.create(VisualKind::Burst, Look { hue })?;
        let burst = Self {
            visual: Some(visual),
            origin,
            heading: rng.gen::<f32>() * TAU,
            velocity: BURST_VELOCITY_MIN + rng.gen::<f32>() * BURST_VELOCITY_SPAN,
            size: BURST_SIZE_MIN + rng.gen::<f32>() * BURST_SIZE_SPAN,
            rotation: rng.gen::<f32>() * TAU,
            lifetime_ms: BURST_LIFETIME_MIN_MS + rng.gen::<f64>() * BURST_LIFETIME_SPAN_MS,
            started_ms: stage.now_ms(),
        };
        stage.place(visual, &burst.frame(0.0));
        Some(burst)
    }

    fn frame(&self, p: f32) -> VisualFrame {
        let distance = self.velocity * p * BURST_TRAVEL_PX;
        VisualFrame {
            width: self.size,
            height: self.size,
            rotation: self.rotation + p * TAU,
            scale: 0.5 + p * 0.5,
            opacity: 1.0 - p,
            ..VisualFrame::at(self.origin + Vec2::from_angle(self.heading) * distance)
        }
    }
}

impl<S: Surface> Animation<S> for Burst {
    fn update(&mut self, now_ms: f64, stage: &mut Stage<S>) -> bool {
        let Some(visual) = self.visual else {
            return false;
        };
        let p = progress(self.started_ms, now_ms, self.lifetime_ms);
        if p >= 1.0 {
            self.dispose(stage);
            return false;
        }
        stage.place(visual, &self.frame(p));
        true
    }

    fn dispose(&mut self, stage: &mut Stage<S>) {
        if let Some(visual) = self.visual.take() {
            stage.remove(visual);
        }
    }
}

// ---------------- Shockwave ----------------

/// Expanding ring under the click point.
#[derive(Debug)]
pub struct Shockwave {
    visual: Option<VisualId>,
    center: Vec2,
    started_ms: f64,
}

impl Shockwave {
    pub fn spawn<S: Surface>(stage: &mut Stage<S>, center: Vec2) -> Option<Self> {
        let visual = stage.create(VisualKind::Shockwave, Look { hue: SHOCKWAVE_HUE })?;
        let wave = Self {
            visual: Some(visual),
            center,
            started_ms: stage.now_ms(),
        };
        stage.place(visual, &wave.frame(0.0));
        Some(wave)
    }

    fn frame(&self, p: f32) -> VisualFrame {
        let diameter = p * SHOCKWAVE_MAX_DIAMETER_PX;
        VisualFrame {
            width: diameter,
            height: diameter,
            opacity: 1.0 - p,
            border: SHOCKWAVE_BORDER_PX * (1.0 - p),
            ..VisualFrame::at(self.center)
        }
    }
}

impl<S: Surface> Animation<S> for Shockwave {
    fn update(&mut self, now_ms: f64, stage: &mut Stage<S>) -> bool {
        let Some(visual) = self.visual else {
            return false;
        };
        let p = progress(self.started_ms, now_ms, SHOCKWAVE_DURATION_MS);
        if p >= 1.0 {
            self.dispose(stage);
            return false;
        }
        stage.place(visual, &self.frame(p));
        true
    }

    fn dispose(&mut self, stage: &mut Stage<S>) {
        if let Some(visual) = self.visual.take() {
            stage.remove(visual);
        }
    }
}

// ---------------- Petal ----------------

/// A petal falling from above the viewport to below it.
#[derive(Debug)]
pub struct Petal {
    visual: Option<VisualId>,
    start: Vec2,
    end: Vec2,
    scale: f32,
    duration_ms: f64,
    started_ms: f64,
}

impl Petal {
    pub fn spawn<S: Surface, R: Rng>(stage: &mut Stage<S>, rng: &mut R) -> Option<Self> {
        let hue = PETAL_HUE_MIN + rng.gen::<f32>() * PETAL_HUE_SPAN;
        let visual = stage.create(VisualKind::Petal, Look { hue })?;
        let now_ms = stage.now_ms();
        let Viewport { width, height, .. } = stage.viewport();
        let x = rng.gen::<f32>() * width.max(0.0);
        let sway = ((now_ms * 0.001).sin() as f32) * PETAL_SWAY_PX;
        let petal = Self {
            visual: Some(visual),
            start: Vec2::new(x, -PETAL_EDGE_PX),
            end: Vec2::new(x + sway, height + PETAL_EDGE_PX),
            scale: PETAL_SCALE_MIN + rng.gen::<f32>() * PETAL_SCALE_SPAN,
            duration_ms: PETAL_DURATION_MIN_MS + rng.gen::<f64>() * PETAL_DURATION_SPAN_MS,
            started_ms: now_ms,
        };
        stage.place(visual, &petal.frame(0.0));
        Some(petal)
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    fn frame(&self, p: f32) -> VisualFrame {
        let e = ease_petal(p);
        VisualFrame {
            rotation: e * TAU,
            scale: self.scale,
            opacity: PETAL_OPACITY * (1.0 - e),
            ..VisualFrame::at(self.start.lerp(self.end, e))
        }
    }
}

impl<S: Surface> Animation<S> for Petal {
    fn update(&mut self, now_ms: f64, stage: &mut Stage<S>) -> bool {
        let Some(visual) = self.visual else {
            return false;
        };
        let p = progress(self.started_ms, now_ms, self.duration_ms);
        if p >= 1.0 {
            self.dispose(stage);
            return false;
        }
        stage.place(visual, &self.frame(p));
        true
    }

    fn dispose(&mut self, stage: &mut Stage<S>) {
        if let Some(visual) = self.visual.take() {
            stage.remove(visual);
        }
    }
}

// ---------------- Easing ----------------

/// Petal easing curve, `cubic-bezier(0.25, 0.46, 0.45, 0.94)`.
#[inline]
pub fn ease_petal(p: f32) -> f32 {
    let [x1, y1, x2, y2] = PETAL_EASE;
    cubic_bezier(x1, y1, x2, y2, p)
}

/// CSS-style cubic bezier through (0,0) and (1,1): solves for the curve
/// parameter whose x equals `t`, then returns the matching y.
pub fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let bez = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    };
    let bez_ds = |a: f32, b: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * a + 6.0 * inv * s * (b - a) + 3.0 * s * s * (1.0 - b)
    };

    // Newton first, bisection if the slope is too flat
    let mut s = t;
    for _ in 0..8 {
        let err = bez(x1, x2, s) - t;
        if err.abs() < 1e-6 {
            return bez(y1, y2, s);
        }
        let d = bez_ds(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = bez(x1, x2, s);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    bez(y1, y2, s)
}
