//! Cursor controller: pointer smoothing, the input state machine, and the
//! trail / burst / shockwave emitters.

use super::anim::{Burst, Shockwave, Trail};
use super::config::CursorConfig;
use super::constants::{TRAIL_ANGLE_JITTER, TRAIL_BATCH_MAX, TRAIL_BATCH_MIN};
use super::manager::{AnimationManager, TickReport};
use super::pointer::{is_scrollbar_hit, PointerState};
use super::stage::Stage;
use super::surface::{GlyphFlags, Surface, VisualFrame, VisualId, VisualKind};
use super::throttle::Throttle;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;

/// Input the host forwards to the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove { pos: Vec2 },
    PointerEnter,
    PointerLeave,
    /// `on_root` is true when the press targeted the document root or body.
    PointerDown { pos: Vec2, on_root: bool },
    /// `buttons` is the mask of buttons still held after the release.
    PointerUp { pos: Vec2, buttons: u16 },
    DragStart,
    Drag,
    DragEnd { pos: Option<Vec2> },
    /// Pointer entered / left an interactive element (link, button, `[data-hover]`).
    HoverEnter,
    HoverLeave,
    Scroll,
    Unload,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorMode {
    Idle,
    Tracking,
    Dragging,
    ScrollbarDragging,
    /// Torn down; every further event is ignored.
    Destroyed,
}

pub struct CrystalCursor<S: Surface> {
    stage: Stage<S>,
    manager: AnimationManager<S>,
    pointer: PointerState,
    throttle: Throttle<(Vec2, f32)>,
    glyph: Option<VisualId>,
    flags: GlyphFlags,
    mode: CursorMode,
    config: CursorConfig,
    rng: StdRng,
}

impl<S: Surface> CrystalCursor<S> {
    /// Returns `None` when the surface has no hover-capable pointer; the
    /// effect then stays off for the session.
    pub fn new(surface: S, config: CursorConfig) -> Option<Self> {
        if !surface.supports_hover() {
            log::info!("[cursor] no hover-capable pointer, effects disabled");
            return None;
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut stage = Stage::new(surface, config.pool_size);
        let flags = GlyphFlags {
            hidden: true,
            ..GlyphFlags::default()
        };
        let glyph = stage.surface_mut().create_visual(VisualKind::Glyph);
        match glyph {
            Some(g) => stage.surface_mut().set_glyph_flags(g, flags),
            None => log::warn!("[cursor] glyph could not be created"),
        }
        log::info!(
            "[cursor] ready: pool={} max_particles={}",
            stage.pool().capacity(),
            config.max_particles
        );
        Some(Self {
            stage,
            manager: AnimationManager::new(),
            pointer: PointerState::default(),
            throttle: Throttle::new(config.throttle_ms),
            glyph,
            flags,
            mode: CursorMode::Idle,
            config,
            rng,
        })
    }

    pub fn handle(&mut self, ev: InputEvent) {
        if self.mode == CursorMode::Destroyed {
            return;
        }
        match ev {
            InputEvent::PointerMove { pos } => self.on_move(pos),
            InputEvent::PointerDown { pos, on_root } => self.on_down(pos, on_root),
            InputEvent::PointerUp { pos, buttons } => self.on_up(pos, buttons),
            InputEvent::PointerEnter => self.set_hidden(false),
            InputEvent::PointerLeave => {
                self.set_hidden(true);
                self.clear_effects();
            }
            InputEvent::DragStart => {
                self.mode = CursorMode::Dragging;
                let cleared = self.clear_effects();
                log::debug!("[cursor] drag start, cleared {}", cleared);
            }
            InputEvent::Drag => self.set_hidden(true),
            InputEvent::DragEnd { pos } => {
                self.mode = CursorMode::Tracking;
                match pos {
                    Some(p) => self.sync_to(p),
                    None => self.set_hidden(false),
                }
            }
            InputEvent::HoverEnter => self.update_flags(|f| f.hover = true),
            InputEvent::HoverLeave => self.update_flags(|f| f.hover = false),
            InputEvent::Scroll => log::trace!("[cursor] scroll"),
            InputEvent::Unload => self.teardown(),
        }
    }

    fn on_move(&mut self, pos: Vec2) {
        match self.mode {
            CursorMode::Dragging | CursorMode::ScrollbarDragging | CursorMode::Destroyed => {}
            CursorMode::Idle => {
                self.mode = CursorMode::Tracking;
                self.sync_to(pos);
            }
            CursorMode::Tracking => {
                self.set_hidden(false);
                let Some(prev) = self.pointer.smoothed else {
                    self.sync_to(pos);
                    return;
                };
                self.pointer.track(pos);

                let delta = pos - prev;
                if delta.length() > self.config.min_move_px {
                    let angle = delta.y.atan2(delta.x);
                    let now_ms = self.stage.now_ms();
                    match self.throttle.offer(now_ms, (prev, angle)) {
                        Some((origin, angle)) => {
                            self.emit_trail(origin, angle);
                        }
                        // held for a trailing emission from tick()
                        None => self.stage.schedule_tick(),
                    }
                }

                self.pointer.step(self.config.lerp);
                self.place_glyph();
                if self.pointer.lag() > 0.0 {
                    self.stage.schedule_tick();
                }
            }
        }
    }

    fn on_down(&mut self, pos: Vec2, on_root: bool) {
        let viewport = self.stage.viewport();
        if is_scrollbar_hit(pos, on_root, &viewport, self.config.scrollbar_margin_px) {
            self.mode = CursorMode::ScrollbarDragging;
            let cleared = self.clear_effects();
            log::debug!("[cursor] scrollbar press, cleared {}", cleared);
            return;
        }
        self.mode = CursorMode::Tracking;
        self.update_flags(|f| f.active = true);
        let shards = self.emit_burst(pos);
        self.emit_shockwave(pos);
        log::debug!("[cursor] click at ({:.0},{:.0}), {} shards", pos.x, pos.y, shards);
    }

    fn on_up(&mut self, pos: Vec2, buttons: u16) {
        self.update_flags(|f| f.active = false);
        self.sync_to(pos);
        let still_engaged = self.mode == CursorMode::ScrollbarDragging && buttons != 0;
        if !still_engaged {
            self.mode = CursorMode::Tracking;
        }
    }

    /// Advance one frame: fire a due trailing emission, update animations and
    /// keep the glyph gliding toward the pointer.
    pub fn tick(&mut self) -> TickReport {
        if self.mode == CursorMode::Destroyed {
            return TickReport::default();
        }
        if self.mode == CursorMode::Tracking {
            let now_ms = self.stage.now_ms();
            if let Some((origin, angle)) = self.throttle.poll(now_ms) {
                self.emit_trail(origin, angle);
            }
        }

        let report = self.manager.tick(&mut self.stage);

        let mut settling = false;
        if self.mode == CursorMode::Tracking && self.pointer.lag() > 0.0 {
            settling = self.pointer.step(self.config.lerp) > 0.0;
            self.place_glyph();
        }
        if settling || self.throttle.has_pending() {
            self.stage.schedule_tick();
        }
        report
    }

    /// Spawn one trail emission of 2 or 3 jittered particles. Returns how many
    /// were created.
    pub fn emit_trail(&mut self, origin: Vec2, angle: f32) -> usize {
        if self.manager.particles() >= self.config.max_particles {
            return 0;
        }
        let count = self.rng.gen_range(TRAIL_BATCH_MIN..=TRAIL_BATCH_MAX);
        let angles: SmallVec<[f32; TRAIL_BATCH_MAX]> = (0..count)
            .map(|_| angle + (self.rng.gen::<f32>() - 0.5) * TRAIL_ANGLE_JITTER)
            .collect();
        let mut spawned = 0;
        for a in angles {
            if !self.emit_trail_particle(origin, a) {
                break;
            }
            spawned += 1;
        }
        spawned
    }

    /// Spawn a single trail particle. False when the particle budget or the
    /// pool is exhausted; nothing is registered in that case.
    pub fn emit_trail_particle(&mut self, origin: Vec2, angle: f32) -> bool {
        if self.manager.particles() >= self.config.max_particles {
            return false;
        }
        match Trail::spawn(&mut self.stage, origin, angle, &mut self.rng) {
            Some(trail) => {
                self.manager.add_particle(Box::new(trail), &mut self.stage);
                true
            }
            None => false,
        }
    }

    /// Spawn up to `burst_count` shards, stopping at the particle budget.
    pub fn emit_burst(&mut self, at: Vec2) -> usize {
        let mut spawned = 0;
        for _ in 0..self.config.burst_count {
            if self.manager.particles() >= self.config.max_particles {
                break;
            }
            let Some(burst) = Burst::spawn(&mut self.stage, at, &mut self.rng) else {
                break;
            };
            self.manager.add_particle(Box::new(burst), &mut self.stage);
            spawned += 1;
        }
        spawned
    }

    pub fn emit_shockwave(&mut self, at: Vec2) -> bool {
        match Shockwave::spawn(&mut self.stage, at) {
            Some(wave) => {
                self.manager.add(Box::new(wave), &mut self.stage);
                true
            }
            None => false,
        }
    }

    /// Dispose every live animation and free the pool. Returns how many
    /// animations were live.
    pub fn clear_effects(&mut self) -> usize {
        let cleared = self.manager.clear_all(&mut self.stage);
        self.stage.clear_pool();
        self.throttle.cancel();
        cleared
    }

    /// Remove everything this cursor put on the surface. Terminal.
    pub fn teardown(&mut self) {
        if self.mode == CursorMode::Destroyed {
            return;
        }
        self.clear_effects();
        self.stage.dispose_pool();
        if let Some(glyph) = self.glyph.take() {
            self.stage.surface_mut().dispose_visual(glyph);
        }
        self.mode = CursorMode::Destroyed;
        log::info!("[cursor] torn down");
    }

    /// Snap pointer and glyph exactly to `p` and show the glyph.
    fn sync_to(&mut self, p: Vec2) {
        self.pointer.sync(p);
        self.place_glyph();
        self.set_hidden(false);
    }

    fn place_glyph(&mut self) {
        if let (Some(glyph), Some(pos)) = (self.glyph, self.pointer.smoothed) {
            self.stage.place(glyph, &VisualFrame::at(pos));
        }
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.update_flags(|f| f.hidden = hidden);
    }

    fn update_flags(&mut self, change: impl FnOnce(&mut GlyphFlags)) {
        let before = self.flags;
        change(&mut self.flags);
        if self.flags != before {
            if let Some(glyph) = self.glyph {
                self.stage.surface_mut().set_glyph_flags(glyph, self.flags);
            }
        }
    }

    #[inline]
    pub fn mode(&self) -> CursorMode {
        self.mode
    }

    #[inline]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    #[inline]
    pub fn glyph_flags(&self) -> GlyphFlags {
        self.flags
    }

    #[inline]
    pub fn live_animations(&self) -> usize {
        self.manager.live()
    }

    #[inline]
    pub fn particles(&self) -> usize {
        self.manager.particles()
    }

    #[inline]
    pub fn stage(&self) -> &Stage<S> {
        &self.stage
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        self.stage.surface_mut()
    }
}
