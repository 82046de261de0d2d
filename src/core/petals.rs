//! Background field of falling petals. Every petal that reaches the bottom is
//! replaced by a new one at the top, so the population stays constant.

use super::anim::Petal;
use super::config::PetalConfig;
use super::manager::{AnimationManager, TickReport};
use super::stage::Stage;
use super::surface::Surface;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct PetalField<S: Surface> {
    stage: Stage<S>,
    manager: AnimationManager<S>,
    rng: StdRng,
    config: PetalConfig,
    queued: usize,
    next_spawn_ms: f64,
    stopped: bool,
}

impl<S: Surface> PetalField<S> {
    pub fn new(surface: S, config: PetalConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            // petals are created per fall, nothing to pool
            stage: Stage::new(surface, 0),
            manager: AnimationManager::new(),
            rng,
            config,
            queued: 0,
            next_spawn_ms: 0.0,
            stopped: false,
        }
    }

    /// Queue the initial petals; they appear one per stagger interval.
    pub fn start(&mut self) {
        if self.stopped {
            return;
        }
        self.queued = self.config.count;
        self.next_spawn_ms = self.stage.now_ms();
        self.stage.schedule_tick();
        log::info!(
            "[petals] starting {} petals, {}ms apart",
            self.config.count,
            self.config.stagger_ms
        );
    }

    pub fn tick(&mut self) -> TickReport {
        if self.stopped {
            return TickReport::default();
        }
        let now_ms = self.stage.now_ms();
        while self.queued > 0 && now_ms >= self.next_spawn_ms {
            self.spawn_one();
            self.queued -= 1;
            self.next_spawn_ms += self.config.stagger_ms;
        }

        let report = self.manager.tick(&mut self.stage);
        for _ in 0..report.retired {
            self.spawn_one();
        }
        if self.queued > 0 {
            self.stage.schedule_tick();
        }
        report
    }

    fn spawn_one(&mut self) {
        match Petal::spawn(&mut self.stage, &mut self.rng) {
            Some(petal) => self.manager.add(Box::new(petal), &mut self.stage),
            None => log::warn!("[petals] petal could not be created"),
        }
    }

    /// Remove every petal and stop respawning. Terminal.
    pub fn teardown(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.queued = 0;
        let cleared = self.manager.clear_all(&mut self.stage);
        log::info!("[petals] torn down, removed {}", cleared);
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.manager.live()
    }

    #[inline]
    pub fn queued(&self) -> usize {
        self.queued
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
