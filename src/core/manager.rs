use super::anim::Animation;
use super::stage::Stage;
use super::surface::Surface;

struct Live<S: Surface> {
    anim: Box<dyn Animation<S>>,
    /// Counts against the particle budget.
    particle: bool,
}

/// Outcome of one manager tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub retired: usize,
    pub live: usize,
}

/// Live set of animation instances, updated once per tick.
///
/// The manager keeps itself scheduled while anything is alive and goes idle
/// as soon as the set empties.
pub struct AnimationManager<S: Surface> {
    live: Vec<Live<S>>,
    particles: usize,
    running: bool,
}

impl<S: Surface> Default for AnimationManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> AnimationManager<S> {
    pub fn new() -> Self {
        Self {
            live: Vec::new(),
            particles: 0,
            running: false,
        }
    }

    pub fn add(&mut self, anim: Box<dyn Animation<S>>, stage: &mut Stage<S>) {
        self.push(anim, false, stage);
    }

    /// Add an instance that counts toward [`particles`](Self::particles).
    pub fn add_particle(&mut self, anim: Box<dyn Animation<S>>, stage: &mut Stage<S>) {
        self.push(anim, true, stage);
    }

    fn push(&mut self, anim: Box<dyn Animation<S>>, particle: bool, stage: &mut Stage<S>) {
        self.live.push(Live { anim, particle });
        if particle {
            self.particles += 1;
        }
        if !self.running {
            self.running = true;
            stage.schedule_tick();
        }
    }

    /// Update every live instance with one shared timestamp and drop the
    /// finished ones. Does nothing while idle.
    pub fn tick(&mut self, stage: &mut Stage<S>) -> TickReport {
        if !self.running {
            return TickReport::default();
        }
        let now_ms = stage.now_ms();
        let before = self.live.len();
        let mut retired_particles = 0;
        self.live.retain_mut(|l| {
            let alive = l.anim.update(now_ms, stage);
            if !alive && l.particle {
                retired_particles += 1;
            }
            alive
        });
        self.particles -= retired_particles;

        let live = self.live.len();
        if live > 0 {
            stage.schedule_tick();
        } else {
            self.running = false;
        }
        TickReport {
            retired: before - live,
            live,
        }
    }

    /// Dispose every instance and go idle. Returns how many were live.
    pub fn clear_all(&mut self, stage: &mut Stage<S>) -> usize {
        let cleared = self.live.len();
        for mut l in self.live.drain(..) {
            l.anim.dispose(stage);
        }
        self.particles = 0;
        self.running = false;
        cleared
    }

    #[inline]
    pub fn live(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn particles(&self) -> usize {
        self.particles
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
