use super::pool::ParticlePool;
use super::surface::{Look, Surface, VisualFrame, VisualId, VisualKind, Viewport};

/// A surface together with the pool of visuals pre-allocated on it.
///
/// Animation instances update against a stage so that pooled and free-standing
/// visuals go back to the right place when they finish.
pub struct Stage<S: Surface> {
    surface: S,
    pool: ParticlePool,
}

impl<S: Surface> Stage<S> {
    /// Pre-allocates `pool_capacity` hidden trail visuals on `surface`.
    pub fn new(mut surface: S, pool_capacity: usize) -> Self {
        let pool =
            ParticlePool::with_capacity(pool_capacity, || surface.create_visual(VisualKind::Trail));
        if pool.capacity() < pool_capacity {
            log::warn!(
                "[stage] pool short: {} of {} visuals created",
                pool.capacity(),
                pool_capacity
            );
        }
        Self { surface, pool }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.surface.now_ms()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.surface.viewport()
    }

    #[inline]
    pub fn schedule_tick(&mut self) {
        self.surface.schedule_tick();
    }

    /// Take a free pooled visual and make it visible.
    pub fn acquire_pooled(&mut self, look: Look) -> Option<VisualId> {
        let id = self.pool.acquire()?;
        self.surface.show_visual(id, look);
        Some(id)
    }

    /// Hand a pooled visual back. Resets it on the surface only the first time.
    pub fn release_pooled(&mut self, id: VisualId) -> bool {
        let released = self.pool.release(id);
        if released {
            self.surface.release_visual(id);
        }
        released
    }

    /// Create a free-standing visual and make it visible.
    pub fn create(&mut self, kind: VisualKind, look: Look) -> Option<VisualId> {
        let id = self.surface.create_visual(kind)?;
        self.surface.show_visual(id, look);
        Some(id)
    }

    #[inline]
    pub fn place(&mut self, id: VisualId, frame: &VisualFrame) {
        self.surface.place_visual(id, frame);
    }

    #[inline]
    pub fn remove(&mut self, id: VisualId) {
        self.surface.dispose_visual(id);
    }

    /// Force every pooled visual back to free. Returns how many were in use.
    pub fn clear_pool(&mut self) -> usize {
        let released = self.pool.clear_all();
        for id in &released {
            self.surface.release_visual(*id);
        }
        released.len()
    }

    /// Remove every pooled visual from the surface; the pool is empty afterwards.
    pub fn dispose_pool(&mut self) {
        for id in self.pool.drain() {
            self.surface.dispose_visual(id);
        }
    }

    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
