use super::constants::*;

/// Cursor effect parameters. `Default` takes everything from `constants.rs`.
#[derive(Clone, Debug)]
pub struct CursorConfig {
    pub pool_size: usize,
    pub max_particles: usize,
    pub burst_count: usize,
    pub throttle_ms: f64,
    pub min_move_px: f32,
    pub lerp: f32,
    pub scrollbar_margin_px: f32,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            pool_size: TRAIL_POOL_SIZE,
            max_particles: MAX_PARTICLES,
            burst_count: BURST_COUNT,
            throttle_ms: TRAIL_THROTTLE_MS,
            min_move_px: TRAIL_MIN_MOVE_PX,
            lerp: POINTER_LERP,
            scrollbar_margin_px: SCROLLBAR_MARGIN_PX,
            seed: None,
        }
    }
}

/// Petal field parameters.
#[derive(Clone, Debug)]
pub struct PetalConfig {
    pub count: usize,
    pub stagger_ms: f64,
    pub seed: Option<u64>,
}

impl Default for PetalConfig {
    fn default() -> Self {
        Self {
            count: PETAL_COUNT,
            stagger_ms: PETAL_STAGGER_MS,
            seed: None,
        }
    }
}
