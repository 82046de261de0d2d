// Effect tuning shared by the cursor, the animation instances and the petal field.
//
// All timings are wall-clock milliseconds unless the name says otherwise.

// Pool and budget
pub const TRAIL_POOL_SIZE: usize = 50; // pre-allocated trail elements
pub const MAX_PARTICLES: usize = 100; // live trail + burst particles at once

// Trail emission
pub const TRAIL_THROTTLE_MS: f64 = 25.0; // at most one emission per interval
pub const TRAIL_MIN_MOVE_PX: f32 = 2.0; // displacement needed before emitting
pub const TRAIL_BATCH_MIN: usize = 2; // particles per emission (inclusive)
pub const TRAIL_BATCH_MAX: usize = 3;
pub const TRAIL_ANGLE_JITTER: f32 = 0.4; // full width of the random heading offset (rad)

// Trail particle motion
pub const FRAME_MS: f64 = 1000.0 / 60.0; // per-frame decay constants are expressed at 60 Hz
pub const TRAIL_DECAY_PER_FRAME: f32 = 0.015; // life lost per frame, scaled by speed
pub const TRAIL_SPEED_MIN: f32 = 0.3;
pub const TRAIL_SPEED_SPAN: f32 = 0.3;
pub const TRAIL_SIZE_MIN: f32 = 1.0;
pub const TRAIL_SIZE_SPAN: f32 = 1.5;
pub const TRAIL_DRIFT_PX: f32 = 15.0; // drift distance at end of life
pub const TRAIL_DRIFT_GAIN: f32 = 0.1; // fraction of drift applied per frame
pub const TRAIL_TAIL_BASE: f32 = 3.0; // height/width ratio at birth
pub const TRAIL_TAIL_GROWTH: f32 = 2.5; // extra stretch at end of life
pub const TRAIL_OPACITY: f32 = 0.8;
pub const TRAIL_HUE: f32 = 270.0;
pub const TRAIL_HUE_SPREAD: f32 = 30.0;

// Click burst
pub const BURST_COUNT: usize = 50;
pub const BURST_LIFETIME_MIN_MS: f64 = 800.0;
pub const BURST_LIFETIME_SPAN_MS: f64 = 400.0;
pub const BURST_VELOCITY_MIN: f32 = 0.5;
pub const BURST_VELOCITY_SPAN: f32 = 2.0;
pub const BURST_TRAVEL_PX: f32 = 50.0; // distance per unit velocity over the lifetime
pub const BURST_SIZE_MIN: f32 = 2.0;
pub const BURST_SIZE_SPAN: f32 = 12.0;
pub const BURST_HUES: [f32; 5] = [271.0, 280.0, 288.0, 302.0, 300.0]; // violet family

// Shockwave ring
pub const SHOCKWAVE_DURATION_MS: f64 = 600.0;
pub const SHOCKWAVE_MAX_DIAMETER_PX: f32 = 50.0;
pub const SHOCKWAVE_BORDER_PX: f32 = 1.0;
pub const SHOCKWAVE_HUE: f32 = 277.0;

// Pointer smoothing
pub const POINTER_LERP: f32 = 0.3; // smoothed += (raw - smoothed) * POINTER_LERP
pub const POINTER_SETTLE_PX: f32 = 0.1; // below this the glyph snaps to the pointer

// Scrollbar hit heuristic
pub const SCROLLBAR_MARGIN_PX: f32 = 20.0;

// Petal field
pub const PETAL_COUNT: usize = 30;
pub const PETAL_STAGGER_MS: f64 = 300.0;
pub const PETAL_DURATION_MIN_MS: f64 = 10_000.0;
pub const PETAL_DURATION_SPAN_MS: f64 = 20_000.0;
pub const PETAL_EDGE_PX: f32 = 30.0; // spawn above / retire below the viewport by this much
pub const PETAL_SWAY_PX: f32 = 100.0;
pub const PETAL_SCALE_MIN: f32 = 0.3;
pub const PETAL_SCALE_SPAN: f32 = 0.5;
pub const PETAL_OPACITY: f32 = 0.8;
pub const PETAL_HUE_MIN: f32 = 15.0;
pub const PETAL_HUE_SPAN: f32 = 15.0;
// cubic-bezier(0.25, 0.46, 0.45, 0.94) control points
pub const PETAL_EASE: [f32; 4] = [0.25, 0.46, 0.45, 0.94];
