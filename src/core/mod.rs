pub mod anim;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod manager;
pub mod petals;
pub mod pointer;
pub mod pool;
pub mod stage;
pub mod surface;
pub mod throttle;

pub use anim::{Animation, Burst, Petal, Shockwave, Trail};
pub use config::{CursorConfig, PetalConfig};
pub use cursor::{CrystalCursor, CursorMode, InputEvent};
pub use manager::{AnimationManager, TickReport};
pub use petals::PetalField;
pub use pointer::PointerState;
pub use pool::ParticlePool;
pub use stage::Stage;
pub use surface::{GlyphFlags, Look, Surface, VisualFrame, VisualId, VisualKind, Viewport};
pub use throttle::Throttle;
