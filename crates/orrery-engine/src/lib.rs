pub mod api;
pub mod core;
pub mod systems;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use crate::core::time::{SimulationClock, FrameLimiter};
pub use input::queue::{InputEvent, InputQueue};
pub use input::keys::{FrameInput, HeldKeys};

#[cfg(feature = "vectors")]
pub use systems::vector::{VectorState, VectorVertex, VectorColor};
