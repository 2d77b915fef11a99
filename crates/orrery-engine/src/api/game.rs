use crate::input::queue::InputQueue;
#[cfg(feature = "vectors")]
use crate::systems::vector::VectorState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window / document title shown by the host.
    pub title: String,
    /// Target frame rate. Faster host frames are coalesced (default: 60).
    pub target_fps: f32,
    /// World width in pixels.
    pub world_width: f32,
    /// World height in pixels.
    pub world_height: f32,
    /// Capacity of the vector frame buffer in vertices (default: 16384).
    pub max_vector_vertices: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            target_fps: 60.0,
            world_width: 800.0,
            world_height: 600.0,
            max_vector_vertices: 16384,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame. `dt` is the measured duration of the frame in seconds.
    /// The vector buffer has already been cleared; everything visible this
    /// frame must be drawn here.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue, dt: f32);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    #[cfg(feature = "vectors")]
    pub vectors: VectorState,
    frame: u64,
}

impl EngineContext {
    pub fn new(config: &GameConfig) -> Self {
        #[cfg(not(feature = "vectors"))]
        let _ = config;
        Self {
            #[cfg(feature = "vectors")]
            vectors: VectorState::new(config.max_vector_vertices),
            frame: 0,
        }
    }

    /// Number of frames started so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Clear per-frame transient data and start the next frame.
    pub fn clear_frame_data(&mut self) {
        #[cfg(feature = "vectors")]
        self.vectors.clear();
        self.frame += 1;
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_sixty_fps() {
        let config = GameConfig::default();
        assert_eq!(config.target_fps, 60.0);
        assert!(config.max_vector_vertices > 0);
    }

    #[test]
    fn clear_frame_data_advances_frame() {
        let mut ctx = EngineContext::default();
        assert_eq!(ctx.frame(), 0);
        ctx.clear_frame_data();
        ctx.clear_frame_data();
        assert_eq!(ctx.frame(), 2);
    }

    #[cfg(feature = "vectors")]
    #[test]
    fn context_sizes_vector_buffer_from_config() {
        let config = GameConfig {
            max_vector_vertices: 12,
            ..GameConfig::default()
        };
        let mut ctx = EngineContext::new(&config);
        assert_eq!(ctx.vectors.max_vertices(), 12);

        ctx.vectors.fill_rect(glam::Vec2::ZERO, 1.0, 1.0, crate::VectorColor::WHITE);
        assert_eq!(ctx.vectors.vertex_count(), 6);
        ctx.clear_frame_data();
        assert_eq!(ctx.vectors.vertex_count(), 0);
    }
}
