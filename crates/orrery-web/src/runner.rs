use orrery_engine::{
    EngineContext, FrameLimiter, Game, GameConfig, InputEvent, InputQueue,
};

/// Generic game runner that wires up the frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
///
/// The host calls [`tick`](Self::tick) from `requestAnimationFrame` with the
/// measured delta; the runner releases at most one game update per call.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    limiter: FrameLimiter,
    config: GameConfig,
    initialized: bool,
    running: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            input: InputQueue::new(),
            limiter: FrameLimiter::new(config.target_fps),
            game,
            config,
            initialized: false,
            running: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.running = true;
        log::info!(
            "runner: {}x{} @ {} fps",
            self.config.world_width,
            self.config.world_height,
            self.config.target_fps
        );
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Feed one host frame. Returns true if a game frame was produced.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.initialized || !self.running {
            return false;
        }

        if self.input.quit_requested() {
            self.running = false;
            self.input.drain();
            log::info!("runner: quit after {} frames", self.ctx.frame());
            return false;
        }

        // Events stay queued until a frame is actually released
        let Some(frame_dt) = self.limiter.accumulate(dt) else {
            return false;
        };

        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input, frame_dt);
        self.input.drain();
        true
    }

    /// Whether the loop is still live. The host stops its animation loop
    /// once this turns false.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The game being driven.
    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn world_width(&self) -> f32 {
        self.config.world_width
    }

    pub fn world_height(&self) -> f32 {
        self.config.world_height
    }

    pub fn target_fps(&self) -> f32 {
        self.config.target_fps
    }

    // ---- Frame buffer accessors (read by the host from WASM memory) ----

    #[cfg(feature = "vectors")]
    pub fn vector_vertices_ptr(&self) -> *const f32 {
        self.ctx.vectors.buffer_ptr()
    }

    #[cfg(feature = "vectors")]
    pub fn vector_vertex_count(&self) -> u32 {
        self.ctx.vectors.vertex_count() as u32
    }

    #[cfg(feature = "vectors")]
    pub fn max_vector_vertices(&self) -> u32 {
        self.ctx.vectors.max_vertices() as u32
    }
}
