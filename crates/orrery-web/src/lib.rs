pub mod runner;

pub use orrery_engine;
pub use runner::GameRunner;

/// Generate all `#[wasm_bindgen]` exports for a game.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (game_init, game_tick, input handlers, frame accessors)
///
/// The game type must provide `fn new() -> Result<Self, E>` with `E: Display`.
/// A construction error is fatal: it is logged and `game_init` panics before
/// the first frame.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyGame;
///
/// orrery_web::export_game!(MyGame, "my-game");
/// ```
///
/// The calling crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::orrery_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Game not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = match <$game_type>::new() {
                Ok(game) => game,
                Err(err) => {
                    log::error!("{}: refusing to start: {:#}", $game_name, err);
                    panic!("{}: invalid configuration: {:#}", $game_name, err);
                }
            };
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        /// Returns true when a new frame was written to the vector buffer.
        #[wasm_bindgen]
        pub fn game_tick(dt: f32) -> bool {
            with_runner(|r| r.tick(dt))
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_focus_lost() {
            with_runner(|r| r.push_input(InputEvent::FocusLost));
        }

        #[wasm_bindgen]
        pub fn game_quit() {
            with_runner(|r| r.push_input(InputEvent::Quit));
        }

        #[wasm_bindgen]
        pub fn game_is_running() -> bool {
            with_runner(|r| r.is_running())
        }

        // ---- Config accessors ----

        #[wasm_bindgen]
        pub fn game_title() -> String {
            with_runner(|r| r.title().to_owned())
        }

        #[wasm_bindgen]
        pub fn get_world_width() -> f32 {
            with_runner(|r| r.world_width())
        }

        #[wasm_bindgen]
        pub fn get_world_height() -> f32 {
            with_runner(|r| r.world_height())
        }

        #[wasm_bindgen]
        pub fn get_target_fps() -> f32 {
            with_runner(|r| r.target_fps())
        }
    };

    // Variant with vectors feature
    ($game_type:ty, $game_name:literal, vectors) => {
        $crate::export_game!($game_type, $game_name);

        // ---- Frame buffer accessors (only when vectors feature is enabled) ----

        #[wasm_bindgen]
        pub fn get_vector_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vector_vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vector_vertex_count() -> u32 {
            with_runner(|r| r.vector_vertex_count())
        }

        #[wasm_bindgen]
        pub fn get_max_vector_vertices() -> u32 {
            with_runner(|r| r.max_vector_vertices())
        }
    };
}
