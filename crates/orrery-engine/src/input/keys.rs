use crate::input::queue::{InputEvent, InputQueue};

/// Browser key codes for the arrow keys.
pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;

/// Snapshot of the four directional controls for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl FrameInput {
    /// No direction held.
    pub const NONE: Self = Self {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    /// Whether any direction is held.
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Tracks which arrow keys are currently held.
///
/// The host only reports edges (key down / key up); this turns them into
/// the level-triggered "currently held" state sampled once per frame.
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    state: FrameInput,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a single key edge. Non-arrow keys are ignored; losing focus
    /// releases everything.
    pub fn apply(&mut self, event: &InputEvent) {
        let (key_code, pressed) = match *event {
            InputEvent::KeyDown { key_code } => (key_code, true),
            InputEvent::KeyUp { key_code } => (key_code, false),
            InputEvent::FocusLost => {
                self.release_all();
                return;
            }
            InputEvent::Quit => return,
        };
        match key_code {
            KEY_LEFT => self.state.left = pressed,
            KEY_RIGHT => self.state.right = pressed,
            KEY_UP => self.state.up = pressed,
            KEY_DOWN => self.state.down = pressed,
            _ => {}
        }
    }

    /// Apply every pending event in the queue, in order.
    pub fn apply_all(&mut self, input: &InputQueue) {
        for event in input.iter() {
            self.apply(event);
        }
    }

    /// Current held state.
    pub fn snapshot(&self) -> FrameInput {
        self.state
    }

    /// Release everything (focus lost).
    pub fn release_all(&mut self) {
        self.state = FrameInput::NONE;
    }
}
