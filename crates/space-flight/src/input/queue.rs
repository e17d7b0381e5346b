use glam::Vec2;

/// DOM `keyCode` values for the arrow keys.
pub mod key_codes {
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_UP: u32 = 38;
    pub const ARROW_RIGHT: u32 = 39;
    pub const ARROW_DOWN: u32 = 40;
}

/// A steering direction. Each press moves the ship's target one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM `keyCode`. Non-arrow keys map to `None`.
    pub fn from_key_code(key_code: u32) -> Option<Self> {
        match key_code {
            key_codes::ARROW_LEFT => Some(Direction::Left),
            key_codes::ARROW_UP => Some(Direction::Up),
            key_codes::ARROW_RIGHT => Some(Direction::Right),
            key_codes::ARROW_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.key` name such as `"ArrowLeft"`.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowUp" => Some(Direction::Up),
            "ArrowRight" => Some(Direction::Right),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn key_code(self) -> u32 {
        match self {
            Direction::Left => key_codes::ARROW_LEFT,
            Direction::Up => key_codes::ARROW_UP,
            Direction::Right => key_codes::ARROW_RIGHT,
            Direction::Down => key_codes::ARROW_DOWN,
        }
    }

    /// Unit vector in the ship's (x, y) target plane. Up is +y.
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
        }
    }
}

/// Input event types the simulation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key was pressed.
    KeyDown { key_code: u32 },
    /// A key was released. Steering is press-driven, so releases are ignored.
    KeyUp { key_code: u32 },
}

impl InputEvent {
    /// The steering direction this event requests, if any.
    pub fn direction(&self) -> Option<Direction> {
        match *self {
            InputEvent::KeyDown { key_code } => Direction::from_key_code(key_code),
            InputEvent::KeyUp { .. } => None,
        }
    }
}

/// A queue of input events.
/// JS writes events into the queue between frames; the driver drains it at
/// the start of each step.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop pending events without looking at them.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
