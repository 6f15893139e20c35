//! Frame input sampling and click-edge detection.

use glam::Vec2;

/// Everything the session needs from the input device for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Pointer position in arena coordinates; the player's face follows it.
    pub pointer: Vec2,
    /// Whether the punch button is currently held down.
    pub button_down: bool,
}

impl FrameInput {
    pub fn new(pointer: Vec2, button_down: bool) -> Self {
        Self {
            pointer,
            button_down,
        }
    }
}

/// Turns a sampled button level into a press edge.
///
/// A punch fires on the down transition only; holding the button punches
/// once until it is released and pressed again.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonLatch {
    held: bool,
}

impl ButtonLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds this frame's button level and returns true on a down edge.
    pub fn rising_edge(&mut self, down: bool) -> bool {
        let edge = down && !self.held;
        self.held = down;
        edge
    }
}
