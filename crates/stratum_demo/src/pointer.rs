//! Scripted pointer standing in for the OS mouse.

use std::collections::VecDeque;

use stratum_ui::{InputSource, MouseButton, PointerSource, Vec2};

/// One polled pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFrame {
    /// Pointer position.
    pub position: Vec2,
    /// Left button level.
    pub left: bool,
}

/// Replays a fixed list of pointer samples, one per poll.
///
/// Once the script runs out the pointer rests at its last position with
/// the button released.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPointer {
    frames: VecDeque<PointerFrame>,
    current: Option<PointerFrame>,
}

impl ScriptedPointer {
    /// Creates an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rests at `position` for `frames` polls with the button up.
    #[must_use]
    pub fn hover(mut self, position: Vec2, frames: usize) -> Self {
        self.push(position, false, frames);
        self
    }

    /// Presses and releases the left button at `position`.
    #[must_use]
    pub fn click(mut self, position: Vec2) -> Self {
        self.push(position, true, 1);
        self.push(position, false, 1);
        self
    }

    /// Presses at `from`, moves to `to` over `steps` polls, then releases.
    #[must_use]
    pub fn drag(mut self, from: Vec2, to: Vec2, steps: usize) -> Self {
        self.push(from, true, 1);
        let steps = steps.max(1);
        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.push(from + (to - from) * t, true, 1);
        }
        self.push(to, false, 1);
        self
    }

    /// Samples left to replay.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }

    /// Returns true once every sample was replayed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frames.is_empty()
    }

    fn push(&mut self, position: Vec2, left: bool, frames: usize) {
        self.frames
            .extend(std::iter::repeat(PointerFrame { position, left }).take(frames));
    }

    /// Advances to the next sample. Called once per button poll.
    fn advance(&mut self) -> PointerFrame {
        let next = self.frames.pop_front().unwrap_or(PointerFrame {
            position: self.current.map_or(Vec2::ZERO, |frame| frame.position),
            left: false,
        });
        self.current = Some(next);
        next
    }
}

impl InputSource for ScriptedPointer {
    fn sample_buttons(&mut self, states: &mut [bool]) {
        let frame = self.advance();
        if let Some(left) = states.get_mut(MouseButton::Left.index()) {
            *left = frame.left;
        }
    }
}

impl PointerSource for ScriptedPointer {
    fn pointer_position(&mut self) -> Vec2 {
        self.current.map_or(Vec2::ZERO, |frame| frame.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_ui::Mouse;

    #[test]
    fn test_click_is_one_press_edge() {
        let position = Vec2::new(10.0, 20.0);
        let mut pointer = ScriptedPointer::new().hover(position, 1).click(position);
        let mut mouse = Mouse::new();

        let mut presses = 0;
        while !pointer.is_finished() {
            mouse.poll(&mut pointer);
            assert_eq!(mouse.position(), position);
            if mouse.key(MouseButton::Left).pressed() {
                presses += 1;
            }
        }
        assert_eq!(presses, 1);
        assert!(mouse.key(MouseButton::Left).released());
    }

    #[test]
    fn test_drag_path() {
        let mut pointer = ScriptedPointer::new().drag(Vec2::ZERO, Vec2::new(100.0, 0.0), 4);
        assert_eq!(pointer.remaining(), 6);

        let mut mouse = Mouse::new();
        let mut xs = Vec::new();
        while !pointer.is_finished() {
            mouse.poll(&mut pointer);
            xs.push(mouse.position().x);
        }
        assert_eq!(xs, vec![0.0, 25.0, 50.0, 75.0, 100.0, 100.0]);
    }

    #[test]
    fn test_exhausted_script_rests_released() {
        let mut pointer = ScriptedPointer::new().drag(Vec2::ZERO, Vec2::new(5.0, 5.0), 1);
        let mut mouse = Mouse::new();
        for _ in 0..10 {
            mouse.poll(&mut pointer);
        }
        assert_eq!(mouse.position(), Vec2::new(5.0, 5.0));
        assert!(!mouse.key(MouseButton::Left).is_down());
    }
}
