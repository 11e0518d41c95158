//! Input handling for UI.
//!
//! Raw button levels come from an [`InputSource`] once per frame and are
//! turned into edge-triggered [`Key`]s. Nothing here talks to the OS.

use crate::geometry::Vec2;

/// Edge-triggered button state built from two consecutive raw samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Key {
    /// Raw level in the previous frame.
    pub previous_state: bool,
    /// Raw level in the current frame.
    pub state: bool,
}

impl Key {
    /// Creates a key from two samples.
    #[must_use]
    pub const fn new(previous_state: bool, state: bool) -> Self {
        Self {
            previous_state,
            state,
        }
    }

    /// Shifts the current level into the previous slot and stores `raw`.
    ///
    /// Call exactly once per frame.
    pub fn update(&mut self, raw: bool) {
        self.previous_state = self.state;
        self.state = raw;
    }

    /// Went down this frame.
    #[must_use]
    pub const fn pressed(&self) -> bool {
        !self.previous_state && self.state
    }

    /// Down in both frames.
    #[must_use]
    pub const fn held(&self) -> bool {
        self.previous_state && self.state
    }

    /// Went up this frame.
    #[must_use]
    pub const fn released(&self) -> bool {
        self.previous_state && !self.state
    }

    /// Currently down.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        self.state
    }
}

/// Anything that yields raw boolean button levels per poll.
pub trait InputSource {
    /// Writes the current raw level of every button into `states`.
    ///
    /// Buttons the source does not know about must be left `false`.
    fn sample_buttons(&mut self, states: &mut [bool]);
}

/// An [`InputSource`] that also knows where the pointer is.
pub trait PointerSource: InputSource {
    /// Current pointer position in screen space.
    fn pointer_position(&mut self) -> Vec2;
}

/// A bank of edge-triggered keys fed from raw levels.
#[derive(Debug, Clone)]
pub struct ScanHardware {
    keys: Vec<Key>,
    scratch: Vec<bool>,
}

impl ScanHardware {
    /// Creates a bank of `buttons` released keys.
    #[must_use]
    pub fn new(buttons: usize) -> Self {
        Self {
            keys: vec![Key::default(); buttons],
            scratch: vec![false; buttons],
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn buttons(&self) -> usize {
        self.keys.len()
    }

    /// Advances every key by one frame. Missing raw entries read as released.
    pub fn update_state(&mut self, raw: &[bool]) {
        for (index, key) in self.keys.iter_mut().enumerate() {
            key.update(raw.get(index).copied().unwrap_or(false));
        }
    }

    /// Samples `source` and advances every key by one frame.
    pub fn poll<S: InputSource + ?Sized>(&mut self, source: &mut S) {
        self.scratch.fill(false);
        source.sample_buttons(&mut self.scratch);
        for (key, &raw) in self.keys.iter_mut().zip(&self.scratch) {
            key.update(raw);
        }
    }

    /// All keys, in button index order.
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }
}

/// Mouse button indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left = 0,
    /// Middle mouse button (scroll wheel click).
    Middle = 1,
    /// Right mouse button.
    Right = 2,
    /// Back side button.
    Back = 3,
    /// Forward side button.
    Forward = 4,
}

impl MouseButton {
    /// Number of tracked mouse buttons.
    pub const COUNT: usize = 5;

    /// Index into a key slice.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Five-button mouse with position tracking.
#[derive(Debug, Clone)]
pub struct Mouse {
    hardware: ScanHardware,
    position: Vec2,
    previous_position: Vec2,
}

impl Mouse {
    /// Creates a mouse at the origin with every button released.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hardware: ScanHardware::new(MouseButton::COUNT),
            position: Vec2::ZERO,
            previous_position: Vec2::ZERO,
        }
    }

    /// Advances one frame from already sampled values.
    pub fn update_state(&mut self, position: Vec2, raw: &[bool]) {
        self.hardware.update_state(raw);
        self.previous_position = self.position;
        self.position = position;
    }

    /// Samples `source` and advances one frame.
    pub fn poll<S: PointerSource + ?Sized>(&mut self, source: &mut S) {
        self.hardware.poll(source);
        self.previous_position = self.position;
        self.position = source.pointer_position();
    }

    /// All buttons, indexable by [`MouseButton::index`].
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        self.hardware.keys()
    }

    /// State of one button.
    #[must_use]
    pub fn key(&self, button: MouseButton) -> Key {
        self.keys()[button.index()]
    }

    /// Position this frame.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position last frame.
    #[must_use]
    pub fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    /// Movement since last frame.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.position - self.previous_position
    }
}

impl Default for Mouse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        buttons: Vec<bool>,
        position: Vec2,
    }

    impl InputSource for Fixed {
        fn sample_buttons(&mut self, states: &mut [bool]) {
            for (state, &raw) in states.iter_mut().zip(&self.buttons) {
                *state = raw;
            }
        }
    }

    impl PointerSource for Fixed {
        fn pointer_position(&mut self) -> Vec2 {
            self.position
        }
    }

    #[test]
    fn test_key_edges() {
        let mut key = Key::default();

        key.update(true);
        assert!(key.pressed() && !key.held() && !key.released());

        key.update(true);
        assert!(!key.pressed() && key.held() && key.is_down());

        key.update(false);
        assert!(key.released() && !key.is_down());

        key.update(false);
        assert!(!key.pressed() && !key.held() && !key.released());
    }

    #[test]
    fn test_missing_raw_entries_read_released() {
        let mut hardware = ScanHardware::new(3);
        hardware.update_state(&[true, true, true]);
        hardware.update_state(&[true]);

        assert!(hardware.keys()[0].held());
        assert!(hardware.keys()[1].released());
        assert!(hardware.keys()[2].released());
    }

    #[test]
    fn test_mouse_poll() {
        let mut mouse = Mouse::new();
        let mut source = Fixed {
            buttons: vec![true, false, true],
            position: Vec2::new(10.0, 20.0),
        };

        mouse.poll(&mut source);
        assert!(mouse.key(MouseButton::Left).pressed());
        assert!(!mouse.key(MouseButton::Middle).is_down());
        assert!(mouse.key(MouseButton::Right).pressed());
        assert!(!mouse.key(MouseButton::Forward).is_down());
        assert_eq!(mouse.delta(), Vec2::new(10.0, 20.0));

        source.position = Vec2::new(15.0, 20.0);
        source.buttons[0] = false;
        mouse.poll(&mut source);
        assert!(mouse.key(MouseButton::Left).released());
        assert_eq!(mouse.previous_position(), Vec2::new(10.0, 20.0));
        assert_eq!(mouse.delta(), Vec2::new(5.0, 0.0));
    }
}
