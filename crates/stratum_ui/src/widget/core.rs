//! Core widget trait.

use std::any::Any;

use crate::geometry::Vec2;
use crate::input::Key;
use crate::render::Surface;

/// Callback bound to a widget, invoked synchronously on activation.
///
/// Arguments are captured by the closure.
pub type Action = Box<dyn FnMut()>;

/// Upcast to [`Any`] for typed element lookup.
pub trait AsAny: Any {
    /// Returns `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Returns `self` as mutable [`Any`].
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Base trait for all widgets.
///
/// The context calls [`on_update`](Self::on_update) once per frame, then
/// reads [`collides_with_mouse`](Self::collides_with_mouse) and
/// [`active`](Self::active) to decide whether the mouse is taken for every
/// widget evaluated after this one.
pub trait UiElement: AsAny {
    /// Updates hover/press state for this frame.
    ///
    /// `mouse_claimed` is true if an earlier widget already owns the
    /// mouse; the widget must then report no collision and must not
    /// activate. `mouse_key` is the left button.
    fn on_update(&mut self, mouse_claimed: bool, mouse_position: Vec2, mouse_key: Key, delta_time: f32);

    /// Issues draw calls for the current state.
    fn draw(&self, surface: &mut dyn Surface);

    /// Mouse is over this widget and nobody earlier claimed it.
    fn collides_with_mouse(&self) -> bool {
        false
    }

    /// Widget was activated this frame (or is being dragged).
    fn active(&self) -> bool {
        false
    }
}
