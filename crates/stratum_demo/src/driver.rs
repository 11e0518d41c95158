//! Fixed-rate frame driver.
//!
//! Frames are simulated, not timed: every frame advances the clock by
//! exactly `1 / frames_per_second`.

use stratum_ui::{CommandList, ElementId, Mouse, PointerSource, UiContext};
use tracing::{debug, trace};

/// Per-run frame statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames driven so far.
    pub frames: u64,
    /// Draw commands recorded in the last frame.
    pub last_commands: usize,
    /// Most draw commands recorded in a single frame.
    pub peak_commands: usize,
    /// Number of frames in which the focused element changed.
    pub focus_changes: u64,
}

/// Owns a context, a mouse and a recording surface, and runs frames.
pub struct FrameDriver {
    context: UiContext,
    mouse: Mouse,
    surface: CommandList,
    delta_time: f32,
    last_focus: Option<ElementId>,
    stats: FrameStats,
}

impl FrameDriver {
    /// Creates a driver around `context`.
    ///
    /// A zero frame rate is treated as one frame per second.
    #[must_use]
    pub fn new(context: UiContext, frames_per_second: u32) -> Self {
        Self {
            context,
            mouse: Mouse::new(),
            surface: CommandList::new(),
            delta_time: 1.0 / frames_per_second.max(1) as f32,
            last_focus: None,
            stats: FrameStats::default(),
        }
    }

    /// The driven context.
    #[must_use]
    pub fn context(&self) -> &UiContext {
        &self.context
    }

    /// The driven context, for adding or inspecting elements between frames.
    pub fn context_mut(&mut self) -> &mut UiContext {
        &mut self.context
    }

    /// Mouse state after the last poll.
    #[must_use]
    pub fn mouse(&self) -> &Mouse {
        &self.mouse
    }

    /// Commands recorded in the current frame.
    #[must_use]
    pub fn surface(&self) -> &CommandList {
        &self.surface
    }

    /// Recording surface, for overlays drawn after the widgets.
    pub fn surface_mut(&mut self) -> &mut CommandList {
        &mut self.surface
    }

    /// Seconds per frame.
    #[must_use]
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Statistics so far.
    #[must_use]
    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Polls the pointer and runs focus arbitration.
    pub fn update<P: PointerSource + ?Sized>(&mut self, pointer: &mut P) {
        self.mouse.poll(pointer);
        self.context
            .update_state(self.mouse.position(), self.mouse.keys(), self.delta_time);

        let focus = self.context.focused();
        if focus != self.last_focus {
            debug!(frame = self.stats.frames, ?focus, "focus moved");
            self.stats.focus_changes += 1;
            self.last_focus = focus;
        }
    }

    /// Clears the surface and draws every element.
    pub fn draw(&mut self) {
        self.surface.begin_frame();
        self.context.draw_elements(&mut self.surface);
    }

    /// Draws on top of the widgets with read access to the context.
    pub fn overlay(&mut self, draw: impl FnOnce(&UiContext, &mut CommandList)) {
        draw(&self.context, &mut self.surface);
    }

    /// Closes the frame. Call after any overlay drawing.
    pub fn finish_frame(&mut self) {
        let commands = self.surface.len();
        self.stats.frames += 1;
        self.stats.last_commands = commands;
        self.stats.peak_commands = self.stats.peak_commands.max(commands);
        trace!(frame = self.stats.frames, commands, "frame finished");
    }

    /// Runs one whole frame: update, draw, finish.
    pub fn step<P: PointerSource + ?Sized>(&mut self, pointer: &mut P) -> &CommandList {
        self.update(pointer);
        self.draw();
        self.finish_frame();
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::ScriptedPointer;
    use stratum_ui::{BoxElement, BoxStyle, Color, Vec2};

    #[test]
    fn test_step_records_frame() {
        let mut context = UiContext::new(1);
        let id = context.front_layer().add_element(BoxElement::new(
            Vec2::new(50.0, 50.0),
            Vec2::splat(20.0),
            BoxStyle::new(Some(Color::RED), None),
        ));
        let mut driver = FrameDriver::new(context, 70);
        let mut pointer = ScriptedPointer::new()
            .hover(Vec2::ZERO, 1)
            .hover(Vec2::new(50.0, 50.0), 2);

        for _ in 0..3 {
            assert_eq!(driver.step(&mut pointer).len(), 1);
        }

        let stats = driver.stats();
        assert_eq!(stats.frames, 3);
        assert_eq!(stats.peak_commands, 1);
        assert_eq!(stats.focus_changes, 1);
        assert_eq!(driver.context().focused(), Some(id));
        assert!((driver.delta_time() - 1.0 / 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_frame_rate() {
        let driver = FrameDriver::new(UiContext::new(1), 0);
        assert_eq!(driver.delta_time(), 1.0);
    }
}
