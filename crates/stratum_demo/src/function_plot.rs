//! Function plot: `y = sin(x)` with one slider per axis.
//!
//! The horizontal slider edits `x`, the vertical one edits `y`. After each
//! update whichever value the user did not touch is recomputed from the
//! other, so the knobs always sit on the curve. The curve, a crosshair and
//! the current values are drawn over the widgets.

use std::f32::consts::FRAC_PI_2;

use stratum_ui::{
    BoxElement, Color, ElementId, Font, Orientation, PointerSource, Polygon, Rect, Reference, Slider, SliderFree,
    SliderRange, SliderValue, Surface, UiConfig, UiContext, UiResult, Vec2,
};
use tracing::trace;

use crate::{FrameDriver, SCREEN_SIZE};

/// Values closer than this are treated as unchanged.
const EPSILON: f32 = 1e-6;

/// Pixels between the plot window and each slider.
const WINDOW_TO_SLIDER_GAP: f32 = 25.0;

/// Radius of the dot marking the current point.
const POINT_RADIUS: f32 = 5.0;

/// Inclusive-exclusive function interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FunctionRange {
    /// First value.
    pub start: f32,
    /// Last value.
    pub stop: f32,
}

impl FunctionRange {
    /// Absolute width of the interval.
    #[must_use]
    pub fn length(&self) -> f32 {
        (self.stop - self.start).abs()
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn middle(&self) -> f32 {
        (self.start + self.stop) / 2.0
    }

    fn slider_range(&self) -> SliderRange {
        SliderRange::new(
            SliderValue::new(self.start, format!("{:.2}", self.start)),
            SliderValue::new(self.stop, format!("{:.2}", self.stop)),
        )
    }
}

/// Domain of `x`.
pub const RANGE_X: FunctionRange = FunctionRange {
    start: -FRAC_PI_2,
    stop: FRAC_PI_2,
};

/// Domain of `y`.
pub const RANGE_Y: FunctionRange = FunctionRange { start: -1.0, stop: 1.0 };

fn x_to_y(x: f32) -> f32 {
    x.sin()
}

fn y_to_x(y: f32) -> f32 {
    y.clamp(-1.0, 1.0).asin()
}

/// Handles into a built plot.
#[derive(Debug, Clone)]
pub struct FunctionPlot {
    /// The framed plot area.
    pub window: ElementId,
    /// Slider bound to `x`.
    pub slider_x: ElementId,
    /// Slider bound to `y`.
    pub slider_y: ElementId,
    window_rect: Rect,
    length_x: f32,
    length_y: f32,
    font: Font,
    x: Reference<f32>,
    y: Reference<f32>,
}

impl FunctionPlot {
    /// Builds the plot into a fresh context.
    ///
    /// # Errors
    ///
    /// Returns [`stratum_ui::UiError::UnknownStyle`] if `config` lacks one
    /// of `plot_window`, `slider_track` or `slider_knob`.
    pub fn build(config: &UiConfig) -> UiResult<(UiContext, Self)> {
        let min_side = SCREEN_SIZE.x.min(SCREEN_SIZE.y);
        let window = BoxElement::new(SCREEN_SIZE / 2.0, Vec2::splat(min_side / 2.0), config.style("plot_window")?);
        let window_rect = window.model().rectangle();
        let track = config.style("slider_track")?;
        let knob = config.style("slider_knob")?;

        let x = Reference::new(RANGE_X.middle());
        let y = Reference::new(RANGE_Y.middle());

        let length_x = window_rect.width;
        let slider_x = Slider::free(
            window.model().bottom_left() + Vec2::new(window_rect.width / 2.0, WINDOW_TO_SLIDER_GAP),
            length_x,
            Orientation::Horizontal,
            RANGE_X.slider_range(),
            &x,
        )?
        .with_styles(track, knob)
        .with_geometry(config.slider)
        .with_font(config.font)
        .with_default(SliderValue::new(x.get(), ""));

        // Same pixels per unit on both axes.
        let length_y = window_rect.height * RANGE_Y.length() / RANGE_X.length();
        let slider_y = Slider::free(
            window.model().top_left() + Vec2::new(-WINDOW_TO_SLIDER_GAP, window_rect.height / 2.0),
            length_y,
            Orientation::Vertical,
            RANGE_Y.slider_range(),
            &y,
        )?
        .with_styles(track, knob)
        .with_geometry(config.slider)
        .with_font(config.font)
        .with_default(SliderValue::new(y.get(), ""));

        let mut context = UiContext::from_config(config);
        let window = context.back_layer().add_element(window);
        let slider_x = context.front_layer().add_element(slider_x);
        let slider_y = context.front_layer().add_element(slider_y);

        Ok((
            context,
            Self {
                window,
                slider_x,
                slider_y,
                window_rect,
                length_x,
                length_y,
                font: config.font,
                x,
                y,
            },
        ))
    }

    /// Current `x`.
    #[must_use]
    pub fn x(&self) -> f32 {
        self.x.get()
    }

    /// Current `y`.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.y.get()
    }

    /// Runs one frame: update, re-couple the values, draw widgets and overlay.
    pub fn step<P: PointerSource + ?Sized>(&self, driver: &mut FrameDriver, pointer: &mut P) {
        let previous = (self.x(), self.y());
        driver.update(pointer);
        self.couple(previous);
        driver.draw();
        driver.overlay(|context, surface| self.draw_overlay(context, surface));
        driver.finish_frame();
    }

    /// Recomputes the value the user did not change from the one they did.
    fn couple(&self, (previous_x, previous_y): (f32, f32)) {
        let (x, y) = (self.x(), self.y());
        if (x - previous_x).abs() < EPSILON {
            self.x.set(y_to_x(y));
        } else if (y - previous_y).abs() < EPSILON {
            self.y.set(x_to_y(x));
        }
        trace!(x = self.x(), y = self.y(), "plot coupled");
    }

    /// Screen point of `(x, y)` inside the window.
    #[must_use]
    pub fn to_screen(&self, x: f32, y: f32) -> Vec2 {
        let dx = (x - RANGE_X.start) / RANGE_X.length() * self.length_x;
        let dy = y / RANGE_Y.length() * self.length_y;
        Vec2::new(self.window_rect.x, self.window_rect.y + self.window_rect.height / 2.0) + Vec2::new(dx, -dy)
    }

    /// Curve, crosshair, current point and value readout.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn draw_overlay(&self, context: &UiContext, surface: &mut dyn Surface) {
        let samples = self.window_rect.width.max(1.0) as usize;
        let step = RANGE_X.length() / samples as f32;
        for i in 0..samples {
            let x = RANGE_X.start + step * i as f32;
            surface.fill_rect(Rect::from_center(self.to_screen(x, x_to_y(x)), Vec2::splat(2.0)), Color::GREEN);
        }

        surface.draw_text(&self.x().to_string(), Vec2::ZERO, Color::GREEN, &self.font, false);
        surface.draw_text(
            &self.y().to_string(),
            Vec2::new(0.0, self.font.line_height),
            Color::GREEN,
            &self.font,
            false,
        );

        let (Some(slider_x), Some(slider_y)) = (
            context.element::<SliderFree>(self.slider_x),
            context.element::<SliderFree>(self.slider_y),
        ) else {
            return;
        };
        let point = Vec2::new(slider_x.knob_box().position.x, slider_y.knob_box().position.y);
        let bottom = self.window_rect.bottom();
        let left = self.window_rect.x;

        surface.fill_rect(Rect::new(point.x, point.y.min(bottom), 1.0, (bottom - point.y).abs()), Color::GREEN);
        surface.fill_rect(Rect::new(left.min(point.x), point.y, (point.x - left).abs(), 1.0), Color::GREEN);

        let mut dot = Polygon::regular(16);
        dot.scale_by(Vec2::splat(POINT_RADIUS));
        surface.fill_polygon(&dot.translated(point), Color::RED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{demo_config, ScriptedPointer, FRAMES_PER_SECOND};
    use stratum_ui::RenderCommand;

    fn setup() -> (FrameDriver, FunctionPlot) {
        let (context, plot) = FunctionPlot::build(&demo_config().unwrap()).unwrap();
        (FrameDriver::new(context, FRAMES_PER_SECOND), plot)
    }

    fn run(driver: &mut FrameDriver, plot: &FunctionPlot, mut pointer: ScriptedPointer) {
        while !pointer.is_finished() {
            plot.step(driver, &mut pointer);
        }
    }

    #[test]
    fn test_layout() {
        let (driver, plot) = setup();
        let slider_x = driver.context().element::<SliderFree>(plot.slider_x).unwrap();
        let slider_y = driver.context().element::<SliderFree>(plot.slider_y).unwrap();

        assert_eq!(plot.window_rect, Rect::new(460.0, 180.0, 360.0, 360.0));
        assert_eq!(slider_x.position(), Vec2::new(640.0, 565.0));
        assert_eq!(slider_y.position(), Vec2::new(435.0, 360.0));
        assert!((slider_y.length() - 720.0 / std::f32::consts::PI).abs() < 1e-3);
        assert_eq!(plot.to_screen(0.0, 0.0), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_dragging_x_moves_y() {
        let (mut driver, plot) = setup();
        run(
            &mut driver,
            &plot,
            ScriptedPointer::new().drag(Vec2::new(640.0, 565.0), Vec2::new(730.0, 565.0), 6).hover(Vec2::ZERO, 1),
        );

        let quarter_pi = FRAC_PI_2 / 2.0;
        assert!((plot.x() - quarter_pi).abs() < 1e-4, "x = {}", plot.x());
        assert!((plot.y() - quarter_pi.sin()).abs() < 1e-4, "y = {}", plot.y());

        let slider_y = driver.context().element::<SliderFree>(plot.slider_y).unwrap();
        assert!((slider_y.value_in_span() - quarter_pi.sin()).abs() < 1e-4);
    }

    #[test]
    fn test_dragging_y_moves_x() {
        let (mut driver, plot) = setup();
        let length_y = 720.0 / std::f32::consts::PI;
        run(
            &mut driver,
            &plot,
            ScriptedPointer::new()
                .drag(Vec2::new(435.0, 360.0), Vec2::new(435.0, 360.0 - length_y / 4.0), 4)
                .hover(Vec2::ZERO, 1),
        );

        assert!((plot.y() - 0.5).abs() < 1e-4, "y = {}", plot.y());
        assert!((plot.x() - 0.5_f32.asin()).abs() < 1e-4, "x = {}", plot.x());
    }

    #[test]
    fn test_overlay_draws_curve_and_point() {
        let (mut driver, plot) = setup();
        run(&mut driver, &plot, ScriptedPointer::new().hover(Vec2::ZERO, 1));

        let commands = driver.surface().commands();
        let dots = commands
            .iter()
            .filter(|command| matches!(command, RenderCommand::Rect { bounds, .. } if bounds.size() == Vec2::splat(2.0)))
            .count();
        assert_eq!(dots, 360);
        assert!(matches!(commands.last(), Some(RenderCommand::Polygon { color, .. }) if *color == Color::RED));
        assert!(driver.surface().texts().any(|text| text == "0"));
    }
}
