//! The PLAY menu: a text button in the front layer over a triangle button
//! in the back layer, both centered on screen.

use std::cell::Cell;
use std::rc::Rc;

use stratum_ui::{ElementId, TextButton, TriangleButton, UiConfig, UiContext, UiResult, Vec2};
use tracing::info;

use crate::SCREEN_SIZE;

/// Label of the front button.
pub const PLAY_LABEL: &str = "PLAY";

/// Handles into a built menu.
#[derive(Debug, Clone)]
pub struct Menu {
    /// The PLAY text button.
    pub play: ElementId,
    /// The triangle button behind it.
    pub triangle: ElementId,
    play_clicks: Rc<Cell<u32>>,
    triangle_clicks: Rc<Cell<u32>>,
}

impl Menu {
    /// Builds the menu into a fresh context.
    ///
    /// # Errors
    ///
    /// Returns [`stratum_ui::UiError::UnknownStyle`] if `config` lacks one
    /// of `button_idle`, `button_hovered`, `text_idle` or `text_hovered`.
    pub fn build(config: &UiConfig) -> UiResult<(UiContext, Self)> {
        let center = SCREEN_SIZE / 2.0;
        let play_clicks = Rc::new(Cell::new(0));
        let triangle_clicks = Rc::new(Cell::new(0));

        let mut context = UiContext::from_config(config);

        let counter = Rc::clone(&triangle_clicks);
        let triangle = context.back_layer().add_element(TriangleButton::new(
            center,
            SCREEN_SIZE / 2.0,
            config.style("button_idle")?,
            config.style("button_hovered")?,
            Vec2::new(1.0, 1.0),
            0.0,
            false,
            move || {
                counter.set(counter.get() + 1);
                info!("triangle pressed");
            },
        ));

        let counter = Rc::clone(&play_clicks);
        let play = context.front_layer().add_element(TextButton::new(
            center,
            config.style("text_idle")?,
            config.style("text_hovered")?,
            PLAY_LABEL,
            config.font,
            true,
            move || {
                counter.set(counter.get() + 1);
                info!("play pressed");
            },
        ));

        Ok((
            context,
            Self {
                play,
                triangle,
                play_clicks,
                triangle_clicks,
            },
        ))
    }

    /// Times PLAY fired.
    #[must_use]
    pub fn play_clicks(&self) -> u32 {
        self.play_clicks.get()
    }

    /// Times the triangle fired.
    #[must_use]
    pub fn triangle_clicks(&self) -> u32 {
        self.triangle_clicks.get()
    }
}
