//! # STRATUM DEMO
//!
//! Headless versions of the two toolkit demos.
//!
//! ```text
//! ScriptedPointer → Mouse::poll → UiContext::update_state → draw_elements → CommandList
//! ```
//!
//! - [`menu`]: a PLAY text button in front of a triangle button.
//! - [`function_plot`]: two sliders bound to `x` and `sin(x)`, kept in sync.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod driver;
pub mod function_plot;
pub mod logging;
pub mod menu;
pub mod pointer;

use stratum_ui::{UiConfig, UiError, UiResult, Vec2};
use thiserror::Error;

pub use driver::{FrameDriver, FrameStats};
pub use pointer::{PointerFrame, ScriptedPointer};

/// Screen size the scenes are laid out for.
pub const SCREEN_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Frame rate the driver simulates.
pub const FRAMES_PER_SECOND: u32 = 70;

/// Styles shared by the demo scenes.
pub const DEMO_CONFIG: &str = include_str!("../assets/ui.toml");

/// Errors surfaced by the demo binaries.
#[derive(Debug, Error)]
pub enum DemoError {
    /// Toolkit error.
    #[error(transparent)]
    Ui(#[from] UiError),

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

/// Parses the bundled demo configuration.
///
/// # Errors
///
/// Returns [`UiError::Config`] if the bundled file is malformed.
pub fn demo_config() -> UiResult<UiConfig> {
    UiConfig::from_toml_str(DEMO_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_has_every_style() {
        let config = demo_config().unwrap();
        assert_eq!(config.layers, 2);
        for name in [
            "button_idle",
            "button_hovered",
            "text_idle",
            "text_hovered",
            "plot_window",
            "slider_track",
            "slider_knob",
        ] {
            assert!(config.style(name).is_ok(), "missing style {name}");
        }
    }
}
