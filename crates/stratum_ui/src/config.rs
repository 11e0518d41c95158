//! UI configuration loaded once at startup.
//!
//! ```toml
//! layers = 2
//!
//! [font]
//! size = 32.0
//!
//! [slider]
//! knob_thickness = 24.0
//!
//! [styles.button_idle]
//! fill_color = { r = 0.0, g = 0.0, b = 0.0 }
//! content_color = { r = 0.0, g = 1.0, b = 1.0 }
//! outline_width = 10.0
//! outline_color = { r = 0.0, g = 1.0, b = 1.0 }
//! ```
//!
//! Every field is optional.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{UiError, UiResult};
use crate::render::Font;
use crate::style::BoxStyle;
use crate::widget::SliderGeometry;

/// Toolkit configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Number of context layers.
    pub layers: usize,
    /// Default UI font.
    pub font: Font,
    /// Slider part sizes.
    pub slider: SliderGeometry,
    /// Named box styles.
    pub styles: BTreeMap<String, BoxStyle>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            layers: 2,
            font: Font::DEFAULT_UI,
            slider: SliderGeometry::default(),
            styles: BTreeMap::new(),
        }
    }
}

impl UiConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] if the document is malformed.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        let config: Self = toml::from_str(text)?;
        debug!(layers = config.layers, styles = config.styles.len(), "ui config parsed");
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Io`] if the file cannot be read, or
    /// [`UiError::Config`] if it is malformed.
    pub fn load(path: impl AsRef<Path>) -> UiResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    /// Named style.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::UnknownStyle`] if no style has that name.
    pub fn style(&self, name: &str) -> UiResult<BoxStyle> {
        self.styles
            .get(name)
            .copied()
            .ok_or_else(|| UiError::UnknownStyle(name.to_owned()))
    }
}
