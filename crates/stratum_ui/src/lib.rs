//! # STRATUM UI
//!
//! Retained-mode widgets layered over an immediate-mode 2D surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                     FRAME PIPELINE                     │
//! ├────────────────────────────────────────────────────────┤
//! │  Raw Input → Keys → Context::update_state → draw_elements │
//! │      ↓          ↓              ↓                  ↓     │
//! │   Mouse     edge flags    focus arbitration    Surface  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Layer 0 is the front layer: it claims the mouse first and paints last.
//! Inside a layer, elements added earlier win ties.
//!
//! ## Example
//!
//! ```rust
//! use stratum_ui::{BoxStyle, Color, CommandList, Font, Key, TextButton, UiContext, Vec2};
//!
//! let mut context = UiContext::new(2);
//! let idle = BoxStyle::new(None, Some(Color::WHITE));
//! let hovered = BoxStyle::new(None, Some(Color::YELLOW));
//! context.front_layer().add_element(TextButton::new(
//!     Vec2::new(640.0, 360.0),
//!     idle,
//!     hovered,
//!     "PLAY",
//!     Font::DEFAULT_UI,
//!     true,
//!     || println!("play"),
//! ));
//!
//! let keys = [Key::new(false, true)];
//! context.update_state(Vec2::new(640.0, 360.0), &keys, 1.0 / 70.0);
//!
//! let mut surface = CommandList::new();
//! context.draw_elements(&mut surface);
//! assert!(!surface.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod input;
pub mod reference;
pub mod render;
pub mod style;
pub mod widget;

pub use config::UiConfig;
pub use context::{ElementId, Layer, UiContext};
pub use error::{UiError, UiResult};
pub use geometry::{collide_float, point_in_rect, rect_vs_rect, Direction, Polygon, Rect, Vec2};
pub use input::{InputSource, Key, Mouse, MouseButton, PointerSource, ScanHardware};
pub use reference::{Reference, WeakReference};
pub use render::{CommandList, Font, RenderCommand, Surface};
pub use style::{BoxStyle, Color};
pub use widget::{
    Action, BoxElement, BoxModel, Button, ButtonState, CheckStyle, Checkbox, DiscreteMapping,
    FreeMapping, Orientation, Slider, SliderDiscrete, SliderFree, SliderGeometry, SliderRange,
    SliderValue, SliderWithStep, StepMapping, Text, TextBox, TextButton, TriangleButton,
    UiElement, ValueMapping,
};
