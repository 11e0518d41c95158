//! # Button Demo
//!
//! Headless PLAY menu: a text button over a triangle button.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=stratum_ui=trace button_demo
//! ```

use stratum_demo::logging::init_logging;
use stratum_demo::menu::Menu;
use stratum_demo::{demo_config, DemoError, FrameDriver, ScriptedPointer, FRAMES_PER_SECOND, SCREEN_SIZE};
use stratum_ui::Vec2;
use tracing::info;

fn main() -> Result<(), DemoError> {
    init_logging()?;

    let config = demo_config()?;
    let (context, menu) = Menu::build(&config)?;
    let mut driver = FrameDriver::new(context, FRAMES_PER_SECOND);

    let center = SCREEN_SIZE / 2.0;
    // Click the label, then the triangle below it.
    let mut pointer = ScriptedPointer::new()
        .hover(Vec2::ZERO, 5)
        .hover(center, 10)
        .click(center)
        .hover(center + Vec2::new(0.0, 120.0), 10)
        .click(center + Vec2::new(0.0, 120.0))
        .hover(Vec2::ZERO, 5);

    while !pointer.is_finished() {
        driver.step(&mut pointer);
    }

    let stats = driver.stats();
    info!(
        frames = stats.frames,
        peak_commands = stats.peak_commands,
        focus_changes = stats.focus_changes,
        play = menu.play_clicks(),
        triangle = menu.triangle_clicks(),
        "button demo finished"
    );
    Ok(())
}
