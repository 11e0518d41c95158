//! # Slider Demo
//!
//! Headless `y = sin(x)` plot driven by two coupled sliders.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=stratum_demo=trace slider_demo
//! ```

use stratum_demo::function_plot::FunctionPlot;
use stratum_demo::logging::init_logging;
use stratum_demo::{demo_config, DemoError, FrameDriver, ScriptedPointer, FRAMES_PER_SECOND};
use stratum_ui::{SliderFree, Vec2};
use tracing::{debug, info};

fn main() -> Result<(), DemoError> {
    init_logging()?;

    let config = demo_config()?;
    let (context, plot) = FunctionPlot::build(&config)?;
    let mut driver = FrameDriver::new(context, FRAMES_PER_SECOND);

    run(&plot, &mut driver, ScriptedPointer::new().hover(Vec2::ZERO, 5));

    // Drag each knob from wherever the previous drag left it.
    for (id, offset) in [(plot.slider_x, Vec2::new(120.0, 0.0)), (plot.slider_y, Vec2::new(0.0, 80.0))] {
        let Some(start) = driver
            .context()
            .element::<SliderFree>(id)
            .map(|slider| slider.knob_box().position)
        else {
            continue;
        };
        let pointer = ScriptedPointer::new().drag(start, start + offset, 30).hover(Vec2::ZERO, 5);
        run(&plot, &mut driver, pointer);
    }

    let stats = driver.stats();
    info!(
        frames = stats.frames,
        peak_commands = stats.peak_commands,
        x = plot.x(),
        y = plot.y(),
        "slider demo finished"
    );
    Ok(())
}

fn run(plot: &FunctionPlot, driver: &mut FrameDriver, mut pointer: ScriptedPointer) {
    while !pointer.is_finished() {
        plot.step(driver, &mut pointer);
        debug!(frame = driver.stats().frames, x = plot.x(), y = plot.y(), "plot frame");
    }
}
