use clap::Parser;

use mandelbrot_explorer::{GridPreset, HeadlessController, LogSummaryPresenter, MandelbrotConfig, ScrollGesture};

#[derive(Parser, Debug)]
#[command(
    name = "mandelbrot-explorer",
    about = "Render the Mandelbrot set once, after replaying scripted scroll gestures"
)]
struct Args {
    /// Grid size: large (1000x600) or small (800x480)
    #[arg(long, default_value = "large")]
    preset: GridPreset,

    /// Maximum iterations per pixel, clamped to 10-500
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    iterations: i64,

    /// Scroll gesture PX,PY,in|out in grid pixels; may be repeated
    #[arg(long = "scroll", value_name = "PX,PY,DIR")]
    scrolls: Vec<ScrollGesture>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let config = MandelbrotConfig::default()
        .with_grid_preset(args.preset)
        .with_max_iterations(args.iterations);

    if i64::from(config.max_iterations.get()) != args.iterations {
        log::warn!(
            "iterations {} clamped to {}",
            args.iterations,
            config.max_iterations
        );
    }

    let mut controller = HeadlessController::new(LogSummaryPresenter::new(), config);
    controller.apply_gestures(&args.scrolls)?;
    controller.run();

    Ok(())
}
