use clap::Parser;

use mandelbrot_explorer::{GridPreset, MandelbrotConfig, PixelsPresenterFactory, RunGuiCommand};

#[derive(Parser, Debug)]
#[command(name = "gui", about = "Explore the Mandelbrot set in a window")]
struct Args {
    /// Window size: large (1000x600) or small (800x480)
    #[arg(long, default_value = "large")]
    preset: GridPreset,

    /// Initial maximum iterations, clamped to 10-500
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    iterations: i64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let config = MandelbrotConfig::default()
        .with_grid_preset(args.preset)
        .with_max_iterations(args.iterations);

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);
    command.execute()?;

    Ok(())
}
