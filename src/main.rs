use hex_field as hex;
use clap::Parser;
use std::{path::PathBuf, process::ExitCode};

/// Builds a hexagonal section field for a viewport and prints its geometry
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Toml file with the viewport and field configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Width of the viewport in pixels, overrides the configuration
    #[arg(long)]
    width: Option<u32>,
    /// Height of the viewport in pixels, overrides the configuration
    #[arg(long)]
    height: Option<u32>,
    /// Section to show in detail (0-5), the whole field is shown if omitted
    #[arg(long)]
    section: Option<usize>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), hex::application::RunError> {
    // Load the configuration and apply the overrides
    let mut config = match &args.config {
        Some(path) => hex::config::Config::load(path)?,
        None => hex::config::Config::default(),
    };
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }
    log::debug!("Running with {:?}", config);

    hex::application::run(&config, args.section)
}
