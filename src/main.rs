use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossterm::terminal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::error;
use tracing_subscriber::EnvFilter;

use colony::camera::Camera;
use colony::config::Args;
use colony::config::Config;
use colony::display::Display;
use colony::driver::Driver;
use colony::io::ConsolePrompt;
use colony::io::TerminalEvents;

fn run(args: &Args) -> anyhow::Result<()> {
    let config = Config::from_args(args).context("Invalid arguments")?;

    let rng = match config.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut camera = Camera::new(io::stdout(), config.max_age);
    if config.plain {
        camera = camera.without_color();
    }

    if let Ok((cols, rows)) = terminal::size() {
        camera.set_viewport(cols, rows);
    }

    let mut driver = Driver::new(
        config,
        camera,
        ConsolePrompt::stdio(),
        TerminalEvents::new(),
        rng,
    );

    let summary = driver.run()?;
    println!(
        "Ran {} colonies for {} generations.",
        summary.runs, summary.generations
    );

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so they don't get in the way of the colony
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");

            ExitCode::FAILURE
        }
    }
}
