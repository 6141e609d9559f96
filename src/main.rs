//! batteryinfo: battery status and information from the power-supply sysfs tree.
//!
//! Run with:  `RUST_LOG=debug batteryinfo -a`

mod cli;

use anyhow::Result;
use batt_config::{Overrides, RunConfig};
use cli::Action;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let action = match cli::parse(std::env::args_os()) {
        Ok(action) => action,
        Err(e) => {
            eprint!("error: {e}\n{}", cli::SHORT_USAGE);
            return ExitCode::FAILURE;
        }
    };

    match action {
        Action::Help => eprint!("{}", cli::usage()),
        Action::Version => eprintln!("batteryinfo v{}", env!("CARGO_PKG_VERSION")),
        Action::License => eprint!("{}", cli::LICENSE),
        Action::Report { overrides, config } => {
            if let Err(e) = run(overrides, config) {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn run(overrides: Overrides, config_path: Option<PathBuf>) -> Result<()> {
    let file = match config_path {
        Some(path) => batt_config::load_required(path)?,
        None => batt_config::load(batt_config::default_path())?,
    };
    let config = RunConfig::resolve(file, overrides)?;
    tracing::debug!(?config, "resolved run configuration");

    let stdout = io::stdout();
    let mut renderer = batt_renderer::for_config(&config, BufWriter::new(stdout.lock()));
    let count = batt_system::report(&config, renderer.as_mut())?;
    tracing::info!("reported {count} batteries");

    Ok(())
}
