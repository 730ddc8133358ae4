use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use cardsmith::AppSettings;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let mut settings = AppSettings::load(cli.config.as_deref()).context("failed to load settings")?;
    if let Some(dir) = &cli.fonts_dir {
        settings.font_dir = dir.clone();
    }
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }

    init_tracing(&settings, cli.is_interactive())?;
    debug!(?settings, "settings resolved");

    cli::run(cli, &settings)
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `log_level`. The interactive session owns the screen,
/// so without a `log_file` its events are discarded.
fn init_tracing(settings: &AppSettings, interactive: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .with_context(|| format!("invalid log_level '{}'", settings.log_level))?,
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match (&settings.log_file, interactive) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, true) => builder.with_writer(io::sink).init(),
        (None, false) => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}
