use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use wr_cli::commands::report::{self, ReportStyle};
use wr_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so the report on stdout stays clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(file) = cli.file {
        config.log_path = file;
    }
    if let Some(user) = cli.user {
        config.user = user;
    }
    tracing::debug!(?config, "loaded configuration");

    let window = match report::resolve_window(cli.from.as_deref(), cli.to.as_deref(), &Local::now()) {
        Ok(window) => window,
        Err(err) => match err.downcast_ref::<clap::Error>() {
            // Bad dates are usage errors: print usage and exit with status 2
            Some(usage) => usage.exit(),
            None => return Err(err),
        },
    };

    let style = ReportStyle::from_flags(cli.no_time, cli.minutes, cli.email);
    report::run(&config, window, style)
}
