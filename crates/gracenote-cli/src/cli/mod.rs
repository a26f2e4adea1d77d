//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load configuration
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;

    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or_default();

    // Flags and env take precedence over the config file
    let client_id = cli.client_id.or_else(|| config.client_id.clone());
    let client_tag = cli.client_tag.or_else(|| config.client_tag.clone());
    let timeout = cli
        .timeout
        .or(config.timeout_secs)
        .map(Duration::from_secs);

    let ctx = commands::Context {
        config_path,
        config,
        client_id,
        client_tag,
        endpoint: cli.endpoint,
        timeout,
        output_format,
    };

    match cli.command {
        Commands::Register(args) => commands::register::execute(ctx, args),
        Commands::Whoami(args) => commands::whoami::execute(ctx, args),
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
