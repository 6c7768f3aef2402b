use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use sleeptrack::cli::commands;
use sleeptrack::config::Config;
use sleeptrack::input::LineTokens;
use sleeptrack::{Cli, OutputFormat};

fn main() {
    // RUST_LOG controls verbosity; logs go to stderr so stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    cli.color.unwrap_or(config.general.color).apply();
    let format = cli.output.unwrap_or(config.general.default_output);
    tracing::debug!(?format, "starting session");

    let tokens = LineTokens::new(io::stdin().lock());
    let output = match format {
        // Keep stdout a single JSON document.
        OutputFormat::Json => commands::track(tokens, io::stderr(), format, &config.report),
        OutputFormat::Pretty => commands::track(tokens, io::stdout(), format, &config.report),
    }
    .context("sleep tracking session failed")?;

    println!("{output}");
    Ok(())
}
