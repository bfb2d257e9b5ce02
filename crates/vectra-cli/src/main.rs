//! Vectra CLI - Command-line interface for vector algebra

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{combine, inspect, transform};
use config::VectraConfig;
use output::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vectra")]
#[command(about = "Vector algebra with 2D/3D geometry from the command line", long_about = None)]
#[command(version)]
struct Cli {
    /// Load configuration from this file instead of ~/.vectra and .vectra
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (text, json or toml)
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Number of decimal places to print
    #[arg(long, global = true)]
    precision: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Inspect(inspect::InspectCommands),

    #[command(flatten)]
    Combine(combine::CombineCommands),

    #[command(flatten)]
    Transform(transform::TransformCommands),
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => VectraConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => VectraConfig::load().context("Failed to load config")?,
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.precision.is_some() {
        config.precision = cli.precision;
    }
    log::debug!("resolved config: {:?}", config);

    let result = match cli.command {
        Commands::Inspect(cmd) => inspect::run(cmd),
        Commands::Combine(cmd) => combine::run(cmd),
        Commands::Transform(cmd) => transform::run(cmd, &config),
    }?;

    println!("{}", output::render(&result, config.format, config.precision)?);

    Ok(())
}
