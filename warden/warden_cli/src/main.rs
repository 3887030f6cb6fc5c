use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use warden_core::utils::{LogLevel, WardenConfig};
use warden_policy::{InMemoryProviderRegistry, PolicyEngine};

mod commands;

use commands::policy::{FormatArgs, ValidateArgs};

/// Warden Command Line Interface
///
/// Validates and formats username policies such as
/// `length(3,255) and regexPattern(^[a-z]+$)`.
#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    /// Path to a TOML configuration file
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the configuration file
    #[clap(long, global = true)]
    log_level: Option<LogLevel>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a policy against the built-in providers
    Validate(ValidateArgs),

    /// Print a policy in canonical form without validating it
    Format(FormatArgs),

    /// List the registered policy providers
    Providers,
}

fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_directive()));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => WardenConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => WardenConfig::default(),
    };

    init_logging(cli.log_level.unwrap_or(config.log_level));

    let engine = PolicyEngine::new(InMemoryProviderRegistry::with_builtin_providers(&config));
    let mut out = io::stdout().lock();

    match &cli.command {
        Commands::Validate(args) => {
            commands::policy::execute_validate(args, &config, &engine, &mut out)
        }
        Commands::Format(args) => commands::policy::execute_format(args, &mut out),
        Commands::Providers => commands::policy::execute_providers(&engine, &mut out),
    }
}
