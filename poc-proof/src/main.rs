//! poc-proof - Proof-of-contribution scorer
//!
//! Scores a directory of uploaded JSON files and writes `results.json` for
//! the attestation layer.
//!
//! Configuration priority: command line → environment → TOML file → defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use poc_common::config::{ConfigOverrides, ConfigResolver};
use poc_common::ValidationPolicy;
use poc_proof::runner;
use poc_proof::services::fetch_random_number;
use tracing::info;

/// Command-line arguments for poc-proof
#[derive(Parser, Debug)]
#[command(name = "poc-proof")]
#[command(about = "Proof-of-contribution scorer for uploaded JSON data")]
#[command(version)]
struct Args {
    /// TOML config file (default: <config_dir>/poc-proof/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data liquidity pool identifier written to proof metadata [env: DLP_ID]
    #[arg(long, global = true)]
    dlp_id: Option<u64>,

    /// Directory of uploaded files [env: INPUT_DIR]
    #[arg(short, long, global = true)]
    input_dir: Option<PathBuf>,

    /// Directory receiving results.json [env: OUTPUT_DIR]
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Uploader email, required by the extension policy [env: USER_EMAIL]
    #[arg(long, global = true)]
    user_email: Option<String>,

    /// Validation policy: content or extension [env: VALIDATION_POLICY]
    #[arg(long, global = true, value_parser = parse_policy)]
    policy: Option<ValidationPolicy>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score the input directory and write results.json (default)
    Generate,
    /// Fetch one random fraction from random.org (local fallback on failure)
    Random,
}

fn parse_policy(s: &str) -> std::result::Result<ValidationPolicy, String> {
    s.parse::<ValidationPolicy>().map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let resolver = match &args.config {
        Some(path) => ConfigResolver::with_config_file(path),
        None => ConfigResolver::new(),
    };
    let toml_config = resolver
        .load_toml()
        .context("Failed to load configuration file")?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&toml_config.logging.level)),
        )
        .init();

    info!("Starting poc-proof v{}", env!("CARGO_PKG_VERSION"));
    match resolver.config_path() {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => info!("No configuration file found, using defaults"),
    }

    match args.command.unwrap_or(Command::Generate) {
        Command::Generate => {
            let overrides = ConfigOverrides {
                dlp_id: args.dlp_id,
                input_dir: args.input_dir,
                output_dir: args.output_dir,
                user_email: args.user_email,
                policy: args.policy,
            };
            let config = resolver
                .resolve(&overrides, &toml_config)
                .context("Failed to resolve proof configuration")?;

            info!(
                "Using dlp_id={}, input_dir={}, output_dir={}, policy={}",
                config.dlp_id(),
                config.input_dir().display(),
                config.output_dir().display(),
                config.policy()
            );

            let outcome = runner::run(&config).context("Proof generation failed")?;
            let json = serde_json::to_string_pretty(&outcome.response)?;

            info!("Proof generation complete: {}", outcome.results_path.display());
            println!("{}", json);
        }
        Command::Random => {
            let value = fetch_random_number().await;
            info!("Random number: {}", value);
            println!("{}", value);
        }
    }

    Ok(())
}
