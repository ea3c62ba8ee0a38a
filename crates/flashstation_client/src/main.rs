// SPDX-License-Identifier: Apache-2.0

mod app_config;
mod candidate;
mod error;
mod fetch;
mod lookup;
mod metadata;
mod models;
mod normalize;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use app_config::AppConfig;
use clap::Parser;
use lookup::resolve_options;
use metadata::fetch_metadata;
use normalize::normalize;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Lists the factory images the Android Flash Tool offers for a device.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Device codename (e.g., komodo)
    #[arg(short, long)]
    device: String,

    /// Include generic GSI images
    #[arg(short, long, default_value_t = false)]
    gsi: bool,

    /// Show raw response from server
    #[arg(short, long, default_value_t = false)]
    raw: bool,

    /// Configuration file overriding the service endpoints
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let client = reqwest::Client::new();

    let options = resolve_options(&client, &config, &cli.device, cli.gsi)
        .await
        .with_context(|| format!("Failed to discover products for device '{}'", cli.device))?;

    let metadata = fetch_metadata(&client, &config, &options)
        .await
        .context("Failed to fetch build metadata")?;

    if cli.raw {
        print_json(&metadata)?;
    } else {
        let by_product = normalize(&metadata).context("Failed to normalize build metadata")?;
        info!("Found builds for {} products", by_product.len());
        print_json(&by_product)?;
    }

    Ok(())
}

/// Writes `value` to stdout with four-space indentation and a trailing newline.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut stdout, PrettyFormatter::with_indent(b"    "));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize results to JSON")?;
    writeln!(stdout).context("Failed to write to stdout")?;
    Ok(())
}
