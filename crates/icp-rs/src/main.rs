//! `icp`: load a YAML config file and print it.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use icp_rs::load_config;
use log::{debug, info};
use serde::Serialize;
use std::path::PathBuf;

/// Load a YAML config file and print its contents.
#[derive(Debug, Parser)]
#[command(name = "icp", version, about)]
struct Cli {
    /// Path to the YAML config file
    path: PathBuf,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Print only the value at a dotted path (e.g. `server.port`)
    #[arg(long)]
    key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> anyhow::Result<()> {
    icp_rs::init_logging();

    let cli = Cli::parse();
    info!(
        "starting icp (path={}, format={:?}, key_set={})",
        cli.path.display(),
        cli.format,
        cli.key.is_some()
    );
    let config = load_config(&cli.path)
        .with_context(|| format!("failed to load config from {}", cli.path.display()))?;

    let output = match cli.key.as_deref() {
        Some(key) => {
            let value = config
                .lookup(key)
                .with_context(|| format!("key not found: {key}"))?;
            render(value, cli.format)?
        }
        None => render(&config, cli.format)?,
    };
    debug!("rendered config (bytes={})", output.len());
    print!("{output}");
    Ok(())
}

/// Render a value in the requested output format, newline-terminated.
fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("failed to render json")?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Yaml => serde_yaml::to_string(value).context("failed to render yaml"),
    }
}
