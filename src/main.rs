use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use elidiv::{divide, EliHeader};

#[derive(Parser)]
#[command(name = "elidiv")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Divide one ELI image by another, channel by channel", long_about = None)]
struct Cli {
    /// First input image (the dividend)
    input_a: PathBuf,

    /// Second input image (the divisor)
    input_b: PathBuf,

    /// Where to write the combined image
    output: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let a = fs::read(&cli.input_a)
        .with_context(|| format!("failed to read {}", cli.input_a.display()))?;
    let b = fs::read(&cli.input_b)
        .with_context(|| format!("failed to read {}", cli.input_b.display()))?;

    let schema = EliHeader::default();
    info!(schema = %schema, "checking input images");

    let bytes = match divide(&a, &b, &schema) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(kind = err.kind(), "validation failed: {err}");
            return Err(err.into());
        }
    };

    fs::write(&cli.output, &bytes)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(output = %cli.output.display(), len = bytes.len(), "image saved");
    Ok(())
}
