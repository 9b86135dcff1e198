use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use valreg_core::aggregate::{generate, generate_all, GeneratedArtifact};
use valreg_core::RegistryConfig;

/// Aggregate every record into one `secp`-keyed file per network
#[derive(Parser, Debug)]
pub struct Opts {
    /// Registry root containing one directory per network
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Only aggregate this network (defaults to mainnet and testnet)
    #[arg(short, long)]
    pub network: Option<String>,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let config = RegistryConfig::new(&opts.dir);
    info!("aggregating registry at {}", config.base_dir.display());

    let artifacts = match &opts.network {
        Some(network) => vec![generate(&config, network)
            .with_context(|| format!("Failed to aggregate network '{}'", network))?],
        None => generate_all(&config).context("Failed to aggregate registry")?,
    };

    for artifact in &artifacts {
        print_artifact(artifact);
    }

    Ok(())
}

fn print_artifact(artifact: &GeneratedArtifact) {
    for skipped in &artifact.index.skipped {
        println!("Warning: Failed to read {}: {}", skipped.filename, skipped.reason);
    }
    if !artifact.index.duplicates.is_empty() {
        println!(
            "⚠️  Duplicate secp keys in {} (later file kept): {}",
            artifact.network,
            artifact.index.duplicates.join(" ")
        );
    }
    println!(
        "✅ Generated {} with {} validators",
        artifact.path.display(),
        artifact.index.len()
    );
}
