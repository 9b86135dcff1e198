use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use serde::Serialize;
use tracing::info;
use valreg_core::{
    resolve_filenames, run_batch, ChainKeySource, HttpAssetFetcher, RecordValidator, ReferenceSchema,
    RegistryConfig, RpcSettings, ValidationReport,
};
use valreg_networks::{PRIMARY_NETWORK, RPC_OVERRIDE_ENV};

use crate::utils::{format_output, OutputFormat};

/// Validate validator records against the reference schema, logo host and chain
#[derive(Parser, Debug)]
pub struct Opts {
    /// Record files to check; the `.json` extension is optional.
    /// Defaults to every record in the network directory.
    #[arg(short = 'f', long, num_args = 1..)]
    pub filenames: Option<Vec<String>>,

    /// Network directory to check (e.g., mainnet, testnet)
    #[arg(short, long, default_value = PRIMARY_NETWORK)]
    pub network: String,

    /// Print the report of every record, not only failing ones
    #[arg(short, long)]
    pub verbose: bool,

    /// Registry root containing one directory per network
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Reference record used as the schema (defaults to the registry's example record)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// RPC endpoint override, honored for mainnet only
    #[arg(long, env = RPC_OVERRIDE_ENV)]
    pub rpc_url: Option<String>,

    /// Timeout of a single on-chain call, in seconds
    #[arg(long, default_value_t = 30)]
    pub rpc_timeout: u64,

    /// Attempts per on-chain call before giving up
    #[arg(long, default_value_t = 3)]
    pub rpc_attempts: u32,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl Opts {
    pub fn config(&self) -> RegistryConfig {
        let mut config = RegistryConfig::new(&self.dir).with_rpc(RpcSettings {
            mainnet_override: self.rpc_url.clone(),
            timeout: Duration::from_secs(self.rpc_timeout),
            max_attempts: self.rpc_attempts,
            ..RpcSettings::default()
        });
        if let Some(schema) = &self.schema {
            config = config.with_schema_path(schema);
        }
        config
    }
}

#[derive(Debug, Serialize)]
struct Summary<'a> {
    network: &'a str,
    checked: usize,
    failed: &'a [String],
    reports: Vec<&'a ValidationReport>,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let config = opts.config();
    let schema = ReferenceSchema::load(&config.schema_path)?;
    let filenames = resolve_filenames(&config, &opts.network, opts.filenames.as_deref())
        .with_context(|| format!("Failed to list records for network '{}'", opts.network))?;

    info!("validating {} records on {}", filenames.len(), opts.network);

    let assets = HttpAssetFetcher::new(config.logo_timeout)?;
    let keys = ChainKeySource::new(&config);
    let validator = RecordValidator::new(&config, &schema, &assets, &keys);

    let outcome = run_batch(&validator, &opts.network, &filenames).await?;

    let summary = Summary {
        network: &outcome.network,
        checked: outcome.reports.len(),
        failed: &outcome.failed,
        reports: outcome.printable(opts.verbose).collect(),
    };
    let format = OutputFormat::from_json_flag(opts.json);
    format_output(format, &summary, || {
        summary
            .reports
            .iter()
            .map(|r| r.render())
            .collect::<Vec<_>>()
            .join("\n\n")
    })?;

    outcome.ensure_success()?;
    if !format.is_json() {
        println!("{}", "✅ Validation successful!".green());
    }
    Ok(())
}
