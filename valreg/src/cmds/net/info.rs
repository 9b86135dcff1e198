use anyhow::{Context, Result};
use clap::Parser;
use valreg_networks::{networks, resolve_rpc_url, PRIMARY_NETWORK, RPC_OVERRIDE_ENV};

#[derive(Parser, Debug)]
pub struct Opts {
    /// Network name (e.g., testnet, mainnet). Defaults to mainnet.
    #[arg(default_value = PRIMARY_NETWORK)]
    network: String,

    /// RPC endpoint override, honored for mainnet only
    #[arg(long, env = RPC_OVERRIDE_ENV)]
    rpc_url: Option<String>,
}

pub async fn run(opts: &Opts) -> Result<()> {
    let network = networks::by_name(&opts.network)
        .with_context(|| format!("Network '{}' not found", opts.network))?;
    let endpoint = resolve_rpc_url(&network.name, opts.rpc_url.as_deref());

    println!("\n╔═══════════════════════════════════════════════════════════════════╗");
    println!("║                        Validator Network                          ║");
    println!("╚═══════════════════════════════════════════════════════════════════╝\n");

    println!("📡 Network Name:     {}", network.name);
    println!("📝 Description:      {}", network.description);
    println!("🔗 RPC Endpoint:     {}", endpoint);
    if endpoint != network.rpc_url {
        println!("                     (override; default {})", network.rpc_url);
    }
    println!("📜 Staking Contract: {}", network.staking_contract);

    println!("\n📁 Records:");
    println!("─────────────────────────────────────────────────────────────────────");
    println!("  {}/<secp>.json", network.name);
    println!("  {}/{}_validators.json (aggregate)", network.name, network.name);

    println!();

    Ok(())
}
