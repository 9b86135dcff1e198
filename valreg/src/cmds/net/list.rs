use anyhow::Result;
use clap::Parser;
use valreg_networks::networks;

#[derive(Parser, Debug)]
pub struct Opts {}

pub async fn run(_opts: &Opts) -> Result<()> {
    println!("Available networks:\n");
    for network in networks::all() {
        println!("  {} - {}", network.name, network.description);
        println!("    RPC: {}", network.rpc_url);
    }
    Ok(())
}
