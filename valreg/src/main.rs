use anyhow::Result;
use clap::{Parser, Subcommand};
use valreg::{cmds, utils};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_BRANCH"),
    "@",
    env!("GIT_COMMIT"),
    ")"
);

#[derive(Parser)]
#[command(name = "valreg")]
#[command(version = VERSION)]
#[command(about = "Audit and aggregate the validator registry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Validate registry records against the schema, logo host and chain")]
    Validate(cmds::validate::Opts),

    #[command(about = "Aggregate each network's records into <network>_validators.json")]
    Generate(cmds::generate::Opts),

    #[command(alias = "network")]
    #[command(about = "Network related commands")]
    Net {
        #[command(subcommand)]
        command: NetworkCommands,
    },
}

#[derive(Subcommand)]
enum NetworkCommands {
    #[command(about = "List known networks")]
    List(cmds::net::list::Opts),

    #[command(about = "Display information about a network")]
    Info(cmds::net::info::Opts),
}

// Records are checked one after another, so a single-threaded runtime is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::init()?;

    match &cli.command {
        Commands::Validate(opts) => cmds::validate::run(opts).await?,
        Commands::Generate(opts) => cmds::generate::run(opts).await?,
        Commands::Net { command } => match command {
            NetworkCommands::List(opts) => cmds::net::list::run(opts).await?,
            NetworkCommands::Info(opts) => cmds::net::info::run(opts).await?,
        },
    }

    Ok(())
}
