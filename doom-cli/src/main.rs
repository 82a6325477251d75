//! DoomIndex CLI - query disaster records, boundaries and the response service.

use clap::Parser;
use doom_core::client::DEFAULT_API_BASE_URL;

#[derive(Parser)]
#[command(name = "doom-cli", version, about = "DoomIndex disaster data toolkit")]
struct Cli {
    /// Base URL of the disaster query service
    #[arg(long, global = true, env = "DOOMINDEX_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    #[command(subcommand)]
    command: doom_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    doom_cmd::run(cli.command, &cli.api_base_url).await
}
