//! ghorg - GitHub organization and repository listing CLI

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Route `log` output to stderr; `--debug` lowers the default filter, `RUST_LOG` still wins
fn init_logging(debug: bool) {
    let default_filter = if debug { "ghorg=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init { org, force } => cli::init::run(&opts, org, force),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("ghorg version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Org { name } => cli::org::get(&opts, name.as_deref()).await,
        Commands::Repos { name, license } => {
            cli::repo::list(&opts, name.as_deref(), license.as_deref()).await
        }
    }
}
