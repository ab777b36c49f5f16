//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod init;
pub mod org;
pub mod repo;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// ghorg - inspect GitHub organizations and their public repositories
#[derive(Parser, Debug)]
#[command(name = "ghorg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json) [default: table]
    #[arg(long, global = true, env = "GHORG_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GHORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the GitHub API root (e.g. a GitHub Enterprise host)
    #[arg(long, global = true, env = "GHORG_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHORG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a config file with a default organization
    Init {
        /// Default organization login
        #[arg(long)]
        org: Option<String>,

        /// Replace an existing config file instead of updating it
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved configuration
    Status,

    /// Display version information
    Version,

    /// Show an organization
    Org {
        /// Organization login (defaults to the configured org)
        name: Option<String>,
    },

    /// List an organization's public repositories
    Repos {
        /// Organization login (defaults to the configured org)
        name: Option<String>,

        /// Only repositories with this license key (e.g. apache-2.0)
        #[arg(long, short = 'l')]
        license: Option<String>,
    },
}
