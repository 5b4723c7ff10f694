//! # Bitdns
//!
//! Resolves names under a reserved suffix (".bit" by default) from a cached
//! name scan of a registry daemon, ahead of conventional DNS.

mod bootstrap;
mod di;
mod server;

use bitdns_domain::{CliOverrides, RefreshMode};
use clap::{Parser, Subcommand};
use di::NameServices;

#[derive(Parser)]
#[command(name = "bitdns")]
#[command(version)]
#[command(about = "Resolve .bit names through a registry daemon")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Registry daemon address (host:port)
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Registry RPC username
    #[arg(short = 'u', long)]
    username: Option<String>,

    /// Registry RPC password
    #[arg(short = 'p', long)]
    password: Option<String>,

    /// Seconds between registry refreshes
    #[arg(long)]
    refresh_interval: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve the given names once and exit
    Resolve {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Answer names read from stdin, refreshing in the background
    Serve,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server: self.server.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            refresh_interval: self.refresh_interval,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = cli.overrides();
    let config_path = cli.config.as_deref();

    let mut config = bootstrap::load_config(config_path, overrides.clone())?;
    bootstrap::init_logging(&config);

    config.registry.refresh_mode = match cli.command {
        Command::Resolve { .. } => RefreshMode::OnLookup,
        Command::Serve => RefreshMode::Background,
    };
    bootstrap::log_config(config_path, &config);

    let services = NameServices::build(&config.registry)?;

    match &cli.command {
        Command::Resolve { names } => server::run_resolve(&services, names).await,
        Command::Serve => server::run_stdin_shim(&services, config_path, &overrides).await,
    }
}
