use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wren::cli::{Cli, Commands};
use wren_executor::WrenExecutor;
use wren_rpc::{config::RpcServerConfig, provider::UnavailableStateProvider, server::RpcServer};

fn main() -> anyhow::Result<()> {
    // Set the default log level to `info` if not set
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Node(cmd) => {
            info!("Starting node");

            let executor = WrenExecutor::new()?;
            let config = RpcServerConfig {
                http_address: cmd.http_address,
                http_port: cmd.http_port,
            };
            let server = RpcServer::new(Arc::new(UnavailableStateProvider), config);

            let handle = executor.spawn_cancellable(|_shutdown| server.start());
            if let Some(result) = executor.runtime().block_on(handle)? {
                result?;
            }
        }
    }

    Ok(())
}
