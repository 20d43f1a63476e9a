use std::net::{IpAddr, Ipv4Addr};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the node
    #[command(name = "node")]
    Node(NodeCommand),
}

#[derive(Debug, Parser)]
pub struct NodeCommand {
    /// Verbosity level
    #[arg(short, long, default_value_t = 3)]
    pub verbosity: u8,

    /// Address for the HTTP API to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub http_address: IpAddr,

    /// Port for the HTTP API to listen on
    #[arg(long, default_value_t = 5052)]
    pub http_port: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_node_command() {
        let cli = Cli::parse_from(["program", "node", "--verbosity", "2", "--http-port", "8080"]);

        match cli.command {
            Commands::Node(cmd) => {
                assert_eq!(cmd.verbosity, 2);
                assert_eq!(cmd.http_address, IpAddr::V4(Ipv4Addr::LOCALHOST));
                assert_eq!(cmd.http_port, 8080);
            }
        }
    }
}
