//! CLI module for peerwatch
//!
//! # Commands
//!
//! - `serve` - Start the HTTP server and dashboard
//! - `health` - Print this project's health report once
//! - `network` - Poll every configured peer once
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Start server with default config
//! peerwatch serve
//!
//! # Check the sibling services from a terminal
//! peerwatch network --json
//! ```

pub mod completions;
pub mod config;
pub mod health;
pub mod network;
pub mod output;
pub mod serve;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// peerwatch - project node health and peer dashboard
#[derive(Parser, Debug)]
#[command(
    name = "peerwatch",
    version,
    about = "Self-inspecting project node that polls its sibling services"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the peerwatch server
    Serve(ServeArgs),
    /// Show this project's health
    Health(HealthArgs),
    /// Poll configured peers once
    Network(NetworkArgs),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "peerwatch.toml")]
    pub config: PathBuf,

    /// Override server port (takes precedence over `PEERWATCH_PORT`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override server host
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Override the project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "peerwatch.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct NetworkArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "peerwatch.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "peerwatch.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Load the config file for one-shot commands, falling back to defaults if absent.
pub fn load_config_or_default(
    path: &std::path::Path,
) -> Result<crate::config::PeerwatchConfig, crate::config::ConfigError> {
    use crate::config::{ConfigError, PeerwatchConfig};

    match PeerwatchConfig::load(Some(path)) {
        Ok(config) => Ok(config),
        Err(ConfigError::NotFound(_)) => Ok(PeerwatchConfig::default()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parse_serve_defaults() {
        let cli = Cli::try_parse_from(["peerwatch", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.config, PathBuf::from("peerwatch.toml"));
                assert!(args.root.is_none());
            }
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_serve_with_port() {
        let cli = Cli::try_parse_from(["peerwatch", "serve", "-p", "9000"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.port, Some(9000)),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_serve_with_root() {
        let cli = Cli::try_parse_from(["peerwatch", "serve", "--root", "/srv/site"]).unwrap();
        match cli.command {
            Commands::Serve(args) => assert_eq!(args.root, Some(PathBuf::from("/srv/site"))),
            _ => panic!("Expected Serve command"),
        }
    }

    #[test]
    fn test_cli_parse_health_json() {
        let cli = Cli::try_parse_from(["peerwatch", "health", "--json"]).unwrap();
        match cli.command {
            Commands::Health(args) => assert!(args.json),
            _ => panic!("Expected Health command"),
        }
    }

    #[test]
    fn test_cli_parse_network() {
        let cli = Cli::try_parse_from(["peerwatch", "network", "-c", "other.toml"]).unwrap();
        match cli.command {
            Commands::Network(args) => {
                assert!(!args.json);
                assert_eq!(args.config, PathBuf::from("other.toml"));
            }
            _ => panic!("Expected Network command"),
        }
    }

    #[test]
    fn test_cli_parse_config_init() {
        let cli = Cli::try_parse_from(["peerwatch", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::Init(ConfigInitArgs { force: true, .. }))
        ));
    }

    #[test]
    fn test_load_config_or_default_missing_file() {
        let config =
            load_config_or_default(std::path::Path::new("/nonexistent/peerwatch.toml")).unwrap();
        assert_eq!(config.peers.len(), 3);
    }
}
