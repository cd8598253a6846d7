//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::addrs::Network;

use super::validated::OutputFormat;

/// addr-pick: select which addresses to dial
///
/// Reads candidate addresses (arguments or stdin), runs them through a chain
/// of selection policies and prints the addresses left to try.
#[derive(Debug, Parser)]
#[command(name = "addr-pick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Candidate addresses (read from stdin when omitted)
    #[arg(value_name = "ADDR")]
    pub addrs: Vec<String>,

    /// Network the addresses belong to
    #[arg(long, short, value_enum)]
    pub network: Option<NetworkArg>,

    /// Selection policy, e.g. 'first-each' or 'max:3' (can be specified multiple times)
    #[arg(long = "policy", short = 'p', value_name = "FILTER")]
    pub policies: Vec<String>,

    /// Seed for deterministic shuffling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for addr-pick
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Network argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum NetworkArg {
    /// `host:port` stream sockets
    Tcp,
    /// `host:port` datagram sockets
    Udp,
    /// Bare IPs, optionally with a `%zone`
    Ip,
    /// Unix domain socket paths
    Unix,
}

impl From<NetworkArg> for Network {
    fn from(arg: NetworkArg) -> Self {
        match arg {
            NetworkArg::Tcp => Self::Tcp,
            NetworkArg::Udp => Self::Udp,
            NetworkArg::Ip => Self::Ip,
            NetworkArg::Unix => Self::Unix,
        }
    }
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// One address per line
    Text,
    /// A single JSON object
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
