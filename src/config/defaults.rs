//! Default values for configuration options.
//!
//! Centralized constants to avoid magic values scattered across the codebase.

use crate::addrs::Network;
use crate::filter::FilterSpec;

/// Default network when neither CLI nor config file names one.
pub const NETWORK: Network = Network::Tcp;

/// Default selection policy.
pub const POLICY: FilterSpec = FilterSpec::Default;

/// Default output format name.
pub const FORMAT: &str = "text";

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "addr-pick.toml";
