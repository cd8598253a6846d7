//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Address selection section
    #[serde(default)]
    pub select: SelectSection,

    /// Output section
    #[serde(default)]
    pub output: OutputSection,
}

/// Address selection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectSection {
    /// Network: "tcp", "udp", "ip", or "unix"
    pub network: Option<String>,

    /// Policies applied in order, e.g. `["shuffle", "first-each"]`
    #[serde(default)]
    pub policy: Vec<String>,

    /// Seed for deterministic shuffling
    pub seed: Option<u64>,
}

/// Output section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# addr-pick configuration file

[select]
# Network of the candidate addresses (default: tcp)
# Accepted values: "tcp", "udp", "ip", "unix"
network = "tcp"

# Selection policies, applied in order (default: ["default"])
# Note: --policy CLI flags REPLACE this list entirely (not merged)
# Accepted values:
#   default     first IPv4 address, else first IPv6 address
#   all         every address, unchanged
#   first       the first address
#   first-each  the first IPv4 and the first IPv6 address
#   first-ipv4  the first IPv4 address
#   first-ipv6  the first IPv6 address
#   ipv4        every IPv4 address
#   ipv6        every IPv6 address
#   max:N       at most N addresses, split fairly between IPv4 and IPv6
#   reverse     every address, in reverse order
#   shuffle     every address, in random order
policy = ["default"]

# Seed for deterministic shuffling (default: random)
# seed = 42

[output]
# Output format: "text" (one address per line) or "json" (default: text)
# format = "text"
"#
    .to_string()
}
