//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::addrs::Network;
use crate::filter::FilterSpec;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// How the selection is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One address per line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Network the candidate addresses belong to
    pub network: Network,

    /// Selection policies, applied in order (never empty)
    pub policy: Vec<FilterSpec>,

    /// Seed for deterministic shuffling
    pub seed: Option<u64>,

    /// Output format
    pub format: OutputFormat,

    /// Candidate addresses given on the command line.
    /// Empty means "read from stdin".
    pub addrs: Vec<String>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let policy = self
            .policy
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        let seed = self
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string());

        write!(
            f,
            "Config {{ network: {}, policy: [{}], seed: {}, format: {}, addrs: {} }}",
            self.network,
            policy,
            seed,
            self.format,
            if self.addrs.is_empty() {
                "stdin".to_string()
            } else {
                self.addrs.len().to_string()
            },
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values. A CLI policy
    /// list replaces the TOML list entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if the network, a policy entry, or the output format
    /// is invalid.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let network = Self::resolve_network(cli, toml)?;
        let policy = Self::resolve_policy(cli, toml)?;
        let seed = cli.seed.or_else(|| toml.and_then(|t| t.select.seed));
        let format = Self::resolve_format(cli, toml)?;

        Ok(Self {
            network,
            policy,
            seed,
            format,
            addrs: cli.addrs.clone(),
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns true if any policy draws on randomness.
    #[must_use]
    pub fn is_random(&self) -> bool {
        self.policy.iter().any(|spec| spec.is_random())
    }

    fn resolve_network(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Network, ConfigError> {
        // CLI takes precedence
        if let Some(network) = cli.network {
            return Ok(network.into());
        }

        match toml.and_then(|t| t.select.network.as_deref()) {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidNetwork {
                value: value.to_string(),
            }),
            None => Ok(defaults::NETWORK),
        }
    }

    fn resolve_policy(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Vec<FilterSpec>, ConfigError> {
        // CLI list replaces the TOML list
        let raw = if cli.policies.is_empty() {
            toml.map_or(&[][..], |t| t.select.policy.as_slice())
        } else {
            cli.policies.as_slice()
        };

        if raw.is_empty() {
            return Ok(vec![defaults::POLICY]);
        }

        raw.iter()
            .map(|value| {
                value
                    .parse::<FilterSpec>()
                    .map_err(|source| ConfigError::InvalidPolicy {
                        value: value.clone(),
                        source,
                    })
            })
            .collect()
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        let value = toml
            .and_then(|t| t.output.format.as_deref())
            .unwrap_or(defaults::FORMAT);
        parse_format(value)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.trim().to_lowercase().as_str() {
        "text" | "plain" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
