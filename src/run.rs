//! Application execution logic.
//!
//! This module parses the candidate addresses for the configured network,
//! runs them through the configured policy chain and renders the result.

use std::io::Read;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use addr_pick::addrs::{
    AddrList, AddrParseError, AddrRecord, Addrs, Network, RawIpAddr, TcpAddr, UdpAddr, UnixAddr,
};
use addr_pick::config::{OutputFormat, ValidatedConfig};
use addr_pick::filter::{AddrsFilter, FilterSpec, Permuter, SeededPermuter, ThreadRngPermuter};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// A candidate address could not be parsed.
    #[error(transparent)]
    Parse(#[from] AddrParseError),

    /// Failed to read candidates from stdin.
    #[error("Failed to read addresses from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    /// Failed to render the selection as JSON.
    #[error("Failed to render selection: {0}")]
    Render(#[source] serde_json::Error),
}

/// The outcome of one selection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Network the candidates were parsed as
    pub network: Network,
    /// Number of candidate addresses
    pub input: usize,
    /// Policies applied, in order
    pub policy: Vec<FilterSpec>,
    /// Addresses left to try, in dial order
    pub selected: Vec<String>,
}

impl Selection {
    /// Returns true if no address is left to try.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Renders the selection in the given format.
    ///
    /// Text output is one address per line, with no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Render`] if JSON serialization fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, RunError> {
        match format {
            OutputFormat::Text => Ok(self.selected.join("\n")),
            OutputFormat::Json => serde_json::to_string(self).map_err(RunError::Render),
        }
    }
}

/// Executes one selection.
///
/// Candidates come from `config.addrs`, or from `stdin` (whitespace
/// separated) when none were given on the command line.
pub fn execute<R: Read>(config: &ValidatedConfig, stdin: R) -> Result<Selection, RunError> {
    let candidates = if config.addrs.is_empty() {
        read_candidates(stdin)?
    } else {
        config.addrs.clone()
    };

    if config.seed.is_some() && !config.is_random() {
        tracing::debug!("Seed has no effect: no random policy configured");
    }
    let permuter = build_permuter(config.seed);

    let (input, selected) = match config.network {
        Network::Tcp => select::<TcpAddr>(&candidates, &config.policy, &permuter)?,
        Network::Udp => select::<UdpAddr>(&candidates, &config.policy, &permuter)?,
        Network::Ip => select::<RawIpAddr>(&candidates, &config.policy, &permuter)?,
        Network::Unix => select::<UnixAddr>(&candidates, &config.policy, &permuter)?,
    };

    if selected.is_empty() {
        tracing::warn!(candidates = input, "No address selected");
    } else {
        tracing::debug!(
            candidates = input,
            selected = selected.len(),
            "Selection complete"
        );
    }

    Ok(Selection {
        network: config.network,
        input,
        policy: config.policy.clone(),
        selected,
    })
}

fn read_candidates<R: Read>(mut stdin: R) -> Result<Vec<String>, RunError> {
    let mut buf = String::new();
    stdin.read_to_string(&mut buf).map_err(RunError::Stdin)?;
    Ok(buf.split_whitespace().map(str::to_string).collect())
}

fn build_permuter(seed: Option<u64>) -> Arc<dyn Permuter> {
    match seed {
        Some(seed) => Arc::new(SeededPermuter::new(seed)),
        None => Arc::new(ThreadRngPermuter),
    }
}

/// Parses `candidates` as records of type `R` and applies `policy`.
///
/// Returns the candidate count and the selected addresses (empty when the
/// chain yields nothing).
fn select<R>(
    candidates: &[String],
    policy: &[FilterSpec],
    permuter: &Arc<dyn Permuter>,
) -> Result<(usize, Vec<String>), RunError>
where
    R: AddrRecord + FromStr<Err = AddrParseError>,
{
    let addrs = AddrList::<R>::parse(candidates)?;
    let input = addrs.len();
    tracing::debug!(network = %R::NETWORK, candidates = input, "Parsed candidate addresses");

    let chain = FilterSpec::chain::<AddrList<R>>(policy, permuter);
    let selected = chain
        .apply(Some(addrs))
        .map(|picked| picked.to_strings())
        .unwrap_or_default();

    Ok((input, selected))
}
