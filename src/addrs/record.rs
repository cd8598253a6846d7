//! Concrete address records for each network.

use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use super::{AddrRecord, Network};

/// Error type for parsing a textual address into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddrParseError {
    /// The input was empty or whitespace.
    #[error("Empty {network} address")]
    Empty {
        /// Network the address was parsed for
        network: Network,
    },

    /// The input is not a valid address for the network.
    #[error("Invalid {network} address '{value}': {reason}")]
    Invalid {
        /// Network the address was parsed for
        network: Network,
        /// The rejected input
        value: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl AddrParseError {
    fn invalid(network: Network, value: &str, reason: impl fmt::Display) -> Self {
        Self::Invalid {
            network,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

fn parse_socket_addr(network: Network, s: &str) -> Result<SocketAddr, AddrParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(AddrParseError::Empty { network });
    }
    trimmed
        .parse::<SocketAddr>()
        .map_err(|e| AddrParseError::invalid(network, trimmed, e))
}

// ============================================================================
// TcpAddr / UdpAddr - socket addresses
// ============================================================================

/// A stream (TCP) endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TcpAddr(pub SocketAddr);

impl TcpAddr {
    /// Returns the socket address.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        self.0
    }
}

impl AddrRecord for TcpAddr {
    const NETWORK: Network = Network::Tcp;

    fn ip(&self) -> Option<IpAddr> {
        Some(self.0.ip())
    }
}

impl fmt::Display for TcpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<SocketAddr> for TcpAddr {
    fn from(addr: SocketAddr) -> Self {
        Self(addr)
    }
}

impl FromStr for TcpAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_socket_addr(Network::Tcp, s).map(Self)
    }
}

/// A datagram (UDP) endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UdpAddr(pub SocketAddr);

impl UdpAddr {
    /// Returns the socket address.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        self.0
    }
}

impl AddrRecord for UdpAddr {
    const NETWORK: Network = Network::Udp;

    fn ip(&self) -> Option<IpAddr> {
        Some(self.0.ip())
    }
}

impl fmt::Display for UdpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<SocketAddr> for UdpAddr {
    fn from(addr: SocketAddr) -> Self {
        Self(addr)
    }
}

impl FromStr for UdpAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_socket_addr(Network::Udp, s).map(Self)
    }
}

// ============================================================================
// RawIpAddr - bare IP with optional IPv6 zone
// ============================================================================

/// A raw IP endpoint, with an optional IPv6 zone (`fe80::1%eth0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawIpAddr {
    ip: IpAddr,
    zone: Option<String>,
}

impl RawIpAddr {
    /// Creates a record without a zone.
    #[must_use]
    pub const fn new(ip: IpAddr) -> Self {
        Self { ip, zone: None }
    }

    /// Creates a record with an IPv6 zone.
    #[must_use]
    pub fn with_zone(ip: IpAddr, zone: impl Into<String>) -> Self {
        Self {
            ip,
            zone: Some(zone.into()),
        }
    }

    /// Returns the zone, if any.
    #[must_use]
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }
}

impl AddrRecord for RawIpAddr {
    const NETWORK: Network = Network::Ip;

    fn ip(&self) -> Option<IpAddr> {
        Some(self.ip)
    }
}

impl fmt::Display for RawIpAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.zone {
            Some(zone) => write!(f, "{}%{zone}", self.ip),
            None => write!(f, "{}", self.ip),
        }
    }
}

impl From<IpAddr> for RawIpAddr {
    fn from(ip: IpAddr) -> Self {
        Self::new(ip)
    }
}

impl FromStr for RawIpAddr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AddrParseError::Empty {
                network: Network::Ip,
            });
        }

        let (ip_str, zone) = match trimmed.split_once('%') {
            Some((ip, zone)) => (ip, Some(zone)),
            None => (trimmed, None),
        };

        let ip = ip_str
            .parse::<IpAddr>()
            .map_err(|e| AddrParseError::invalid(Network::Ip, trimmed, e))?;

        match zone {
            None => Ok(Self::new(ip)),
            Some("") => Err(AddrParseError::invalid(Network::Ip, trimmed, "empty zone")),
            Some(_) if ip.is_ipv4() => Err(AddrParseError::invalid(
                Network::Ip,
                trimmed,
                "zones are only valid for IPv6",
            )),
            Some(zone) => Ok(Self::with_zone(ip, zone)),
        }
    }
}

// ============================================================================
// UnixAddr - local socket path
// ============================================================================

/// A Unix domain socket endpoint. Has no IP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnixAddr {
    path: PathBuf,
}

impl UnixAddr {
    /// Creates a record for a socket path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the socket path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AddrRecord for UnixAddr {
    const NETWORK: Network = Network::Unix;

    fn ip(&self) -> Option<IpAddr> {
        None
    }
}

impl fmt::Display for UnixAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl FromStr for UnixAddr {
    type Err = AddrParseError;

    /// Accepts a bare path or a `unix:`-prefixed one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let path = trimmed.strip_prefix("unix:").unwrap_or(trimmed);
        if path.is_empty() {
            return Err(AddrParseError::Empty {
                network: Network::Unix,
            });
        }
        Ok(Self::new(path))
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
