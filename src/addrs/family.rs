//! Address family classification.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// IP family of a single address.
///
/// The family follows the length of the address's raw bytes: 4 bytes is
/// IPv4, 16 bytes is IPv6. An IPv4-mapped IPv6 address (`::ffff:a.b.c.d`)
/// carries 16 bytes and is therefore classified as [`IpFamily::V6`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpFamily {
    /// 4-byte addresses.
    V4,
    /// 16-byte addresses.
    V6,
}

impl IpFamily {
    /// Length in bytes of an IPv4 address.
    pub const V4_LEN: usize = 4;

    /// Length in bytes of an IPv6 address.
    pub const V6_LEN: usize = 16;

    /// Returns the family of an IP address.
    #[must_use]
    pub const fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => Self::V4,
            IpAddr::V6(_) => Self::V6,
        }
    }

    /// Returns the family for a raw byte length, or `None` for any
    /// length other than 4 or 16.
    #[must_use]
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            Self::V4_LEN => Some(Self::V4),
            Self::V6_LEN => Some(Self::V6),
            _ => None,
        }
    }

    /// Returns the raw byte length of addresses in this family.
    #[must_use]
    pub const fn byte_len(self) -> usize {
        match self {
            Self::V4 => Self::V4_LEN,
            Self::V6 => Self::V6_LEN,
        }
    }
}

impl fmt::Display for IpFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// The network a collection of addresses is dialed over.
///
/// Each network has its own concrete record type; see
/// [`AddrRecord::NETWORK`](super::AddrRecord::NETWORK).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Stream sockets (`host:port`).
    Tcp,
    /// Datagram sockets (`host:port`).
    Udp,
    /// Raw IP (`ip` or `ip%zone`).
    Ip,
    /// Local (Unix domain) sockets. These addresses have no IP.
    Unix,
}

impl Network {
    /// Returns the lowercase name used in configuration and output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tcp => "tcp",
            Self::Udp => "udp",
            Self::Ip => "ip",
            Self::Unix => "unix",
        }
    }

    /// Returns true if addresses of this network carry an IP.
    #[must_use]
    pub const fn has_ip(self) -> bool {
        !matches!(self, Self::Unix)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a network name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown network '{0}': expected tcp, udp, ip, or unix")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tcp" => Ok(Self::Tcp),
            "udp" => Ok(Self::Udp),
            "ip" => Ok(Self::Ip),
            "unix" => Ok(Self::Unix),
            _ => Err(UnknownNetwork(s.to_string())),
        }
    }
}
