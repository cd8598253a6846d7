//! Address collections consumed and produced by the filters.
//!
//! This module provides:
//! - The collection abstraction every filter works against ([`Addrs`])
//! - IP family classification ([`IpFamily`]) and networks ([`Network`])
//! - A generic collection over record types ([`AddrList`], [`AddrRecord`])
//! - Records for each network ([`TcpAddr`], [`UdpAddr`], [`RawIpAddr`], [`UnixAddr`])
//!
//! Collections are built once from resolver output and never mutated; the
//! filters build new collections through [`Addrs::append_from`].

mod collection;
mod family;
mod record;

pub use collection::{AddrList, AddrRecord, Addrs};
pub use family::{IpFamily, Network, UnknownNetwork};
pub use record::{AddrParseError, RawIpAddr, TcpAddr, UdpAddr, UnixAddr};

/// Stream (TCP) addresses.
pub type TcpAddrs = AddrList<TcpAddr>;

/// Datagram (UDP) addresses.
pub type UdpAddrs = AddrList<UdpAddr>;

/// Raw IP addresses.
pub type IpAddrs = AddrList<RawIpAddr>;

/// Unix domain socket addresses.
pub type UnixAddrs = AddrList<UnixAddr>;
