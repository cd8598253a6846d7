//! The address collection abstraction and its generic implementation.

use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

use super::{AddrParseError, IpFamily, Network};

/// An ordered, indexable collection of addresses of one concrete family.
///
/// Filters interact with a collection only through these operations, which
/// lets the same filter run over TCP, UDP, raw-IP and Unix addresses alike.
/// Indices must be in `0..len()`; anything else is a programming error and
/// panics.
///
/// # Example
///
/// ```
/// use addr_pick::addrs::{Addrs, IpFamily, TcpAddrs};
///
/// let addrs: TcpAddrs = TcpAddrs::parse(["192.0.2.1:80", "[2001:db8::1]:80"]).unwrap();
///
/// assert_eq!(addrs.len(), 2);
/// assert_eq!(addrs.addr(1), "[2001:db8::1]:80");
/// assert_eq!(addrs.family(0), Some(IpFamily::V4));
///
/// // Build a new collection holding only the second address.
/// let second = addrs.append_from(None, 1);
/// assert_eq!(second.addr(0), "[2001:db8::1]:80");
/// ```
pub trait Addrs: Sized {
    /// Returns the number of addresses in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection holds no addresses.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the string form of the address at index `i`.
    fn addr(&self, i: usize) -> String;

    /// Returns the IP of the address at index `i`, or `None` for
    /// addresses without one (Unix domain sockets).
    fn ip(&self, i: usize) -> Option<IpAddr>;

    /// Returns `target` (or a new empty collection when `None`) with the
    /// address at index `i` of `self` appended.
    ///
    /// `target` has the same type as `self`, so a result never mixes
    /// address families.
    #[must_use]
    fn append_from(&self, target: Option<Self>, i: usize) -> Self;

    /// Returns the raw bytes of the IP at index `i`: 4 bytes for IPv4,
    /// 16 bytes for IPv6, empty when there is no IP.
    fn ip_octets(&self, i: usize) -> Vec<u8> {
        match self.ip(i) {
            Some(IpAddr::V4(v4)) => v4.octets().to_vec(),
            Some(IpAddr::V6(v6)) => v6.octets().to_vec(),
            None => Vec::new(),
        }
    }

    /// Returns the IP family of the address at index `i`.
    fn family(&self, i: usize) -> Option<IpFamily> {
        self.ip(i).map(|ip| IpFamily::of(&ip))
    }
}

/// A single address record of a concrete network.
pub trait AddrRecord: Clone + fmt::Display + Send + Sync + 'static {
    /// The network every record of this type belongs to.
    const NETWORK: Network;

    /// Returns the record's IP, if the network has one.
    fn ip(&self) -> Option<IpAddr>;
}

/// A list of address records of type `R`.
///
/// This is the concrete collection each family plugs into [`Addrs`]; see
/// the [`TcpAddrs`](super::TcpAddrs), [`UdpAddrs`](super::UdpAddrs),
/// [`IpAddrs`](super::IpAddrs) and [`UnixAddrs`](super::UnixAddrs) aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddrList<R> {
    records: Vec<R>,
}

impl<R> AddrList<R> {
    /// Wraps a vector of records, keeping their order.
    #[must_use]
    pub const fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Returns the records in order.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Consumes the list and returns its records.
    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Returns an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }
}

impl<R: AddrRecord> AddrList<R> {
    /// Returns the network of the records in this list.
    #[must_use]
    pub const fn network(&self) -> Network {
        R::NETWORK
    }

    /// Returns the string form of every address, in order.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        self.records.iter().map(ToString::to_string).collect()
    }
}

impl<R> AddrList<R>
where
    R: FromStr<Err = AddrParseError>,
{
    /// Parses every input into a record, keeping input order.
    ///
    /// # Errors
    ///
    /// Returns the first [`AddrParseError`] encountered.
    pub fn parse<I, S>(inputs: I) -> Result<Self, AddrParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

impl<R> Default for AddrList<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> From<Vec<R>> for AddrList<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl<R> FromIterator<R> for AddrList<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for AddrList<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a AddrList<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<R: AddrRecord> Addrs for AddrList<R> {
    fn len(&self) -> usize {
        self.records.len()
    }

    fn addr(&self, i: usize) -> String {
        self.records[i].to_string()
    }

    fn ip(&self, i: usize) -> Option<IpAddr> {
        self.records[i].ip()
    }

    fn append_from(&self, target: Option<Self>, i: usize) -> Self {
        let mut list = target.unwrap_or_default();
        list.records.push(self.records[i].clone());
        list
    }
}
