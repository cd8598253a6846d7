//! Address selection filters.
//!
//! A filter maps one address collection to another collection of the same
//! type, or to `None` when no address is left to try. Filters never mutate
//! their input; they either hand it back unchanged or build a new one.
//!
//! # Design
//!
//! - **Filters as values**: anything implementing [`AddrsFilter`] is a filter,
//!   including plain functions and closures of type
//!   `Fn(Option<A>) -> Option<A>`. The named filters ([`default_filter`],
//!   [`first_each`], [`ipv4`], ...) are generic functions usable directly.
//! - **Parameterized filters**: [`MaxAddrs`] caps the result size with a fair
//!   IPv4/IPv6 split; [`Shuffle`] takes an injected [`Permuter`].
//! - **Composition**: [`FilterChain`] (or [`compose`] / [`compose!`](crate::compose))
//!   threads a collection through filters in order.
//! - **Named policies**: [`FilterSpec`] maps textual names (`"first-each"`,
//!   `"max:3"`) to filters for configuration.
//!
//! # Example
//!
//! ```
//! use addr_pick::addrs::{Addrs, TcpAddrs};
//! use addr_pick::filter::{AddrsFilter, FilterChain, first_each, reverse};
//!
//! let addrs = TcpAddrs::parse([
//!     "192.0.2.1:80",
//!     "192.0.2.2:80",
//!     "[2001:db8::1]:80",
//! ])
//! .unwrap();
//!
//! let chain: FilterChain<TcpAddrs> = FilterChain::new().then(reverse).then(first_each);
//! let picked = chain.apply(Some(addrs)).unwrap();
//!
//! assert_eq!(picked.to_strings(), vec!["[2001:db8::1]:80", "192.0.2.2:80"]);
//! ```

mod chain;
mod pick;
mod shuffle;
mod spec;


pub use chain::{FilterChain, compose};
pub use pick::{
    MaxAddrs, all, default_filter, first, first_each, first_ipv4, first_ipv6, ipv4, ipv6,
    max_addrs, reverse,
};
pub use shuffle::{Permuter, SeededPermuter, Shuffle, ThreadRngPermuter, shuffle};
pub use spec::{FilterSpec, SpecParseError};

use crate::addrs::Addrs;

/// Trait for selecting addresses from a collection.
///
/// `None` means "no addresses". Every filter in this crate maps `None` to
/// `None`.
///
/// # Thread Safety
///
/// Filters must be `Send + Sync` so one configured chain can serve
/// concurrent callers, each with its own collection.
pub trait AddrsFilter<A: Addrs>: Send + Sync {
    /// Selects addresses from `addrs`.
    fn apply(&self, addrs: Option<A>) -> Option<A>;
}

impl<A, F> AddrsFilter<A> for F
where
    A: Addrs,
    F: Fn(Option<A>) -> Option<A> + Send + Sync,
{
    fn apply(&self, addrs: Option<A>) -> Option<A> {
        self(addrs)
    }
}
