//! addr-pick: pluggable address selection for dialers
//!
//! A library for deciding which of a host's resolved addresses a dialer
//! should try, and in what order. Address collections of any network
//! (TCP, UDP, raw IP, Unix) are run through composable selection filters.

pub mod addrs;
pub mod config;
pub mod filter;
