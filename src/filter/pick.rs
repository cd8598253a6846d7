//! The named selection and reordering filters.

use crate::addrs::{Addrs, IpFamily};

use super::AddrsFilter;

/// Builds a new collection from `addrs` holding the given indices, in order.
///
/// Returns `None` when `indices` is empty.
pub(super) fn collect_indices<A: Addrs>(
    addrs: &A,
    indices: impl IntoIterator<Item = usize>,
) -> Option<A> {
    indices
        .into_iter()
        .fold(None, |picked, i| Some(addrs.append_from(picked, i)))
}

fn first_of_family<A: Addrs>(addrs: Option<A>, family: IpFamily) -> Option<A> {
    let addrs = addrs?;
    (0..addrs.len())
        .find(|&i| addrs.family(i) == Some(family))
        .map(|i| addrs.append_from(None, i))
}

fn all_of_family<A: Addrs>(addrs: Option<A>, family: IpFamily) -> Option<A> {
    let addrs = addrs?;
    collect_indices(
        &addrs,
        (0..addrs.len()).filter(|&i| addrs.family(i) == Some(family)),
    )
}

fn count_families<A: Addrs>(addrs: &A) -> (usize, usize) {
    (0..addrs.len()).fold((0, 0), |(n4, n6), i| match addrs.family(i) {
        Some(IpFamily::V4) => (n4 + 1, n6),
        Some(IpFamily::V6) => (n4, n6 + 1),
        None => (n4, n6),
    })
}

/// Selects the first IPv4 address, or the first IPv6 address when there is
/// no IPv4 address.
///
/// Collections of one address or fewer are returned unchanged.
///
/// A collection of two or more addresses holding neither family yields
/// `None` and a warning. Resolvers never produce such input for IP
/// networks, so this signals a broken collaborator upstream.
#[must_use]
pub fn default_filter<A: Addrs>(addrs: Option<A>) -> Option<A> {
    let addrs = addrs?;
    let len = addrs.len();
    if len <= 1 {
        return Some(addrs);
    }

    let mut ipv6 = None;
    for i in 0..len {
        match addrs.family(i) {
            Some(IpFamily::V4) => return Some(addrs.append_from(None, i)),
            Some(IpFamily::V6) if ipv6.is_none() => ipv6 = Some(i),
            _ => {}
        }
    }

    if let Some(i) = ipv6 {
        return Some(addrs.append_from(None, i));
    }

    tracing::warn!(len, "No IPv4 or IPv6 address among candidates; selecting none");
    None
}

/// Selects all addresses (identity).
#[must_use]
pub const fn all<A: Addrs>(addrs: Option<A>) -> Option<A> {
    addrs
}

/// Selects the first address.
#[must_use]
pub fn first<A: Addrs>(addrs: Option<A>) -> Option<A> {
    let addrs = addrs?;
    if addrs.len() <= 1 {
        return Some(addrs);
    }
    Some(addrs.append_from(None, 0))
}

/// Selects the first IPv4 address and the first IPv6 address, in the order
/// they appear.
///
/// Collections of one address or fewer are returned unchanged.
#[must_use]
pub fn first_each<A: Addrs>(addrs: Option<A>) -> Option<A> {
    let addrs = addrs?;
    if addrs.len() <= 1 {
        return Some(addrs);
    }

    let (mut have_v4, mut have_v6) = (false, false);
    let mut picked = None;
    for i in 0..addrs.len() {
        match addrs.family(i) {
            Some(IpFamily::V4) if !have_v4 => {
                picked = Some(addrs.append_from(picked, i));
                have_v4 = true;
            }
            Some(IpFamily::V6) if !have_v6 => {
                picked = Some(addrs.append_from(picked, i));
                have_v6 = true;
            }
            _ => {}
        }
        if have_v4 && have_v6 {
            break;
        }
    }
    picked
}

/// Selects the first IPv4 address.
#[must_use]
pub fn first_ipv4<A: Addrs>(addrs: Option<A>) -> Option<A> {
    first_of_family(addrs, IpFamily::V4)
}

/// Selects the first IPv6 address.
#[must_use]
pub fn first_ipv6<A: Addrs>(addrs: Option<A>) -> Option<A> {
    first_of_family(addrs, IpFamily::V6)
}

/// Selects all IPv4 addresses.
#[must_use]
pub fn ipv4<A: Addrs>(addrs: Option<A>) -> Option<A> {
    all_of_family(addrs, IpFamily::V4)
}

/// Selects all IPv6 addresses.
#[must_use]
pub fn ipv6<A: Addrs>(addrs: Option<A>) -> Option<A> {
    all_of_family(addrs, IpFamily::V6)
}

/// Selects all addresses in reverse order.
#[must_use]
pub fn reverse<A: Addrs>(addrs: Option<A>) -> Option<A> {
    let addrs = addrs?;
    let len = addrs.len();
    if len <= 1 {
        return Some(addrs);
    }
    collect_indices(&addrs, (0..len).rev())
}

// ============================================================================
// MaxAddrs - capped selection with a fair IPv4/IPv6 split
// ============================================================================

/// Selects up to `max` addresses, split evenly between IPv4 and IPv6.
///
/// When one family has fewer addresses than its half, the other family fills
/// the spare room. An odd `max` gives the extra slot to IPv4. Within each
/// family, addresses toward the front are preferred, and the result keeps the
/// original relative order.
///
/// # Examples
///
/// ```
/// use addr_pick::addrs::TcpAddrs;
/// use addr_pick::filter::{AddrsFilter, MaxAddrs};
///
/// let addrs = TcpAddrs::parse([
///     "192.0.2.1:80",
///     "192.0.2.2:80",
///     "192.0.2.3:80",
///     "[2001:db8::1]:80",
///     "[2001:db8::2]:80",
/// ])
/// .unwrap();
///
/// let picked = MaxAddrs::new(3).apply(Some(addrs)).unwrap();
/// assert_eq!(
///     picked.to_strings(),
///     vec!["192.0.2.1:80", "192.0.2.2:80", "[2001:db8::1]:80"]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxAddrs {
    max: usize,
}

impl MaxAddrs {
    /// Creates a filter selecting at most `max` addresses.
    #[must_use]
    pub const fn new(max: usize) -> Self {
        Self { max }
    }

    /// Returns the configured limit.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Returns the `(ipv4, ipv6)` quotas for a collection holding `n4` IPv4
    /// and `n6` IPv6 addresses.
    ///
    /// A quota may exceed what is available; it is an upper bound.
    #[must_use]
    pub const fn quotas(self, n4: usize, n6: usize) -> (usize, usize) {
        let half = self.max / 2;
        if n6 <= half {
            (self.max - n6, n6)
        } else if n4 <= half {
            (n4, self.max - n4)
        } else {
            (self.max - half, half)
        }
    }
}

impl<A: Addrs> AddrsFilter<A> for MaxAddrs {
    fn apply(&self, addrs: Option<A>) -> Option<A> {
        let addrs = addrs?;
        let len = addrs.len();
        if len <= self.max {
            return Some(addrs);
        }

        let (n4, n6) = count_families(&addrs);
        let (mut quota_v4, mut quota_v6) = self.quotas(n4, n6);

        let mut picked = None;
        for i in 0..len {
            match addrs.family(i) {
                Some(IpFamily::V4) if quota_v4 > 0 => {
                    picked = Some(addrs.append_from(picked, i));
                    quota_v4 -= 1;
                }
                Some(IpFamily::V6) if quota_v6 > 0 => {
                    picked = Some(addrs.append_from(picked, i));
                    quota_v6 -= 1;
                }
                _ => {}
            }
            if quota_v4 == 0 && quota_v6 == 0 {
                break;
            }
        }
        picked
    }
}

/// Returns a [`MaxAddrs`] filter selecting at most `max` addresses.
#[must_use]
pub const fn max_addrs(max: usize) -> MaxAddrs {
    MaxAddrs::new(max)
}
