//! Sequential filter composition.

use crate::addrs::Addrs;

use super::AddrsFilter;

/// Filters applied in sequence, each receiving the previous stage's output.
///
/// An empty chain selects everything. `None` flows through the remaining
/// stages like any other value.
///
/// # Examples
///
/// ```
/// use addr_pick::addrs::TcpAddrs;
/// use addr_pick::filter::{AddrsFilter, FilterChain, first, first_ipv4, ipv4};
///
/// let addrs = TcpAddrs::parse(["[2001:db8::1]:80", "192.0.2.1:80", "192.0.2.2:80"]).unwrap();
///
/// // Equivalent to `first_ipv4`.
/// let chain: FilterChain<TcpAddrs> = FilterChain::new().then(ipv4).then(first);
/// assert_eq!(chain.apply(Some(addrs.clone())), first_ipv4(Some(addrs)));
/// ```
pub struct FilterChain<A: Addrs> {
    stages: Vec<Box<dyn AddrsFilter<A>>>,
}

impl<A: Addrs> FilterChain<A> {
    /// Creates an empty chain (selects everything).
    #[must_use]
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage (builder pattern).
    #[must_use]
    pub fn then<F: AddrsFilter<A> + 'static>(self, filter: F) -> Self {
        self.then_boxed(Box::new(filter))
    }

    /// Appends an already boxed stage.
    #[must_use]
    pub fn then_boxed(mut self, filter: Box<dyn AddrsFilter<A>>) -> Self {
        self.stages.push(filter);
        self
    }

    /// Returns the number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true if the chain has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<A: Addrs> Default for FilterChain<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Addrs> AddrsFilter<A> for FilterChain<A> {
    fn apply(&self, addrs: Option<A>) -> Option<A> {
        self.stages
            .iter()
            .enumerate()
            .fold(addrs, |addrs, (stage, filter)| {
                let picked = filter.apply(addrs);
                tracing::trace!(
                    stage,
                    remaining = picked.as_ref().map_or(0, Addrs::len),
                    "Applied address filter"
                );
                picked
            })
    }
}

impl<A: Addrs> FromIterator<Box<dyn AddrsFilter<A>>> for FilterChain<A> {
    fn from_iter<I: IntoIterator<Item = Box<dyn AddrsFilter<A>>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<A: Addrs> std::fmt::Debug for FilterChain<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("stage_count", &self.stages.len())
            .finish()
    }
}

/// Returns a filter applying `filters` in sequence.
///
/// See also the [`compose!`](crate::compose) macro, which accepts unboxed
/// filters.
#[must_use]
pub fn compose<A, I>(filters: I) -> FilterChain<A>
where
    A: Addrs,
    I: IntoIterator<Item = Box<dyn AddrsFilter<A>>>,
{
    filters.into_iter().collect()
}

/// Builds a [`FilterChain`] from a list of filters.
///
/// # Examples
///
/// ```
/// use addr_pick::addrs::TcpAddrs;
/// use addr_pick::compose;
/// use addr_pick::filter::{AddrsFilter, FilterChain, MaxAddrs, first_each, reverse};
///
/// let chain: FilterChain<TcpAddrs> = compose![reverse, MaxAddrs::new(2), first_each];
/// let addrs = TcpAddrs::parse(["192.0.2.1:80", "[2001:db8::1]:80", "192.0.2.2:80"]).unwrap();
///
/// let picked = chain.apply(Some(addrs)).unwrap();
/// assert_eq!(picked.to_strings(), vec!["192.0.2.2:80", "[2001:db8::1]:80"]);
/// ```
#[macro_export]
macro_rules! compose {
    ($($filter:expr),* $(,)?) => {
        $crate::filter::FilterChain::new()$(.then($filter))*
    };
}
