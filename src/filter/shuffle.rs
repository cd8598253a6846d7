//! Random reordering with an injectable randomness source.
//!
//! The [`Permuter`] trait lets tests and reproducible runs inject a seeded
//! source ([`SeededPermuter`]) while production code uses the thread-local
//! generator ([`ThreadRngPermuter`]).

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::addrs::Addrs;

use super::AddrsFilter;
use super::pick::collect_indices;

/// Source of uniformly random permutations.
///
/// # Example
///
/// ```
/// use addr_pick::filter::{Permuter, SeededPermuter};
///
/// let permuter = SeededPermuter::new(7);
/// let mut order = permuter.permutation(4);
/// order.sort_unstable();
/// assert_eq!(order, vec![0, 1, 2, 3]);
/// ```
pub trait Permuter: Send + Sync {
    /// Returns a uniformly random permutation of `0..n`.
    fn permutation(&self, n: usize) -> Vec<usize>;
}

/// Production permuter backed by the thread-local generator.
///
/// Safe to use from any number of threads; each thread draws from its own
/// generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngPermuter;

impl Permuter for ThreadRngPermuter {
    fn permutation(&self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(&mut rand::rng());
        order
    }
}

/// Deterministic permuter seeded with a `u64`.
///
/// Two permuters with the same seed produce the same sequence of
/// permutations.
#[derive(Debug)]
pub struct SeededPermuter {
    rng: Mutex<StdRng>,
}

impl SeededPermuter {
    /// Creates a permuter from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Permuter for SeededPermuter {
    fn permutation(&self, n: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..n).collect();
        // The generator holds no invariant a panicking holder could break.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        order.shuffle(&mut *rng);
        order
    }
}

fn shuffle_with<A, P>(permuter: &P, addrs: Option<A>) -> Option<A>
where
    A: Addrs,
    P: Permuter + ?Sized,
{
    let addrs = addrs?;
    let len = addrs.len();
    if len <= 1 {
        return Some(addrs);
    }

    let order = permuter.permutation(len);
    debug_assert_eq!(order.len(), len, "permuter returned a partial permutation");
    collect_indices(&addrs, order)
}

/// Selects all addresses in random order.
///
/// Collections of one address or fewer are returned unchanged.
#[derive(Clone)]
pub struct Shuffle {
    permuter: Arc<dyn Permuter>,
}

impl Shuffle {
    /// Creates a shuffle filter using the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_permuter(Arc::new(ThreadRngPermuter))
    }

    /// Creates a shuffle filter drawing permutations from `permuter`.
    #[must_use]
    pub fn with_permuter(permuter: Arc<dyn Permuter>) -> Self {
        Self { permuter }
    }

    /// Creates a deterministic shuffle filter.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_permuter(Arc::new(SeededPermuter::new(seed)))
    }
}

impl Default for Shuffle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Shuffle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shuffle").finish_non_exhaustive()
    }
}

impl<A: Addrs> AddrsFilter<A> for Shuffle {
    fn apply(&self, addrs: Option<A>) -> Option<A> {
        shuffle_with(self.permuter.as_ref(), addrs)
    }
}

/// Selects all addresses in random order, using the thread-local generator.
#[must_use]
pub fn shuffle<A: Addrs>(addrs: Option<A>) -> Option<A> {
    shuffle_with(&ThreadRngPermuter, addrs)
}
