//! Named filter policies for configuration.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::addrs::Addrs;

use super::{
    AddrsFilter, FilterChain, MaxAddrs, Permuter, Shuffle, all, default_filter, first, first_each,
    first_ipv4, first_ipv6, ipv4, ipv6, reverse,
};

/// Error returned when a filter name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecParseError {
    /// The name does not match any known filter.
    #[error(
        "Unknown filter '{0}': expected default, all, first, first-each, first-ipv4, \
         first-ipv6, ipv4, ipv6, max:<N>, reverse, or shuffle"
    )]
    Unknown(String),

    /// The `max:<N>` limit is missing, malformed, or zero.
    #[error("Invalid limit in '{value}': {reason}")]
    InvalidMax {
        /// The rejected filter string
        value: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// A filter identified by name.
///
/// Names are case-insensitive; `_` and `-` are interchangeable. The capped
/// filter takes its limit after a colon: `max:3`.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use addr_pick::addrs::TcpAddrs;
/// use addr_pick::filter::{AddrsFilter, FilterSpec, Permuter, ThreadRngPermuter};
///
/// let specs: Vec<FilterSpec> = ["ipv6", "max:1"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// let permuter: Arc<dyn Permuter> = Arc::new(ThreadRngPermuter);
/// let chain = FilterSpec::chain::<TcpAddrs>(&specs, &permuter);
///
/// let addrs = TcpAddrs::parse(["192.0.2.1:80", "[2001:db8::1]:80", "[2001:db8::2]:80"]).unwrap();
/// assert_eq!(chain.apply(Some(addrs)).unwrap().to_strings(), vec!["[2001:db8::1]:80"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FilterSpec {
    /// [`default_filter`]
    Default,
    /// [`all`]
    All,
    /// [`first`]
    First,
    /// [`first_each`]
    FirstEach,
    /// [`first_ipv4`]
    FirstIpv4,
    /// [`first_ipv6`]
    FirstIpv6,
    /// [`ipv4`]
    Ipv4,
    /// [`ipv6`]
    Ipv6,
    /// [`MaxAddrs`] with the given limit
    Max(usize),
    /// [`reverse`]
    Reverse,
    /// [`Shuffle`]
    Shuffle,
}

impl FilterSpec {
    /// Returns true if the filter draws on a [`Permuter`].
    #[must_use]
    pub const fn is_random(self) -> bool {
        matches!(self, Self::Shuffle)
    }

    /// Builds the filter this spec names.
    ///
    /// `permuter` is shared by every random filter built from it.
    #[must_use]
    pub fn build<A: Addrs + 'static>(
        self,
        permuter: &Arc<dyn Permuter>,
    ) -> Box<dyn AddrsFilter<A>> {
        match self {
            Self::Default => Box::new(default_filter::<A>),
            Self::All => Box::new(all::<A>),
            Self::First => Box::new(first::<A>),
            Self::FirstEach => Box::new(first_each::<A>),
            Self::FirstIpv4 => Box::new(first_ipv4::<A>),
            Self::FirstIpv6 => Box::new(first_ipv6::<A>),
            Self::Ipv4 => Box::new(ipv4::<A>),
            Self::Ipv6 => Box::new(ipv6::<A>),
            Self::Max(max) => Box::new(MaxAddrs::new(max)),
            Self::Reverse => Box::new(reverse::<A>),
            Self::Shuffle => Box::new(Shuffle::with_permuter(Arc::clone(permuter))),
        }
    }

    /// Builds a chain applying `specs` in order.
    #[must_use]
    pub fn chain<A: Addrs + 'static>(
        specs: &[Self],
        permuter: &Arc<dyn Permuter>,
    ) -> FilterChain<A> {
        specs.iter().map(|spec| spec.build(permuter)).collect()
    }
}

impl fmt::Display for FilterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::All => f.write_str("all"),
            Self::First => f.write_str("first"),
            Self::FirstEach => f.write_str("first-each"),
            Self::FirstIpv4 => f.write_str("first-ipv4"),
            Self::FirstIpv6 => f.write_str("first-ipv6"),
            Self::Ipv4 => f.write_str("ipv4"),
            Self::Ipv6 => f.write_str("ipv6"),
            Self::Max(max) => write!(f, "max:{max}"),
            Self::Reverse => f.write_str("reverse"),
            Self::Shuffle => f.write_str("shuffle"),
        }
    }
}

impl FromStr for FilterSpec {
    type Err = SpecParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");

        if let Some(limit) = normalized.strip_prefix("max") {
            return parse_max(s, limit);
        }

        match normalized.as_str() {
            "default" => Ok(Self::Default),
            "all" => Ok(Self::All),
            "first" => Ok(Self::First),
            "first-each" => Ok(Self::FirstEach),
            "first-ipv4" => Ok(Self::FirstIpv4),
            "first-ipv6" => Ok(Self::FirstIpv6),
            "ipv4" => Ok(Self::Ipv4),
            "ipv6" => Ok(Self::Ipv6),
            "reverse" => Ok(Self::Reverse),
            "shuffle" => Ok(Self::Shuffle),
            _ => Err(SpecParseError::Unknown(s.to_string())),
        }
    }
}

fn parse_max(original: &str, rest: &str) -> Result<FilterSpec, SpecParseError> {
    let invalid = |reason: String| SpecParseError::InvalidMax {
        value: original.to_string(),
        reason,
    };

    let limit = rest
        .strip_prefix(':')
        .map(str::trim)
        .ok_or_else(|| invalid("expected 'max:<N>'".to_string()))?;

    let max = limit
        .parse::<usize>()
        .map_err(|e| invalid(format!("'{limit}' is not a count: {e}")))?;

    if max == 0 {
        return Err(invalid("must be greater than 0".to_string()));
    }

    Ok(FilterSpec::Max(max))
}

impl TryFrom<String> for FilterSpec {
    type Error = SpecParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FilterSpec> for String {
    fn from(spec: FilterSpec) -> Self {
        spec.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addrs::{Addrs, TcpAddrs};
    use crate::filter::SeededPermuter;

    fn permuter() -> Arc<dyn Permuter> {
        Arc::new(SeededPermuter::new(5))
    }

    fn addrs() -> TcpAddrs {
        TcpAddrs::parse([
            "192.0.2.1:80",
            "[2001:db8::1]:80",
            "192.0.2.2:80",
            "[2001:db8::2]:80",
        ])
        .unwrap()
    }

    mod parsing {
        use super::*;

        #[test]
        fn parses_every_name() {
            let cases = [
                ("default", FilterSpec::Default),
                ("all", FilterSpec::All),
                ("first", FilterSpec::First),
                ("first-each", FilterSpec::FirstEach),
                ("first-ipv4", FilterSpec::FirstIpv4),
                ("first-ipv6", FilterSpec::FirstIpv6),
                ("ipv4", FilterSpec::Ipv4),
                ("ipv6", FilterSpec::Ipv6),
                ("max:3", FilterSpec::Max(3)),
                ("reverse", FilterSpec::Reverse),
                ("shuffle", FilterSpec::Shuffle),
            ];
            for (name, expected) in cases {
                assert_eq!(name.parse::<FilterSpec>(), Ok(expected), "{name}");
            }
        }

        #[test]
        fn is_case_and_separator_insensitive() {
            assert_eq!("First_Each".parse::<FilterSpec>(), Ok(FilterSpec::FirstEach));
            assert_eq!("  SHUFFLE ".parse::<FilterSpec>(), Ok(FilterSpec::Shuffle));
            assert_eq!("MAX: 4".parse::<FilterSpec>(), Ok(FilterSpec::Max(4)));
        }

        #[test]
        fn display_round_trips() {
            for spec in [
                FilterSpec::Default,
                FilterSpec::FirstEach,
                FilterSpec::FirstIpv6,
                FilterSpec::Max(12),
                FilterSpec::Shuffle,
            ] {
                assert_eq!(spec.to_string().parse::<FilterSpec>(), Ok(spec));
            }
        }

        #[test]
        fn rejects_unknown_name() {
            let err = "closest".parse::<FilterSpec>().unwrap_err();
            assert_eq!(err, SpecParseError::Unknown("closest".to_string()));
            assert!(err.to_string().contains("first-each"));
        }

        #[test]
        fn rejects_max_without_limit() {
            assert!(matches!(
                "max".parse::<FilterSpec>(),
                Err(SpecParseError::InvalidMax { .. })
            ));
        }

        #[test]
        fn rejects_non_numeric_limit() {
            let err = "max:lots".parse::<FilterSpec>().unwrap_err();
            assert!(err.to_string().contains("'lots' is not a count"));
        }

        #[test]
        fn rejects_zero_limit() {
            let err = "max:0".parse::<FilterSpec>().unwrap_err();
            assert!(err.to_string().contains("must be greater than 0"));
        }

        #[test]
        fn only_shuffle_is_random() {
            assert!(FilterSpec::Shuffle.is_random());
            assert!(!FilterSpec::Max(2).is_random());
        }
    }

    mod serde_support {
        use super::*;

        #[derive(Debug, Deserialize)]
        struct Policy {
            policy: Vec<FilterSpec>,
        }

        #[test]
        fn deserializes_from_strings() {
            let policy: Policy = toml::from_str(r#"policy = ["shuffle", "max:2"]"#).unwrap();
            assert_eq!(policy.policy, vec![FilterSpec::Shuffle, FilterSpec::Max(2)]);
        }

        #[test]
        fn rejects_unknown_names() {
            assert!(toml::from_str::<Policy>(r#"policy = ["nearest"]"#).is_err());
        }

        #[test]
        fn serializes_to_canonical_name() {
            let specs = vec![FilterSpec::FirstEach, FilterSpec::Max(3)];
            let json = serde_json::to_string(&specs).unwrap();
            assert_eq!(json, r#"["first-each","max:3"]"#);
        }
    }

    mod building {
        use super::*;

        #[test]
        fn built_filters_match_direct_calls() {
            let permuter = permuter();
            let cases: [(FilterSpec, fn(Option<TcpAddrs>) -> Option<TcpAddrs>); 9] = [
                (FilterSpec::Default, default_filter),
                (FilterSpec::All, all),
                (FilterSpec::First, first),
                (FilterSpec::FirstEach, first_each),
                (FilterSpec::FirstIpv4, first_ipv4),
                (FilterSpec::FirstIpv6, first_ipv6),
                (FilterSpec::Ipv4, ipv4),
                (FilterSpec::Ipv6, ipv6),
                (FilterSpec::Reverse, reverse),
            ];
            for (spec, direct) in cases {
                let built = spec.build::<TcpAddrs>(&permuter);
                assert_eq!(built.apply(Some(addrs())), direct(Some(addrs())), "{spec}");
            }
        }

        #[test]
        fn max_builds_capped_filter() {
            let built = FilterSpec::Max(2).build::<TcpAddrs>(&permuter());
            let picked = built.apply(Some(addrs())).unwrap();
            assert_eq!(picked.to_strings(), vec!["192.0.2.1:80", "[2001:db8::1]:80"]);
        }

        #[test]
        fn shuffle_uses_the_shared_permuter() {
            let a = FilterSpec::Shuffle.build::<TcpAddrs>(&permuter());
            let b = FilterSpec::Shuffle.build::<TcpAddrs>(&permuter());
            assert_eq!(a.apply(Some(addrs())), b.apply(Some(addrs())));
        }

        #[test]
        fn chain_applies_specs_in_order() {
            let specs = [FilterSpec::Ipv4, FilterSpec::Reverse, FilterSpec::First];
            let chain = FilterSpec::chain::<TcpAddrs>(&specs, &permuter());

            assert_eq!(chain.len(), 3);
            let picked = chain.apply(Some(addrs())).unwrap();
            assert_eq!(picked.len(), 1);
            assert_eq!(picked.addr(0), "192.0.2.2:80");
        }
    }
}
