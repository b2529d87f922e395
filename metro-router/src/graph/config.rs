//! Graph construction configuration.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::NodeKey;

use super::error::BuildError;

/// Default lower bound for sampled same-line travel times (minutes).
pub const DEFAULT_MIN_MINUTES: u32 = 2;

/// Default upper bound for sampled same-line travel times (minutes).
pub const DEFAULT_MAX_MINUTES: u32 = 8;

/// Default transfer cost between lines at an interchange (minutes).
pub const DEFAULT_INTERCHANGE_MINUTES: u32 = 5;

/// How same-line edge travel times are chosen.
#[derive(Debug, Clone)]
pub enum WeightPolicy {
    /// Every same-line edge costs the same.
    Fixed(u32),

    /// Uniformly sampled from `min..=max` using a generator seeded with
    /// `seed`. Lines are visited in ascending line-code order and stations
    /// in ascending sequence order, so equal seeds give equal graphs.
    Seeded { min: u32, max: u32, seed: u64 },

    /// Externally supplied travel times.
    Table(WeightTable),
}

impl Default for WeightPolicy {
    fn default() -> Self {
        WeightPolicy::Seeded {
            min: DEFAULT_MIN_MINUTES,
            max: DEFAULT_MAX_MINUTES,
            seed: 0,
        }
    }
}

impl WeightPolicy {
    /// Check that every travel time this policy can produce is positive.
    pub fn validate(&self) -> Result<(), BuildError> {
        match self {
            WeightPolicy::Fixed(0) => Err(BuildError::ZeroMinutes("fixed same-line weight")),
            WeightPolicy::Fixed(_) => Ok(()),
            WeightPolicy::Seeded { min, max, .. } => {
                if *min == 0 {
                    Err(BuildError::ZeroMinutes("seeded minimum weight"))
                } else if min > max {
                    Err(BuildError::InvalidWeightRange {
                        min: *min,
                        max: *max,
                    })
                } else {
                    Ok(())
                }
            }
            WeightPolicy::Table(table) => table.validate(),
        }
    }

    /// Create a sampler that yields travel times in build order.
    pub(super) fn sampler(&self) -> WeightSampler<'_> {
        match self {
            WeightPolicy::Fixed(minutes) => WeightSampler::Fixed(*minutes),
            WeightPolicy::Seeded { min, max, seed } => WeightSampler::Seeded {
                rng: StdRng::seed_from_u64(*seed),
                min: *min,
                max: *max,
            },
            WeightPolicy::Table(table) => WeightSampler::Table(table),
        }
    }
}

/// Travel times keyed by unordered node pair.
///
/// Entries are symmetric: a time recorded for A→B also applies to B→A.
/// Pairs without an entry use the fallback.
#[derive(Debug, Clone)]
pub struct WeightTable {
    /// Stored in both directions for O(1) lookup.
    minutes: HashMap<(NodeKey, NodeKey), u32>,
    fallback: u32,
}

impl WeightTable {
    /// Create an empty table with the given fallback travel time.
    pub fn new(fallback: u32) -> Self {
        Self {
            minutes: HashMap::new(),
            fallback,
        }
    }

    /// Record the travel time between two nodes.
    pub fn insert(&mut self, a: NodeKey, b: NodeKey, minutes: u32) {
        self.minutes.insert((a.clone(), b.clone()), minutes);
        self.minutes.insert((b, a), minutes);
    }

    /// Builder-style variant of [`WeightTable::insert`].
    pub fn with(mut self, a: NodeKey, b: NodeKey, minutes: u32) -> Self {
        self.insert(a, b, minutes);
        self
    }

    /// Travel time between two nodes, or the fallback.
    pub fn get(&self, a: &NodeKey, b: &NodeKey) -> u32 {
        self.minutes
            .get(&(a.clone(), b.clone()))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Number of pairs (counting A→B and B→A as one).
    pub fn len(&self) -> usize {
        self.minutes.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.minutes.is_empty()
    }

    fn validate(&self) -> Result<(), BuildError> {
        if self.fallback == 0 {
            return Err(BuildError::ZeroMinutes("weight table fallback"));
        }
        if self.minutes.values().any(|m| *m == 0) {
            return Err(BuildError::ZeroMinutes("weight table entry"));
        }
        Ok(())
    }
}

/// Stateful weight source used while building one graph.
pub(super) enum WeightSampler<'a> {
    Fixed(u32),
    Seeded { rng: StdRng, min: u32, max: u32 },
    Table(&'a WeightTable),
}

impl WeightSampler<'_> {
    pub(super) fn next(&mut self, a: &NodeKey, b: &NodeKey) -> u32 {
        match self {
            WeightSampler::Fixed(minutes) => *minutes,
            WeightSampler::Seeded { rng, min, max } => rng.random_range(*min..=*max),
            WeightSampler::Table(table) => table.get(a, b),
        }
    }
}

/// Configuration for graph construction.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Policy for same-line travel times.
    pub weights: WeightPolicy,

    /// Transfer cost for every interchange edge (minutes).
    pub interchange_minutes: u32,
}

impl BuildConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(weights: WeightPolicy, interchange_minutes: u32) -> Self {
        Self {
            weights,
            interchange_minutes,
        }
    }

    /// Check that every edge the builder creates will have a positive weight.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.interchange_minutes == 0 {
            return Err(BuildError::ZeroMinutes("interchange cost"));
        }
        self.weights.validate()
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            weights: WeightPolicy::default(),
            interchange_minutes: DEFAULT_INTERCHANGE_MINUTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineCode;

    fn key(name: &str, line: &str) -> NodeKey {
        NodeKey::new(name, LineCode::parse(line).unwrap())
    }

    #[test]
    fn default_config() {
        let config = BuildConfig::default();

        assert_eq!(config.interchange_minutes, 5);
        assert!(matches!(
            config.weights,
            WeightPolicy::Seeded {
                min: 2,
                max: 8,
                seed: 0
            }
        ));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reject_zero_weights() {
        let config = BuildConfig::new(WeightPolicy::Fixed(0), 5);
        assert!(matches!(
            config.validate(),
            Err(BuildError::ZeroMinutes(_))
        ));

        let config = BuildConfig::new(WeightPolicy::Fixed(3), 0);
        assert!(matches!(
            config.validate(),
            Err(BuildError::ZeroMinutes("interchange cost"))
        ));

        let seeded = WeightPolicy::Seeded {
            min: 0,
            max: 4,
            seed: 1,
        };
        assert!(seeded.validate().is_err());
    }

    #[test]
    fn reject_inverted_range() {
        let seeded = WeightPolicy::Seeded {
            min: 9,
            max: 2,
            seed: 1,
        };
        assert!(matches!(
            seeded.validate(),
            Err(BuildError::InvalidWeightRange { min: 9, max: 2 })
        ));
    }

    #[test]
    fn seeded_sampler_is_reproducible_and_in_range() {
        let policy = WeightPolicy::Seeded {
            min: 2,
            max: 8,
            seed: 42,
        };
        let a = key("A", "EW");
        let b = key("B", "EW");

        let mut first = policy.sampler();
        let mut second = policy.sampler();
        for _ in 0..100 {
            let x = first.next(&a, &b);
            let y = second.next(&a, &b);
            assert_eq!(x, y);
            assert!((2..=8).contains(&x));
        }
    }

    #[test]
    fn table_is_symmetric_with_fallback() {
        let table = WeightTable::new(6).with(key("A", "EW"), key("B", "EW"), 4);

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&key("A", "EW"), &key("B", "EW")), 4);
        assert_eq!(table.get(&key("B", "EW"), &key("A", "EW")), 4);
        assert_eq!(table.get(&key("B", "EW"), &key("C", "EW")), 6);
    }

    #[test]
    fn table_rejects_zero_entries() {
        let table = WeightTable::new(6).with(key("A", "EW"), key("B", "EW"), 0);
        assert!(WeightPolicy::Table(table).validate().is_err());
        assert!(WeightPolicy::Table(WeightTable::new(0)).validate().is_err());
    }
}
