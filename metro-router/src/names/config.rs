//! Name resolver configuration.

use super::similarity::SimilarityMetric;

/// Configuration for station name suggestions.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Metric used to score candidates.
    pub metric: SimilarityMetric,

    /// Candidates scoring below this are never suggested.
    pub cutoff: f64,

    /// Default number of suggestions offered after a failed lookup.
    pub max_suggestions: usize,
}

impl ResolverConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(metric: SimilarityMetric, cutoff: f64, max_suggestions: usize) -> Self {
        Self {
            metric,
            cutoff,
            max_suggestions,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            metric: SimilarityMetric::SequenceRatio,
            cutoff: 0.6,
            max_suggestions: 3,
        }
    }
}
