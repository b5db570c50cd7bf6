//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Base URL of a running trails service.
    pub base_url: String,

    /// Number of trails to save.
    pub trail_count: usize,

    /// Number of calculations to run, each of which lands in the history.
    pub history_count: usize,

    /// RNG seed so repeated runs produce the same trails.
    pub rng_seed: u64,

    /// Fraction of trails described in metric units.
    pub metric_fraction: f64,

    /// How hiker fitness is spread across generated trails.
    pub fitness: FitnessDistribution,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            trail_count: 25,
            history_count: 40,
            rng_seed: 12345,
            metric_fraction: 0.3,
            fitness: FitnessDistribution::default(),
        }
    }
}

/// Distribution for hiker fitness levels (1-5).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitnessDistribution {
    /// Every level equally likely.
    Uniform,
    /// Normal distribution over the 1-5 scale, rounded and clamped.
    Normal { mean: f64, std_dev: f64 },
    /// Always the same level.
    Fixed { level: u8 },
}

impl Default for FitnessDistribution {
    fn default() -> Self {
        Self::regular_hikers()
    }
}

impl FitnessDistribution {
    /// Most hikers around "Regular Hiker", with a few beginners and very fit.
    pub fn regular_hikers() -> Self {
        Self::Normal {
            mean: 3.0,
            std_dev: 1.0,
        }
    }
}
