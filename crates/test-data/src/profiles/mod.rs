//! Hiker fitness profiles.
//!
//! Profiles describe the kind of trail a hiker at a given fitness level tends
//! to log. Trail generators use them to produce plausible distance and climb.

mod hiker;

pub use hiker::HikerProfile;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use trails::models::FitnessLevel;

use crate::config::FitnessDistribution;

/// Samples a fitness level from the given distribution.
pub fn sample_fitness(distribution: &FitnessDistribution, rng: &mut impl Rng) -> FitnessLevel {
    let level = match *distribution {
        FitnessDistribution::Uniform => rng.gen_range(FitnessLevel::MIN..=FitnessLevel::MAX),
        FitnessDistribution::Normal { mean, std_dev } => {
            let sample = Normal::new(mean, std_dev)
                .map(|normal| normal.sample(rng))
                .unwrap_or(mean);
            sample
                .round()
                .clamp(FitnessLevel::MIN as f64, FitnessLevel::MAX as f64) as u8
        }
        FitnessDistribution::Fixed { level } => {
            level.clamp(FitnessLevel::MIN, FitnessLevel::MAX)
        }
    };

    FitnessLevel::new(level).unwrap_or_default()
}
