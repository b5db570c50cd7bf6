//! Hiker profile per fitness level.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use trails::models::FitnessLevel;

/// What a hiker at one fitness level typically takes on.
///
/// Based loosely on recreational hiking habits:
/// - Beginners stick to ~3 mile outings with gentle climbs
/// - Very fit hikers average ~10 miles and 650 ft of gain per mile
#[derive(Debug, Clone)]
pub struct HikerProfile {
    fitness: FitnessLevel,
    /// Typical outing length in miles.
    typical_distance_mi: f64,
    /// Typical elevation gain per mile in feet, on moderate terrain.
    climb_ft_per_mi: f64,
    /// Day-to-day variance (coefficient of variation).
    variance: f64,
}

impl Default for HikerProfile {
    fn default() -> Self {
        Self::for_fitness(FitnessLevel::default())
    }
}

impl HikerProfile {
    pub fn for_fitness(fitness: FitnessLevel) -> Self {
        let (typical_distance_mi, climb_ft_per_mi, variance) = match fitness.value() {
            1 => (3.0, 150.0, 0.20),
            2 => (4.5, 250.0, 0.18),
            3 => (6.0, 350.0, 0.15),
            4 => (8.0, 500.0, 0.15),
            _ => (10.0, 650.0, 0.12),
        };
        Self {
            fitness,
            typical_distance_mi,
            climb_ft_per_mi,
            variance,
        }
    }

    pub fn fitness(&self) -> FitnessLevel {
        self.fitness
    }

    pub fn typical_distance_mi(&self) -> f64 {
        self.typical_distance_mi
    }

    pub fn climb_ft_per_mi(&self) -> f64 {
        self.climb_ft_per_mi
    }

    /// Samples a multiplier around 1.0 from this profile's variance.
    pub fn sample_variance(&self, rng: &mut impl Rng) -> f64 {
        if self.variance <= 0.0 {
            return 1.0;
        }
        Normal::new(1.0, self.variance)
            .map(|normal| normal.sample(rng))
            .unwrap_or(1.0)
            .clamp(0.6, 1.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn profile(level: u8) -> HikerProfile {
        HikerProfile::for_fitness(FitnessLevel::new(level).unwrap())
    }

    #[test]
    fn test_default_profile_is_regular_hiker() {
        let profile = HikerProfile::default();
        assert_eq!(profile.fitness().label(), "Regular Hiker");
        assert!((profile.typical_distance_mi() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fitter_hikers_go_further_and_higher() {
        for level in 1..5 {
            let (less, more) = (profile(level), profile(level + 1));
            assert!(more.typical_distance_mi() > less.typical_distance_mi());
            assert!(more.climb_ft_per_mi() > less.climb_ft_per_mi());
        }
    }

    #[test]
    fn test_variance_is_bounded() {
        let profile = profile(1);
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            let factor = profile.sample_variance(&mut rng);
            assert!((0.6..=1.5).contains(&factor));
        }
    }
}
