//! Trail generation.

use fake::{Fake, faker::name::en::LastName};
use rand::Rng;
use serde::Serialize;

use trails::{
    difficulty::{FEET_PER_METER, MILES_PER_KILOMETER, calculate_difficulty},
    errors::InputError,
    models::{DifficultyInput, DifficultyLevel, FitnessLevel, TerrainType, UnitSystem},
};

use crate::{
    config::FitnessDistribution,
    profiles::{HikerProfile, sample_fitness},
};

/// Generated trail, shaped like the body `POST /trails` accepts.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTrail {
    pub name: String,
    pub elevation_gain: f64,
    pub distance: f64,
    pub terrain: TerrainType,
    pub units: UnitSystem,
    pub fitness_level: FitnessLevel,
}

impl GeneratedTrail {
    pub fn input(&self) -> Result<DifficultyInput, InputError> {
        DifficultyInput::new(
            self.elevation_gain,
            self.distance,
            self.terrain,
            self.units,
            Some(self.fitness_level),
        )
    }

    /// The level the service should report for this trail.
    pub fn expected_difficulty(&self) -> Result<DifficultyLevel, InputError> {
        Ok(calculate_difficulty(&self.input()?))
    }
}

/// Configuration for trail generation.
#[derive(Debug, Clone)]
pub struct TrailGenConfig {
    /// Probability a trail is described in metric units.
    pub metric_fraction: f64,
    /// Fitness of the hiker logging each trail.
    pub fitness: FitnessDistribution,
    /// Relative frequency of easy, moderate, difficult and very difficult terrain.
    pub terrain_weights: [f64; 4],
}

impl Default for TrailGenConfig {
    fn default() -> Self {
        Self {
            metric_fraction: 0.3,
            fitness: FitnessDistribution::default(),
            terrain_weights: [0.3, 0.4, 0.2, 0.1],
        }
    }
}

/// Generates realistic trails for testing.
pub struct TrailGenerator {
    config: TrailGenConfig,
}

impl TrailGenerator {
    /// Creates a new trail generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: TrailGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: TrailGenConfig) -> Self {
        Self { config }
    }

    /// Generates a single trail.
    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedTrail {
        let fitness_level = sample_fitness(&self.config.fitness, rng);
        let profile = HikerProfile::for_fitness(fitness_level);
        let terrain = self.generate_terrain(rng);

        let distance_mi = (profile.typical_distance_mi() * profile.sample_variance(rng))
            .clamp(0.5, UnitSystem::Imperial.max_distance());
        let climb_ft_per_mi =
            profile.climb_ft_per_mi() * climb_multiplier(terrain) * profile.sample_variance(rng);
        let elevation_ft =
            (climb_ft_per_mi * distance_mi).min(UnitSystem::Imperial.max_elevation());

        let units = if rng.r#gen::<f64>() < self.config.metric_fraction {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        };

        let (elevation_gain, distance) = match units {
            UnitSystem::Imperial => (round_to(elevation_ft, 10.0), round_to(distance_mi, 0.1)),
            UnitSystem::Metric => (
                round_to(elevation_ft / FEET_PER_METER, 5.0).min(units.max_elevation()),
                round_to(distance_mi / MILES_PER_KILOMETER, 0.1).min(units.max_distance()),
            ),
        };

        GeneratedTrail {
            name: trail_name(terrain, rng),
            elevation_gain,
            distance,
            terrain,
            units,
            fitness_level,
        }
    }

    /// Generates multiple trails.
    pub fn generate_batch(&self, count: usize, rng: &mut impl Rng) -> Vec<GeneratedTrail> {
        (0..count).map(|_| self.generate(rng)).collect()
    }

    /// Picks a terrain type based on configured weights.
    fn generate_terrain(&self, rng: &mut impl Rng) -> TerrainType {
        let total: f64 = self.config.terrain_weights.iter().sum();
        let roll = rng.r#gen::<f64>() * total;
        let mut cumulative = 0.0;

        for (terrain, &weight) in TerrainType::ALL.iter().zip(&self.config.terrain_weights) {
            cumulative += weight;
            if roll < cumulative {
                return *terrain;
            }
        }

        TerrainType::Moderate
    }
}

impl Default for TrailGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Rougher terrain tends to come with steeper climbs.
fn climb_multiplier(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::Easy => 0.5,
        TerrainType::Moderate => 1.0,
        TerrainType::Difficult => 1.5,
        TerrainType::VeryDifficult => 2.2,
    }
}

fn trail_name(terrain: TerrainType, rng: &mut impl Rng) -> String {
    let features: &[&str] = match terrain {
        TerrainType::Easy => &["Meadow", "Lake", "Creek", "River"],
        TerrainType::Moderate => &["Canyon", "Falls", "Forest", "Valley"],
        TerrainType::Difficult => &["Ridge", "Summit", "Pass", "Notch"],
        TerrainType::VeryDifficult => &["Peak", "Couloir", "Spire", "Crags"],
    };
    let kinds = ["Trail", "Loop", "Path", "Route"];

    let surname: String = LastName().fake_with_rng(rng);
    let feature = features[rng.gen_range(0..features.len())];
    let kind = kinds[rng.gen_range(0..kinds.len())];

    format!("{surname} {feature} {kind}")
}

fn round_to(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}
