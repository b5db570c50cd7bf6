//! Test data generation for the trail difficulty service.
//!
//! This crate generates plausible trails for hikers of varying fitness and
//! pushes them through a running service, to support manual verification and
//! integration testing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let generator = TrailGenerator::with_config(TrailGenConfig {
//!     fitness: FitnessDistribution::Uniform,
//!     ..TrailGenConfig::default()
//! });
//! let trails = generator.generate_batch(20, &mut rng);
//!
//! let seeder = ApiSeeder::new("http://localhost:3001");
//! seeder.check_health().await?;
//! let summary = seeder.seed_trails(&trails).await;
//! ```

pub mod api;
pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from trails crate
pub use trails::models::{DifficultyLevel, FitnessLevel, TerrainType, UnitSystem};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::api::{ApiError, ApiSeeder, SeedSummary};
    pub use crate::config::{FitnessDistribution, SeedConfig};
    pub use crate::generators::{GeneratedTrail, TrailGenConfig, TrailGenerator};
    pub use crate::profiles::{HikerProfile, sample_fitness};
    pub use crate::{DifficultyLevel, FitnessLevel, TerrainType, UnitSystem};
}
