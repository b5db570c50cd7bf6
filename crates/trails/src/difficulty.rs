//! Trail difficulty engine.
//!
//! Two independent ratings are derived from the same trail metrics:
//! - a discrete [`DifficultyLevel`] from climb rate, distance, terrain and
//!   hiker fitness ([`calculate_difficulty`])
//! - a continuous 1-10 score from elevation, distance and terrain alone
//!   ([`calculate_difficulty_score`])
//!
//! The two use different terrain weightings and are not reconciled: a trail
//! can rate "moderate" and still score 8/10.
//!
//! Everything here is a pure function of validated input.

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    models::{DifficultyInput, DifficultyLevel, DifficultyOutput, TerrainType, UnitSystem},
    time_estimate::estimate_time,
};

pub const FEET_PER_METER: f64 = 3.28084;
pub const MILES_PER_KILOMETER: f64 = 0.621371;

/// Points removed from the weighted score per fitness level above 3.
const FITNESS_STEP: f64 = 0.5;

/// Multiplier for the technical difficulty of the trail surface.
pub fn terrain_factor(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::Easy => 1.0,
        TerrainType::Moderate => 1.5,
        TerrainType::Difficult => 2.0,
        TerrainType::VeryDifficult => 3.0,
    }
}

/// Terrain contribution to the 1-10 score, on a 0-10 scale.
pub fn terrain_score(terrain: TerrainType) -> f64 {
    match terrain {
        TerrainType::Easy => 2.5,
        TerrainType::Moderate => 5.0,
        TerrainType::Difficult => 7.5,
        TerrainType::VeryDifficult => 10.0,
    }
}

/// Intermediate values of a discrete difficulty calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct DifficultyBreakdown {
    pub elevation_ft: f64,
    pub distance_mi: f64,
    /// Feet climbed per mile; zero for a zero-length trail.
    pub elevation_per_mile: f64,
    /// 1-5
    pub elevation_points: u8,
    /// 1-3
    pub distance_points: u8,
    pub raw_score: u8,
    pub terrain_factor: f64,
    pub weighted_score: f64,
    pub fitness_adjustment: f64,
    /// Never below 1.
    pub adjusted_score: f64,
    pub level: DifficultyLevel,
}

/// Runs the discrete difficulty calculation and keeps every step.
pub fn breakdown(input: &DifficultyInput) -> DifficultyBreakdown {
    let (elevation_ft, distance_mi) =
        to_imperial(input.elevation_gain(), input.distance(), input.units());

    let elevation_per_mile = if distance_mi > 0.0 {
        elevation_ft / distance_mi
    } else {
        0.0
    };

    let elevation_points = elevation_points(elevation_per_mile);
    let distance_points = distance_points(distance_mi);
    let raw_score = elevation_points + distance_points;

    let factor = terrain_factor(input.terrain());
    let weighted_score = f64::from(raw_score) * factor;

    let fitness_adjustment = (f64::from(input.fitness_level().value()) - 3.0) * FITNESS_STEP;
    let adjusted_score = (weighted_score - fitness_adjustment).max(1.0);

    DifficultyBreakdown {
        elevation_ft,
        distance_mi,
        elevation_per_mile,
        elevation_points,
        distance_points,
        raw_score,
        terrain_factor: factor,
        weighted_score,
        fitness_adjustment,
        adjusted_score,
        level: level_for_score(adjusted_score),
    }
}

/// Rates a trail on the five-step difficulty scale.
pub fn calculate_difficulty(input: &DifficultyInput) -> DifficultyLevel {
    breakdown(input).level
}

/// Normalized 1-10 difficulty score, computed in the caller's own units.
///
/// Inputs past the top of the unit system's scale are clamped rather than
/// rejected.
pub fn calculate_difficulty_score(
    elevation_gain: f64,
    distance: f64,
    terrain: TerrainType,
    units: UnitSystem,
) -> f64 {
    let elevation_score = elevation_gain / units.max_elevation() * 10.0;
    let distance_score = distance / units.max_distance() * 10.0;

    let weighted = elevation_score * 0.4 + distance_score * 0.3 + terrain_score(terrain) * 0.3;

    weighted.clamp(1.0, 10.0)
}

/// Level, score and time estimate for one trail.
pub fn evaluate(input: &DifficultyInput) -> DifficultyOutput {
    let level = calculate_difficulty(input);
    DifficultyOutput {
        level,
        numeric_score: calculate_difficulty_score(
            input.elevation_gain(),
            input.distance(),
            input.terrain(),
            input.units(),
        ),
        estimated_time_hours: estimate_time(
            level,
            input.elevation_gain(),
            input.distance(),
            input.units(),
            input.terrain(),
        ),
    }
}

fn to_imperial(elevation_gain: f64, distance: f64, units: UnitSystem) -> (f64, f64) {
    match units {
        UnitSystem::Imperial => (elevation_gain, distance),
        UnitSystem::Metric => (
            elevation_gain * FEET_PER_METER,
            distance * MILES_PER_KILOMETER,
        ),
    }
}

fn elevation_points(elevation_per_mile: f64) -> u8 {
    match elevation_per_mile {
        r if r < 300.0 => 1,
        r if r < 500.0 => 2,
        r if r < 700.0 => 3,
        r if r < 1000.0 => 4,
        _ => 5,
    }
}

fn distance_points(distance_mi: f64) -> u8 {
    match distance_mi {
        d if d < 3.0 => 1,
        d if d < 7.0 => 2,
        _ => 3,
    }
}

fn level_for_score(score: f64) -> DifficultyLevel {
    match score {
        s if s < 4.0 => DifficultyLevel::Easy,
        s if s < 7.0 => DifficultyLevel::Moderate,
        s if s < 10.0 => DifficultyLevel::Challenging,
        s if s < 14.0 => DifficultyLevel::Difficult,
        _ => DifficultyLevel::Extreme,
    }
}
