//! Rough hiking time from the difficulty level, distance and climb.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    difficulty::terrain_factor,
    models::{DifficultyLevel, TerrainType, UnitSystem},
};

/// Walking pace for a difficulty level, in miles or kilometers per hour.
pub fn speed_factor(level: DifficultyLevel, units: UnitSystem) -> f64 {
    match (level, units) {
        (DifficultyLevel::Easy, UnitSystem::Imperial) => 2.5,
        (DifficultyLevel::Easy, UnitSystem::Metric) => 4.0,
        (DifficultyLevel::Moderate, UnitSystem::Imperial) => 2.0,
        (DifficultyLevel::Moderate, UnitSystem::Metric) => 3.2,
        (DifficultyLevel::Challenging, UnitSystem::Imperial) => 1.5,
        (DifficultyLevel::Challenging, UnitSystem::Metric) => 2.4,
        (DifficultyLevel::Difficult, UnitSystem::Imperial) => 1.0,
        (DifficultyLevel::Difficult, UnitSystem::Metric) => 1.6,
        (DifficultyLevel::Extreme, UnitSystem::Imperial) => 0.75,
        (DifficultyLevel::Extreme, UnitSystem::Metric) => 1.2,
    }
}

/// Climb that adds one elevation unit to the estimate (1000 ft or 300 m).
fn climb_unit(units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Imperial => 1000.0,
        UnitSystem::Metric => 300.0,
    }
}

/// Estimated hours on the trail.
///
/// Moving time at the level's pace plus half an hour per climb unit, scaled
/// by the terrain factor.
pub fn estimate_time(
    level: DifficultyLevel,
    elevation_gain: f64,
    distance: f64,
    units: UnitSystem,
    terrain: TerrainType,
) -> f64 {
    let elevation_factor = elevation_gain / climb_unit(units);
    distance / speed_factor(level, units) + elevation_factor * 0.5 * terrain_factor(terrain)
}

/// An hours estimate split for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct EstimatedTime {
    pub hours: u32,
    /// 0-59
    pub minutes: u32,
}

impl EstimatedTime {
    pub fn from_hours(total_hours: f64) -> Self {
        let total_hours = total_hours.max(0.0);
        let mut hours = total_hours.floor() as u32;
        let mut minutes = ((total_hours - total_hours.floor()) * 60.0).round() as u32;
        if minutes == 60 {
            hours += 1;
            minutes = 0;
        }
        Self { hours, minutes }
    }

    pub fn is_under_half_hour(&self) -> bool {
        self.hours == 0 && self.minutes < 30
    }
}

impl fmt::Display for EstimatedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_under_half_hour() {
            return f.write_str("under 30 minutes");
        }

        let mut parts = Vec::with_capacity(2);
        if self.hours > 0 {
            let suffix = if self.hours == 1 { "hr" } else { "hrs" };
            parts.push(format!("{} {suffix}", self.hours));
        }
        if self.minutes > 0 {
            parts.push(format!("{} min", self.minutes));
        }
        f.write_str(&parts.join(" "))
    }
}
