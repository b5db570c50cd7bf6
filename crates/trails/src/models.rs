use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::InputError;

/// Technical difficulty of the trail surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TerrainType {
    /// Well-maintained, even surface.
    Easy,
    /// Some obstacles, varied surface.
    Moderate,
    /// Rocky, steep sections, obstacles.
    Difficult,
    /// Scrambling, exposure, technical.
    VeryDifficult,
}

impl TerrainType {
    pub const ALL: [TerrainType; 4] = [
        TerrainType::Easy,
        TerrainType::Moderate,
        TerrainType::Difficult,
        TerrainType::VeryDifficult,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TerrainType::Easy => "easy",
            TerrainType::Moderate => "moderate",
            TerrainType::Difficult => "difficult",
            TerrainType::VeryDifficult => "very-difficult",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TerrainType::Easy => "Well-maintained, even surface",
            TerrainType::Moderate => "Some obstacles, varied surface",
            TerrainType::Difficult => "Rocky, steep sections, obstacles",
            TerrainType::VeryDifficult => "Scrambling, exposure, technical",
        }
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TerrainType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(TerrainType::Easy),
            "moderate" => Ok(TerrainType::Moderate),
            "difficult" => Ok(TerrainType::Difficult),
            "very-difficult" => Ok(TerrainType::VeryDifficult),
            other => Err(InputError::InvalidEnum {
                field: "terrain",
                value: other.to_string(),
            }),
        }
    }
}

/// Unit system of a trail's elevation gain and distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Feet and miles.
    Imperial,
    /// Meters and kilometers.
    Metric,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "imperial",
            UnitSystem::Metric => "metric",
        }
    }

    pub fn elevation_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "ft",
            UnitSystem::Metric => "m",
        }
    }

    pub fn distance_unit(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "mi",
            UnitSystem::Metric => "km",
        }
    }

    /// Upper end of the elevation gain scale, in this system's unit.
    ///
    /// Used to normalize the 1-10 difficulty score, not to validate input.
    pub fn max_elevation(&self) -> f64 {
        match self {
            UnitSystem::Imperial => 5000.0,
            UnitSystem::Metric => 1500.0,
        }
    }

    /// Upper end of the distance scale, in this system's unit.
    pub fn max_distance(&self) -> f64 {
        match self {
            UnitSystem::Imperial => 20.0,
            UnitSystem::Metric => 30.0,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnitSystem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "imperial" => Ok(UnitSystem::Imperial),
            "metric" => Ok(UnitSystem::Metric),
            other => Err(InputError::InvalidEnum {
                field: "units",
                value: other.to_string(),
            }),
        }
    }
}

/// Hiker fitness on a 1 (beginner) to 5 (very fit) scale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct FitnessLevel(u8);

impl FitnessLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// The level at which no fitness adjustment is applied.
    pub const BASELINE: FitnessLevel = FitnessLevel(3);

    pub fn new(level: u8) -> Result<Self, InputError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(InputError::OutOfRange {
                field: "fitness_level",
                reason: format!("must be between 1 and 5, got {level}"),
            })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Beginner",
            2 => "Occasional Hiker",
            3 => "Regular Hiker",
            4 => "Experienced",
            _ => "Very Fit",
        }
    }
}

impl Default for FitnessLevel {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl TryFrom<u8> for FitnessLevel {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FitnessLevel> for u8 {
    fn from(level: FitnessLevel) -> Self {
        level.0
    }
}

/// Qualitative trail difficulty, ordered by increasing severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Easy,
    Moderate,
    Challenging,
    Difficult,
    Extreme,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 5] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Moderate,
        DifficultyLevel::Challenging,
        DifficultyLevel::Difficult,
        DifficultyLevel::Extreme,
    ];

    /// Zero-based position in the severity order.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "easy",
            DifficultyLevel::Moderate => "moderate",
            DifficultyLevel::Challenging => "challenging",
            DifficultyLevel::Difficult => "difficult",
            DifficultyLevel::Extreme => "extreme",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Moderate => "Moderate",
            DifficultyLevel::Challenging => "Challenging",
            DifficultyLevel::Difficult => "Difficult",
            DifficultyLevel::Extreme => "Extreme",
        }
    }

    /// Who the trail suits and what to expect on it.
    pub fn description(&self) -> &'static str {
        match self {
            DifficultyLevel::Easy => {
                "Suitable for beginners with minimal hiking experience. Mostly flat with gentle slopes."
            }
            DifficultyLevel::Moderate => {
                "Suitable for occasional hikers with some experience. Moderate slopes and some elevation gain."
            }
            DifficultyLevel::Challenging => {
                "Suitable for regular hikers with good fitness. Significant elevation gain and longer distances."
            }
            DifficultyLevel::Difficult => {
                "Suitable for experienced hikers with excellent fitness. Steep sections, challenging terrain."
            }
            DifficultyLevel::Extreme => {
                "Suitable only for very experienced hikers with exceptional fitness. Very steep, technical sections."
            }
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DifficultyLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| InputError::InvalidEnum {
                field: "difficulty",
                value: s.to_string(),
            })
    }
}

/// Validated trail metrics for a single difficulty calculation.
///
/// Elevation gain is in feet or meters and distance in miles or kilometers,
/// depending on `units`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyInput {
    elevation_gain: f64,
    distance: f64,
    terrain: TerrainType,
    units: UnitSystem,
    fitness_level: FitnessLevel,
}

impl DifficultyInput {
    /// Builds an input, rejecting negative or non-finite measurements.
    ///
    /// A missing fitness level means the baseline (3).
    pub fn new(
        elevation_gain: f64,
        distance: f64,
        terrain: TerrainType,
        units: UnitSystem,
        fitness_level: Option<FitnessLevel>,
    ) -> Result<Self, InputError> {
        check_measurement("elevation_gain", elevation_gain)?;
        check_measurement("distance", distance)?;
        Ok(Self {
            elevation_gain,
            distance,
            terrain,
            units,
            fitness_level: fitness_level.unwrap_or_default(),
        })
    }

    pub fn elevation_gain(&self) -> f64 {
        self.elevation_gain
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn terrain(&self) -> TerrainType {
        self.terrain
    }

    pub fn units(&self) -> UnitSystem {
        self.units
    }

    pub fn fitness_level(&self) -> FitnessLevel {
        self.fitness_level
    }
}

fn check_measurement(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::OutOfRange {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(InputError::OutOfRange {
            field,
            reason: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

/// Everything the engine derives for one trail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct DifficultyOutput {
    pub level: DifficultyLevel,
    /// Independent 1-10 score; not guaranteed to agree with `level`.
    pub numeric_score: f64,
    pub estimated_time_hours: f64,
}

/// A trail record as kept by the saved-trails list and calculation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Trail {
    pub id: Uuid,
    pub name: String,
    pub elevation_gain: f64,
    pub distance: f64,
    pub terrain: TerrainType,
    pub units: UnitSystem,
    pub fitness_level: FitnessLevel,
    pub difficulty: DifficultyLevel,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl Trail {
    /// Creates a new record for `input` rated at `difficulty`, stamped now.
    pub fn new(name: String, input: &DifficultyInput, difficulty: DifficultyLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            elevation_gain: input.elevation_gain(),
            distance: input.distance(),
            terrain: input.terrain(),
            units: input.units(),
            fitness_level: input.fitness_level(),
            difficulty,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// Rebuilds the engine input this record was rated from.
    pub fn input(&self) -> Result<DifficultyInput, InputError> {
        DifficultyInput::new(
            self.elevation_gain,
            self.distance,
            self.terrain,
            self.units,
            Some(self.fitness_level),
        )
    }
}
