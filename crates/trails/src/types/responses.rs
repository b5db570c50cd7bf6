//! Response body types for API endpoints.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    difficulty::{DifficultyBreakdown, terrain_factor, terrain_score},
    models::{DifficultyLevel, DifficultyOutput, TerrainType},
    time_estimate::EstimatedTime,
};

/// Estimated time split for display.
#[derive(Debug, Serialize, ToSchema)]
pub struct EstimatedTimeResponse {
    pub hours: u32,
    pub minutes: u32,
    /// e.g. "2 hrs 15 min" or "under 30 minutes"
    pub display: String,
}

impl From<EstimatedTime> for EstimatedTimeResponse {
    fn from(time: EstimatedTime) -> Self {
        Self {
            hours: time.hours,
            minutes: time.minutes,
            display: time.to_string(),
        }
    }
}

/// Result of a difficulty calculation.
#[derive(Debug, Serialize, ToSchema)]
pub struct DifficultyResponse {
    /// History entry recorded for this calculation.
    pub history_id: Uuid,
    pub level: DifficultyLevel,
    pub label: &'static str,
    pub description: &'static str,
    /// 1-10, computed independently of `level`.
    pub score: f64,
    pub estimated_hours: f64,
    pub estimated_time: EstimatedTimeResponse,
    pub breakdown: DifficultyBreakdown,
}

impl DifficultyResponse {
    pub fn new(history_id: Uuid, output: DifficultyOutput, breakdown: DifficultyBreakdown) -> Self {
        Self {
            history_id,
            level: output.level,
            label: output.level.label(),
            description: output.level.description(),
            score: output.numeric_score,
            estimated_hours: output.estimated_time_hours,
            estimated_time: EstimatedTime::from_hours(output.estimated_time_hours).into(),
            breakdown,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScoreResponse {
    pub score: f64,
}

/// A difficulty level as shown in legends and filters.
#[derive(Debug, Serialize, ToSchema)]
pub struct LevelInfo {
    pub level: DifficultyLevel,
    pub ordinal: u8,
    pub label: &'static str,
    pub description: &'static str,
}

impl From<DifficultyLevel> for LevelInfo {
    fn from(level: DifficultyLevel) -> Self {
        Self {
            level,
            ordinal: level.ordinal(),
            label: level.label(),
            description: level.description(),
        }
    }
}

/// A terrain type with both of its weightings.
#[derive(Debug, Serialize, ToSchema)]
pub struct TerrainInfo {
    pub terrain: TerrainType,
    pub description: &'static str,
    /// Multiplier used for the difficulty level.
    pub factor: f64,
    /// Contribution used for the 1-10 score.
    pub score_weight: f64,
}

impl From<TerrainType> for TerrainInfo {
    fn from(terrain: TerrainType) -> Self {
        Self {
            terrain,
            description: terrain.description(),
            factor: terrain_factor(terrain),
            score_weight: terrain_score(terrain),
        }
    }
}
