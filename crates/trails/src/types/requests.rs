//! Request body types for API endpoints.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    errors::AppError,
    models::{DifficultyInput, FitnessLevel, TerrainType, UnitSystem},
};

/// Trail metrics as submitted by a client.
///
/// Terrain and units arrive as plain strings so unknown values are reported
/// with the field name instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct DifficultyRequest {
    /// Feet (imperial) or meters (metric).
    #[validate(range(min = 0.0))]
    pub elevation_gain: f64,
    /// Miles (imperial) or kilometers (metric).
    #[validate(range(min = 0.0))]
    pub distance: f64,
    /// One of easy, moderate, difficult, very-difficult.
    #[schema(example = "moderate")]
    pub terrain: String,
    /// imperial or metric.
    #[schema(example = "imperial")]
    pub units: String,
    /// 1 (beginner) to 5 (very fit); 3 when omitted.
    #[validate(range(min = 1, max = 5))]
    #[serde(default)]
    pub fitness_level: Option<u8>,
}

impl DifficultyRequest {
    pub fn to_input(&self) -> Result<DifficultyInput, AppError> {
        self.validate()?;
        let terrain: TerrainType = self.terrain.parse()?;
        let units: UnitSystem = self.units.parse()?;
        let fitness = self.fitness_level.map(FitnessLevel::new).transpose()?;
        Ok(DifficultyInput::new(
            self.elevation_gain,
            self.distance,
            terrain,
            units,
            fitness,
        )?)
    }
}

/// Inputs of the standalone 1-10 score.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ScoreRequest {
    #[validate(range(min = 0.0))]
    pub elevation_gain: f64,
    #[validate(range(min = 0.0))]
    pub distance: f64,
    pub terrain: String,
    pub units: String,
}

impl ScoreRequest {
    pub fn parse(&self) -> Result<(f64, f64, TerrainType, UnitSystem), AppError> {
        self.validate()?;
        Ok((
            self.elevation_gain,
            self.distance,
            self.terrain.parse()?,
            self.units.parse()?,
        ))
    }
}

/// A named trail to add to the saved list.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct SaveTrailRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub metrics: DifficultyRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InputError;

    fn request(terrain: &str, units: &str, fitness: Option<u8>) -> DifficultyRequest {
        DifficultyRequest {
            elevation_gain: 500.0,
            distance: 5.0,
            terrain: terrain.to_string(),
            units: units.to_string(),
            fitness_level: fitness,
        }
    }

    #[test]
    fn test_valid_request() {
        let input = request("very-difficult", "metric", Some(4)).to_input().unwrap();
        assert_eq!(input.terrain(), TerrainType::VeryDifficult);
        assert_eq!(input.units(), UnitSystem::Metric);
        assert_eq!(input.fitness_level().value(), 4);
    }

    #[test]
    fn test_unknown_terrain() {
        let err = request("swamp", "imperial", None).to_input().unwrap_err();
        assert!(matches!(
            err,
            AppError::Input(InputError::InvalidEnum {
                field: "terrain",
                ..
            })
        ));
    }

    #[test]
    fn test_fitness_out_of_range() {
        let err = request("easy", "imperial", Some(9)).to_input().unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_negative_distance() {
        let mut req = request("easy", "imperial", None);
        req.distance = -3.0;
        assert!(matches!(req.to_input(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_save_request_flattens_metrics() {
        let req: SaveTrailRequest = serde_json::from_str(
            r#"{"name":"Royal Arch","elevation_gain":1400,"distance":3.4,"terrain":"difficult","units":"imperial"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Royal Arch");
        assert_eq!(req.metrics.fitness_level, None);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_save_request_requires_name() {
        let req: SaveTrailRequest = serde_json::from_str(
            r#"{"name":"","elevation_gain":1400,"distance":3.4,"terrain":"difficult","units":"imperial"}"#,
        )
        .unwrap();
        assert!(req.validate().is_err());
    }
}
