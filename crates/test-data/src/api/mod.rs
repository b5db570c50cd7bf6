//! API-based seeding for trails and calculation history.
//!
//! Everything goes through the HTTP API so difficulty is computed by the
//! service itself, exactly as it would be for a real user.

use reqwest::{Client, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use trails::models::DifficultyLevel;

use crate::generators::GeneratedTrail;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Request rejected: {0}")]
    Rejected(String),
    #[error("Backend not reachable at {0}")]
    BackendNotReachable(String),
}

/// The parts of a saved trail the seeder cares about.
#[derive(Debug, Deserialize)]
pub struct SavedTrail {
    pub id: Uuid,
    pub difficulty: DifficultyLevel,
}

/// The parts of a difficulty calculation the seeder cares about.
#[derive(Debug, Deserialize)]
pub struct Calculation {
    pub history_id: Uuid,
    pub level: DifficultyLevel,
    pub score: f64,
}

/// Totals from a seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub succeeded: usize,
    pub failed: usize,
    /// Responses whose level differed from the locally computed one.
    pub mismatched: usize,
}

/// API seeder that talks to a running trails service.
pub struct ApiSeeder {
    client: Client,
    base_url: String,
}

impl ApiSeeder {
    /// Creates a new API seeder for the given backend URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Checks if the backend is reachable.
    pub async fn check_health(&self) -> Result<(), ApiError> {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => Ok(()),
            Ok(resp) => Err(ApiError::BackendNotReachable(format!(
                "Health check returned status {}",
                resp.status()
            ))),
            Err(e) => Err(ApiError::BackendNotReachable(e.to_string())),
        }
    }

    /// Saves a trail via `POST /trails`.
    pub async fn save_trail(&self, trail: &GeneratedTrail) -> Result<SavedTrail, ApiError> {
        let url = format!("{}/trails", self.base_url);
        let resp = self.client.post(&url).json(trail).send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    /// Runs a calculation via `POST /difficulty`, which records it in the history.
    pub async fn calculate(&self, trail: &GeneratedTrail) -> Result<Calculation, ApiError> {
        let url = format!("{}/difficulty", self.base_url);
        let resp = self.client.post(&url).json(trail).send().await?;
        Ok(ensure_success(resp).await?.json().await?)
    }

    /// Saves every trail, carrying on past individual failures.
    pub async fn seed_trails(&self, trails: &[GeneratedTrail]) -> SeedSummary {
        let mut summary = SeedSummary::default();

        for trail in trails {
            match self.save_trail(trail).await {
                Ok(saved) => {
                    debug!("Saved trail {}: {} ({})", trail.name, saved.id, saved.difficulty);
                    summary.succeeded += 1;
                    if !level_matches(trail, saved.difficulty) {
                        summary.mismatched += 1;
                    }
                }
                Err(e) => {
                    warn!("Failed to save trail {}: {}", trail.name, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }

    /// Runs a calculation for every trail, carrying on past individual failures.
    pub async fn seed_history(&self, trails: &[GeneratedTrail]) -> SeedSummary {
        let mut summary = SeedSummary::default();

        for trail in trails {
            match self.calculate(trail).await {
                Ok(calc) => {
                    debug!(
                        "Calculated {}: {} score {:.1} (history {})",
                        trail.name, calc.level, calc.score, calc.history_id
                    );
                    summary.succeeded += 1;
                    if !level_matches(trail, calc.level) {
                        summary.mismatched += 1;
                    }
                }
                Err(e) => {
                    warn!("Failed to calculate {}: {}", trail.name, e);
                    summary.failed += 1;
                }
            }
        }

        summary
    }
}

async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Rejected(format!("Status {status}: {body}")))
}

fn level_matches(trail: &GeneratedTrail, reported: DifficultyLevel) -> bool {
    match trail.expected_difficulty() {
        Ok(expected) if expected == reported => true,
        Ok(expected) => {
            warn!(
                "Service rated {} as {reported}, expected {expected}",
                trail.name
            );
            false
        }
        Err(e) => {
            warn!("Generated trail {} is not a valid input: {e}", trail.name);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trails::models::{FitnessLevel, TerrainType, UnitSystem};

    fn moderate() -> GeneratedTrail {
        GeneratedTrail {
            name: "Nash Canyon Loop".to_string(),
            elevation_gain: 500.0,
            distance: 5.0,
            terrain: TerrainType::Moderate,
            units: UnitSystem::Imperial,
            fitness_level: FitnessLevel::default(),
        }
    }

    #[test]
    fn test_api_seeder_creation() {
        let seeder = ApiSeeder::new("http://localhost:3001/");
        assert_eq!(seeder.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_level_matches() {
        assert!(level_matches(&moderate(), DifficultyLevel::Moderate));
        assert!(!level_matches(&moderate(), DifficultyLevel::Extreme));
    }

    #[test]
    fn test_calculation_response_parses() {
        let json = r#"{
            "history_id": "6f1c1e9e-4a53-4c1f-9d51-0a4f8f1f7a10",
            "level": "moderate",
            "label": "Moderate",
            "score": 2.65,
            "estimated_hours": 2.875
        }"#;
        let calc: Calculation = serde_json::from_str(json).unwrap();
        assert_eq!(calc.level, DifficultyLevel::Moderate);
        assert!((calc.score - 2.65).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_unreachable_backend() {
        let seeder = ApiSeeder::new("http://127.0.0.1:1");
        assert!(matches!(
            seeder.check_health().await,
            Err(ApiError::BackendNotReachable(_))
        ));
    }
}
