//! Difficulty calculation handlers.

use axum::{Extension, response::Json};
use tracing::info;

use crate::{
    difficulty::{breakdown, calculate_difficulty_score, evaluate},
    errors::AppError,
    models::{DifficultyInput, DifficultyLevel, TerrainType, Trail},
    store::{SharedStore, TrailCollection},
    types::{
        DifficultyRequest, DifficultyResponse, LevelInfo, ScoreRequest, ScoreResponse, TerrainInfo,
    },
};

/// Calculate difficulty, score and time estimate for a trail.
///
/// Each calculation is recorded in the history.
#[utoipa::path(
    post,
    path = "/difficulty",
    tag = "difficulty",
    request_body = DifficultyRequest,
    responses(
        (status = 200, description = "Difficulty calculated", body = DifficultyResponse),
        (status = 400, description = "Invalid trail metrics")
    )
)]
pub async fn estimate_difficulty(
    Extension(store): Extension<SharedStore>,
    Json(request): Json<DifficultyRequest>,
) -> Result<Json<DifficultyResponse>, AppError> {
    let input = request.to_input()?;
    let steps = breakdown(&input);
    let output = evaluate(&input);

    let entry = Trail::new(history_name(&input), &input, output.level);
    let history_id = entry.id;
    store.insert(TrailCollection::History, entry).await?;

    info!(
        "Rated {} {} / {} {} on {} terrain as {} (score {:.1})",
        input.elevation_gain(),
        input.units().elevation_unit(),
        input.distance(),
        input.units().distance_unit(),
        input.terrain(),
        output.level,
        output.numeric_score,
    );

    Ok(Json(DifficultyResponse::new(history_id, output, steps)))
}

/// Calculate only the 1-10 difficulty score.
#[utoipa::path(
    post,
    path = "/difficulty/score",
    tag = "difficulty",
    request_body = ScoreRequest,
    responses(
        (status = 200, description = "Score calculated", body = ScoreResponse),
        (status = 400, description = "Invalid trail metrics")
    )
)]
pub async fn score_difficulty(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let (elevation_gain, distance, terrain, units) = request.parse()?;
    let score = calculate_difficulty_score(elevation_gain, distance, terrain, units);
    Ok(Json(ScoreResponse { score }))
}

/// List the difficulty levels from easiest to hardest.
#[utoipa::path(
    get,
    path = "/difficulty/levels",
    tag = "difficulty",
    responses(
        (status = 200, description = "Difficulty levels", body = Vec<LevelInfo>)
    )
)]
pub async fn list_levels() -> Json<Vec<LevelInfo>> {
    Json(DifficultyLevel::ALL.into_iter().map(LevelInfo::from).collect())
}

/// List terrain types with their weightings.
#[utoipa::path(
    get,
    path = "/terrains",
    tag = "difficulty",
    responses(
        (status = 200, description = "Terrain types", body = Vec<TerrainInfo>)
    )
)]
pub async fn list_terrains() -> Json<Vec<TerrainInfo>> {
    Json(TerrainType::ALL.into_iter().map(TerrainInfo::from).collect())
}

fn history_name(input: &DifficultyInput) -> String {
    format!(
        "{} {} {} trail",
        input.distance(),
        input.units().distance_unit(),
        input.terrain()
    )
}
