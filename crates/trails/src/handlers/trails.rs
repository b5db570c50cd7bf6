//! Saved trail and calculation history handlers.
//!
//! Both lists share the same shape; the history routes only differ in the
//! collection they touch and in not accepting direct inserts.

use axum::{
    Extension,
    extract::{Path, Query},
    http::StatusCode,
    response::Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::{
    difficulty::calculate_difficulty,
    errors::{AppError, InputError},
    models::Trail,
    store::{SharedStore, TrailCollection},
    types::SaveTrailRequest,
};

use super::pagination::{PaginatedResponse, PaginationQuery};

/// List saved trails, newest first.
#[utoipa::path(
    get,
    path = "/trails",
    tag = "trails",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Saved trails", body = PaginatedResponse<Trail>)
    )
)]
pub async fn list_trails(
    Extension(store): Extension<SharedStore>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<Trail>>, AppError> {
    list(&store, TrailCollection::Saved, &query).await
}

/// Save a trail. Its difficulty is always computed here.
#[utoipa::path(
    post,
    path = "/trails",
    tag = "trails",
    request_body = SaveTrailRequest,
    responses(
        (status = 201, description = "Trail saved", body = Trail),
        (status = 400, description = "Invalid trail")
    )
)]
pub async fn create_trail(
    Extension(store): Extension<SharedStore>,
    Json(request): Json<SaveTrailRequest>,
) -> Result<(StatusCode, Json<Trail>), AppError> {
    request.validate()?;
    let name = request.name.trim();
    if name.is_empty() {
        return Err(InputError::OutOfRange {
            field: "name",
            reason: "must not be blank".to_string(),
        }
        .into());
    }
    let input = request.metrics.to_input()?;
    let difficulty = calculate_difficulty(&input);
    let trail = Trail::new(name.to_string(), &input, difficulty);

    store.insert(TrailCollection::Saved, trail.clone()).await?;
    info!(
        "Saved trail {} ({}) as {}",
        trail.id, trail.name, trail.difficulty
    );

    Ok((StatusCode::CREATED, Json(trail)))
}

/// Get a saved trail.
#[utoipa::path(
    get,
    path = "/trails/{id}",
    tag = "trails",
    params(("id" = Uuid, Path, description = "Trail ID")),
    responses(
        (status = 200, description = "Saved trail", body = Trail),
        (status = 404, description = "Trail not found")
    )
)]
pub async fn get_trail(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trail>, AppError> {
    Ok(Json(store.get(TrailCollection::Saved, id).await?))
}

/// Delete a saved trail, returning it so it can be restored.
#[utoipa::path(
    delete,
    path = "/trails/{id}",
    tag = "trails",
    params(("id" = Uuid, Path, description = "Trail ID")),
    responses(
        (status = 200, description = "Deleted trail", body = Trail),
        (status = 404, description = "Trail not found")
    )
)]
pub async fn delete_trail(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trail>, AppError> {
    Ok(Json(store.delete(TrailCollection::Saved, id).await?))
}

/// Undo a saved trail deletion.
#[utoipa::path(
    post,
    path = "/trails/restore",
    tag = "trails",
    request_body = Trail,
    responses(
        (status = 201, description = "Trail restored", body = Trail),
        (status = 400, description = "Invalid trail"),
        (status = 409, description = "Trail already present")
    )
)]
pub async fn restore_trail(
    Extension(store): Extension<SharedStore>,
    Json(trail): Json<Trail>,
) -> Result<(StatusCode, Json<Trail>), AppError> {
    restore(&store, TrailCollection::Saved, trail).await
}

/// List past calculations, newest first.
#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    params(PaginationQuery),
    responses(
        (status = 200, description = "Calculation history", body = PaginatedResponse<Trail>)
    )
)]
pub async fn list_history(
    Extension(store): Extension<SharedStore>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<PaginatedResponse<Trail>>, AppError> {
    list(&store, TrailCollection::History, &query).await
}

/// Remove a calculation from the history.
#[utoipa::path(
    delete,
    path = "/history/{id}",
    tag = "history",
    params(("id" = Uuid, Path, description = "History entry ID")),
    responses(
        (status = 200, description = "Removed entry", body = Trail),
        (status = 404, description = "Entry not found")
    )
)]
pub async fn delete_history_entry(
    Extension(store): Extension<SharedStore>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trail>, AppError> {
    Ok(Json(store.delete(TrailCollection::History, id).await?))
}

/// Undo a history removal.
#[utoipa::path(
    post,
    path = "/history/restore",
    tag = "history",
    request_body = Trail,
    responses(
        (status = 201, description = "Entry restored", body = Trail),
        (status = 400, description = "Invalid entry"),
        (status = 409, description = "Entry already present, or older than every kept entry")
    )
)]
pub async fn restore_history_entry(
    Extension(store): Extension<SharedStore>,
    Json(trail): Json<Trail>,
) -> Result<(StatusCode, Json<Trail>), AppError> {
    restore(&store, TrailCollection::History, trail).await
}

async fn list(
    store: &SharedStore,
    collection: TrailCollection,
    query: &PaginationQuery,
) -> Result<Json<PaginatedResponse<Trail>>, AppError> {
    let page = store
        .list(collection, query.effective_limit(), query.offset)
        .await;
    Ok(Json(PaginatedResponse::from_page(page, query)))
}

/// Recomputes the trail's difficulty before putting it back.
async fn restore(
    store: &SharedStore,
    collection: TrailCollection,
    mut trail: Trail,
) -> Result<(StatusCode, Json<Trail>), AppError> {
    trail.difficulty = calculate_difficulty(&trail.input()?);
    store.restore(collection, trail.clone()).await?;
    Ok((StatusCode::CREATED, Json(trail)))
}
