pub mod config;
pub mod difficulty;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod request_id;
pub mod store;
pub mod time_estimate;
pub mod types;

use std::net::SocketAddr;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    response::Json,
    routing::{delete, get, post},
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;

use crate::{
    config::ServerConfig,
    handlers::{
        create_trail, delete_history_entry, delete_trail, estimate_difficulty, get_trail,
        health_check, list_history, list_levels, list_terrains, list_trails,
        restore_history_entry, restore_trail, score_difficulty,
    },
    request_id::request_id_middleware,
    store::{InMemoryTrailStore, SharedStore},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trail Difficulty API",
        description = "Hiking trail difficulty ratings, saved trails and calculation history"
    ),
    paths(
        handlers::health_check,
        handlers::estimate_difficulty,
        handlers::score_difficulty,
        handlers::list_levels,
        handlers::list_terrains,
        handlers::list_trails,
        handlers::create_trail,
        handlers::get_trail,
        handlers::delete_trail,
        handlers::restore_trail,
        handlers::list_history,
        handlers::delete_history_entry,
        handlers::restore_history_entry,
    ),
    tags(
        (name = "difficulty", description = "Difficulty calculation"),
        (name = "trails", description = "Saved trails"),
        (name = "history", description = "Calculation history"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/openapi.json", get(openapi_json))
        // Difficulty routes
        .route("/difficulty", post(estimate_difficulty))
        .route("/difficulty/score", post(score_difficulty))
        .route("/difficulty/levels", get(list_levels))
        .route("/terrains", get(list_terrains))
        // Saved trail routes
        .route("/trails", get(list_trails).post(create_trail))
        .route("/trails/restore", post(restore_trail))
        .route("/trails/{id}", get(get_trail).delete(delete_trail))
        // History routes
        .route("/history", get(list_history))
        .route("/history/restore", post(restore_history_entry))
        .route("/history/{id}", delete(delete_history_entry))
        .layer(Extension(store))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let store = InMemoryTrailStore::shared(config.history_limit);
    let app = create_router(store);

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "Server running on http://{addr} (history limit {})",
        config.history_limit
    );

    axum::serve(listener, app).await?;

    Ok(())
}
