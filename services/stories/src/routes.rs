//! Stories service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{get, patch, post},
};
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    models::{CreateStoryRequest, CreateUserRequest, ToggleQuery},
    state::AppState,
    validation,
};

/// Create the router for the stories service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/stories/user", post(create_user))
        .route("/api/stories", post(create_story))
        .route("/api/stories/:story_id/toggle", patch(toggle_story_completion))
        .route("/api/stories/user/:user_id/year/:year", get(get_user_stories_by_year))
        .route(
            "/api/stories/user/:user_id/year/:year/stats",
            get(get_user_year_stats),
        )
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = common::database::health_check(&state.db_pool).await.is_ok();

    Json(json!({
        "status": if database { "ok" } else { "degraded" },
        "service": "stories-service",
        "database": database,
    }))
}

/// Create a new user, returning the generated id
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_email(&payload.email).map_err(ApiError::Validation)?;
    validation::validate_display_name(&payload.display_name).map_err(ApiError::Validation)?;

    let user_id = state.procedures.create_user(&payload).await.map_err(|e| {
        tracing::error!("Failed to create user: {}", e);
        e
    })?;

    Ok(Json(user_id))
}

/// Create a new story, returning the generated id
pub async fn create_story(
    State(state): State<AppState>,
    Json(payload): Json<CreateStoryRequest>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_title(&payload.title).map_err(ApiError::Validation)?;
    validation::validate_year(payload.year).map_err(ApiError::Validation)?;
    validation::validate_priority(payload.priority).map_err(ApiError::Validation)?;
    if let Some(hours) = payload.estimated_hours {
        validation::validate_hours(hours).map_err(ApiError::Validation)?;
    }

    let story_id = state.procedures.create_story(&payload).await.map_err(|e| {
        tracing::error!("Failed to create story: {}", e);
        e
    })?;

    Ok(Json(story_id))
}

/// Flip a story's completion state, returning the state after the toggle
pub async fn toggle_story_completion(
    State(state): State<AppState>,
    Path(story_id): Path<i32>,
    Query(query): Query<ToggleQuery>,
) -> ApiResult<impl IntoResponse> {
    let is_completed = state
        .procedures
        .toggle_story_completion(story_id, query.user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to toggle story {}: {}", story_id, e);
            e
        })?;

    Ok(Json(is_completed))
}

/// List a user's stories for one year (possibly empty)
pub async fn get_user_stories_by_year(
    State(state): State<AppState>,
    Path((user_id, year)): Path<(Uuid, i32)>,
) -> ApiResult<impl IntoResponse> {
    let stories = state
        .procedures
        .get_user_stories_by_year(user_id, year)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list stories for user {}: {}", user_id, e);
            e
        })?;

    Ok(Json(stories))
}

/// Aggregate statistics for a user's year (zero-valued when empty)
pub async fn get_user_year_stats(
    State(state): State<AppState>,
    Path((user_id, year)): Path<(Uuid, i32)>,
) -> ApiResult<impl IntoResponse> {
    let stats = state
        .procedures
        .get_user_year_stats(user_id, year)
        .await
        .map_err(|e| {
            tracing::error!("Failed to compute stats for user {}: {}", user_id, e);
            e
        })?;

    Ok(Json(stats))
}
