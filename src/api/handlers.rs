use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{LookupQuery, LookupResult, PreferenceSelection};

use super::AppState;

/// Response carrying the model's completion, passed through unmodified
#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub text: String,
}

/// Serves the single-page UI
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Generates movie recommendations from the submitted preferences
///
/// Fail-loud: a provider failure becomes an error response for this
/// interaction, the client retries manually.
pub async fn recommend(
    State(state): State<AppState>,
    Json(selection): Json<PreferenceSelection>,
) -> AppResult<Json<RecommendResponse>> {
    selection.validate()?;
    let text = state.recommender.recommend(&selection).await?;
    Ok(Json(RecommendResponse { text }))
}

/// Looks up movie info from both external sources
///
/// Rejects blank titles before any outbound call; source failures are
/// absorbed into an empty result, never an error response.
pub async fn search(
    State(state): State<AppState>,
    Json(query): Json<LookupQuery>,
) -> AppResult<Json<LookupResult>> {
    let title = query
        .normalized()
        .ok_or_else(|| AppError::InvalidInput("Please enter a movie name.".to_string()))?;

    let result = state.movie_info.search(title).await;
    Ok(Json(result))
}
