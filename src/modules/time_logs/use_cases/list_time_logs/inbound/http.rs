use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListTimeLogsParams {
    /// Re-read the store before answering instead of serving the cached snapshot.
    pub refresh: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListTimeLogsParams>,
) -> impl IntoResponse {
    if params.refresh.unwrap_or(false) && state.tracker.refresh().await.is_err() {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(state.tracker.views().await).into_response()
}
