use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_logs::adapters::inbound::http::outcome_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RemoveTimeLogParams {
    pub confirm: Option<bool>,
}

/// `confirm=true` is the client's answer to its own "delete?" prompt. Without it nothing is sent.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RemoveTimeLogParams>,
) -> impl IntoResponse {
    let confirmed = params.confirm.unwrap_or(false);
    outcome_response(state.tracker.remove(&id, &move |_: &str| confirmed).await)
}
