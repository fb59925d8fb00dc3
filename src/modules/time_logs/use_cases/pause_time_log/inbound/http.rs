use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

use crate::modules::time_logs::adapters::inbound::http::outcome_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    outcome_response(state.tracker.pause(&id).await)
}
