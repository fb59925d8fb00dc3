use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::time_logs::adapters::inbound::http::outcome_response;
use crate::modules::time_logs::core::outcome::CommandOutcome;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct StartTimeLogBody {
    pub label: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<StartTimeLogBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.tracker.start(&body.label).await {
        Ok(CommandOutcome::Applied) => {
            (StatusCode::CREATED, Json(CommandOutcome::Applied)).into_response()
        }
        other => outcome_response(other),
    }
}
