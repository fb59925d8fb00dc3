use crate::modules::time_logs::application::errors::ApplicationError;
use crate::modules::time_logs::core::outcome::CommandOutcome;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Ignored commands are not client errors: the request was understood, nothing needed sending.
pub fn outcome_response(result: Result<CommandOutcome, ApplicationError>) -> Response {
    match result {
        Ok(outcome @ CommandOutcome::Rejected(_)) => {
            (StatusCode::BAD_REQUEST, Json(outcome)).into_response()
        }
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
