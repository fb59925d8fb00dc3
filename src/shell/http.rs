use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::time_logs::use_cases::finish_time_log::inbound::http as finish_http;
use crate::modules::time_logs::use_cases::list_time_logs::inbound::http as list_http;
use crate::modules::time_logs::use_cases::pause_time_log::inbound::http as pause_http;
use crate::modules::time_logs::use_cases::remove_time_log::inbound::http as remove_http;
use crate::modules::time_logs::use_cases::resume_time_log::inbound::http as resume_http;
use crate::modules::time_logs::use_cases::start_time_log::inbound::http as start_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/time-logs", get(list_http::handle).post(start_http::handle))
        .route("/time-logs/{id}", delete(remove_http::handle))
        .route("/time-logs/{id}/pause", post(pause_http::handle))
        .route("/time-logs/{id}/resume", post(resume_http::handle))
        .route("/time-logs/{id}/finish", post(finish_http::handle))
        .merge(graphql::router(state.clone()))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
