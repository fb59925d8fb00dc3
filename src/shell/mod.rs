// Composition root for the time_logs bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the record store and the time tracker, mount its subscription.
// - Serve HTTP and GraphQL, spawn the elapsed ticker.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod workers;

use crate::modules::time_logs::adapters::outbound::time_log_repository::TimeLogRepository;
use crate::modules::time_logs::application::time_tracker::TimeTracker;
use crate::shared::core::clock::SystemClock;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::config::Config;
use crate::shell::state::AppState;
use std::sync::Arc;

pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let store = Arc::new(InMemoryRecordStore::new());
    let tracker = Arc::new(TimeTracker::new(
        TimeLogRepository::new(config.table.clone(), store),
        Arc::new(SystemClock),
        config.elapsed_baseline,
    ));
    tracker.mount().await?;
    tracing::info!(baseline = %tracker.baseline(), "elapsed baseline");
    Ok(AppState { tracker })
}
