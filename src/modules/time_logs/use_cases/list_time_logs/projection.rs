// Read model for listing time logs.
//
// Purpose
// - Everything a client renders for one log: derived status and elapsed time at a given instant.
//
// Boundaries
// - Built from the cached snapshot only. Building views never touches the store.

use crate::modules::time_logs::core::elapsed::{ElapsedBaseline, elapsed_seconds};
use crate::modules::time_logs::core::format::format_elapsed;
use crate::modules::time_logs::core::state::{LogStatus, Pause, TimeLog};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeLogView {
    pub id: String,
    pub label: String,
    pub start_at: DateTime<Utc>,
    pub end_at: Option<DateTime<Utc>>,
    pub pauses: Vec<Pause>,
    pub status: LogStatus,
    pub elapsed_seconds: i64,
    pub elapsed_display: String,
}

impl TimeLogView {
    pub fn project(log: &TimeLog, now: DateTime<Utc>, baseline: ElapsedBaseline) -> Self {
        let seconds = elapsed_seconds(log, now, baseline);
        Self {
            id: log.id.clone(),
            label: log.label.clone(),
            start_at: log.start_at,
            end_at: log.end_at,
            pauses: log.pauses.clone(),
            status: log.status(),
            elapsed_seconds: seconds,
            elapsed_display: format_elapsed(seconds),
        }
    }
}

pub fn project_all(logs: &[TimeLog], now: DateTime<Utc>, baseline: ElapsedBaseline) -> Vec<TimeLogView> {
    logs.iter()
        .map(|log| TimeLogView::project(log, now, baseline))
        .collect()
}
