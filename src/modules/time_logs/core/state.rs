// TimeLog is the domain value rehydrated from a `time_logs` row.
//
// Lifecycle
// - Running: no end_at, no open pause.
// - Paused: no end_at, an open pause (only ever the last interval).
// - Finished: end_at set. Terminal.
//
// The status is derived from the fields on every read, never stored.
//
// Boundaries
// - This file must not perform input or output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pause {
    pub from: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

impl Pause {
    pub fn open(from: DateTime<Utc>) -> Self {
        Self { from, to: None }
    }

    pub fn closed(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to: Some(to) }
    }

    pub fn is_open(&self) -> bool {
        self.to.is_none()
    }

    /// An open interval extends to `now`.
    pub fn duration_ms(&self, now: DateTime<Utc>) -> i64 {
        (self.to.unwrap_or(now) - self.from).num_milliseconds()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Running,
    Paused,
    Finished,
}

impl LogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogStatus::Running => "running",
            LogStatus::Paused => "paused",
            LogStatus::Finished => "finished",
        }
    }
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLog {
    pub id: String,
    pub label: String,
    pub start_at: DateTime<Utc>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pauses: Vec<Pause>,
    pub updated_at: DateTime<Utc>,
}

impl TimeLog {
    pub fn status(&self) -> LogStatus {
        if self.end_at.is_some() {
            LogStatus::Finished
        } else if self.pauses.iter().any(Pause::is_open) {
            LogStatus::Paused
        } else {
            LogStatus::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.status() == LogStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status() == LogStatus::Paused
    }

    pub fn is_finished(&self) -> bool {
        self.status() == LogStatus::Finished
    }

    pub fn last_pause(&self) -> Option<&Pause> {
        self.pauses.last()
    }

    /// True when no interval but the last one is open, and at most one is.
    pub fn has_well_formed_pauses(&self) -> bool {
        let open: Vec<usize> = self
            .pauses
            .iter()
            .enumerate()
            .filter(|(_, pause)| pause.is_open())
            .map(|(index, _)| index)
            .collect();
        match open.as_slice() {
            [] => true,
            [index] => *index + 1 == self.pauses.len(),
            _ => false,
        }
    }
}
