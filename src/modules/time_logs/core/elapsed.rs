// Elapsed-time engine.
//
// elapsed = baseline - sum(pause durations), floored to whole seconds toward negative infinity.
// An open pause extends to `now`. The result is never clamped: inconsistent concurrent writes
// can yield negative values and callers display them as-is.
//
// Baselines
// - ZeroWhenFinished: a finished log starts from 0, so it reports minus its total pause time.
//   This is the behavior existing clients observe and the default.
// - EndAt: a finished log starts from end_at - start_at.
//
// Boundaries
// - Pure. Safe to call on every display tick.

use crate::modules::time_logs::core::state::TimeLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElapsedBaseline {
    #[default]
    ZeroWhenFinished,
    EndAt,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown elapsed baseline '{0}', expected 'zero-when-finished' or 'end-at'")]
pub struct ParseElapsedBaselineError(pub String);

impl FromStr for ElapsedBaseline {
    type Err = ParseElapsedBaselineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero-when-finished" => Ok(ElapsedBaseline::ZeroWhenFinished),
            "end-at" => Ok(ElapsedBaseline::EndAt),
            other => Err(ParseElapsedBaselineError(other.to_string())),
        }
    }
}

impl fmt::Display for ElapsedBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElapsedBaseline::ZeroWhenFinished => f.write_str("zero-when-finished"),
            ElapsedBaseline::EndAt => f.write_str("end-at"),
        }
    }
}

pub fn elapsed_ms(log: &TimeLog, now: DateTime<Utc>, baseline: ElapsedBaseline) -> i64 {
    let total = match (log.end_at, baseline) {
        (None, _) => (now - log.start_at).num_milliseconds(),
        (Some(_), ElapsedBaseline::ZeroWhenFinished) => 0,
        (Some(end_at), ElapsedBaseline::EndAt) => (end_at - log.start_at).num_milliseconds(),
    };
    log.pauses
        .iter()
        .fold(total, |total, pause| total - pause.duration_ms(now))
}

pub fn elapsed_seconds(log: &TimeLog, now: DateTime<Utc>, baseline: ElapsedBaseline) -> i64 {
    elapsed_ms(log, now, baseline).div_euclid(1000)
}
