// Outcome of a time log command.
//
// Purpose
// - Tell apart "the store was asked to change something" from "nothing was sent, and why".
//
// Store failures are not outcomes: they travel as ApplicationError.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    EmptyLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The id is not in the current snapshot.
    StaleReference,
    NotRunning,
    NotPaused,
    AlreadyFinished,
    NotConfirmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum CommandOutcome {
    Applied,
    Rejected(RejectReason),
    Ignored(IgnoreReason),
}

impl CommandOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, CommandOutcome::Applied)
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptyLabel => f.write_str("empty label"),
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IgnoreReason::StaleReference => "stale reference",
            IgnoreReason::NotRunning => "not running",
            IgnoreReason::NotPaused => "not paused",
            IgnoreReason::AlreadyFinished => "already finished",
            IgnoreReason::NotConfirmed => "not confirmed",
        };
        f.write_str(text)
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutcome::Applied => f.write_str("applied"),
            CommandOutcome::Rejected(reason) => write!(f, "rejected: {reason}"),
            CommandOutcome::Ignored(reason) => write!(f, "ignored: {reason}"),
        }
    }
}
