// Store writes decided by the time log deciders.
//
// Each variant maps to exactly one record store call. `pauses` always carries the full sequence:
// the store replaces the column wholesale, so concurrent writers resolve last-write-wins.

use crate::modules::time_logs::core::state::Pause;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogChange {
    Create {
        label: String,
        start_at: DateTime<Utc>,
    },
    ReplacePauses {
        id: String,
        pauses: Vec<Pause>,
    },
    Finish {
        id: String,
        pauses: Vec<Pause>,
        end_at: DateTime<Utc>,
    },
    Delete {
        id: String,
    },
}

impl LogChange {
    pub fn kind(&self) -> &'static str {
        match self {
            LogChange::Create { .. } => "create",
            LogChange::ReplacePauses { .. } => "replace_pauses",
            LogChange::Finish { .. } => "finish",
            LogChange::Delete { .. } => "delete",
        }
    }
}
