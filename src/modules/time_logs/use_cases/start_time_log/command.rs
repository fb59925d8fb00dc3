// Command data type for starting a timed task.
//
// The label is carried as typed; the decider checks it, the store keeps it verbatim.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTimeLog {
    pub label: String,
    pub start_at: DateTime<Utc>,
}
