use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PauseTimeLog {
    pub id: String,
    pub at: DateTime<Utc>,
}
