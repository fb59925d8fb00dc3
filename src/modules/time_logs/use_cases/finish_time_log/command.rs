use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishTimeLog {
    pub id: String,
    pub at: DateTime<Utc>,
}
