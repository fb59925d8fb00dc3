use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeTimeLog {
    pub id: String,
    pub at: DateTime<Utc>,
}
