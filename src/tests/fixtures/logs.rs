// Shared test fixtures for time logs.
//
// t0 is 2023-11-14T22:13:20Z. Scenario times are expressed as offsets in seconds from it.

use crate::modules::time_logs::core::state::{Pause, TimeLog};
use chrono::{DateTime, Duration, Utc};

pub fn t0() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).expect("valid fixture timestamp")
}

pub fn at(seconds: i64) -> DateTime<Utc> {
    t0() + Duration::seconds(seconds)
}

pub struct TimeLogBuilder {
    inner: TimeLog,
}

impl Default for TimeLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeLogBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeLog {
                id: "log-fixed-0001".to_string(),
                label: "write report".to_string(),
                start_at: t0(),
                end_at: None,
                pauses: Vec::new(),
                updated_at: t0(),
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn label(mut self, v: impl Into<String>) -> Self {
        self.inner.label = v.into();
        self
    }

    pub fn start_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.start_at = v;
        self
    }

    pub fn end_at(mut self, v: DateTime<Utc>) -> Self {
        self.inner.end_at = Some(v);
        self
    }

    pub fn pause(mut self, v: Pause) -> Self {
        self.inner.pauses.push(v);
        self
    }

    pub fn pauses(mut self, v: Vec<Pause>) -> Self {
        self.inner.pauses = v;
        self
    }

    pub fn build(self) -> TimeLog {
        self.inner
    }
}

#[cfg(test)]
mod time_log_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = TimeLogBuilder::default().build();
        assert_eq!(built.id, "log-fixed-0001");
        assert_eq!(built.label, "write report");
        assert_eq!(built.start_at, t0());
        assert!(built.end_at.is_none());
        assert!(built.pauses.is_empty());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = TimeLogBuilder::new()
            .id("log-123")
            .label("review")
            .start_at(at(10))
            .end_at(at(20))
            .pauses(vec![Pause::closed(at(12), at(14))])
            .build();
        assert_eq!(built.id, "log-123");
        assert_eq!(built.label, "review");
        assert_eq!(built.start_at, at(10));
        assert_eq!(built.end_at, Some(at(20)));
        assert_eq!(built.pauses, vec![Pause::closed(at(12), at(14))]);
    }
}
