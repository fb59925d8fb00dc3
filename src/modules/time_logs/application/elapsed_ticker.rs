// Periodic elapsed-time recomputation for display.
//
// Each tick projects the cached snapshot at the clock's current instant, but only while some log
// is running: paused and finished logs do not change between ticks. Ticks never reach the record
// store.

use crate::modules::time_logs::application::time_tracker::TimeTracker;
use crate::modules::time_logs::use_cases::list_time_logs::projection::TimeLogView;
use crate::shared::infrastructure::record_store::RecordStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Interval, MissedTickBehavior, interval};

pub struct ElapsedTicker<TStore>
where
    TStore: RecordStore + 'static,
{
    tracker: Arc<TimeTracker<TStore>>,
    interval: Interval,
}

impl<TStore> ElapsedTicker<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(tracker: Arc<TimeTracker<TStore>>, period: Duration) -> Self {
        let mut interval = interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        Self { tracker, interval }
    }

    /// Waits for the next tick. The first tick completes immediately. Empty while nothing runs.
    pub async fn tick(&mut self) -> Vec<TimeLogView> {
        self.interval.tick().await;
        if !self.tracker.has_running().await {
            return Vec::new();
        }
        self.tracker.views().await
    }
}
