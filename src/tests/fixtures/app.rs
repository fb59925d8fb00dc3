use crate::modules::time_logs::adapters::outbound::time_log_repository::{
    DEFAULT_TABLE, TimeLogRepository,
};
use crate::modules::time_logs::application::time_tracker::TimeTracker;
use crate::modules::time_logs::core::elapsed::ElapsedBaseline;
use crate::shared::core::clock::ManualClock;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::logs::t0;
use std::sync::Arc;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryRecordStore>,
    pub clock: Arc<ManualClock>,
}

/// Unmounted app state over an empty in-memory store, with the clock stopped at `t0()`.
pub fn make_test_app() -> TestApp {
    let store = Arc::new(InMemoryRecordStore::new());
    let clock = Arc::new(ManualClock::new(t0()));
    let tracker = TimeTracker::new(
        TimeLogRepository::new(DEFAULT_TABLE, store.clone()),
        clock.clone(),
        ElapsedBaseline::default(),
    );
    TestApp {
        state: AppState {
            tracker: Arc::new(tracker),
        },
        store,
        clock,
    }
}
