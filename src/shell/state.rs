use crate::modules::time_logs::application::time_tracker::TimeTracker;
use crate::shared::infrastructure::record_store::in_memory::InMemoryRecordStore;
use std::sync::Arc;

pub type Tracker = TimeTracker<InMemoryRecordStore>;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker>,
}
