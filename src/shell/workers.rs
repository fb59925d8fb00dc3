// Background workers spawned by the composition root.

use crate::modules::time_logs::application::elapsed_ticker::ElapsedTicker;
use crate::modules::time_logs::core::state::LogStatus;
use crate::shell::state::Tracker;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Recomputes elapsed time for running logs once per period and traces it. Local only.
pub fn spawn_elapsed_ticker(tracker: Arc<Tracker>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = ElapsedTicker::new(tracker, period);
        loop {
            let views = ticker.tick().await;
            for view in views.iter().filter(|view| view.status == LogStatus::Running) {
                tracing::trace!(id = %view.id, label = %view.label, elapsed = %view.elapsed_display, "tick");
            }
        }
    })
}
