// TimeTracker orchestrates the time log write flow over a read-through snapshot.
//
// Responsibilities
// - Look the target log up in the cached snapshot, call the decider with the current time.
// - Send the decided change to the store, then re-read the table into the snapshot.
// - Own exactly one subscription: mount opens it, unmount or drop releases it.
//
// The snapshot is never patched locally. It only ever holds what the store returned, so it can
// lag behind writes that are still in flight.

use crate::modules::time_logs::adapters::outbound::time_log_repository::TimeLogRepository;
use crate::modules::time_logs::application::errors::ApplicationError;
use crate::modules::time_logs::core::decision::Decision;
use crate::modules::time_logs::core::elapsed::{ElapsedBaseline, elapsed_seconds};
use crate::modules::time_logs::core::outcome::{CommandOutcome, IgnoreReason};
use crate::modules::time_logs::core::state::TimeLog;
use crate::modules::time_logs::use_cases::finish_time_log::command::FinishTimeLog;
use crate::modules::time_logs::use_cases::finish_time_log::decide::decide_finish;
use crate::modules::time_logs::use_cases::list_time_logs::projection::{TimeLogView, project_all};
use crate::modules::time_logs::use_cases::pause_time_log::command::PauseTimeLog;
use crate::modules::time_logs::use_cases::pause_time_log::decide::decide_pause;
use crate::modules::time_logs::use_cases::remove_time_log::command::{ConfirmRemoval, RemoveTimeLog};
use crate::modules::time_logs::use_cases::remove_time_log::decide::decide_remove;
use crate::modules::time_logs::use_cases::resume_time_log::command::ResumeTimeLog;
use crate::modules::time_logs::use_cases::resume_time_log::decide::decide_resume;
use crate::modules::time_logs::use_cases::start_time_log::command::StartTimeLog;
use crate::modules::time_logs::use_cases::start_time_log::decide::decide_start;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::record_store::{RecordStore, RecordStoreError};
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

#[derive(Debug, Default)]
struct Snapshot {
    generation: u64,
    logs: Vec<TimeLog>,
}

#[derive(Debug, Default)]
struct SnapshotCache {
    issued: AtomicU64,
    current: RwLock<Snapshot>,
}

impl SnapshotCache {
    async fn reload<TStore>(&self, repository: &TimeLogRepository<TStore>) -> Result<(), ApplicationError>
    where
        TStore: RecordStore + 'static,
    {
        // A read issued later never loses to one issued earlier that completes after it.
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let logs = repository.list().await?;
        let mut current = self.current.write().await;
        if generation > current.generation {
            *current = Snapshot { generation, logs };
        }
        Ok(())
    }
}

pub struct TimeTracker<TStore>
where
    TStore: RecordStore + 'static,
{
    repository: Arc<TimeLogRepository<TStore>>,
    cache: Arc<SnapshotCache>,
    clock: Arc<dyn Clock>,
    baseline: ElapsedBaseline,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl<TStore> TimeTracker<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(
        repository: TimeLogRepository<TStore>,
        clock: Arc<dyn Clock>,
        baseline: ElapsedBaseline,
    ) -> Self {
        Self {
            repository: Arc::new(repository),
            cache: Arc::new(SnapshotCache::default()),
            clock,
            baseline,
            listener: Mutex::new(None),
        }
    }

    pub fn baseline(&self) -> ElapsedBaseline {
        self.baseline
    }

    pub fn repository(&self) -> &TimeLogRepository<TStore> {
        &self.repository
    }

    /// Opens the subscription and loads the first snapshot. Mounting twice is a no-op.
    pub async fn mount(&self) -> Result<(), ApplicationError> {
        if self.is_mounted() {
            return Ok(());
        }
        let mut subscription = self.repository.subscribe().await.inspect_err(|error| {
            error!(table = %self.repository.table(), %error, "time log subscription failed");
        })?;

        let repository = Arc::clone(&self.repository);
        let cache = Arc::clone(&self.cache);
        let handle = tokio::spawn(async move {
            while let Some(change) = subscription.next().await {
                debug!(table = %change.table, kind = ?change.kind, id = %change.id, "time log change received");
                if let Err(error) = cache.reload(&repository).await {
                    error!(%error, "time log refresh after change failed");
                }
            }
        });

        {
            let mut listener = self.listener.lock().unwrap_or_else(PoisonError::into_inner);
            match listener.as_ref() {
                Some(_) => handle.abort(),
                None => *listener = Some(handle),
            }
        }
        info!(table = %self.repository.table(), "time tracker mounted");
        self.refresh().await
    }

    pub fn unmount(&self) {
        let handle = self
            .listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
            info!(table = %self.repository.table(), "time tracker unmounted");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.listener
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub async fn refresh(&self) -> Result<(), ApplicationError> {
        self.cache
            .reload(&self.repository)
            .await
            .inspect_err(|error| error!(%error, "time log refresh failed"))
    }

    pub async fn snapshot(&self) -> Vec<TimeLog> {
        self.cache.current.read().await.logs.clone()
    }

    pub async fn find(&self, id: &str) -> Option<TimeLog> {
        self.cache
            .current
            .read()
            .await
            .logs
            .iter()
            .find(|log| log.id == id)
            .cloned()
    }

    pub async fn start(&self, label: &str) -> Result<CommandOutcome, ApplicationError> {
        let command = StartTimeLog {
            label: label.to_string(),
            start_at: self.clock.now(),
        };
        self.execute("start", decide_start(command)).await
    }

    pub async fn pause(&self, id: &str) -> Result<CommandOutcome, ApplicationError> {
        let log = self.find(id).await;
        let command = PauseTimeLog {
            id: id.to_string(),
            at: self.clock.now(),
        };
        self.execute("pause", decide_pause(log.as_ref(), command)).await
    }

    pub async fn resume(&self, id: &str) -> Result<CommandOutcome, ApplicationError> {
        let log = self.find(id).await;
        let command = ResumeTimeLog {
            id: id.to_string(),
            at: self.clock.now(),
        };
        self.execute("resume", decide_resume(log.as_ref(), command)).await
    }

    pub async fn finish(&self, id: &str) -> Result<CommandOutcome, ApplicationError> {
        let log = self.find(id).await;
        let command = FinishTimeLog {
            id: id.to_string(),
            at: self.clock.now(),
        };
        self.execute("finish", decide_finish(log.as_ref(), command)).await
    }

    pub async fn remove(
        &self,
        id: &str,
        confirmation: &dyn ConfirmRemoval,
    ) -> Result<CommandOutcome, ApplicationError> {
        let command = RemoveTimeLog {
            id: id.to_string(),
            confirmed: confirmation.confirm(id),
        };
        self.execute("remove", decide_remove(command)).await
    }

    pub fn elapsed(&self, log: &TimeLog, now: DateTime<Utc>) -> i64 {
        elapsed_seconds(log, now, self.baseline)
    }

    pub async fn views(&self) -> Vec<TimeLogView> {
        let now = self.clock.now();
        let snapshot = self.cache.current.read().await;
        project_all(&snapshot.logs, now, self.baseline)
    }

    pub async fn has_running(&self) -> bool {
        self.cache
            .current
            .read()
            .await
            .logs
            .iter()
            .any(TimeLog::is_running)
    }

    async fn execute(
        &self,
        command: &'static str,
        decision: Decision,
    ) -> Result<CommandOutcome, ApplicationError> {
        match decision {
            Decision::Accepted { change } => {
                match self.repository.apply(&change).await {
                    Ok(()) => {}
                    // Deleted elsewhere after the snapshot was read.
                    Err(ApplicationError::Store(RecordStoreError::NotFound { .. })) => {
                        debug!(command, change = change.kind(), "time log command hit a deleted log");
                        if self.refresh().await.is_err() {
                            warn!(command, "snapshot left stale after stale reference");
                        }
                        return Ok(CommandOutcome::Ignored(IgnoreReason::StaleReference));
                    }
                    Err(error) => {
                        error!(command, change = change.kind(), %error, "time log command failed");
                        return Err(error);
                    }
                }
                info!(command, change = change.kind(), "time log command applied");
                // The write went through; a failed follow-up read only delays the snapshot.
                if self.refresh().await.is_err() {
                    warn!(command, "snapshot left stale after applied command");
                }
                Ok(CommandOutcome::Applied)
            }
            Decision::Rejected { reason } => {
                debug!(command, %reason, "time log command rejected");
                Ok(CommandOutcome::Rejected(reason))
            }
            Decision::Ignored { reason } => {
                debug!(command, %reason, "time log command ignored");
                Ok(CommandOutcome::Ignored(reason))
            }
        }
    }
}

impl<TStore> Drop for TimeTracker<TStore>
where
    TStore: RecordStore + 'static,
{
    fn drop(&mut self) {
        if let Some(handle) = self
            .listener
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            handle.abort();
        }
    }
}
