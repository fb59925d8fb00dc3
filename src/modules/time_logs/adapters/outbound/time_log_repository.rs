// Time log repository over the RecordStore port.
//
// Responsibilities
// - Translate decided LogChange values into exactly one store call each.
// - Load the table as TimeLog values, newest start first.

use crate::modules::time_logs::adapters::mappers::time_log_row::{
    create_fields, finish_fields, pauses_fields,
};
use crate::modules::time_logs::application::errors::ApplicationError;
use crate::modules::time_logs::core::changes::LogChange;
use crate::modules::time_logs::core::state::TimeLog;
use crate::shared::infrastructure::record_store::{Order, RecordStore, Subscription};
use std::sync::Arc;

pub const DEFAULT_TABLE: &str = "time_logs";

pub struct TimeLogRepository<TStore>
where
    TStore: RecordStore + 'static,
{
    table: String,
    store: Arc<TStore>,
}

impl<TStore> TimeLogRepository<TStore>
where
    TStore: RecordStore + 'static,
{
    pub fn new(table: impl Into<String>, store: Arc<TStore>) -> Self {
        Self {
            table: table.into(),
            store,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn store(&self) -> &Arc<TStore> {
        &self.store
    }

    pub async fn list(&self) -> Result<Vec<TimeLog>, ApplicationError> {
        let rows = self
            .store
            .query(&self.table, None, Some(&Order::desc("start_at")))
            .await?;
        rows.into_iter().map(TimeLog::try_from).collect()
    }

    pub async fn apply(&self, change: &LogChange) -> Result<(), ApplicationError> {
        match change {
            LogChange::Create { label, start_at } => {
                // The assigned id is not needed: the next refresh brings the row in.
                self.store
                    .insert(&self.table, create_fields(label, *start_at)?)
                    .await?;
            }
            LogChange::ReplacePauses { id, pauses } => {
                self.store
                    .update(&self.table, id, pauses_fields(pauses)?)
                    .await?;
            }
            LogChange::Finish { id, pauses, end_at } => {
                self.store
                    .update(&self.table, id, finish_fields(pauses, *end_at)?)
                    .await?;
            }
            LogChange::Delete { id } => {
                self.store.delete(&self.table, id).await?;
            }
        }
        Ok(())
    }

    pub async fn subscribe(&self) -> Result<Subscription, ApplicationError> {
        Ok(self.store.subscribe(&self.table).await?)
    }
}
