// In memory implementation of the RecordStore port.
//
// Purpose
// - Support tracker tests and local development without a hosted backend.
//
// Responsibilities
// - Keep rows per table, assign ids and maintain `updated_at`.
// - Broadcast a change event to the table's subscribers after every write.

use crate::shared::infrastructure::record_store::{
    ChangeEvent, ChangeKind, Filter, Order, RecordStore, RecordStoreError, Row, Subscription,
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::{Mutex, RwLock, broadcast};
use uuid::Uuid;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Default)]
pub struct InMemoryRecordStore {
    tables: RwLock<HashMap<String, Vec<Row>>>,
    channels: Mutex<HashMap<String, broadcast::Sender<ChangeEvent>>>,
    is_offline: AtomicBool,
    operations: AtomicUsize,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Number of calls made against the store, successful or not.
    pub fn operation_count(&self) -> usize {
        self.operations.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Result<(), RecordStoreError> {
        self.operations.fetch_add(1, Ordering::SeqCst);
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RecordStoreError::Backend("Record store offline".into()));
        }
        Ok(())
    }

    async fn notify(&self, table: &str, kind: ChangeKind, id: &str) {
        let channels = self.channels.lock().await;
        if let Some(sender) = channels.get(table) {
            // No live receivers is not an error.
            let _ = sender.send(ChangeEvent {
                table: table.to_string(),
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn now_value() -> Value {
    Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn row_id(row: &Row) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn query(
        &self,
        table: &str,
        filter: Option<&Filter>,
        order: Option<&Order>,
    ) -> Result<Vec<Row>, RecordStoreError> {
        self.begin()?;
        let guard = self.tables.read().await;
        let mut rows: Vec<Row> = guard
            .get(table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| filter.is_none_or(|f| f.matches(row)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if let Some(order) = order {
            rows.sort_by(|a, b| order.compare(a, b));
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut fields: Row) -> Result<Row, RecordStoreError> {
        self.begin()?;
        let id = match row_id(&fields) {
            Some(id) => id.to_string(),
            None => Uuid::now_v7().to_string(),
        };
        fields.insert("id".into(), Value::String(id.clone()));
        fields.insert("updated_at".into(), now_value());
        {
            let mut guard = self.tables.write().await;
            let rows = guard.entry(table.to_string()).or_default();
            if rows.iter().any(|row| row_id(row) == Some(id.as_str())) {
                return Err(RecordStoreError::InvalidRow(format!(
                    "duplicate id {id} in {table}"
                )));
            }
            rows.push(fields.clone());
        }
        self.notify(table, ChangeKind::Insert, &id).await;
        Ok(fields)
    }

    async fn update(&self, table: &str, id: &str, fields: Row) -> Result<(), RecordStoreError> {
        self.begin()?;
        {
            let mut guard = self.tables.write().await;
            let row = guard
                .get_mut(table)
                .and_then(|rows| rows.iter_mut().find(|row| row_id(row) == Some(id)))
                .ok_or_else(|| RecordStoreError::NotFound {
                    table: table.to_string(),
                    id: id.to_string(),
                })?;
            for (column, value) in fields {
                if column != "id" {
                    row.insert(column, value);
                }
            }
            row.insert("updated_at".into(), now_value());
        }
        self.notify(table, ChangeKind::Update, id).await;
        Ok(())
    }

    async fn delete(&self, table: &str, id: &str) -> Result<(), RecordStoreError> {
        self.begin()?;
        let removed = {
            let mut guard = self.tables.write().await;
            match guard.get_mut(table) {
                Some(rows) => {
                    let before = rows.len();
                    rows.retain(|row| row_id(row) != Some(id));
                    rows.len() != before
                }
                None => false,
            }
        };
        if removed {
            self.notify(table, ChangeKind::Delete, id).await;
        }
        Ok(())
    }

    async fn subscribe(&self, table: &str) -> Result<Subscription, RecordStoreError> {
        self.begin()?;
        let mut channels = self.channels.lock().await;
        let sender = channels
            .entry(table.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);
        Ok(Subscription::new(table, sender.subscribe()))
    }
}
