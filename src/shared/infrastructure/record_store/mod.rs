// Record store port: the remote, multi-client data service that persists rows and pushes changes.
//
// Purpose
// - Describe the CRUD and subscribe capabilities the time log module needs, independent of any
//   hosted backend.
//
// Responsibilities
// - Rows are JSON objects keyed by column name. The store assigns `id` and maintains `updated_at`.
// - Every insert, update and delete is announced to the table's subscribers.
//
// Boundaries
// - No domain knowledge here. Mapping rows to domain values belongs to the module adapters.

pub mod in_memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;

pub type Row = serde_json::Map<String, Value>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("row not found: {table}/{id}")]
    NotFound { table: String, id: String },

    #[error("invalid row: {0}")]
    InvalidRow(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub equals: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            equals: value.into(),
        }
    }

    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column) == Some(&self.equals)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }

    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let ordering = compare_values(a.get(&self.column), b.get(&self.column));
        if self.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    }
}

/// Missing and null values sort first. Strings that both parse as RFC 3339 compare as instants.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Less,
        (_, None | Some(Value::Null)) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => {
            match (
                DateTime::parse_from_rfc3339(x),
                DateTime::parse_from_rfc3339(y),
            ) {
                (Ok(x), Ok(y)) => x.with_timezone(&Utc).cmp(&y.with_timezone(&Utc)),
                _ => x.cmp(y),
            }
        }
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub table: String,
    pub kind: ChangeKind,
    pub id: String,
}

/// A live feed of change events for one table. Dropping it releases it.
#[derive(Debug)]
pub struct Subscription {
    table: String,
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    pub fn new(table: impl Into<String>, receiver: broadcast::Receiver<ChangeEvent>) -> Self {
        Self {
            table: table.into(),
            receiver,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Waits for the next change. Returns `None` once the store closes the channel.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(table = %self.table, skipped, "subscription lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn query(
        &self,
        table: &str,
        filter: Option<&Filter>,
        order: Option<&Order>,
    ) -> Result<Vec<Row>, RecordStoreError>;

    /// Returns the created row, including the assigned `id`.
    async fn insert(&self, table: &str, fields: Row) -> Result<Row, RecordStoreError>;

    /// Partial update by primary key. All given fields are replaced in one write.
    async fn update(&self, table: &str, id: &str, fields: Row) -> Result<(), RecordStoreError>;

    async fn delete(&self, table: &str, id: &str) -> Result<(), RecordStoreError>;

    async fn subscribe(&self, table: &str) -> Result<Subscription, RecordStoreError>;
}
