// Mapping between `time_logs` rows and TimeLog values.
//
// Columns: id, label, start_at, end_at (nullable), pauses (array of {from, to?}), updated_at.
// Timestamps travel as RFC 3339 strings.

use crate::modules::time_logs::application::errors::ApplicationError;
use crate::modules::time_logs::core::state::{Pause, TimeLog};
use crate::shared::infrastructure::record_store::Row;
use chrono::{DateTime, Utc};
use serde_json::Value;

impl TryFrom<Row> for TimeLog {
    type Error = ApplicationError;

    fn try_from(row: Row) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(Value::Object(row))?)
    }
}

pub fn create_fields(label: &str, start_at: DateTime<Utc>) -> Result<Row, ApplicationError> {
    let mut fields = Row::new();
    fields.insert("label".into(), Value::String(label.to_string()));
    fields.insert("start_at".into(), serde_json::to_value(start_at)?);
    fields.insert("end_at".into(), Value::Null);
    fields.insert("pauses".into(), Value::Array(Vec::new()));
    Ok(fields)
}

pub fn pauses_fields(pauses: &[Pause]) -> Result<Row, ApplicationError> {
    let mut fields = Row::new();
    fields.insert("pauses".into(), serde_json::to_value(pauses)?);
    Ok(fields)
}

pub fn finish_fields(pauses: &[Pause], end_at: DateTime<Utc>) -> Result<Row, ApplicationError> {
    let mut fields = pauses_fields(pauses)?;
    fields.insert("end_at".into(), serde_json::to_value(end_at)?);
    Ok(fields)
}
