use crate::shared::infrastructure::record_store::RecordStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] RecordStoreError),

    #[error("row codec: {0}")]
    Codec(#[from] serde_json::Error),
}
