use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage write failed for {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
