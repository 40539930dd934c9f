use thiserror::Error;

/// Error type that captures failures surfaced by repository collaborators
/// and settings decoding. Validation rejections are not errors; they are
/// signaled by `None` returns from the entity services.
#[derive(Debug, Error)]
pub enum CashflowError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}
