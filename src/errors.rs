use thiserror::Error;

/// Error type that captures common record store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Storage(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid backup format: {0}")]
    InvalidBackup(String),
    #[error("bulk apply stopped after {applied} of {total} records: {source}")]
    PartialBulk {
        applied: usize,
        total: usize,
        #[source]
        source: Box<StoreError>,
    },
}
