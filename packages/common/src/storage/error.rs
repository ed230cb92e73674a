use thiserror::Error;

/// Errors that can occur during slot storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The slot is empty or its directory does not exist.
    #[error("slot '{0}' is empty")]
    NotFound(String),
    /// An I/O error occurred.
    #[error("storage IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The payload exceeds the configured size limit.
    #[error("file exceeds size limit ({actual} > {limit} bytes)")]
    SizeLimitExceeded { actual: u64, limit: u64 },
}
