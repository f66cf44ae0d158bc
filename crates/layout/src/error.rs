//! Layout persistence error types

use thiserror::Error;

/// Layout operation result type
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Layout persistence errors
///
/// In-memory mutations never fail; only the explicit save path can.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to serialize layout snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage write failed: {0}")]
    StorageWrite(#[from] std::io::Error),
}
