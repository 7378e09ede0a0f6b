//! Error types for RawKV
//!
//! Provides a unified error type for all operations.
//!
//! Key absence is never an error: a missing key surfaces as `Ok(None)` from
//! the reader and as a `not_found` flag in responses. Every variant below is
//! a genuine failure that aborts the current operation.

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for RawKV operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Engine Errors
    // -------------------------------------------------------------------------
    #[error("failed to open engine: {0}")]
    Open(String),

    #[error("engine error: {0}")]
    Engine(String),

    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("storage is stopped")]
    Stopped,
}

// =============================================================================
// Engine Error Conversions
// =============================================================================
// The adapter consumes the engine through `?`; everything the engine reports
// (other than "table does not exist", which the adapter maps to absence
// before converting) collapses into the Engine variant.

impl From<redb::DatabaseError> for KvError {
    fn from(e: redb::DatabaseError) -> Self {
        KvError::Open(e.to_string())
    }
}

impl From<redb::TransactionError> for KvError {
    fn from(e: redb::TransactionError) -> Self {
        KvError::Engine(e.to_string())
    }
}

impl From<redb::TableError> for KvError {
    fn from(e: redb::TableError) -> Self {
        KvError::Engine(e.to_string())
    }
}

impl From<redb::StorageError> for KvError {
    fn from(e: redb::StorageError) -> Self {
        KvError::Engine(e.to_string())
    }
}

impl From<redb::CommitError> for KvError {
    fn from(e: redb::CommitError) -> Self {
        KvError::Engine(e.to_string())
    }
}
