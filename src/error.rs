//! Error types for the assignment engine.
//!
//! Uses `thiserror` for library errors. The pure domain services never
//! return errors; they produce status values and derived lists. Everything
//! here is raised by the application layer's mutation entry points.

use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Main error type for engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    /// A date range ends before it starts
    #[error("invalid range on {entity} '{id}': end {end} is before start {start}")]
    InvalidRange {
        entity: &'static str,
        id: String,
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// Unknown event/leg/resource id
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// Committing an assignment the availability checker marked unavailable
    #[error("{entity} '{id}' cannot be assigned: {reason}")]
    Conflict {
        entity: &'static str,
        id: String,
        reason: String,
    },

    /// Data store I/O failure while flushing a commit
    #[error("persistence failure: {0}")]
    Persistence(#[from] anyhow::Error),
}

impl EngineError {
    pub(crate) fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        EngineError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
