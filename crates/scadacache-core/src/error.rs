// ── Core error types ──
//
// Transient failures from the cache collaborator are wrapped in
// `CoreError::Source` and never cross the facade's fail-soft operations.
// Only construction can fail outright.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Construction errors ──────────────────────────────────────────
    #[error("Missing required collaborator: {name}")]
    MissingCollaborator { name: &'static str },

    // ── Lookup errors ────────────────────────────────────────────────
    #[error("Cache source error: {0}")]
    Source(#[from] SourceError),
}

/// Failure reported by a [`DataCache`](crate::DataCache) or
/// [`BaseTablesLoader`](crate::BaseTablesLoader) implementation.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Cache data unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Malformed cache data: {reason}")]
    Malformed { reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}
