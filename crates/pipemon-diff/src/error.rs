//! Error types for the diff crate.

/// Errors that can occur while preparing definitions for comparison.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The serialized definition was not a JSON object at the top level.
    ///
    /// Attributed to the offending pipeline so the user knows which of the
    /// two fetches produced the malformed body.
    #[error("pipeline {pipeline}: definition is not a JSON object")]
    NotAnObject { pipeline: String },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
