//! Error types for the puzzle backend.
//!
//! Nothing here is fatal: every variant is a local, recoverable condition that
//! the request layer reports as data.

use thiserror::Error;

/// Errors surfaced by game and level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No session exists with this id.
    #[error("Invalid session ID: {0}")]
    SessionNotFound(String),

    /// The level is not unlocked yet and dev mode is off.
    #[error("Level {0} not available yet")]
    LevelLocked(u32),
}

/// Failures of an external embedding source.
///
/// These never reach callers of the embedding provider, which falls back to
/// synthetic vectors instead.
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Transport failure, timeout, or undecodable body.
    #[error("Embedding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Embedding service returned status {0}")]
    Status(u16),

    /// The returned vector has the wrong length.
    #[error("Embedding has {actual} dimensions, expected {expected}")]
    Dimension {
        /// Configured dimensionality.
        expected: usize,
        /// Length actually returned.
        actual: usize,
    },

    /// The returned vector cannot be normalized (zero norm or non-finite).
    #[error("Embedding vector is degenerate")]
    Degenerate,
}

/// Result type alias for game operations.
pub type Result<T> = std::result::Result<T, GameError>;
