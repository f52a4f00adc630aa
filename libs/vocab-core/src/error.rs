//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors at the engine's parsing boundary.
///
/// The scheduling and progress computations themselves are total; the
/// only fallible surface is reading stored string forms back into
/// typed values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("unknown achievement kind: {kind}")]
    UnknownAchievementKind { kind: String },

    #[error("invalid achievement threshold in {id:?}")]
    InvalidAchievementThreshold { id: String },

    #[error("malformed achievement identifier: {id:?}")]
    MalformedAchievementId { id: String },
}
