//! # Effects Error Types
//!
//! Errors from configuration and name parsing. Runtime triggers never fail
//! with these; they return `false`.

use starfx_audio::AudioError;
use thiserror::Error;

/// Errors that can occur in the effects layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectsError {
    /// Unknown effect category name.
    #[error("unknown effect category: {0}")]
    UnknownCategory(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read.
    #[error("failed to read {path}: {reason}")]
    Io {
        /// File that was requested.
        path: String,
        /// OS explanation.
        reason: String,
    },

    /// Sound manifest problem.
    #[error(transparent)]
    Audio(#[from] AudioError),
}

/// Result type for effects operations.
pub type EffectsResult<T> = Result<T, EffectsError>;
