//! # Audio Error Types
//!
//! Errors raised at the manifest and backend seams. The mixer itself turns
//! every one of these into a log line and a `false`.

use thiserror::Error;

/// Errors that can occur in the audio layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The backend could not load an audio file.
    #[error("failed to load sound {path}: {reason}")]
    Load {
        /// Path that was requested.
        path: String,
        /// Backend explanation.
        reason: String,
    },

    /// The backend failed to start playback.
    #[error("failed to play sound {path}: {reason}")]
    Playback {
        /// Path of the sound that failed.
        path: String,
        /// Backend explanation.
        reason: String,
    },

    /// Unknown mixing channel name.
    #[error("unknown audio channel: {0}")]
    UnknownChannel(String),

    /// Sound manifest could not be parsed.
    #[error("invalid sound manifest: {0}")]
    InvalidManifest(String),

    /// Manifest file could not be read.
    #[error("failed to read {path}: {reason}")]
    Io {
        /// File that was requested.
        path: String,
        /// OS explanation.
        reason: String,
    },
}

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;
