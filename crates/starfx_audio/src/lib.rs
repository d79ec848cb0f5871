//! # STARFX Audio
//!
//! Channel-based mixer for gameplay sound effects.
//!
//! ## Architecture
//!
//! ```text
//! play_effect_sound("critical_hit", 1.5)
//!        │
//!        ▼
//!  SoundManifest ──► SoundSpec { path, category, volume, looping }
//!        │
//!        ▼
//!  ChannelVolumes[category] × volume × intensity ──► clamp [0, 1]
//!        │
//!        ▼
//!  handle cache (lazy) ──► AudioBackend::play(handle, volume, looping)
//! ```
//!
//! ## Design Principles
//!
//! 1. **Backend-agnostic** - playback goes through [`AudioBackend`]
//! 2. **Never fatal** - load and playback failures are logged and reported as `false`
//! 3. **Load once** - handles are cached per effect for the session

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod backend;
pub mod channel;
pub mod error;
pub mod manifest;
pub mod mixer;

pub use backend::{AudioBackend, NullAudioBackend, PlayCommand, PlaybackId, RecordingAudioBackend};
pub use channel::{AudioChannel, ChannelVolumes};
pub use error::{AudioError, AudioResult};
pub use manifest::{SoundManifest, SoundSpec};
pub use mixer::AudioChannelMixer;
