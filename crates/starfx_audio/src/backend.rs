//! # Audio Backend
//!
//! The seam between the mixer and whatever actually makes noise. The host
//! implements [`AudioBackend`] over its audio library; this crate ships two
//! implementations:
//!
//! - [`NullAudioBackend`]: plays nothing, logs every request
//! - [`RecordingAudioBackend`]: records loads and plays, with failure injection

use std::collections::HashSet;

use tracing::trace;

use crate::error::{AudioError, AudioResult};

/// Identifier of one playing sound instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaybackId(pub u64);

/// Sound loading and playback primitives.
pub trait AudioBackend {
    /// Loaded audio. Cached by the mixer and reused for every play.
    type Handle: Clone;

    /// Loads the asset at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::Load`] if the asset cannot be loaded.
    fn load(&mut self, path: &str) -> AudioResult<Self::Handle>;

    /// Starts playing `handle` at `volume` (already in `[0, 1]`).
    ///
    /// `Ok(None)` means the backend declined (for example no free voice).
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::Playback`] if playback fails.
    fn play(&mut self, handle: &Self::Handle, volume: f32, looping: bool) -> AudioResult<Option<PlaybackId>>;
}

/// Backend that plays nothing.
#[derive(Debug, Default)]
pub struct NullAudioBackend {
    next_id: u64,
}

impl NullAudioBackend {
    /// Creates the backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioBackend for NullAudioBackend {
    type Handle = String;

    fn load(&mut self, path: &str) -> AudioResult<String> {
        trace!(path, "null backend load");
        Ok(path.to_string())
    }

    fn play(&mut self, handle: &String, volume: f32, looping: bool) -> AudioResult<Option<PlaybackId>> {
        trace!(path = %handle, volume, looping, "null backend play");
        self.next_id += 1;
        Ok(Some(PlaybackId(self.next_id)))
    }
}

/// One recorded play call.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayCommand {
    /// Path of the played handle.
    pub path: String,
    /// Final volume passed by the mixer.
    pub volume: f32,
    /// Looping flag.
    pub looping: bool,
}

/// Backend that records every call.
#[derive(Debug, Default)]
pub struct RecordingAudioBackend {
    loads: Vec<String>,
    plays: Vec<PlayCommand>,
    failing_paths: HashSet<String>,
    fail_playback: bool,
    voices_exhausted: bool,
}

impl RecordingAudioBackend {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every load of `path` fail.
    pub fn fail_loads_of(&mut self, path: impl Into<String>) {
        self.failing_paths.insert(path.into());
    }

    /// Makes every play return an error.
    pub fn set_playback_failure(&mut self, fail: bool) {
        self.fail_playback = fail;
    }

    /// Makes every play return `Ok(None)`.
    pub fn set_voices_exhausted(&mut self, exhausted: bool) {
        self.voices_exhausted = exhausted;
    }

    /// Paths loaded, in call order (failed loads included).
    #[must_use]
    pub fn loads(&self) -> &[String] {
        &self.loads
    }

    /// Successful plays, in call order.
    #[must_use]
    pub fn plays(&self) -> &[PlayCommand] {
        &self.plays
    }

    /// Most recent successful play.
    #[must_use]
    pub fn last_play(&self) -> Option<&PlayCommand> {
        self.plays.last()
    }

    /// Forgets recorded calls. Failure switches are kept.
    pub fn clear(&mut self) {
        self.loads.clear();
        self.plays.clear();
    }
}

impl AudioBackend for RecordingAudioBackend {
    type Handle = String;

    fn load(&mut self, path: &str) -> AudioResult<String> {
        self.loads.push(path.to_string());
        if self.failing_paths.contains(path) {
            return Err(AudioError::Load {
                path: path.to_string(),
                reason: "injected load failure".to_string(),
            });
        }
        Ok(path.to_string())
    }

    fn play(&mut self, handle: &String, volume: f32, looping: bool) -> AudioResult<Option<PlaybackId>> {
        if self.fail_playback {
            return Err(AudioError::Playback {
                path: handle.clone(),
                reason: "injected playback failure".to_string(),
            });
        }
        if self.voices_exhausted {
            return Ok(None);
        }
        self.plays.push(PlayCommand {
            path: handle.clone(),
            volume,
            looping,
        });
        Ok(Some(PlaybackId(self.plays.len() as u64)))
    }
}
