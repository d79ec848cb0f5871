//! # Effects Configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! enabled = true
//! max_particles = 10000
//! spam_window_ms = 50
//! rng_seed = 91621338269272
//! sound_manifest = "assets/audio/sounds.toml"
//!
//! [channels]
//! combat = 0.8
//! music = 0.4
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use starfx_audio::{ChannelVolumes, SoundManifest};
use starfx_particles::{DEFAULT_MAX_PARTICLES, DEFAULT_SEED};
use tracing::info;

use crate::error::{EffectsError, EffectsResult};

/// Effects configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Global kill switch.
    pub enabled: bool,
    /// Particle budget.
    pub max_particles: usize,
    /// Spam suppression window in milliseconds.
    pub spam_window_ms: u64,
    /// Particle RNG seed.
    pub rng_seed: u64,
    /// Sound manifest file. The built-in table when absent.
    pub sound_manifest: Option<String>,
    /// Per-channel volume.
    pub channels: ChannelVolumes,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_particles: DEFAULT_MAX_PARTICLES,
            spam_window_ms: 50,
            rng_seed: DEFAULT_SEED,
            sound_manifest: None,
            channels: ChannelVolumes::default(),
        }
    }
}

impl EffectsConfig {
    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::InvalidConfig`] on malformed TOML or a failed
    /// [`Self::validate`].
    pub fn from_toml_str(text: &str) -> EffectsResult<Self> {
        let mut config: Self =
            toml::from_str(text).map_err(|e| EffectsError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> EffectsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| EffectsError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "effects configuration loaded");
        Ok(config)
    }

    /// Rejects a zero particle budget and clamps channel volumes.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::InvalidConfig`] if `max_particles` is 0.
    pub fn validate(&mut self) -> EffectsResult<()> {
        if self.max_particles == 0 {
            return Err(EffectsError::InvalidConfig(
                "max_particles must be at least 1".to_string(),
            ));
        }
        self.channels = self.channels.clamped();
        Ok(())
    }

    /// Spam window as a duration.
    #[must_use]
    pub const fn spam_window(&self) -> Duration {
        Duration::from_millis(self.spam_window_ms)
    }

    /// The configured sound manifest, or the built-in one.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::Audio`] if the manifest file cannot be loaded.
    pub fn load_manifest(&self) -> EffectsResult<SoundManifest> {
        match &self.sound_manifest {
            Some(path) => Ok(SoundManifest::load(path)?),
            None => Ok(SoundManifest::builtin()),
        }
    }
}
