//! # Audio Channel Mixer
//!
//! Resolves an effect sound by name, scales its volume through its channel
//! and the caller's intensity, and hands it to the backend.
//!
//! ```text
//! final_volume = clamp(base_volume × channel_volume × intensity, 0, 1)
//! ```
//!
//! Handles are loaded lazily on first play and kept for the whole session.
//! Every failure ends in a log line and `false`; nothing propagates.

use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use crate::backend::AudioBackend;
use crate::channel::{clamp_volume, AudioChannel, ChannelVolumes};
use crate::manifest::{SoundManifest, SoundSpec};

/// Channel-based sound effect mixer over a pluggable backend.
pub struct AudioChannelMixer<B: AudioBackend> {
    /// Playback primitives.
    backend: B,
    /// Name to asset map.
    manifest: SoundManifest,
    /// Per-channel volume.
    volumes: ChannelVolumes,
    /// Effect name to loaded handle.
    cache: HashMap<String, B::Handle>,
    /// Global kill switch.
    enabled: bool,
}

impl<B: AudioBackend> AudioChannelMixer<B> {
    /// Creates an enabled mixer with default channel volumes.
    #[must_use]
    pub fn new(backend: B, manifest: SoundManifest) -> Self {
        Self::with_volumes(backend, manifest, ChannelVolumes::default())
    }

    /// Creates an enabled mixer with explicit channel volumes (clamped).
    #[must_use]
    pub fn with_volumes(backend: B, manifest: SoundManifest, volumes: ChannelVolumes) -> Self {
        info!(sounds = manifest.len(), "audio channel mixer initialized");

        Self {
            backend,
            manifest,
            volumes: volumes.clamped(),
            cache: HashMap::new(),
            enabled: true,
        }
    }

    /// Plays the effect sound `effect_name` scaled by `intensity`.
    ///
    /// Returns true only if the backend started playback.
    pub fn play_effect_sound(&mut self, effect_name: &str, intensity: f32) -> bool {
        if !self.enabled {
            return false;
        }

        let Some(spec) = self.manifest.get(effect_name) else {
            warn!(effect_name, "unknown sound effect");
            return false;
        };
        if spec.path.is_empty() {
            warn!(effect_name, "sound effect has no asset path");
            return false;
        }

        let volume = clamp_volume(spec.volume * self.volumes.get(spec.category) * intensity);
        let looping = spec.looping;
        let channel = spec.category;

        let cached = self.cache.get(effect_name).cloned();
        let handle = match cached {
            Some(handle) => handle,
            None => match self.backend.load(&spec.path) {
                Ok(handle) => {
                    self.cache.insert(effect_name.to_string(), handle.clone());
                    handle
                }
                Err(err) => {
                    error!(effect_name, %err, "failed to load sound effect");
                    return false;
                }
            },
        };

        match self.backend.play(&handle, volume, looping) {
            Ok(Some(id)) => {
                debug!(effect_name, %channel, volume, playback = id.0, "sound effect playing");
                true
            }
            Ok(None) => {
                debug!(effect_name, "backend declined playback");
                false
            }
            Err(err) => {
                error!(effect_name, %err, "failed to play sound effect");
                false
            }
        }
    }

    /// Sets a channel volume, clamped to `[0, 1]`. Affects future plays only.
    pub fn set_channel_volume(&mut self, channel: AudioChannel, volume: f32) {
        self.volumes.set(channel, volume);
        info!(%channel, volume = self.volumes.get(channel), "channel volume set");
    }

    /// Current volume of `channel`.
    #[must_use]
    pub const fn get_channel_volume(&self, channel: AudioChannel) -> f32 {
        self.volumes.get(channel)
    }

    /// Sets every channel to `volume`, clamped to `[0, 1]`.
    pub fn set_all_volumes(&mut self, volume: f32) {
        self.volumes = ChannelVolumes::uniform(volume);
        info!(volume = self.volumes.combat, "all channel volumes set");
    }

    /// Every channel's volume.
    #[must_use]
    pub const fn channel_volumes(&self) -> &ChannelVolumes {
        &self.volumes
    }

    /// Turns playback on.
    pub fn enable(&mut self) {
        self.enabled = true;
        info!("audio enabled");
    }

    /// Turns playback off. Plays return false without touching cache or manifest.
    pub fn disable(&mut self) {
        self.enabled = false;
        info!("audio disabled");
    }

    /// Is playback on?
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Drops every cached handle.
    pub fn clear_sound_cache(&mut self) {
        let dropped = self.cache.len();
        self.cache.clear();
        info!(dropped, "sound cache cleared");
    }

    /// Number of cached handles.
    #[must_use]
    pub fn cached_sounds(&self) -> usize {
        self.cache.len()
    }

    /// Manifest entry for `effect_name`.
    #[must_use]
    pub fn sound_info(&self, effect_name: &str) -> Option<&SoundSpec> {
        self.manifest.get(effect_name)
    }

    /// Names of every sound mixed on `channel`, sorted.
    #[must_use]
    pub fn channel_sounds(&self, channel: AudioChannel) -> Vec<&str> {
        self.manifest.sounds_in(channel).map(|(name, _)| name).collect()
    }

    /// The manifest.
    #[must_use]
    pub const fn manifest(&self) -> &SoundManifest {
        &self.manifest
    }

    /// The backend.
    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// The backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: AudioBackend + std::fmt::Debug> std::fmt::Debug for AudioChannelMixer<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioChannelMixer")
            .field("backend", &self.backend)
            .field("sounds", &self.manifest.len())
            .field("volumes", &self.volumes)
            .field("cached", &self.cache.len())
            .field("enabled", &self.enabled)
            .finish()
    }
}
