//! # Audio Channels
//!
//! Eight fixed mixing channels. Every sound in the manifest belongs to one,
//! and its playback volume is scaled by that channel's volume.
//!
//! | Channel   | Default |
//! |-----------|---------|
//! | `combat`  | 0.80    |
//! | `trading` | 0.70    |
//! | `ship`    | 0.60    |
//! | `planet`  | 0.65    |
//! | `alert`   | 0.85    |
//! | `ui`      | 0.50    |
//! | `music`   | 0.60    |
//! | `ambient` | 0.30    |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AudioError;

/// A mixing channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioChannel {
    /// Weapons, impacts, battle stingers.
    Combat,
    /// Market and contract feedback.
    Trading,
    /// Engines, jumps, shields.
    Ship,
    /// Docking and orbit.
    Planet,
    /// Alarms and warnings.
    Alert,
    /// Menus and buttons.
    Ui,
    /// Background music.
    Music,
    /// Ambient beds.
    Ambient,
}

impl AudioChannel {
    /// Every channel.
    pub const ALL: [Self; 8] = [
        Self::Combat,
        Self::Trading,
        Self::Ship,
        Self::Planet,
        Self::Alert,
        Self::Ui,
        Self::Music,
        Self::Ambient,
    ];

    /// Lowercase channel name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Combat => "combat",
            Self::Trading => "trading",
            Self::Ship => "ship",
            Self::Planet => "planet",
            Self::Alert => "alert",
            Self::Ui => "ui",
            Self::Music => "music",
            Self::Ambient => "ambient",
        }
    }
}

impl fmt::Display for AudioChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AudioChannel {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str() == s)
            .ok_or_else(|| AudioError::UnknownChannel(s.to_string()))
    }
}

/// Volume per channel, each in `[0, 1]`.
///
/// Deserializes from a table of channel names; missing channels keep their
/// defaults.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelVolumes {
    /// Combat channel volume.
    pub combat: f32,
    /// Trading channel volume.
    pub trading: f32,
    /// Ship channel volume.
    pub ship: f32,
    /// Planet channel volume.
    pub planet: f32,
    /// Alert channel volume.
    pub alert: f32,
    /// UI channel volume.
    pub ui: f32,
    /// Music channel volume.
    pub music: f32,
    /// Ambient channel volume.
    pub ambient: f32,
}

impl Default for ChannelVolumes {
    fn default() -> Self {
        Self {
            combat: 0.8,
            trading: 0.7,
            ship: 0.6,
            planet: 0.65,
            alert: 0.85,
            ui: 0.5,
            music: 0.6,
            ambient: 0.3,
        }
    }
}

impl ChannelVolumes {
    /// Every channel at the same volume (clamped).
    #[must_use]
    pub fn uniform(volume: f32) -> Self {
        let v = clamp_volume(volume);
        Self {
            combat: v,
            trading: v,
            ship: v,
            planet: v,
            alert: v,
            ui: v,
            music: v,
            ambient: v,
        }
    }

    /// Volume of `channel`.
    #[must_use]
    pub const fn get(&self, channel: AudioChannel) -> f32 {
        match channel {
            AudioChannel::Combat => self.combat,
            AudioChannel::Trading => self.trading,
            AudioChannel::Ship => self.ship,
            AudioChannel::Planet => self.planet,
            AudioChannel::Alert => self.alert,
            AudioChannel::Ui => self.ui,
            AudioChannel::Music => self.music,
            AudioChannel::Ambient => self.ambient,
        }
    }

    /// Sets the volume of `channel`, clamped to `[0, 1]`.
    pub fn set(&mut self, channel: AudioChannel, volume: f32) {
        let slot = match channel {
            AudioChannel::Combat => &mut self.combat,
            AudioChannel::Trading => &mut self.trading,
            AudioChannel::Ship => &mut self.ship,
            AudioChannel::Planet => &mut self.planet,
            AudioChannel::Alert => &mut self.alert,
            AudioChannel::Ui => &mut self.ui,
            AudioChannel::Music => &mut self.music,
            AudioChannel::Ambient => &mut self.ambient,
        };
        *slot = clamp_volume(volume);
    }

    /// Copy with every channel clamped to `[0, 1]`.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        for channel in AudioChannel::ALL {
            self.set(channel, self.get(channel));
        }
        self
    }

    /// `(channel, volume)` pairs in channel order.
    pub fn iter(&self) -> impl Iterator<Item = (AudioChannel, f32)> + '_ {
        AudioChannel::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Clamps to `[0, 1]`; NaN becomes silence.
pub(crate) fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let volumes = ChannelVolumes::default();
        assert_eq!(volumes.get(AudioChannel::Combat), 0.8);
        assert_eq!(volumes.get(AudioChannel::Planet), 0.65);
        assert_eq!(volumes.get(AudioChannel::Ambient), 0.3);
    }

    #[test]
    fn test_set_clamps() {
        let mut volumes = ChannelVolumes::default();
        volumes.set(AudioChannel::Ui, 1.7);
        assert_eq!(volumes.get(AudioChannel::Ui), 1.0);
        volumes.set(AudioChannel::Ui, -0.2);
        assert_eq!(volumes.get(AudioChannel::Ui), 0.0);
        volumes.set(AudioChannel::Ui, f32::NAN);
        assert_eq!(volumes.get(AudioChannel::Ui), 0.0);
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let volumes: ChannelVolumes = toml::from_str("combat = 0.25\nmusic = 3.0").unwrap();
        assert_eq!(volumes.combat, 0.25);
        assert_eq!(volumes.trading, 0.7);

        let volumes = volumes.clamped();
        assert_eq!(volumes.music, 1.0);
    }

    #[test]
    fn test_channel_names() {
        for channel in AudioChannel::ALL {
            assert_eq!(channel.as_str().parse::<AudioChannel>(), Ok(channel));
        }
        assert_eq!(
            "bass".parse::<AudioChannel>(),
            Err(AudioError::UnknownChannel("bass".to_string()))
        );
    }

    #[test]
    fn test_uniform() {
        let volumes = ChannelVolumes::uniform(0.4);
        assert!(volumes.iter().all(|(_, v)| v == 0.4));
    }
}
