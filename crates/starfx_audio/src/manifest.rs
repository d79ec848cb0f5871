//! # Sound Manifest
//!
//! Read-only map from effect sound name to its asset description. Supplied
//! once at startup, either the built-in table or a TOML file:
//!
//! ```toml
//! [sounds.menu_select]
//! path = "assets/audio/ui/menu_select.wav"
//! category = "ui"
//! volume = 0.8
//! description = "Menu item selected"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::channel::AudioChannel;
use crate::error::{AudioError, AudioResult};

/// One sound asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoundSpec {
    /// Asset path handed to the backend.
    pub path: String,
    /// Mixing channel.
    pub category: AudioChannel,
    /// Base volume before channel and intensity scaling.
    #[serde(default = "default_volume")]
    pub volume: f32,
    /// Loop until stopped.
    #[serde(default)]
    pub looping: bool,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
}

const fn default_volume() -> f32 {
    1.0
}

/// Effect sound name to asset map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundManifest {
    #[serde(default)]
    sounds: BTreeMap<String, SoundSpec>,
}

/// `(name, path, channel, volume, looping, description)`
type BuiltinSound = (&'static str, &'static str, AudioChannel, f32, bool, &'static str);

#[rustfmt::skip]
const BUILTIN_SOUNDS: &[BuiltinSound] = &[
    // UI
    ("menu_select", "assets/audio/ui/menu_select.wav", AudioChannel::Ui, 0.8, false, "Menu item selected"),
    ("menu_hover", "assets/audio/ui/menu_hover.wav", AudioChannel::Ui, 0.6, false, "Mouse over menu item"),
    ("confirm", "assets/audio/ui/confirm.wav", AudioChannel::Ui, 0.9, false, "Action confirmed"),
    ("cancel", "assets/audio/ui/cancel.wav", AudioChannel::Ui, 0.7, false, "Action cancelled"),
    ("error", "assets/audio/ui/error.wav", AudioChannel::Ui, 0.8, false, "Error/warning sound"),
    ("success", "assets/audio/ui/success.wav", AudioChannel::Ui, 0.85, false, "Success/completion sound"),
    // Trading
    ("purchase", "assets/audio/trading/purchase.wav", AudioChannel::Ui, 0.8, false, "Item purchased"),
    ("sale", "assets/audio/trading/sale.wav", AudioChannel::Ui, 0.8, false, "Item sold"),
    ("credits_transfer", "assets/audio/trading/credits_transfer.wav", AudioChannel::Ui, 0.7, false, "Credits transferred between accounts"),
    ("contract_accept", "assets/audio/trading/contract_accept.wav", AudioChannel::Ui, 0.9, false, "Trade contract accepted"),
    ("contract_complete", "assets/audio/trading/contract_complete.wav", AudioChannel::Ui, 0.95, false, "Trade contract completed"),
    // Combat
    ("combat_start", "assets/audio/combat/combat_start.wav", AudioChannel::Combat, 0.95, false, "Combat begins"),
    ("combat_fire", "assets/audio/combat/combat_fire.wav", AudioChannel::Combat, 0.8, false, "Weapon fired"),
    ("combat_hit", "assets/audio/combat/combat_hit.wav", AudioChannel::Combat, 0.85, false, "Successful hit on target"),
    ("combat_miss", "assets/audio/combat/combat_miss.wav", AudioChannel::Combat, 0.6, false, "Attack missed target"),
    ("shield_hit", "assets/audio/combat/shield_hit.wav", AudioChannel::Combat, 0.7, false, "Shields absorb damage"),
    ("hull_damage", "assets/audio/combat/hull_damage.wav", AudioChannel::Combat, 0.85, false, "Hull takes damage"),
    ("critical_hit", "assets/audio/combat/critical_hit.wav", AudioChannel::Combat, 0.95, false, "Critical hit scored"),
    ("special_weapon_ready", "assets/audio/combat/special_weapon_ready.wav", AudioChannel::Combat, 0.8, false, "Special weapon is ready to use"),
    ("special_weapon_fire", "assets/audio/combat/special_weapon_fire.wav", AudioChannel::Combat, 1.0, false, "Special weapon fired"),
    ("special_weapon_cooldown", "assets/audio/combat/special_weapon_cooldown.wav", AudioChannel::Combat, 0.7, false, "Special weapon on cooldown"),
    ("combat_victory", "assets/audio/combat/combat_victory.wav", AudioChannel::Combat, 1.0, false, "Combat won"),
    ("combat_defeat", "assets/audio/combat/combat_defeat.wav", AudioChannel::Combat, 0.9, false, "Combat lost"),
    ("combat_retreat", "assets/audio/combat/combat_retreat.wav", AudioChannel::Combat, 0.75, false, "Retreated from combat"),
    // Ship
    ("engine_startup", "assets/audio/ship/engine_startup.wav", AudioChannel::Ship, 0.7, false, "Ship engines starting"),
    ("engine_running", "assets/audio/ship/engine_running.wav", AudioChannel::Ship, 0.5, false, "Ship engines running (looping)"),
    ("jump_charge", "assets/audio/ship/jump_charge.wav", AudioChannel::Ship, 0.8, false, "Warp engine charging"),
    ("jump_execute", "assets/audio/ship/jump_execute.wav", AudioChannel::Ship, 0.9, false, "Warp jump executed"),
    ("module_install", "assets/audio/ship/module_install.wav", AudioChannel::Ui, 0.8, false, "Module successfully installed"),
    ("module_remove", "assets/audio/ship/module_remove.wav", AudioChannel::Ui, 0.7, false, "Module removed from ship"),
    ("upgrade_install", "assets/audio/ship/upgrade_install.wav", AudioChannel::Ui, 0.85, false, "Upgrade successfully installed"),
    ("shield_active", "assets/audio/ship/shield_active.wav", AudioChannel::Ship, 0.6, false, "Shields activated"),
    ("shield_low", "assets/audio/ship/shield_low.wav", AudioChannel::Ship, 0.8, false, "Shields are low (warning)"),
    ("hull_breach", "assets/audio/ship/hull_breach.wav", AudioChannel::Ship, 0.9, false, "Hull breach warning"),
    // Planet
    ("planet_docking", "assets/audio/planet/planet_docking.wav", AudioChannel::Planet, 0.75, false, "Docking at planet"),
    ("planet_departure", "assets/audio/planet/planet_departure.wav", AudioChannel::Planet, 0.7, false, "Departing from planet"),
    ("planet_scan", "assets/audio/planet/planet_scan.wav", AudioChannel::Ui, 0.7, false, "Planet scanned"),
    ("orbit_alert", "assets/audio/planet/orbit_alert.wav", AudioChannel::Planet, 0.85, false, "Alert in planetary orbit"),
    // Alerts
    ("notification", "assets/audio/alerts/notification.wav", AudioChannel::Ui, 0.7, false, "General notification"),
    ("mail_received", "assets/audio/alerts/mail_received.wav", AudioChannel::Ui, 0.8, false, "New mail received"),
    ("target_acquired", "assets/audio/alerts/target_acquired.wav", AudioChannel::Combat, 0.85, false, "Target acquired"),
    ("enemy_detected", "assets/audio/alerts/enemy_detected.wav", AudioChannel::Combat, 0.9, false, "Enemy detected nearby"),
    ("alarm", "assets/audio/alerts/alarm.wav", AudioChannel::Alert, 0.95, false, "System alarm"),
    // Special weapons
    ("special_weapon_default", "assets/audio/special_weapons/special_weapon_default.wav", AudioChannel::Combat, 1.0, false, "Generic special weapon sound"),
    ("special_weapon_ion_blast", "assets/audio/special_weapons/ion_blast.wav", AudioChannel::Combat, 1.0, false, "Ion blast special weapon"),
    ("special_weapon_emp_surge", "assets/audio/special_weapons/emp_surge.wav", AudioChannel::Combat, 0.95, false, "EMP surge special weapon"),
    ("special_weapon_focus_fire", "assets/audio/special_weapons/focus_fire.wav", AudioChannel::Combat, 1.0, false, "Focus fire special weapon"),
    // Music
    ("music_mainmenu", "assets/audio/music/mainmenu.wav", AudioChannel::Music, 0.5, true, "Main menu music"),
    ("music_exploration", "assets/audio/music/exploration.wav", AudioChannel::Music, 0.45, true, "Space exploration ambient"),
    ("music_combat", "assets/audio/music/combat.wav", AudioChannel::Combat, 0.55, true, "Combat music"),
    ("music_planet", "assets/audio/music/planet.wav", AudioChannel::Music, 0.4, true, "Planet surface music"),
];

impl SoundManifest {
    /// Empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The game's built-in sound table.
    #[must_use]
    pub fn builtin() -> Self {
        let sounds = BUILTIN_SOUNDS
            .iter()
            .map(|&(name, path, category, volume, looping, description)| {
                (
                    name.to_string(),
                    SoundSpec {
                        path: path.to_string(),
                        category,
                        volume,
                        looping,
                        description: description.to_string(),
                    },
                )
            })
            .collect();
        Self { sounds }
    }

    /// Parses a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::InvalidManifest`] on malformed TOML, a missing
    /// `path` or an unknown `category`.
    pub fn from_toml_str(text: &str) -> AudioResult<Self> {
        toml::from_str(text).map_err(|e| AudioError::InvalidManifest(e.to_string()))
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns [`AudioError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> AudioResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| AudioError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Looks up a sound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SoundSpec> {
        self.sounds.get(name)
    }

    /// Is `name` in the manifest?
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.sounds.contains_key(name)
    }

    /// Number of sounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// Is the manifest empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }

    /// Sound names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sounds.keys().map(String::as_str)
    }

    /// Sounds mixed on `channel`, sorted by name.
    pub fn sounds_in(&self, channel: AudioChannel) -> impl Iterator<Item = (&str, &SoundSpec)> {
        self.sounds
            .iter()
            .filter(move |(_, spec)| spec.category == channel)
            .map(|(name, spec)| (name.as_str(), spec))
    }

    /// Adds or replaces a sound. Returns the previous entry.
    pub fn insert(&mut self, name: impl Into<String>, spec: SoundSpec) -> Option<SoundSpec> {
        self.sounds.insert(name.into(), spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        let manifest = SoundManifest::builtin();
        assert_eq!(manifest.len(), BUILTIN_SOUNDS.len());

        let crit = manifest.get("critical_hit").unwrap();
        assert_eq!(crit.category, AudioChannel::Combat);
        assert_eq!(crit.volume, 0.95);
        assert!(!crit.looping);

        // Trading sounds mix on the UI channel
        assert_eq!(manifest.get("purchase").unwrap().category, AudioChannel::Ui);
        assert!(manifest.get("music_combat").unwrap().looping);
    }

    #[test]
    fn test_builtin_names_unique() {
        let mut names: Vec<_> = BUILTIN_SOUNDS.iter().map(|s| s.0).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BUILTIN_SOUNDS.len());
    }

    #[test]
    fn test_sounds_in_channel() {
        let manifest = SoundManifest::builtin();
        let music: Vec<_> = manifest.sounds_in(AudioChannel::Music).map(|(n, _)| n).collect();
        assert_eq!(music, ["music_exploration", "music_mainmenu", "music_planet"]);
        assert_eq!(manifest.sounds_in(AudioChannel::Ambient).count(), 0);
    }

    #[test]
    fn test_toml_defaults() {
        let manifest = SoundManifest::from_toml_str(
            r#"
            [sounds.beep]
            path = "beep.wav"
            category = "alert"
            "#,
        )
        .unwrap();

        let beep = manifest.get("beep").unwrap();
        assert_eq!(beep.volume, 1.0);
        assert!(!beep.looping);
        assert_eq!(beep.description, "");
        assert!(manifest.contains("beep"));
        assert!(!manifest.contains("boop"));
    }

    #[test]
    fn test_toml_unknown_category_rejected() {
        let result = SoundManifest::from_toml_str(
            r#"
            [sounds.beep]
            path = "beep.wav"
            category = "bass"
            "#,
        );
        assert!(matches!(result, Err(AudioError::InvalidManifest(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SoundManifest::load("/definitely/not/here.toml");
        assert!(matches!(result, Err(AudioError::Io { .. })));
    }

    #[test]
    fn test_insert_replaces() {
        let mut manifest = SoundManifest::new();
        assert!(manifest.is_empty());
        let spec = SoundSpec {
            path: "a.wav".to_string(),
            category: AudioChannel::Ui,
            volume: 0.5,
            looping: false,
            description: String::new(),
        };
        assert!(manifest.insert("a", spec.clone()).is_none());
        assert_eq!(manifest.insert("a", spec.clone()), Some(spec));
        assert_eq!(manifest.names().collect::<Vec<_>>(), ["a"]);
    }
}
