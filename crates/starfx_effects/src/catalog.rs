//! # Effect Catalog
//!
//! Static per-category tables mapping a semantic event name to its sound,
//! its visual and how long it counts as active.
//!
//! ## Trigger Rules
//!
//! 1. The name must exist in that category's table
//! 2. The same name cannot fire twice within the spam window (50 ms default)
//! 3. A fired event upserts an [`ActiveEffectRecord`] with
//!    `intensity × baseline` rounded to 4 decimals
//!
//! Records are bookkeeping only. Sound and particles fire at trigger time.

use std::collections::HashMap;
use std::time::Duration;

use starfx_particles::ParticleRecipe;
use tracing::{debug, info};

use crate::category::EffectCategory;
use crate::clock::Clock;

use crate::category::EffectCategory as Cat;
use starfx_particles::ParticleRecipe as R;

/// Default spam suppression window.
pub const DEFAULT_SPAM_WINDOW: Duration = Duration::from_millis(50);

/// A named visual and the particle recipe that renders it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisualSpec {
    /// Visual identifier.
    pub id: &'static str,
    /// Recipe the particle system uses for it.
    pub recipe: ParticleRecipe,
}

/// Static description of one semantic event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectCatalogEntry {
    /// Event name, unique across all categories.
    pub name: &'static str,
    /// Owning category.
    pub category: EffectCategory,
    /// Sound manifest name.
    pub audio: Option<&'static str>,
    /// Particle visual.
    pub visual: Option<VisualSpec>,
    /// Seconds the event counts as active.
    pub duration: f32,
    /// Baseline intensity multiplier.
    pub intensity: f32,
}

/// Bookkeeping for a recently fired event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveEffectRecord {
    /// Screen location the event fired at.
    pub location: [f32; 2],
    /// `intensity × baseline`, rounded to 4 decimals.
    pub intensity: f32,
    /// Seconds before expiry. Non-positive never expires.
    pub duration: f32,
    /// Clock reading when fired.
    pub timestamp: Duration,
}

impl ActiveEffectRecord {
    fn expired(&self, now: Duration) -> bool {
        self.duration > 0.0 && now.saturating_sub(self.timestamp).as_secs_f32() > self.duration
    }
}

const fn fx(
    name: &'static str,
    category: EffectCategory,
    audio: &'static str,
    visual: &'static str,
    recipe: ParticleRecipe,
    duration: f32,
    intensity: f32,
) -> EffectCatalogEntry {
    EffectCatalogEntry {
        name,
        category,
        audio: Some(audio),
        visual: Some(VisualSpec { id: visual, recipe }),
        duration,
        intensity,
    }
}

#[rustfmt::skip]
const COMBAT_EFFECTS: &[EffectCatalogEntry] = &[
    fx("player_fires", Cat::Combat, "combat_fire", "laser_to_target", R::Laser, 0.18, 1.0),
    fx("enemy_fires", Cat::Combat, "combat_fire", "laser_to_player", R::Laser, 0.18, 0.85),
    fx("shield_hit_target", Cat::Combat, "shield_hit", "shield_target", R::Shield, 0.32, 1.0),
    fx("shield_hit_player", Cat::Combat, "shield_hit", "shield_player", R::Shield, 0.32, 1.2),
    fx("hull_damage_target", Cat::Combat, "hull_damage", "hull_target", R::ExplosionSmall, 0.36, 1.0),
    fx("hull_damage_player", Cat::Combat, "hull_damage", "hull_player", R::ExplosionSmall, 0.36, 1.3),
    fx("critical_hit", Cat::Combat, "critical_hit", "critical_hit", R::ExplosionLarge, 0.5, 1.5),
    fx("special_weapon_ready", Cat::Combat, "special_weapon_ready", "module_active", R::Scan, 0.2, 0.8),
    fx("special_weapon_fire", Cat::Combat, "special_weapon_fire", "special_weapon", R::Pulse, 0.55, 1.4),
    fx("combat_start", Cat::Combat, "combat_start", "combat_start", R::Generic, 0.3, 1.0),
    fx("combat_victory", Cat::Combat, "combat_victory", "module_active", R::Scan, 1.0, 1.2),
    fx("combat_defeat", Cat::Combat, "combat_defeat", "hull_damaged", R::ExplosionSmall, 0.8, 1.1),
];

#[rustfmt::skip]
const TRADING_EFFECTS: &[EffectCatalogEntry] = &[
    fx("purchase", Cat::Trading, "purchase", "module_active", R::Scan, 0.4, 0.9),
    fx("sale", Cat::Trading, "sale", "module_active", R::Scan, 0.4, 0.9),
    fx("contract_accept", Cat::Trading, "contract_accept", "module_active", R::Scan, 0.3, 0.8),
    fx("contract_complete", Cat::Trading, "contract_complete", "special_weapon", R::Pulse, 0.55, 1.1),
    fx("credits_transfer", Cat::Trading, "credits_transfer", "scan_pulse", R::Pulse, 0.4, 0.7),
];

#[rustfmt::skip]
const SHIP_EFFECTS: &[EffectCatalogEntry] = &[
    fx("module_install", Cat::Ship, "module_install", "module_active", R::Scan, 0.35, 1.0),
    fx("module_remove", Cat::Ship, "module_remove", "module_cooldown", R::Scan, 0.25, 0.8),
    fx("upgrade_install", Cat::Ship, "upgrade_install", "scan_pulse", R::Pulse, 0.4, 1.0),
    fx("engine_startup", Cat::Ship, "engine_startup", "pulse_wave", R::Pulse, 0.5, 0.9),
    fx("engine_running", Cat::Ship, "engine_running", "efficiency_pulse", R::Pulse, 0.2, 0.5),
    fx("jump_charge", Cat::Ship, "jump_charge", "interference_waves", R::Ion, 1.0, 1.1),
    fx("jump_execute", Cat::Ship, "jump_execute", "pulse_wave", R::Pulse, 0.6, 1.2),
    fx("shield_activated", Cat::Ship, "shield_active", "shield_impact", R::Shield, 0.32, 0.8),
    fx("shield_low", Cat::Ship, "shield_low", "shields_low", R::Shield, 0.5, 1.1),
    fx("hull_breach", Cat::Ship, "hull_breach", "hull_damaged", R::ExplosionSmall, 0.8, 1.3),
];

#[rustfmt::skip]
const PLANET_EFFECTS: &[EffectCatalogEntry] = &[
    fx("planet_docking", Cat::Planet, "planet_docking", "scan_pulse", R::Pulse, 0.4, 0.9),
    fx("planet_departure", Cat::Planet, "planet_departure", "pulse_wave", R::Pulse, 0.3, 0.8),
    fx("planet_scan", Cat::Planet, "planet_scan", "scan_pulse", R::Pulse, 0.35, 0.7),
    fx("orbit_alert", Cat::Planet, "orbit_alert", "module_cooldown", R::Scan, 0.4, 1.0),
];

#[rustfmt::skip]
const ALERT_EFFECTS: &[EffectCatalogEntry] = &[
    fx("target_acquired", Cat::Alert, "target_acquired", "module_active", R::Scan, 0.3, 1.0),
    fx("enemy_detected", Cat::Alert, "enemy_detected", "shields_low", R::Shield, 0.4, 1.2),
    fx("alarm", Cat::Alert, "alarm", "rapid_flash", R::Pulse, 0.2, 1.4),
    fx("notification", Cat::Alert, "notification", "module_active", R::Scan, 0.2, 0.7),
    fx("mail_received", Cat::Alert, "mail_received", "scan_pulse", R::Pulse, 0.3, 0.8),
];

#[rustfmt::skip]
const UI_EFFECTS: &[EffectCatalogEntry] = &[
    fx("menu_select", Cat::Ui, "menu_select", "module_active", R::Scan, 0.15, 0.6),
    fx("menu_hover", Cat::Ui, "menu_hover", "scan_pulse", R::Pulse, 0.1, 0.4),
    fx("confirm", Cat::Ui, "confirm", "module_active", R::Scan, 0.25, 0.8),
    fx("cancel", Cat::Ui, "cancel", "module_cooldown", R::Scan, 0.15, 0.6),
    fx("error", Cat::Ui, "error", "shields_low", R::Shield, 0.3, 1.0),
    fx("success", Cat::Ui, "success", "module_active", R::Scan, 0.35, 0.95),
];

/// The table for `category`.
#[must_use]
pub const fn entries_in(category: EffectCategory) -> &'static [EffectCatalogEntry] {
    match category {
        EffectCategory::Combat => COMBAT_EFFECTS,
        EffectCategory::Trading => TRADING_EFFECTS,
        EffectCategory::Ship => SHIP_EFFECTS,
        EffectCategory::Planet => PLANET_EFFECTS,
        EffectCategory::Alert => ALERT_EFFECTS,
        EffectCategory::Ui => UI_EFFECTS,
    }
}

/// Entry for `name` in `category` only.
#[must_use]
pub fn find_entry(category: EffectCategory, name: &str) -> Option<&'static EffectCatalogEntry> {
    entries_in(category).iter().find(|e| e.name == name)
}

/// Entry for `name` in any category (first match in category order).
#[must_use]
pub fn get_effect_config(name: &str) -> Option<&'static EffectCatalogEntry> {
    EffectCategory::ALL
        .into_iter()
        .find_map(|category| find_entry(category, name))
}

/// Catalog of semantic events plus their recent-activity records.
#[derive(Debug)]
pub struct EffectCatalog<C: Clock> {
    /// Time source for suppression and expiry.
    clock: C,
    /// Minimum gap between two firings of one name.
    spam_window: Duration,
    /// Name to most recent record.
    active: HashMap<String, ActiveEffectRecord>,
    /// Name to last firing time; outlives record expiry.
    last_trigger: HashMap<String, Duration>,
}

impl<C: Clock> EffectCatalog<C> {
    /// Creates a catalog with the default spam window.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_spam_window(clock, DEFAULT_SPAM_WINDOW)
    }

    /// Creates a catalog with an explicit spam window.
    #[must_use]
    pub fn with_spam_window(clock: C, spam_window: Duration) -> Self {
        info!(spam_window_ms = spam_window.as_millis() as u64, "effect catalog initialized");

        Self {
            clock,
            spam_window,
            active: HashMap::new(),
            last_trigger: HashMap::new(),
        }
    }

    /// Fires `name` in `category`. Returns the entry if it was recorded.
    pub fn fire(
        &mut self,
        category: EffectCategory,
        name: &str,
        location: [f32; 2],
        intensity: f32,
    ) -> Option<&'static EffectCatalogEntry> {
        let Some(entry) = find_entry(category, name) else {
            debug!(%category, name, "unknown effect");
            return None;
        };

        let now = self.clock.now();
        if let Some(&last) = self.last_trigger.get(name) {
            if now.saturating_sub(last) < self.spam_window {
                debug!(%category, name, "effect suppressed inside spam window");
                return None;
            }
        }

        let record = ActiveEffectRecord {
            location,
            intensity: round4(intensity * entry.intensity),
            duration: entry.duration,
            timestamp: now,
        };
        self.active.insert(name.to_string(), record);
        self.last_trigger.insert(name.to_string(), now);

        debug!(%category, name, intensity = record.intensity, "effect recorded");
        Some(entry)
    }

    /// Fires `name` in `category`. True if it was recorded.
    pub fn trigger(&mut self, category: EffectCategory, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.fire(category, name, location, intensity).is_some()
    }

    /// Fires a combat event.
    pub fn trigger_combat_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger(EffectCategory::Combat, name, location, intensity)
    }

    /// Fires a trading event.
    pub fn trigger_trading_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger(EffectCategory::Trading, name, location, intensity)
    }

    /// Fires a ship event.
    pub fn trigger_ship_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger(EffectCategory::Ship, name, location, intensity)
    }

    /// Fires a planet event.
    pub fn trigger_planet_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger(EffectCategory::Planet, name, location, intensity)
    }

    /// Fires an alert event.
    pub fn trigger_alert_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger(EffectCategory::Alert, name, location, intensity)
    }

    /// Fires a UI event.
    pub fn trigger_ui_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger(EffectCategory::Ui, name, location, intensity)
    }

    /// Drops records older than their duration.
    pub fn update(&mut self) {
        let now = self.clock.now();
        self.active.retain(|_, record| !record.expired(now));
    }

    /// Is `name` still active?
    #[must_use]
    pub fn is_effect_active(&self, name: &str) -> bool {
        self.active.contains_key(name)
    }

    /// Record for `name`, if active.
    #[must_use]
    pub fn active_effect(&self, name: &str) -> Option<&ActiveEffectRecord> {
        self.active.get(name)
    }

    /// Every active record.
    #[must_use]
    pub const fn active_effects(&self) -> &HashMap<String, ActiveEffectRecord> {
        &self.active
    }

    /// Forgets every record and all spam state.
    pub fn clear_all_effects(&mut self) {
        self.active.clear();
        self.last_trigger.clear();
    }

    /// Current spam window.
    #[must_use]
    pub const fn spam_window(&self) -> Duration {
        self.spam_window
    }

    /// Replaces the spam window.
    pub fn set_spam_window(&mut self, window: Duration) {
        self.spam_window = window;
    }

    /// The time source.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

fn round4(value: f32) -> f32 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn catalog() -> (EffectCatalog<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (EffectCatalog::new(clock.clone()), clock)
    }

    #[test]
    fn test_table_sizes() {
        let sizes: Vec<_> = EffectCategory::ALL
            .into_iter()
            .map(|c| entries_in(c).len())
            .collect();
        assert_eq!(sizes, [12, 5, 10, 4, 5, 6]);
    }

    /// Recipe family a visual id names, first keyword wins.
    fn family_of(id: &str) -> Option<ParticleRecipe> {
        if id.contains("explosion") {
            Some(if id.contains("large") {
                ParticleRecipe::ExplosionLarge
            } else {
                ParticleRecipe::ExplosionSmall
            })
        } else if id.contains("shield") {
            Some(ParticleRecipe::Shield)
        } else if id.contains("laser") {
            Some(ParticleRecipe::Laser)
        } else if id.contains("pulse") {
            Some(ParticleRecipe::Pulse)
        } else if id.contains("module") || id.contains("scan") {
            Some(ParticleRecipe::Scan)
        } else if id.contains("ion") {
            Some(ParticleRecipe::Ion)
        } else {
            None
        }
    }

    #[test]
    fn test_visual_tags_follow_keyword_priority() {
        let mut checked = 0;
        for category in EffectCategory::ALL {
            for entry in entries_in(category) {
                let visual = entry.visual.unwrap();
                if let Some(family) = family_of(visual.id) {
                    assert_eq!(visual.recipe, family, "{} ({})", entry.name, visual.id);
                    checked += 1;
                }
            }
        }
        assert!(checked > 0);
        assert_eq!(
            get_effect_config("planet_scan").unwrap().visual.unwrap().recipe,
            ParticleRecipe::Pulse
        );
    }

    #[test]
    fn test_names_unique_and_categories_consistent() {
        let mut names = Vec::new();
        for category in EffectCategory::ALL {
            for entry in entries_in(category) {
                assert_eq!(entry.category, category, "{}", entry.name);
                names.push(entry.name);
            }
        }
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_critical_hit_is_large_explosion() {
        let entry = get_effect_config("critical_hit").unwrap();
        assert_eq!(entry.category, EffectCategory::Combat);
        assert_eq!(entry.audio, Some("critical_hit"));
        assert_eq!(entry.visual.unwrap().recipe, ParticleRecipe::ExplosionLarge);
        assert_eq!(entry.duration, 0.5);
        assert_eq!(entry.intensity, 1.5);
    }

    #[test]
    fn test_trigger_records_scaled_intensity() {
        let (mut catalog, _) = catalog();
        assert!(catalog.trigger_combat_effect("hull_damage_player", [5.0, 6.0], 0.7));

        let record = catalog.active_effect("hull_damage_player").unwrap();
        // 0.7 × 1.3
        assert_eq!(record.intensity, 0.91);
        assert_eq!(record.duration, 0.36);
        assert_eq!(record.location, [5.0, 6.0]);
    }

    #[test]
    fn test_intensity_not_clamped() {
        let (mut catalog, _) = catalog();
        assert!(catalog.trigger_alert_effect("alarm", [0.0, 0.0], 3.0));
        assert_eq!(catalog.active_effect("alarm").unwrap().intensity, 4.2);
    }

    #[test]
    fn test_wrong_category_rejected() {
        let (mut catalog, _) = catalog();
        assert!(!catalog.trigger_ui_effect("critical_hit", [0.0, 0.0], 1.0));
        assert!(!catalog.trigger_combat_effect("nonexistent", [0.0, 0.0], 1.0));
        assert!(catalog.active_effects().is_empty());
    }

    #[test]
    fn test_spam_window() {
        let (mut catalog, clock) = catalog();
        assert!(catalog.trigger_ui_effect("confirm", [0.0, 0.0], 1.0));

        clock.advance(Duration::from_millis(49));
        assert!(!catalog.trigger_ui_effect("confirm", [9.0, 9.0], 1.0));
        // the rejected call left the record untouched
        assert_eq!(catalog.active_effect("confirm").unwrap().location, [0.0, 0.0]);

        clock.advance(Duration::from_millis(1));
        assert!(catalog.trigger_ui_effect("confirm", [9.0, 9.0], 1.0));
        assert_eq!(catalog.active_effect("confirm").unwrap().location, [9.0, 9.0]);
    }

    #[test]
    fn test_spam_window_is_per_name() {
        let (mut catalog, _) = catalog();
        assert!(catalog.trigger_ui_effect("confirm", [0.0, 0.0], 1.0));
        assert!(catalog.trigger_ui_effect("cancel", [0.0, 0.0], 1.0));
    }

    #[test]
    fn test_update_expires_by_duration() {
        let (mut catalog, clock) = catalog();
        catalog.trigger_combat_effect("player_fires", [0.0, 0.0], 1.0);
        catalog.trigger_combat_effect("combat_victory", [0.0, 0.0], 1.0);

        clock.advance(Duration::from_millis(200));
        catalog.update();
        assert!(!catalog.is_effect_active("player_fires"));
        assert!(catalog.is_effect_active("combat_victory"));

        clock.advance(Duration::from_millis(900));
        catalog.update();
        assert!(catalog.active_effects().is_empty());
    }

    #[test]
    fn test_spam_state_outlives_expiry() {
        let (mut catalog, clock) = catalog();
        catalog.set_spam_window(Duration::from_secs(1));
        catalog.trigger_combat_effect("player_fires", [0.0, 0.0], 1.0);

        clock.advance(Duration::from_millis(500));
        catalog.update();
        assert!(!catalog.is_effect_active("player_fires"));
        assert!(!catalog.trigger_combat_effect("player_fires", [0.0, 0.0], 1.0));
    }

    #[test]
    fn test_clear_all_effects_resets_spam_state() {
        let (mut catalog, _) = catalog();
        catalog.trigger_ship_effect("jump_charge", [0.0, 0.0], 1.0);
        catalog.clear_all_effects();
        assert!(!catalog.is_effect_active("jump_charge"));
        assert!(catalog.trigger_ship_effect("jump_charge", [0.0, 0.0], 1.0));
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123_456), 0.1235);
        assert_eq!(round4(1.0), 1.0);
    }
}
