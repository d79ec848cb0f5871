//! # Effects Orchestrator
//!
//! One gameplay call fans out to the catalog, the mixer and the particle
//! system. Response time: same frame.
//!
//! ## Flow
//!
//! ```text
//! trigger_effect(category, name, location, intensity)
//!     │
//!     ├─ disabled? ───────────────────────────► false
//!     ├─ EffectCatalog::fire (lookup + spam) ─► false if rejected
//!     ├─ AudioChannelMixer::play_effect_sound(audio, intensity)
//!     ├─ ParticleSystem::create_effect(recipe, x, y, intensity)
//!     └─► true
//! ```
//!
//! Audio is issued before the visual. Neither outcome changes the return
//! value once the catalog accepted the event.
//!
//! ## Ownership
//!
//! There is no process-wide instance. Build one and hand it to every view,
//! or share it through [`SharedOrchestrator`].

use std::sync::Arc;

use parking_lot::Mutex;
use starfx_audio::{AudioBackend, AudioChannel, AudioChannelMixer, SoundManifest};
use starfx_particles::{ParticleRenderer, ParticleSystem};
use tracing::{debug, info, warn};

use crate::catalog::EffectCatalog;
use crate::category::EffectCategory;
use crate::clock::{Clock, MonotonicClock};
use crate::config::EffectsConfig;
use crate::error::EffectsResult;

/// Orchestrator behind a lock, for hosts that reach it from several places.
pub type SharedOrchestrator<A, C = MonotonicClock> = Arc<Mutex<EffectsOrchestrator<A, C>>>;

/// Snapshot of orchestrator state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectStats {
    /// Active catalog records.
    pub active_effects: usize,
    /// Live emitters.
    pub particle_emitters: usize,
    /// Live particles.
    pub total_particles: usize,
}

/// Routes semantic game events to sound and particles.
pub struct EffectsOrchestrator<A: AudioBackend, C: Clock = MonotonicClock> {
    /// Event tables and activity records.
    catalog: EffectCatalog<C>,
    /// Sound playback.
    mixer: AudioChannelMixer<A>,
    /// Particle simulation.
    particles: ParticleSystem,
    /// Global kill switch.
    enabled: bool,
}

impl<A: AudioBackend> EffectsOrchestrator<A, MonotonicClock> {
    /// Default configuration, built-in sounds and a monotonic clock.
    #[must_use]
    pub fn with_backend(backend: A) -> Self {
        Self::build(
            &EffectsConfig::default(),
            SoundManifest::builtin(),
            backend,
            MonotonicClock::new(),
        )
    }
}

impl<A: AudioBackend, C: Clock> EffectsOrchestrator<A, C> {
    /// Builds an orchestrator from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EffectsError::InvalidConfig`] if the configuration is invalid.
    ///
    /// [`EffectsError::InvalidConfig`]: crate::error::EffectsError::InvalidConfig
    pub fn new(config: &EffectsConfig, manifest: SoundManifest, backend: A, clock: C) -> EffectsResult<Self> {
        let mut config = config.clone();
        config.validate()?;
        Ok(Self::build(&config, manifest, backend, clock))
    }

    fn build(config: &EffectsConfig, manifest: SoundManifest, backend: A, clock: C) -> Self {
        let mut mixer = AudioChannelMixer::with_volumes(backend, manifest, config.channels);
        if !config.enabled {
            mixer.disable();
        }

        info!(
            enabled = config.enabled,
            max_particles = config.max_particles,
            "effects orchestrator initialized"
        );

        Self {
            catalog: EffectCatalog::with_spam_window(clock, config.spam_window()),
            mixer,
            particles: ParticleSystem::with_seed(config.max_particles, config.rng_seed),
            enabled: config.enabled,
        }
    }

    /// Wraps this orchestrator for shared use.
    #[must_use]
    pub fn into_shared(self) -> SharedOrchestrator<A, C> {
        Arc::new(Mutex::new(self))
    }

    /// Fires `name` in `category` at `location`.
    ///
    /// Returns false if disabled, unknown or suppressed. Audio and particle
    /// failures do not affect the result.
    pub fn trigger_effect(
        &mut self,
        category: EffectCategory,
        name: &str,
        location: [f32; 2],
        intensity: f32,
    ) -> bool {
        if !self.enabled {
            return false;
        }

        let Some(entry) = self.catalog.fire(category, name, location, intensity) else {
            return false;
        };

        if let Some(audio) = entry.audio {
            self.mixer.play_effect_sound(audio, intensity);
        }
        if let Some(visual) = entry.visual {
            let [x, y] = location;
            if !self.particles.create_effect(visual.recipe, x, y, intensity) {
                debug!(name, visual = visual.id, "particle budget full, visual skipped");
            }
        }

        true
    }

    /// Like [`Self::trigger_effect`] with the category given by name.
    ///
    /// An unknown category logs a warning and returns false.
    pub fn trigger_effect_by_name(&mut self, category: &str, name: &str, location: [f32; 2], intensity: f32) -> bool {
        match category.parse::<EffectCategory>() {
            Ok(category) => self.trigger_effect(category, name, location, intensity),
            Err(err) => {
                warn!(%err, name, "effect not triggered");
                false
            }
        }
    }

    /// Advances catalog expiry and the particle simulation.
    pub fn update(&mut self, dt: f32) {
        self.catalog.update();
        self.particles.update(dt);
    }

    /// Draws every live particle.
    pub fn draw<R: ParticleRenderer + ?Sized>(&self, renderer: &mut R) {
        self.particles.draw(renderer);
    }

    // ========================================================================
    // COMBAT
    // ========================================================================

    /// Fires a combat event.
    pub fn trigger_combat_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_effect(EffectCategory::Combat, name, location, intensity)
    }

    /// The player's weapon fired. Usual intensity 1.0.
    pub fn trigger_player_fires(&mut self, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_combat_effect("player_fires", location, intensity)
    }

    /// An enemy weapon fired. Usual intensity 1.0.
    pub fn trigger_enemy_fires(&mut self, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_combat_effect("enemy_fires", location, intensity)
    }

    /// Shields absorbed a hit, on the player's ship or the target's.
    /// Usual intensity 1.0.
    pub fn trigger_shield_hit(&mut self, location: [f32; 2], is_player: bool, intensity: f32) -> bool {
        let name = if is_player { "shield_hit_player" } else { "shield_hit_target" };
        self.trigger_combat_effect(name, location, intensity)
    }

    /// Hull took damage, on the player's ship or the target's.
    /// Usual intensity 1.0.
    pub fn trigger_hull_damage(&mut self, location: [f32; 2], is_player: bool, intensity: f32) -> bool {
        let name = if is_player { "hull_damage_player" } else { "hull_damage_target" };
        self.trigger_combat_effect(name, location, intensity)
    }

    /// A critical hit landed. Usual intensity 1.5.
    pub fn trigger_critical_hit(&mut self, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_combat_effect("critical_hit", location, intensity)
    }

    /// A special weapon fired. Usual intensity 1.4.
    pub fn trigger_special_weapon(&mut self, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_combat_effect("special_weapon_fire", location, intensity)
    }

    /// Combat won.
    pub fn trigger_combat_victory(&mut self, location: [f32; 2]) -> bool {
        self.trigger_combat_effect("combat_victory", location, 1.2)
    }

    /// Combat lost.
    pub fn trigger_combat_defeat(&mut self, location: [f32; 2]) -> bool {
        self.trigger_combat_effect("combat_defeat", location, 1.1)
    }

    // ========================================================================
    // TRADING
    // ========================================================================

    /// Fires a trading event.
    pub fn trigger_trading_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_effect(EffectCategory::Trading, name, location, intensity)
    }

    /// Item purchased.
    pub fn trigger_purchase(&mut self, location: [f32; 2]) -> bool {
        self.trigger_trading_effect("purchase", location, 0.9)
    }

    /// Item sold.
    pub fn trigger_sale(&mut self, location: [f32; 2]) -> bool {
        self.trigger_trading_effect("sale", location, 0.9)
    }

    /// Trade contract completed.
    pub fn trigger_contract_complete(&mut self, location: [f32; 2]) -> bool {
        self.trigger_trading_effect("contract_complete", location, 1.1)
    }

    // ========================================================================
    // SHIP
    // ========================================================================

    /// Fires a ship event.
    pub fn trigger_ship_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_effect(EffectCategory::Ship, name, location, intensity)
    }

    /// Module installed.
    pub fn trigger_module_install(&mut self, location: [f32; 2]) -> bool {
        self.trigger_ship_effect("module_install", location, 1.0)
    }

    /// Upgrade installed.
    pub fn trigger_upgrade_install(&mut self, location: [f32; 2]) -> bool {
        self.trigger_ship_effect("upgrade_install", location, 1.0)
    }

    /// Warp jump executed.
    pub fn trigger_jump(&mut self, location: [f32; 2]) -> bool {
        self.trigger_ship_effect("jump_execute", location, 1.2)
    }

    /// Shields are low.
    pub fn trigger_shield_low(&mut self, location: [f32; 2]) -> bool {
        self.trigger_ship_effect("shield_low", location, 1.1)
    }

    // ========================================================================
    // PLANET
    // ========================================================================

    /// Fires a planet event.
    pub fn trigger_planet_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_effect(EffectCategory::Planet, name, location, intensity)
    }

    /// Docked at a planet.
    pub fn trigger_planet_docking(&mut self, location: [f32; 2]) -> bool {
        self.trigger_planet_effect("planet_docking", location, 0.9)
    }

    /// Planet scanned.
    pub fn trigger_planet_scan(&mut self, location: [f32; 2]) -> bool {
        self.trigger_planet_effect("planet_scan", location, 0.7)
    }

    // ========================================================================
    // ALERT
    // ========================================================================

    /// Fires an alert event.
    pub fn trigger_alert_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_effect(EffectCategory::Alert, name, location, intensity)
    }

    /// Target acquired.
    pub fn trigger_target_acquired(&mut self, location: [f32; 2]) -> bool {
        self.trigger_alert_effect("target_acquired", location, 1.0)
    }

    /// Enemy detected nearby.
    pub fn trigger_enemy_detected(&mut self, location: [f32; 2]) -> bool {
        self.trigger_alert_effect("enemy_detected", location, 1.2)
    }

    /// System alarm.
    pub fn trigger_alarm(&mut self, location: [f32; 2]) -> bool {
        self.trigger_alert_effect("alarm", location, 1.4)
    }

    // ========================================================================
    // UI
    // ========================================================================

    /// Fires a UI event.
    pub fn trigger_ui_effect(&mut self, name: &str, location: [f32; 2], intensity: f32) -> bool {
        self.trigger_effect(EffectCategory::Ui, name, location, intensity)
    }

    /// Action confirmed.
    pub fn trigger_ui_confirm(&mut self, location: [f32; 2]) -> bool {
        self.trigger_ui_effect("confirm", location, 0.8)
    }

    /// Error feedback.
    pub fn trigger_ui_error(&mut self, location: [f32; 2]) -> bool {
        self.trigger_ui_effect("error", location, 1.0)
    }

    // ========================================================================
    // CONTROL
    // ========================================================================

    /// Turns effects and audio on.
    pub fn enable(&mut self) {
        self.enabled = true;
        self.mixer.enable();
        info!("effects enabled");
    }

    /// Turns effects and audio off. Triggers return false with no side effects.
    pub fn disable(&mut self) {
        self.enabled = false;
        self.mixer.disable();
        info!("effects disabled");
    }

    /// Are effects on?
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Sets a channel volume, clamped to `[0, 1]`.
    pub fn set_effect_volume(&mut self, channel: AudioChannel, volume: f32) {
        self.mixer.set_channel_volume(channel, volume);
    }

    /// Forgets catalog records and drops every particle.
    pub fn clear_all_effects(&mut self) {
        self.catalog.clear_all_effects();
        self.particles.clear();
    }

    /// Current statistics.
    #[must_use]
    pub fn stats(&self) -> EffectStats {
        EffectStats {
            active_effects: self.catalog.active_effects().len(),
            particle_emitters: self.particles.emitter_count(),
            total_particles: self.particles.particle_count(),
        }
    }

    /// The catalog.
    #[must_use]
    pub const fn catalog(&self) -> &EffectCatalog<C> {
        &self.catalog
    }

    /// The mixer.
    #[must_use]
    pub const fn mixer(&self) -> &AudioChannelMixer<A> {
        &self.mixer
    }

    /// The mixer, mutably.
    pub fn mixer_mut(&mut self) -> &mut AudioChannelMixer<A> {
        &mut self.mixer
    }

    /// The particle system.
    #[must_use]
    pub const fn particles(&self) -> &ParticleSystem {
        &self.particles
    }
}

impl<A: AudioBackend + std::fmt::Debug, C: Clock + std::fmt::Debug> std::fmt::Debug for EffectsOrchestrator<A, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EffectsOrchestrator")
            .field("catalog", &self.catalog)
            .field("mixer", &self.mixer)
            .field("particles", &self.particles)
            .field("enabled", &self.enabled)
            .finish()
    }
}
