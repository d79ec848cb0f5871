//! # Particle System
//!
//! Owns every emitter, enforces the global particle budget and draws.
//!
//! ## Frame Contract
//!
//! ```text
//! create_effect()*  ──►  update(dt)  ──►  draw(renderer)
//!   admission check       emit + prune       read only
//! ```
//!
//! The budget is soft: it is checked when an emitter is admitted, counting
//! live particles plus whatever admitted bursts still owe. Admitted bursts
//! always finish; continuous emitters are held to the room left under the cap.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, error, info};

use crate::emitter::{EmitterParams, ParticleEmitter};
use crate::error::ParticleResult;
use crate::recipe::ParticleRecipe;
use crate::render::ParticleRenderer;

/// Default cap on concurrent particles.
pub const DEFAULT_MAX_PARTICLES: usize = 10_000;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 0x5354_4152_4658;

/// Statistics from the particle system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleStats {
    /// Emitters currently owned.
    pub emitters: usize,
    /// Live particles as of the last update.
    pub particles: usize,
    /// Configured particle cap.
    pub max_particles: usize,
    /// Emitters admitted since construction.
    pub admitted_total: u64,
    /// Effects rejected by the budget since construction.
    pub rejected_total: u64,
}

/// Budgeted collection of particle emitters.
#[derive(Debug)]
pub struct ParticleSystem {
    /// Emitters in insertion order.
    emitters: Vec<ParticleEmitter>,
    /// Hard cap checked at admission.
    max_particles: usize,
    /// Live particles as of the last update.
    total_particles: usize,
    /// Shared randomness for every emitter.
    rng: StdRng,
    /// Lifetime counters.
    admitted_total: u64,
    rejected_total: u64,
}

impl ParticleSystem {
    /// Creates a system with the default seed.
    #[must_use]
    pub fn new(max_particles: usize) -> Self {
        Self::with_seed(max_particles, DEFAULT_SEED)
    }

    /// Creates a system with an explicit RNG seed.
    #[must_use]
    pub fn with_seed(max_particles: usize, seed: u64) -> Self {
        info!(max_particles, seed, "particle system initialized");

        Self {
            emitters: Vec::with_capacity(64),
            max_particles,
            total_particles: 0,
            rng: StdRng::seed_from_u64(seed),
            admitted_total: 0,
            rejected_total: 0,
        }
    }

    /// Creates a burst emitter for `recipe` centered at `(x, y)`.
    ///
    /// Returns false (and changes nothing) when the budget cannot take it.
    pub fn create_effect(&mut self, recipe: ParticleRecipe, x: f32, y: f32, intensity: f32) -> bool {
        let admitted = self.spawn_emitter(recipe.params(intensity), x, y);
        if admitted {
            debug!(%recipe, x, y, intensity, "particle effect created");
        }
        admitted
    }

    /// Like [`Self::create_effect`], resolving the recipe from its name.
    ///
    /// # Errors
    ///
    /// Returns [`ParticleError::UnknownRecipe`] if `name` is not a recipe.
    /// Nothing is admitted in that case.
    ///
    /// [`ParticleError::UnknownRecipe`]: crate::error::ParticleError::UnknownRecipe
    pub fn create_named_effect(&mut self, name: &str, x: f32, y: f32, intensity: f32) -> ParticleResult<bool> {
        let recipe: ParticleRecipe = name.parse()?;
        Ok(self.create_effect(recipe, x, y, intensity))
    }

    /// Admits a raw emitter at `(x, y)`.
    ///
    /// Rejected when the live total already meets the cap, or when live
    /// particles plus owed bursts plus this burst would exceed it.
    pub fn spawn_emitter(&mut self, params: EmitterParams, x: f32, y: f32) -> bool {
        let requested = params.burst_count.unwrap_or(0) as usize;
        let committed = self.committed_particles();

        if self.total_particles >= self.max_particles
            || committed.saturating_add(requested) > self.max_particles
        {
            self.rejected_total += 1;
            debug!(
                committed,
                requested,
                max = self.max_particles,
                "particle budget exhausted, effect rejected"
            );
            return false;
        }

        self.emitters.push(ParticleEmitter::new([x, y], params));
        self.admitted_total += 1;
        true
    }

    /// Advances every emitter by `dt` seconds (negative dt is treated as 0).
    ///
    /// Continuous emitters only fill whatever room the cap leaves, so a long
    /// frame cannot flood the system. An emitter is dropped once it is
    /// inactive and holds no live particles.
    pub fn update(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let mut live: usize = self.emitters.iter().map(ParticleEmitter::particle_count).sum();

        for emitter in &mut self.emitters {
            let before = emitter.particle_count();
            let headroom = u32::try_from(self.max_particles.saturating_sub(live)).unwrap_or(u32::MAX);
            emitter.update_within(dt, headroom, &mut self.rng);
            live = live.saturating_sub(before) + emitter.particle_count();
        }

        self.emitters
            .retain(|emitter| emitter.is_active() || emitter.particle_count() > 0);
        self.total_particles = self.emitters.iter().map(ParticleEmitter::particle_count).sum();
    }

    /// Draws every live particle as a filled disc.
    ///
    /// A renderer failure ends this frame's drawing and is logged.
    pub fn draw<R: ParticleRenderer + ?Sized>(&self, renderer: &mut R) {
        if let Err(err) = self.try_draw(renderer) {
            error!(%err, "failed to draw particles");
        }
    }

    fn try_draw<R: ParticleRenderer + ?Sized>(&self, renderer: &mut R) -> ParticleResult<()> {
        for emitter in &self.emitters {
            for particle in emitter.particles() {
                let alpha = (255.0 * particle.get_alpha()).round() as u8;
                let [r, g, b] = particle.color;
                renderer.draw_circle_filled(
                    particle.position[0],
                    particle.position[1],
                    particle.size,
                    [r, g, b, alpha],
                )?;
            }
        }
        Ok(())
    }

    /// Live particles plus particles still owed by admitted bursts.
    #[must_use]
    pub fn committed_particles(&self) -> usize {
        self.emitters
            .iter()
            .map(|e| e.particle_count() + e.pending_emissions() as usize)
            .sum()
    }

    /// Number of emitters.
    #[must_use]
    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// Live particles as of the last update.
    #[must_use]
    pub const fn particle_count(&self) -> usize {
        self.total_particles
    }

    /// Configured particle cap.
    #[must_use]
    pub const fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// Emitters in insertion order.
    #[must_use]
    pub fn emitters(&self) -> &[ParticleEmitter] {
        &self.emitters
    }

    /// Drops every emitter and particle.
    pub fn clear(&mut self) {
        self.emitters.clear();
        self.total_particles = 0;
        info!("particle system cleared");
    }

    /// Returns current statistics.
    #[must_use]
    pub fn stats(&self) -> ParticleStats {
        ParticleStats {
            emitters: self.emitters.len(),
            particles: self.total_particles,
            max_particles: self.max_particles,
            admitted_total: self.admitted_total,
            rejected_total: self.rejected_total,
        }
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PARTICLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingRenderer;

    const FRAME: f32 = 1.0 / 60.0;

    #[test]
    fn test_create_effect_centers_burst() {
        let mut system = ParticleSystem::new(1000);
        assert!(system.create_effect(ParticleRecipe::ExplosionLarge, 100.0, 100.0, 1.5));

        let emitter = &system.emitters()[0];
        assert_eq!(emitter.origin(), [100.0, 100.0]);
        assert_eq!(emitter.pending_emissions(), 120);
        assert!(emitter.is_active());
    }

    #[test]
    fn test_rejects_when_total_meets_cap() {
        let mut system = ParticleSystem::new(20);
        assert!(system.create_effect(ParticleRecipe::Laser, 0.0, 0.0, 1.0));
        for _ in 0..10 {
            system.update(FRAME);
        }
        assert_eq!(system.particle_count(), 15);

        // 15 live + 15 requested > 20
        assert!(!system.create_effect(ParticleRecipe::Laser, 0.0, 0.0, 1.0));
        assert_eq!(system.emitter_count(), 1);
        assert_eq!(system.stats().rejected_total, 1);
    }

    #[test]
    fn test_finished_emitters_reclaimed() {
        let mut system = ParticleSystem::new(1000);
        system.create_effect(ParticleRecipe::Laser, 0.0, 0.0, 1.0);

        // Laser particles live 0.3s; 1s is plenty
        for _ in 0..60 {
            system.update(FRAME);
        }
        assert_eq!(system.emitter_count(), 0);
        assert_eq!(system.particle_count(), 0);
    }

    #[test]
    fn test_inactive_emitter_kept_while_particles_fade() {
        let mut system = ParticleSystem::new(1000);
        system.create_effect(ParticleRecipe::Laser, 0.0, 0.0, 1.0);

        // 15 particles at 500/s drain within two frames
        system.update(FRAME);
        system.update(FRAME);
        assert!(!system.emitters()[0].is_active());
        assert_eq!(system.emitter_count(), 1);
        assert_eq!(system.particle_count(), 15);
    }

    #[test]
    fn test_negative_dt_clamped() {
        let mut system = ParticleSystem::new(1000);
        system.create_effect(ParticleRecipe::Generic, 0.0, 0.0, 1.0);
        system.update(-5.0);
        assert_eq!(system.particle_count(), 0);
        assert_eq!(system.emitter_count(), 1);
    }

    #[test]
    fn test_draw_is_read_only_with_alpha() {
        let mut system = ParticleSystem::new(1000);
        system.create_effect(ParticleRecipe::Shield, 50.0, 60.0, 1.0);
        system.update(FRAME);

        let mut renderer = RecordingRenderer::new();
        system.draw(&mut renderer);
        let drawn = renderer.circles().len();
        assert_eq!(drawn, system.particle_count());
        assert!(drawn > 0);

        for circle in renderer.circles() {
            assert_eq!(circle.radius, 1.5);
            assert_eq!(&circle.color[..3], &[0, 150, 255]);
            // freshly emitted, nearly opaque
            assert!(circle.color[3] > 200);
        }

        // drawing twice yields the same picture
        let mut again = RecordingRenderer::new();
        system.draw(&mut again);
        assert_eq!(renderer.circles(), again.circles());
    }

    #[test]
    fn test_draw_failure_is_swallowed() {
        let mut system = ParticleSystem::new(1000);
        system.create_effect(ParticleRecipe::Pulse, 0.0, 0.0, 1.0);
        system.update(FRAME);

        let mut renderer = RecordingRenderer::failing_after(2);
        system.draw(&mut renderer);
        assert_eq!(renderer.circles().len(), 2);
    }

    #[test]
    fn test_same_seed_same_simulation() {
        let mut a = ParticleSystem::with_seed(1000, 99);
        let mut b = ParticleSystem::with_seed(1000, 99);
        for system in [&mut a, &mut b] {
            system.create_effect(ParticleRecipe::Ion, 10.0, 10.0, 1.0);
            system.update(FRAME);
            system.update(FRAME);
        }
        assert_eq!(a.emitters()[0].particles(), b.emitters()[0].particles());
    }

    #[test]
    fn test_named_effect_fails_loudly() {
        let mut system = ParticleSystem::new(1000);
        assert_eq!(system.create_named_effect("shield", 0.0, 0.0, 1.0), Ok(true));
        assert!(system.create_named_effect("sheild", 0.0, 0.0, 1.0).is_err());
        assert_eq!(system.emitter_count(), 1);
    }

    #[test]
    fn test_continuous_emitter_held_under_cap() {
        let mut system = ParticleSystem::new(200);
        let params = EmitterParams {
            emission_rate: 500.0,
            lifetime: 30.0,
            ..EmitterParams::default()
        };
        assert!(system.spawn_emitter(params.clone(), 0.0, 0.0));

        // one stalled frame, then normal ones
        system.update(3600.0);
        assert_eq!(system.particle_count(), 200);
        for _ in 0..30 {
            system.update(FRAME);
        }
        assert_eq!(system.particle_count(), 200);

        // an admitted burst still completes after the stream took the room
        system.clear();
        assert!(system.spawn_emitter(params, 0.0, 0.0));
        assert!(system.create_effect(ParticleRecipe::Laser, 0.0, 0.0, 1.0));
        system.update(3600.0);
        assert_eq!(system.emitters()[0].particle_count(), 200);
        assert_eq!(system.emitters()[1].total_emitted(), 15);
        assert_eq!(system.particle_count(), 215);
    }

    #[test]
    fn test_clear() {
        let mut system = ParticleSystem::default();
        system.create_effect(ParticleRecipe::Scan, 0.0, 0.0, 1.0);
        system.update(FRAME);
        system.clear();
        assert_eq!(system.emitter_count(), 0);
        assert_eq!(system.particle_count(), 0);
        assert_eq!(system.max_particles(), DEFAULT_MAX_PARTICLES);
    }
}
