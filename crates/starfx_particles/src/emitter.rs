//! # Particle Emitter
//!
//! Spawns particles from a fixed origin under one of two policies:
//!
//! - **Continuous**: `rate` particles per second, forever
//! - **Burst**: `count` particles total, spread over time at `rate` per second
//!
//! Both policies share one fractional time accumulator, flushed to whole
//! particle counts every update so emission never drifts.

use rand::Rng;

use crate::particle::Particle;

/// Default continuous emission rate (particles per second).
pub const DEFAULT_EMISSION_RATE: f32 = 50.0;

/// Burst emitters flush their budget this many times faster than the base rate.
pub const BURST_RATE_MULTIPLIER: f32 = 10.0;

/// Absorbs f32 rounding when accumulated time lands exactly on a particle boundary.
const ACCUMULATOR_EPSILON: f32 = 1e-4;

/// Emission policy, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EmissionPolicy {
    /// Emit indefinitely.
    Continuous {
        /// Particles per second.
        rate: f32,
    },
    /// Emit a fixed total, then stop.
    Burst {
        /// Total particles this emitter will ever emit.
        count: u32,
        /// Particles per second while the burst is draining.
        rate: f32,
    },
}

/// Construction parameters for an emitter (the visual recipe).
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterParams {
    /// Minimum initial speed (pixels per second).
    pub velocity_min: f32,
    /// Maximum initial speed (pixels per second).
    pub velocity_max: f32,
    /// Minimum launch angle in degrees.
    pub angle_min: f32,
    /// Maximum launch angle in degrees.
    pub angle_max: f32,
    /// Lifetime of every emitted particle, in seconds.
    pub lifetime: f32,
    /// Base emission rate (particles per second).
    pub emission_rate: f32,
    /// RGB color of every emitted particle.
    pub color: [u8; 3],
    /// Disc radius of every emitted particle.
    pub size: f32,
    /// `None` = continuous, `Some(n)` = burst of `n` particles.
    pub burst_count: Option<u32>,
}

impl Default for EmitterParams {
    fn default() -> Self {
        Self {
            velocity_min: 100.0,
            velocity_max: 300.0,
            angle_min: 0.0,
            angle_max: 360.0,
            lifetime: 1.0,
            emission_rate: DEFAULT_EMISSION_RATE,
            color: [255, 255, 255],
            size: 2.0,
            burst_count: None,
        }
    }
}

impl EmitterParams {
    /// Resolves the emission policy these parameters describe.
    #[must_use]
    pub fn policy(&self) -> EmissionPolicy {
        match self.burst_count {
            None => EmissionPolicy::Continuous {
                rate: self.emission_rate,
            },
            Some(count) => EmissionPolicy::Burst {
                count,
                rate: self.emission_rate * BURST_RATE_MULTIPLIER,
            },
        }
    }
}

/// A source of particles with a fixed recipe and emission policy.
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    /// Spawn point for every particle.
    origin: [f32; 2],
    /// Recipe.
    params: EmitterParams,
    /// Resolved policy.
    policy: EmissionPolicy,
    /// Live particles.
    particles: Vec<Particle>,
    /// Fractional seconds not yet converted into particles.
    accumulator: f32,
    /// Particles emitted since construction.
    total_emitted: u32,
}

impl ParticleEmitter {
    /// Creates an emitter at `origin`. Nothing is emitted until the first update.
    #[must_use]
    pub fn new(origin: [f32; 2], params: EmitterParams) -> Self {
        let policy = params.policy();
        let capacity = match policy {
            EmissionPolicy::Burst { count, .. } => count as usize,
            EmissionPolicy::Continuous { .. } => 16,
        };

        Self {
            origin,
            params,
            policy,
            particles: Vec::with_capacity(capacity),
            accumulator: 0.0,
            total_emitted: 0,
        }
    }

    /// Advances live particles, prunes the dead ones, then emits per policy.
    pub fn update<R: Rng + ?Sized>(&mut self, dt: f32, rng: &mut R) {
        self.update_within(dt, u32::MAX, rng);
    }

    /// Like [`Self::update`], but a continuous emitter adds at most
    /// `headroom` particles. Time owed beyond that is forgotten.
    ///
    /// Bursts ignore `headroom`; their total was reserved at admission.
    pub fn update_within<R: Rng + ?Sized>(&mut self, dt: f32, headroom: u32, rng: &mut R) {
        // retain keeps survivor order intact
        self.particles.retain_mut(|p| p.update(dt));

        let policy = self.policy;
        let due = match policy {
            EmissionPolicy::Continuous { rate } => self.drain_accumulator(dt, rate, headroom),
            EmissionPolicy::Burst { rate, .. } => {
                let remaining = self.pending_emissions();
                if remaining == 0 {
                    return;
                }
                self.drain_accumulator(dt, rate, remaining)
            }
        };

        if due > 0 {
            self.emit_particles(due, rng);
        }
    }

    /// Emits up to `count` particles immediately.
    ///
    /// Each particle gets a speed and an angle drawn uniformly from the
    /// recipe ranges. Burst emitters never exceed their total.
    pub fn emit_particles<R: Rng + ?Sized>(&mut self, count: u32, rng: &mut R) {
        let count = match self.policy {
            EmissionPolicy::Burst { .. } => count.min(self.pending_emissions()),
            EmissionPolicy::Continuous { .. } => count,
        };

        for _ in 0..count {
            let speed = sample(rng, self.params.velocity_min, self.params.velocity_max);
            let angle = sample(rng, self.params.angle_min, self.params.angle_max).to_radians();
            let velocity = [speed * angle.cos(), speed * angle.sin()];

            self.particles.push(Particle::new(
                self.origin,
                velocity,
                self.params.lifetime,
                self.params.color,
                self.params.size,
            ));
            self.total_emitted += 1;
        }
    }

    /// Continuous emitters are always active; bursts until fully emitted.
    ///
    /// An inactive burst may still hold fading particles.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self.policy {
            EmissionPolicy::Continuous { .. } => true,
            EmissionPolicy::Burst { count, .. } => self.total_emitted < count,
        }
    }

    /// Particles a burst still owes (0 for continuous emitters).
    #[must_use]
    pub fn pending_emissions(&self) -> u32 {
        match self.policy {
            EmissionPolicy::Continuous { .. } => 0,
            EmissionPolicy::Burst { count, .. } => count.saturating_sub(self.total_emitted),
        }
    }

    /// Spawn point.
    #[must_use]
    pub const fn origin(&self) -> [f32; 2] {
        self.origin
    }

    /// Recipe parameters.
    #[must_use]
    pub const fn params(&self) -> &EmitterParams {
        &self.params
    }

    /// Emission policy.
    #[must_use]
    pub const fn policy(&self) -> EmissionPolicy {
        self.policy
    }

    /// Live particles.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Particles emitted since construction.
    #[must_use]
    pub const fn total_emitted(&self) -> u32 {
        self.total_emitted
    }

    /// Adds `dt` to the accumulator and converts whole particles out of it.
    fn drain_accumulator(&mut self, dt: f32, rate: f32, cap: u32) -> u32 {
        if rate <= 0.0 || !rate.is_finite() {
            return 0;
        }

        self.accumulator += dt;
        let due = (self.accumulator * rate + ACCUMULATOR_EPSILON).floor();
        if due < 1.0 {
            return 0;
        }

        if due >= cap as f32 {
            // backlog past the cap is dropped, at most one interval carries over
            self.accumulator = (self.accumulator - cap as f32 / rate).min(1.0 / rate);
            return cap;
        }
        let due = due as u32;
        self.accumulator -= due as f32 / rate;
        due
    }
}

/// Uniform sample in `[min, max]`; degenerate or inverted ranges yield `min`.
fn sample<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min < max {
        rng.gen_range(min..=max)
    } else {
        min
    }
}
