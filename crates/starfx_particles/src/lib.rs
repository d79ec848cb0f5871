//! # STARFX Particles
//!
//! Stylized 2D particle simulation for gameplay feedback.
//!
//! ## Architecture
//!
//! ```text
//! ParticleSystem ──owns──► ParticleEmitter ──owns──► Particle
//!       │                        │
//!       │ create_effect(recipe)  │ update(dt): prune dead, emit per policy
//!       │ update(dt)             │
//!       ▼                        ▼
//!  global budget          Continuous | Burst
//!       │
//!       └── draw(&mut impl ParticleRenderer) ──► filled discs, alpha = fade
//! ```
//!
//! ## Design Principles
//!
//! 1. **Closed recipe set** - visuals resolve to a [`ParticleRecipe`] variant, never by substring
//! 2. **Budget at admission** - the particle cap is checked when an emitter is created
//! 3. **Backend-agnostic** - drawing goes through [`ParticleRenderer`]
//! 4. **Deterministic** - all randomness comes from a seeded `StdRng`
//!
//! ## Example
//!
//! ```rust,ignore
//! use starfx_particles::{ParticleRecipe, ParticleSystem, RecordingRenderer};
//!
//! let mut system = ParticleSystem::new(10_000);
//! system.create_effect(ParticleRecipe::ExplosionLarge, 100.0, 100.0, 1.5);
//! system.update(1.0 / 60.0);
//!
//! let mut renderer = RecordingRenderer::new();
//! system.draw(&mut renderer);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod emitter;
pub mod error;
pub mod particle;
pub mod recipe;
pub mod render;
pub mod system;

pub use emitter::{EmissionPolicy, EmitterParams, ParticleEmitter, BURST_RATE_MULTIPLIER, DEFAULT_EMISSION_RATE};
pub use error::{ParticleError, ParticleResult};
pub use particle::Particle;
pub use recipe::ParticleRecipe;
pub use render::{CircleCommand, ParticleRenderer, RecordingRenderer};
pub use system::{ParticleStats, ParticleSystem, DEFAULT_MAX_PARTICLES, DEFAULT_SEED};
