//! # Particle Error Types
//!
//! Errors surfaced by recipe parsing and by render backends.
//! The simulation itself never fails: budget rejections are reported as `false`.

use thiserror::Error;

/// Errors that can occur in the particle layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParticleError {
    /// A textual recipe name did not match any known recipe.
    #[error("unknown particle recipe: {0}")]
    UnknownRecipe(String),

    /// The render backend refused a draw call.
    #[error("render backend failure: {0}")]
    Render(String),
}

/// Result type for particle operations.
pub type ParticleResult<T> = Result<T, ParticleError>;
