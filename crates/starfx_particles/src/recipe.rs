//! # Particle Recipes
//!
//! The closed set of visual recipes. Every visual in the effect catalog is
//! tagged with one of these variants, so dispatch is a direct lookup.
//!
//! | Recipe           | Speed (px/s) | Lifetime | Color          | Size | Burst |
//! |------------------|--------------|----------|----------------|------|-------|
//! | `ExplosionLarge` | 200 - 500    | 1.2 s    | (255, 150, 0)  | 4.0  | 80    |
//! | `ExplosionSmall` | 150 - 350    | 0.8 s    | (255, 100, 0)  | 2.0  | 40    |
//! | `Shield`         | 100 - 250    | 0.6 s    | (0, 150, 255)  | 1.5  | 30    |
//! | `Laser`          | 50 - 150     | 0.3 s    | (0, 255, 150)  | 1.0  | 15    |
//! | `Pulse`          | 200 - 400    | 0.7 s    | (255, 200, 0)  | 2.0  | 50    |
//! | `Scan`           | 80 - 200     | 0.5 s    | (64, 220, 255) | 1.2  | 25    |
//! | `Ion`            | 250 - 500    | 0.8 s    | (100, 150, 255)| 2.5  | 60    |
//! | `Generic`        | 100 - 300    | 0.6 s    | (200, 200, 200)| 1.5  | 30    |
//!
//! Speed, size and burst count scale with intensity. Lifetime and color do not.

use std::fmt;
use std::str::FromStr;

use crate::emitter::{EmitterParams, DEFAULT_EMISSION_RATE};
use crate::error::ParticleError;

/// A particle recipe family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleRecipe {
    /// Big fireball (critical hits, hull breaches).
    ExplosionLarge,
    /// Small fireball (hull damage).
    ExplosionSmall,
    /// Blue shield impact.
    Shield,
    /// Short green laser sparks.
    Laser,
    /// Golden pulse wave.
    Pulse,
    /// Cyan module / scanner shimmer.
    Scan,
    /// Fast blue ion surge.
    Ion,
    /// Neutral gray fallback.
    Generic,
}

/// Unscaled recipe constants.
struct RecipeBase {
    velocity: (f32, f32),
    lifetime: f32,
    color: [u8; 3],
    size: f32,
    burst: f32,
}

impl ParticleRecipe {
    /// All recipes, in dispatch priority order.
    pub const ALL: [Self; 8] = [
        Self::ExplosionLarge,
        Self::ExplosionSmall,
        Self::Shield,
        Self::Laser,
        Self::Pulse,
        Self::Scan,
        Self::Ion,
        Self::Generic,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ExplosionLarge => "explosion_large",
            Self::ExplosionSmall => "explosion_small",
            Self::Shield => "shield",
            Self::Laser => "laser",
            Self::Pulse => "pulse",
            Self::Scan => "scan",
            Self::Ion => "ion",
            Self::Generic => "generic",
        }
    }

    const fn base(self) -> RecipeBase {
        match self {
            Self::ExplosionLarge => RecipeBase {
                velocity: (200.0, 500.0),
                lifetime: 1.2,
                color: [255, 150, 0],
                size: 4.0,
                burst: 80.0,
            },
            Self::ExplosionSmall => RecipeBase {
                velocity: (150.0, 350.0),
                lifetime: 0.8,
                color: [255, 100, 0],
                size: 2.0,
                burst: 40.0,
            },
            Self::Shield => RecipeBase {
                velocity: (100.0, 250.0),
                lifetime: 0.6,
                color: [0, 150, 255],
                size: 1.5,
                burst: 30.0,
            },
            Self::Laser => RecipeBase {
                velocity: (50.0, 150.0),
                lifetime: 0.3,
                color: [0, 255, 150],
                size: 1.0,
                burst: 15.0,
            },
            Self::Pulse => RecipeBase {
                velocity: (200.0, 400.0),
                lifetime: 0.7,
                color: [255, 200, 0],
                size: 2.0,
                burst: 50.0,
            },
            Self::Scan => RecipeBase {
                velocity: (80.0, 200.0),
                lifetime: 0.5,
                color: [64, 220, 255],
                size: 1.2,
                burst: 25.0,
            },
            Self::Ion => RecipeBase {
                velocity: (250.0, 500.0),
                lifetime: 0.8,
                color: [100, 150, 255],
                size: 2.5,
                burst: 60.0,
            },
            Self::Generic => RecipeBase {
                velocity: (100.0, 300.0),
                lifetime: 0.6,
                color: [200, 200, 200],
                size: 1.5,
                burst: 30.0,
            },
        }
    }

    /// Emitter parameters for this recipe at the given intensity.
    ///
    /// Burst count is `floor(base * intensity)`; non-positive intensity
    /// yields an empty burst.
    #[must_use]
    pub fn params(self, intensity: f32) -> EmitterParams {
        let base = self.base();
        let burst = (base.burst * intensity).floor().max(0.0) as u32;

        EmitterParams {
            velocity_min: base.velocity.0 * intensity,
            velocity_max: base.velocity.1 * intensity,
            angle_min: 0.0,
            angle_max: 360.0,
            lifetime: base.lifetime,
            emission_rate: DEFAULT_EMISSION_RATE,
            color: base.color,
            size: base.size * intensity,
            burst_count: Some(burst),
        }
    }

    /// Particle count this recipe bursts at the given intensity.
    #[must_use]
    pub fn burst_count(self, intensity: f32) -> u32 {
        self.params(intensity).burst_count.unwrap_or(0)
    }
}

impl fmt::Display for ParticleRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParticleRecipe {
    type Err = ParticleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|recipe| recipe.name() == s)
            .ok_or_else(|| ParticleError::UnknownRecipe(s.to_string()))
    }
}
