//! # Particle
//!
//! One simulated point. Alive while it has lifetime left; fades linearly.

/// A single particle owned by an emitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Screen position (x, y).
    pub position: [f32; 2],
    /// Velocity in pixels per second.
    pub velocity: [f32; 2],
    /// Remaining lifetime in seconds.
    pub lifetime: f32,
    /// Lifetime at spawn (for fade interpolation).
    pub max_lifetime: f32,
    /// RGB color.
    pub color: [u8; 3],
    /// Disc radius in pixels.
    pub size: f32,
    /// Rotation in radians.
    pub rotation: f32,
    /// Angular velocity in radians per second.
    pub angular_velocity: f32,
}

impl Particle {
    /// Creates a non-rotating particle with a full lifetime.
    #[must_use]
    pub const fn new(
        position: [f32; 2],
        velocity: [f32; 2],
        lifetime: f32,
        color: [u8; 3],
        size: f32,
    ) -> Self {
        Self {
            position,
            velocity,
            lifetime,
            max_lifetime: lifetime,
            color,
            size,
            rotation: 0.0,
            angular_velocity: 0.0,
        }
    }

    /// Sets the angular velocity (builder style).
    #[must_use]
    pub const fn with_spin(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Advances the particle by `dt` seconds.
    ///
    /// Returns true while the particle is still alive.
    pub fn update(&mut self, dt: f32) -> bool {
        self.position[0] += self.velocity[0] * dt;
        self.position[1] += self.velocity[1] * dt;
        self.lifetime -= dt;
        self.rotation += self.angular_velocity * dt;

        self.is_alive()
    }

    /// Is this particle alive?
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }

    /// Opacity for the linear fade, in `[0, 1]`.
    #[must_use]
    pub fn get_alpha(&self) -> f32 {
        if self.max_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime / self.max_lifetime).clamp(0.0, 1.0)
    }
}
