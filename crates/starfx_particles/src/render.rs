//! Render seam for the particle system.
//!
//! The host implements [`ParticleRenderer`] over its drawing API. The crate
//! ships [`RecordingRenderer`] for tests and headless runs.

use crate::error::{ParticleError, ParticleResult};

/// Drawing primitive the particle system needs from the host.
pub trait ParticleRenderer {
    /// Draws a filled disc. `color` is RGBA.
    ///
    /// # Errors
    ///
    /// Returns [`ParticleError::Render`] if the backend cannot draw.
    fn draw_circle_filled(&mut self, x: f32, y: f32, radius: f32, color: [u8; 4]) -> ParticleResult<()>;
}

/// One recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCommand {
    /// Center X.
    pub x: f32,
    /// Center Y.
    pub y: f32,
    /// Radius.
    pub radius: f32,
    /// RGBA color.
    pub color: [u8; 4],
}

/// Renderer that records circles instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    circles: Vec<CircleCommand>,
    /// Fail every draw once this many circles have been recorded.
    fail_after: Option<usize>,
}

impl RecordingRenderer {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a recorder that starts failing after `n` successful draws.
    #[must_use]
    pub fn failing_after(n: usize) -> Self {
        Self {
            circles: Vec::new(),
            fail_after: Some(n),
        }
    }

    /// Recorded circles, in draw order.
    #[must_use]
    pub fn circles(&self) -> &[CircleCommand] {
        &self.circles
    }

    /// Forgets recorded circles.
    pub fn clear(&mut self) {
        self.circles.clear();
    }
}

impl ParticleRenderer for RecordingRenderer {
    fn draw_circle_filled(&mut self, x: f32, y: f32, radius: f32, color: [u8; 4]) -> ParticleResult<()> {
        if self.fail_after.is_some_and(|n| self.circles.len() >= n) {
            return Err(ParticleError::Render("recording renderer out of budget".to_string()));
        }
        self.circles.push(CircleCommand { x, y, radius, color });
        Ok(())
    }
}
