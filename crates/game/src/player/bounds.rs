use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// World-space corners of the visible play-field, as reported by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            min: Vec2::new(-6.0, -10.0),
            max: Vec2::new(6.0, 10.0),
        }
    }
}

impl Viewport {
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Area the player may occupy: the viewport inset by a padding on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBounds {
    min: Vec2,
    max: Vec2,
}

impl MoveBounds {
    pub fn from_viewport(viewport: Viewport, padding: f32) -> SimResult<Self> {
        let min = viewport.min + Vec2::splat(padding);
        let max = viewport.max - Vec2::splat(padding);
        if !padding.is_finite() || padding < 0.0 || min.cmpgt(max).any() {
            return Err(SimError::InvalidBounds { padding });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> Vec2 {
        self.min
    }

    pub fn max(&self) -> Vec2 {
        self.max
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Horizontally centred on the bottom edge.
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) * 0.5, self.min.y)
    }
}
