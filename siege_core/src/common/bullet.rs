//! Definitions for the Tank's projectile

use serde::{Deserialize, Serialize};

use crate::utils::Vector2;

/// Projectile shot from the Tank. Only one can be in flight at a time
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Bullet Position
    pub position: Vector2,
    /// Distance travelled per frame
    pub speed: f64,
    /// Angle of travel in radians, `0` pointing up the canvas
    pub direction: f64,
}

impl Bullet {
    pub fn physics_update(&mut self) {
        self.position = self
            .position
            .plus(&Vector2::from_heading(self.direction).scale(self.speed));
    }

    /// Whether the Bullet has left a `width` x `height` field.
    /// The field edges themselves still count as inside
    pub fn out_of_bounds(&self, width: f64, height: f64) -> bool {
        self.position.x < 0.0
            || self.position.x > width
            || self.position.y < 0.0
            || self.position.y > height
    }
}
