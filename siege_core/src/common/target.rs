use serde::{Deserialize, Serialize};

use crate::utils::{point_rect_collision, Rect, Vector2};

/// Static structure the Tank shoots at. Never removed, only marked hit
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Target {
    pub rect: Rect,
    pub hit: bool,
}

impl Target {
    pub fn new(rect: Rect) -> Self {
        Self { rect, hit: false }
    }

    /// Whether a point would hit this Target. Targets already hit are ignored
    pub fn is_struck_by(&self, point: &Vector2) -> bool {
        !self.hit && point_rect_collision(point, &self.rect)
    }
}

/// Victory marker that goes up once and stays up
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Flag {
    pub rect: Rect,
    pub raised: bool,
}

impl Flag {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            raised: false,
        }
    }

    pub fn raise(&mut self) {
        self.raised = true;
    }
}
