use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Unit vector for an angle where `0` points up the canvas
    /// and angles grow clockwise
    pub fn from_heading(angle: f64) -> Self {
        Self {
            x: angle.sin(),
            y: -angle.cos(),
        }
    }
}

/// Axis aligned rectangle anchored at its top-left corner
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point lies inside or on the edge of this rectangle
    pub fn contains_inclusive(&self, point: &Vector2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// Whether a point lies strictly inside a rectangle.
///
/// Points sitting exactly on an edge are outside.
pub fn point_rect_collision(point: &Vector2, rect: &Rect) -> bool {
    point.x > rect.x
        && point.x < rect.x + rect.width
        && point.y > rect.y
        && point.y < rect.y + rect.height
}
