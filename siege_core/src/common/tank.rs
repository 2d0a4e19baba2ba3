use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};

use crate::utils::{Rect, Vector2};

use super::input::Key;

/// The four directions a Tank can face
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Rotation in radians, `0` facing up the canvas and growing clockwise.
    /// Bullets fly along this angle and the Tank is drawn rotated by it
    pub fn angle(self) -> f64 {
        match self {
            Heading::Up => 0.0,
            Heading::Right => FRAC_PI_2,
            Heading::Down => PI,
            Heading::Left => -FRAC_PI_2,
        }
    }

    fn delta(self) -> Vector2 {
        match self {
            Heading::Up => Vector2::new(0.0, -1.0),
            Heading::Right => Vector2::new(1.0, 0.0),
            Heading::Down => Vector2::new(0.0, 1.0),
            Heading::Left => Vector2::new(-1.0, 0.0),
        }
    }
}

impl TryFrom<Key> for Heading {
    type Error = Key;

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        match key {
            Key::Up => Ok(Heading::Up),
            Key::Right => Ok(Heading::Right),
            Key::Down => Ok(Heading::Down),
            Key::Left => Ok(Heading::Left),
            Key::Fire => Err(key),
        }
    }
}

/// The player controlled Tank
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Tank {
    /// Top-left corner
    pub position: Vector2,
    pub width: f64,
    pub height: f64,
    /// Distance moved per frame for each held direction
    pub speed: f64,
    pub heading: Heading,
}

impl Tank {
    pub fn new(rect: Rect, speed: f64) -> Self {
        Self {
            position: Vector2::new(rect.x, rect.y),
            width: rect.width,
            height: rect.height,
            speed,
            heading: Heading::default(),
        }
    }

    /// Area a `width` x `height` Tank's top-left corner may occupy:
    /// the lower half of the canvas
    pub fn movement_area(canvas_width: f64, canvas_height: f64, width: f64, height: f64) -> Rect {
        let top = canvas_height / 2.0;
        Rect::new(0.0, top, canvas_width - width, canvas_height - height - top)
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, self.width, self.height)
    }

    /// Where Bullets leave the Tank: horizontal center, top edge
    pub fn muzzle(&self) -> Vector2 {
        Vector2::new(self.position.x + self.width / 2.0, self.position.y)
    }

    /// Move one step towards `heading` if the Tank stays inside `bounds`
    /// (the area its top-left corner may occupy). A refused move leaves
    /// the heading alone as well. Returns whether the Tank moved
    pub fn try_move(&mut self, heading: Heading, bounds: &Rect) -> bool {
        let next = self.position.plus(&heading.delta().scale(self.speed));

        let inside = bounds.contains_inclusive(&next);

        if inside {
            self.position = next;
            self.heading = heading;
        }

        inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tank() -> Tank {
        Tank::new(Rect::new(400.0, 500.0, 60.0, 40.0), 5.0)
    }

    #[test]
    fn muzzle_is_top_center() {
        assert_eq!(tank().muzzle(), Vector2::new(430.0, 500.0));
    }

    #[test]
    fn move_inside_bounds() {
        let mut tank = tank();
        let bounds = Rect::new(0.0, 300.0, 740.0, 260.0);

        assert!(tank.try_move(Heading::Left, &bounds));
        assert_eq!(tank.position, Vector2::new(395.0, 500.0));
        assert_eq!(tank.heading, Heading::Left);
    }

    #[test]
    fn refused_move_keeps_heading() {
        let mut tank = tank();
        tank.position = Vector2::new(0.0, 500.0);
        let bounds = Rect::new(0.0, 300.0, 740.0, 260.0);

        assert!(!tank.try_move(Heading::Left, &bounds));
        assert_eq!(tank.position.x, 0.0);
        assert_eq!(tank.heading, Heading::Up);
    }

    #[test]
    fn fire_is_not_a_heading() {
        assert_eq!(Heading::try_from(Key::Fire), Err(Key::Fire));
        assert_eq!(Heading::try_from(Key::Down), Ok(Heading::Down));
    }
}
