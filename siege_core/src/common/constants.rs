//! Up front configuration values

use crate::utils::Rect;

/// Width of the playfield in logical units
pub const CANVAS_WIDTH: f64 = 800.0;
/// Height of the playfield in logical units
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Where the Tank starts, top-left corner
pub const TANK_START_X: f64 = 400.0;
pub const TANK_START_Y: f64 = 500.0;
pub const TANK_WIDTH: f64 = 60.0;
pub const TANK_HEIGHT: f64 = 40.0;
/// Distance the Tank moves per frame for each held direction
pub const TANK_SPEED: f64 = 5.0;

/// Distance the Bullet travels per frame
pub const BULLET_SPEED: f64 = 10.0;
/// Radius used when drawing the Bullet
pub const BULLET_RADIUS: f64 = 5.0;

/// Number of hits needed before the flag goes up
pub const VICTORY_HITS: u32 = 3;

/// Target layout. The first entry is the objective structure
pub const TARGETS: [Rect; 4] = [
    Rect::new(350.0, 100.0, 100.0, 150.0),
    Rect::new(200.0, 200.0, 40.0, 40.0),
    Rect::new(400.0, 250.0, 40.0, 40.0),
    Rect::new(600.0, 200.0, 40.0, 40.0),
];

/// Where the victory flag is drawn once raised
pub const FLAG: Rect = Rect::new(375.0, 50.0, 50.0, 30.0);
