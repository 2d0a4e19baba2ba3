//! Drawing the game onto any 2D surface

use crate::common::gamestate::GameState;

pub const BACKGROUND_COLOR: &str = "#222";
pub const OBJECTIVE_COLOR: &str = "#666";
pub const TARGET_COLOR: &str = "#844";
pub const TANK_COLOR: &str = "#0a0";
pub const BULLET_COLOR: &str = "#ff0";
pub const FLAG_COLOR: &str = "#f00";

/// The drawing primitives the game needs from a 2D canvas
pub trait Surface {
    type Error;

    fn set_fill_style(&self, color: &str);
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64);
    fn fill_circle(&self, x: f64, y: f64, radius: f64) -> Result<(), Self::Error>;
    fn save(&self);
    fn restore(&self);
    fn translate(&self, x: f64, y: f64) -> Result<(), Self::Error>;
    fn rotate(&self, angle: f64) -> Result<(), Self::Error>;
}

/// Somewhere to show the one line score readout
pub trait StatusSink {
    fn set_status(&self, text: &str);
}

/// Draw one frame of `state`
pub fn render<S: Surface>(state: &GameState, surface: &S) -> Result<(), S::Error> {
    surface.set_fill_style(BACKGROUND_COLOR);
    surface.fill_rect(0.0, 0.0, state.canvas_width, state.canvas_height);

    let mut targets = state.targets.iter();

    // the objective structure stays up no matter what
    if let Some(objective) = targets.next() {
        surface.set_fill_style(OBJECTIVE_COLOR);
        let r = objective.rect;
        surface.fill_rect(r.x, r.y, r.width, r.height);
    }

    for target in targets.filter(|target| !target.hit) {
        surface.set_fill_style(TARGET_COLOR);
        let r = target.rect;
        surface.fill_rect(r.x, r.y, r.width, r.height);
    }

    render_tank(state, surface)?;

    if let Some(bullet) = &state.bullet {
        surface.set_fill_style(BULLET_COLOR);
        surface.fill_circle(bullet.position.x, bullet.position.y, state.bullet_radius)?;
    }

    if state.flag.raised {
        surface.set_fill_style(FLAG_COLOR);
        let r = state.flag.rect;
        surface.fill_rect(r.x, r.y, r.width, r.height);
    }

    Ok(())
}

fn render_tank<S: Surface>(state: &GameState, surface: &S) -> Result<(), S::Error> {
    let tank = &state.tank;
    let center = tank.rect().center();

    surface.save();
    // restore even when a transform fails so the next frame starts clean
    let drawn = surface
        .translate(center.x, center.y)
        .and_then(|_| surface.rotate(tank.heading.angle()))
        .map(|_| {
            surface.set_fill_style(TANK_COLOR);
            surface.fill_rect(
                -tank.width / 2.0,
                -tank.height / 2.0,
                tank.width,
                tank.height,
            );
        });
    surface.restore();

    drawn
}
