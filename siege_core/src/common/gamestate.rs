use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::utils::Rect;

use super::{
    bullet::Bullet,
    config::GameConfig,
    events::GameEvent,
    input::{InputState, Key},
    tank::{Heading, Tank},
    target::{Flag, Target},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GameState {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub tank: Tank,
    /// At most one Bullet is ever in flight
    pub bullet: Option<Bullet>,
    /// Index 0 is the objective structure, the rest are defensive positions
    pub targets: Vec<Target>,
    pub flag: Flag,
    pub hits: u32,
    pub victory_hits: u32,
    pub game_won: bool,
    pub bullet_speed: f64,
    pub bullet_radius: f64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            tank: Tank::new(config.tank, config.tank_speed),
            bullet: None,
            targets: config.targets.iter().copied().map(Target::new).collect(),
            flag: Flag::new(config.flag),
            hits: 0,
            victory_hits: config.victory_hits,
            game_won: false,
            bullet_speed: config.bullet_speed,
            bullet_radius: config.bullet_radius,
        }
    }
}

/// Implementations for every sensical action that can be taken during the game
impl GameState {
    /// Area the Tank's top-left corner may occupy: the lower half of the canvas
    pub fn tank_bounds(&self) -> Rect {
        Tank::movement_area(
            self.canvas_width,
            self.canvas_height,
            self.tank.width,
            self.tank.height,
        )
    }

    /// Move the Tank for every held direction key.
    ///
    /// Keys are applied in the order Left, Right, Up, Down, so with several keys
    /// held the Tank moves diagonally and faces the last direction that moved it.
    pub fn move_tank(&mut self, input: &InputState) {
        let bounds = self.tank_bounds();

        for key in Key::DIRECTIONS {
            if !input.is_pressed(key) {
                continue;
            }
            if let Ok(heading) = Heading::try_from(key) {
                self.tank.try_move(heading, &bounds);
            }
        }
    }

    /// Spawn a Bullet from the Tank's muzzle along its heading.
    ///
    /// Does nothing while a Bullet is in flight or once the game is won.
    pub fn player_shoot(&mut self) -> Option<GameEvent> {
        if self.bullet.is_some() || self.game_won {
            return None;
        }

        let bullet = Bullet {
            position: self.tank.muzzle(),
            speed: self.bullet_speed,
            direction: self.tank.heading.angle(),
        };
        debug!(x = bullet.position.x, y = bullet.position.y, "bullet fired");

        let event = GameEvent::BulletFired {
            position: bullet.position,
            direction: bullet.direction,
        };
        self.bullet = Some(bullet);

        Some(event)
    }

    /// Raise the flag once enough Targets are down
    pub fn check_victory(&mut self) -> Option<GameEvent> {
        if self.hits >= self.victory_hits && !self.game_won {
            self.game_won = true;
            self.flag.raise();
            info!(hits = self.hits, "victory, flag raised");
            return Some(GameEvent::Victory);
        }

        None
    }

    /// Text shown in the status readout
    pub fn status_text(&self) -> String {
        match self.game_won {
            true => format!("Hits: {}/{} - Victory!", self.hits, self.victory_hits),
            false => format!("Hits: {}/{}", self.hits, self.victory_hits),
        }
    }
}

impl GameState {
    /// Advance the game by one frame using the keys held right now
    pub fn tick(&mut self, input: &InputState) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.move_tank(input);

        if input.is_pressed(Key::Fire) {
            events.extend(self.player_shoot());
        }

        events.extend(self.update_bullet());
        events.extend(self.check_victory());

        events
    }

    /// Move the Bullet, then resolve it against the Targets and the playfield
    fn update_bullet(&mut self) -> Option<GameEvent> {
        let bullet = self.bullet.as_mut()?;
        bullet.physics_update();
        let position = bullet.position;

        // only the first Target in list order takes the hit
        if let Some((index, target)) = self
            .targets
            .iter_mut()
            .enumerate()
            .find(|(_, target)| target.is_struck_by(&position))
        {
            target.hit = true;
            self.bullet = None;
            self.hits += 1;
            info!(index, hits = self.hits, "target hit");
            return Some(GameEvent::TargetHit {
                index,
                hits: self.hits,
            });
        }

        if bullet.out_of_bounds(self.canvas_width, self.canvas_height) {
            self.bullet = None;
            debug!(x = position.x, y = position.y, "bullet left the field");
            return Some(GameEvent::BulletLeftField { position });
        }

        None
    }
}
