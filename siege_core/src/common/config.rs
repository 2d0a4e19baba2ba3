use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::{Rect, Vector2};

use super::{
    constants::{
        BULLET_RADIUS, BULLET_SPEED, CANVAS_HEIGHT, CANVAS_WIDTH, FLAG, TANK_HEIGHT, TANK_SPEED,
        TANK_START_X, TANK_START_Y, TANK_WIDTH, TARGETS, VICTORY_HITS,
    },
    tank::Tank,
};

/// Everything needed to build the starting [`GameState`](super::gamestate::GameState)
///
/// Missing fields fall back to the values in [`constants`](super::constants),
/// so a partial JSON object is a valid override.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Starting rectangle of the Tank
    pub tank: Rect,
    pub tank_speed: f64,
    pub bullet_speed: f64,
    pub bullet_radius: f64,
    pub victory_hits: u32,
    /// Index 0 is the objective structure
    pub targets: Vec<Rect>,
    pub flag: Rect,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            tank: Rect::new(TANK_START_X, TANK_START_Y, TANK_WIDTH, TANK_HEIGHT),
            tank_speed: TANK_SPEED,
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            victory_hits: VICTORY_HITS,
            targets: TARGETS.to_vec(),
            flag: FLAG,
        }
    }
}

/// Why a [`GameConfig`] was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON for a config object
    Parse(serde_json::Error),
    /// A size or speed that has to be a positive number is not
    NotPositive(&'static str),
    /// The canvas is measured in whole pixels
    FractionalCanvas { width: f64, height: f64 },
    /// The Tank does not fit in the lower half of the canvas
    TankTooLarge,
    /// The Tank starts somewhere it could never move from
    TankOutOfBounds { start: Vector2, bounds: Rect },
    /// Victory needs at least one hit and no more hits than there are Targets
    VictoryHits { victory_hits: u32, targets: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::NotPositive(field) => write!(f, "`{}` must be positive", field),
            ConfigError::FractionalCanvas { width, height } => {
                write!(f, "canvas size {}x{} is not whole pixels", width, height)
            }
            ConfigError::TankTooLarge => {
                write!(f, "tank does not fit in the lower half of the canvas")
            }
            ConfigError::TankOutOfBounds { start, bounds } => write!(
                f,
                "tank starts at ({}, {}) outside x {}..={} y {}..={}",
                start.x,
                start.y,
                bounds.x,
                bounds.x + bounds.width,
                bounds.y,
                bounds.y + bounds.height,
            ),
            ConfigError::VictoryHits {
                victory_hits,
                targets,
            } => write!(
                f,
                "`victory_hits` is {} but must be between 1 and the {} targets",
                victory_hits, targets
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override and check it can be played
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject layouts that would break the game's rules: a Tank stuck outside
    /// its area, a game that is won before it starts or can never be won
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("tank.width", self.tank.width),
            ("tank.height", self.tank.height),
            ("tank_speed", self.tank_speed),
            ("bullet_speed", self.bullet_speed),
            ("bullet_radius", self.bullet_radius),
            ("flag.width", self.flag.width),
            ("flag.height", self.flag.height),
        ];
        // written so NaN fails too
        if let Some((field, _)) = positive
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigError::NotPositive(*field));
        }

        if self
            .targets
            .iter()
            .any(|t| !(t.width > 0.0 && t.height > 0.0))
        {
            return Err(ConfigError::NotPositive("targets"));
        }

        if self.canvas_width.fract() != 0.0 || self.canvas_height.fract() != 0.0 {
            return Err(ConfigError::FractionalCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        let bounds = Tank::movement_area(
            self.canvas_width,
            self.canvas_height,
            self.tank.width,
            self.tank.height,
        );
        if bounds.width < 0.0 || bounds.height < 0.0 {
            return Err(ConfigError::TankTooLarge);
        }

        let start = Vector2::new(self.tank.x, self.tank.y);
        if !bounds.contains_inclusive(&start) {
            return Err(ConfigError::TankOutOfBounds { start, bounds });
        }

        if self.victory_hits == 0 || self.victory_hits as usize > self.targets.len() {
            return Err(ConfigError::VictoryHits {
                victory_hits: self.victory_hits,
                targets: self.targets.len(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(json: &str) -> ConfigError {
        GameConfig::from_json(json).unwrap_err()
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "tank_speed": 8.0, "victory_hits": 2 }"#).unwrap();

        assert_eq!(config.tank_speed, 8.0);
        assert_eq!(config.victory_hits, 2);
        assert_eq!(config.canvas_width, CANVAS_WIDTH);
        assert_eq!(config.targets.len(), 4);
        assert_eq!(config.flag, FLAG);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }

    #[test]
    fn default_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = rejected("{ nope");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn tank_starting_in_the_upper_half_is_rejected() {
        let err = rejected(r#"{ "tank": { "x": 400, "y": 100, "width": 60, "height": 40 } }"#);
        assert!(matches!(err, ConfigError::TankOutOfBounds { .. }));

        let err = rejected(r#"{ "tank": { "x": 745, "y": 500, "width": 60, "height": 40 } }"#);
        assert!(matches!(err, ConfigError::TankOutOfBounds { .. }));
    }

    #[test]
    fn tank_on_the_edge_of_its_area_is_fine() {
        assert!(
            GameConfig::from_json(r#"{ "tank": { "x": 740, "y": 300, "width": 60, "height": 40 } }"#)
                .is_ok()
        );
    }

    #[test]
    fn tank_bigger_than_its_area_is_rejected() {
        let err = rejected(r#"{ "tank": { "x": 0, "y": 300, "width": 60, "height": 400 } }"#);
        assert!(matches!(err, ConfigError::TankTooLarge));
    }

    #[test]
    fn zero_victory_hits_is_rejected() {
        let err = rejected(r#"{ "victory_hits": 0 }"#);
        assert!(matches!(
            err,
            ConfigError::VictoryHits {
                victory_hits: 0,
                targets: 4
            }
        ));
    }

    #[test]
    fn more_victory_hits_than_targets_is_rejected() {
        let err = rejected(r#"{ "victory_hits": 5 }"#);
        assert!(matches!(err, ConfigError::VictoryHits { victory_hits: 5, .. }));

        let err = rejected(r#"{ "targets": [], "victory_hits": 1 }"#);
        assert!(matches!(err, ConfigError::VictoryHits { targets: 0, .. }));
    }

    #[test]
    fn non_positive_sizes_and_speeds_are_rejected() {
        assert!(matches!(
            rejected(r#"{ "canvas_width": 0 }"#),
            ConfigError::NotPositive("canvas_width")
        ));
        assert!(matches!(
            rejected(r#"{ "canvas_height": -600 }"#),
            ConfigError::NotPositive("canvas_height")
        ));
        assert!(matches!(
            rejected(r#"{ "tank_speed": 0 }"#),
            ConfigError::NotPositive("tank_speed")
        ));
        assert!(matches!(
            rejected(r#"{ "bullet_speed": -10 }"#),
            ConfigError::NotPositive("bullet_speed")
        ));
        assert!(matches!(
            rejected(r#"{ "targets": [{ "x": 0, "y": 0, "width": 0, "height": 10 }], "victory_hits": 1 }"#),
            ConfigError::NotPositive("targets")
        ));
    }

    #[test]
    fn nan_is_not_positive() {
        let config = GameConfig {
            bullet_radius: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive("bullet_radius"))
        ));
    }

    #[test]
    fn fractional_canvas_is_rejected() {
        let err = rejected(r#"{ "canvas_width": 800.5 }"#);
        assert!(matches!(err, ConfigError::FractionalCanvas { .. }));
    }
}
