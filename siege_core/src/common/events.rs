//! Things that happened during a single tick

use serde::{Deserialize, Serialize};

use crate::utils::Vector2;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A Bullet left the muzzle at `position` travelling along `direction`
    BulletFired { position: Vector2, direction: f64 },
    /// The Bullet destroyed the Target at `index`
    TargetHit { index: usize, hits: u32 },
    /// The Bullet left the playfield without hitting anything
    BulletLeftField { position: Vector2 },
    /// Enough Targets were hit, the flag is up
    Victory,
}
