//! Rules, state and drawing for a single screen tank siege.
//!
//! Nothing in here knows about the browser, the shell feeds key events into
//! an [`InputState`] and hands a [`Surface`] to [`GameLoop::frame`].

pub mod common;
pub mod game_loop;
pub mod render;
pub mod utils;

pub use common::{
    config::{ConfigError, GameConfig},
    events::GameEvent,
    gamestate::GameState,
    input::{InputState, Key},
};
pub use game_loop::GameLoop;
pub use render::{render, StatusSink, Surface};
