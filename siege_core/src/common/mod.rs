pub mod bullet;
pub mod config;
pub mod constants;
pub mod events;
pub mod gamestate;
pub mod input;
pub mod tank;
pub mod target;
