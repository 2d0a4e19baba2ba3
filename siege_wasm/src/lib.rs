use std::panic;

use app::App;
use interface::setup_window_listeners;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};
use utils::start_animation_loop;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod error;
mod interface;
mod utils;

/// Initialization process for the window
///
/// sets up logging, finds the canvas and status line, then starts rendering
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    setup_logging();

    let mut app = App::new()?;
    setup_window_listeners(&app.input)?;

    start_animation_loop(Box::new(move || app.frame()))?;
    info!("animation loop started");

    Ok(())
}

fn setup_logging() {
    panic::set_hook(Box::new(console_error_panic_hook::hook));

    let max_level = match cfg!(debug_assertions) {
        true => Level::DEBUG,
        false => Level::INFO,
    };
    let wasm_layer = WASMLayer::new(
        WASMLayerConfigBuilder::new()
            .set_max_level(max_level)
            .build(),
    );

    tracing_subscriber::registry().with(wasm_layer).init();
}
