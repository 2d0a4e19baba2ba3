use std::{cell::RefCell, rc::Rc};

use siege_core::{GameConfig, GameEvent, GameLoop, InputState};
use tracing::{debug, error, info};
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::{
    error::SetupError,
    utils::{element_by_id, Canvas, CanvasSurface, StatusElement},
};

pub const CANVAS_ID: &str = "gameCanvas";
pub const STATUS_ID: &str = "gameStatus";
/// Attribute on the canvas holding a JSON [`GameConfig`] override
pub const CONFIG_ATTRIBUTE: &str = "data-config";

/// Everything the browser needs to run the game
pub struct App {
    game: GameLoop,
    /// Written by the key listeners, read once per frame
    pub input: Rc<RefCell<InputState>>,
    surface: CanvasSurface,
    status: StatusElement,
}

impl App {
    /// Find the page elements and build the game. Fails if any are missing
    pub fn new() -> Result<Self, SetupError> {
        let canvas: HtmlCanvasElement = element_by_id(CANVAS_ID, "canvas")?;
        let status: HtmlElement = element_by_id(STATUS_ID, "html element")?;

        let config = read_config(&canvas)?;
        canvas.set_logical_size(config.canvas_width, config.canvas_height);
        let context = canvas.get_2d_context()?;

        info!(
            width = config.canvas_width,
            height = config.canvas_height,
            targets = config.targets.len(),
            "game ready"
        );

        Ok(Self {
            game: GameLoop::new(&config),
            input: Rc::new(RefCell::new(InputState::default())),
            surface: CanvasSurface(context),
            status: StatusElement(status),
        })
    }

    /// Run one update and draw
    pub fn frame(&mut self) {
        let input = self.input.borrow();

        match self.game.frame(&input, &self.surface, &self.status) {
            Ok(events) => {
                if events.contains(&GameEvent::Victory) {
                    match self.game.snapshot_json() {
                        Ok(snapshot) => debug!(frame = self.game.frames(), %snapshot, "final state"),
                        Err(e) => error!("failed to serialize game state :: {}", e),
                    }
                }
            }
            Err(e) => error!(frame = self.game.frames(), "failed to draw frame :: {:?}", e),
        }
    }
}

fn read_config(canvas: &HtmlCanvasElement) -> Result<GameConfig, SetupError> {
    match canvas.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => Ok(GameConfig::from_json(&json)?),
        None => Ok(GameConfig::default()),
    }
}
