use std::{cell::RefCell, rc::Rc};

use siege_core::{StatusSink, Surface};
use tracing::error;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::error::SetupError;

pub fn js_window() -> Result<web_sys::Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, SetupError> {
    js_window()?.document().ok_or(SetupError::NoDocument)
}

/// Look up an element by id and cast it to the expected kind
pub fn element_by_id<T: JsCast>(id: &'static str, expected: &'static str) -> Result<T, SetupError> {
    document()?
        .get_element_by_id(id)
        .ok_or(SetupError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| SetupError::WrongElement { id, expected })
}

pub fn request_animation_frame(f: &Closure<dyn FnMut()>) -> Result<i32, SetupError> {
    Ok(js_window()?.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// Trait for the canvas the game draws on
pub trait Canvas {
    /// Sets the drawing buffer to the size of the playfield
    fn set_logical_size(&self, width: f64, height: f64);
    fn get_2d_context(&self) -> Result<CanvasRenderingContext2d, SetupError>;
}

impl Canvas for HtmlCanvasElement {
    fn set_logical_size(&self, width: f64, height: f64) {
        self.set_width(width as u32);
        self.set_height(height as u32);
    }

    fn get_2d_context(&self) -> Result<CanvasRenderingContext2d, SetupError> {
        self.get_context("2d")?
            .ok_or(SetupError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SetupError::NoContext)
    }
}

/// The 2d context of the game canvas
pub struct CanvasSurface(pub CanvasRenderingContext2d);

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn set_fill_style(&self, color: &str) {
        self.0.set_fill_style(&JsValue::from_str(color));
    }

    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64) {
        self.0.fill_rect(x, y, width, height);
    }

    fn fill_circle(&self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.0.begin_path();
        self.0.arc(x, y, radius, 0.0, std::f64::consts::TAU)?;
        self.0.fill();
        Ok(())
    }

    fn save(&self) {
        self.0.save();
    }

    fn restore(&self) {
        self.0.restore();
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), JsValue> {
        self.0.translate(x, y)
    }

    fn rotate(&self, angle: f64) -> Result<(), JsValue> {
        self.0.rotate(angle)
    }
}

/// The element showing the score line
pub struct StatusElement(pub HtmlElement);

impl StatusSink for StatusElement {
    fn set_status(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Call `frame` once per display refresh, forever
pub fn start_animation_loop(mut frame: Box<dyn FnMut()>) -> Result<(), SetupError> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let closure = Closure::wrap(Box::new(move || {
        frame();
        // Schedule ourself for another requestAnimationFrame callback.
        if let Some(next) = f.borrow().as_ref() {
            if let Err(e) = request_animation_frame(next) {
                error!("failed to schedule the next frame :: {}", e);
            }
        }
    }) as Box<dyn FnMut()>);

    *g.borrow_mut() = Some(closure);

    let result = match g.borrow().as_ref() {
        Some(first) => request_animation_frame(first).map(|_| ()),
        None => Ok(()),
    };
    result
}
