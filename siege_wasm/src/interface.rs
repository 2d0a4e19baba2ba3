use std::{cell::RefCell, rc::Rc};

use siege_core::InputState;
use tracing::trace;
use wasm_bindgen::{prelude::*, JsCast};
use web_sys::{Event, KeyboardEvent};

use crate::{error::SetupError, utils::js_window};

/// Window Listeners Setup
///
/// Key events only record which keys are held, the game reads them on its next frame
pub fn setup_window_listeners(input: &Rc<RefCell<InputState>>) -> Result<(), SetupError> {
    add_key_listener("keydown", true, input.clone())?;
    add_key_listener("keyup", false, input.clone())?;

    // Releasing keys while the page is unfocused never reaches us
    let cloned_input = input.clone();
    let blur_callback = Closure::wrap(Box::new(move |_: Event| {
        cloned_input.borrow_mut().clear();
    }) as Box<dyn FnMut(_)>);
    js_window()?
        .add_event_listener_with_callback("blur", blur_callback.as_ref().unchecked_ref())?;
    blur_callback.forget();

    Ok(())
}

fn add_key_listener(
    event_name: &str,
    pressed: bool,
    input: Rc<RefCell<InputState>>,
) -> Result<(), SetupError> {
    let key_callback = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if let Some(key) = input.borrow_mut().handle_key_name(&event.key(), pressed) {
            // keep arrows and space from scrolling the page
            event.prevent_default();
            trace!(?key, pressed, "key");
        }
    }) as Box<dyn FnMut(_)>);
    js_window()?
        .add_event_listener_with_callback(event_name, key_callback.as_ref().unchecked_ref())?;
    key_callback.forget();

    Ok(())
}
