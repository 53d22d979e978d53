use std::{cell::RefCell, rc::Rc};

use futures::channel::oneshot;
use shared::Coordinate;
use thiserror::Error;
use wasm_bindgen::{JsCast, prelude::Closure};

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("Geolocation is not supported by this browser")]
    Unsupported,
    #[error("Unable to determine your position: {0}")]
    Failed(String),
}

/// One-shot position query. The browser's success/error callback pair is
/// bridged into a single awaitable result, so callers compose it like any
/// other request instead of threading continuations through the DOM.
pub async fn current_position() -> Result<Coordinate, LocateError> {
    let geolocation = web_sys::window()
        .and_then(|window| window.navigator().geolocation().ok())
        .ok_or(LocateError::Unsupported)?;

    let (sender, receiver) = oneshot::channel();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let on_success = {
        let sender = Rc::clone(&sender);
        Closure::once(move |position: web_sys::Position| {
            let coords = position.coords();
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Ok(Coordinate {
                    lat: coords.latitude(),
                    lng: coords.longitude(),
                }));
            }
        })
    };
    let on_error = {
        let sender = Rc::clone(&sender);
        Closure::once(move |error: web_sys::PositionError| {
            if let Some(sender) = sender.borrow_mut().take() {
                let _ = sender.send(Err(LocateError::Failed(error.message())));
            }
        })
    };

    geolocation
        .get_current_position_with_error_callback(
            on_success.as_ref().unchecked_ref(),
            Some(on_error.as_ref().unchecked_ref()),
        )
        .map_err(|_| LocateError::Unsupported)?;

    // The closures stay alive across the await; the channel resolves once
    // the browser invokes one of them.
    receiver.await.unwrap_or(Err(LocateError::Unsupported))
}
