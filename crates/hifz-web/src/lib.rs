//! # hifz-web - Browser glue for the memorization forms
//!
//! Wasm module loaded by the server-rendered pages. On start it
//! - binds the cascading sourate -> page selects of each form variant,
//! - installs the submit normalizer on every form,
//! - initializes the dynamic progress bars.
//!
//! State transitions live in [`hifz_core`]; this crate looks elements up,
//! listens to events, fetches, and renders the resulting state into the DOM.

pub mod cascade;
pub mod dom;
pub mod fetch;
pub mod progress;
pub mod submit;
pub mod wiring;

use hifz_core::{Error, Result};
use wasm_bindgen::prelude::*;
use web_sys::Document;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");

    if let Err(err) = boot() {
        log::error!("hifz-web failed to start: {err}");
    }
}

fn boot() -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::dom("no document available"))?;
    bind_all(&document);
    Ok(())
}

/// Wire every component against `document`. Separate from [`start`] so
/// browser tests can drive a prepared document.
pub fn bind_all(document: &Document) {
    for binding in wiring::SELECT_BINDINGS {
        cascade::bind(document, binding);
    }
    submit::install(document);
    progress::init(document);
}
