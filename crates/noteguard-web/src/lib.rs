//! noteguard-web - Browser binding for noteguard
//!
//! Loaded as a wasm module by the server-rendered notes pages. On start it
//! finds the modal, deletion links, and note forms, builds a
//! [`noteguard_core::NotesPage`] for them, and forwards DOM events into it.

mod bind;
mod dom;
mod error;
mod host;
pub mod logging;
pub mod render_data;

use wasm_bindgen::prelude::wasm_bindgen;

pub use error::WebError;

/// wasm entry point.
#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
    tracing::info!("Starting noteguard...");

    if let Err(error) = bind::install() {
        tracing::error!("Failed to install page controllers: {}", error);
    }
}
