//! Pointer-reactive dot grid for a page background.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It draws a
//! lattice of faint dots on a canvas; dots near the pointer drift toward it,
//! grow, brighten, pick up a direction-dependent color, and link up with
//! nearby active dots. The canvas fades in on load, an optional glow element
//! follows the pointer, and an optional content element gets a small
//! parallax offset.
//!
//! The page calls [`mount`] once and keeps the returned [`GridHandle`] if it
//! ever needs to stop the effect.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] frame step |
//! | [`lattice`] | Grid construction on resize |
//! | [`field`] | Per-dot pointer influence |
//! | [`palette`] | Angular color band table |
//! | [`pointer`] | Raw/smoothed pointer and the fade-in ramp |
//! | [`geom`] | Points and interpolation |
//! | [`render`] | Canvas drawing and element styling |
//! | [`host`] | DOM lookup, listeners, animation-frame loop |
//! | [`config`] | JSON-overridable settings |
//! | [`error`] | Config and mount errors |
//! | [`consts`] | Default tuning constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod field;
pub mod geom;
pub mod host;
pub mod lattice;
pub mod palette;
pub mod pointer;
pub mod render;

pub use host::{GridHandle, mount};

use wasm_bindgen::prelude::*;

/// Module initializer: panic hook and browser console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
