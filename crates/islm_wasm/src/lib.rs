//! WASM bindings for `islm_core`.
//!
//! The presentation layer owns a [`WasmModel`] per parameter form and calls it
//! once per render. Values cross the boundary as plain JS objects via
//! `serde-wasm-bindgen`; undefined curve samples arrive as `null`.

mod model;
mod shared;

pub use model::{default_parameters, default_settings, select_plot_range, WasmModel};
