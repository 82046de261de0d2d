//! Cursor trail, click burst and falling petal effects for web pages.
//!
//! The effect logic in [`core`] is platform-agnostic and draws through the
//! [`core::Surface`] trait. On `wasm32` the browser front-end implements that
//! trait with DOM elements and mounts both effects at start.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use app::start;
