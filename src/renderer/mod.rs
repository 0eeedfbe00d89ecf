//! Canvas rendering module
//!
//! Drawing goes through the `Surface` trait so scenes can be checked
//! without a browser.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{Surface, draw_frame, draw_game_over};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
