//! Simulation module
//!
//! All gameplay logic lives here. No rendering, DOM or storage access:
//! - `tick` advances one display frame
//! - `click` resolves pointer input against the target

pub mod click;
pub mod state;
pub mod tick;

pub use click::{click, hit_test};
pub use state::{GameEvent, GameOverReason, GamePhase, GameState, Target};
pub use tick::{FrameOutcome, tick};
