//! Click Drop - a falling-circle reflex game
//!
//! Core modules:
//! - `game`: Session controller tying simulation, drawing and storage together
//! - `sim`: Session state, frame update and click handling
//! - `ranking`: Top-5 leaderboard persisted to LocalStorage
//! - `renderer`: Canvas 2D drawing behind a small `Surface` trait
//! - `platform`: Browser/native platform abstraction (storage, clock)
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod game;
pub mod platform;
pub mod ranking;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{Game, Hud};
pub use ranking::{Ranking, RankingEntry, RankingStore};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default canvas dimensions (overridden by the real canvas size on web)
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Session time limit in seconds
    pub const TIME_LIMIT_SECS: f64 = 180.0;
    /// Lives at session start
    pub const START_LIVES: u8 = 3;

    /// Target radius at spawn and after a lost life
    pub const TARGET_RADIUS: f32 = 30.0;
    /// Radius floor while shrinking
    pub const TARGET_MIN_RADIUS: f32 = 10.0;
    /// Radius lost per frame
    pub const TARGET_SHRINK_PER_FRAME: f32 = 0.005;

    /// Fall speed at spawn (pixels per frame)
    pub const TARGET_BASE_SPEED: f32 = 1.0;
    /// Speed gained per frame
    pub const TARGET_ACCEL_PER_FRAME: f32 = 0.01;

    /// Horizontal inset so the target never spawns across an edge
    pub const SPAWN_MARGIN: f32 = 25.0;

    /// Points for a palette color missing from the score table
    pub const DEFAULT_POINTS: u32 = 1;

    /// Leaderboard length
    pub const MAX_RANKING_ENTRIES: usize = 5;

    /// LocalStorage keys
    pub const RANKING_KEY: &str = "clickGameRanking";
    pub const RANKING_SAVED_KEY: &str = "rankingSaved";
    pub const SETTINGS_KEY: &str = "clickGameSettings";
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}
