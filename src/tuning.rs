//! Data-driven game balance
//!
//! Every gameplay number lives here so the driver can size the arena to the
//! canvas (or a test can shrink it) without touching the simulation.

use crate::consts::*;

/// A palette color and the points a hit on it is worth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScore {
    /// CSS color name used for drawing
    pub color: String,
    pub points: u32,
}

impl ColorScore {
    fn new(color: &str, points: u32) -> Self {
        Self {
            color: color.to_string(),
            points,
        }
    }
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,
    /// Horizontal spawn inset
    pub spawn_margin: f32,

    // === Session ===
    pub time_limit_secs: f64,
    pub start_lives: u8,

    // === Target ===
    pub initial_radius: f32,
    pub min_radius: f32,
    pub shrink_per_frame: f32,
    pub base_speed: f32,
    pub accel_per_frame: f32,

    // === Scoring ===
    /// Spawn palette
    pub palette: Vec<String>,
    /// Points per color; colors missing here score `DEFAULT_POINTS`
    pub color_scores: Vec<ColorScore>,

    // === Ranking ===
    pub max_ranking_entries: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        let color_scores = vec![
            ColorScore::new("red", 2),
            ColorScore::new("blue", 3),
            ColorScore::new("green", 2),
            ColorScore::new("skyblue", 3),
            ColorScore::new("purple", 2),
            ColorScore::new("teal", 3),
            ColorScore::new("ivory", 2),
        ];
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            spawn_margin: SPAWN_MARGIN,

            time_limit_secs: TIME_LIMIT_SECS,
            start_lives: START_LIVES,

            initial_radius: TARGET_RADIUS,
            min_radius: TARGET_MIN_RADIUS,
            shrink_per_frame: TARGET_SHRINK_PER_FRAME,
            base_speed: TARGET_BASE_SPEED,
            accel_per_frame: TARGET_ACCEL_PER_FRAME,

            palette: color_scores.iter().map(|c| c.color.clone()).collect(),
            color_scores,

            max_ranking_entries: MAX_RANKING_ENTRIES,
        }
    }
}

impl Tuning {
    /// Tuning for an arena of the given size (canvas dimensions)
    pub fn with_arena(mut self, width: f32, height: f32) -> Self {
        self.arena_width = width;
        self.arena_height = height;
        self
    }

    /// Points a hit on `color` is worth
    pub fn points_for(&self, color: &str) -> u32 {
        self.color_scores
            .iter()
            .find(|c| c.color == color)
            .map(|c| c.points)
            .unwrap_or(DEFAULT_POINTS)
    }

    /// Range of x positions a target may spawn at.
    ///
    /// Collapses to the arena center when the arena is narrower than both margins.
    pub fn spawn_x_range(&self) -> (f32, f32) {
        let lo = self.spawn_margin;
        let hi = self.arena_width - self.spawn_margin;
        if hi <= lo {
            let mid = self.arena_width / 2.0;
            (mid, mid)
        } else {
            (lo, hi)
        }
    }
}
