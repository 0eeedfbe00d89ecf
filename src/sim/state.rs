//! Game state and core simulation types
//!
//! The whole session lives in one `GameState` owned by the driver; nothing
//! here is global.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::tuning::Tuning;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The countdown reached zero
    TimeExpired,
    /// The last life was lost to a missed target
    LivesExhausted,
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver(GameOverReason),
}

/// Things the driver reacts to (sound, HUD, ranking)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Target clicked for `points`
    Hit { points: u32 },
    /// Target passed the bottom edge
    LifeLost { remaining: u8 },
    /// Phase switched to game over
    GameOver(GameOverReason),
}

/// The falling circle
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Center; y grows downward
    pub pos: Vec2,
    pub radius: f32,
    /// Radius at spawn and after a lost life
    pub base_radius: f32,
    pub min_radius: f32,
    /// Pixels per frame
    pub speed: f32,
    /// Palette color name
    pub color: String,
}

impl Target {
    /// A fresh target at the top of the arena
    pub fn new(tuning: &Tuning, x: f32, color: String) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            radius: tuning.initial_radius,
            base_radius: tuning.initial_radius,
            min_radius: tuning.min_radius,
            speed: tuning.base_speed,
            color,
        }
    }

    /// Accelerate, shrink and fall by one frame
    pub fn advance(&mut self, accel: f32, shrink: f32) {
        self.speed += accel;
        if self.radius > self.min_radius {
            self.radius = (self.radius - shrink).max(self.min_radius);
        }
        self.pos.y += self.speed;
    }

    /// Move back to the top at `x` with a new color; size and speed are kept
    pub fn reposition(&mut self, x: f32, color: String) {
        self.pos = Vec2::new(x, 0.0);
        self.color = color;
    }

    /// Restore spawn radius and speed
    pub fn reset_size_and_speed(&mut self, base_speed: f32) {
        self.radius = self.base_radius;
        self.speed = base_speed;
    }

    /// Whether the bottom edge is past `floor`
    pub fn below(&self, floor: f32) -> bool {
        self.pos.y + self.radius > floor
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance parameters for this session
    pub tuning: Tuning,
    /// Session RNG (spawn x and color)
    rng: Pcg32,
    pub score: u64,
    pub lives: u8,
    /// Seconds left on the countdown
    pub time_left: f64,
    /// Timestamp of the previous frame (ms); `None` until the first frame
    pub last_frame_ms: Option<f64>,
    /// Set once time has actually been taken off the countdown
    pub countdown_started: bool,
    pub phase: GamePhase,
    pub target: Target,
    /// Events since the driver last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let (x, color) = roll_spawn(&mut rng, &tuning);
        let target = Target::new(&tuning, x, color);

        Self {
            score: 0,
            lives: tuning.start_lives,
            time_left: tuning.time_limit_secs,
            last_frame_ms: None,
            countdown_started: false,
            phase: GamePhase::Playing,
            target,
            events: Vec::new(),
            rng,
            tuning,
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    /// Reason the session ended, if it has
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            GamePhase::GameOver(reason) => Some(reason),
            GamePhase::Playing => None,
        }
    }

    /// Whether the countdown has started ticking down
    pub fn timer_started(&self) -> bool {
        self.countdown_started
    }

    /// Move the target to a random spot along the top with a random color
    pub fn respawn_target(&mut self) {
        let (x, color) = roll_spawn(&mut self.rng, &self.tuning);
        self.target.reposition(x, color);
    }

    /// Enter the terminal phase (no-op if already over)
    pub fn end(&mut self, reason: GameOverReason) {
        if self.is_game_over() {
            return;
        }
        self.phase = GamePhase::GameOver(reason);
        self.events.push(GameEvent::GameOver(reason));
        log::info!("Game over ({:?}), final score {}", reason, self.score);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

/// Pick a spawn x and palette color
fn roll_spawn(rng: &mut Pcg32, tuning: &Tuning) -> (f32, String) {
    let (lo, hi) = tuning.spawn_x_range();
    let x = if hi > lo { rng.random_range(lo..hi) } else { lo };
    let color = if tuning.palette.is_empty() {
        // Nothing to draw from; fall back to a color with no score entry
        "white".to_string()
    } else {
        tuning.palette[rng.random_range(0..tuning.palette.len())].clone()
    };
    (x, color)
}
