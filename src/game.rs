//! Session controller
//!
//! Owns the simulation, the drawing surface, the leaderboard, the click
//! sound and the player's audio preferences. The host calls `frame` once per display refresh for as long as it
//! returns `true`; once the session ends the controller draws the overlay,
//! records the score and asks not to be called again.

use glam::Vec2;

use crate::audio::{AudioManager, SoundEffect};
use crate::consts::RANKING_SAVED_KEY;
use crate::platform::KeyValueStore;
use crate::ranking::RankingStore;
use crate::renderer::{Surface, draw_frame, draw_game_over};
use crate::settings::Settings;
use crate::sim::{self, FrameOutcome, GameEvent, GameState};
use crate::tuning::Tuning;
use crate::ui;

/// Text for the three live displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: String,
    pub lives: String,
    pub timer: String,
}

/// One game session bound to its outputs
pub struct Game<S: Surface, K: KeyValueStore> {
    pub state: GameState,
    surface: S,
    ranking: RankingStore<K>,
    audio: AudioManager,
    settings: Settings,
    /// Score already written to the leaderboard this session
    submitted: bool,
}

impl<S: Surface, K: KeyValueStore> Game<S, K> {
    pub fn new(seed: u64, tuning: Tuning, surface: S, store: K, mut audio: AudioManager) -> Self {
        let capacity = tuning.max_ranking_entries;
        let mut ranking = RankingStore::with_capacity(store, capacity);

        // Fresh page load: any submission flag from an earlier session is stale
        if let Err(e) = ranking.storage_mut().remove(RANKING_SAVED_KEY) {
            log::warn!("Failed to clear '{}': {}", RANKING_SAVED_KEY, e);
        }

        let settings = Settings::load(ranking.storage());
        audio.apply_settings(&settings);

        Self {
            state: GameState::new(seed, tuning),
            surface,
            ranking,
            audio,
            settings,
            submitted: false,
        }
    }

    /// Run one display frame. Returns whether another frame should be scheduled.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        match sim::tick(&mut self.state, now_ms) {
            FrameOutcome::Advanced { drawn, .. } => draw_frame(&mut self.surface, &drawn),
            FrameOutcome::TimeExpired | FrameOutcome::Halted => {}
        }
        self.handle_events();

        if let Some(reason) = self.state.game_over_reason() {
            draw_game_over(&mut self.surface, reason, self.state.score);
            self.submit_score();
            return false;
        }
        true
    }

    /// Pointer click at canvas coordinates. Returns points awarded.
    pub fn click(&mut self, point: Vec2) -> Option<u32> {
        let points = sim::click(&mut self.state, point);
        self.handle_events();
        points
    }

    fn handle_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Hit { points } => {
                    log::debug!("Hit for {} points", points);
                    self.audio.play(SoundEffect::Hit);
                }
                GameEvent::LifeLost { remaining } => {
                    log::info!("Target missed, {} lives left", remaining);
                }
                GameEvent::GameOver(reason) => {
                    log::info!("Session ended: {}", ui::game_over_title(reason));
                }
            }
        }
    }

    /// Write the final score once per session
    fn submit_score(&mut self) {
        if self.submitted {
            return;
        }
        self.submitted = true;

        let score = self.state.score;
        let previous_best = self.ranking.load().top_score();
        match self.ranking.add(score) {
            Ok(rank) => {
                if let Some(rank) = rank {
                    log::info!("Score {} ranked #{}", score, rank);
                }
                if previous_best.is_none_or(|best| score > best) {
                    log::info!("New high score: {}", score);
                }
                if let Err(e) = self.ranking.storage_mut().set(RANKING_SAVED_KEY, "true") {
                    log::warn!("Failed to set '{}': {}", RANKING_SAVED_KEY, e);
                }
            }
            Err(e) => log::warn!("Failed to save ranking: {}", e),
        }
    }

    /// Flip the mute preference and persist it. Returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.settings.muted = !self.settings.muted;
        self.audio.set_muted(self.settings.muted);
        if let Err(e) = self.settings.save(self.ranking.storage_mut()) {
            log::warn!("Failed to save settings: {}", e);
        }
        self.settings.muted
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn hud(&self) -> Hud {
        Hud {
            score: ui::score_text(&self.state),
            lives: ui::lives_text(&self.state),
            timer: ui::timer_text(&self.state),
        }
    }

    /// Leaderboard display lines
    pub fn ranking_lines(&self) -> Vec<String> {
        self.ranking.render()
    }

    /// Wipe the leaderboard (after the host has confirmed with the player)
    pub fn reset_ranking(&mut self) -> Vec<String> {
        match self.ranking.reset() {
            Ok(lines) => lines,
            Err(e) => {
                log::warn!("Failed to reset ranking: {}", e);
                self.ranking.render()
            }
        }
    }

    pub fn score_submitted(&self) -> bool {
        self.submitted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn storage(&self) -> &K {
        self.ranking.storage()
    }
}
