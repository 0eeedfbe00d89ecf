//! Per-frame simulation step
//!
//! Called once per display refresh with the frame timestamp. Physics is
//! frame-based (fixed increments per call); only the countdown uses real time.

use super::state::{GameEvent, GameOverReason, GameState, Target};

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Session already over; nothing changed
    Halted,
    /// Countdown hit zero this frame; physics was skipped
    TimeExpired,
    /// Physics advanced. `drawn` is the target as it stood before moving,
    /// which is what gets drawn this frame.
    Advanced { drawn: Target, life_lost: bool },
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, now_ms: f64) -> FrameOutcome {
    if state.is_game_over() {
        return FrameOutcome::Halted;
    }

    // Countdown (skipped on the first frame, which only sets the baseline)
    if let Some(last) = state.last_frame_ms {
        let elapsed_secs = (now_ms - last) / 1000.0;
        state.time_left -= elapsed_secs;
        state.countdown_started = true;

        if state.time_left <= 0.0 {
            state.time_left = 0.0;
            state.end(GameOverReason::TimeExpired);
            return FrameOutcome::TimeExpired;
        }
    }
    state.last_frame_ms = Some(now_ms);

    let drawn = state.target.clone();

    let accel = state.tuning.accel_per_frame;
    let shrink = state.tuning.shrink_per_frame;
    state.target.advance(accel, shrink);

    let life_lost = state.target.below(state.tuning.arena_height);
    if life_lost {
        lose_life(state);
    }

    FrameOutcome::Advanced { drawn, life_lost }
}

/// Target slipped past the floor
fn lose_life(state: &mut GameState) {
    let base_speed = state.tuning.base_speed;
    state.target.reset_size_and_speed(base_speed);

    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::LifeLost {
        remaining: state.lives,
    });
    log::debug!("Life lost, {} remaining", state.lives);

    if state.lives == 0 {
        state.end(GameOverReason::LivesExhausted);
    } else {
        state.respawn_target();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::GamePhase;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    /// Run frames until a life is lost, returning the outcome of that frame
    fn run_until_miss(state: &mut GameState, now: &mut f64) -> FrameOutcome {
        loop {
            *now += FRAME_MS;
            let outcome = tick(state, *now);
            if matches!(outcome, FrameOutcome::Advanced { life_lost: true, .. }) {
                return outcome;
            }
            assert!(!matches!(outcome, FrameOutcome::TimeExpired));
        }
    }

    #[test]
    fn test_first_frame_sets_baseline() {
        let mut state = GameState::new(1, Tuning::default());
        tick(&mut state, 5000.0);
        assert_eq!(state.time_left, 180.0);
        assert_eq!(state.last_frame_ms, Some(5000.0));
        assert!(!state.timer_started());

        tick(&mut state, 5500.0);
        assert!((state.time_left - 179.5).abs() < 1e-9);
        assert!(state.timer_started());
    }

    #[test]
    fn test_draws_before_moving() {
        let mut state = GameState::new(1, Tuning::default());
        let before = state.target.clone();
        match tick(&mut state, 0.0) {
            FrameOutcome::Advanced { drawn, life_lost } => {
                assert_eq!(drawn, before);
                assert!(!life_lost);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!((state.target.speed - 1.01).abs() < 1e-6);
        assert!((state.target.radius - 29.995).abs() < 1e-5);
        assert!((state.target.pos.y - 1.01).abs() < 1e-6);
    }

    #[test]
    fn test_time_expiry_clamps_and_skips_physics() {
        let mut state = GameState::new(1, Tuning::default());
        tick(&mut state, 1000.0);
        state.time_left = 0.03;
        let target = state.target.clone();

        let outcome = tick(&mut state, 1050.0);
        assert_eq!(outcome, FrameOutcome::TimeExpired);
        assert_eq!(state.time_left, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver(GameOverReason::TimeExpired));
        assert_eq!(state.target, target);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver(GameOverReason::TimeExpired)]
        );
    }

    #[test]
    fn test_halted_after_game_over() {
        let mut state = GameState::new(1, Tuning::default());
        state.end(GameOverReason::TimeExpired);
        let snapshot = (state.score, state.lives, state.time_left, state.target.clone());

        assert_eq!(tick(&mut state, 100.0), FrameOutcome::Halted);
        assert_eq!(tick(&mut state, 200.0), FrameOutcome::Halted);
        assert_eq!(
            snapshot,
            (state.score, state.lives, state.time_left, state.target.clone())
        );
    }

    #[test]
    fn test_miss_resets_and_respawns() {
        let mut state = GameState::new(9, Tuning::default());
        let mut now = 0.0;
        run_until_miss(&mut state, &mut now);

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.target.radius, 30.0);
        assert_eq!(state.target.speed, 1.0);
        assert_eq!(state.target.pos.y, 0.0);
        assert!(state.target.pos.x >= 25.0 && state.target.pos.x <= 375.0);
        assert_eq!(state.drain_events(), vec![GameEvent::LifeLost { remaining: 2 }]);
    }

    #[test]
    fn test_last_life_ends_game_on_same_frame() {
        let mut state = GameState::new(9, Tuning::default());
        let mut now = 0.0;
        run_until_miss(&mut state, &mut now);
        run_until_miss(&mut state, &mut now);
        assert_eq!(state.lives, 1);
        assert!(!state.is_game_over());

        run_until_miss(&mut state, &mut now);
        assert_eq!(state.lives, 0);
        assert_eq!(
            state.phase,
            GamePhase::GameOver(GameOverReason::LivesExhausted)
        );
        // Not respawned: the target stays where it crossed the floor
        assert!(state.target.pos.y > 0.0);
        // but size and speed were still reset
        assert_eq!(state.target.radius, 30.0);
        assert_eq!(state.target.speed, 1.0);

        now += FRAME_MS;
        assert_eq!(tick(&mut state, now), FrameOutcome::Halted);
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_bottom_edge_crossing() {
        let tuning = Tuning::default().with_arena(400.0, 100.0);
        let mut state = GameState::new(2, tuning);
        tick(&mut state, 0.0);
        state.target.pos.y = 69.0;
        state.target.radius = 30.0;
        state.target.speed = 0.99;
        // 69 + 1.0 + 29.995 = 99.995: still on screen
        let outcome = tick(&mut state, FRAME_MS);
        assert!(matches!(outcome, FrameOutcome::Advanced { life_lost: false, .. }));

        let outcome = tick(&mut state, 2.0 * FRAME_MS);
        assert!(matches!(outcome, FrameOutcome::Advanced { life_lost: true, .. }));
        assert_eq!(state.lives, 2);
    }

    proptest! {
        #[test]
        fn prop_speed_grows_by_accel(seed in any::<u64>(), frames in 1usize..400) {
            let mut state = GameState::new(seed, Tuning::default());
            let mut now = 0.0;
            for _ in 0..frames {
                let before = state.target.clone();
                now += FRAME_MS;
                if let FrameOutcome::Advanced { life_lost: false, .. } = tick(&mut state, now) {
                    prop_assert!((state.target.speed - (before.speed + 0.01)).abs() < 1e-4);
                    let expected = if before.radius > 10.0 {
                        (before.radius - 0.005).max(10.0)
                    } else {
                        before.radius
                    };
                    prop_assert!((state.target.radius - expected).abs() < 1e-5);
                    prop_assert!(state.target.radius >= 10.0 && state.target.radius <= 30.0);
                }
            }
        }

        #[test]
        fn prop_time_never_negative(deltas in proptest::collection::vec(0.0f64..5000.0, 1..200)) {
            let tuning = Tuning { time_limit_secs: 20.0, ..Tuning::default() };
            let mut state = GameState::new(11, tuning);
            let mut now = 0.0;
            let mut prev = state.time_left;
            for delta in deltas {
                now += delta;
                tick(&mut state, now);
                prop_assert!(state.time_left >= 0.0);
                prop_assert!(state.time_left <= prev);
                prev = state.time_left;
            }
        }
    }
}
