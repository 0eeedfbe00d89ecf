//! Click hit-testing and scoring

use glam::Vec2;

use super::state::{GameEvent, GameState, Target};
use crate::distance;

/// Whether `point` lies strictly inside the target (the rim is a miss)
#[inline]
pub fn hit_test(target: &Target, point: Vec2) -> bool {
    distance(point, target.pos) < target.radius
}

/// Handle a click at canvas coordinates `point`.
///
/// Returns the points awarded, or `None` for a miss or a finished session.
pub fn click(state: &mut GameState, point: Vec2) -> Option<u32> {
    if state.is_game_over() || !hit_test(&state.target, point) {
        return None;
    }

    let points = state.tuning.points_for(&state.target.color);
    state.score += u64::from(points);
    state.events.push(GameEvent::Hit { points });
    state.respawn_target();

    Some(points)
}
