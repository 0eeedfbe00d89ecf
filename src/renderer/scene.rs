//! Scene drawing for the play field and the game-over overlay

use glam::Vec2;

use crate::sim::{GameOverReason, Target};
use crate::ui;

/// The handful of 2D operations the game needs
pub trait Surface {
    /// Drawable size in pixels
    fn size(&self) -> Vec2;
    /// Clear a rectangle to transparent
    fn clear_rect(&mut self, origin: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str);
    /// Text horizontally centered on `pos.x`, baseline at `pos.y`
    fn fill_text_centered(&mut self, text: &str, pos: Vec2, font: &str, color: &str);
}

/// Overlay colors and fonts
mod style {
    pub const OVERLAY: &str = "rgba(0, 0, 0, 0.7)";
    pub const TEXT: &str = "white";
    pub const TITLE_FONT: &str = "30px Arial";
    pub const SCORE_FONT: &str = "24px Arial";
}

/// Clear the field and draw the target
pub fn draw_frame(surface: &mut impl Surface, target: &Target) {
    let size = surface.size();
    surface.clear_rect(Vec2::ZERO, size);
    surface.fill_circle(target.pos, target.radius, &target.color);
}

/// Dim the field and print the result
pub fn draw_game_over(surface: &mut impl Surface, reason: GameOverReason, score: u64) {
    let size = surface.size();
    let center = size / 2.0;

    surface.fill_rect(Vec2::ZERO, size, style::OVERLAY);
    surface.fill_text_centered(
        ui::game_over_title(reason),
        center - Vec2::new(0.0, 20.0),
        style::TITLE_FONT,
        style::TEXT,
    );
    surface.fill_text_centered(
        &ui::final_score_text(score),
        center + Vec2::new(0.0, 30.0),
        style::SCORE_FONT,
        style::TEXT,
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::tuning::Tuning;

    /// Draw call log
    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Clear(Vec2, Vec2),
        Circle(Vec2, f32, String),
        Rect(Vec2, Vec2, String),
        Text(String, Vec2, String),
    }

    /// Surface that records what was drawn
    pub struct RecordingSurface {
        pub size: Vec2,
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn new(w: f32, h: f32) -> Self {
            Self {
                size: Vec2::new(w, h),
                ops: Vec::new(),
            }
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Vec2 {
            self.size
        }
        fn clear_rect(&mut self, origin: Vec2, size: Vec2) {
            self.ops.push(Op::Clear(origin, size));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
            self.ops.push(Op::Circle(center, radius, color.to_string()));
        }
        fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: &str) {
            self.ops.push(Op::Rect(origin, size, color.to_string()));
        }
        fn fill_text_centered(&mut self, text: &str, pos: Vec2, font: &str, _color: &str) {
            self.ops.push(Op::Text(text.to_string(), pos, font.to_string()));
        }
    }

    #[test]
    fn test_draw_frame() {
        let tuning = Tuning::default();
        let mut target = crate::sim::Target::new(&tuning, 120.0, "teal".into());
        target.pos.y = 40.0;

        let mut surface = RecordingSurface::new(400.0, 400.0);
        draw_frame(&mut surface, &target);
        assert_eq!(
            surface.ops,
            vec![
                Op::Clear(Vec2::ZERO, Vec2::new(400.0, 400.0)),
                Op::Circle(Vec2::new(120.0, 40.0), 30.0, "teal".into()),
            ]
        );
    }

    #[test]
    fn test_draw_game_over() {
        let mut surface = RecordingSurface::new(400.0, 300.0);
        draw_game_over(&mut surface, GameOverReason::LivesExhausted, 17);
        assert_eq!(surface.ops.len(), 3);
        assert_eq!(
            surface.ops[0],
            Op::Rect(Vec2::ZERO, Vec2::new(400.0, 300.0), style::OVERLAY.into())
        );
        assert_eq!(
            surface.ops[1],
            Op::Text(
                "GAME OVER (out of lives)".into(),
                Vec2::new(200.0, 130.0),
                style::TITLE_FONT.into()
            )
        );
        assert_eq!(
            surface.ops[2],
            Op::Text("Final score: 17".into(), Vec2::new(200.0, 180.0), style::SCORE_FONT.into())
        );
    }
}
