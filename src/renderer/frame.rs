//! Per-tick render snapshot

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{GameState, Rect, Score};

/// Score text anchor (top center)
pub const SCORE_TEXT_POS: IVec2 = IVec2::new(FIELD_WIDTH / 2 - 50, 20);
/// FPS text anchor (top left)
pub const FPS_TEXT_POS: IVec2 = IVec2::new(10, 10);
/// Pause banner anchor (field center)
pub const PAUSED_TEXT_POS: IVec2 = IVec2::new(FIELD_WIDTH / 2 - 50, FIELD_HEIGHT / 2 - 10);

/// A line of text and its top-left anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub pos: IVec2,
}

impl TextItem {
    fn new(text: impl Into<String>, pos: IVec2) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Everything a renderer needs to draw one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Rect,
    pub paused: bool,
    pub score: Score,
    /// Whole frames per second from the last completed window
    pub fps: u32,
    /// Text overlay. While paused this is only the pause banner.
    pub texts: Vec<TextItem>,
}

impl Frame {
    pub fn capture(state: &GameState, fps: f64) -> Self {
        let paused = state.is_paused();
        let fps = fps as u32;

        let texts = if paused {
            vec![TextItem::new("PAUSED", PAUSED_TEXT_POS)]
        } else {
            vec![
                TextItem::new(state.score.to_string(), SCORE_TEXT_POS),
                TextItem::new(format!("FPS: {fps}"), FPS_TEXT_POS),
            ]
        };

        Self {
            left_paddle: state.left_paddle.rect(),
            right_paddle: state.right_paddle.rect(),
            ball: state.ball.rect(),
            paused,
            score: state.score,
            fps,
            texts,
        }
    }

    /// Paddles and ball are hidden while paused
    pub fn show_entities(&self) -> bool {
        !self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_running_frame_layout() {
        let mut state = GameState::new(&Tuning::default());
        state.score = Score { left: 2, right: 5 };

        let frame = Frame::capture(&state, 59.7);

        assert!(frame.show_entities());
        assert_eq!(frame.fps, 59);
        assert_eq!(frame.ball, state.ball.rect());
        assert_eq!(
            frame.texts,
            vec![
                TextItem::new("2 - 5", IVec2::new(350, 20)),
                TextItem::new("FPS: 59", IVec2::new(10, 10)),
            ]
        );
    }

    #[test]
    fn test_paused_frame_shows_banner_only() {
        let mut state = GameState::new(&Tuning::default());
        state.toggle_pause();

        let frame = Frame::capture(&state, 60.0);

        assert!(frame.paused);
        assert!(!frame.show_entities());
        assert_eq!(frame.texts, vec![TextItem::new("PAUSED", IVec2::new(350, 290))]);
    }
}
