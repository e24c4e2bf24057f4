//! Headless renderer that reports frames through the `log` facade

use super::{Frame, Renderer};
use crate::error::GameError;
use crate::sim::Score;

/// Logs score and pause changes at info level and every frame at trace level
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    last_score: Score,
    last_paused: bool,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn present(&mut self, frame: &Frame) -> Result<(), GameError> {
        self.frames += 1;

        if frame.score != self.last_score {
            log::info!("Score {} (fps {})", frame.score, frame.fps);
            self.last_score = frame.score;
        }
        if frame.paused != self.last_paused {
            log::info!("{}", if frame.paused { "PAUSED" } else { "Resumed" });
            self.last_paused = frame.paused;
        }

        log::trace!(
            "frame {}: ball {:?} left {:?} right {:?}",
            self.frames,
            frame.ball.pos,
            frame.left_paddle.pos,
            frame.right_paddle.pos
        );
        Ok(())
    }
}
