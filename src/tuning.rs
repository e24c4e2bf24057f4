//! Gameplay tuning
//!
//! The knobs that shape how the match plays. Defaults come from `consts`;
//! embedders can also load them from JSON. Field size is deliberately absent.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Paddles ===
    /// Human paddle step per tick (pixels)
    pub human_paddle_speed: i32,
    /// AI paddle base step per tick, before damping
    pub ai_paddle_speed: i32,
    /// AI damping factor, in (0, 1)
    pub ai_damping: f32,
    /// Damping for the left paddle when the AI plays both sides
    pub demo_damping: f32,

    // === Ball ===
    /// Ball step per tick along each axis (pixels)
    pub ball_speed: i32,
    /// Move the ball flush against a paddle after bouncing off it.
    /// Off by default: the ball may keep overlapping for one more tick.
    pub paddle_push_out: bool,

    // === Loop ===
    /// End-of-tick pacing delay in milliseconds
    pub tick_delay_ms: u64,
    /// FPS aggregation window in seconds
    pub fps_window_secs: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            human_paddle_speed: HUMAN_PADDLE_SPEED,
            ai_paddle_speed: AI_PADDLE_SPEED,
            ai_damping: AI_DAMPING,
            demo_damping: DEMO_DAMPING,

            ball_speed: BALL_SPEED,
            paddle_push_out: false,

            tick_delay_ms: TICK_DELAY_MS,
            fps_window_secs: FPS_WINDOW_SECS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::debug!("Loaded tuning: {:?}", tuning);
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value is inside its playable range
    pub fn validate(&self) -> Result<(), GameError> {
        if self.human_paddle_speed <= 0 || self.ai_paddle_speed <= 0 || self.ball_speed <= 0 {
            return Err(GameError::InvalidTuning(
                "paddle and ball speeds must be positive".to_string(),
            ));
        }
        let travel = FIELD_HEIGHT - PADDLE_HEIGHT;
        if self.human_paddle_speed > travel || self.ai_paddle_speed > travel {
            return Err(GameError::InvalidTuning(format!(
                "paddle speeds must be at most {travel}"
            )));
        }
        // Faster than its own size, the ball could tunnel through a paddle
        if self.ball_speed > BALL_SIZE {
            return Err(GameError::InvalidTuning(format!(
                "ball_speed must be at most {BALL_SIZE}, got {}",
                self.ball_speed
            )));
        }
        for (name, damping) in [("ai_damping", self.ai_damping), ("demo_damping", self.demo_damping)] {
            if !(damping > 0.0 && damping < 1.0) {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be in (0, 1), got {damping}"
                )));
            }
        }
        if self.ai_step() < 1 {
            return Err(GameError::InvalidTuning(format!(
                "ai_paddle_speed * ai_damping must be at least 1, got {}",
                self.ai_paddle_speed as f32 * self.ai_damping
            )));
        }
        if !(self.fps_window_secs > 0.0) {
            return Err(GameError::InvalidTuning(
                "fps_window_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// AI step per tick: base speed times damping, truncated toward zero
    pub fn ai_step(&self) -> i32 {
        (self.ai_paddle_speed as f32 * self.ai_damping) as i32
    }

    /// Left paddle step per tick in demo mode
    pub fn demo_step(&self) -> i32 {
        ((self.ai_paddle_speed as f32 * self.demo_damping) as i32).max(1)
    }
}
