//! Fixed-step simulation tick
//!
//! One call advances the match by one loop iteration. Motion is a fixed
//! number of pixels per tick; elapsed wall-clock time is not used here.

use super::ai::track_ball;
use super::state::{GameEvent, GamePhase, GameState, PaddleIntent};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Human paddle movement (held keys)
    pub intent: PaddleIntent,
    /// Pause toggle
    pub pause: bool,
    /// Reset the match
    pub reset: bool,
    /// Demo mode - AI drives the left paddle as well
    pub demo: bool,
}

/// Advance the game state by one tick and return what happened, in order.
///
/// A pause toggle is applied before a reset, so a reset always leaves the
/// match running. While paused nothing moves.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.pause {
        match state.toggle_pause() {
            GamePhase::Paused => events.push(GameEvent::Paused),
            GamePhase::Running => events.push(GameEvent::Resumed),
        }
    }

    if input.reset {
        state.reset();
        events.push(GameEvent::Reset);
    }

    if state.is_paused() {
        return events;
    }

    state.time_ticks += 1;

    // Left paddle: human intent, or the AI in demo mode
    if input.demo {
        track_ball(&mut state.left_paddle, &state.ball.rect(), tuning.demo_step());
    } else {
        state
            .left_paddle
            .apply_intent(input.intent, tuning.human_paddle_speed);
    }

    // Right paddle: AI
    let ai_move = track_ball(&mut state.right_paddle, &state.ball.rect(), tuning.ai_step());
    log::trace!(
        "tick {}: ai {:?}, right paddle y={}",
        state.time_ticks,
        ai_move,
        state.right_paddle.pos.y
    );

    let step = state.ball.advance(
        state.right_paddle.rect(),
        state.left_paddle.rect(),
        tuning.paddle_push_out,
    );

    if step.wall_bounce {
        events.push(GameEvent::WallBounce);
    }
    if let Some(side) = step.paddle_bounce {
        log::trace!("Ball hit {:?} paddle", side);
        events.push(GameEvent::PaddleBounce(side));
    }
    if let Some(side) = step.scored {
        state.score.award(side);
        log::info!("{:?} scores, {}", side, state.score);
        events.push(GameEvent::PointScored(side));
    }

    events
}
