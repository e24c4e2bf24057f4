//! Reactive paddle AI
//!
//! Chases the ball's current vertical center with a damped step. No
//! trajectory prediction, so it can be beaten.

use super::rect::Rect;
use super::state::{Paddle, PaddleIntent};

/// Decide which way a paddle should move to line up with the ball
pub fn chase_intent(paddle: &Paddle, ball: &Rect) -> PaddleIntent {
    let ball_center = ball.center_y();
    let paddle_center = paddle.center_y();

    if ball_center < paddle_center {
        PaddleIntent::Up
    } else if ball_center > paddle_center {
        PaddleIntent::Down
    } else {
        PaddleIntent::Idle
    }
}

/// Move `paddle` one damped step toward the ball and report the move taken
pub fn track_ball(paddle: &mut Paddle, ball: &Rect, step: i32) -> PaddleIntent {
    let intent = chase_intent(paddle, ball);
    paddle.apply_intent(intent, step);
    intent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::tuning::Tuning;

    fn ball_with_center(center_y: i32) -> Rect {
        Rect::new(400, center_y - BALL_SIZE / 2, BALL_SIZE, BALL_SIZE)
    }

    #[test]
    fn test_moves_down_when_ball_below() {
        let mut paddle = Paddle::right();
        let start = paddle.pos.y;
        // Paddle center is 300, so the ball is 1px below it
        let intent = track_ball(&mut paddle, &ball_with_center(301), Tuning::default().ai_step());
        assert_eq!(intent, PaddleIntent::Down);
        assert_eq!(paddle.pos.y, start + 4);
    }

    #[test]
    fn test_moves_up_when_ball_above() {
        let mut paddle = Paddle::right();
        let start = paddle.pos.y;
        let intent = track_ball(&mut paddle, &ball_with_center(120), Tuning::default().ai_step());
        assert_eq!(intent, PaddleIntent::Up);
        assert_eq!(paddle.pos.y, start - 4);
    }

    #[test]
    fn test_holds_when_centers_match() {
        let mut paddle = Paddle::right();
        let start = paddle.pos.y;
        let ball = ball_with_center(paddle.center_y());
        let intent = track_ball(&mut paddle, &ball, 4);
        assert_eq!(intent, PaddleIntent::Idle);
        assert_eq!(paddle.pos.y, start);
    }

    #[test]
    fn test_tracking_stays_on_field() {
        let mut paddle = Paddle::right();
        let ball = ball_with_center(FIELD_HEIGHT + 500);
        for _ in 0..500 {
            track_ball(&mut paddle, &ball, 4);
        }
        assert_eq!(paddle.pos.y, FIELD_HEIGHT - PADDLE_HEIGHT);
    }
}
