//! Collision detection for the fixed field
//!
//! Three checks, all run after the ball has moved for the tick:
//! top/bottom walls, the two paddles, and the left/right scoring lines.

use super::rect::Rect;
use super::state::Side;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Ball crossed the top or bottom wall
pub fn wall_collision(ball: &Rect) -> bool {
    ball.top() < 0 || ball.bottom() > FIELD_HEIGHT
}

/// Which paddle the ball overlaps, if any. The right paddle is checked first.
pub fn paddle_collision(ball: &Rect, right_paddle: &Rect, left_paddle: &Rect) -> Option<Side> {
    if ball.intersects(right_paddle) {
        Some(Side::Right)
    } else if ball.intersects(left_paddle) {
        Some(Side::Left)
    } else {
        None
    }
}

/// Side that wins a point when the ball has left the field horizontally
pub fn scoring_side(ball: &Rect) -> Option<Side> {
    if ball.left() < 0 {
        Some(Side::Right)
    } else if ball.right() > FIELD_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}

/// X position that puts the ball flush against the paddle face, on the field side
pub fn push_out_x(ball: &Rect, paddle: &Rect, side: Side) -> i32 {
    match side {
        Side::Left => paddle.right(),
        Side::Right => paddle.left() - ball.size.x,
    }
}
