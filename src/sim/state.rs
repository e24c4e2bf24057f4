//! Game state and core simulation types
//!
//! Everything the match needs between ticks lives here: both paddles, the
//! ball, the score and the running/paused phase.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{paddle_collision, push_out_x, scoring_side, wall_collision};
use super::rect::Rect;
use crate::consts::*;
use crate::error::GameError;
use crate::tuning::Tuning;
use crate::{centered_x, centered_y};

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Entities move every tick
    #[default]
    Running,
    /// Entities are frozen; only the paused signal is shown
    Paused,
}

/// One side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Things that happened during a tick, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Paused,
    Resumed,
    Reset,
    WallBounce,
    PaddleBounce(Side),
    PointScored(Side),
}

/// Vertical movement requested for a paddle this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Up,
    Down,
    #[default]
    Idle,
}

/// A paddle (top-left position, fixed size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Paddle {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    /// Left (human) paddle at its starting position
    pub fn left() -> Self {
        Self::new(0, centered_y(PADDLE_HEIGHT))
    }

    /// Right (AI) paddle at its starting position
    pub fn right() -> Self {
        Self::new(FIELD_WIDTH - PADDLE_WIDTH, centered_y(PADDLE_HEIGHT))
    }

    #[inline]
    fn max_y(&self) -> i32 {
        FIELD_HEIGHT - self.size.y
    }

    /// Move up by `amount`, never past the top wall
    pub fn move_up(&mut self, amount: i32) {
        self.pos.y = self.pos.y.saturating_sub(amount).clamp(0, self.max_y());
    }

    /// Move down by `amount`, never past the bottom wall
    pub fn move_down(&mut self, amount: i32) {
        self.pos.y = self.pos.y.saturating_add(amount).clamp(0, self.max_y());
    }

    /// Direct placement, unclamped. Only reset uses it.
    pub fn set_y(&mut self, y: i32) {
        self.pos.y = y;
    }

    pub fn apply_intent(&mut self, intent: PaddleIntent, amount: i32) {
        match intent {
            PaddleIntent::Up => self.move_up(amount),
            PaddleIntent::Down => self.move_down(amount),
            PaddleIntent::Idle => {}
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    #[inline]
    pub fn center_y(&self) -> i32 {
        self.rect().center_y()
    }
}

/// What a single ball step did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BallStep {
    pub wall_bounce: bool,
    pub paddle_bounce: Option<Side>,
    pub scored: Option<Side>,
}

/// The ball: square, moving `dir * speed` pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub size: i32,
    /// Axis-wise travel sign, each component ±1
    pub dir: IVec2,
    pub speed: i32,
}

impl Ball {
    pub fn new(pos: IVec2, speed: i32) -> Self {
        Self {
            pos,
            size: BALL_SIZE,
            dir: IVec2::ONE,
            speed,
        }
    }

    /// Field center for this ball's size
    pub fn center_pos(&self) -> IVec2 {
        IVec2::new(centered_x(self.size), centered_y(self.size))
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: IVec2::splat(self.size),
        }
    }

    /// Advance one tick: move, bounce off walls, bounce off paddles, then score.
    ///
    /// Bounces only flip direction. Without `push_out` the ball is not moved
    /// out of a paddle it overlaps, so a grazing hit can bounce twice. On a
    /// point the ball returns to the field center and keeps its direction.
    pub fn advance(&mut self, right_paddle: Rect, left_paddle: Rect, push_out: bool) -> BallStep {
        let mut step = BallStep::default();

        self.pos += self.dir * self.speed;

        if wall_collision(&self.rect()) {
            self.dir.y = -self.dir.y;
            step.wall_bounce = true;
        }

        let ball = self.rect();
        if let Some(side) = paddle_collision(&ball, &right_paddle, &left_paddle) {
            self.dir.x = -self.dir.x;
            if push_out {
                let paddle = match side {
                    Side::Left => left_paddle,
                    Side::Right => right_paddle,
                };
                self.pos.x = push_out_x(&ball, &paddle, side);
            }
            step.paddle_bounce = Some(side);
        }

        if let Some(side) = scoring_side(&self.rect()) {
            self.pos = self.center_pos();
            step.scored = Some(side);
        }

        step
    }
}

/// Match score
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

/// Complete match state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: Score,
    /// Human paddle
    pub left_paddle: Paddle,
    /// AI paddle
    pub right_paddle: Paddle,
    pub ball: Ball,
    /// Simulated (running) ticks since start
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            phase: GamePhase::Running,
            score: Score::new(),
            left_paddle: Paddle::left(),
            right_paddle: Paddle::right(),
            ball: Ball::new(IVec2::new(BALL_START_X, BALL_START_Y), tuning.ball_speed),
            time_ticks: 0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    /// Flip Running ⇄ Paused and return the new phase
    pub fn toggle_pause(&mut self) -> GamePhase {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
        };
        log::info!("Match {:?}", self.phase);
        self.phase
    }

    /// Back to a fresh rally: running, 0 - 0, ball centered heading (+1, +1),
    /// paddles centered. Ball speed and the tick counter are kept.
    pub fn reset(&mut self) {
        self.phase = GamePhase::Running;
        self.score = Score::new();
        self.ball.pos = self.ball.center_pos();
        self.ball.dir = IVec2::ONE;

        let paddle_y = centered_y(self.left_paddle.size.y);
        self.left_paddle.set_y(paddle_y);
        self.right_paddle.set_y(paddle_y);
        log::info!("Match reset");
    }

    /// Serialize the state as JSON
    pub fn snapshot_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}
