//! Classic Pong - a two-paddle ball game simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, AI, game state)
//! - `game`: Game controller driving the loop (input → tick → render → pace)
//! - `platform`: Input and clock abstraction for the hosting environment
//! - `renderer`: Frame snapshot handed to the presentation layer
//! - `tuning`: Data-driven gameplay knobs

pub mod error;
pub mod fps;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{Game, RunSummary};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Field dimensions (pixels)
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 20;
    pub const PADDLE_HEIGHT: i32 = 100;
    /// Human paddle step per tick
    pub const HUMAN_PADDLE_SPEED: i32 = 10;
    /// AI paddle base step per tick, before damping
    pub const AI_PADDLE_SPEED: i32 = 15;
    /// AI damping (0.0 freezes the paddle, 1.0 is full speed)
    pub const AI_DAMPING: f32 = 0.3;
    /// Damping used when the AI also drives the left paddle in demo mode
    pub const DEMO_DAMPING: f32 = 0.2;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 20;
    pub const BALL_SPEED: i32 = 4;
    /// Spawn position at game start (top-left corner)
    pub const BALL_START_X: i32 = 400;
    pub const BALL_START_Y: i32 = 300;

    /// End-of-tick pacing delay (~60 Hz)
    pub const TICK_DELAY_MS: u64 = 16;
    /// FPS is aggregated over windows longer than this
    pub const FPS_WINDOW_SECS: f64 = 1.0;
}

/// Top-left y that vertically centers an entity of the given height in the field
#[inline]
pub fn centered_y(height: i32) -> i32 {
    (consts::FIELD_HEIGHT - height) / 2
}

/// Top-left x that horizontally centers an entity of the given width in the field
#[inline]
pub fn centered_x(width: i32) -> i32 {
    (consts::FIELD_WIDTH - width) / 2
}
