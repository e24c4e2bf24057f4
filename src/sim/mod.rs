//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick steps only
//! - Integer pixel geometry
//! - No rendering, clock, or platform dependencies

pub mod ai;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use ai::{chase_intent, track_ball};
pub use collision::{paddle_collision, scoring_side, wall_collision};
pub use rect::Rect;
pub use state::{
    Ball, BallStep, GameEvent, GamePhase, GameState, Paddle, PaddleIntent, Score, Side,
};
pub use tick::{TickInput, tick};
