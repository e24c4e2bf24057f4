//! Error types
//!
//! The simulation itself is total and never fails. Errors only come from the
//! collaborators around it (input source, renderer) and from loading tuning data.

/// Errors surfaced by the game controller and its collaborators
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// The input collaborator could not be polled
    #[error("input source failed: {0}")]
    Input(String),

    /// The renderer could not present a frame
    #[error("renderer failed: {0}")]
    Renderer(String),

    /// Tuning values are outside their valid range
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    /// JSON (de)serialization of tuning or snapshots failed
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
