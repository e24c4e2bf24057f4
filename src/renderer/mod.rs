//! Presentation seam
//!
//! The simulation hands a `Frame` to a `Renderer` once per tick. Drawing,
//! fonts and windows belong to the renderer implementation.

pub mod frame;
pub mod log_renderer;

pub use frame::{Frame, TextItem};
pub use log_renderer::LogRenderer;

use crate::error::GameError;

/// Consumer of per-tick frames. Has no effect on simulation state.
pub trait Renderer {
    fn present(&mut self, frame: &Frame) -> Result<(), GameError>;
}
