//! Classic Pong entry point
//!
//! No window backend is bundled, so the native binary plays a headless demo
//! match (AI on both paddles) at the normal tick rate and logs the result.
//! Set `RUST_LOG=info` (or `debug`/`trace`) to follow it.

use anyhow::{Context, Result};

use classic_pong::platform::{ScriptedInput, SystemClock};
use classic_pong::renderer::LogRenderer;
use classic_pong::{Game, Tuning};

/// Length of the demo match (~20 seconds at 60 Hz)
const DEMO_TICKS: usize = 60 * 20;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Classic Pong (headless demo) starting...");

    let mut game = Game::new(
        Tuning::default(),
        ScriptedInput::idle(DEMO_TICKS),
        LogRenderer::new(),
        SystemClock::new(),
    )
    .context("default tuning is invalid")?
    .with_demo(true);

    let summary = game.run().context("demo match failed")?;
    log::info!(
        "Demo finished: {} - {} after {} ticks ({:.1} fps)",
        summary.score.left,
        summary.score.right,
        summary.simulated_ticks,
        summary.fps
    );

    let snapshot = game
        .state()
        .snapshot_json()
        .context("failed to serialize final state")?;
    log::debug!("Final state: {}", snapshot);

    println!("Final score: {}", summary.score);
    Ok(())
}
