//! Game controller
//!
//! Owns the match state and the collaborators, and runs the loop:
//! poll input → tick → measure frame time → render → pace.

use std::time::Duration;

use crate::error::GameError;
use crate::fps::FpsCounter;
use crate::platform::{Clock, InputSource, KeyMap};
use crate::renderer::{Frame, Renderer};
use crate::sim::{GameEvent, GameState, Score, tick};
use crate::tuning::Tuning;

/// Totals reported when the loop ends
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Loop iterations completed (paused ones included)
    pub frames: u64,
    /// Ticks in which the match was running
    pub simulated_ticks: u64,
    pub score: Score,
    /// Rate from the last completed FPS window
    pub fps: f64,
}

/// The game loop and everything it drives
pub struct Game<I, R, C> {
    state: GameState,
    tuning: Tuning,
    keys: KeyMap,
    input: I,
    renderer: R,
    clock: C,
    fps: FpsCounter,
    /// AI plays the left paddle too
    demo: bool,
}

impl<I: InputSource, R: Renderer, C: Clock> Game<I, R, C> {
    /// Build a game at the start of a match. Fails if `tuning` is out of range.
    pub fn new(tuning: Tuning, input: I, renderer: R, clock: C) -> Result<Self, GameError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(&tuning),
            fps: FpsCounter::new(tuning.fps_window_secs),
            tuning,
            keys: KeyMap::default(),
            input,
            renderer,
            clock,
            demo: false,
        })
    }

    pub fn with_demo(mut self, demo: bool) -> Self {
        self.demo = demo;
        self
    }

    pub fn with_key_map(mut self, keys: KeyMap) -> Self {
        self.keys = keys;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for embedders restoring or staging a match
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn fps(&self) -> f64 {
        self.fps.fps()
    }

    /// Run one loop iteration with `dt` seconds since the previous one.
    ///
    /// Returns the tick's events, or `None` once quit has been requested.
    pub fn run_frame(&mut self, dt: f64) -> Result<Option<Vec<GameEvent>>, GameError> {
        let raw = self.input.poll()?;
        let commands = self.keys.translate(&raw);
        if commands.quit {
            log::info!("Quit requested");
            return Ok(None);
        }

        let mut input = commands.tick;
        input.demo = self.demo;
        let events = tick(&mut self.state, &input, &self.tuning);
        for event in &events {
            log::debug!("{:?}", event);
        }

        self.fps.record(dt);

        let frame = Frame::capture(&self.state, self.fps.fps());
        self.renderer
            .present(&frame)
            .inspect_err(|e| log::error!("Failed to present frame: {e}"))?;

        Ok(Some(events))
    }

    /// Run until quit. Motion is fixed per tick; the clock only paces the
    /// loop and feeds the FPS counter.
    pub fn run(&mut self) -> Result<RunSummary, GameError> {
        log::info!(
            "Game loop starting ({}ms tick delay, demo: {})",
            self.tuning.tick_delay_ms,
            self.demo
        );
        let delay = Duration::from_millis(self.tuning.tick_delay_ms);
        let mut last = self.clock.now();
        let mut frames = 0;

        loop {
            let now = self.clock.now();
            let dt = now.saturating_sub(last).as_secs_f64();
            last = now;

            if self.run_frame(dt)?.is_none() {
                break;
            }
            frames += 1;

            self.clock.sleep(delay);
        }

        let summary = RunSummary {
            frames,
            simulated_ticks: self.state.time_ticks,
            score: self.state.score,
            fps: self.fps.fps(),
        };
        log::info!(
            "Game loop stopped after {} frames, final score {}",
            summary.frames,
            summary.score
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::HUMAN_PADDLE_SPEED;
    use crate::platform::{Key, ManualClock, RawInput, ScriptedInput};
    use crate::renderer::LogRenderer;
    use crate::sim::GamePhase;

    fn game(frames: Vec<RawInput>) -> Game<ScriptedInput, LogRenderer, ManualClock> {
        Game::new(
            Tuning::default(),
            ScriptedInput::new(frames),
            LogRenderer::new(),
            ManualClock::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_run_frame_quit() {
        let mut game = game(vec![RawInput::quit()]);
        assert_eq!(game.run_frame(0.016).unwrap(), None);
        assert_eq!(game.renderer().frames(), 0);
    }

    #[test]
    fn test_run_frame_pause_and_resume() {
        let mut game = game(vec![RawInput::pressed(Key::P), RawInput::pressed(Key::P)]);

        let events = game.run_frame(0.016).unwrap();
        assert_eq!(events, Some(vec![GameEvent::Paused]));
        assert_eq!(game.state().phase, GamePhase::Paused);

        let events = game.run_frame(0.016).unwrap();
        assert_eq!(events, Some(vec![GameEvent::Resumed]));
        assert_eq!(game.state().phase, GamePhase::Running);
        assert_eq!(game.renderer().frames(), 2);
    }

    #[test]
    fn test_run_counts_frames_and_paces() {
        let mut game = game(vec![RawInput::default(); 10]);
        let summary = game.run().unwrap();
        assert_eq!(summary.frames, 10);
        assert_eq!(summary.simulated_ticks, 10);
        assert_eq!(game.clock.now(), Duration::from_millis(160));
    }

    #[test]
    fn test_new_rejects_invalid_tuning() {
        let tuning = Tuning {
            ball_speed: i32::MAX,
            ..Default::default()
        };
        let result = Game::new(
            tuning,
            ScriptedInput::idle(1),
            LogRenderer::new(),
            ManualClock::new(),
        );
        assert!(matches!(result, Err(GameError::InvalidTuning(_))));
    }

    #[test]
    fn test_custom_key_map() {
        let keys = KeyMap {
            up: Key::Up,
            down: Key::Down,
            pause: Key::Escape,
            reset: Key::R,
        };
        let mut game = game(vec![
            RawInput::held(&[Key::Up]),
            RawInput::held(&[Key::W]),
            RawInput::pressed(Key::Escape),
        ])
        .with_key_map(keys);
        let start = game.state().left_paddle.pos.y;

        game.run_frame(0.016).unwrap();
        assert_eq!(game.state().left_paddle.pos.y, start - HUMAN_PADDLE_SPEED);

        // W is unbound now
        game.run_frame(0.016).unwrap();
        assert_eq!(game.state().left_paddle.pos.y, start - HUMAN_PADDLE_SPEED);

        assert_eq!(game.run_frame(0.016).unwrap(), Some(vec![GameEvent::Paused]));
    }
}
