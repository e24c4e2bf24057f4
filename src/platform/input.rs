//! Keyboard input
//!
//! The host reports raw key presses and held keys; `KeyMap` turns them into
//! the commands and paddle intent a tick needs.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::sim::{PaddleIntent, TickInput};

/// Physical keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    P,
    R,
    Up,
    Down,
    Escape,
    /// Any key without a binding
    Other,
}

/// Discrete input events, in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed / quit requested
    Quit,
    KeyDown(Key),
}

/// Everything the host reports for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    /// Events since the previous poll
    pub events: Vec<InputEvent>,
    /// Keys currently held down
    pub held: Vec<Key>,
}

impl RawInput {
    pub fn held(keys: &[Key]) -> Self {
        Self {
            events: Vec::new(),
            held: keys.to_vec(),
        }
    }

    pub fn pressed(key: Key) -> Self {
        Self {
            events: vec![InputEvent::KeyDown(key)],
            held: Vec::new(),
        }
    }

    pub fn quit() -> Self {
        Self {
            events: vec![InputEvent::Quit],
            held: Vec::new(),
        }
    }
}

/// Source of raw input, polled once per tick
pub trait InputSource {
    fn poll(&mut self) -> Result<RawInput, GameError>;
}

/// Commands derived from one tick's raw input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickCommands {
    pub quit: bool,
    pub tick: TickInput,
}

/// Key bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMap {
    pub up: Key,
    pub down: Key,
    pub pause: Key,
    pub reset: Key,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            up: Key::W,
            down: Key::S,
            pause: Key::P,
            reset: Key::R,
        }
    }
}

impl KeyMap {
    /// Translate raw input into tick commands.
    ///
    /// Pause presses toggle, so two in one poll cancel out. Up wins over down
    /// when both are held.
    pub fn translate(&self, raw: &RawInput) -> TickCommands {
        let mut commands = TickCommands::default();

        for event in &raw.events {
            match *event {
                InputEvent::Quit => commands.quit = true,
                InputEvent::KeyDown(key) if key == self.pause => {
                    commands.tick.pause = !commands.tick.pause;
                }
                InputEvent::KeyDown(key) if key == self.reset => commands.tick.reset = true,
                InputEvent::KeyDown(_) => {}
            }
        }

        commands.tick.intent = if raw.held.contains(&self.up) {
            PaddleIntent::Up
        } else if raw.held.contains(&self.down) {
            PaddleIntent::Down
        } else {
            PaddleIntent::Idle
        };

        commands
    }
}

/// Replays a fixed sequence of per-tick inputs, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<RawInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = RawInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// `ticks` frames with no input at all
    pub fn idle(ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(RawInput::default(), ticks))
    }

    /// Frames left before the script quits
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<RawInput, GameError> {
        Ok(self.frames.pop_front().unwrap_or_else(RawInput::quit))
    }
}
