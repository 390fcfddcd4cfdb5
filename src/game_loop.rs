//! Frame driver
//!
//! Owns the current game and ticks it once per external frame while it is
//! alive. Once the game is over the loop stops rescheduling; a restart swaps
//! in a completely new game instance.

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::sim::{GameState, InputState};

/// Whether the driver should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stopped,
}

pub struct GameLoop {
    config: GameConfig,
    state: GameState,
    /// Frames ticked for the current game
    frames: u64,
    restarts: u64,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::try_new(config.clone())?;
        Ok(Self {
            config,
            state,
            frames: 0,
            restarts: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for collaborators that stage scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn restarts(&self) -> u64 {
        self.restarts
    }

    /// Handle one frame
    pub fn frame<I: InputState + ?Sized>(&mut self, input: &I) -> FrameStatus {
        if !self.state.is_alive() {
            return FrameStatus::Stopped;
        }

        self.state.update(input);
        self.frames += 1;

        if self.state.is_alive() {
            FrameStatus::Continue
        } else {
            FrameStatus::Stopped
        }
    }

    /// Run frames until the game ends or `max_frames` have run
    ///
    /// `input_for` plays the role of the input collaborator: it is polled once
    /// before every frame. Returns the number of frames run by this call.
    pub fn run<I, F>(&mut self, mut input_for: F, max_frames: u64) -> u64
    where
        I: InputState,
        F: FnMut(&GameState) -> I,
    {
        let mut ran = 0;
        while ran < max_frames && self.state.is_alive() {
            let input = input_for(&self.state);
            ran += 1;
            if self.frame(&input) == FrameStatus::Stopped {
                break;
            }
        }
        ran
    }

    /// End the current game and start a fresh one
    ///
    /// Each restart advances the seed so the new game gets new colors and
    /// launch directions.
    pub fn restart(&mut self) {
        self.state.end();
        self.restarts += 1;
        let config = GameConfig {
            seed: self.config.seed.wrapping_add(self.restarts),
            ..self.config.clone()
        };
        log::info!("Restarting (restart #{})", self.restarts);
        self.state = GameState::new(config);
        self.frames = 0;
    }
}
