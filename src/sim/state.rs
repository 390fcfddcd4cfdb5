//! Game state and per-tick events
//!
//! One paddle, one ball and the brick field, plus the flags that drive the
//! round: `active` (ball launched) and `alive` (game not over).

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::brick::{Brick, BrickField};
use super::collision::{Impact, Surface};
use super::input::InputState;
use super::paddle::Paddle;
use super::tick::tick;
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Current phase of gameplay, derived from the `alive`/`active` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball resting on the paddle, waiting for SPACE
    Waiting,
    /// Ball in flight
    Playing,
    /// Lives exhausted; the instance is inert
    GameOver,
}

/// Something that happened during a tick, in the order it happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the paddle
    Launched,
    Bounce(Surface),
    /// A brick was struck and removed; its box is the region to clear
    BrickDestroyed { brick: Brick, impact: Impact },
    /// Ball passed the paddle; `lives` is what remains after the loss
    LifeLost { lives: i32 },
    /// A new ball was placed on the paddle
    BallReset,
    GameOver,
    /// The last brick was destroyed
    FieldCleared,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    /// False once the game is over; never becomes true again
    pub(crate) alive: bool,
    /// False while the ball waits on the paddle
    pub(crate) active: bool,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    /// Launch directions and brick colors
    pub(crate) rng: Pcg32,
    /// Events from the most recent tick
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Validate `config` and create a new game from it
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Create a new game from an already validated config
    pub(crate) fn new(config: GameConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(config.seed);
        let paddle = Paddle::new(&config);
        let ball = Ball::new(&paddle, &config, &mut rng);
        let bricks = BrickField::grid(&config, &mut rng);

        log::info!(
            "New game: seed {}, {} bricks, {} lives",
            config.seed,
            bricks.len(),
            paddle.lives
        );

        Self {
            config,
            paddle,
            ball,
            bricks,
            alive: true,
            active: false,
            time_ticks: 0,
            rng,
            events: Vec::new(),
        }
    }

    /// Advance one frame
    pub fn update<I: InputState + ?Sized>(&mut self, input: &I) {
        tick(self, input);
    }

    /// Remaining bricks
    pub fn score(&self) -> usize {
        self.bricks.len()
    }

    pub fn lives(&self) -> i32 {
        self.paddle.lives
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn phase(&self) -> GamePhase {
        if !self.alive {
            GamePhase::GameOver
        } else if self.active {
            GamePhase::Playing
        } else {
            GamePhase::Waiting
        }
    }

    /// Events produced by the most recent tick, or by the most recent
    /// [`reset`](Self::reset)/[`end`](Self::end) called between ticks
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Replace the ball with a fresh one waiting on the paddle
    ///
    /// Called between ticks, so the previous tick's events are dropped first.
    pub fn reset(&mut self) {
        self.events.clear();
        self.respawn_ball();
    }

    /// End the game. Irreversible.
    ///
    /// Called between ticks, so the previous tick's events are dropped first.
    pub fn end(&mut self) {
        if self.alive {
            self.events.clear();
            self.finish();
        }
    }

    /// `reset` inside a tick: appends to the tick's events
    pub(crate) fn respawn_ball(&mut self) {
        self.active = false;
        self.ball = Ball::new(&self.paddle, &self.config, &mut self.rng);
        self.events.push(GameEvent::BallReset);
    }

    /// `end` inside a tick: appends to the tick's events
    pub(crate) fn finish(&mut self) {
        if self.alive {
            self.alive = false;
            self.events.push(GameEvent::GameOver);
            log::info!(
                "Game over after {} ticks with {} bricks left",
                self.time_ticks,
                self.bricks.len()
            );
        }
    }
}
