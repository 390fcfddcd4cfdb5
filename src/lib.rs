//! Farben - a brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, ball physics, bricks, game state)
//! - `game_loop`: Frame driver that ticks the simulation until game over
//! - `scene`: Render-facing snapshot of the playfield
//! - `config`: Data-driven game tuning
//! - `autopilot`: Demo input source that plays the game

pub mod autopilot;
pub mod config;
pub mod error;
pub mod game_loop;
pub mod scene;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{BrickAngle, GameConfig};
pub use error::ConfigError;
pub use game_loop::{FrameStatus, GameLoop};
pub use scene::{Scene, SceneItem, SceneKind};

/// Game configuration constants
pub mod consts {
    /// Default playfield dimensions (fits the 16x16 brick grid plus borders)
    pub const FIELD_WIDTH: f32 = 504.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Gap between paddle center and the bottom of the field
    pub const PADDLE_FLOOR_OFFSET: f32 = 10.0;
    /// Pixels per tick
    pub const PADDLE_SPEED: f32 = 5.0;
    pub const STARTING_LIVES: i32 = 5;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 5.0;
    /// Launch speed magnitude on x (sign is random per ball)
    pub const BALL_LAUNCH_VX: f32 = 3.0;
    pub const BALL_LAUNCH_VY: f32 = -2.0;

    /// Paddle "english": hits closer than this to paddle center keep lateral velocity
    pub const PADDLE_DEAD_ZONE: f32 = 15.0;
    /// Lateral multiplier when the ball strikes the side it is heading toward
    pub const PADDLE_BOOST: f32 = 1.2;
    /// Lateral multiplier when the ball strikes the opposite side
    pub const PADDLE_DAMP: f32 = -0.8;

    /// Brick grid defaults
    pub const BRICK_COLUMNS: u32 = 16;
    pub const BRICK_ROWS: u32 = 16;
    pub const BRICK_WIDTH: f32 = 30.0;
    pub const BRICK_HEIGHT: f32 = 16.0;
    pub const BRICK_PADDING: f32 = 6.0;
    /// Upper bound on `brick_columns * brick_rows`
    pub const MAX_BRICKS: usize = 4096;
}
