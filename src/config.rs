//! Game configuration and tuning
//!
//! Loaded from JSON; every field is optional and falls back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// How the brick impact angle measures the horizontal offset between ball and brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BrickAngle {
    /// `brick.x - ball.x`
    #[default]
    Horizontal,
    /// `brick.x - ball.y`, as the first release of the game computed it
    Legacy,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    /// Field width in pixels (from the rendering surface)
    pub field_width: f32,
    /// Field height in pixels
    pub field_height: f32,
    /// Seed for launch directions and brick colors
    pub seed: u64,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per tick
    pub paddle_speed: f32,
    pub starting_lives: i32,

    // === Ball ===
    pub ball_size: f32,
    /// Magnitude of the launch x velocity; the sign is drawn per ball
    pub launch_vx: f32,
    pub launch_vy: f32,

    // === Paddle english ===
    pub paddle_dead_zone: f32,
    pub paddle_boost: f32,
    pub paddle_damp: f32,

    // === Bricks ===
    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_angle: BrickAngle,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            seed: 0,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            starting_lives: STARTING_LIVES,

            ball_size: BALL_SIZE,
            launch_vx: BALL_LAUNCH_VX,
            launch_vy: BALL_LAUNCH_VY,

            paddle_dead_zone: PADDLE_DEAD_ZONE,
            paddle_boost: PADDLE_BOOST,
            paddle_damp: PADDLE_DAMP,

            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_angle: BrickAngle::Horizontal,
        }
    }
}

impl GameConfig {
    /// Default configuration with a specific seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Vertical position of the paddle center
    pub fn paddle_y(&self) -> f32 {
        self.field_height - PADDLE_FLOOR_OFFSET
    }

    /// Offset of the first brick center from the field origin
    pub fn brick_origin(&self) -> (f32, f32) {
        (
            2.0 * self.brick_padding + self.brick_width / 2.0,
            2.0 * self.brick_padding + self.brick_height / 2.0,
        )
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("paddle_width", self.paddle_width)?;
        positive("paddle_height", self.paddle_height)?;
        positive("paddle_speed", self.paddle_speed)?;
        positive("ball_size", self.ball_size)?;
        positive("brick_width", self.brick_width)?;
        positive("brick_height", self.brick_height)?;
        finite("launch_vx", self.launch_vx)?;
        finite("launch_vy", self.launch_vy)?;
        finite("paddle_dead_zone", self.paddle_dead_zone)?;
        finite("paddle_boost", self.paddle_boost)?;
        finite("paddle_damp", self.paddle_damp)?;

        if self.brick_padding < 0.0 || !self.brick_padding.is_finite() {
            return Err(ConfigError::invalid(
                "brick_padding",
                format!("must be finite and >= 0, got {}", self.brick_padding),
            ));
        }
        if self.starting_lives < 0 {
            return Err(ConfigError::invalid(
                "starting_lives",
                format!("must be >= 0, got {}", self.starting_lives),
            ));
        }
        if self.paddle_width > self.field_width {
            return Err(ConfigError::invalid(
                "paddle_width",
                format!(
                    "{} does not fit a field {} wide",
                    self.paddle_width, self.field_width
                ),
            ));
        }
        if self.paddle_y() - self.paddle_height / 2.0 <= 0.0 {
            return Err(ConfigError::invalid(
                "field_height",
                format!("{} leaves no room above the paddle", self.field_height),
            ));
        }
        if self.brick_columns == 0 || self.brick_rows == 0 {
            return Err(ConfigError::invalid(
                "brick_columns/brick_rows",
                "brick grid must have at least one row and column",
            ));
        }
        let count = (self.brick_columns as usize).checked_mul(self.brick_rows as usize);
        if !count.is_some_and(|n| n <= MAX_BRICKS) {
            return Err(ConfigError::invalid(
                "brick_columns/brick_rows",
                format!(
                    "{}x{} grid exceeds {MAX_BRICKS} bricks",
                    self.brick_columns, self.brick_rows
                ),
            ));
        }

        let right = 2.0 * self.brick_padding + self.brick_columns as f32 * self.brick_width;
        if right > self.field_width {
            return Err(ConfigError::invalid(
                "brick_columns",
                format!(
                    "grid extends to x={right}, beyond field width {}",
                    self.field_width
                ),
            ));
        }
        let bottom = 2.0 * self.brick_padding + self.brick_rows as f32 * self.brick_height;
        if bottom >= self.paddle_y() - self.paddle_height / 2.0 {
            return Err(ConfigError::invalid(
                "brick_rows",
                format!("grid extends to y={bottom}, overlapping the paddle"),
            ));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("must be finite and > 0, got {value}"),
        ))
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("must be finite, got {value}")))
    }
}
