//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, whole velocity steps
//! - Seeded RNG only
//! - Stable iteration order (bricks stay in row-major order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod collision;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallOutcome, BallWorld};
pub use brick::{Brick, BrickField, Hsl};
pub use collision::{Impact, Surface, brick_impact, paddle_english, reflect_velocity};
pub use geometry::{HasBounds, Point, Rect, Size, overlaps};
pub use input::{InputState, Key, KeyState};
pub use paddle::Paddle;
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::tick;
