//! Collision response rules
//!
//! The interesting part of the physics: how the ball's velocity changes when it
//! strikes a wall, the paddle, or a brick. Detection is plain AABB overlap
//! (see [`super::geometry`]); everything here is a pure function of positions
//! and velocities.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect};
use crate::config::{BrickAngle, GameConfig};

/// Non-destructible surfaces the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surface {
    /// Left or right field edge
    Wall,
    Ceiling,
    Paddle,
}

impl Surface {
    /// Axis normal of the surface (sign is irrelevant for reflection)
    pub fn normal(&self) -> Vec2 {
        match self {
            Surface::Wall => Vec2::X,
            Surface::Ceiling | Surface::Paddle => Vec2::Y,
        }
    }
}

/// Which way a brick hit reflects the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    /// Reverses horizontal velocity
    Side,
    /// Reverses vertical velocity
    Face,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Horizontal velocity after a paddle hit ("english")
///
/// `offset` is the ball's x minus the paddle's x. Near-center hits keep the
/// lateral velocity, hits on the side the ball is heading toward speed it up,
/// and hits on the opposite side reverse and dampen it.
pub fn paddle_english(vx: f32, offset: f32, config: &GameConfig) -> f32 {
    if offset.abs() < config.paddle_dead_zone {
        vx
    } else if offset * vx > 0.0 {
        vx * config.paddle_boost
    } else {
        vx * config.paddle_damp
    }
}

/// Ball velocity after bouncing off the paddle
pub fn paddle_bounce(velocity: Vec2, ball: Point, paddle: Point, config: &GameConfig) -> Vec2 {
    let reflected = reflect_velocity(velocity, Surface::Paddle.normal());
    Vec2::new(
        paddle_english(reflected.x, ball.x - paddle.x, config),
        reflected.y,
    )
}

/// Angle from ball center to brick center, as `atan(dy / dx)`
///
/// IEEE division: a zero `dx` yields ±π/2 and `0/0` yields NaN.
pub fn impact_angle(ball: Point, brick: Point, mode: BrickAngle) -> f32 {
    let dy = brick.y - ball.y;
    let dx = match mode {
        BrickAngle::Horizontal => brick.x - ball.x,
        BrickAngle::Legacy => brick.x - ball.y,
    };
    (dy / dx).atan()
}

/// Classify a brick hit by comparing the impact angle against the brick's aspect angle
pub fn brick_impact(ball: Point, brick: &Rect, mode: BrickAngle) -> Impact {
    let collision = impact_angle(ball, brick.center, mode);
    let reference = (brick.size.y / brick.size.x).atan();

    // NaN never compares greater, so a degenerate angle counts as a face hit
    if collision.abs() > reference.abs() {
        Impact::Side
    } else {
        Impact::Face
    }
}

/// Ball velocity after a brick hit
pub fn brick_bounce(velocity: Vec2, impact: Impact) -> Vec2 {
    match impact {
        Impact::Side => reflect_velocity(velocity, Vec2::X),
        Impact::Face => reflect_velocity(velocity, Vec2::Y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick_at(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(30.0, 16.0))
    }

    #[test]
    fn test_reflect_velocity() {
        let velocity = Vec2::new(3.0, -2.0);
        assert_eq!(reflect_velocity(velocity, Surface::Wall.normal()), Vec2::new(-3.0, -2.0));
        assert_eq!(reflect_velocity(velocity, Surface::Ceiling.normal()), Vec2::new(3.0, 2.0));
        // Sign of the normal does not matter
        assert_eq!(reflect_velocity(velocity, -Vec2::X), Vec2::new(-3.0, -2.0));
    }

    #[test]
    fn test_english_dead_zone() {
        let config = GameConfig::default();
        assert_eq!(paddle_english(3.0, 10.0, &config), 3.0);
        assert_eq!(paddle_english(-3.0, -14.9, &config), -3.0);
    }

    #[test]
    fn test_english_boost_when_heading_outward() {
        let config = GameConfig::default();
        assert!((paddle_english(3.0, 20.0, &config) - 3.6).abs() < 0.0001);
        assert!((paddle_english(-3.0, -20.0, &config) + 3.6).abs() < 0.0001);
    }

    #[test]
    fn test_english_damp_when_heading_inward() {
        let config = GameConfig::default();
        assert!((paddle_english(3.0, -20.0, &config) + 2.4).abs() < 0.0001);
        assert!((paddle_english(-3.0, 15.0, &config) - 2.4).abs() < 0.0001);
        // A ball with no lateral velocity stays vertical
        assert_eq!(paddle_english(0.0, 20.0, &config), 0.0);
    }

    #[test]
    fn test_paddle_bounce_flips_vertical() {
        let config = GameConfig::default();
        let v = paddle_bounce(
            Vec2::new(3.0, 2.0),
            Vec2::new(262.0, 584.0),
            Vec2::new(252.0, 590.0),
            &config,
        );
        assert_eq!(v, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_brick_impact_side_and_face() {
        let brick = brick_at(27.0, 20.0);
        // Steep approach: |atan(-10/-10)| = π/4 > atan(16/30)
        assert_eq!(
            brick_impact(Vec2::new(37.0, 30.0), &brick, BrickAngle::Horizontal),
            Impact::Side
        );
        // Shallow approach: |atan(-2/-17)| < atan(16/30)
        assert_eq!(
            brick_impact(Vec2::new(44.0, 22.0), &brick, BrickAngle::Horizontal),
            Impact::Face
        );
    }

    #[test]
    fn test_brick_impact_vertical_alignment() {
        // dx = 0 gives atan(±inf) = ±π/2
        let brick = brick_at(177.0, 20.0);
        assert_eq!(
            brick_impact(Vec2::new(177.0, 14.0), &brick, BrickAngle::Horizontal),
            Impact::Side
        );
        // Same centers: 0/0 is NaN
        assert_eq!(
            brick_impact(Vec2::new(177.0, 20.0), &brick, BrickAngle::Horizontal),
            Impact::Face
        );
    }

    #[test]
    fn test_legacy_angle_uses_vertical_offset() {
        let brick = brick_at(177.0, 20.0);
        let ball = Vec2::new(177.0, 14.0);
        // Legacy dx = 177 - 14 = 163, so the angle is shallow
        let angle = impact_angle(ball, brick.center, BrickAngle::Legacy);
        assert!((angle - (6.0f32 / 163.0).atan()).abs() < 0.0001);
        assert_eq!(brick_impact(ball, &brick, BrickAngle::Legacy), Impact::Face);
    }

    #[test]
    fn test_brick_bounce() {
        let v = Vec2::new(3.0, -2.0);
        assert_eq!(brick_bounce(v, Impact::Side), Vec2::new(-3.0, -2.0));
        assert_eq!(brick_bounce(v, Impact::Face), Vec2::new(3.0, 2.0));
    }
}
