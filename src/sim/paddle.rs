//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{HasBounds, Rect};
use super::input::{InputState, Key};
use crate::config::GameConfig;

/// Player-controlled rectangle at the bottom of the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    /// Pixels per tick
    pub speed: f32,
    /// Remaining lives; goes negative on the final miss
    pub lives: i32,
    /// Right edge of the field the paddle is confined to
    field_width: f32,
}

impl Paddle {
    /// Paddle centered horizontally near the bottom of the field
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                Vec2::new(config.field_width / 2.0, config.paddle_y()),
                Vec2::new(config.paddle_width, config.paddle_height),
            ),
            speed: config.paddle_speed,
            lives: config.starting_lives,
            field_width: config.field_width,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center
    }

    /// Horizontal range the paddle center may occupy
    pub fn x_bounds(&self) -> (f32, f32) {
        let half = self.rect.size.x / 2.0;
        (half, self.field_width - half)
    }

    /// Move one step. LEFT wins when both directions are held.
    pub fn update<I: InputState + ?Sized>(&mut self, input: &I) {
        let (min_x, max_x) = self.x_bounds();
        let x = &mut self.rect.center.x;
        if input.is_down(Key::Left) {
            *x = (*x - self.speed).max(min_x);
        } else if input.is_down(Key::Right) {
            *x = (*x + self.speed).min(max_x);
        }
    }

    /// Spend a life and return what remains. Game over is the caller's call.
    pub fn die(&mut self) -> i32 {
        self.lives -= 1;
        self.lives
    }
}

impl HasBounds for Paddle {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::KeyState;

    #[test]
    fn test_starts_centered() {
        let config = GameConfig::default();
        let paddle = Paddle::new(&config);
        assert_eq!(paddle.center(), Vec2::new(252.0, 590.0));
        assert_eq!(paddle.lives, 5);
        assert_eq!(paddle.x_bounds(), (30.0, 474.0));
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut paddle = Paddle::new(&GameConfig::default());
        let start = paddle.center().x;
        paddle.update(&KeyState::holding(&[Key::Left, Key::Right]));
        assert_eq!(paddle.center().x, start - paddle.speed);
    }

    #[test]
    fn test_clamps_at_left_edge() {
        let mut paddle = Paddle::new(&GameConfig::default());
        paddle.rect.center.x = 32.0;
        let left = KeyState::holding(&[Key::Left]);
        paddle.update(&left);
        assert_eq!(paddle.center().x, 30.0);
        paddle.update(&left);
        assert_eq!(paddle.center().x, 30.0);
    }

    #[test]
    fn test_no_keys_no_motion() {
        let mut paddle = Paddle::new(&GameConfig::default());
        let start = paddle.center();
        paddle.update(&KeyState::holding(&[Key::Space]));
        assert_eq!(paddle.center(), start);
    }

    #[test]
    fn test_die_counts_down_past_zero() {
        let mut paddle = Paddle::new(&GameConfig::default());
        paddle.lives = 1;
        assert_eq!(paddle.die(), 0);
        assert_eq!(paddle.die(), -1);
        assert_eq!(paddle.lives, -1);
    }
}
