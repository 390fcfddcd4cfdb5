//! The ball: launch, collision resolution and motion

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brick::BrickField;
use super::collision::{Surface, brick_bounce, brick_impact, paddle_bounce, reflect_velocity};
use super::geometry::{HasBounds, Rect, overlaps};
use super::input::{InputState, Key};
use super::paddle::Paddle;
use super::state::GameEvent;
use crate::config::GameConfig;

/// Everything outside the ball that a ball update reads or changes
pub struct BallWorld<'a> {
    pub paddle: &'a Paddle,
    pub bricks: &'a mut BrickField,
    /// False while the ball rests on the paddle waiting for launch
    pub active: &'a mut bool,
    pub config: &'a GameConfig,
    pub events: &'a mut Vec<GameEvent>,
}

/// What a ball update means for the rest of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallOutcome {
    /// Still resting on the paddle
    Waiting,
    /// Moving freely
    InPlay,
    /// Passed the paddle's line; a life is lost
    FloorMiss,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub velocity: Vec2,
    /// Set on the tick a collision fired; suppresses detection for the next tick
    pub hit: bool,
}

impl Ball {
    /// Fresh ball resting on the paddle, heading up and randomly left or right
    pub fn new<R: Rng>(paddle: &Paddle, config: &GameConfig, rng: &mut R) -> Self {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            rect: Rect::new(
                Self::rest_position(paddle),
                Vec2::splat(config.ball_size),
            ),
            velocity: Vec2::new(direction * config.launch_vx, config.launch_vy),
            hit: false,
        }
    }

    /// Where a waiting ball sits: above the paddle by twice its height
    pub fn rest_position(paddle: &Paddle) -> Vec2 {
        let center = paddle.center();
        Vec2::new(center.x, center.y - paddle.rect.size.y * 2.0)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.rect.center
    }

    /// Mirror the paddle while waiting for launch
    pub fn follow(&mut self, paddle: &Paddle) {
        self.rect.center = Self::rest_position(paddle);
    }

    pub fn hit_floor(&self, paddle: &Paddle) -> bool {
        self.rect.center.y >= paddle.center().y
    }

    pub fn hit_wall(&self, field_width: f32) -> bool {
        self.rect.center.x <= self.rect.size.x / 2.0
            || self.rect.center.x + self.rect.size.x / 2.0 >= field_width
    }

    pub fn hit_ceiling(&self) -> bool {
        self.rect.center.y <= self.rect.size.y / 2.0
    }

    /// Advance one tick
    ///
    /// While waiting, SPACE launches the ball and the same tick continues as in
    /// play; otherwise the ball just follows the paddle. In play, at most one
    /// collision is resolved per tick, checked in order: debounce, floor, wall,
    /// ceiling, paddle, bricks. The ball then moves by one velocity step,
    /// except on a floor miss where the caller takes over.
    pub fn update<I: InputState + ?Sized>(
        &mut self,
        input: &I,
        world: BallWorld<'_>,
    ) -> BallOutcome {
        if !*world.active {
            if input.is_down(Key::Space) {
                *world.active = true;
                world.events.push(GameEvent::Launched);
                log::debug!("Ball launched with velocity {}", self.velocity);
            } else {
                self.follow(world.paddle);
                return BallOutcome::Waiting;
            }
        }

        let event = if self.hit {
            // Give the ball one tick to move clear of what it just struck
            None
        } else if self.hit_floor(world.paddle) {
            return BallOutcome::FloorMiss;
        } else {
            self.resolve_collision(world.paddle, world.bricks, world.config)
        };

        self.hit = event.is_some();
        if let Some(event) = event {
            world.events.push(event);
        }

        self.rect.center += self.velocity;
        BallOutcome::InPlay
    }

    /// First matching collision in priority order, applied to the velocity
    fn resolve_collision(
        &mut self,
        paddle: &Paddle,
        bricks: &mut BrickField,
        config: &GameConfig,
    ) -> Option<GameEvent> {
        if self.hit_wall(config.field_width) {
            self.velocity = reflect_velocity(self.velocity, Surface::Wall.normal());
            log::trace!("Wall bounce at {}", self.rect.center);
            return Some(GameEvent::Bounce(Surface::Wall));
        }

        if self.hit_ceiling() {
            self.velocity = reflect_velocity(self.velocity, Surface::Ceiling.normal());
            log::trace!("Ceiling bounce at {}", self.rect.center);
            return Some(GameEvent::Bounce(Surface::Ceiling));
        }

        if overlaps(&*self, paddle) {
            self.velocity = paddle_bounce(self.velocity, self.rect.center, paddle.center(), config);
            log::trace!("Paddle bounce, velocity now {}", self.velocity);
            return Some(GameEvent::Bounce(Surface::Paddle));
        }

        let index = bricks.find_collision(&*self)?;
        let brick = bricks.remove(index);
        let impact = brick_impact(self.rect.center, &brick.rect, config.brick_angle);
        self.velocity = brick_bounce(self.velocity, impact);
        log::debug!(
            "Brick at {} destroyed ({:?} hit), {} left",
            brick.rect.center,
            impact,
            bricks.len()
        );
        Some(GameEvent::BrickDestroyed { brick, impact })
    }
}

impl HasBounds for Ball {
    fn bounds(&self) -> Rect {
        self.rect
    }
}
