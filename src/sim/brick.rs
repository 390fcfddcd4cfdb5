//! Destructible bricks and the grid that holds them

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{HasBounds, Rect, overlaps};
use crate::config::GameConfig;
use crate::consts::MAX_BRICKS;

/// Cosmetic HSL color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for Hsl {
    fn default() -> Self {
        Self {
            hue: 360.0,
            saturation: 100.0,
            lightness: 100.0,
        }
    }
}

impl Hsl {
    /// Random color: any hue, saturation 10..100%, lightness 20..80%
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            hue: rng.random_range(0.0..360.0),
            saturation: 10.0 + rng.random::<f32>() * 90.0,
            lightness: 20.0 + rng.random::<f32>() * 60.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// A single brick. Destroyed on first hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Hsl,
    /// Drawing inset; does not affect collisions
    pub padding: f32,
}

impl HasBounds for Brick {
    fn bounds(&self) -> Rect {
        self.rect
    }
}

/// Bricks in row-major order (left to right, then top to bottom)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out the configured grid, coloring each brick from `rng`
    pub fn grid<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let size = Vec2::new(config.brick_width, config.brick_height);
        let (x0, y0) = config.brick_origin();
        let capacity = (config.brick_columns as usize)
            .checked_mul(config.brick_rows as usize)
            .unwrap_or(0)
            .min(MAX_BRICKS);
        let mut bricks = Vec::with_capacity(capacity);

        for row in 0..config.brick_rows {
            for col in 0..config.brick_columns {
                let center = Vec2::new(
                    x0 + col as f32 * config.brick_width,
                    y0 + row as f32 * config.brick_height,
                );
                bricks.push(Brick {
                    rect: Rect::new(center, size),
                    color: Hsl::random(rng),
                    padding: config.brick_padding,
                });
            }
        }

        Self { bricks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Brick> {
        self.bricks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    /// Index of the first brick (in insertion order) overlapping `target`
    pub fn find_collision<T: HasBounds + ?Sized>(&self, target: &T) -> Option<usize> {
        self.bricks.iter().position(|brick| overlaps(target, brick))
    }

    /// Remove the brick at `index`, keeping the rest in order
    pub fn remove(&mut self, index: usize) -> Brick {
        self.bricks.remove(index)
    }
}

impl<'a> IntoIterator for &'a BrickField {
    type Item = &'a Brick;
    type IntoIter = std::slice::Iter<'a, Brick>;

    fn into_iter(self) -> Self::IntoIter {
        self.bricks.iter()
    }
}
