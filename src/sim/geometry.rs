//! Axis-aligned rectangle geometry shared by every physical entity
//!
//! Every entity on the playfield is a box described by its center and size.
//! Screen coordinates: x grows to the right, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D coordinate
pub type Point = Vec2;
/// Width/height pair
pub type Size = Vec2;

/// Axis-aligned rectangle defined by center point and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(center: Point, size: Size) -> Self {
        debug_assert!(size.x > 0.0 && size.y > 0.0, "box size must be positive");
        Self { center, size }
    }

    #[inline]
    pub fn half_size(&self) -> Vec2 {
        self.size / 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Standard AABB test: no separating axis. Touching edges count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || self.bottom() < other.top()
            || self.left() > other.right()
            || self.top() > other.bottom())
    }
}

/// Anything that occupies a box on the playfield
pub trait HasBounds {
    fn bounds(&self) -> Rect;
}

impl HasBounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// True iff `a` and `b` are distinct entities whose boxes intersect
pub fn overlaps<A, B>(a: &A, b: &B) -> bool
where
    A: HasBounds + ?Sized,
    B: HasBounds + ?Sized,
{
    !std::ptr::addr_eq(a, b) && a.bounds().intersects(&b.bounds())
}
