//! Axis-aligned rectangle geometry
//!
//! Board space has +x rightward and +y downward. Every actor and token
//! footprint is an axis-aligned rectangle; lanes only ever need the
//! horizontal expansion used by gap checks.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height, both positive
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test: rectangles that merely share an edge do not
    /// intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }

    /// The same rectangle widened by `gap` on both horizontal sides.
    /// Vertical extent is unchanged.
    pub fn expanded_x(&self, gap: f32) -> Rect {
        Rect {
            pos: Vec2::new(self.pos.x - gap, self.pos.y),
            size: Vec2::new(self.size.x + 2.0 * gap, self.size.y),
        }
    }
}
