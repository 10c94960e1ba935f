//! Axis-aligned rectangles in pointer space

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rectangular area, `(x, y)` being the minimum corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on the origin
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(-width / 2.0, -height / 2.0, width, height)
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Check if a point is inside this rectangle (edges included)
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= self.x
            && pos.x <= self.x + self.width
            && pos.y >= self.y
            && pos.y <= self.y + self.height
    }

    /// Get the center point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Moves `pos` onto the nearest point inside the rectangle
    ///
    /// Each axis is corrected independently. Unlike `f32::clamp` this never
    /// panics on a degenerate rectangle; the minimum edge wins.
    pub fn clamp(&self, pos: Vec2) -> Vec2 {
        let min = self.min();
        let max = self.max();
        let mut out = pos;

        if out.x < min.x {
            out.x = min.x;
        } else if out.x > max.x {
            out.x = max.x;
        }

        if out.y < min.y {
            out.y = min.y;
        } else if out.y > max.y {
            out.y = max.y;
        }

        out
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::centered(1920.0, 1080.0)
    }
}
