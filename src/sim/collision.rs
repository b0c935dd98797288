//! Collision detection for axis-aligned rectangles
//!
//! Everything in the arena is a box: paddles, the ball and the walls. Overlap
//! follows the usual rectangle rule where boxes that only share an edge do
//! not collide, so a ball placed flush against a paddle stays clear of it.

use glam::Vec2;

use super::state::Side;
use crate::consts::*;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from its top-left corner and size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// True when the boxes share a region of positive area
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Whether a box touches or crosses the top or bottom wall
pub fn hits_wall(rect: &Aabb) -> bool {
    rect.min.y <= 0.0 || rect.max.y >= ARENA_HEIGHT
}

/// Side that earns a point when a box reaches a goal line
///
/// Reaching the left edge scores for the right side and vice versa. The left
/// goal is checked first.
pub fn scoring_side(rect: &Aabb) -> Option<Side> {
    if rect.min.x <= 0.0 {
        Some(Side::Right)
    } else if rect.max.x >= ARENA_WIDTH {
        Some(Side::Left)
    } else {
        None
    }
}
