//! Axis-aligned collision detection
//!
//! Everything in the field is a box: the player square and the spike
//! obstacles both collide by their bounding rectangles.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        self.min.x < b_max.x && a_max.x > other.min.x && self.min.y < b_max.y && a_max.y > other.min.y
    }
}

/// Index of the first rectangle in `others` that overlaps `subject`
pub fn first_overlap<I>(subject: &Rect, others: I) -> Option<usize>
where
    I: IntoIterator<Item = Rect>,
{
    others.into_iter().position(|r| subject.overlaps(&r))
}
