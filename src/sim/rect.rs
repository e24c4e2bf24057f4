//! Axis-aligned rectangles in integer pixel space
//!
//! Every entity on the field is a rectangle addressed by its top-left corner.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Vertical center (integer division)
    #[inline]
    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size.y / 2
    }

    /// Overlap test. Touching edges count as intersecting.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 40);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center_y(), 40);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(0, 0, 20, 20);
        let b = Rect::new(10, 10, 20, 20);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_shared_edge_counts() {
        let a = Rect::new(0, 0, 20, 20);
        let right_neighbor = Rect::new(20, 0, 20, 20);
        let below_neighbor = Rect::new(0, 20, 20, 20);
        assert!(a.intersects(&right_neighbor));
        assert!(a.intersects(&below_neighbor));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0, 0, 20, 20);
        assert!(!a.intersects(&Rect::new(21, 0, 20, 20)));
        assert!(!a.intersects(&Rect::new(0, 21, 20, 20)));
        assert!(!a.intersects(&Rect::new(-21, -21, 20, 20)));
    }
}
