//! Axis-aligned collision detection
//!
//! Everything on screen is an axis-aligned rectangle, so the whole
//! collision story is a strict-overlap AABB test. Edge-touching
//! rectangles do NOT collide: overlap must be strict on both axes.

use glam::Vec2;

/// An axis-aligned rectangle (top-left origin, screen coordinates).
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center point, used to place explosion bursts.
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict-overlap intersection test.
    ///
    /// Returns true iff the rectangles overlap with positive area on both
    /// axes; rectangles that merely share an edge or corner do not
    /// intersect.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_overlap_never_collides() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(100.0, 100.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn test_identical_rects_always_collide() {
        let a = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_edge_touch_does_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge exactly
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        // One pixel of actual overlap
        let c = Rect::new(9.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_corner_touch_does_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_containment_collides() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }
}
