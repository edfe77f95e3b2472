//! Axis-aligned rectangles and the shared "bounded entity" capability

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `size` with its top-left corner at `pos`
    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Zero or negative extent marks an inactive slot
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Overlap test. Touching edges count; rects without area never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.has_area()
            && other.has_area()
            && other.x <= self.right()
            && other.right() >= self.x
            && other.y <= self.bottom()
            && other.bottom() >= self.y
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Anything with a rectangle that may or may not be in play
pub trait Bounded {
    fn bounds(&self) -> Rect;
    fn is_active(&self) -> bool;
}

/// True when `entity` is in play and overlaps `rect`
pub fn overlaps<B: Bounded + ?Sized>(rect: &Rect, entity: &B) -> bool {
    entity.is_active() && rect.intersects(&entity.bounds())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(30.0, 0.0, 20.0, 20.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(0.0, 21.0, 20.0, 20.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(20.0, 0.0, 20.0, 20.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_zero_area_never_intersects() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let inactive = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert!(!a.intersects(&inactive));
        assert!(!inactive.intersects(&a));
        let flat = Rect::new(5.0, 5.0, 10.0, 0.0);
        assert!(!a.intersects(&flat));
    }

    #[test]
    fn test_contained_rect_intersects() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(outer.intersects(&inner));
    }
}
