//! Geometry value types.
//!
//! All coordinates are `f64` in the host's layout units. Frames are expressed
//! relative to the containing view's origin.

use glam::DVec2;

use crate::errors::{InsetEdge, StackError};

/// A point in layout coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

/// A width/height pair.
///
/// Sizes are not clamped: a negative constraint is a legal input and is
/// passed through to measurement unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<DVec2> for Size {
    fn from(v: DVec2) -> Self {
        Self { width: v.x, height: v.y }
    }
}

impl From<Size> for DVec2 {
    fn from(s: Size) -> Self {
        DVec2::new(s.width, s.height)
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect { origin: Point::ZERO, size: Size::ZERO };

    /// Create a rect with position and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn x(&self) -> f64 {
        self.origin.x
    }

    pub fn y(&self) -> f64 {
        self.origin.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    /// Right edge (x + width).
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge (y + height).
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Check if a point is inside the rect.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.max_x()
            && point.y >= self.origin.y
            && point.y <= self.max_y()
    }

    /// Bounding box of both rects.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.origin.x.min(other.origin.x);
        let y1 = self.origin.y.min(other.origin.y);
        let x2 = self.max_x().max(other.max_x());
        let y2 = self.max_y().max(other.max_y());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }
}

/// Margin reserved on each side of a container's content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: EdgeInsets = EdgeInsets { top: 0.0, left: 0.0, bottom: 0.0, right: 0.0 };

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Same inset on all four edges.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub const fn symmetric(horizontal: f64, vertical: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Shrink `rect` by these insets.
    pub fn inset_rect(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.origin.x + self.left,
            rect.origin.y + self.top,
            rect.size.width - self.horizontal(),
            rect.size.height - self.vertical(),
        )
    }

    /// Reject negative or non-finite edges.
    pub fn validate(&self) -> Result<(), StackError> {
        for (edge, value) in self.edges() {
            if !value.is_finite() {
                return Err(StackError::NonFiniteInset { edge, value });
            }
            if value < 0.0 {
                return Err(StackError::NegativeInset { edge, value });
            }
        }
        Ok(())
    }

    fn edges(&self) -> [(InsetEdge, f64); 4] {
        [
            (InsetEdge::Top, self.top),
            (InsetEdge::Left, self.left),
            (InsetEdge::Bottom, self.bottom),
            (InsetEdge::Right, self.right),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(Point::new(50.0, 40.0)));
        assert!(!rect.contains(Point::new(5.0, 40.0)));
        assert!(!rect.contains(Point::new(50.0, 100.0)));
    }

    #[test]
    fn test_rect_union() {
        let a = Rect::new(0.0, 0.0, 100.0, 40.0);
        let b = Rect::new(0.0, 40.0, 280.0, 44.0);
        let u = a.union(&b);
        assert_eq!(u, Rect::new(0.0, 0.0, 280.0, 84.0));
    }

    #[test]
    fn test_inset_rect() {
        let insets = EdgeInsets::new(10.0, 5.0, 10.0, 5.0);
        let inner = insets.inset_rect(Rect::new(0.0, 0.0, 200.0, 500.0));
        assert_eq!(inner, Rect::new(5.0, 10.0, 190.0, 480.0));
        assert!((insets.horizontal() - 10.0).abs() < 0.001);
        assert!((insets.vertical() - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_symmetric_insets() {
        let insets = EdgeInsets::symmetric(8.0, 4.0);
        assert_eq!(insets, EdgeInsets::new(4.0, 8.0, 4.0, 8.0));
    }

    #[test]
    fn test_validate_rejects_negative_edge() {
        let err = EdgeInsets::new(0.0, 0.0, -2.0, 0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            StackError::NegativeInset { edge: InsetEdge::Bottom, .. }
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let err = EdgeInsets::new(f64::NAN, 0.0, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            StackError::NonFiniteInset { edge: InsetEdge::Top, .. }
        ));
    }

    #[test]
    fn test_validate_accepts_zero() {
        assert!(EdgeInsets::ZERO.validate().is_ok());
        assert!(EdgeInsets::uniform(12.0).validate().is_ok());
    }

    #[test]
    fn test_glam_conversions() {
        let size: Size = DVec2::new(320.0, 44.0).into();
        assert_eq!(size, Size::new(320.0, 44.0));
        let v: DVec2 = Point::new(3.0, 4.0).into();
        assert_eq!(v, DVec2::new(3.0, 4.0));
    }

    #[test]
    fn test_negative_size_is_empty() {
        assert!(Size::new(-10.0, 20.0).is_empty());
        assert!(!Size::new(10.0, 20.0).is_empty());
    }
}
