//! Pointer geometry and closest-corners collision detection.

use super::DragId;

/// A point in client pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "pixel geometry is floating point")]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Offset from `origin` to `self`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "pixel geometry is floating point")]
    pub fn delta_from(self, origin: Self) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A zero-size rectangle at `point`.
    #[must_use]
    pub const fn at(point: Point) -> Self {
        Self::new(point.x, point.y, 0.0, 0.0)
    }

    /// Returns the rectangle moved by `delta`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "pixel geometry is floating point")]
    pub fn translated(self, delta: Point) -> Self {
        Self::new(self.left + delta.x, self.top + delta.y, self.width, self.height)
    }

    /// Corners in the order top-left, top-right, bottom-left, bottom-right.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "pixel geometry is floating point")]
    pub fn corners(self) -> [Point; 4] {
        let right = self.left + self.width;
        let bottom = self.top + self.height;
        [
            Point::new(self.left, self.top),
            Point::new(right, self.top),
            Point::new(self.left, bottom),
            Point::new(right, bottom),
        ]
    }
}

/// A registered drop target.
#[derive(Debug, Clone, PartialEq)]
pub struct Droppable {
    /// Identifier of the element.
    pub id: DragId,
    /// Bounding box of the element.
    pub rect: Rect,
}

/// Mean distance between the corresponding corners of two rectangles.
#[must_use]
#[expect(clippy::float_arithmetic, reason = "pixel geometry is floating point")]
pub fn corner_distance(a: Rect, b: Rect) -> f64 {
    let total: f64 = a
        .corners()
        .into_iter()
        .zip(b.corners())
        .map(|(from, to)| from.distance_to(to))
        .sum();
    total / 4.0
}

/// Picks the droppable whose corners lie closest to those of `collision`.
///
/// Ties go to the droppable registered first.
#[must_use]
pub fn closest_corners(collision: Rect, droppables: &[Droppable]) -> Option<&DragId> {
    let mut best: Option<(&DragId, f64)> = None;
    for droppable in droppables {
        let distance = corner_distance(collision, droppable.rect);
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((&droppable.id, distance));
        }
    }
    best.map(|(id, _)| id)
}
