mod flatten;
pub mod path;
pub mod store;

use serde::{Deserialize, Serialize};

pub use path::{FillRule, Outline, PathError};
pub use store::{GeometryFile, GeometryStore, Section, SectionRecord, StadiumInfo};

/// A 2D point. Which coordinate space it lives in is up to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height pair in pixels or source units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Axis-aligned rectangle, `x`/`y` at the top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Grow the box by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// Smallest box enclosing all `points`, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self::new(min_x, min_y, max_x - min_x, max_y - min_y))
    }

    /// Largest per-edge distance between two boxes.
    pub fn max_edge_delta(&self, other: &Self) -> f64 {
        (self.x - other.x)
            .abs()
            .max((self.y - other.y).abs())
            .max((self.right() - other.right()).abs())
            .max((self.bottom() - other.bottom()).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_box_grows_symmetrically() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0).expanded(5.0);
        assert_eq!(b, BoundingBox::new(5.0, 15.0, 40.0, 50.0));
    }

    #[test]
    fn contains_is_inclusive_on_edges() {
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(b.contains(Point::new(0.0, 10.0)));
        assert!(b.contains(Point::new(10.0, 0.0)));
        assert!(!b.contains(Point::new(10.01, 5.0)));
    }

    #[test]
    fn from_points_covers_all() {
        let b = BoundingBox::from_points([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(b, BoundingBox::new(-2.0, -1.0, 5.0, 5.0));
        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }
}
