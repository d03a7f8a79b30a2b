//! Axis-aligned geometry for hit-testing and collision checks.
//!
//! Furniture footprints are always treated as unrotated boxes here, even
//! though the renderers draw them rotated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point. Units depend on the space it lives in (pixels or metres).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Axis-aligned bounding box with a top-left origin.
///
/// `width` runs along X and `length` along Y, matching the furniture and
/// room fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub length: f64,
}

impl Aabb {
    pub fn new(x: f64, y: f64, width: f64, length: f64) -> Self {
        Self {
            x,
            y,
            width,
            length,
        }
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.length
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.length / 2.0)
    }

    /// Inclusive point containment: points on an edge count as inside.
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.max_x() && point.y >= self.y && point.y <= self.max_y()
    }

    /// Strict overlap on both axes. Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }

    /// Whether `inner` lies entirely inside this box (edges inclusive).
    pub fn contains(&self, inner: &Aabb) -> bool {
        inner.x >= self.x
            && inner.y >= self.y
            && inner.max_x() <= self.max_x()
            && inner.max_y() <= self.max_y()
    }
}
