//! Planar point type and Euclidean distance.

use serde::{Deserialize, Serialize};

/// An immutable position in the plane.
///
/// # Examples
///
/// ```
/// use load_router::models::Point;
///
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.x(), 3.0);
/// assert!((p.distance_to(&Point::ORIGIN) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// The origin, where the depot sits unless configured otherwise.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(self, other)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Euclidean distance between two points. Symmetric in its arguments.
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}
