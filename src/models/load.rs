//! Load type: a pickup at one point and a drop-off at another.

use super::Point;

/// Identifier of a load as written in the problem file.
pub type LoadId = u32;

/// A pickup-and-dropoff task.
///
/// The three depot-related distances are computed once at construction and
/// never change, so route evaluation only has to measure the legs between
/// consecutive loads.
///
/// # Examples
///
/// ```
/// use load_router::models::{Load, Point};
///
/// let load = Load::new(7, Point::new(3.0, 4.0), Point::new(3.0, 0.0), Point::ORIGIN);
/// assert_eq!(load.id(), 7);
/// assert!((load.start_to_end() - 4.0).abs() < 1e-10);
/// assert!((load.start_to_depot() - 5.0).abs() < 1e-10);
/// assert!((load.end_to_depot() - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Load {
    id: LoadId,
    start: Point,
    end: Point,
    start_to_end: f64,
    start_to_depot: f64,
    end_to_depot: f64,
}

impl Load {
    /// Creates a load, measuring its legs against `depot`.
    pub fn new(id: LoadId, start: Point, end: Point, depot: Point) -> Self {
        Self {
            id,
            start,
            end,
            start_to_end: start.distance_to(&end),
            start_to_depot: start.distance_to(&depot),
            end_to_depot: end.distance_to(&depot),
        }
    }

    /// Load ID.
    pub fn id(&self) -> LoadId {
        self.id
    }

    /// Pickup location.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Drop-off location.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Distance from pickup to drop-off.
    pub fn start_to_end(&self) -> f64 {
        self.start_to_end
    }

    /// Distance between the pickup and the depot.
    pub fn start_to_depot(&self) -> f64 {
        self.start_to_depot
    }

    /// Distance between the drop-off and the depot.
    pub fn end_to_depot(&self) -> f64 {
        self.end_to_depot
    }

    /// Length of a route serving only this load.
    pub fn round_trip(&self) -> f64 {
        self.start_to_depot + self.start_to_end + self.end_to_depot
    }

    /// Distance from this load's drop-off to `next`'s pickup.
    pub fn leg_to(&self, next: &Load) -> f64 {
        self.end.distance_to(&next.start)
    }
}
