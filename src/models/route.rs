//! Route type.

use super::{Load, LoadId};
use crate::evaluation::route_distance;

/// An ordered sequence of loads served by a single driver.
///
/// A route starts and ends at the depot (not stored in `loads`). The total
/// distance is kept in sync with the sequence on every push.
///
/// # Examples
///
/// ```
/// use load_router::models::{Load, Point, Route};
///
/// let mut route = Route::new();
/// route.push_load(Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 4.0), Point::ORIGIN));
/// assert_eq!(route.len(), 1);
/// assert!((route.total_distance() - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    loads: Vec<Load>,
    total_distance: f64,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route serving `loads` in the given order.
    pub fn from_loads(loads: Vec<Load>) -> Self {
        let total_distance = route_distance(&loads);
        Self {
            loads,
            total_distance,
        }
    }

    /// Appends a load to the end of this route.
    pub fn push_load(&mut self, load: Load) {
        self.loads.push(load);
        self.total_distance = route_distance(&self.loads);
    }

    /// Returns the loads in visit order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Returns the number of loads (excluding depot).
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if this route has no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// Returns the load IDs in visit order.
    pub fn load_ids(&self) -> Vec<LoadId> {
        self.loads.iter().map(|l| l.id()).collect()
    }

    /// Returns `true` if the load with `id` is on this route.
    pub fn contains(&self, id: LoadId) -> bool {
        self.loads.iter().any(|l| l.id() == id)
    }

    /// Depot to depot distance of this route.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}
