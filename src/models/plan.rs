//! Route plan and cap violation types.

use std::fmt;

use super::{LoadId, Route};

/// A finalized route whose distance breaches the configured cap.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Route index in the plan.
    pub route_index: usize,
    /// Actual distance.
    pub distance: f64,
    /// Maximum allowed distance.
    pub max_distance: f64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route {} travels {:.3}, exceeding the cap of {}",
            self.route_index, self.distance, self.max_distance
        )
    }
}

/// The outcome of route construction: one route per driver, in the order
/// the routes were finalized.
///
/// # Examples
///
/// ```
/// use load_router::models::{Route, RoutePlan};
///
/// let mut plan = RoutePlan::new();
/// plan.add_route(Route::new());
/// assert_eq!(plan.num_routes(), 1);
/// assert_eq!(plan.num_served(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutePlan {
    routes: Vec<Route>,
}

impl RoutePlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finalized route.
    pub fn add_route(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Returns the routes in this plan.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of routes (drivers used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route was produced.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Total number of loads served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance()).sum()
    }

    /// Fixed cost per driver plus total distance.
    pub fn total_cost(&self, driver_cost: f64) -> f64 {
        driver_cost * self.num_routes() as f64 + self.total_distance()
    }

    /// Load IDs of every route, in visit order.
    pub fn route_ids(&self) -> Vec<Vec<LoadId>> {
        self.routes.iter().map(|r| r.load_ids()).collect()
    }
}
