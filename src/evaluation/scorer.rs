//! Heuristic score for ranking candidate route extensions.

use super::route_distance;
use crate::config::PlannerConfig;
use crate::models::Load;

/// Scores a complete hypothetical set of routes. Lower is better.
///
/// ```text
/// score = Σ_r [ distance(r) + driver_cost · |routes| ]
///         − depot_weight · first route's first pickup-to-depot distance
///         − depot_weight · last route's last drop-off-to-depot distance
/// ```
///
/// The driver cost is charged `|routes|` times per route, so its total grows
/// with the square of the route count. The depot bonus only looks at the two
/// outermost ends of the set, not at every route boundary.
///
/// # Examples
///
/// ```
/// use load_router::evaluation::HeuristicScorer;
/// use load_router::models::{Load, Point};
///
/// let scorer = HeuristicScorer::new(500.0, 5.0);
/// let a = Load::new(1, Point::new(3.0, 4.0), Point::new(3.0, 4.0), Point::ORIGIN);
/// let route = [a];
/// // 10 + 500 - 25 - 25
/// assert!((scorer.score(&[&route[..]]) - 460.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicScorer {
    driver_cost: f64,
    depot_weight: f64,
}

impl HeuristicScorer {
    /// Creates a scorer with explicit weights.
    pub fn new(driver_cost: f64, depot_weight: f64) -> Self {
        Self {
            driver_cost,
            depot_weight,
        }
    }

    /// Creates a scorer from the planner configuration.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::new(config.driver_cost(), config.depot_weight())
    }

    /// Fixed cost per driver.
    pub fn driver_cost(&self) -> f64 {
        self.driver_cost
    }

    /// Depot-proximity weight.
    pub fn depot_weight(&self) -> f64 {
        self.depot_weight
    }

    /// Scores `routes`, given in plan order.
    ///
    /// An empty set scores zero. An empty outermost route contributes no
    /// depot bonus.
    pub fn score(&self, routes: &[&[Load]]) -> f64 {
        let fixed = self.driver_cost * routes.len() as f64;

        let mut total = 0.0;
        for route in routes {
            total += route_distance(route);
            total += fixed;
        }

        if let Some(first) = routes.first().and_then(|r| r.first()) {
            total -= first.start_to_depot() * self.depot_weight;
        }
        if let Some(last) = routes.last().and_then(|r| r.last()) {
            total -= last.end_to_depot() * self.depot_weight;
        }
        total
    }
}

impl Default for HeuristicScorer {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}
