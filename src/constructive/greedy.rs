//! Greedy route construction.
//!
//! # Algorithm
//!
//! Loads wait in a FIFO queue in catalog order. The head of the queue seeds
//! a route; the route then grows one load at a time. At every step each
//! legal tail extension is scored together with the already finalized
//! routes, and the cheapest one is committed. When no load fits any more,
//! the route is finalized and the next queued load seeds a fresh one.
//!
//! This is a single forward pass: a committed load is never moved, and the
//! score only decides which load joins the open route next.
//!
//! # Complexity
//!
//! O(n²·m) route-distance recomputations, where n = number of loads and
//! m = longest route length.

use std::collections::VecDeque;

use tracing::{debug, info, trace};

use super::legal_next;
use crate::config::PlannerConfig;
use crate::error::PlanError;
use crate::evaluation::{route_distance, HeuristicScorer};
use crate::models::{Load, LoadCatalog, Route, RoutePlan, Violation};

/// Builds a [`RoutePlan`] for a catalog.
///
/// # Examples
///
/// ```
/// use load_router::config::PlannerConfig;
/// use load_router::constructive::GreedyPlanner;
/// use load_router::models::{LoadCatalog, Point};
///
/// let catalog = LoadCatalog::from_points(
///     Point::ORIGIN,
///     [
///         (1, Point::new(10.0, 0.0), Point::new(20.0, 0.0)),
///         (2, Point::new(-300.0, 0.0), Point::new(-350.0, 0.0)),
///         (3, Point::new(30.0, 0.0), Point::new(40.0, 0.0)),
///     ],
/// ).unwrap();
/// let config = PlannerConfig::default();
///
/// let plan = GreedyPlanner::new(&catalog, &config).plan().unwrap();
/// assert_eq!(plan.route_ids(), vec![vec![1, 3], vec![2]]);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<'a> {
    catalog: &'a LoadCatalog,
    scorer: HeuristicScorer,
    max_distance: f64,
}

impl<'a> GreedyPlanner<'a> {
    /// Creates a planner over `catalog`.
    pub fn new(catalog: &'a LoadCatalog, config: &PlannerConfig) -> Self {
        Self {
            catalog,
            scorer: HeuristicScorer::from_config(config),
            max_distance: config.max_distance(),
        }
    }

    /// Runs route construction to completion and verifies the result.
    ///
    /// An empty catalog yields an empty plan.
    pub fn plan(&self) -> Result<RoutePlan, PlanError> {
        let mut unassigned: VecDeque<Load> = self.catalog.loads().iter().copied().collect();
        let mut plan = RoutePlan::new();

        while let Some(seed) = unassigned.pop_front() {
            let mut current = vec![seed];

            while let Some((added, extended, score)) =
                self.best_extension(&plan, &current, &unassigned)
            {
                if let Some(pos) = unassigned.iter().position(|l| l.id() == added.id()) {
                    unassigned.remove(pos);
                }
                trace!(load = added.id(), score, "committed load");
                current = extended;
            }

            let route = Route::from_loads(current);
            debug!(
                route = plan.num_routes(),
                loads = route.len(),
                distance = route.total_distance(),
                "finalized route"
            );
            plan.add_route(route);
        }

        verify(&plan, self.max_distance)?;

        info!(
            routes = plan.num_routes(),
            loads = plan.num_served(),
            total_distance = plan.total_distance(),
            total_cost = plan.total_cost(self.scorer.driver_cost()),
            "plan complete"
        );
        Ok(plan)
    }

    /// Finds the lowest-scoring tail extension of `current`.
    ///
    /// Returns the chosen load, the extended route as an owned copy, and its
    /// score. Ties keep the candidate seen first.
    fn best_extension(
        &self,
        plan: &RoutePlan,
        current: &[Load],
        unassigned: &VecDeque<Load>,
    ) -> Option<(Load, Vec<Load>, f64)> {
        let mut best_score = f64::MAX;
        let mut best = None;

        for candidate in legal_next(current, unassigned, self.max_distance) {
            let mut extended = current.to_vec();
            extended.push(candidate);

            let mut routes: Vec<&[Load]> = plan.routes().iter().map(Route::loads).collect();
            routes.push(&extended);

            let score = self.scorer.score(&routes);
            if score < best_score {
                best_score = score;
                best = Some((candidate, extended));
            }
        }

        best.map(|(load, route)| (load, route, best_score))
    }
}

/// Checks that every multi-load route in `plan` respects `max_distance`.
///
/// A single-load route is always accepted, however long its round trip.
/// Distances are recomputed from the loads rather than read from the route.
pub fn verify(plan: &RoutePlan, max_distance: f64) -> Result<(), PlanError> {
    for (route_index, route) in plan.routes().iter().enumerate() {
        if route.len() <= 1 {
            continue;
        }
        let distance = route_distance(route.loads());
        if distance > max_distance {
            return Err(PlanError::CapExceeded(Violation {
                route_index,
                distance,
                max_distance,
            }));
        }
    }
    Ok(())
}
