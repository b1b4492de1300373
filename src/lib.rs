//! # load-router
//!
//! Assigns point-to-point loads to drivers so that every driver's round trip
//! from a shared depot stays under a distance cap, greedily trading total
//! distance against the number of drivers.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, LoadCatalog, Route, RoutePlan)
//! - [`evaluation`] — Route distance and heuristic scoring
//! - [`constructive`] — Candidate filtering and the greedy route planner
//! - [`config`] — Planner parameters
//! - [`io`] — Problem-file parsing and route formatting
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use load_router::config::PlannerConfig;
//! use load_router::constructive::GreedyPlanner;
//! use load_router::io::parse_problem;
//!
//! let input = "loadNumber pickup dropoff\n\
//!              1 (1.0,1.0) (2.0,2.0)\n\
//!              2 (3.0,3.0) (4.0,4.0)\n";
//! let config = PlannerConfig::default();
//! let catalog = parse_problem(input, config.depot()).unwrap();
//! let plan = GreedyPlanner::new(&catalog, &config).plan().unwrap();
//! assert_eq!(plan.route_ids(), vec![vec![1, 2]]);
//! ```

pub mod config;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;

pub use error::{CatalogError, ConfigError, Error, ParseError, PlanError};
