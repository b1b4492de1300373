//! Domain model types for load routing.
//!
//! Provides the core abstractions: planar points, loads with precomputed
//! depot distances, the immutable catalog of a problem instance, routes as
//! ordered sequences of loads, and the plan that collects them.

mod catalog;
mod load;
mod plan;
mod point;
mod route;

pub use catalog::{CatalogBuilder, LoadCatalog};
pub use load::{Load, LoadId};
pub use plan::{RoutePlan, Violation};
pub use point::{distance, Point};
pub use route::Route;
