//! Greedy route construction for load routing.
//!
//! - [`legal_next`] — Tail extensions that keep a route under the distance cap
//! - [`GreedyPlanner`] — Best-next-load construction loop, O(n²·m)
//! - [`verify`] — Post-construction cap check

mod candidates;
mod greedy;

pub use candidates::legal_next;
pub use greedy::{verify, GreedyPlanner};
