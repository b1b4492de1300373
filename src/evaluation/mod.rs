//! Route evaluation: depot-to-depot distance and the heuristic score used
//! to rank candidate extensions.

mod cost;
mod scorer;

pub use cost::route_distance;
pub use scorer::HeuristicScorer;
