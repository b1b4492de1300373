//! Route cost model.

use crate::models::Load;

/// Total distance a driver travels serving `loads` in order.
///
/// Sums the depot leg to the first pickup, every load's own pickup to
/// drop-off leg, the empty legs between consecutive loads, and the leg from
/// the last drop-off back to the depot. An empty sequence costs nothing.
///
/// # Examples
///
/// ```
/// use load_router::evaluation::route_distance;
/// use load_router::models::{Load, Point};
///
/// let a = Load::new(1, Point::new(0.0, 3.0), Point::new(4.0, 3.0), Point::ORIGIN);
/// let b = Load::new(2, Point::new(4.0, 0.0), Point::new(4.0, 0.0), Point::ORIGIN);
/// // 3 + 4 + 3 + 0 + 4
/// assert!((route_distance(&[a, b]) - 14.0).abs() < 1e-10);
/// assert_eq!(route_distance(&[]), 0.0);
/// ```
pub fn route_distance(loads: &[Load]) -> f64 {
    let (first, last) = match (loads.first(), loads.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return 0.0,
    };

    let mut dist = first.start_to_depot();
    for (i, load) in loads.iter().enumerate() {
        dist += load.start_to_end();
        if let Some(next) = loads.get(i + 1) {
            dist += load.leg_to(next);
        }
    }
    dist + last.end_to_depot()
}
