//! Candidate filter for tail extensions.

use crate::evaluation::route_distance;
use crate::models::Load;

/// Returns the unassigned loads that may be appended to `route`.
///
/// A load qualifies when the extended route stays strictly below
/// `max_distance` and the load is not already on the route. Only extension
/// at the tail is considered. Candidates keep the order of `unassigned`.
/// An empty result means the route is full.
///
/// # Examples
///
/// ```
/// use load_router::constructive::legal_next;
/// use load_router::models::{Load, Point};
///
/// let route = [Load::new(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::ORIGIN)];
/// let near = Load::new(2, Point::new(3.0, 0.0), Point::new(4.0, 0.0), Point::ORIGIN);
/// let far = Load::new(3, Point::new(500.0, 0.0), Point::new(501.0, 0.0), Point::ORIGIN);
///
/// let next = legal_next(&route, &[near, far], 720.0);
/// assert_eq!(next.iter().map(|l| l.id()).collect::<Vec<_>>(), vec![2]);
/// ```
pub fn legal_next<'a, I>(route: &[Load], unassigned: I, max_distance: f64) -> Vec<Load>
where
    I: IntoIterator<Item = &'a Load>,
{
    let mut extended = Vec::with_capacity(route.len() + 1);
    extended.extend_from_slice(route);

    let mut legal = Vec::new();
    for load in unassigned {
        if route.iter().any(|l| l.id() == load.id()) {
            continue;
        }
        extended.push(*load);
        let dist = route_distance(&extended);
        extended.pop();
        if dist < max_distance {
            legal.push(*load);
        }
    }
    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn load(id: u32, x: f64) -> Load {
        Load::new(id, Point::new(x, 0.0), Point::new(x, 0.0), Point::ORIGIN)
    }

    fn ids(loads: &[Load]) -> Vec<u32> {
        loads.iter().map(|l| l.id()).collect()
    }

    #[test]
    fn test_keeps_queue_order() {
        let route = [load(1, 10.0)];
        let pool = [load(4, 30.0), load(2, 20.0), load(3, 5.0)];
        assert_eq!(ids(&legal_next(&route, &pool, 720.0)), vec![4, 2, 3]);
    }

    #[test]
    fn test_cap_is_strict() {
        // 0 -> 10 -> 360 -> 0 travels exactly 720
        let route = [load(1, 10.0)];
        let pool = [load(2, 360.0)];
        assert!(legal_next(&route, &pool, 720.0).is_empty());
        assert_eq!(ids(&legal_next(&route, &pool, 720.5)), vec![2]);
    }

    #[test]
    fn test_skips_loads_on_route() {
        let route = [load(1, 10.0), load(2, 20.0)];
        let pool = [load(2, 20.0), load(3, 30.0)];
        assert_eq!(ids(&legal_next(&route, &pool, 720.0)), vec![3]);
    }

    #[test]
    fn test_full_route() {
        let route = [load(1, 300.0)];
        let pool = [load(2, 400.0), load(3, 500.0)];
        assert!(legal_next(&route, &pool, 720.0).is_empty());
    }

    #[test]
    fn test_empty_pool() {
        let route = [load(1, 10.0)];
        assert!(legal_next(&route, &[], 720.0).is_empty());
    }

    #[test]
    fn test_route_is_not_modified() {
        let route = vec![load(1, 10.0)];
        let before = route.clone();
        let _ = legal_next(&route, &[load(2, 20.0)], 720.0);
        assert_eq!(route, before);
    }
}
