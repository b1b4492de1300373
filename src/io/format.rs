//! Plan output: one bracketed line per route, or a JSON report.

use std::io::{self, Write};

use serde::Serialize;

use crate::models::{LoadId, Route, RoutePlan};

/// Formats a route as `[id1,id2,...]`.
///
/// # Examples
///
/// ```
/// use load_router::io::format_route;
/// use load_router::models::{Load, Point, Route};
///
/// let route = Route::from_loads(vec![
///     Load::new(4, Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::ORIGIN),
///     Load::new(9, Point::new(3.0, 0.0), Point::new(4.0, 0.0), Point::ORIGIN),
/// ]);
/// assert_eq!(format_route(&route), "[4,9]");
/// ```
pub fn format_route(route: &Route) -> String {
    let ids: Vec<String> = route.loads().iter().map(|l| l.id().to_string()).collect();
    format!("[{}]", ids.join(","))
}

/// Writes every route of `plan` on its own line.
pub fn write_text<W: Write>(out: &mut W, plan: &RoutePlan) -> io::Result<()> {
    for route in plan.routes() {
        writeln!(out, "{}", format_route(route))?;
    }
    Ok(())
}

/// Serializable summary of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    /// Load IDs per route, in visit order.
    pub routes: Vec<Vec<LoadId>>,
    /// Number of drivers used.
    pub drivers: usize,
    /// Sum of route distances.
    pub total_distance: f64,
    /// `driver_cost * drivers + total_distance`.
    pub total_cost: f64,
}

impl PlanReport {
    /// Summarizes `plan` with the given per-driver cost.
    pub fn new(plan: &RoutePlan, driver_cost: f64) -> Self {
        Self {
            routes: plan.route_ids(),
            drivers: plan.num_routes(),
            total_distance: plan.total_distance(),
            total_cost: plan.total_cost(driver_cost),
        }
    }
}

/// Writes `plan` as a single JSON object followed by a newline.
pub fn write_json<W: Write>(out: &mut W, plan: &RoutePlan, driver_cost: f64) -> io::Result<()> {
    serde_json::to_writer(&mut *out, &PlanReport::new(plan, driver_cost))?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Load, Point};

    fn load(id: LoadId, x: f64, y: f64) -> Load {
        Load::new(id, Point::new(x, y), Point::new(x, y), Point::ORIGIN)
    }

    fn sample_plan() -> RoutePlan {
        let mut plan = RoutePlan::new();
        let shared = vec![load(1, 3.0, 4.0), load(3, 3.0, 4.0)];
        plan.add_route(Route::from_loads(shared));
        plan.add_route(Route::from_loads(vec![load(2, 6.0, 8.0)]));
        plan
    }

    #[test]
    fn test_format_single() {
        let route = Route::from_loads(vec![load(12, 1.0, 1.0)]);
        assert_eq!(format_route(&route), "[12]");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_route(&Route::new()), "[]");
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        write_text(&mut out, &sample_plan()).expect("write to vec");
        assert_eq!(String::from_utf8(out).expect("utf8"), "[1,3]\n[2]\n");
    }

    #[test]
    fn test_write_text_empty_plan() {
        let mut out = Vec::new();
        write_text(&mut out, &RoutePlan::new()).expect("write to vec");
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &sample_plan(), 500.0).expect("write to vec");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");
        assert_eq!(value["routes"], serde_json::json!([[1, 3], [2]]));
        assert_eq!(value["drivers"], 2);
        assert_eq!(value["total_distance"], 30.0);
        assert_eq!(value["total_cost"], 1030.0);
    }
}
