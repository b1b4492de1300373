//! Planner parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error};
use crate::models::Point;

/// Longest round trip, in distance units, a multi-load route may travel.
pub const MAX_DISTANCE: f64 = 12.0 * 60.0;

/// Fixed cost charged per driver.
pub const DRIVER_COST: f64 = 500.0;

/// Weight of the depot-proximity bonus in the heuristic score.
pub const DEPOT_WEIGHT: f64 = 5.0;

/// Parameters of the greedy planner.
///
/// Every field has a default, so a JSON config file may set any subset.
/// The `with_*` builders do not check their input; [`validate`] or
/// [`with_overrides`] do.
///
/// [`validate`]: PlannerConfig::validate
/// [`with_overrides`]: PlannerConfig::with_overrides
///
/// # Examples
///
/// ```
/// use load_router::config::PlannerConfig;
///
/// let config = PlannerConfig::default().with_max_distance(600.0);
/// assert_eq!(config.max_distance(), 600.0);
/// assert_eq!(config.driver_cost(), 500.0);
///
/// let parsed: PlannerConfig = serde_json::from_str(r#"{"driver_cost": 250.0}"#).unwrap();
/// assert_eq!(parsed.driver_cost(), 250.0);
/// assert_eq!(parsed.max_distance(), 720.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    max_distance: f64,
    driver_cost: f64,
    depot_weight: f64,
    depot: Point,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_distance: MAX_DISTANCE,
            driver_cost: DRIVER_COST,
            depot_weight: DEPOT_WEIGHT,
            depot: Point::ORIGIN,
        }
    }
}

impl PlannerConfig {
    /// Reads and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Replaces every field given as `Some` and validates the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use load_router::config::PlannerConfig;
    ///
    /// let config = PlannerConfig::default()
    ///     .with_overrides(Some(600.0), None, None)
    ///     .unwrap();
    /// assert_eq!(config.max_distance(), 600.0);
    /// assert_eq!(config.driver_cost(), 500.0);
    ///
    /// assert!(PlannerConfig::default()
    ///     .with_overrides(None, None, Some(f64::NAN))
    ///     .is_err());
    /// ```
    pub fn with_overrides(
        mut self,
        max_distance: Option<f64>,
        driver_cost: Option<f64>,
        depot_weight: Option<f64>,
    ) -> Result<Self, ConfigError> {
        if let Some(max) = max_distance {
            self.max_distance = max;
        }
        if let Some(cost) = driver_cost {
            self.driver_cost = cost;
        }
        if let Some(weight) = depot_weight {
            self.depot_weight = weight;
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects NaN or infinite parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("max_distance", self.max_distance),
            ("driver_cost", self.driver_cost),
            ("depot_weight", self.depot_weight),
            ("depot.x", self.depot.x()),
            ("depot.y", self.depot.y()),
        ];
        let bad = fields.into_iter().find(|(_, v)| !v.is_finite());
        match bad {
            Some((field, value)) => Err(ConfigError::NonFinite { field, value }),
            None => Ok(()),
        }
    }

    /// Sets the route distance cap.
    pub fn with_max_distance(mut self, max: f64) -> Self {
        self.max_distance = max;
        self
    }

    /// Sets the fixed cost per driver.
    pub fn with_driver_cost(mut self, cost: f64) -> Self {
        self.driver_cost = cost;
        self
    }

    /// Sets the depot-proximity weight.
    pub fn with_depot_weight(mut self, weight: f64) -> Self {
        self.depot_weight = weight;
        self
    }

    /// Moves the depot.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Route distance cap.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Fixed cost per driver.
    pub fn driver_cost(&self) -> f64 {
        self.driver_cost
    }

    /// Depot-proximity weight.
    pub fn depot_weight(&self) -> f64 {
        self.depot_weight
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }
}
