//! Immutable, ordered collection of loads.

use std::collections::HashSet;

use super::{Load, LoadId, Point};
use crate::error::CatalogError;

/// The loads of one problem instance, in input order.
///
/// A catalog can only be built through [`CatalogBuilder`], which rejects
/// duplicate IDs; afterwards it is read-only.
///
/// # Examples
///
/// ```
/// use load_router::models::{LoadCatalog, Point};
///
/// let catalog = LoadCatalog::from_points(
///     Point::ORIGIN,
///     [(1, Point::new(1.0, 0.0), Point::new(2.0, 0.0))],
/// ).unwrap();
/// assert_eq!(catalog.len(), 1);
/// assert_eq!(catalog.get(1).map(|l| l.id()), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct LoadCatalog {
    depot: Point,
    loads: Vec<Load>,
}

impl LoadCatalog {
    /// Starts an empty catalog measured against `depot`.
    pub fn builder(depot: Point) -> CatalogBuilder {
        CatalogBuilder {
            depot,
            loads: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Builds a catalog from `(id, start, end)` triples.
    pub fn from_points<I>(depot: Point, loads: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (LoadId, Point, Point)>,
    {
        let mut builder = Self::builder(depot);
        for (id, start, end) in loads {
            builder.add(id, start, end)?;
        }
        Ok(builder.build())
    }

    /// Depot every load was measured against.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// All loads in input order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Looks up a load by ID.
    pub fn get(&self, id: LoadId) -> Option<&Load> {
        self.loads.iter().find(|l| l.id() == id)
    }

    /// Number of loads.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if there are no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

/// Accumulates loads for a [`LoadCatalog`].
#[derive(Debug)]
pub struct CatalogBuilder {
    depot: Point,
    loads: Vec<Load>,
    seen: HashSet<LoadId>,
}

impl CatalogBuilder {
    /// Appends a load, computing its depot distances.
    pub fn add(&mut self, id: LoadId, start: Point, end: Point) -> Result<(), CatalogError> {
        if !self.seen.insert(id) {
            return Err(CatalogError::DuplicateId(id));
        }
        self.loads.push(Load::new(id, start, end, self.depot));
        Ok(())
    }

    /// Freezes the catalog.
    pub fn build(self) -> LoadCatalog {
        LoadCatalog {
            depot: self.depot,
            loads: self.loads,
        }
    }
}
