//! Maze solving entry point: selector -> pathfinder -> translator.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::catalog::{Catalog, VariantSpec, reference_catalog};
use crate::core::error::SolveError;
use crate::core::pathfinder::find_path;
use crate::core::selector::VariantSelector;
use crate::core::translate::translate;
use crate::core::types::{Coordinate, Direction};
use crate::io::catalog_store::load_catalog;

/// A validated catalog paired with its indicator selector.
///
/// Read-only once built; every solve owns its own traversal state, so one
/// solver can serve any number of calls.
#[derive(Debug, Clone)]
pub struct MazeSolver {
    catalog: Catalog,
    selector: VariantSelector,
}

impl MazeSolver {
    /// Wrap `catalog`, rejecting it if any invariant fails.
    pub fn new(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self::from_validated(catalog))
    }

    /// Wrap a catalog that already passed `Catalog::validate`.
    fn from_validated(catalog: Catalog) -> Self {
        let selector = catalog.selector();
        Self { catalog, selector }
    }

    /// Solver over the embedded reference catalog.
    pub fn reference() -> Result<Self> {
        Ok(Self::from_validated(reference_catalog()?))
    }

    /// Solver over a catalog file, or the reference catalog when `path` is `None`.
    pub fn from_catalog_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let catalog = load_catalog(path)
                    .with_context(|| format!("load catalog {}", path.display()))?;
                info!(path = %path.display(), variants = catalog.variants.len(), "catalog loaded");
                Ok(Self::from_validated(catalog))
            }
            None => Self::reference(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Variant selected by `indicator`.
    pub fn variant(&self, indicator: Coordinate) -> Result<&VariantSpec, SolveError> {
        let index = self.selector.select(indicator)?;
        let variant = &self.catalog.variants[index];
        debug!(%indicator, variant = %variant.id, "variant selected");
        Ok(variant)
    }

    /// Indicators selecting the variant at `index`, sorted by `(x, y)`.
    pub fn indicators_for(&self, index: usize) -> Vec<Coordinate> {
        self.selector.indicators_for(index)
    }

    /// Walked path from `start` to `target` in the variant `indicator` selects.
    pub fn path(
        &self,
        indicator: Coordinate,
        start: Coordinate,
        target: Coordinate,
    ) -> Result<Vec<Coordinate>, SolveError> {
        let variant = self.variant(indicator)?;
        find_path(&variant.maze, start, target)
    }

    /// Instructions leading from `start` to `target`.
    ///
    /// Empty when `start == target`. Never returns a partial route: an
    /// unreachable target is `SolveError::NoPathFound`.
    pub fn solve(
        &self,
        indicator: Coordinate,
        start: Coordinate,
        target: Coordinate,
    ) -> Result<Vec<Direction>, SolveError> {
        let path = self.path(indicator, start, target)?;
        Ok(translate(&path))
    }
}
