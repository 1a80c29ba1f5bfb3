//! Indicator-to-variant selection.

use std::collections::HashMap;

use crate::core::error::SolveError;
use crate::core::types::Coordinate;

/// Maps indicator coordinates to a variant index in the catalog.
///
/// Any number of indicators may select the same variant. An indicator may
/// select only one variant; the first registration wins and later duplicates
/// are reported back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSelector {
    indicators: HashMap<Coordinate, usize>,
}

impl VariantSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `indicator` for `variant`.
    ///
    /// Returns the variant already holding the indicator, if any; the
    /// existing mapping is kept.
    pub fn register(&mut self, indicator: Coordinate, variant: usize) -> Option<usize> {
        match self.indicators.get(&indicator) {
            Some(&existing) => Some(existing),
            None => {
                self.indicators.insert(indicator, variant);
                None
            }
        }
    }

    /// Resolve `indicator` to its variant index.
    pub fn select(&self, indicator: Coordinate) -> Result<usize, SolveError> {
        self.indicators
            .get(&indicator)
            .copied()
            .ok_or(SolveError::UnknownIndicator { indicator })
    }

    /// Indicators selecting `variant`, sorted by `(x, y)`.
    pub fn indicators_for(&self, variant: usize) -> Vec<Coordinate> {
        let mut found: Vec<Coordinate> = self
            .indicators
            .iter()
            .filter(|(_, index)| **index == variant)
            .map(|(indicator, _)| *indicator)
            .collect();
        found.sort();
        found
    }

    pub fn len(&self) -> usize {
        self.indicators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_tolerates_many_indicators_per_variant() {
        let mut selector = VariantSelector::new();
        for (x, y) in [(0, 0), (1, 1), (2, 2)] {
            assert_eq!(selector.register(Coordinate::new(x, y), 7), None);
        }
        assert_eq!(selector.select(Coordinate::new(1, 1)), Ok(7));
        assert_eq!(selector.indicators_for(7).len(), 3);
    }

    #[test]
    fn unknown_indicator_is_an_error_not_a_default() {
        let mut selector = VariantSelector::new();
        selector.register(Coordinate::new(0, 1), 0);
        let indicator = Coordinate::new(9, 9);
        assert_eq!(
            selector.select(indicator),
            Err(SolveError::UnknownIndicator { indicator })
        );
    }

    #[test]
    fn duplicate_registration_keeps_first_variant() {
        let mut selector = VariantSelector::new();
        let indicator = Coordinate::new(3, 3);
        assert_eq!(selector.register(indicator, 1), None);
        assert_eq!(selector.register(indicator, 2), Some(1));
        assert_eq!(selector.select(indicator), Ok(1));
    }
}
