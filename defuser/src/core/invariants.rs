//! Semantic catalog invariants not expressible in the TOML shape.

use std::collections::HashSet;

use crate::catalog::{CATALOG_VERSION, Catalog, MAX_GRID_SIDE, VariantSpec};
use crate::core::selector::VariantSelector;

/// Check catalog invariants:
/// - Supported `version`, at least one variant
/// - Unique, non-empty variant ids
/// - Every variant has an indicator, each inside its grid
/// - No indicator selects more than one variant
/// - Grids no larger than `MAX_GRID_SIDE` on either side
/// - No exit leaves the grid, and every exit is mirrored by its neighbor
pub fn validate_catalog(catalog: &Catalog) -> Vec<String> {
    let mut errors = Vec::new();

    if catalog.version != CATALOG_VERSION {
        errors.push(format!(
            "unsupported catalog version {} (expected {})",
            catalog.version, CATALOG_VERSION
        ));
    }
    if catalog.variants.is_empty() {
        errors.push("catalog has no variants".to_string());
    }

    let mut ids = HashSet::new();
    let mut selector = VariantSelector::new();
    for (index, variant) in catalog.variants.iter().enumerate() {
        if variant.id.trim().is_empty() {
            errors.push(format!("variant #{index}: id must be non-empty"));
        } else if !ids.insert(variant.id.as_str()) {
            errors.push(format!("duplicate variant id '{}'", variant.id));
        }

        for indicator in &variant.indicators {
            if let Some(existing) = selector.register(*indicator, index) {
                errors.push(format!(
                    "{}: indicator {} already selects '{}'",
                    variant.id, indicator, catalog.variants[existing].id
                ));
            }
        }

        validate_variant(variant, &mut errors);
    }

    errors
}

fn validate_variant(variant: &VariantSpec, errors: &mut Vec<String>) {
    let id = &variant.id;
    let maze = &variant.maze;

    if variant.indicators.is_empty() {
        errors.push(format!("{id}: at least one indicator is required"));
    }
    for indicator in &variant.indicators {
        if !maze.contains(*indicator) {
            errors.push(format!("{id}: indicator {indicator} is outside the grid"));
        }
    }

    if maze.columns() > MAX_GRID_SIDE || maze.rows() > MAX_GRID_SIDE {
        errors.push(format!(
            "{id}: grid is {}x{}, larger than {MAX_GRID_SIDE}x{MAX_GRID_SIDE}",
            maze.columns(),
            maze.rows()
        ));
    }

    for cell in maze.coordinates() {
        let Some(exits) = maze.exits(cell) else {
            continue;
        };
        for direction in exits.iter() {
            match maze.neighbor(cell, direction) {
                None => errors.push(format!("{id}: exit {direction} at {cell} leaves the grid")),
                Some(next) => {
                    let mirrored = maze
                        .exits(next)
                        .is_some_and(|back| back.contains(direction.opposite()));
                    if !mirrored {
                        errors.push(format!(
                            "{id}: exit {direction} at {cell} is not mirrored by {} at {next}",
                            direction.opposite()
                        ));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;
    use crate::core::types::Coordinate;
    use crate::test_support::{catalog_with, variant};

    #[test]
    fn reference_catalog_is_clean() {
        let catalog = reference_catalog().expect("reference catalog");
        assert!(validate_catalog(&catalog).is_empty());
    }

    #[test]
    fn reports_duplicate_ids_and_shared_indicators() {
        let catalog = catalog_with(vec![
            variant("a", &[(0, 0)], &[&["r", "l"]]),
            variant("a", &[(0, 0)], &[&["r", "l"]]),
        ]);
        let errors = validate_catalog(&catalog);
        assert!(errors.iter().any(|err| err.contains("duplicate variant id")));
        assert!(
            errors
                .iter()
                .any(|err| err.contains("indicator (0, 0) already selects 'a'"))
        );
    }

    #[test]
    fn reports_unmirrored_exit() {
        let catalog = catalog_with(vec![variant("one-way", &[(0, 0)], &[&["r", ""]])]);
        let errors = validate_catalog(&catalog);
        assert_eq!(
            errors,
            vec!["one-way: exit right at (0, 0) is not mirrored by left at (1, 0)".to_string()]
        );
    }

    #[test]
    fn reports_oversized_grid_and_stray_indicator() {
        let row: &[&str] = &["", "", "", "", "", "", ""];
        let catalog = catalog_with(vec![variant("wide", &[(9, 0)], &[row])]);
        let errors = validate_catalog(&catalog);
        assert!(errors.iter().any(|err| err.contains("larger than 6x6")));
        assert!(errors.iter().any(|err| err.contains("outside the grid")));
    }

    #[test]
    fn reports_version_and_missing_indicators() {
        let mut catalog = catalog_with(vec![variant("bare", &[], &[&[""]])]);
        catalog.version = 2;
        let errors = validate_catalog(&catalog);
        assert!(errors.iter().any(|err| err.contains("unsupported catalog version 2")));
        assert!(errors.iter().any(|err| err.contains("at least one indicator")));
        assert_eq!(catalog.selector().select(Coordinate::new(0, 0)).ok(), None);
    }
}
