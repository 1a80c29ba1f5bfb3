//! Test-only helpers for constructing mazes and catalogs.

use crate::catalog::{CATALOG_VERSION, Catalog, VariantSpec};
use crate::core::maze::{ExitSet, MazeVariant};
use crate::core::types::Coordinate;

/// Build a maze from rows of exit strings (top row first).
///
/// Panics on malformed input; only for fixtures.
pub fn maze(rows: &[&[&str]]) -> MazeVariant {
    let cells = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|raw| raw.parse::<ExitSet>().expect("exit letters"))
                .collect()
        })
        .collect();
    MazeVariant::from_rows(cells).expect("rectangular maze")
}

/// Create a catalog variant with the given indicators and layout.
pub fn variant(id: &str, indicators: &[(usize, usize)], rows: &[&[&str]]) -> VariantSpec {
    VariantSpec {
        id: id.to_string(),
        indicators: indicators.iter().copied().map(Coordinate::from).collect(),
        maze: maze(rows),
    }
}

/// Wrap variants in a current-version catalog without validating it.
pub fn catalog_with(variants: Vec<VariantSpec>) -> Catalog {
    Catalog {
        version: CATALOG_VERSION,
        variants,
    }
}

/// Write `contents` to `name` inside a fresh temp dir.
///
/// The returned guard keeps the directory alive.
pub fn temp_file(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp file");
    (dir, path)
}
