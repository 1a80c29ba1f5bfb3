//! Catalog load/save helpers with invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::Catalog;

/// Load a catalog TOML file and check its invariants.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    debug!(path = %path.display(), "loading catalog");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read catalog {}", path.display()))?;
    Catalog::from_toml_str(&contents).with_context(|| format!("parse catalog {}", path.display()))
}

/// Atomically write a catalog to disk (temp file + rename).
pub fn write_catalog(path: &Path, catalog: &Catalog) -> Result<()> {
    let buf = catalog.to_toml_string()?;
    let parent = path
        .parent()
        .with_context(|| format!("catalog path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, buf)
        .with_context(|| format!("write temp catalog {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace catalog {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("mazes").join("catalog.toml");
        let catalog = reference_catalog().expect("reference");
        write_catalog(&path, &catalog).expect("write");
        let loaded = load_catalog(&path).expect("load");
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn load_missing_file_names_the_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("missing.toml");
        let err = load_catalog(&path).expect_err("should fail");
        assert!(err.to_string().contains("missing.toml"));
    }
}
