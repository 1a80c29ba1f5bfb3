//! Maze catalog: the closed set of layouts and the indicators selecting them.
//!
//! Catalogs are plain TOML data. The reference catalog is compiled into the
//! binary; alternative catalogs can be loaded through `io::catalog_store`.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::invariants::validate_catalog;
use crate::core::maze::MazeVariant;
use crate::core::selector::VariantSelector;
use crate::core::types::Coordinate;

/// Catalog format version understood by this crate.
pub const CATALOG_VERSION: u32 = 1;

/// Largest maze side a catalog may declare.
pub const MAX_GRID_SIDE: usize = 6;

const REFERENCE_CATALOG: &str = include_str!("../catalog/reference.toml");

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub version: u32,
    pub variants: Vec<VariantSpec>,
}

/// One catalog entry: a maze layout plus the indicators that select it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantSpec {
    pub id: String,
    pub indicators: Vec<Coordinate>,
    #[serde(rename = "rows")]
    pub maze: MazeVariant,
}

impl Catalog {
    /// Parse a catalog from TOML and check its invariants.
    pub fn from_toml_str(raw: &str) -> Result<Catalog> {
        let catalog: Catalog = toml::from_str(raw).context("parse catalog toml")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check every catalog invariant, reporting all violations in one error.
    pub fn validate(&self) -> Result<()> {
        let errors = validate_catalog(self);
        if !errors.is_empty() {
            bail!("catalog invariant violations:\n- {}", errors.join("\n- "));
        }
        Ok(())
    }

    /// Serialize to TOML with a trailing newline.
    pub fn to_toml_string(&self) -> Result<String> {
        let mut buf = toml::to_string_pretty(self).context("serialize catalog toml")?;
        if !buf.ends_with('\n') {
            buf.push('\n');
        }
        Ok(buf)
    }

    /// Build the indicator selector over this catalog's variants.
    ///
    /// Duplicate indicators keep their first variant; `validate_catalog`
    /// reports them.
    pub fn selector(&self) -> VariantSelector {
        let mut selector = VariantSelector::new();
        for (index, variant) in self.variants.iter().enumerate() {
            for indicator in &variant.indicators {
                selector.register(*indicator, index);
            }
        }
        selector
    }
}

/// The nine-variant reference catalog embedded in the crate.
pub fn reference_catalog() -> Result<Catalog> {
    Catalog::from_toml_str(REFERENCE_CATALOG).context("load embedded reference catalog")
}
