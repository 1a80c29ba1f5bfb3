//! Maze-navigation helper for an expert guiding an operator through a
//! catalog of small grid mazes.
//!
//! Given the position of an indicator, a start cell and a target cell, the
//! solver selects the matching maze from a closed catalog, walks it with a
//! depth-first search that only knows each cell's exits, and reads the walk
//! back as `up`/`down`/`left`/`right` instructions.
//!
//! - **[`core`]**: Pure, deterministic logic (selection, traversal,
//!   translation, catalog invariants). No I/O.
//! - **[`io`]**: Catalog and config files on disk.
//!
//! [`solve`] ties the two together behind [`solve::MazeSolver`], which the
//! `defuser` binary drives.

pub mod catalog;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
