//! I/O helpers for defuser commands.

pub mod catalog_store;
pub mod config;
