//! Deterministic, pure logic for maze solving.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod error;
pub mod invariants;
pub mod maze;
pub mod pathfinder;
pub mod selector;
pub mod translate;
pub mod types;
