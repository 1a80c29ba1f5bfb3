//! Failures surfaced by a solve call.

use crate::core::types::Coordinate;

/// Typed solve failures. None of these are transient; callers should not retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// The indicator does not select any variant in the catalog.
    #[error("unknown indicator {indicator}")]
    UnknownIndicator { indicator: Coordinate },

    /// Backtracking exhausted every decision point without reaching the target.
    #[error("no path found from {start} to {target}")]
    NoPathFound { start: Coordinate, target: Coordinate },

    /// A start or target coordinate lies outside the selected maze.
    #[error("{coordinate} is outside the {columns}x{rows} maze")]
    OutOfBounds {
        coordinate: Coordinate,
        columns: usize,
        rows: usize,
    },
}
