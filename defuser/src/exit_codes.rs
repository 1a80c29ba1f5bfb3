//! Stable exit codes for defuser CLI commands.

use crate::core::error::SolveError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid arguments, config, or catalog, or any other error.
pub const INVALID: i32 = 1;
/// The indicator does not select any catalog variant.
pub const UNKNOWN_INDICATOR: i32 = 2;
/// The selected maze has no route between start and target.
pub const NO_PATH: i32 = 3;

/// Exit code for a solve failure.
pub fn for_solve_error(err: &SolveError) -> i32 {
    match err {
        SolveError::UnknownIndicator { .. } => UNKNOWN_INDICATOR,
        SolveError::NoPathFound { .. } => NO_PATH,
        SolveError::OutOfBounds { .. } => INVALID,
    }
}
