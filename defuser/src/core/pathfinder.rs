//! Depth-first maze walk with explicit backtracking.
//!
//! The walk only knows the exits of the cell it is standing on. At each cell
//! it takes the first exit (in `Direction::PRIORITY` order) leading to a cell
//! it has not stepped on yet. Cells with more than one such exit are recorded
//! as branch points together with the path length at that moment; a dead end
//! pops the latest branch point and truncates the path back to it.
//!
//! Cells are marked visited the moment they are stepped on, so the walk never
//! oscillates and terminates after at most one advance per cell.

use std::collections::HashSet;

use tracing::{debug, instrument, trace};

use crate::core::error::SolveError;
use crate::core::maze::MazeVariant;
use crate::core::types::{Coordinate, Direction};

/// Decision point the walk may return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BranchPoint {
    pub at: Coordinate,
    /// Length of the path (ending at `at`) when the walk left this cell.
    pub path_len: usize,
}

/// Result of a single traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The walk is standing on the target; nothing changed.
    Arrived,
    Advanced {
        from: Coordinate,
        direction: Direction,
        to: Coordinate,
    },
    /// Dead end; the walk resumed from this branch point.
    Backtracked { to: Coordinate },
}

/// Transient state of one walk. Created per solve and dropped afterwards.
#[derive(Debug, Clone)]
pub struct TraversalState {
    start: Coordinate,
    target: Coordinate,
    current: Coordinate,
    visited: HashSet<Coordinate>,
    branch_points: Vec<BranchPoint>,
    path: Vec<Coordinate>,
}

impl TraversalState {
    pub fn new(start: Coordinate, target: Coordinate) -> Self {
        Self {
            start,
            target,
            current: start,
            visited: HashSet::from([start]),
            branch_points: Vec::new(),
            path: vec![start],
        }
    }

    pub fn current(&self) -> Coordinate {
        self.current
    }

    pub fn is_complete(&self) -> bool {
        self.current == self.target
    }

    /// Path as currently believed, from start to the current cell.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn branch_points(&self) -> &[BranchPoint] {
        &self.branch_points
    }

    pub fn has_visited(&self, coordinate: Coordinate) -> bool {
        self.visited.contains(&coordinate)
    }

    pub fn into_path(self) -> Vec<Coordinate> {
        self.path
    }

    /// Exits from the current cell leading to unvisited cells, in priority order.
    fn viable_exits(&self, maze: &MazeVariant) -> Vec<(Direction, Coordinate)> {
        let Some(exits) = maze.exits(self.current) else {
            return Vec::new();
        };
        exits
            .iter()
            .filter_map(|direction| {
                maze.neighbor(self.current, direction)
                    .filter(|next| !self.visited.contains(next))
                    .map(|next| (direction, next))
            })
            .collect()
    }

    /// Advance the walk by one move or one backtrack.
    ///
    /// Fails with `NoPathFound` when a dead end is reached and no branch
    /// point remains.
    pub fn step(&mut self, maze: &MazeVariant) -> Result<Step, SolveError> {
        if self.is_complete() {
            return Ok(Step::Arrived);
        }

        let viable = self.viable_exits(maze);
        if viable.len() > 1 {
            trace!(at = %self.current, options = viable.len(), "branch point");
            self.branch_points.push(BranchPoint {
                at: self.current,
                path_len: self.path.len(),
            });
        }

        if let Some(&(direction, next)) = viable.first() {
            let from = self.current;
            trace!(%from, %direction, to = %next, "advance");
            self.visited.insert(next);
            self.path.push(next);
            self.current = next;
            return Ok(Step::Advanced {
                from,
                direction,
                to: next,
            });
        }

        let branch = self.branch_points.pop().ok_or(SolveError::NoPathFound {
            start: self.start,
            target: self.target,
        })?;
        trace!(dead_end = %self.current, to = %branch.at, "backtrack");
        self.path.truncate(branch.path_len);
        self.current = branch.at;
        Ok(Step::Backtracked { to: branch.at })
    }
}

/// Walk `maze` from `start` to `target`.
///
/// The returned path begins at `start`, ends at `target`, and each consecutive
/// pair is one exit apart.
#[instrument(skip_all, fields(start = %start, target = %target))]
pub fn find_path(
    maze: &MazeVariant,
    start: Coordinate,
    target: Coordinate,
) -> Result<Vec<Coordinate>, SolveError> {
    for coordinate in [start, target] {
        if !maze.contains(coordinate) {
            return Err(SolveError::OutOfBounds {
                coordinate,
                columns: maze.columns(),
                rows: maze.rows(),
            });
        }
    }

    let mut state = TraversalState::new(start, target);
    let mut backtracks = 0usize;
    while !state.is_complete() {
        if let Step::Backtracked { .. } = state.step(maze)? {
            backtracks += 1;
        }
    }
    debug!(at = %state.current(), len = state.path().len(), backtracks, "path found");
    Ok(state.into_path())
}
