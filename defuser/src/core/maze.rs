//! Maze layout types: per-cell exit sets and fixed-size grids.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::types::{Coordinate, Direction};

/// Set of exits usable from one cell.
///
/// Encoded in catalogs as a string over `u`, `d`, `l`, `r` (e.g. `"uld"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExitSet(u8);

impl ExitSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    fn bit(direction: Direction) -> u8 {
        match direction {
            Direction::Up => 0b0001,
            Direction::Down => 0b0010,
            Direction::Left => 0b0100,
            Direction::Right => 0b1000,
        }
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & Self::bit(direction) != 0
    }

    /// Add `direction`; returns false if it was already present.
    pub fn insert(&mut self, direction: Direction) -> bool {
        let had = self.contains(direction);
        self.0 |= Self::bit(direction);
        !had
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Exits in traversal priority order (up, down, left, right).
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::PRIORITY
            .into_iter()
            .filter(move |direction| self.contains(*direction))
    }
}

impl FromIterator<Direction> for ExitSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = ExitSet::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseExitsError {
    #[error("unknown exit letter '{letter}' in '{raw}' (expected u, d, l, r)")]
    UnknownLetter { raw: String, letter: char },
    #[error("duplicate exit letter '{letter}' in '{raw}'")]
    Duplicate { raw: String, letter: char },
}

impl FromStr for ExitSet {
    type Err = ParseExitsError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut set = ExitSet::empty();
        for letter in raw.chars() {
            let direction =
                Direction::from_letter(letter).ok_or_else(|| ParseExitsError::UnknownLetter {
                    raw: raw.to_string(),
                    letter,
                })?;
            if !set.insert(direction) {
                return Err(ParseExitsError::Duplicate {
                    raw: raw.to_string(),
                    letter,
                });
            }
        }
        Ok(set)
    }
}

impl TryFrom<String> for ExitSet {
    type Error = ParseExitsError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<ExitSet> for String {
    fn from(set: ExitSet) -> Self {
        set.to_string()
    }
}

impl fmt::Display for ExitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in self.iter() {
            write!(f, "{}", direction.letter())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MazeShapeError {
    #[error("maze has no rows")]
    Empty,
    #[error("maze row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// One complete maze layout: a rectangular grid of exit sets.
///
/// Cells are stored row-major and never change once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<ExitSet>>", into = "Vec<Vec<ExitSet>>")]
pub struct MazeVariant {
    columns: usize,
    rows: usize,
    cells: Vec<ExitSet>,
}

impl MazeVariant {
    /// Build a grid from rows of cells (top row first).
    pub fn from_rows(rows: Vec<Vec<ExitSet>>) -> Result<Self, MazeShapeError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        if columns == 0 {
            return Err(MazeShapeError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(MazeShapeError::Ragged {
                    row,
                    expected: columns,
                    found: cells.len(),
                });
            }
        }
        Ok(Self {
            columns,
            rows: rows.len(),
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.x < self.columns && coordinate.y < self.rows
    }

    /// Exits of the cell at `coordinate`, or `None` if it lies outside the grid.
    pub fn exits(&self, coordinate: Coordinate) -> Option<ExitSet> {
        if !self.contains(coordinate) {
            return None;
        }
        self.cells
            .get(coordinate.y * self.columns + coordinate.x)
            .copied()
    }

    /// Cell one step from `coordinate` in `direction`, if it lies inside the grid.
    ///
    /// Does not consult exits.
    pub fn neighbor(&self, coordinate: Coordinate, direction: Direction) -> Option<Coordinate> {
        coordinate
            .step(direction)
            .filter(|next| self.contains(*next))
    }

    /// All coordinates in row-major order.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.columns).map(move |x| Coordinate::new(x, y)))
    }
}

impl TryFrom<Vec<Vec<ExitSet>>> for MazeVariant {
    type Error = MazeShapeError;

    fn try_from(rows: Vec<Vec<ExitSet>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<MazeVariant> for Vec<Vec<ExitSet>> {
    fn from(maze: MazeVariant) -> Self {
        maze.cells
            .chunks(maze.columns)
            .map(<[ExitSet]>::to_vec)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::maze;

    #[test]
    fn exit_set_parses_in_any_order_and_prints_in_priority_order() {
        let set: ExitSet = "rlu".parse().expect("parse");
        assert_eq!(set.len(), 3);
        assert!(!set.contains(Direction::Down));
        assert_eq!(set.to_string(), "ulr");
    }

    #[test]
    fn exit_set_rejects_unknown_and_duplicate_letters() {
        assert_eq!(
            "ux".parse::<ExitSet>(),
            Err(ParseExitsError::UnknownLetter {
                raw: "ux".to_string(),
                letter: 'x'
            })
        );
        assert!(matches!(
            "uu".parse::<ExitSet>(),
            Err(ParseExitsError::Duplicate { letter: 'u', .. })
        ));
    }

    #[test]
    fn empty_string_is_walled_in_cell() {
        let set: ExitSet = "".parse().expect("parse");
        assert!(set.is_empty());
    }

    #[test]
    fn from_rows_rejects_ragged_grid() {
        let rows = vec![
            vec![ExitSet::empty(), ExitSet::empty()],
            vec![ExitSet::empty()],
        ];
        assert_eq!(
            MazeVariant::from_rows(rows),
            Err(MazeShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(MazeVariant::from_rows(Vec::new()), Err(MazeShapeError::Empty));
    }

    #[test]
    fn exits_and_neighbors_respect_grid_bounds() {
        let grid = maze(&[&["r", "ld"], &["", "u"]]);
        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(
            grid.exits(Coordinate::new(1, 0)).map(|set| set.to_string()),
            Some("dl".to_string())
        );
        assert_eq!(grid.exits(Coordinate::new(2, 0)), None);
        assert_eq!(grid.neighbor(Coordinate::new(1, 1), Direction::Right), None);
        assert_eq!(
            grid.neighbor(Coordinate::new(1, 1), Direction::Up),
            Some(Coordinate::new(1, 0))
        );
    }

    #[test]
    fn serializes_back_to_rows_of_strings() {
        let grid = maze(&[&["r", "l"]]);
        let json = serde_json::to_string(&grid).expect("serialize");
        assert_eq!(json, r#"[["r","l"]]"#);
    }
}
