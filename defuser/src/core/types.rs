//! Shared value types for maze solving.
//!
//! Coordinates use screen orientation: `x` grows rightward, `y` grows
//! downward, both 0-indexed from the top-left cell.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Grid position of a single maze cell.
///
/// Serialized as a `[x, y]` pair so catalog files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbor one step away in `direction`.
    ///
    /// Returns `None` only when the step would leave the non-negative
    /// quadrant; the upper grid bound is the maze's concern.
    pub fn step(self, direction: Direction) -> Option<Coordinate> {
        let (x, y) = match direction {
            Direction::Up => (Some(self.x), self.y.checked_sub(1)),
            Direction::Down => (Some(self.x), self.y.checked_add(1)),
            Direction::Left => (self.x.checked_sub(1), Some(self.y)),
            Direction::Right => (self.x.checked_add(1), Some(self.y)),
        };
        Some(Coordinate::new(x?, y?))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.x, coordinate.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate '{0}': expected X,Y or (X, Y)")]
pub struct ParseCoordinateError(pub String);

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Accepts `X,Y`, `X Y`, or `(X, Y)`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        static COORDINATE_RE: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^\(?\s*(\d+)\s*[,\s]\s*(\d+)\s*\)?$").unwrap()
        });

        let invalid = || ParseCoordinateError(raw.to_string());
        let caps = COORDINATE_RE.captures(raw.trim()).ok_or_else(invalid)?;
        let x = caps[1].parse().map_err(|_| invalid())?;
        let y = caps[2].parse().map_err(|_| invalid())?;
        Ok(Coordinate::new(x, y))
    }
}

/// Cardinal direction.
///
/// Doubles as a cell exit and as the instruction label read out to the
/// operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed order in which exits are tried during traversal.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Single-letter catalog encoding (`u`, `d`, `l`, `r`).
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'u',
            Direction::Down => 'd',
            Direction::Left => 'l',
            Direction::Right => 'r',
        }
    }

    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_and_tuple_forms() {
        assert_eq!("4,2".parse::<Coordinate>(), Ok(Coordinate::new(4, 2)));
        assert_eq!("(5, 0)".parse::<Coordinate>(), Ok(Coordinate::new(5, 0)));
        assert_eq!(" 3 5 ".parse::<Coordinate>(), Ok(Coordinate::new(3, 5)));
    }

    #[test]
    fn parse_rejects_negative_and_garbage() {
        assert!("-1,2".parse::<Coordinate>().is_err());
        assert!("a,b".parse::<Coordinate>().is_err());
        assert!("1,2,3".parse::<Coordinate>().is_err());
    }

    #[test]
    fn step_stops_at_origin_edges() {
        let origin = Coordinate::new(0, 0);
        assert_eq!(origin.step(Direction::Up), None);
        assert_eq!(origin.step(Direction::Left), None);
        assert_eq!(origin.step(Direction::Down), Some(Coordinate::new(0, 1)));
        assert_eq!(origin.step(Direction::Right), Some(Coordinate::new(1, 0)));
    }

    #[test]
    fn coordinate_serializes_as_pair() {
        let json = serde_json::to_string(&Coordinate::new(4, 2)).expect("serialize");
        assert_eq!(json, "[4,2]");
    }

    #[test]
    fn letters_map_back_to_directions() {
        for direction in Direction::PRIORITY {
            assert_eq!(Direction::from_letter(direction.letter()), Some(direction));
            assert_eq!(direction.opposite().opposite(), direction);
        }
        assert_eq!(Direction::from_letter('x'), None);
    }
}
