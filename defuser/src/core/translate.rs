//! Conversion between coordinate paths and operator instructions.

use crate::core::types::{Coordinate, Direction};

/// Turn a walked path into one instruction per consecutive pair.
///
/// Vertical movement wins over horizontal; a pair with neither (which a walk
/// never produces) reads as `right`. An empty or single-cell path yields no
/// instructions.
pub fn translate(path: &[Coordinate]) -> Vec<Direction> {
    path.windows(2)
        .map(|pair| {
            let (current, next) = (pair[0], pair[1]);
            if next.y < current.y {
                Direction::Up
            } else if next.y > current.y {
                Direction::Down
            } else if next.x < current.x {
                Direction::Left
            } else {
                Direction::Right
            }
        })
        .collect()
}

/// Apply `instructions` one step at a time from `start`.
///
/// Returns `None` if a step would leave the non-negative quadrant.
pub fn replay(start: Coordinate, instructions: &[Direction]) -> Option<Coordinate> {
    instructions
        .iter()
        .try_fold(start, |position, direction| position.step(*direction))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn single_cell_path_has_no_instructions() {
        assert!(translate(&[c(2, 2)]).is_empty());
        assert!(translate(&[]).is_empty());
    }

    #[test]
    fn each_axis_step_maps_to_its_label() {
        let path = [c(1, 1), c(1, 0), c(1, 1), c(0, 1), c(1, 1)];
        let labels: Vec<&str> = translate(&path).into_iter().map(Direction::label).collect();
        assert_eq!(labels, vec!["up", "down", "left", "right"]);
    }

    #[test]
    fn replay_returns_to_path_end() {
        let path = [c(5, 0), c(4, 0), c(4, 1), c(3, 1)];
        let instructions = translate(&path);
        assert_eq!(replay(c(5, 0), &instructions), Some(c(3, 1)));
    }

    #[test]
    fn replay_off_the_top_edge_is_none() {
        assert_eq!(replay(c(0, 0), &[Direction::Up]), None);
    }
}
