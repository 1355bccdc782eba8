//! Grid coordinates and movement directions for Wumpus World.

use serde::{Deserialize, Serialize};

/// Side length of the square grid.
pub const GRID_SIZE: usize = 8;

/// A grid cell, serialized as a two-element `[row, col]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord(
    /// Row index.
    pub usize,
    /// Column index.
    pub usize,
);

impl Coord {
    /// Row index.
    pub fn row(self) -> usize {
        self.0
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.1
    }

    /// The neighboring cell in `direction`, or `None` at the grid edge.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let Coord(row, col) = self;
        match direction {
            Direction::Up if row > 0 => Some(Coord(row - 1, col)),
            Direction::Down if row < GRID_SIZE - 1 => Some(Coord(row + 1, col)),
            Direction::Left if col > 0 => Some(Coord(row, col - 1)),
            Direction::Right if col < GRID_SIZE - 1 => Some(Coord(row, col + 1)),
            _ => None,
        }
    }

    /// Cells at Manhattan distance exactly 1, clipped to the grid.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        use strum::IntoEnumIterator;
        Direction::iter().filter_map(move |d| self.step(d))
    }

    /// Walks from this cell to the grid edge in `direction`, excluding the
    /// starting cell. This is the arrow's flight path.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Coord> {
        std::iter::successors(self.step(direction), move |c| c.step(direction))
    }
}

/// A movement or shooting direction.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stops_at_edges() {
        assert_eq!(Coord(0, 0).step(Direction::Up), None);
        assert_eq!(Coord(0, 0).step(Direction::Left), None);
        assert_eq!(Coord(7, 7).step(Direction::Down), None);
        assert_eq!(Coord(7, 7).step(Direction::Right), None);
        assert_eq!(Coord(3, 3).step(Direction::Up), Some(Coord(2, 3)));
        assert_eq!(Coord(3, 3).step(Direction::Right), Some(Coord(3, 4)));
    }

    #[test]
    fn test_neighbors_are_manhattan_adjacent() {
        let center = Coord(4, 4);
        let neighbors: Vec<_> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 4);
        for n in neighbors {
            let dist = center.row().abs_diff(n.row()) + center.col().abs_diff(n.col());
            assert_eq!(dist, 1);
        }
        assert_eq!(Coord(0, 0).neighbors().count(), 2);
    }

    #[test]
    fn test_ray_spans_to_edge() {
        let cells: Vec<_> = Coord(2, 5).ray(Direction::Left).collect();
        assert_eq!(
            cells,
            vec![Coord(2, 4), Coord(2, 3), Coord(2, 2), Coord(2, 1), Coord(2, 0)]
        );
        assert_eq!(Coord(0, 0).ray(Direction::Up).count(), 0);
    }

    #[test]
    fn test_coord_serializes_as_pair() {
        let json = serde_json::to_value(Coord(2, 5)).unwrap();
        assert_eq!(json, serde_json::json!([2, 5]));
    }
}
