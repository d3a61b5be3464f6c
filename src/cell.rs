// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::grid::{Direction, ALL_DIRS};

/// State of a single grid position.
///
/// A fresh cell is unvisited and walled on all four sides. Walls can only be removed
/// and the visited flag can only be set, never reverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    visited: bool,
    walls: [bool; 4],
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            visited: false,
            walls: [true; 4],
        }
    }
}

impl Cell {
    /// Whether the generator has entered this cell.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Whether the wall on side `direction` is still standing.
    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.slot()]
    }

    /// Wall flags in N, E, S, W order.
    pub fn walls(&self) -> [bool; 4] {
        self.walls
    }

    /// Number of walls still standing.
    pub fn wall_count(&self) -> usize {
        ALL_DIRS.iter().filter(|&&dir| self.has_wall(dir)).count()
    }

    /// Clear the wall on side `direction`. Clearing an open side does nothing.
    pub fn remove_wall(&mut self, direction: Direction) {
        self.walls[direction.slot()] = false;
    }

    /// Mark the cell as visited. Does nothing if it already is.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_cell() {
        let cell = Cell::default();
        assert_eq!(cell.is_visited(), false);
        assert_eq!(cell.walls(), [true; 4]);
        assert_eq!(cell.wall_count(), 4);
    }

    #[test]
    fn test_remove_wall_is_idempotent() {
        let mut cell = Cell::default();
        cell.remove_wall(Direction::East);
        let once = cell;
        cell.remove_wall(Direction::East);
        assert_eq!(cell, once);
        assert_eq!(cell.walls(), [true, false, true, true]);
        assert_eq!(cell.has_wall(Direction::East), false);
        assert_eq!(cell.wall_count(), 3);
    }

    #[test]
    fn test_mark_visited() {
        let mut cell = Cell::default();
        cell.mark_visited();
        cell.mark_visited();
        assert!(cell.is_visited());
        assert_eq!(cell.wall_count(), 4);
    }
}
