// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Grid coordinates and the four cardinal directions.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// One of the four cardinal directions. North points towards `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards smaller `y`.
    North,
    /// Towards larger `x`.
    East,
    /// Towards larger `y`.
    South,
    /// Towards smaller `x`.
    West,
}

/// All directions in stencil order.
pub const ALL_DIRS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// Unit offset of a single step in this direction.
    pub fn offset(self) -> Offset {
        match self {
            Direction::North => Offset { dx: 0, dy: -1 },
            Direction::East => Offset { dx: 1, dy: 0 },
            Direction::South => Offset { dx: 0, dy: 1 },
            Direction::West => Offset { dx: -1, dy: 0 },
        }
    }

    /// The direction whose unit offset is `offset`, or `None` if `offset` is not a unit step.
    pub fn from_offset(offset: Offset) -> Option<Direction> {
        match (offset.dx, offset.dy) {
            (0, -1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, 1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// The direction pointing the other way (N↔S, E↔W).
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// Raw difference between two grid positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Horizontal component.
    pub dx: isize,
    /// Vertical component.
    pub dy: isize,
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Output {
            dx: -self.dx,
            dy: -self.dy,
        }
    }
}

/// Position of a cell on the grid.
///
/// Indices are plain lookup keys. They may point outside of a maze (e.g. after adding
/// an offset at the border); [Maze::contains](crate::Maze::contains) tells them apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridIndex {
    /// Column, `0..width` when in bounds.
    pub x: isize,
    /// Row, `0..height` when in bounds.
    pub y: isize,
}

impl GridIndex {
    /// The top left cell, default start of a generation run.
    pub const ORIGIN: GridIndex = GridIndex { x: 0, y: 0 };

    /// Create an index from its components.
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Direction of the step from `self` to `other`, if the two are grid-adjacent.
    pub fn direction_to(self, other: GridIndex) -> Option<Direction> {
        Direction::from_offset(other - self)
    }
}

impl From<(isize, isize)> for GridIndex {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add<Offset> for GridIndex {
    type Output = Self;

    fn add(self, rhs: Offset) -> Self::Output {
        Self::Output {
            x: self.x + rhs.dx,
            y: self.y + rhs.dy,
        }
    }
}

impl Add<Direction> for GridIndex {
    type Output = Self;

    fn add(self, rhs: Direction) -> Self::Output {
        self + rhs.offset()
    }
}

impl Sub for GridIndex {
    type Output = Offset;

    fn sub(self, rhs: Self) -> Self::Output {
        Offset {
            dx: self.x - rhs.x,
            dy: self.y - rhs.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_round_trip() {
        for dir in ALL_DIRS.iter().copied() {
            assert_eq!(Direction::from_offset(dir.offset()), Some(dir));
            assert_eq!(dir.opposite().offset(), -dir.offset());
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_non_unit_offsets() {
        assert_eq!(Direction::from_offset(Offset { dx: 0, dy: 0 }), None);
        assert_eq!(Direction::from_offset(Offset { dx: 1, dy: 1 }), None);
        assert_eq!(Direction::from_offset(Offset { dx: 0, dy: 2 }), None);
    }

    #[test]
    fn test_index_arithmetic() {
        let a = GridIndex::new(3, 4);
        assert_eq!(a + Direction::North, GridIndex::new(3, 3));
        assert_eq!(a + Direction::West, GridIndex::new(2, 4));
        assert_eq!(GridIndex::new(5, 1) - a, Offset { dx: 2, dy: -3 });
        assert_eq!(a + (GridIndex::new(5, 1) - a), GridIndex::new(5, 1));
    }

    #[test]
    fn test_direction_to() {
        let a = GridIndex::new(1, 1);
        assert_eq!(a.direction_to(GridIndex::new(1, 2)), Some(Direction::South));
        assert_eq!(GridIndex::new(1, 2).direction_to(a), Some(Direction::North));
        assert_eq!(a.direction_to(GridIndex::new(2, 2)), None);
        assert_eq!(a.direction_to(a), None);
    }
}
