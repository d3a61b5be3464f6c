// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::cell::Cell;
use crate::error::MazeGenerationError;
use crate::generator::Generator;
use crate::grid::{GridIndex, ALL_DIRS};
use crate::mask::Mask;
use crate::render::{render, RenderOptions};
use rand::Rng;
use std::ops::Index;
use std::slice::Chunks;

/// Maze structure that contains all maze data
///
/// A maze is a dense grid of [Cell]s, stored row-major, plus an optional [Mask].
/// After creation, call [generate](#method.generate) or
/// [generate_from](#method.generate_from) to carve the passages.
/// Cells can be accessed by indexing with a [GridIndex] (e.g. ```maze[GridIndex::new(x, y)]```),
/// via [cells](#method.cells) or row by row via [rows](#method.rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    mask: Option<Mask>,
    pub(crate) start: Option<GridIndex>,
}

impl Index<GridIndex> for Maze {
    type Output = Cell;

    fn index(&self, index: GridIndex) -> &Self::Output {
        &self.cells[self.offset(index)]
    }
}

impl Maze {
    /// Construct an unmasked maze. Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeGenerationError> {
        if width == 0 || height == 0 {
            return Err(MazeGenerationError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(MazeGenerationError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            mask: None,
            start: None,
        })
    }

    /// Construct a maze that takes its dimensions from `mask`.
    pub fn with_mask(mask: Mask) -> Self {
        Self {
            width: mask.width(),
            height: mask.height(),
            cells: vec![Cell::default(); mask.width() * mask.height()],
            mask: Some(mask),
            start: None,
        }
    }

    /// Construct a masked maze with explicit dimensions, which have to match the mask's.
    pub fn new_masked(width: usize, height: usize, mask: Mask) -> Result<Self, MazeGenerationError> {
        if width == 0 || height == 0 {
            return Err(MazeGenerationError::InvalidDimensions);
        }
        if (mask.width(), mask.height()) != (width, height) {
            return Err(MazeGenerationError::MaskDimensionMismatch {
                expected: (width, height),
                found: (mask.width(), mask.height()),
            });
        }
        Ok(Self::with_mask(mask))
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The mask this maze was created with, if any.
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Where the generation run started. `None` until the maze has been generated.
    pub fn start(&self) -> Option<GridIndex> {
        self.start
    }

    /// Whether `index` lies on the grid.
    pub fn contains(&self, index: GridIndex) -> bool {
        index.x >= 0
            && index.y >= 0
            && (index.x as usize) < self.width
            && (index.y as usize) < self.height
    }

    fn offset(&self, index: GridIndex) -> usize {
        assert!(
            self.contains(index),
            "grid index {} is outside of the {}x{} maze",
            index,
            self.width,
            self.height
        );
        index.y as usize * self.width + index.x as usize
    }

    /// The cell at `index`.
    ///
    /// # Panics
    /// If `index` is outside of the maze.
    pub fn cell(&self, index: GridIndex) -> &Cell {
        &self[index]
    }

    /// Whether the mask lets the generator enter `index`. Always true without a mask.
    pub fn is_allowed(&self, index: GridIndex) -> bool {
        match &self.mask {
            Some(mask) => mask.allowed(index),
            None => true,
        }
    }

    /// The up to four grid-adjacent positions of `index`, in N, E, S, W order.
    pub fn neighbors(&self, index: GridIndex) -> impl Iterator<Item = GridIndex> + '_ {
        ALL_DIRS
            .into_iter()
            .map(move |dir| index + dir)
            .filter(move |&n| self.contains(n))
    }

    /// Neighbors of `index` which are unvisited and allowed by the mask.
    pub fn unvisited_reachable_neighbors(&self, index: GridIndex) -> Vec<GridIndex> {
        self.neighbors(index)
            .filter(|&n| !self[n].is_visited() && self.is_allowed(n))
            .collect()
    }

    pub(crate) fn mark_visited(&mut self, index: GridIndex) {
        assert!(self.is_allowed(index), "cannot visit {}: cell is masked out", index);
        let offset = self.offset(index);
        self.cells[offset].mark_visited();
    }

    /// Move from `a` into its neighbor `b`: mark `b` visited and remove the pair of walls
    /// between both cells. Connecting an already connected pair changes nothing.
    ///
    /// # Panics
    /// If `a` and `b` are not grid-adjacent, outside of the maze or masked out.
    pub fn connect(&mut self, a: GridIndex, b: GridIndex) {
        let dir = match a.direction_to(b) {
            Some(dir) => dir,
            None => panic!("cannot connect {} and {}: cells are not adjacent", a, b),
        };
        assert!(
            self.is_allowed(a) && self.is_allowed(b),
            "cannot connect {} and {}: masked cells must stay walled",
            a,
            b
        );
        let (from, to) = (self.offset(a), self.offset(b));
        self.cells[to].mark_visited();
        self.cells[from].remove_wall(dir);
        self.cells[to].remove_wall(dir.opposite());
    }

    /// Iterate over all cells row by row, together with their index.
    pub fn cells(&self) -> impl Iterator<Item = (GridIndex, &Cell)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let index = GridIndex::new((i % width) as isize, (i / width) as isize);
            (index, cell)
        })
    }

    /// Iterate over the rows of the maze, top to bottom.
    pub fn rows(&self) -> Chunks<'_, Cell> {
        self.cells.chunks(self.width)
    }

    /// Number of visited cells.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// Number of cleared wall-pairs, i.e. passages between two cells.
    pub fn passage_count(&self) -> usize {
        use crate::grid::Direction::{East, South};

        // every passage is counted once, from its west or north cell
        self.cells()
            .map(|(index, cell)| {
                [East, South]
                    .iter()
                    .filter(|&&dir| self.contains(index + dir) && !cell.has_wall(dir))
                    .count()
            })
            .sum()
    }

    /// Generate the maze data starting at the top left cell.
    pub fn generate<R>(self, rng: &mut R) -> Result<Self, MazeGenerationError>
    where
        R: Rng + ?Sized,
    {
        self.generate_from(GridIndex::ORIGIN, rng)
    }

    /// Generate the maze data starting at `start`.
    ///
    /// Only cells reachable from `start` through allowed cells are carved. Fails if `start`
    /// is outside of the maze or forbidden by the mask.
    pub fn generate_from<R>(mut self, start: GridIndex, rng: &mut R) -> Result<Self, MazeGenerationError>
    where
        R: Rng + ?Sized,
    {
        Generator::new(&mut self, start)?.run(rng);
        Ok(self)
    }

    /// Render with default [RenderOptions] and return plain PBM image data.
    pub fn to_pbm(&self) -> Result<String, MazeGenerationError> {
        Ok(render(self, &RenderOptions::default())?.to_pbm())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;

    fn idx(x: isize, y: isize) -> GridIndex {
        GridIndex::new(x, y)
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(Maze::new(0, 7), Err(MazeGenerationError::InvalidDimensions));
        assert_eq!(Maze::new(9, 0), Err(MazeGenerationError::InvalidDimensions));

        let (w, h) = (7, 5);
        let maze = Maze::new(w, h).unwrap();
        assert_eq!(maze.width(), w);
        assert_eq!(maze.height(), h);
        assert_eq!(maze.cells().count(), w * h);
        assert_eq!(maze.rows().count(), h);
        assert!(maze.rows().all(|row| row.len() == w));
        assert!(maze.cells().all(|(_, cell)| *cell == Cell::default()));
        assert_eq!(maze.start(), None);
    }

    #[test]
    fn test_mask_dimensions() {
        let mask = Mask::from_fn(4, 3, |_| true).unwrap();
        assert_eq!(
            Maze::new_masked(3, 4, mask.clone()),
            Err(MazeGenerationError::MaskDimensionMismatch {
                expected: (3, 4),
                found: (4, 3)
            })
        );
        let maze = Maze::new_masked(4, 3, mask.clone()).unwrap();
        assert_eq!(maze, Maze::with_mask(mask));
        assert_eq!((maze.width(), maze.height()), (4, 3));
    }

    #[test]
    fn test_cells_are_row_major() {
        let maze = Maze::new(3, 2).unwrap();
        let indices: Vec<GridIndex> = maze.cells().map(|(i, _)| i).collect();
        assert_eq!(
            indices,
            vec![idx(0, 0), idx(1, 0), idx(2, 0), idx(0, 1), idx(1, 1), idx(2, 1)]
        );
    }

    #[test]
    fn test_neighbors() {
        let maze = Maze::new(3, 3).unwrap();
        let corner: Vec<_> = maze.neighbors(idx(0, 0)).collect();
        assert_eq!(corner, vec![idx(1, 0), idx(0, 1)]);

        let center: Vec<_> = maze.neighbors(idx(1, 1)).collect();
        assert_eq!(center, vec![idx(1, 0), idx(2, 1), idx(1, 2), idx(0, 1)]);

        let single = Maze::new(1, 1).unwrap();
        assert_eq!(single.neighbors(idx(0, 0)).count(), 0);
    }

    #[test]
    fn test_unvisited_reachable_neighbors() {
        let mask = Mask::from_rows(&[[true, false], [true, true]]).unwrap();
        let mut maze = Maze::with_mask(mask);
        assert_eq!(maze.unvisited_reachable_neighbors(idx(0, 0)), vec![idx(0, 1)]);
        assert_eq!(maze.is_allowed(idx(1, 0)), false);

        maze.mark_visited(idx(0, 1));
        assert!(maze.unvisited_reachable_neighbors(idx(0, 0)).is_empty());
        assert_eq!(
            maze.unvisited_reachable_neighbors(idx(0, 1)),
            vec![idx(0, 0), idx(1, 1)]
        );
    }

    #[test]
    fn test_connect() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.connect(idx(0, 1), idx(0, 0));
        assert!(maze[idx(0, 0)].is_visited());
        assert_eq!(maze[idx(0, 1)].is_visited(), false);
        assert_eq!(maze[idx(0, 1)].has_wall(Direction::North), false);
        assert_eq!(maze[idx(0, 0)].has_wall(Direction::South), false);
        assert_eq!(maze[idx(0, 0)].wall_count(), 3);
        assert_eq!(maze.passage_count(), 1);

        let before = maze.clone();
        maze.connect(idx(0, 1), idx(0, 0));
        assert_eq!(maze, before);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_connect_rejects_distant_cells() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.connect(idx(0, 0), idx(2, 0));
    }

    #[test]
    #[should_panic(expected = "masked cells must stay walled")]
    fn test_connect_rejects_masked_cells() {
        let mask = Mask::from_rows(&[[true, false]]).unwrap();
        let mut maze = Maze::with_mask(mask);
        maze.connect(idx(0, 0), idx(1, 0));
    }

    #[test]
    #[should_panic(expected = "cell is masked out")]
    fn test_masked_cells_cannot_be_visited() {
        let mask = Mask::from_rows(&[[true, false]]).unwrap();
        let mut maze = Maze::with_mask(mask);
        maze.mark_visited(idx(1, 0));
    }

    #[test]
    #[should_panic(expected = "outside of the 2x2 maze")]
    fn test_out_of_bounds_access() {
        let maze = Maze::new(2, 2).unwrap();
        let _ = maze.cell(idx(2, 0));
    }
}
