// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::error::MazeGenerationError;
use crate::grid::GridIndex;
use crate::mask::Mask;
use crate::maze::Maze;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Build and generate a maze in one go.
///
/// Without a `start` the run begins at the top left cell. With a `mask`, its dimensions
/// must equal `width` and `height`. The result only depends on the arguments and the
/// state of `rng`.
pub fn build_maze<R>(
    width: usize,
    height: usize,
    start: Option<GridIndex>,
    mask: Option<Mask>,
    rng: &mut R,
) -> Result<Maze, MazeGenerationError>
where
    R: Rng + ?Sized,
{
    let maze = match mask {
        Some(mask) => Maze::new_masked(width, height, mask)?,
        None => Maze::new(width, height)?,
    };
    maze.generate_from(start.unwrap_or(GridIndex::ORIGIN), rng)
}

/// Everything needed to generate a maze, including an optional seed.
///
/// ```rust
/// use masked_maze::{GridIndex, MazeConfig};
///
/// fn main() -> Result<(), masked_maze::MazeGenerationError> {
///     let maze = MazeConfig::new(40, 20)
///         .start(GridIndex::new(20, 10))
///         .seed(42)
///         .build()?;
///     assert_eq!(maze.visited_count(), 40 * 20);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    width: usize,
    height: usize,
    start: Option<GridIndex>,
    mask: Option<Mask>,
    seed: Option<u64>,
}

impl MazeConfig {
    /// Unmasked maze of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            start: None,
            mask: None,
            seed: None,
        }
    }

    /// Masked maze with the dimensions of `mask`.
    pub fn from_mask(mask: Mask) -> Self {
        Self {
            width: mask.width(),
            height: mask.height(),
            start: None,
            mask: Some(mask),
            seed: None,
        }
    }

    /// Start generation at `start` instead of the top left cell.
    pub fn start(mut self, start: GridIndex) -> Self {
        self.start = Some(start);
        self
    }

    /// Restrict generation to `mask`. Its dimensions have to match.
    pub fn mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    /// Seed the random number generator, making the result reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generate the maze.
    pub fn build(self) -> Result<Maze, MazeGenerationError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        build_maze(self.width, self.height, self.start, self.mask, &mut rng)
    }
}
