// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::grid::GridIndex;
use thiserror::Error;

/// Error enum for maze generation
///
/// All of these are detected before a generation run starts; a run itself cannot fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeGenerationError {
    /// Width and height must both be at least 1
    #[error("maze dimensions must be at least 1x1")]
    InvalidDimensions,
    /// The mask does not cover exactly the requested grid
    #[error("mask dimensions {found:?} do not match the maze dimensions {expected:?}")]
    MaskDimensionMismatch {
        /// Requested (width, height)
        expected: (usize, usize),
        /// (width, height) of the supplied mask
        found: (usize, usize),
    },
    /// Mask rows have differing lengths
    #[error("mask rows must all have the same length")]
    MaskNotRectangular,
    /// Start index lies outside of the grid
    #[error("start {0} is outside of the maze")]
    StartOutOfBounds(GridIndex),
    /// Start index is forbidden by the mask
    #[error("start {0} is not allowed by the mask")]
    StartDisallowed(GridIndex),
    /// The maze has already been carved by an earlier run
    #[error("maze has already been generated from {0}")]
    AlreadyGenerated(GridIndex),
    /// Mask bitmap could not be read
    #[error("invalid mask image: {0}")]
    InvalidMaskImage(String),
    /// Cell size must be positive and wider than the walls
    #[error("cell size must be > 0 and larger than the wall width")]
    InvalidRenderOptions,
}
