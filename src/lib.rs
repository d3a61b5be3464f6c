#![warn(missing_docs)]
// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Perfect maze generation on rectangular grids, optionally restricted by a mask
//!
//! A maze is a grid of cells, each surrounded by four walls. Generation uses randomized
//! depth-first backtracking: it removes exactly the walls needed to connect every
//! reachable cell, so there is exactly one path between any two cells and no loops.
//!
//! ### Masks
//!
//! A [Mask] marks cells the generator must not enter. Masked cells stay unvisited and
//! keep all of their walls, so a renderer draws them as solid blocks. This way the maze
//! can fill arbitrary shapes, e.g. the inside of letters drawn into a black and white
//! image. Parts of the mask that are not connected to the start cell are left alone.
//!
//! ### Injectable randomness
//!
//! You provide your own random generator. Thus, you are in full control
//! of the seed and the internal state of the randomness. The same seed, size, start and
//! mask always produce the same maze.
//!
//! # Usage
//!
//! Add this to your Cargo.toml
//!
//! ```toml
//! [dependencies]
//! masked-maze = "0.1"
//! ```
//!
//! # Example: Simple maze generation
//!
//! ```rust
//! use masked_maze::{GridIndex, Maze};
//! use rand;
//!
//! fn main() -> Result<(), masked_maze::MazeGenerationError> {
//!     let mut rng = rand::thread_rng();
//!
//!     // The dimensions can be anything >= 1.
//!     let maze = Maze::new(64, 32)?.generate(&mut rng)?;
//!
//!     // The generated maze data can be accessed via index:
//!     for y in 0..maze.height() as isize {
//!         for x in 0..maze.width() as isize {
//!             println!("{:?}", maze[GridIndex::new(x, y)].walls());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Example: Maze inside a mask image
//!
//! ```rust
//! use masked_maze::{render, Mask, MazeConfig, RenderOptions};
//! use std::fs;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Plain PBM, black pixels are forbidden.
//!     let mask = Mask::from_pbm(&fs::read_to_string("mask.pbm")?)?;
//!     let maze = MazeConfig::from_mask(mask).seed(123123123).build()?;
//!
//!     let options = RenderOptions { cell_size: 5, wall_width: 1 };
//!     let image = render(&maze, &options)?.scale(4)?;
//!     fs::write("maze.pbm", image.to_pbm())?;
//!     Ok(())
//! }
//! ```
//!
//! # Example: Use a different random number generator with a seed
//!
//! Using the [xoshiro](https://crates.io/crates/rand_xoshiro) generator:
//!
//! ```rust
//! use masked_maze::{build_maze, GridIndex};
//! use rand_xoshiro::rand_core::SeedableRng;
//! use rand_xoshiro::Xoshiro256Plus;
//!
//! fn main() {
//!     let mut rng = Xoshiro256Plus::seed_from_u64(123123123);
//!     let maze = build_maze(4095, 4095, Some(GridIndex::new(2047, 2047)), None, &mut rng).unwrap();
//! }
//! ```

mod cell;
mod config;
mod error;
mod generator;
mod grid;
mod mask;
mod maze;
mod render;

pub use cell::Cell;
pub use config::{build_maze, MazeConfig};
pub use error::MazeGenerationError;
pub use generator::{Generator, Transition};
pub use grid::{Direction, GridIndex, Offset, ALL_DIRS};
pub use mask::Mask;
pub use maze::Maze;
pub use render::{render, Raster, RenderOptions};
