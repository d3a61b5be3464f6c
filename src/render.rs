// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Black and white raster images of generated mazes.

use crate::error::MazeGenerationError;
use crate::grid::Direction;
use crate::maze::Maze;

/// Pixel sizes used by [render].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Distance between two neighboring walls in pixels. Must be > `wall_width`.
    pub cell_size: usize,
    /// Thickness of a wall in pixels.
    pub wall_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            cell_size: 5,
            wall_width: 1,
        }
    }
}

impl RenderOptions {
    fn validate(&self) -> Result<(), MazeGenerationError> {
        if self.cell_size == 0 || self.wall_width >= self.cell_size {
            return Err(MazeGenerationError::InvalidRenderOptions);
        }
        Ok(())
    }

    /// Pixel size of a maze with `cells` cells along one axis.
    fn span(&self, cells: usize) -> Result<usize, MazeGenerationError> {
        cells
            .checked_mul(self.cell_size)
            .and_then(|pixels| pixels.checked_add(self.wall_width))
            .ok_or(MazeGenerationError::InvalidRenderOptions)
    }
}

/// A black and white image, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    black: Vec<bool>,
}

impl Raster {
    fn new(width: usize, height: usize) -> Result<Self, MazeGenerationError> {
        let len = width
            .checked_mul(height)
            .ok_or(MazeGenerationError::InvalidRenderOptions)?;
        Ok(Self {
            width,
            height,
            black: vec![false; len],
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the pixel at (`x`, `y`) is black.
    pub fn is_black(&self, x: usize, y: usize) -> bool {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of range", x, y);
        self.black[y * self.width + x]
    }

    fn fill(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..y + height {
            let row = py * self.width;
            for px in x..x + width {
                self.black[row + px] = true;
            }
        }
    }

    /// Enlarge by an integer `factor` using nearest neighbor sampling.
    pub fn scale(&self, factor: usize) -> Result<Raster, MazeGenerationError> {
        if factor == 0 {
            return Err(MazeGenerationError::InvalidRenderOptions);
        }
        let (width, height) = match (self.width.checked_mul(factor), self.height.checked_mul(factor)) {
            (Some(width), Some(height)) => (width, height),
            _ => return Err(MazeGenerationError::InvalidRenderOptions),
        };
        let mut scaled = Raster::new(width, height)?;
        for y in 0..scaled.height {
            for x in 0..scaled.width {
                scaled.black[y * scaled.width + x] = self.black[(y / factor) * self.width + x / factor];
            }
        }
        Ok(scaled)
    }

    /// Generate plain pbm image data. Can be saved to disk.
    pub fn to_pbm(&self) -> String {
        let mut pbm = String::from("P1\n");
        pbm.push_str(&format!("{} {}\n", self.width, self.height));
        for row in self.black.chunks(self.width) {
            for &black in row {
                pbm.push_str(if black { "1 " } else { "0 " });
            }
            pbm.push('\n');
        }
        pbm
    }
}

/// Draw `maze` as a raster image.
///
/// Every standing wall becomes a black band along its cell edge. Cells the generator never
/// entered, whether masked out or unreachable, are filled solid. Fails if the options are
/// invalid or the image would be too large to address.
pub fn render(maze: &Maze, options: &RenderOptions) -> Result<Raster, MazeGenerationError> {
    options.validate()?;
    let mut raster = Raster::new(options.span(maze.width())?, options.span(maze.height())?)?;
    let RenderOptions {
        cell_size: cs,
        wall_width: ww,
    } = *options;
    let span = cs + ww;
    log::debug!(
        "rendering {}x{} maze to {}x{} pixels",
        maze.width(),
        maze.height(),
        raster.width,
        raster.height
    );

    for (index, cell) in maze.cells() {
        let (x, y) = (index.x as usize * cs, index.y as usize * cs);
        if !cell.is_visited() {
            raster.fill(x, y, span, span);
            continue;
        }
        if cell.has_wall(Direction::North) {
            raster.fill(x, y, span, ww);
        }
        if cell.has_wall(Direction::South) {
            raster.fill(x, y + cs, span, ww);
        }
        if cell.has_wall(Direction::West) {
            raster.fill(x, y, ww, span);
        }
        if cell.has_wall(Direction::East) {
            raster.fill(x + cs, y, ww, span);
        }
        // corner posts
        for &(px, py) in &[(x, y), (x + cs, y), (x, y + cs), (x + cs, y + cs)] {
            raster.fill(px, py, ww, ww);
        }
    }
    Ok(raster)
}
