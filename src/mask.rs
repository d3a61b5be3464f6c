// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Masks restrict the part of the grid the generator may carve into.

use crate::error::MazeGenerationError;
use crate::grid::GridIndex;
use std::iter::Peekable;
use std::str::Chars;

/// Boolean predicate over grid positions. `true` marks a traversable cell.
///
/// A mask is fixed once created. When passed to a [Maze](crate::Maze), cells that are
/// not allowed are never visited and keep all of their walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    allowed: Vec<bool>,
}

impl Mask {
    /// Create a mask from row-major data of length `width * height`.
    pub fn new(width: usize, height: usize, allowed: Vec<bool>) -> Result<Self, MazeGenerationError> {
        if width == 0 || height == 0 {
            return Err(MazeGenerationError::InvalidDimensions);
        }
        if width.checked_mul(height) != Some(allowed.len()) {
            return Err(MazeGenerationError::MaskNotRectangular);
        }
        Ok(Self {
            width,
            height,
            allowed,
        })
    }

    /// Create a mask from rows, i.e. `rows[y][x]`. All rows must have the same length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, MazeGenerationError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != width) {
            return Err(MazeGenerationError::MaskNotRectangular);
        }
        let allowed = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        Self::new(width, height, allowed)
    }

    /// Create a mask by evaluating `f` for every position.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, MazeGenerationError>
    where
        F: FnMut(GridIndex) -> bool,
    {
        let mut allowed = Vec::with_capacity(width.saturating_mul(height));
        for y in 0..height {
            for x in 0..width {
                allowed.push(f(GridIndex::new(x as isize, y as isize)));
            }
        }
        Self::new(width, height, allowed)
    }

    /// Read a mask from a plain (`P1`) PBM bitmap, one pixel per cell.
    ///
    /// Black pixels (`1`) are forbidden, white pixels (`0`) are traversable. This is the
    /// format written by [Raster::to_pbm](crate::Raster::to_pbm), so any black/white
    /// drawing exported as plain PBM can serve as a mask.
    pub fn from_pbm(data: &str) -> Result<Self, MazeGenerationError> {
        let mut tokens = PbmTokens::new(data);

        match tokens.word() {
            Some(ref magic) if magic == "P1" => {}
            other => return Err(invalid(format!("expected magic P1, found {:?}", other))),
        }
        let width = tokens.number("width")?;
        let height = tokens.number("height")?;
        let len = width
            .checked_mul(height)
            .ok_or_else(|| invalid(format!("{}x{} is too large", width, height)))?;

        // the header is untrusted, every pixel takes at least one byte of input
        let mut allowed = Vec::with_capacity(len.min(data.len()));
        for i in 0..len {
            match tokens.pixel() {
                Some('0') => allowed.push(true),
                Some('1') => allowed.push(false),
                Some(c) => return Err(invalid(format!("unexpected pixel value {:?}", c))),
                None => return Err(invalid(format!("expected {} pixels, found {}", len, i))),
            }
        }
        if tokens.pixel().is_some() {
            return Err(invalid(format!("more than {} pixels", len)));
        }

        let mask = Self::new(width, height, allowed)?;
        log::debug!(
            "read {}x{} mask with {} allowed cells",
            width,
            height,
            mask.allowed_count()
        );
        Ok(mask)
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `index` is traversable. Positions outside of the mask are not.
    pub fn allowed(&self, index: GridIndex) -> bool {
        if index.x < 0 || index.y < 0 {
            return false;
        }
        let (x, y) = (index.x as usize, index.y as usize);
        x < self.width && y < self.height && self.allowed[y * self.width + x]
    }

    /// Number of traversable cells.
    pub fn allowed_count(&self) -> usize {
        self.allowed.iter().filter(|&&a| a).count()
    }
}

fn invalid(reason: String) -> MazeGenerationError {
    MazeGenerationError::InvalidMaskImage(reason)
}

/// Splits plain PBM text into header words and single pixel characters.
struct PbmTokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> PbmTokens<'a> {
    fn new(data: &'a str) -> Self {
        Self {
            chars: data.chars().peekable(),
        }
    }

    fn skip_blank(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '#' {
                // comments run until the end of the line
                while let Some(c) = self.chars.next() {
                    if c == '\n' {
                        break;
                    }
                }
            } else if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn word(&mut self) -> Option<String> {
        self.skip_blank();
        let mut word = String::new();
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() || c == '#' {
                break;
            }
            word.push(c);
            self.chars.next();
        }
        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }

    fn number(&mut self, what: &str) -> Result<usize, MazeGenerationError> {
        let word = self
            .word()
            .ok_or_else(|| invalid(format!("missing {}", what)))?;
        word.parse()
            .map_err(|_| invalid(format!("{} {:?} is not a number", what, word)))
    }

    fn pixel(&mut self) -> Option<char> {
        self.skip_blank();
        self.chars.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let mask = Mask::from_rows(&[[true, true, true], [true, false, true]]).unwrap();
        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        assert_eq!(mask.allowed(GridIndex::new(1, 0)), true);
        assert_eq!(mask.allowed(GridIndex::new(1, 1)), false);
        assert_eq!(mask.allowed_count(), 5);
    }

    #[test]
    fn test_invalid_shapes() {
        let ragged: Vec<Vec<bool>> = vec![vec![true, true], vec![true]];
        assert_eq!(Mask::from_rows(&ragged), Err(MazeGenerationError::MaskNotRectangular));

        let empty: Vec<Vec<bool>> = Vec::new();
        assert_eq!(Mask::from_rows(&empty), Err(MazeGenerationError::InvalidDimensions));

        assert_eq!(
            Mask::new(2, 2, vec![true; 3]),
            Err(MazeGenerationError::MaskNotRectangular)
        );
        assert_eq!(Mask::new(0, 2, Vec::new()), Err(MazeGenerationError::InvalidDimensions));
    }

    #[test]
    fn test_out_of_bounds_is_disallowed() {
        let mask = Mask::from_fn(2, 2, |_| true).unwrap();
        assert_eq!(mask.allowed(GridIndex::new(-1, 0)), false);
        assert_eq!(mask.allowed(GridIndex::new(0, 2)), false);
        assert_eq!(mask.allowed(GridIndex::new(2, 0)), false);
        assert_eq!(mask.allowed(GridIndex::new(1, 1)), true);
    }

    #[test]
    fn test_from_fn() {
        let mask = Mask::from_fn(4, 3, |i| i.x != i.y).unwrap();
        assert_eq!(mask.allowed_count(), 12 - 3);
        assert_eq!(mask.allowed(GridIndex::new(2, 2)), false);
        assert_eq!(mask.allowed(GridIndex::new(3, 2)), true);
    }

    #[test]
    fn test_pbm() {
        let pbm = "P1\n# ring\n3 3\n0 0 0\n0 1 0\n0 0 0\n";
        let mask = Mask::from_pbm(pbm).unwrap();
        let expected = Mask::from_rows(&[
            [true, true, true],
            [true, false, true],
            [true, true, true],
        ])
        .unwrap();
        assert_eq!(mask, expected);

        // pixels do not need separators
        let packed = Mask::from_pbm("P1 3 3 000010000").unwrap();
        assert_eq!(packed, expected);
    }

    #[test]
    fn test_invalid_pbm() {
        let errors = [
            "P4\n1 1\n0",
            "P1\n1",
            "P1\nx 1\n0",
            "P1\n2 1\n0",
            "P1\n2 1\n0 2",
            "P1\n1 1\n0 0",
        ];
        for data in errors.iter() {
            match Mask::from_pbm(data) {
                Err(MazeGenerationError::InvalidMaskImage(_)) => {}
                other => panic!("{:?} should be rejected, got {:?}", data, other),
            }
        }
        assert_eq!(Mask::from_pbm("P1\n0 3\n"), Err(MazeGenerationError::InvalidDimensions));
    }

    #[test]
    fn test_oversized_pbm_header() {
        let headers = [
            "P1\n4000000000 4000000000\n0",
            "P1\n100000 100000\n0 1 0",
            "P1\n18446744073709551615 2\n0",
        ];
        for data in headers.iter() {
            match Mask::from_pbm(data) {
                Err(MazeGenerationError::InvalidMaskImage(_)) => {}
                other => panic!("{:?} should be rejected, got {:?}", data, other),
            }
        }
    }
}
