// Copyright 2021 Daniel May
//
// Licensed under the Apache License, Version 2.0, <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Randomized depth-first backtracking.
//!
//! The generator walks from the start cell into a random unvisited, allowed neighbor,
//! carving through the wall between both cells, until it hits a dead end. It then walks
//! back along its own path until it finds a cell with unvisited neighbors again. Once it
//! is back at the start with nothing left to carve, every cell reachable from the start
//! has been visited exactly once and the passages form a spanning tree.

use crate::error::MazeGenerationError;
use crate::grid::GridIndex;
use crate::maze::Maze;
use rand::{prelude::SliceRandom, Rng};

/// Outcome of a single [Generator::step].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Carved a passage and moved into a new cell.
    Advanced {
        /// Cell the generator came from
        from: GridIndex,
        /// Newly visited cell
        to: GridIndex,
    },
    /// Hit a dead end and moved back to the previous cell on the path.
    Backtracked {
        /// Cell the generator is now at
        to: GridIndex,
    },
    /// Nothing left to carve.
    Done,
}

/// An in-progress generation run over a borrowed [Maze].
///
/// Most callers want [Maze::generate] instead. Driving the generator with
/// [step](#method.step) allows inspecting intermediate states or stopping between steps,
/// e.g. when a time budget runs out.
#[derive(Debug)]
pub struct Generator<'m> {
    maze: &'m mut Maze,
    stack: Vec<GridIndex>,
    current: GridIndex,
    peak_depth: usize,
    done: bool,
}

impl<'m> Generator<'m> {
    /// Start a run at `start`, which is marked visited right away.
    ///
    /// A maze can only be generated once; a second run would carve a separate tree.
    pub fn new(maze: &'m mut Maze, start: GridIndex) -> Result<Self, MazeGenerationError> {
        if let Some(previous) = maze.start() {
            return Err(MazeGenerationError::AlreadyGenerated(previous));
        }
        if !maze.contains(start) {
            return Err(MazeGenerationError::StartOutOfBounds(start));
        }
        if !maze.is_allowed(start) {
            return Err(MazeGenerationError::StartDisallowed(start));
        }

        log::debug!(
            "generating {}x{} maze from {} ({})",
            maze.width(),
            maze.height(),
            start,
            if maze.mask().is_some() { "masked" } else { "unmasked" }
        );
        maze.mark_visited(start);
        maze.start = Some(start);

        Ok(Self {
            maze,
            stack: Vec::new(),
            current: start,
            peak_depth: 0,
            done: false,
        })
    }

    /// Cell the generator is currently at.
    pub fn current(&self) -> GridIndex {
        self.current
    }

    /// Number of cells on the backtracking stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether the run has finished.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Perform a single advance or backtrack. Once [Transition::Done] is returned, every
    /// further call returns it again.
    pub fn step<R>(&mut self, rng: &mut R) -> Transition
    where
        R: Rng + ?Sized,
    {
        if self.done {
            return Transition::Done;
        }

        let candidates = self.maze.unvisited_reachable_neighbors(self.current);
        if let Some(&next) = candidates.choose(rng) {
            let from = self.current;
            self.stack.push(from);
            self.peak_depth = self.peak_depth.max(self.stack.len());
            self.maze.connect(from, next);
            self.current = next;
            log::trace!("advance {} -> {}", from, next);
            Transition::Advanced { from, to: next }
        } else if let Some(previous) = self.stack.pop() {
            log::trace!("backtrack {} -> {}", self.current, previous);
            self.current = previous;
            Transition::Backtracked { to: previous }
        } else {
            self.done = true;
            Transition::Done
        }
    }

    /// Step until done. Returns the number of carved passages.
    pub fn run<R>(mut self, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let mut carved = 0;
        loop {
            match self.step(rng) {
                Transition::Advanced { .. } => carved += 1,
                Transition::Backtracked { .. } => {}
                Transition::Done => break,
            }
        }
        log::debug!(
            "maze done: {} cells visited, {} passages carved, peak stack depth {}",
            carved + 1,
            carved,
            self.peak_depth
        );
        carved
    }
}
