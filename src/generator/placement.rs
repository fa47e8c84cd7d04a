/*
placement.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Write words to the grid along random horizontal or vertical runs.

use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use strum_macros::FromRepr;

use super::grid::{Coord, Grid};

/// Highest attempt number for a single word. Attempts are numbered from 0, so a word gets
/// `MAX_ATTEMPT + 1` tries before the whole grid is reset.
pub const MAX_ATTEMPT: usize = 100;

/// Default number of global resets before giving up.
pub const MAX_RESTARTS: usize = 50;

/// Direction of the run that holds a word.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, FromRepr, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Orientation {
    /// Same row, the column changes.
    #[default]
    Horizontal,

    /// Same column, the row changes.
    Vertical,
}

impl Orientation {
    /// Draw an orientation, each with the same probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_repr(rng.random_range(0..=1)).unwrap_or_default()
    }

    /// Return the coordinate that is `offset` cells after `start` along this orientation.
    fn step(self, start: Coord, offset: usize) -> Coord {
        match self {
            Orientation::Horizontal => (start.0, start.1 + offset),
            Orientation::Vertical => (start.0 + offset, start.1),
        }
    }
}

/// Committed location of a word: coordinates of its first and last characters.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placement {
    pub start: Coord,
    pub end: Coord,
}

impl Placement {
    /// Create a [`Placement`] object for a run of `len` cells (`len` > 0).
    pub fn new(start: Coord, orientation: Orientation, len: usize) -> Self {
        Self {
            start,
            end: orientation.step(start, len - 1),
        }
    }

    /// Return the orientation of the run. A one-cell run is reported as horizontal.
    pub fn orientation(&self) -> Orientation {
        if self.start.0 != self.end.0 {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Number of cells in the run.
    pub fn len(&self) -> usize {
        match self.orientation() {
            Orientation::Horizontal => self.end.1 - self.start.1 + 1,
            Orientation::Vertical => self.end.0 - self.start.0 + 1,
        }
    }

    /// Return the coordinates of the run, from start to end.
    pub fn cells(&self) -> Vec<Coord> {
        let orientation: Orientation = self.orientation();
        (0..self.len())
            .map(|i| orientation.step(self.start, i))
            .collect()
    }

    /// Whether the two cells that the player selected are the ends of this run, in any order.
    pub fn matches(&self, first: Coord, second: Coord) -> bool {
        (self.start, self.end) == (first, second) || (self.start, self.end) == (second, first)
    }

    /// Read the characters of the run from the grid. Empty cells are returned as dots.
    pub fn read(&self, grid: &Grid) -> String {
        self.cells()
            .into_iter()
            .map(|pos| grid.get(pos).unwrap_or('.'))
            .collect()
    }
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// The grid has been reset too many times without placing all the words.
    Ungenerable { restarts: usize },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementError::Ungenerable { restarts } => {
                write!(f, "cannot place all the words after {restarts} grid resets")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// [`PlacementEngine`] object.
pub struct PlacementEngine<'a, R: Rng + ?Sized> {
    /// Source for all the random choices.
    rng: &'a mut R,

    /// Number of rows and columns of the grids to build.
    size: usize,

    /// Number of global resets allowed before [`PlacementEngine::place_all`] gives up.
    max_restarts: usize,

    /// Number of attempts it took to place the last word.
    pub attempts: usize,

    /// Number of global resets during the last [`PlacementEngine::place_all`] call.
    pub restarts: usize,
}

impl<'a, R: Rng + ?Sized> PlacementEngine<'a, R> {
    /// Create the object.
    pub fn new(rng: &'a mut R, size: usize) -> Self {
        Self {
            rng,
            size,
            max_restarts: MAX_RESTARTS,
            attempts: 0,
            restarts: 0,
        }
    }

    /// Change the number of global resets allowed.
    pub fn with_max_restarts(mut self, max_restarts: usize) -> Self {
        self.max_restarts = max_restarts;
        self
    }

    /// Try a single random run for the word.
    ///
    /// The grid is only modified when all the cells of the run are empty.
    fn try_place(&mut self, grid: &mut Grid, word: &[char]) -> Option<Placement> {
        let orientation: Orientation = Orientation::random(&mut *self.rng);

        // The run must stay inside the grid along its axis
        let along: usize = self.rng.random_range(0..=self.size - word.len());
        let across: usize = self.rng.random_range(0..self.size);
        let start: Coord = match orientation {
            Orientation::Horizontal => (across, along),
            Orientation::Vertical => (along, across),
        };

        let placement: Placement = Placement::new(start, orientation, word.len());
        let cells: Vec<Coord> = placement.cells();
        if cells.iter().any(|pos| !grid.is_empty(*pos)) {
            return None;
        }
        for (pos, c) in cells.into_iter().zip(word) {
            grid.set(pos, *c);
        }
        Some(placement)
    }

    /// Write the word to the grid and return its placement.
    ///
    /// Return None when the word collides with other words for all the attempts. In that case
    /// the grid is unchanged.
    ///
    /// # Panics
    ///
    /// The word must not be empty and must not be longer than the grid size.
    pub fn place(&mut self, grid: &mut Grid, word: &str) -> Option<Placement> {
        let chars: Vec<char> = word.chars().collect();
        assert!(
            !chars.is_empty() && chars.len() <= self.size,
            "word {word:?} does not fit a grid of size {}",
            self.size
        );

        for attempt in 0..=MAX_ATTEMPT {
            if let Some(placement) = self.try_place(grid, &chars) {
                self.attempts = attempt + 1;
                debug!(
                    "Placed {word} from {:?} to {:?} (attempt {attempt})",
                    placement.start, placement.end
                );
                return Some(placement);
            }
        }
        self.attempts = MAX_ATTEMPT + 1;
        debug!("Cannot place {word} after {} attempts", self.attempts);
        None
    }

    /// Place all the words in a new grid and return the grid and the placements, in the order
    /// of the words.
    ///
    /// When a word cannot be placed, the grid is discarded and all the words are placed again
    /// in a new empty grid of the same size.
    ///
    /// # Errors
    ///
    /// The method returns an error when the grid has been reset more than the allowed number
    /// of times.
    pub fn place_all(
        &mut self,
        words: &[String],
    ) -> Result<(Grid, Vec<Placement>), PlacementError> {
        self.restarts = 0;

        loop {
            let mut grid: Grid = Grid::new(self.size);
            let mut placements: Vec<Placement> = Vec::with_capacity(words.len());

            for word in words {
                match self.place(&mut grid, word) {
                    Some(p) => placements.push(p),
                    None => break,
                }
            }
            if placements.len() == words.len() {
                return Ok((grid, placements));
            }

            self.restarts += 1;
            if self.restarts > self.max_restarts {
                return Err(PlacementError::Ungenerable {
                    restarts: self.max_restarts,
                });
            }
            debug!(
                "Resetting the grid ({}/{}) after {} attempts for word #{}",
                self.restarts,
                self.max_restarts,
                self.attempts,
                placements.len() + 1
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn placement_geometry() {
        let h = Placement::new((1, 2), Orientation::Horizontal, 3);
        assert_eq!(h.end, (1, 4));
        assert_eq!(h.orientation(), Orientation::Horizontal);
        assert_eq!(h.len(), 3);
        assert_eq!(h.cells(), vec![(1, 2), (1, 3), (1, 4)]);

        let v = Placement::new((0, 5), Orientation::Vertical, 4);
        assert_eq!(v.end, (3, 5));
        assert_eq!(v.orientation(), Orientation::Vertical);
        assert_eq!(v.len(), 4);

        let single = Placement::new((2, 2), Orientation::Vertical, 1);
        assert_eq!(single.start, single.end);
        assert_eq!(single.cells(), vec![(2, 2)]);
    }

    #[test]
    fn matches_both_directions() {
        let p = Placement::new((0, 0), Orientation::Horizontal, 3);

        assert!(p.matches((0, 0), (0, 2)));
        assert!(p.matches((0, 2), (0, 0)));
        assert!(!p.matches((0, 0), (0, 1)));
        assert!(!p.matches((0, 0), (2, 0)));
    }

    #[test]
    fn place_writes_word() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(6);
        let mut engine = PlacementEngine::new(&mut rng, 6);

        let p = engine.place(&mut grid, "CAT").unwrap();

        assert_eq!(p.len(), 3);
        assert_eq!(p.read(&grid), "CAT");
        assert!(engine.attempts >= 1);
    }

    #[test]
    fn full_grid_rejects_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(3);
        for x in 0..3 {
            for y in 0..3 {
                grid.set((x, y), 'X');
            }
        }
        let before = grid.clone();
        let mut engine = PlacementEngine::new(&mut rng, 3);

        assert_eq!(engine.place(&mut grid, "AB"), None);
        assert_eq!(engine.attempts, MAX_ATTEMPT + 1);
        assert_eq!(grid, before);
    }

    #[test]
    fn word_as_long_as_grid() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut engine = PlacementEngine::new(&mut rng, 5).with_max_restarts(1000);

            let (grid, placements) = engine.place_all(&words(&["HELLO"])).unwrap();

            assert_eq!(placements[0].read(&grid), "HELLO");
            assert!(engine.restarts < 1000);
        }
    }

    #[test]
    fn placements_do_not_overlap() {
        let list = words(&["ELEPHANT", "GIRAFFE", "ZEBRA", "LION", "CAT"]);

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut engine = PlacementEngine::new(&mut rng, 11);
            let (grid, placements) = engine.place_all(&list).unwrap();

            let mut seen: HashSet<Coord> = HashSet::new();
            for (word, p) in list.iter().zip(&placements) {
                assert_eq!(&p.read(&grid), word);
                for pos in p.cells() {
                    assert!(seen.insert(pos), "cell {pos:?} used twice (seed {seed})");
                }
            }
        }
    }

    #[test]
    fn reset_then_success() {
        // 21 of the 25 cells: the last words often find no room and the grid is reset
        let list = words(&["ABC", "DEF", "GHI", "JKL", "MNO", "PQR", "STU"]);
        let mut reset_seeds = 0;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut engine = PlacementEngine::new(&mut rng, 5).with_max_restarts(1000);
            let (grid, placements) = engine.place_all(&list).unwrap();
            if engine.restarts == 0 {
                continue;
            }
            reset_seeds += 1;

            assert_eq!(grid.size(), 5);
            assert_eq!(placements.len(), list.len());
            let mut seen: HashSet<Coord> = HashSet::new();
            for (word, p) in list.iter().zip(&placements) {
                assert_eq!(&p.read(&grid), word);
                for pos in p.cells() {
                    assert!(seen.insert(pos), "cell {pos:?} used twice (seed {seed})");
                }
            }
        }
        assert!(reset_seeds > 0);
    }

    #[test]
    fn impossible_words_are_reported() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut engine = PlacementEngine::new(&mut rng, 2).with_max_restarts(5);

        // Three two-letter words cannot fit in four cells
        let ret = engine.place_all(&words(&["AB", "CD", "EF"]));

        assert_eq!(ret.unwrap_err(), PlacementError::Ungenerable { restarts: 5 });
        assert_eq!(engine.restarts, 6);
    }
}
