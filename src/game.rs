/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The player finds a word by selecting the cells at both ends of the word, in any order.
//! Found words are removed from the list of remaining words.

use log::debug;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::generator::grid::{Coord, Grid};
use crate::generator::puzzle::{Entry, Puzzle};

/// Result of a cell selection.
#[derive(Debug, PartialEq)]
pub enum Selection {
    /// The cell is the first end of the selection.
    Started(Coord),

    /// The two selected cells are not the ends of a remaining word. The next selection clears
    /// them.
    Mismatch(Coord, Coord),

    /// The two selected cells are the ends of a word, which is now found.
    Found(Entry),

    /// The previous selection has been cleared.
    Cleared,

    /// The cell is outside the grid, or is already the first end of the selection and no
    /// one-letter word is there.
    Ignored,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    /// Name of the theme the words come from.
    pub theme: String,

    /// Puzzle being solved. Its entries are the words that the player has not found yet.
    puzzle: Puzzle,

    /// Words that the player found, in the order they were found.
    found: Vec<Entry>,

    /// Cells selected by the player.
    selected: (Option<Coord>, Option<Coord>),

    /// Whether the player paused the game.
    pub paused: bool,

    /// Time when the game started. Used to compute game duration.
    start_time: Instant,

    /// The elapsed time when the player paused the game.
    pause_duration: Option<Duration>,
}

impl Game {
    /// Create a [`Game`] object for the given puzzle.
    pub fn new(theme: &str, puzzle: Puzzle) -> Self {
        Self {
            theme: theme.to_string(),
            puzzle,
            found: Vec::new(),
            selected: (None, None),
            paused: false,
            start_time: Instant::now(),
            pause_duration: None,
        }
    }

    /// Return the puzzle grid.
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Return the words that are still to be found.
    pub fn remaining(&self) -> &[Entry] {
        &self.puzzle.entries
    }

    /// Return the words that the player found.
    pub fn found(&self) -> &[Entry] {
        &self.found
    }

    /// Return the cells of all the found words.
    pub fn found_cells(&self) -> HashSet<Coord> {
        self.found
            .iter()
            .flat_map(|e| e.placement.cells())
            .collect()
    }

    /// Whether all the words are found.
    pub fn is_solved(&self) -> bool {
        self.puzzle.entries.is_empty()
    }

    /// Process a cell that the player selected.
    pub fn select_cell(&mut self, pos: Coord) -> Selection {
        if pos.0 >= self.puzzle.size || pos.1 >= self.puzzle.size {
            return Selection::Ignored;
        }

        match self.selected {
            (None, _) => {
                self.selected = (Some(pos), None);
                Selection::Started(pos)
            }
            (Some(first), None) => match self.guess(first, pos) {
                Some(entry) => {
                    self.selected = (None, None);
                    Selection::Found(entry)
                }
                // Selecting the first cell again only finds a one-letter word
                None if first == pos => Selection::Ignored,
                None => {
                    self.selected = (Some(first), Some(pos));
                    Selection::Mismatch(first, pos)
                }
            },
            (Some(_), Some(_)) => {
                self.selected = (None, None);
                Selection::Cleared
            }
        }
    }

    /// Check whether the two cells are the ends of a remaining word. The word is moved to the
    /// found list and returned.
    pub fn guess(&mut self, first: Coord, second: Coord) -> Option<Entry> {
        let i: usize = self.puzzle.find_entry(first, second)?;
        let entry: Entry = self.puzzle.entries.remove(i);
        debug!(
            "Found {} ({} remaining)",
            entry.display,
            self.puzzle.entries.len()
        );
        self.found.push(entry.clone());
        Some(entry)
    }

    /// Pause the game.
    pub fn pause(&mut self) {
        // Store the played time so far, so that the pause time can be deduced when the
        // player resumes the game.
        self.pause_duration = Some(self.start_time.elapsed());
        self.paused = true;
    }

    /// Resume the game.
    pub fn resume(&mut self) {
        if let Some(d) = self.pause_duration {
            self.start_time += self.start_time.elapsed() - d;
            self.pause_duration = None;
        }
        self.paused = false;
    }

    /// Return the game duration, without the pauses.
    pub fn get_duration(&self) -> Duration {
        match self.pause_duration {
            Some(d) => d,
            None => self.start_time.elapsed(),
        }
    }
}
