/*
puzzle.rs

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

//! Build a complete puzzle from a list of words.

use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use std::fmt;

use super::filler;
use super::grid::{Coord, Grid};
use super::placement::{MAX_RESTARTS, Placement, PlacementEngine, PlacementError};

/// Number of cells added to the length of the longest word to get the grid size.
pub const MARGIN: usize = 3;

/// A word is written backward with a probability of `REVERSE_NUMERATOR / REVERSE_DENOMINATOR`.
const REVERSE_NUMERATOR: u32 = 1;
const REVERSE_DENOMINATOR: u32 = 3;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GenerateError {
    /// The word list is empty.
    NoWords,

    /// The word at the given index is empty or contains spaces.
    InvalidWord(usize),

    /// The words could not be placed, even after resetting the grid several times.
    Ungenerable { restarts: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GenerateError::NoWords => write!(f, "no words to hide in the puzzle"),
            GenerateError::InvalidWord(i) => {
                write!(f, "word #{} is empty or contains spaces", i + 1)
            }
            GenerateError::Ungenerable { restarts } => {
                write!(f, "cannot build the puzzle after {restarts} grid resets")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

impl From<PlacementError> for GenerateError {
    fn from(error: PlacementError) -> Self {
        match error {
            PlacementError::Ungenerable { restarts } => GenerateError::Ungenerable { restarts },
        }
    }
}

/// Generation parameters.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    /// Number of cells added to the longest word length to get the grid size.
    pub margin: usize,

    /// Number of grid resets before giving up.
    pub max_restarts: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            margin: MARGIN,
            max_restarts: MAX_RESTARTS,
        }
    }
}

/// A word hidden in the puzzle.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Word as written in the grid, from the placement start to its end: uppercase, and
    /// reversed if [`Entry::reversed`] is set.
    pub word: String,

    /// Word as provided by the caller, for the list of words to find.
    pub display: String,

    /// Whether the word is written backward.
    pub reversed: bool,

    /// Location of the word in the grid.
    #[serde(flatten)]
    pub placement: Placement,
}

/// Generated puzzle.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Number of rows and columns.
    pub size: usize,

    /// Completed grid.
    #[serde(rename = "rows")]
    pub grid: Grid,

    /// Hidden words, longest first.
    #[serde(rename = "words")]
    pub entries: Vec<Entry>,

    /// Number of grid resets it took to place all the words.
    #[serde(skip)]
    pub restarts: usize,
}

impl Puzzle {
    /// Return the index of the entry whose ends are the two given cells, in any order.
    pub fn find_entry(&self, first: Coord, second: Coord) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.placement.matches(first, second))
    }
}

/// Generate a puzzle with the default [`Options`].
pub fn generate_puzzle<R: Rng + ?Sized>(
    words: &[String],
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    generate_puzzle_with(words, &Options::default(), rng)
}

/// Hide the words in a new grid and fill the remaining cells with random letters.
///
/// Words are converted to uppercase, and some of them are reversed. They are placed longest
/// first, and the returned [`Puzzle::entries`] follow that order.
///
/// # Errors
///
/// The function returns an error when the list is empty, when a word is empty or has spaces,
/// or when the words cannot be placed.
pub fn generate_puzzle_with<R: Rng + ?Sized>(
    words: &[String],
    options: &Options,
    rng: &mut R,
) -> Result<Puzzle, GenerateError> {
    if words.is_empty() {
        return Err(GenerateError::NoWords);
    }

    let mut entries: Vec<(String, String, bool)> = Vec::with_capacity(words.len());
    for (i, display) in words.iter().enumerate() {
        let display: &str = display.trim();
        if display.is_empty() || display.chars().any(char::is_whitespace) {
            return Err(GenerateError::InvalidWord(i));
        }
        let upper: String = display.to_uppercase();
        let reversed: bool = rng.random_ratio(REVERSE_NUMERATOR, REVERSE_DENOMINATOR);
        let word: String = if reversed {
            upper.chars().rev().collect()
        } else {
            upper
        };
        entries.push((word, display.to_string(), reversed));
    }

    // Longer words first: they are harder to place. The sort is stable.
    entries.sort_by_key(|(word, _, _)| std::cmp::Reverse(word.chars().count()));

    let longest: usize = entries[0].0.chars().count();
    let size: usize = longest + options.margin;
    debug!("Grid size = {size} for {} words", entries.len());

    let placed: Vec<String> = entries.iter().map(|(w, _, _)| w.clone()).collect();
    let mut engine =
        PlacementEngine::new(&mut *rng, size).with_max_restarts(options.max_restarts);
    let (mut grid, placements) = engine.place_all(&placed)?;
    let restarts: usize = engine.restarts;

    filler::fill(&mut grid, rng);
    debug_assert!(grid.is_full());
    debug_assert!(
        placements
            .iter()
            .zip(&placed)
            .all(|(p, w)| p.read(&grid) == *w)
    );
    info!("Generated a {size}x{size} puzzle after {restarts} grid resets");

    Ok(Puzzle {
        size,
        grid,
        entries: entries
            .into_iter()
            .zip(placements)
            .map(|((word, display, reversed), placement)| Entry {
                word,
                display,
                reversed,
                placement,
            })
            .collect(),
        restarts,
    })
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

    fn check_puzzle(puzzle: &Puzzle) {
        let mut seen: HashSet<Coord> = HashSet::new();

        assert_eq!(puzzle.grid.size(), puzzle.size);
        assert!(puzzle.grid.is_full());
        for entry in &puzzle.entries {
            // The grid holds the word along its run
            assert_eq!(entry.placement.read(&puzzle.grid), entry.word);
            assert_eq!(entry.placement.len(), entry.word.chars().count());

            // The run is the display text, maybe reversed
            let upper = entry.display.to_uppercase();
            if entry.reversed {
                assert_eq!(entry.word, upper.chars().rev().collect::<String>());
            } else {
                assert_eq!(entry.word, upper);
            }

            // Runs never share a cell
            for pos in entry.placement.cells() {
                assert!(seen.insert(pos));
            }
        }
    }

    #[test]
    fn cat_and_dog() {
        let mut rng = StdRng::seed_from_u64(2025);
        let puzzle = generate_puzzle(&words(&["cat", "dog"]), &mut rng).unwrap();

        assert_eq!(puzzle.size, 6);
        assert_eq!(puzzle.entries.len(), 2);
        check_puzzle(&puzzle);
    }

    #[test]
    fn many_seeds() {
        let list = words(&["Elephant", "giraffe", "zebra", "Lion", "ox"]);

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_puzzle(&list, &mut rng).unwrap();

            assert_eq!(puzzle.size, 8 + MARGIN);
            check_puzzle(&puzzle);
        }
    }

    #[test]
    fn longest_first() {
        let mut rng = StdRng::seed_from_u64(5);
        let puzzle = generate_puzzle(&words(&["ox", "cat", "horse", "bee"]), &mut rng).unwrap();
        let displays: Vec<&str> = puzzle.entries.iter().map(|e| e.display.as_str()).collect();

        // Same-length words keep their relative order
        assert_eq!(displays, vec!["horse", "cat", "bee", "ox"]);
    }

    #[test]
    fn same_seed_same_puzzle() {
        let list = words(&["apple", "banana", "cherry", "date", "fig"]);

        let a = generate_puzzle(&list, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = generate_puzzle(&list, &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn some_words_are_reversed() {
        let list = words(&["abc", "def", "ghi", "jkl", "mno"]);
        let mut reversed = 0;
        let mut total = 0;

        for seed in 0..60 {
            let puzzle = generate_puzzle(&list, &mut StdRng::seed_from_u64(seed)).unwrap();
            reversed += puzzle.entries.iter().filter(|e| e.reversed).count();
            total += puzzle.entries.len();
        }
        assert!(reversed > 0);
        assert!(reversed < total);
    }

    #[test]
    fn single_word_fills_row_or_column() {
        let options = Options {
            margin: 0,
            max_restarts: 1000,
        };

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_puzzle_with(&words(&["word"]), &options, &mut rng).unwrap();

            assert_eq!(puzzle.size, 4);
            assert!(puzzle.restarts < 1000);
            check_puzzle(&puzzle);
        }
    }

    #[test]
    fn size_kept_after_reset() {
        let options = Options {
            margin: 2,
            max_restarts: 1000,
        };
        let list = words(&["abc", "def", "ghi", "jkl", "mno", "pqr", "stu"]);
        let mut reset_seeds = 0;

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_puzzle_with(&list, &options, &mut rng).unwrap();
            if puzzle.restarts > 0 {
                reset_seeds += 1;
                assert_eq!(puzzle.size, 5);
                check_puzzle(&puzzle);
            }
        }
        assert!(reset_seeds > 0);
    }

    #[test]
    fn find_entry_any_order() {
        let mut rng = StdRng::seed_from_u64(8);
        let puzzle = generate_puzzle(&words(&["cat", "dog"]), &mut rng).unwrap();
        let p = puzzle.entries[1].placement;

        assert_eq!(puzzle.find_entry(p.start, p.end), Some(1));
        assert_eq!(puzzle.find_entry(p.end, p.start), Some(1));
        assert_eq!(puzzle.find_entry(p.start, p.start), None);
    }

    #[test]
    fn invalid_input() {
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            generate_puzzle(&[], &mut rng).unwrap_err(),
            GenerateError::NoWords
        );
        assert_eq!(
            generate_puzzle(&words(&["cat", "  "]), &mut rng).unwrap_err(),
            GenerateError::InvalidWord(1)
        );
        assert_eq!(
            generate_puzzle(&words(&["ice cream"]), &mut rng).unwrap_err(),
            GenerateError::InvalidWord(0)
        );
    }

    #[test]
    fn ungenerable() {
        let options = Options {
            margin: 0,
            max_restarts: 3,
        };
        let mut rng = StdRng::seed_from_u64(0);

        let ret = generate_puzzle_with(&words(&["ab", "cd", "ef"]), &options, &mut rng);

        assert_eq!(ret.unwrap_err(), GenerateError::Ungenerable { restarts: 3 });
    }

    #[test]
    fn json_output() {
        let mut rng = StdRng::seed_from_u64(4);
        let puzzle = generate_puzzle(&words(&["cat"]), &mut rng).unwrap();
        let value: serde_json::Value = serde_json::to_value(&puzzle).unwrap();

        assert_eq!(value["size"], 6);
        assert_eq!(value["rows"].as_array().unwrap().len(), 6);
        assert_eq!(value["words"][0]["display"], "cat");
        assert!(value["words"][0]["start"].is_array());
        assert!(value["words"][0]["end"].is_array());
        assert!(value.get("restarts").is_none());
    }
}
