/*
generator.rs

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

//! Generate random word search puzzles.
//!
//! A puzzle is built in three steps:
//!
//! * An empty [`grid::Grid`] is created. Its size is the length of the longest word plus
//!   [`puzzle::MARGIN`].
//!
//! * Each word, longest first, is written to the grid by a [`placement::PlacementEngine`] along
//!   a random horizontal or vertical run that does not cross any other word.
//!   When a word cannot be placed after [`placement::MAX_ATTEMPT`] attempts, the grid is
//!   discarded and all the words are placed again in a brand-new grid.
//!
//! * The remaining empty cells are completed with random letters by [`filler::fill`].
//!
//! [`puzzle::generate_puzzle`] runs these steps and returns a [`puzzle::Puzzle`] object that
//! associates each word with its [`placement::Placement`] in the grid.
//!
//! All the random choices are drawn from a caller-provided [`rand::Rng`] so that a seeded
//! generator always produces the same puzzle.

pub mod filler;
pub mod grid;
pub mod placement;
pub mod puzzle;
