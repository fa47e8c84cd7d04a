/*
grid.rs

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

//! Square character matrix shared by the placement engine and the filler.
//!
//! The grid is stored row-major.
//! A coordinate is a `(x, y)` tuple where `x` is the row and `y` the column, so `grid[x][y]` in
//! a nested-vector view.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

/// Grid coordinate: `(row, column)`.
pub type Coord = (usize, usize);

/// Square grid of optional characters. `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,

    /// Cells, row after row.
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create a [`Grid`] object of `size` x `size` empty cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, pos: Coord) -> usize {
        let (x, y) = pos;
        assert!(
            x < self.size && y < self.size,
            "coordinate ({x}, {y}) outside of a {0}x{0} grid",
            self.size
        );
        x * self.size + y
    }

    /// Whether the cell at the given position has not been written yet.
    ///
    /// # Panics
    ///
    /// The coordinate must be inside the grid.
    pub fn is_empty(&self, pos: Coord) -> bool {
        self.cells[self.index(pos)].is_none()
    }

    /// Return the character at the given position, or None for an empty cell.
    pub fn get(&self, pos: Coord) -> Option<char> {
        self.cells[self.index(pos)]
    }

    /// Write a character to the given position.
    ///
    /// # Panics
    ///
    /// The coordinate must be inside the grid.
    pub fn set(&mut self, pos: Coord, c: char) {
        let i: usize = self.index(pos);
        self.cells[i] = Some(c);
    }

    /// Whether every cell holds a character.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Iterate over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<char>]> {
        // `max(1)` because chunks() rejects a zero chunk size
        self.cells.chunks(self.size.max(1))
    }

    /// Return the rows as strings. Empty cells are rendered with a dot.
    pub fn to_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(|c| c.unwrap_or('.')).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|c| c.unwrap_or('.').to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Serialize a [`Grid`] object as a list of row strings.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.size))?;
        for row in self.to_strings() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new(4);

        assert_eq!(grid.size(), 4);
        for x in 0..4 {
            for y in 0..4 {
                assert!(grid.is_empty((x, y)));
                assert_eq!(grid.get((x, y)), None);
            }
        }
        assert!(!grid.is_full());
    }

    #[test]
    fn set_is_row_major() {
        let mut grid = Grid::new(3);

        grid.set((0, 2), 'A');
        grid.set((2, 0), 'B');

        assert!(!grid.is_empty((0, 2)));
        assert_eq!(grid.get((0, 2)), Some('A'));
        assert_eq!(grid.get((2, 0)), Some('B'));
        assert_eq!(grid.to_strings(), vec!["..A", "...", "B.."]);
        assert_eq!(format!("{grid}"), ". . A\n. . .\nB . .\n");
    }

    #[test]
    fn full_grid() {
        let mut grid = Grid::new(2);

        for x in 0..2 {
            for y in 0..2 {
                grid.set((x, y), 'Z');
            }
        }
        assert!(grid.is_full());
    }

    #[test]
    #[should_panic]
    fn out_of_bounds() {
        let grid = Grid::new(3);
        grid.is_empty((3, 0));
    }

    #[test]
    fn serialize_rows() {
        let mut grid = Grid::new(2);
        grid.set((1, 1), 'Q');

        assert_eq!(serde_json::to_string(&grid).unwrap(), r#"["..",".Q"]"#);
    }
}
