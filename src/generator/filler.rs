/*
filler.rs

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

//! Complete the grid with random letters.
//!
//! Filler letters are not checked against the placed words, so they might spell a word by
//! accident.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::grid::Grid;

/// Letters used to fill the empty cells.
const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Write a random uppercase letter to every empty cell of the grid.
///
/// Return the number of cells that have been filled.
pub fn fill<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    let size: usize = grid.size();
    let mut count: usize = 0;

    for x in 0..size {
        for y in 0..size {
            if grid.is_empty((x, y))
                && let Some(c) = ALPHABET.choose(rng)
            {
                grid.set((x, y), *c);
                count += 1;
            }
        }
    }
    debug!("Filled {count} cells with random letters");
    count
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn fill_empty_cells_only() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(5);
        grid.set((0, 0), 'c');
        grid.set((4, 4), 'z');

        let count = fill(&mut grid, &mut rng);

        assert_eq!(count, 23);
        assert!(grid.is_full());
        assert_eq!(grid.get((0, 0)), Some('c'));
        assert_eq!(grid.get((4, 4)), Some('z'));
        for x in 0..5 {
            for y in 0..5 {
                if (x, y) != (0, 0) && (x, y) != (4, 4) {
                    let c = grid.get((x, y)).unwrap();
                    assert!(c.is_ascii_uppercase());
                }
            }
        }
    }

    #[test]
    fn fill_full_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(2);
        fill(&mut grid, &mut rng);
        let before = grid.clone();

        assert_eq!(fill(&mut grid, &mut rng), 0);
        assert_eq!(grid, before);
    }

    #[test]
    fn fill_is_seeded() {
        let mut a = Grid::new(6);
        let mut b = Grid::new(6);

        fill(&mut a, &mut StdRng::seed_from_u64(99));
        fill(&mut b, &mut StdRng::seed_from_u64(99));

        assert_eq!(a, b);
    }
}
