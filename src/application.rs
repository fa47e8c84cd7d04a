/*
application.rs

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

//! Play a puzzle in the terminal.
//!
//! The grid is printed with row and column numbers. The player enters the row and the column
//! of a cell at one end of a word, and then of the cell at the other end. Both cells can also
//! be given on the same line. Found words are printed in lowercase.

use log::debug;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::config::VERSION;
use crate::game::{Game, Selection};
use crate::generator::grid::Coord;
use crate::highscores::format_duration;

const HELP: &str = "\
Commands:
  ROW COL            select a cell at one end of a word
  ROW COL ROW COL    select both ends of a word
  p                  pause or resume the timer
  h                  show this help
  q                  give up";

/// How the game ended.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// All the words are found, in the given time.
    Solved(Duration),

    /// The player gave up or closed the input.
    Quit,
}

/// Terminal front end.
pub struct Application<I: BufRead, O: Write> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Application<I, O> {
    /// Create an [`Application`] object that reads the player commands from `input`.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Read a line. Return None at the end of the input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line: String = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Print the grid and the words that remain to be found.
    fn draw(&mut self, game: &Game) -> io::Result<()> {
        let size: usize = game.grid().size();
        let found: HashSet<Coord> = game.found_cells();

        write!(self.output, "\n    ")?;
        for y in 0..size {
            write!(self.output, "{y:>3}")?;
        }
        writeln!(self.output)?;
        for (x, row) in game.grid().rows().enumerate() {
            write!(self.output, "{x:>3} ")?;
            for (y, c) in row.iter().enumerate() {
                let c: char = c.unwrap_or('.');
                if found.contains(&(x, y)) {
                    write!(self.output, "{:>3}", c.to_lowercase().collect::<String>())?;
                } else {
                    write!(self.output, "{c:>3}")?;
                }
            }
            writeln!(self.output)?;
        }

        let words: Vec<&str> = game.remaining().iter().map(|e| e.display.as_str()).collect();
        writeln!(
            self.output,
            "\nWords to find ({}): {}",
            words.len(),
            words.join(", ")
        )?;
        if !game.found().is_empty() {
            let found: Vec<&str> = game.found().iter().map(|e| e.display.as_str()).collect();
            writeln!(self.output, "Found: {}", found.join(", "))?;
        }
        writeln!(
            self.output,
            "Time: {}",
            format_duration(game.get_duration())
        )?;
        Ok(())
    }

    /// Run the game until the puzzle is solved or the player gives up.
    pub fn play(&mut self, game: &mut Game) -> io::Result<Outcome> {
        writeln!(
            self.output,
            "Wordsearch {VERSION}: theme {}\n\n{HELP}",
            game.theme
        )?;
        self.draw(game)?;

        while !game.is_solved() {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let line: String = match self.read_line()? {
                Some(l) => l,
                None => return Ok(Outcome::Quit),
            };

            match line.as_str() {
                "" => continue,
                "q" => return Ok(Outcome::Quit),
                "h" => {
                    writeln!(self.output, "{HELP}")?;
                    continue;
                }
                "p" => {
                    if game.paused {
                        game.resume();
                        writeln!(self.output, "Resumed")?;
                        self.draw(game)?;
                    } else {
                        game.pause();
                        writeln!(self.output, "Paused. Enter p to resume.")?;
                    }
                    continue;
                }
                _ => (),
            }

            if game.paused {
                writeln!(self.output, "The game is paused. Enter p to resume.")?;
                continue;
            }

            let numbers: Vec<usize> = match line
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<usize>, _>>()
            {
                Ok(n) => n,
                Err(_) => {
                    writeln!(self.output, "Unknown command {line:?}. Enter h for help.")?;
                    continue;
                }
            };
            debug!("Player input: {numbers:?}");

            match numbers.as_slice() {
                [x, y] => match game.select_cell((*x, *y)) {
                    Selection::Started((x, y)) => writeln!(
                        self.output,
                        "Cell {x} {y} selected. Now select the other end of the word"
                    )?,
                    Selection::Mismatch(a, b) => {
                        writeln!(self.output, "No word between {a:?} and {b:?}")?
                    }
                    Selection::Cleared => writeln!(self.output, "Selection cleared")?,
                    Selection::Ignored => writeln!(self.output, "Cell ignored")?,
                    Selection::Found(entry) => {
                        writeln!(self.output, "Found {}!", entry.display)?;
                        self.draw(game)?;
                    }
                },
                [x1, y1, x2, y2] => match game.guess((*x1, *y1), (*x2, *y2)) {
                    Some(entry) => {
                        writeln!(self.output, "Found {}!", entry.display)?;
                        self.draw(game)?;
                    }
                    None => writeln!(self.output, "No word there")?,
                },
                _ => writeln!(self.output, "Enter two or four numbers. Enter h for help.")?,
            }
        }

        let duration: Duration = game.get_duration();
        writeln!(
            self.output,
            "\nAll the words found in {}",
            format_duration(duration)
        )?;
        Ok(Outcome::Solved(duration))
    }

    /// Ask the player for a name for the leaderboard. Return None if the player enters nothing.
    pub fn ask_username(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "Enter your name for the leaderboard: ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .filter(|name| !name.is_empty())
            .map(|name| name.chars().take(20).collect()))
    }

    /// Print a message.
    pub fn message(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.output, "{msg}")
    }
}
