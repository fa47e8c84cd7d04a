/*
highscores.rs

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

//! Manage the leaderboard.
//!
//! The main object, [`HighScores`], maintains a list of high scores for each theme.
//! This object is saved when the player completes a puzzle and makes it to the scoreboard.
//! See the [`crate::saver::highscores`] module that saves and restores the [`HighScores`] object.

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Number of entries per scoreboard (number of top scores to keep).
const BOARD_SIZE: usize = 10;

/// Object that represent a score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Score {
    /// Name of the player.
    pub username: String,

    /// How long did it take for finding all the words.
    pub time: Duration,

    /// Completion timestamp.
    pub when: SystemTime,
}

impl Score {
    /// Return the solving time in the `m:ss` format.
    pub fn time_ms(&self) -> String {
        format_duration(self.time)
    }

    /// Return the completion date and time in the local time zone.
    pub fn when_local(&self) -> String {
        let dt: DateTime<Local> = DateTime::from(self.when);
        format!("{}", dt.format("%Y-%m-%d %H:%M"))
    }
}

/// Format a duration as minutes and seconds (`m:ss`).
pub fn format_duration(duration: Duration) -> String {
    let secs: u64 = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Scores for a theme, sorted by time.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct ThemeHighScoreBoard {
    /// The number of scores in this list is controlled by the [`BOARD_SIZE`] constant.
    top: Vec<Score>,
}

impl ThemeHighScoreBoard {
    /// Add a score to the scoreboard and return the position in the board, or None if the
    /// score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score). A score equal to an existing one is
    /// ranked after it.
    fn add_score(&mut self, score: Score) -> Option<usize> {
        let i: usize = self.top.partition_point(|s| s.time <= score.time);
        if i >= BOARD_SIZE {
            return None;
        }
        self.top.insert(i, score);
        self.top.truncate(BOARD_SIZE);
        Some(i + 1)
    }
}

/// List of the scoreboards for the themes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct HighScores {
    /// Scoreboards indexed by the theme name.
    board: BTreeMap<String, ThemeHighScoreBoard>,
}

impl HighScores {
    /// Add the player's time to the scoreboard of the given theme and return the position in
    /// the scoreboard, or None if the score does not make it to the board.
    ///
    /// The returned position starts at 1 (top score).
    pub fn add_score(&mut self, theme: &str, username: &str, time: Duration) -> Option<usize> {
        let scoreboard: &mut ThemeHighScoreBoard =
            self.board.entry(theme.to_string()).or_default();

        scoreboard.add_score(Score {
            username: username.to_string(),
            time,
            when: SystemTime::now(),
        })
    }

    /// Return the list of [`Score`] for the given theme.
    ///
    /// Return None when the scoreboard is empty.
    pub fn get_score(&self, theme: &str) -> Option<&Vec<Score>> {
        self.board.get(theme).map(|b| &b.top)
    }

    /// Return the themes that have a scoreboard, in alphabetical order.
    pub fn themes(&self) -> Vec<&str> {
        self.board.keys().map(String::as_str).collect()
    }

    /// Return whether the list of scoreboard is empty (no scoreboard for any theme)
    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }
}
