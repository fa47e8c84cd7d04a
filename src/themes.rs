/*
themes.rs

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

//! Manage the word themes.
//!
//! A theme is a named list of words. The words of a puzzle are randomly picked from a theme.
//! Users can create their own themes, which are saved with the other themes.
//! See the [`crate::saver::themes`] module that saves and restores the [`Themes`] object.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Number of words hidden in a puzzle, which is also the minimum number of words in a theme.
pub const WORD_COUNT: usize = 5;

/// Themes available when the user has not saved any.
const BUILTIN_THEMES: [(&str, &[&str]); 6] = [
    (
        "Animals",
        &[
            "cat", "dog", "horse", "rabbit", "tiger", "lion", "zebra", "giraffe", "elephant",
            "monkey", "penguin", "dolphin",
        ],
    ),
    (
        "Fruits",
        &[
            "apple", "banana", "cherry", "grape", "lemon", "mango", "orange", "peach", "pear",
            "plum", "kiwi", "melon",
        ],
    ),
    (
        "Colours",
        &[
            "red", "blue", "green", "yellow", "purple", "orange", "pink", "brown", "black",
            "white", "grey", "violet",
        ],
    ),
    (
        "Planets",
        &[
            "mercury", "venus", "earth", "mars", "jupiter", "saturn", "uranus", "neptune",
        ],
    ),
    (
        "Sports",
        &[
            "football", "tennis", "rugby", "cricket", "golf", "hockey", "rowing", "boxing",
            "cycling", "skiing",
        ],
    ),
    (
        "Countries",
        &[
            "france", "spain", "italy", "germany", "norway", "japan", "china", "brazil", "canada",
            "egypt", "peru", "chile",
        ],
    ),
];

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ThemeError {
    /// No theme with that name.
    UnknownTheme(String),

    /// The theme name is empty.
    EmptyName,

    /// A word contains characters other than letters.
    InvalidWord(String),

    /// The theme has not enough words.
    TooFewWords { needed: usize, found: usize },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThemeError::UnknownTheme(name) => write!(f, "unknown theme {name:?}"),
            ThemeError::EmptyName => write!(f, "the theme name is empty"),
            ThemeError::InvalidWord(word) => {
                write!(f, "{word:?} is not a valid word: only letters are allowed")
            }
            ThemeError::TooFewWords { needed, found } => {
                write!(f, "{needed} words are required but only {found} are available")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

/// List of the themes, indexed and sorted by name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Themes {
    themes: BTreeMap<String, Vec<String>>,
}

impl Themes {
    /// Create a [`Themes`] object with the default themes.
    pub fn builtin() -> Self {
        Self {
            themes: BUILTIN_THEMES
                .iter()
                .map(|(name, words)| {
                    (
                        name.to_string(),
                        words.iter().map(|w| w.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Return the theme names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// Return the words of the given theme.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.themes.get(name).map(Vec::as_slice)
    }

    /// Whether there is no theme.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// Add a theme, or replace the theme with the same name, and return the number of words.
    ///
    /// `body` is a comma-separated list of words. Spaces around the words are ignored, and so
    /// are empty entries and duplicated words.
    ///
    /// # Errors
    ///
    /// The method returns an error when the name is empty, when a word has something else than
    /// letters, or when there are less than [`WORD_COUNT`] words.
    pub fn add(&mut self, name: &str, body: &str) -> Result<usize, ThemeError> {
        let name: &str = name.trim();
        if name.is_empty() {
            return Err(ThemeError::EmptyName);
        }

        let mut words: Vec<String> = Vec::new();
        for word in body.split(',').map(str::trim).filter(|w| !w.is_empty()) {
            if !word.chars().all(char::is_alphabetic) {
                return Err(ThemeError::InvalidWord(word.to_string()));
            }
            if !words.iter().any(|w| w.to_lowercase() == word.to_lowercase()) {
                words.push(word.to_string());
            }
        }
        if words.len() < WORD_COUNT {
            return Err(ThemeError::TooFewWords {
                needed: WORD_COUNT,
                found: words.len(),
            });
        }

        debug!("Adding theme {name} with {} words", words.len());
        let count: usize = words.len();
        self.themes.insert(name.to_string(), words);
        Ok(count)
    }

    /// Pick `count` different words at random from the given theme.
    ///
    /// # Errors
    ///
    /// The method returns an error if the theme does not exist or does not have enough words.
    pub fn pick_words<R: Rng + ?Sized>(
        &self,
        name: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, ThemeError> {
        let words: &[String] = self
            .get(name)
            .ok_or_else(|| ThemeError::UnknownTheme(name.to_string()))?;
        if words.len() < count {
            return Err(ThemeError::TooFewWords {
                needed: count,
                found: words.len(),
            });
        }
        Ok(words.choose_multiple(rng, count).cloned().collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn builtin_themes() {
        let themes = Themes::builtin();

        assert_eq!(
            themes.names(),
            vec!["Animals", "Colours", "Countries", "Fruits", "Planets", "Sports"]
        );
        for name in themes.names() {
            assert!(themes.get(name).unwrap().len() >= WORD_COUNT);
        }
        assert!(themes.get("Cars").is_none());
    }

    #[test]
    fn add_theme() {
        let mut themes = Themes::default();
        assert!(themes.is_empty());

        let count = themes
            .add(" Birds ", "robin, wren,,owl ,Robin, eagle,hawk, crow")
            .unwrap();

        assert_eq!(count, 6);
        assert_eq!(
            themes.get("Birds").unwrap(),
            ["robin", "wren", "owl", "eagle", "hawk", "crow"]
        );
    }

    #[test]
    fn add_invalid_theme() {
        let mut themes = Themes::default();

        assert_eq!(themes.add("  ", "a,b,c,d,e"), Err(ThemeError::EmptyName));
        assert_eq!(
            themes.add("Food", "ice cream,cake,pie,tart,jam"),
            Err(ThemeError::InvalidWord("ice cream".to_string()))
        );
        assert_eq!(
            themes.add("Food", "cake,pie,tart"),
            Err(ThemeError::TooFewWords {
                needed: WORD_COUNT,
                found: 3
            })
        );
        assert!(themes.is_empty());
    }

    #[test]
    fn pick_distinct_words() {
        let themes = Themes::builtin();
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let words = themes.pick_words("Animals", WORD_COUNT, &mut rng).unwrap();
            let unique: HashSet<&String> = words.iter().collect();

            assert_eq!(words.len(), WORD_COUNT);
            assert_eq!(unique.len(), WORD_COUNT);
            for w in &words {
                assert!(themes.get("Animals").unwrap().contains(w));
            }
        }
    }

    #[test]
    fn pick_errors() {
        let themes = Themes::builtin();
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(
            themes.pick_words("Cars", 5, &mut rng),
            Err(ThemeError::UnknownTheme("Cars".to_string()))
        );
        assert_eq!(
            themes.pick_words("Planets", 9, &mut rng),
            Err(ThemeError::TooFewWords {
                needed: 9,
                found: 8
            })
        );
    }

    #[test]
    fn json_format() {
        let mut themes = Themes::default();
        themes.add("Birds", "robin,wren,owl,eagle,hawk").unwrap();

        let json = serde_json::to_string(&themes).unwrap();
        assert_eq!(json, r#"{"Birds":["robin","wren","owl","eagle","hawk"]}"#);
        assert_eq!(serde_json::from_str::<Themes>(&json).unwrap(), themes);
    }
}
