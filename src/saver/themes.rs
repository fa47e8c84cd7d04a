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

//! Save and restore the word themes.
//!
//! The file is a JSON object that maps each theme name to its list of words:
//!
//! ```json
//! {
//!   "Animals": ["cat", "dog", "horse", "rabbit", "tiger"]
//! }
//! ```

use log::{debug, warn};
use std::error::Error;
use std::path::PathBuf;

use crate::themes::Themes;

/// Object to save and restore the themes.
pub struct SaverThemes {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverThemes {
    /// Create a [`SaverThemes`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the themes are saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("themes.json");
        debug!("Themes file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Retrieve the [`Themes`] object from the themes file.
    ///
    /// When the file does not exist, it is created with the built-in themes, which are
    /// returned. Failing to write the file is not an error.
    pub fn get_themes(&self) -> Result<Themes, Box<dyn Error>> {
        if let Some(themes) = super::load(&self.save_file)? {
            return Ok(themes);
        }

        debug!("No themes file, saving the built-in themes");
        let themes: Themes = Themes::builtin();
        if let Err(e) = self.save_themes(&themes) {
            warn!("Cannot save the built-in themes to {:?}: {e}", self.save_file);
        }
        Ok(themes)
    }

    /// Save the provided [`Themes`] object.
    pub fn save_themes(&self, themes: &Themes) -> Result<(), Box<dyn Error>> {
        super::save(&self.save_file, themes)
    }
}
