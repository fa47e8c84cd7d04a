/*
config.rs

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

//! Application constants and location of the data files.

use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright 2025 Hervé Quatremain\n",
    "License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>"
);

/// Name of the directory, under the user data directory, that stores the themes and the scores.
pub const DATA_DIR_NAME: &str = "wordsearch";

/// Return the directory where the themes and the high scores are saved.
///
/// This is the [`DATA_DIR_NAME`] directory under the user data directory, usually
/// `$XDG_DATA_HOME` or `$HOME/.local/share` on Linux.
///
/// # Errors
///
/// The function returns an error when the user data directory cannot be determined, for
/// example when `$HOME` is not set.
pub fn user_data_dir() -> Result<PathBuf, &'static str> {
    dirs::data_dir()
        .map(|d| d.join(DATA_DIR_NAME))
        .ok_or("cannot find the user data directory, use --data-dir")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn data_dir_is_application_specific() {
        if let Ok(dir) = user_data_dir() {
            assert!(dir.ends_with(DATA_DIR_NAME));
            assert_eq!(dir.parent(), dirs::data_dir().as_deref());
        }
    }
}
