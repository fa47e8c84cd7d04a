/*
saver.rs

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

//! Save and restore the themes and the high scores.
//!
//! Objects are serialized in JSON format by using [`serde`], one file per object in the user
//! data directory (see [`crate::config::user_data_dir`]).

pub mod highscores;
pub mod themes;

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

/// Read and deserialize the given JSON file.
///
/// Return None if the file does not exist.
fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, Box<dyn Error>> {
    let file: File = match File::open(path) {
        Ok(f) => f,
        Err(error) => match error.kind() {
            ErrorKind::NotFound => return Ok(None),
            _ => return Err(Box::new(error)),
        },
    };
    let reader: BufReader<File> = BufReader::new(file);
    let value: T = serde_json::from_reader(reader)?;
    Ok(Some(value))
}

/// Serialize the object to the given JSON file. The parent directories are created if needed.
fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }
    debug!("Writing {path:?}");
    let file: File = File::create(path)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}
