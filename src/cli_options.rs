/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! List the available themes:
//!
//! ```
//! $ wordsearch --ls
//! Animals (12 words)
//! Colours (12 words)
//! Countries (12 words)
//! Fruits (12 words)
//! Planets (8 words)
//! Sports (10 words)
//! ```
//!
//! Print a puzzle with five words from the Planets theme, and reproduce it later with the
//! same seed:
//!
//! ```
//! $ wordsearch -t Planets -s 1234
//! ```
//!
//! Hide your own words and print the result in JSON format:
//!
//! ```
//! $ wordsearch -w rust,cargo,crate,trait --json
//! ```
//!
//! Solve a puzzle in the terminal, and then look at the leaderboard:
//!
//! ```
//! $ wordsearch --play -t Animals
//! $ wordsearch --scores
//! ```
//!
//! Create a theme:
//!
//! ```
//! $ wordsearch --add-theme Birds robin,wren,owl,eagle,hawk,crow
//! ```

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::io;
use std::path::PathBuf;

use crate::application::{Application, Outcome};
use crate::config::{self, COPYRIGHT_NOTICE};
use crate::game::Game;
use crate::generator::puzzle::{self, Puzzle};
use crate::highscores::HighScores;
use crate::saver::highscores::SaverHighScores;
use crate::saver::themes::SaverThemes;
use crate::themes::{ThemeError, Themes, WORD_COUNT};

/// Theme name used for the scores when the words are given on the command line.
const CUSTOM_THEME: &str = "Custom";

/// Generate word search puzzles, and solve them in the terminal.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// List the themes
    #[arg(short, long, default_value_t = false)]
    ls: bool,

    /// Name of the theme to pick the words from (a random theme by default)
    #[arg(short, long)]
    theme: Option<String>,

    /// Comma-separated words to hide, instead of picking words from a theme
    #[arg(short, long, value_delimiter = ',', conflicts_with = "theme")]
    words: Vec<String>,

    /// Number of words to pick from the theme
    #[arg(short = 'n', long, default_value_t = WORD_COUNT)]
    word_count: usize,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random generator, to generate the same puzzles again
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the puzzles in JSON format
    #[arg(short, long, default_value_t = false, conflicts_with = "play")]
    json: bool,

    /// Print the location of the words after the grid
    #[arg(long, default_value_t = false, conflicts_with = "play")]
    solution: bool,

    /// Solve the puzzles in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Create or replace a theme from a comma-separated list of words
    #[arg(long, num_args = 2, value_names = ["NAME", "WORDS"])]
    add_theme: Option<Vec<String>>,

    /// Show the leaderboard
    #[arg(long, default_value_t = false)]
    scores: bool,

    /// Delete all the scores
    #[arg(long, default_value_t = false)]
    wipe_scores: bool,

    /// Directory where the themes and the scores are saved
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
    debug!("Options: {args:?}");

    match run(&args) {
        Ok(()) => 0,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Process the options.
fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let data_dir: PathBuf = match &args.data_dir {
        Some(d) => d.clone(),
        None => config::user_data_dir()?,
    };
    let saver_themes: SaverThemes = SaverThemes::new(data_dir.clone());
    let saver_scores: SaverHighScores = SaverHighScores::new(data_dir);
    let mut themes: Themes = saver_themes.get_themes()?;

    //
    // Commands that manage the themes and the scores
    //
    if args.ls {
        if themes.is_empty() {
            println!("No themes");
        }
        for name in themes.names() {
            let count: usize = themes.get(name).map_or(0, |w| w.len());
            println!("{name} ({count} words)");
        }
        return Ok(());
    }

    if let Some([name, body]) = args.add_theme.as_deref() {
        let count: usize = themes.add(name, body)?;
        saver_themes.save_themes(&themes)?;
        println!("Theme {} saved with {count} words", name.trim());
        return Ok(());
    }

    if args.wipe_scores {
        saver_scores.delete_save();
        println!("All the scores have been deleted");
        return Ok(());
    }

    if args.scores {
        print_scores(&saver_scores.get_highscores()?);
        return Ok(());
    }

    //
    // Generate the puzzles
    //
    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("Seed: {seed}");
    let mut rng: StdRng = StdRng::seed_from_u64(seed);

    let theme: String = if !args.words.is_empty() {
        CUSTOM_THEME.to_string()
    } else {
        match &args.theme {
            Some(t) => t.clone(),
            None => themes
                .names()
                .choose(&mut rng)
                .map(|t| t.to_string())
                .ok_or_else(|| ThemeError::UnknownTheme("(no theme available)".to_string()))?,
        }
    };

    let mut puzzles: Vec<Puzzle> = Vec::with_capacity(args.count);
    for i in 0..args.count {
        debug!("Puzzle {i}");
        let words: Vec<String> = if !args.words.is_empty() {
            args.words.clone()
        } else {
            themes.pick_words(&theme, args.word_count, &mut rng)?
        };
        puzzles.push(puzzle::generate_puzzle(&words, &mut rng)?);
    }

    if args.play {
        return play(puzzles, &theme, &saver_scores);
    }

    if args.json {
        if puzzles.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&puzzles[0])?);
        } else {
            println!("{}", serde_json::to_string_pretty(&puzzles)?);
        }
        return Ok(());
    }

    eprintln!("Theme: {theme}  Seed: {seed}");
    for p in &puzzles {
        println!("\n{}", p.grid);
        let words: Vec<&str> = p.entries.iter().map(|e| e.display.as_str()).collect();
        println!("Words: {}", words.join(", "));
        if args.solution {
            for e in &p.entries {
                println!(
                    "  {:<12} {:?} -> {:?}{}",
                    e.display,
                    e.placement.start,
                    e.placement.end,
                    if e.reversed { " (reversed)" } else { "" }
                );
            }
        }
    }
    Ok(())
}

/// Let the player solve the puzzles in the terminal, and record the scores.
fn play(
    puzzles: Vec<Puzzle>,
    theme: &str,
    saver_scores: &SaverHighScores,
) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut app = Application::new(stdin.lock(), io::stdout());

    for p in puzzles {
        let mut game: Game = Game::new(theme, p);
        let duration = match app.play(&mut game)? {
            Outcome::Solved(d) => d,
            Outcome::Quit => {
                app.message("Bye")?;
                return Ok(());
            }
        };

        let Some(username) = app.ask_username()? else {
            continue;
        };
        let mut highscores: HighScores = saver_scores.get_highscores()?;
        match highscores.add_score(theme, &username, duration) {
            Some(position) => {
                if let Err(e) = saver_scores.save_highscores(&highscores) {
                    warn!("Cannot save the scores: {e}");
                }
                app.message(&format!("You are #{position} on the {theme} leaderboard"))?;
            }
            None => app.message("Not fast enough for the leaderboard this time")?,
        }
    }
    Ok(())
}

/// Print the leaderboard.
fn print_scores(highscores: &HighScores) {
    if highscores.is_empty() {
        println!("No scores yet");
        return;
    }
    for theme in highscores.themes() {
        println!("{theme}");
        if let Some(scores) = highscores.get_score(theme) {
            for (i, score) in scores.iter().enumerate() {
                println!(
                    "{:>4}. {:<20} {:>6}  {}",
                    i + 1,
                    score.username,
                    score.time_ms(),
                    score.when_local()
                );
            }
        }
    }
}
