/*
cli_options.rs

Copyright 2025 The Boggle Authors

This file is part of Boggle.

Boggle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Boggle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Boggle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Most options tune the game: the dictionary file, the length of a game, and the seed of the
//! board generator.
//! The `--print-board` option is intended for developers: it prints a board and exits without
//! opening the window.
//!
//! # Examples
//!
//! Print a board. With the same seed, the same board is printed again:
//!
//! ```
//! $ boggle --seed 42 --print-board
//! E O T N
//! A R S E
//! B H T L
//! I K D U
//! ```
//!
//! Play one-minute games with another dictionary:
//!
//! ```
//! $ boggle -D /usr/share/dict/words -t 60
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{COPYRIGHT_NOTICE, DEFAULT_DICTIONARY, DEFAULT_DURATION_SEC};
use crate::generator;

/// Find words in a grid of letters before the time runs out.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Dictionary file, with one word per line
    #[arg(short = 'D', long, default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,

    /// Length of a game in seconds
    #[arg(short, long, default_value_t = DEFAULT_DURATION_SEC,
          value_parser = clap::value_parser!(u64).range(1..))]
    time: u64,

    /// Seed for the board generator, to get the same boards again
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print a random board and exit
    #[arg(short = 'b', long, default_value_t = false)]
    print_board: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Game options that the command line provides.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Path to the dictionary file.
    pub dictionary: PathBuf,

    /// Length of a game.
    pub duration: Duration,

    /// Seed for the board generator. The generator is seeded from the OS when None.
    pub seed: Option<u64>,
}

impl GameOptions {
    /// Create the random generator for the boards.
    pub fn board_rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }
}

impl From<&Args> for GameOptions {
    fn from(args: &Args) -> Self {
        Self {
            dictionary: args.dictionary.clone(),
            duration: Duration::from_secs(args.time),
            seed: args.seed,
        }
    }
}

/// What to do after parsing the command line.
#[derive(Debug)]
pub enum Command {
    /// Open the window and play.
    Play(GameOptions),

    /// Exit with the given status code. The command line has already been processed.
    Exit(u8),
}

/// Parse and process command-line options.
pub fn parse() -> Command {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("Command line: {args:?}");

    process(&args)
}

fn process(args: &Args) -> Command {
    let options: GameOptions = GameOptions::from(args);

    if args.print_board {
        let board = generator::roll_board(&mut options.board_rng());
        print!("{board}");
        return Command::Exit(0);
    }
    Command::Play(options)
}
