/*
main.rs

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

mod adjacency;
mod application;
mod board;
mod cli_options;
mod config;
mod dictionary;
mod game;
mod generator;
mod path;
mod score;
mod style;
mod timer;
mod widgets;

use self::application::BoggleApplication;

use cli_options::{Command, GameOptions};
use config::{GETTEXT_PACKAGE, LOCALEDIR};
use dictionary::WordPool;
use gettextrs::{bind_textdomain_codeset, bindtextdomain, textdomain};
use gtk::glib;
use gtk::prelude::*;

fn main() -> glib::ExitCode {
    // Boggle does not use the option parsing feature provided by GApplication. Clap is used
    // instead.
    let options: GameOptions = match cli_options::parse() {
        Command::Play(o) => o,
        Command::Exit(ret) => return glib::ExitCode::from(ret),
    };

    // Set up gettext translations
    bindtextdomain(GETTEXT_PACKAGE, LOCALEDIR).expect("Unable to bind the text domain");
    bind_textdomain_codeset(GETTEXT_PACKAGE, "UTF-8")
        .expect("Unable to set the text domain encoding");
    textdomain(GETTEXT_PACKAGE).expect("Unable to switch to the text domain");

    // Without words, there is no game to play
    let pool: WordPool = match WordPool::load(&options.dictionary) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("boggle: {e}");
            return glib::ExitCode::from(1);
        }
    };

    let app: BoggleApplication = BoggleApplication::new(&options, pool);

    // Because the arguments are processed by Clap, pass an empty argument list to the GApplication
    let args: Vec<String> = Vec::new();
    app.run_with_args(&args)
}
