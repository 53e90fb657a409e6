/*
config.rs

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

//! Build and game constants.

use std::time::Duration;

pub const APPLICATION_ID: &str = "io.github.boggle.Boggle";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GETTEXT_PACKAGE: &str = "boggle";

/// Directory of the translation catalogs. Packagers can set `BOGGLE_LOCALEDIR` at build time.
pub const LOCALEDIR: &str = match option_env!("BOGGLE_LOCALEDIR") {
    Some(dir) => dir,
    None => "/usr/share/locale",
};

pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (C) 2025 The Boggle Authors
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Number of rows and columns of the grid.
pub const BOARD_SIZE: usize = 4;

/// Default dictionary file, relative to the current directory.
pub const DEFAULT_DICTIONARY: &str = "boggle_dict.txt";

/// Default length of a game in seconds.
pub const DEFAULT_DURATION_SEC: u64 = 180;

/// The clock turns orange at this number of remaining seconds or fewer.
pub const LOW_TIME_SEC: u64 = 20;

/// The clock turns red at this number of remaining seconds or fewer.
pub const CRITICAL_TIME_SEC: u64 = 10;

/// Interval between the clock updates.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Duration of each step of the flash animation after checking a word.
pub const FLASH_STEP: Duration = Duration::from_millis(150);

/// Number of on/off steps of the flash animation.
pub const FLASH_STEPS: u32 = 3;
