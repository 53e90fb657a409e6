/*
style.rs

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

//! Stylesheet for the letter grid and the clock.
//!
//! The class names match the [`Highlight`](crate::game::Highlight) and
//! [`TimeLevel`](crate::timer::TimeLevel) string forms, so that the widgets can apply
//! `level.to_string()` directly.

use log::debug;
use strum_macros::Display;

use gtk::gdk;

/// Colour of the cells when the word is checked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Flash {
    #[strum(serialize = "flash-match")]
    Match,

    #[strum(serialize = "flash-miss")]
    Miss,
}

const CSS: &str = "
.letter-grid button {
    min-width: 64px;
    min-height: 64px;
    font-size: 26px;
    font-weight: bold;
}

.letter-grid button.cell-idle {
    background: lavender;
    color: black;
}

.letter-grid button.cell-idle:disabled {
    background: alpha(lavender, 0.5);
    color: alpha(black, 0.5);
}

.letter-grid button.cell-idle:hover:not(:disabled) {
    background: white;
}

.letter-grid button.cell-previous {
    background: #fcd481;
    color: black;
}

.letter-grid button.cell-last {
    background: #ffb821;
    color: black;
}

.letter-grid button.flash-match {
    background: #66cd00;
    color: white;
}

.letter-grid button.flash-miss {
    background: #e01b24;
    color: white;
}

.clock {
    font-size: 22px;
    font-weight: bold;
    font-feature-settings: \"tnum\";
}

.clock.time-low {
    color: #ff7800;
}

.clock.time-critical {
    color: #e01b24;
}

.clock.time-expired {
    color: #1c71d8;
}

.current-word {
    font-size: 20px;
    letter-spacing: 4px;
}
";

/// Install the stylesheet for the whole display.
pub fn load_css() {
    match gdk::Display::default() {
        Some(display) => {
            let provider: gtk::CssProvider = gtk::CssProvider::new();
            provider.load_from_string(CSS);
            gtk::style_context_add_provider_for_display(
                &display,
                &provider,
                gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
            );
        }
        None => debug!("Cannot get display: skipping CSS styling"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Highlight;
    use crate::timer::TimeLevel;

    #[test]
    fn every_class_has_a_rule() {
        let classes: Vec<String> = vec![
            Highlight::Idle.to_string(),
            Highlight::Previous.to_string(),
            Highlight::Last.to_string(),
            Flash::Match.to_string(),
            Flash::Miss.to_string(),
            TimeLevel::Low.to_string(),
            TimeLevel::Critical.to_string(),
            TimeLevel::Expired.to_string(),
        ];
        for class in classes {
            assert!(CSS.contains(&format!(".{class}")), "no rule for {class}");
        }
    }
}
