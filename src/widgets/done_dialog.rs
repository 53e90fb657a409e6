/*
done_dialog.rs

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

//! Dialog for when the time is up.
//!
//! The dialog emits the `play-again` or the `quit` response. Closing the dialog emits `close`
//! and leaves the finished board on screen.

use formatx::formatx;
use gettextrs::{gettext, ngettext};

use adw::{prelude::*, subclass::prelude::*};
use gtk::glib;

pub const RESPONSE_PLAY_AGAIN: &str = "play-again";
pub const RESPONSE_QUIT: &str = "quit";

mod imp {
    use super::*;

    #[derive(Debug, Default)]
    pub struct BoggleDoneDialog {}

    #[glib::object_subclass]
    impl ObjectSubclass for BoggleDoneDialog {
        const NAME: &'static str = "BoggleDoneDialog";
        type Type = super::BoggleDoneDialog;
        type ParentType = adw::AlertDialog;
    }

    impl ObjectImpl for BoggleDoneDialog {
        fn constructed(&self) {
            self.parent_constructed();

            let obj = self.obj();
            obj.set_heading(Some(&gettext("Time's up!")));
            obj.add_response(RESPONSE_QUIT, &gettext("_Quit"));
            obj.add_response(RESPONSE_PLAY_AGAIN, &gettext("_Play Again"));
            obj.set_response_appearance(RESPONSE_PLAY_AGAIN, adw::ResponseAppearance::Suggested);
            obj.set_default_response(Some(RESPONSE_PLAY_AGAIN));
        }
    }

    impl WidgetImpl for BoggleDoneDialog {}
    impl AdwDialogImpl for BoggleDoneDialog {}
    impl AdwAlertDialogImpl for BoggleDoneDialog {}
}

glib::wrapper! {
    pub struct BoggleDoneDialog(ObjectSubclass<imp::BoggleDoneDialog>)
        @extends gtk::Widget, adw::Dialog, adw::AlertDialog,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl BoggleDoneDialog {
    /// Create the dialog with the final score and the number of words found.
    pub fn new(score: u32, word_count: usize) -> Self {
        let obj: BoggleDoneDialog = glib::Object::builder().build();

        let score_msg: String =
            formatx!(gettext("Your final score is {score}"), score = score).unwrap_or_default();
        let words_msg: String = formatx!(
            ngettext(
                "You found {count} word",
                "You found {count} words",
                word_count as u32
            ),
            count = word_count
        )
        .unwrap_or_default();
        obj.set_body(&format!(
            "{score_msg}\n{words_msg}\n\n{}",
            gettext("Do you want to play again?")
        ));
        obj
    }
}
