/*
start_view.rs

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

//! Manage the initial view, which invites the player to start the first game.

use gettextrs::gettext;

use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::glib;

mod imp {
    use super::*;

    #[derive(Debug, Default)]
    pub struct BoggleStartView {
        pub start_button: gtk::Button,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for BoggleStartView {
        const NAME: &'static str = "BoggleStartView";
        type Type = super::BoggleStartView;
        type ParentType = adw::Bin;
    }

    impl ObjectImpl for BoggleStartView {
        fn constructed(&self) {
            self.parent_constructed();

            self.start_button.set_label(&gettext("Start Game!"));
            self.start_button.set_action_name(Some("app.start-game"));
            self.start_button.set_halign(gtk::Align::Center);
            self.start_button.add_css_class("pill");
            self.start_button.add_css_class("suggested-action");

            let status_page: adw::StatusPage = adw::StatusPage::builder()
                .icon_name("accessories-dictionary-symbolic")
                .title(gettext("Welcome to Boggle!"))
                .description(gettext(
                    "Find as many words as you can in the grid before the time runs out",
                ))
                .child(&self.start_button)
                .build();
            self.obj().set_child(Some(&status_page));
        }
    }

    impl WidgetImpl for BoggleStartView {}
    impl BinImpl for BoggleStartView {}
}

glib::wrapper! {
    pub struct BoggleStartView(ObjectSubclass<imp::BoggleStartView>)
        @extends gtk::Widget, adw::Bin,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Default for BoggleStartView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoggleStartView {
    /// Create the view.
    pub fn new() -> Self {
        glib::Object::builder().build()
    }

    /// Give the focus to the start button.
    pub fn focus_start(&self) {
        self.imp().start_button.grab_focus();
    }
}
