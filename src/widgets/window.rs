/*
window.rs

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

//! Boggle main window.

use gettextrs::gettext;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use adw::prelude::*;
use adw::subclass::prelude::*;
use gtk::{gio, glib};

use super::game_view::BoggleGameView;
use super::start_view::BoggleStartView;
use crate::game::Game;

mod imp {
    use super::*;
    use std::cell::OnceCell;

    #[derive(Debug, Default)]
    pub struct BoggleWindow {
        pub view_stack: adw::ViewStack,
        pub start_view: BoggleStartView,
        pub game_view: OnceCell<BoggleGameView>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for BoggleWindow {
        const NAME: &'static str = "BoggleWindow";
        type Type = super::BoggleWindow;
        type ParentType = adw::ApplicationWindow;
    }

    impl ObjectImpl for BoggleWindow {}
    impl WidgetImpl for BoggleWindow {}
    impl WindowImpl for BoggleWindow {}
    impl ApplicationWindowImpl for BoggleWindow {}
    impl AdwApplicationWindowImpl for BoggleWindow {}
}

glib::wrapper! {
    pub struct BoggleWindow(ObjectSubclass<imp::BoggleWindow>)
        @extends gtk::Widget, gtk::Window, gtk::ApplicationWindow, adw::ApplicationWindow,
        @implements gio::ActionGroup, gio::ActionMap, gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget, gtk::ShortcutManager, gtk::Root, gtk::Native;
}

impl BoggleWindow {
    /// Create the window.
    pub fn new<P: IsA<gtk::Application>>(application: &P, game: &Rc<RefCell<Game>>) -> Self {
        debug!("In new()");
        let obj: BoggleWindow = glib::Object::builder()
            .property("application", application)
            .property("title", gettext("Boggle"))
            .property("default-width", 520)
            .property("default-height", 760)
            .build();
        let imp: &imp::BoggleWindow = obj.imp();

        let game_view: BoggleGameView = BoggleGameView::new(game);
        imp.view_stack.add_named(&imp.start_view, Some("start"));
        imp.view_stack.add_named(&game_view, Some("game"));
        imp.game_view
            .set(game_view)
            .expect("Cannot store the game view in the object");

        let header_bar: adw::HeaderBar = adw::HeaderBar::new();
        header_bar.pack_end(&Self::primary_menu_button());
        let toolbar_view: adw::ToolbarView = adw::ToolbarView::new();
        toolbar_view.add_top_bar(&header_bar);
        toolbar_view.set_content(Some(&imp.view_stack));
        obj.set_content(Some(&toolbar_view));

        obj.go_to_start();
        obj
    }

    fn primary_menu_button() -> gtk::MenuButton {
        let game_section: gio::Menu = gio::Menu::new();
        game_section.append(Some(&gettext("_New Game")), Some("app.new-game"));

        let app_section: gio::Menu = gio::Menu::new();
        app_section.append(Some(&gettext("_About Boggle")), Some("app.about"));
        app_section.append(Some(&gettext("_Quit")), Some("app.quit"));

        let menu: gio::Menu = gio::Menu::new();
        menu.append_section(None, &game_section);
        menu.append_section(None, &app_section);

        gtk::MenuButton::builder()
            .icon_name("open-menu-symbolic")
            .tooltip_text(gettext("Main Menu"))
            .primary(true)
            .menu_model(&menu)
            .build()
    }

    fn game_view(&self) -> &BoggleGameView {
        self.imp()
            .game_view
            .get()
            .expect("Cannot retrieve the game view from the object")
    }

    pub fn go_to_start(&self) {
        let imp: &imp::BoggleWindow = self.imp();

        imp.view_stack.set_visible_child(&imp.start_view);
        imp.start_view.focus_start();
    }

    /// Show the game that the application just started.
    pub fn go_to_game(&self) {
        let imp: &imp::BoggleWindow = self.imp();
        let game_view: &BoggleGameView = self.game_view();

        imp.view_stack.set_visible_child(game_view);
        game_view.start();
    }
}
