/*
application.rs

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

use gettextrs::gettext;
use log::debug;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::WeakRef;
use gtk::{gio, glib};

use crate::board::Board;
use crate::cli_options::GameOptions;
use crate::config;
use crate::dictionary::WordPool;
use crate::game::{Game, SessionState};
use crate::generator;
use crate::style;
use crate::widgets::window::BoggleWindow;

mod imp {
    use super::*;
    use std::cell::OnceCell;

    #[derive(Debug, Default)]
    pub struct BoggleApplication {
        /// The [`BoggleWindow`] object.
        pub window: OnceCell<WeakRef<BoggleWindow>>,

        /// The [`Game`] object, shared with the game view.
        pub game: OnceCell<Rc<RefCell<Game>>>,

        /// Random generator for the boards.
        pub rng: OnceCell<RefCell<StdRng>>,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for BoggleApplication {
        const NAME: &'static str = "BoggleApplication";
        type Type = super::BoggleApplication;
        type ParentType = adw::Application;
    }

    impl ApplicationImpl for BoggleApplication {
        // A second launch of the application only presents the existing window
        fn activate(&self) {
            let application = self.obj();
            let window: BoggleWindow = application.get_main_window();
            window.present();
        }

        fn startup(&self) {
            self.parent_startup();

            let application = self.obj();

            style::load_css();
            application.setup_gactions();

            let window: BoggleWindow = BoggleWindow::new(&*application, application.game());
            self.window
                .set(window.downgrade())
                .expect("Failed to initialize the application window");

            // No game to replace yet
            application.set_action_enabled("new-game", false);

            application.set_accels_for_action("app.quit", &["<Primary>q"]);
            application.set_accels_for_action("app.new-game", &["<Primary>n"]);
            application.set_accels_for_action("game-view.check-word", &["Return", "KP_Enter"]);
            application.set_accels_for_action("game-view.clear-word", &["Escape"]);
            application.set_accels_for_action("game-view.pause-resume", &["<Primary>p"]);
        }

        fn shutdown(&self) {
            self.parent_shutdown();

            if let Some(game) = self.game.get() {
                let game = game.borrow();
                debug!(
                    "Leaving with score = {}, {} words found",
                    game.score(),
                    game.found_words().len()
                );
            }
        }
    }

    impl ObjectImpl for BoggleApplication {}
    impl GtkApplicationImpl for BoggleApplication {}
    impl AdwApplicationImpl for BoggleApplication {}
}

glib::wrapper! {
    pub struct BoggleApplication(ObjectSubclass<imp::BoggleApplication>)
        @extends gio::Application, gtk::Application, adw::Application,
        @implements gio::ActionGroup, gio::ActionMap;
}

impl BoggleApplication {
    /// Create an [`BoggleApplication`] object.
    ///
    /// The application plays with the words from the given pool, for the duration and with the
    /// board generator that the options define.
    pub fn new(options: &GameOptions, pool: WordPool) -> Self {
        let obj: BoggleApplication = glib::Object::builder()
            .property("application-id", config::APPLICATION_ID)
            .build();
        let imp: &imp::BoggleApplication = obj.imp();

        imp.game
            .set(Rc::new(RefCell::new(Game::new(pool, options.duration))))
            .expect("Cannot store the game data into the object");
        imp.rng
            .set(RefCell::new(options.board_rng()))
            .expect("Cannot store the board generator into the object");
        obj
    }

    fn setup_gactions(&self) {
        let actions = [
            gio::ActionEntryBuilder::new("about")
                .activate(|app: &Self, _, _| app.show_about())
                .build(),
            gio::ActionEntryBuilder::new("quit")
                .activate(|app: &Self, _, _| app.quit())
                .build(),
            gio::ActionEntryBuilder::new("start-game")
                .activate(move |app: &Self, _, _| app.start_game())
                .build(),
            gio::ActionEntryBuilder::new("new-game")
                .activate(move |app: &Self, _, _| app.new_game())
                .build(),
        ];

        self.add_action_entries(actions);
    }

    fn set_action_enabled(&self, name: &str, enabled: bool) {
        if let Some(action) = self
            .lookup_action(name)
            .and_downcast::<gio::SimpleAction>()
        {
            action.set_enabled(enabled);
        }
    }

    fn get_main_window(&self) -> BoggleWindow {
        self.imp()
            .window
            .get()
            .and_then(|w| w.upgrade())
            .expect("Cannot retrieve the application window")
    }

    fn game(&self) -> &Rc<RefCell<Game>> {
        self.imp()
            .game
            .get()
            .expect("Cannot retrieve the game data from the object")
    }

    fn roll_board(&self) -> Board {
        let mut rng = self
            .imp()
            .rng
            .get()
            .expect("Cannot retrieve the board generator from the object")
            .borrow_mut();
        generator::roll_board(&mut *rng)
    }

    fn show_about(&self) {
        let about: adw::AboutDialog = adw::AboutDialog::builder()
            .application_name(gettext("Boggle"))
            .application_icon(config::APPLICATION_ID)
            .developer_name("The Boggle Authors")
            .version(config::VERSION)
            .comments(gettext(
                "Find words in a grid of letters before the time runs out",
            ))
            // Translators: Replace "translator-credits" with your name/username, and optionally
            // an email or URL.
            .translator_credits(gettext("translator-credits"))
            .copyright("© 2025 The Boggle Authors")
            .license_type(gtk::License::Gpl30)
            .build();
        about.present(self.active_window().as_ref());
    }

    fn start_game(&self) {
        debug!("Start the first game");
        let board: Board = self.roll_board();
        let result = self.game().borrow_mut().start(board, Instant::now());

        match result {
            Ok(()) => {
                self.set_action_enabled("new-game", true);
                self.set_action_enabled("start-game", false);
                self.get_main_window().go_to_game();
            }
            Err(e) => debug!("Cannot start the game: {e}"),
        }
    }

    /// Play again once the time is up, or give up the running game for a new one.
    fn new_game(&self) {
        debug!("Start a new game");
        let board: Board = self.roll_board();
        let now: Instant = Instant::now();
        let result = {
            let mut game = self.game().borrow_mut();
            if game.state() == SessionState::Expired {
                game.restart(board, now)
            } else {
                game.new_game(board, now);
                Ok(())
            }
        };

        match result {
            Ok(()) => self.get_main_window().go_to_game(),
            Err(e) => debug!("Cannot start a new game: {e}"),
        }
    }
}
