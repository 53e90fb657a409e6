/*
game_view.rs

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

//! Manage the game view
//!
//! The view renders the [`Game`] shared with the application: the letter grid, the current word,
//! the score, the clock, and the words found so far.
//! Every player action goes through the game first, and the view then redraws itself from the
//! game state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Instant;

use formatx::formatx;
use gettextrs::gettext;
use log::debug;

use adw::prelude::*;
use adw::subclass::prelude::*;
use glib::clone;
use gtk::{gio, glib};

use crate::board::Cell;
use crate::config::{BOARD_SIZE, FLASH_STEP, FLASH_STEPS, TICK_INTERVAL};
use crate::game::{CheckOutcome, ClockStatus, Game, Highlight};
use crate::style::Flash;
use crate::timer::{self, TimeLevel};
use crate::widgets::done_dialog::{self, BoggleDoneDialog};

const HIGHLIGHTS: [Highlight; 3] = [Highlight::Idle, Highlight::Previous, Highlight::Last];

mod imp {
    use super::*;
    use std::cell::{OnceCell, RefCell};

    #[derive(Debug, Default)]
    pub struct BoggleGameView {
        pub game: OnceCell<Rc<RefCell<Game>>>,
        pub actions: OnceCell<gio::SimpleActionGroup>,

        /// Letter buttons, by cell.
        pub buttons: RefCell<HashMap<Cell, gtk::Button>>,

        /// Clock of the running game. None once the time is up.
        pub clock_source: RefCell<Option<glib::SourceId>>,

        /// Blinking of the last checked word, if still in progress.
        pub flash_source: RefCell<Option<glib::SourceId>>,

        pub toast_overlay: adw::ToastOverlay,

        pub score_label: gtk::Label,
        pub clock_label: gtk::Label,
        pub board_stack: gtk::Stack,
        pub grid: gtk::Grid,
        pub word_label: gtk::Label,
        pub pause_button: gtk::Button,
        pub found_label: gtk::Label,
    }

    #[glib::object_subclass]
    impl ObjectSubclass for BoggleGameView {
        const NAME: &'static str = "BoggleGameView";
        type Type = super::BoggleGameView;
        type ParentType = adw::Bin;
    }

    impl ObjectImpl for BoggleGameView {
        fn constructed(&self) {
            self.parent_constructed();

            debug!("In constructed()");
            let obj = self.obj();
            obj.build_layout();
            obj.setup_gactions();
        }

        fn dispose(&self) {
            if let Some(source) = self.clock_source.take() {
                source.remove();
            }
            if let Some(source) = self.flash_source.take() {
                source.remove();
            }
        }
    }

    impl WidgetImpl for BoggleGameView {}
    impl BinImpl for BoggleGameView {}
}

glib::wrapper! {
    pub struct BoggleGameView(ObjectSubclass<imp::BoggleGameView>)
        @extends gtk::Widget, adw::Bin,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl BoggleGameView {
    /// Create the view for the given game.
    pub fn new(game: &Rc<RefCell<Game>>) -> Self {
        let obj: BoggleGameView = glib::Object::builder().build();
        obj.imp()
            .game
            .set(Rc::clone(game))
            .expect("Cannot store the game data into the object");
        obj
    }

    fn game(&self) -> &Rc<RefCell<Game>> {
        self.imp()
            .game
            .get()
            .expect("Cannot retrieve the game data from the object")
    }

    fn build_layout(&self) {
        let imp: &imp::BoggleGameView = self.imp();

        // Score and clock
        imp.score_label.set_halign(gtk::Align::Start);
        imp.score_label.set_hexpand(true);
        imp.score_label.add_css_class("title-3");
        imp.clock_label.set_halign(gtk::Align::End);
        imp.clock_label.add_css_class("clock");
        let status_box: gtk::Box = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        status_box.append(&imp.score_label);
        status_box.append(&imp.clock_label);

        // Letter grid
        imp.grid.add_css_class("letter-grid");
        imp.grid.set_row_spacing(6);
        imp.grid.set_column_spacing(6);
        imp.grid.set_row_homogeneous(true);
        imp.grid.set_column_homogeneous(true);
        imp.grid.set_halign(gtk::Align::Center);
        {
            let mut buttons = imp.buttons.borrow_mut();
            for row in 0..BOARD_SIZE {
                for col in 0..BOARD_SIZE {
                    let cell: Cell = Cell::new(row, col);
                    let button: gtk::Button = gtk::Button::new();
                    button.add_css_class(&Highlight::Idle.to_string());
                    button.connect_clicked(clone!(
                        #[weak(rename_to = mself)]
                        self,
                        move |_| mself.cell_clicked(cell)
                    ));
                    imp.grid.attach(&button, col as i32, row as i32, 1, 1);
                    buttons.insert(cell, button);
                }
            }
        }

        // The board is hidden while the game is paused
        let resume_button: gtk::Button = gtk::Button::builder()
            .label(gettext("_Resume"))
            .use_underline(true)
            .action_name("game-view.pause-resume")
            .halign(gtk::Align::Center)
            .build();
        resume_button.add_css_class("pill");
        let paused_page: adw::StatusPage = adw::StatusPage::builder()
            .icon_name("media-playback-pause-symbolic")
            .title(gettext("Paused"))
            .child(&resume_button)
            .build();
        imp.board_stack.add_named(&imp.grid, Some("board"));
        imp.board_stack.add_named(&paused_page, Some("paused"));
        imp.board_stack
            .set_transition_type(gtk::StackTransitionType::Crossfade);

        imp.word_label.add_css_class("current-word");

        // Word buttons
        let check_button: gtk::Button = gtk::Button::builder()
            .label(gettext("_Check Word"))
            .use_underline(true)
            .action_name("game-view.check-word")
            .build();
        check_button.add_css_class("pill");
        check_button.add_css_class("suggested-action");
        let clear_button: gtk::Button = gtk::Button::builder()
            .label(gettext("C_lear Choice"))
            .use_underline(true)
            .action_name("game-view.clear-word")
            .build();
        clear_button.add_css_class("pill");
        imp.pause_button.set_icon_name("media-playback-pause-symbolic");
        imp.pause_button
            .set_tooltip_text(Some(&gettext("Pause the game")));
        imp.pause_button.set_action_name(Some("game-view.pause-resume"));
        imp.pause_button.add_css_class("circular");
        let button_box: gtk::Box = gtk::Box::new(gtk::Orientation::Horizontal, 12);
        button_box.set_halign(gtk::Align::Center);
        button_box.append(&check_button);
        button_box.append(&clear_button);
        button_box.append(&imp.pause_button);

        imp.found_label.set_wrap(true);
        imp.found_label.set_xalign(0.0);
        imp.found_label.set_selectable(true);

        let content: gtk::Box = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(18)
            .margin_top(24)
            .margin_bottom(24)
            .margin_start(12)
            .margin_end(12)
            .build();
        content.append(&status_box);
        content.append(&imp.board_stack);
        content.append(&imp.word_label);
        content.append(&button_box);
        content.append(&imp.found_label);

        let clamp: adw::Clamp = adw::Clamp::builder()
            .maximum_size(480)
            .child(&content)
            .build();
        let scrolled: gtk::ScrolledWindow = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&clamp)
            .build();
        imp.toast_overlay.set_child(Some(&scrolled));
        self.set_child(Some(&imp.toast_overlay));
    }

    fn setup_gactions(&self) {
        let group = gio::SimpleActionGroup::new();

        let check_word_action = gio::SimpleAction::new("check-word", None);
        check_word_action.connect_activate(clone!(
            #[weak(rename_to = mself)]
            self,
            move |_, _| mself.check_word_action()
        ));
        group.add_action(&check_word_action);

        let clear_word_action = gio::SimpleAction::new("clear-word", None);
        clear_word_action.connect_activate(clone!(
            #[weak(rename_to = mself)]
            self,
            move |_, _| mself.clear_word_action()
        ));
        group.add_action(&clear_word_action);

        let pause_action = gio::SimpleAction::new("pause-resume", None);
        pause_action.connect_activate(clone!(
            #[weak(rename_to = mself)]
            self,
            move |_, _| mself.pause_resume_action()
        ));
        group.add_action(&pause_action);

        self.insert_action_group("game-view", Some(&group));
        self.imp()
            .actions
            .set(group)
            .expect("Cannot store the action group in the object");
    }

    fn set_action_enabled(&self, name: &str, enabled: bool) {
        if let Some(action) = self
            .imp()
            .actions
            .get()
            .and_then(|g| g.lookup_action(name))
            .and_downcast::<gio::SimpleAction>()
        {
            action.set_enabled(enabled);
        }
    }

    /// Enable or disable the word actions. Pausing stays available while the game runs.
    fn sensitive(&self, sensitive: bool, game: &Game) {
        self.set_action_enabled("check-word", sensitive);
        self.set_action_enabled("clear-word", sensitive);
        self.set_action_enabled("pause-resume", game.is_running());
    }

    /// Display a game that the application just started.
    pub fn start(&self) {
        let imp: &imp::BoggleGameView = self.imp();

        imp.board_stack.set_visible_child_name("board");
        imp.pause_button.set_icon_name("media-playback-pause-symbolic");
        imp.pause_button.set_tooltip_text(Some(&gettext("Pause the game")));
        self.cancel_flash();
        {
            let game = self.game().borrow();
            self.sensitive(game.is_running(), &game);
            let remaining_secs: u64 = game.remaining_secs(Instant::now());
            self.update_clock(remaining_secs, TimeLevel::from_secs(remaining_secs));
        }
        self.refresh();
        self.start_clock();
    }

    fn start_clock(&self) {
        let imp: &imp::BoggleGameView = self.imp();

        if let Some(source) = imp.clock_source.take() {
            source.remove();
        }
        let source: glib::SourceId = glib::timeout_add_local(
            TICK_INTERVAL,
            clone!(
                #[weak(rename_to = mself)]
                self,
                #[upgrade_or]
                glib::ControlFlow::Break,
                move || mself.tick()
            ),
        );
        imp.clock_source.replace(Some(source));
    }

    fn tick(&self) -> glib::ControlFlow {
        let status: ClockStatus = self.game().borrow_mut().tick(Instant::now());

        self.update_clock(status.remaining_secs, status.level);
        if !status.expired_now {
            return glib::ControlFlow::Continue;
        }

        // GLib removes the source when the callback returns Break
        self.imp().clock_source.take();
        {
            let game = self.game().borrow();
            self.sensitive(false, &game);
        }
        self.refresh();
        self.show_done_dialog();
        glib::ControlFlow::Break
    }

    fn update_clock(&self, remaining_secs: u64, level: TimeLevel) {
        let imp: &imp::BoggleGameView = self.imp();
        let time_str: String = match level {
            TimeLevel::Expired => gettext("Time's up!"),
            _ => {
                let (minute, second) = timer::minutes_seconds(remaining_secs);
                format!("{minute:02}:{second:02}")
            }
        };
        let level_class: String = level.to_string();

        imp.clock_label.set_text(&time_str);
        imp.clock_label
            .set_css_classes(&["clock", level_class.as_str()]);
    }

    /// Redraw the grid, the current word, the score and the found words from the game state.
    pub fn refresh(&self) {
        let imp: &imp::BoggleGameView = self.imp();
        let game = self.game().borrow();
        let buttons = imp.buttons.borrow();

        for view in game.cell_views() {
            if let Some(button) = buttons.get(&view.cell) {
                button.set_label(&view.letter.to_string());
                button.set_sensitive(view.selectable);
                for h in HIGHLIGHTS {
                    button.remove_css_class(&h.to_string());
                }
                button.add_css_class(&view.highlight.to_string());
            }
        }

        imp.word_label.set_text(game.current_word());
        imp.score_label.set_text(
            &formatx!(gettext("Score: {score}"), score = game.score()).unwrap_or_default(),
        );
        let words: Vec<&str> = game
            .found_words()
            .iter()
            .map(|f| f.word.as_str())
            .collect();
        imp.found_label.set_text(
            &formatx!(gettext("Found words: {words}"), words = words.join(", "))
                .unwrap_or_default(),
        );
        let points: Vec<String> = game
            .found_words()
            .iter()
            .map(|f| {
                formatx!(gettext("{word}: {points} points"), word = &f.word, points = f.points)
                    .unwrap_or_default()
            })
            .collect();
        imp.found_label
            .set_tooltip_text((!points.is_empty()).then(|| points.join("\n")).as_deref());
    }

    fn show_toast(&self, msg: &str) {
        let toast: adw::Toast = adw::Toast::new(msg);
        toast.set_timeout(2);
        self.imp().toast_overlay.add_toast(toast);
    }

    /// Finish the game at once when a player event found that the time is up.
    fn end_if_expired(&self) {
        if self.game().borrow().is_running() {
            return;
        }
        if let Some(source) = self.imp().clock_source.take() {
            source.remove();
            self.tick();
        }
    }

    fn cell_clicked(&self, cell: Cell) {
        let result = self.game().borrow_mut().click(cell, Instant::now());
        if let Err(e) = result {
            debug!("Ignoring the click: {e}");
        }
        self.refresh();
        self.end_if_expired();
    }

    fn check_word_action(&self) {
        let result = self.game().borrow_mut().check(Instant::now());
        match result {
            Ok(CheckOutcome::Match {
                word,
                points,
                cells,
            }) => {
                self.flash(&cells, Flash::Match);
                self.show_toast(
                    &formatx!(gettext("{word}: +{points} points"), word = word, points = points)
                        .unwrap_or_default(),
                );
            }
            Ok(CheckOutcome::NoMatch { word, cells }) => {
                self.flash(&cells, Flash::Miss);
                if !word.is_empty() {
                    self.show_toast(
                        &formatx!(gettext("{word} is not in the word list"), word = word)
                            .unwrap_or_default(),
                    );
                }
            }
            Err(e) => debug!("Ignoring the check: {e}"),
        }
        self.refresh();
        self.end_if_expired();
    }

    fn clear_word_action(&self) {
        let result = self.game().borrow_mut().clear(Instant::now());
        if let Err(e) = result {
            debug!("Ignoring the clear: {e}");
        }
        self.refresh();
        self.end_if_expired();
    }

    fn pause_resume_action(&self) {
        let imp: &imp::BoggleGameView = self.imp();
        let now: Instant = Instant::now();
        let paused: bool = {
            let mut game = self.game().borrow_mut();
            let result = if game.is_paused() {
                game.resume(now)
            } else {
                game.pause(now)
            };
            if let Err(e) = result {
                debug!("Ignoring pause/resume: {e}");
                return;
            }
            let paused: bool = game.is_paused();
            self.sensitive(!paused, &game);
            paused
        };

        if paused {
            imp.board_stack.set_visible_child_name("paused");
            imp.pause_button
                .set_icon_name("media-playback-start-symbolic");
            imp.pause_button
                .set_tooltip_text(Some(&gettext("Resume the game")));
        } else {
            imp.board_stack.set_visible_child_name("board");
            imp.pause_button
                .set_icon_name("media-playback-pause-symbolic");
            imp.pause_button
                .set_tooltip_text(Some(&gettext("Pause the game")));
        }
        self.refresh();
    }

    /// Stop the blinking in progress, if any, and remove its colour from the grid.
    fn cancel_flash(&self) {
        let imp: &imp::BoggleGameView = self.imp();

        if let Some(source) = imp.flash_source.take() {
            source.remove();
        }
        let classes: [String; 2] = [Flash::Match.to_string(), Flash::Miss.to_string()];
        for button in imp.buttons.borrow().values() {
            for class in &classes {
                button.remove_css_class(class);
            }
        }
    }

    /// Blink the given cells without blocking the main loop.
    fn flash(&self, cells: &[Cell], flash: Flash) {
        self.cancel_flash();

        let buttons: Vec<gtk::Button> = {
            let map = self.imp().buttons.borrow();
            cells.iter().filter_map(|c| map.get(c).cloned()).collect()
        };
        if buttons.is_empty() {
            return;
        }

        let class: String = flash.to_string();
        for button in &buttons {
            button.add_css_class(&class);
        }
        // Even steps show the colour, odd steps hide it
        let mut step: u32 = 1;
        let source: glib::SourceId = glib::timeout_add_local(
            FLASH_STEP,
            clone!(
                #[weak(rename_to = mself)]
                self,
                #[upgrade_or]
                glib::ControlFlow::Break,
                move || {
                    for button in &buttons {
                        if step % 2 == 0 {
                            button.add_css_class(&class);
                        } else {
                            button.remove_css_class(&class);
                        }
                    }
                    step += 1;
                    if step < FLASH_STEPS * 2 {
                        glib::ControlFlow::Continue
                    } else {
                        // GLib removes the source when the callback returns Break
                        mself.imp().flash_source.take();
                        glib::ControlFlow::Break
                    }
                }
            ),
        );
        self.imp().flash_source.replace(Some(source));
    }

    fn show_done_dialog(&self) {
        let (score, word_count) = {
            let game = self.game().borrow();
            (game.score(), game.found_words().len())
        };
        let dialog: BoggleDoneDialog = BoggleDoneDialog::new(score, word_count);

        dialog.connect_response(
            None,
            clone!(
                #[weak(rename_to = obj)]
                self,
                move |_w, response_id| {
                    let action: &str = match response_id {
                        done_dialog::RESPONSE_PLAY_AGAIN => "app.new-game",
                        done_dialog::RESPONSE_QUIT => "app.quit",
                        _ => return,
                    };
                    obj.activate_action(action, None)
                        .expect("Cannot activate the application action");
                }
            ),
        );
        dialog.present(Some(self));
    }
}
