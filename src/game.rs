/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object is the only owner of the game state: the board, the path that the player
//! is building, the words that can still be found, the found words, the score, and the clock.
//! The widgets send it discrete events ([`Game::click`], [`Game::check`], [`Game::clear`],
//! [`Game::tick`]...) and redraw themselves from [`Game::cell_views`] and the other getters.
//!
//! A game goes through the [`SessionState::NotStarted`], [`SessionState::Running`], and
//! [`SessionState::Expired`] states. Once expired, [`Game::restart`] starts the next game.

use log::debug;
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};
use strum_macros::Display;

use crate::adjacency::{self, Illegal, Move};
use crate::board::{Board, Cell};
use crate::dictionary::WordPool;
use crate::path::Path;
use crate::score::Score;
use crate::timer::{SessionClock, TimeLevel};

/// Life cycle of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    Running,
    Expired,
}

/// Type of errors for the player events.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The cell cannot be selected or deselected.
    IllegalSelection(Cell, Illegal),

    /// The game is not running (not started yet or time is up).
    NotRunning,

    /// The game is paused.
    Paused,

    /// A game is already started.
    AlreadyStarted,

    /// Restarting is only possible once the time is up.
    NotExpired,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::IllegalSelection(cell, reason) => {
                write!(f, "illegal selection of cell {cell}: {reason}")
            }
            GameError::NotRunning => write!(f, "the game is not running"),
            GameError::Paused => write!(f, "the game is paused"),
            GameError::AlreadyStarted => write!(f, "the game is already started"),
            GameError::NotExpired => write!(f, "the game is not over yet"),
        }
    }
}

impl Error for GameError {}

/// Word that the player found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,

    /// Points that the word earned.
    pub points: u32,
}

/// Result of checking the current word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The word was in the dictionary. The path has been cleared, but its cells are returned so
    /// that they can be highlighted.
    Match {
        word: String,
        points: u32,
        cells: Vec<Cell>,
    },

    /// The word is not in the dictionary, or has already been found. The path is kept so that the
    /// player can fix it.
    NoMatch { word: String, cells: Vec<Cell> },
}

/// Highlight of a cell. The value is used as a CSS class for the cell button.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Highlight {
    /// The cell is not in the path.
    #[strum(serialize = "cell-idle")]
    Idle,

    /// The cell is in the path, but is not the last one.
    #[strum(serialize = "cell-previous")]
    Previous,

    /// The cell is the last one of the path.
    #[strum(serialize = "cell-last")]
    Last,
}

/// What the grid must display for a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CellView {
    pub cell: Cell,
    pub letter: char,

    /// Whether the player can click the cell, either to add it to the path or to remove it.
    pub selectable: bool,
    pub highlight: Highlight,
}

/// Status of the clock after a tick.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ClockStatus {
    /// Remaining time in whole seconds, rounded up.
    pub remaining_secs: u64,
    pub level: TimeLevel,

    /// Whether the game expired since the previous tick. This is true only once per game.
    pub expired_now: bool,
}

/// Manage the status of the game in progress.
#[derive(Debug)]
pub struct Game {
    state: SessionState,

    /// Board of the current game. None until the first game starts.
    board: Option<Board>,

    /// Cells that the player is selecting.
    path: Path,

    /// Words that can still be found.
    pool: WordPool,

    /// Words found during the current game, in order.
    found: Vec<FoundWord>,

    score: Score,

    /// Length of a game.
    duration: Duration,

    clock: Option<SessionClock>,

    /// Clock level at the last tick. Used to log level changes only.
    level: TimeLevel,

    /// Whether a tick already reported the end of the current game.
    expiry_reported: bool,
}

impl Game {
    /// Create a [`Game`] object.
    pub fn new(pool: WordPool, duration: Duration) -> Self {
        Self {
            state: SessionState::NotStarted,
            board: None,
            path: Path::new(),
            pool,
            found: Vec::new(),
            score: Score::new(),
            duration,
            clock: None,
            level: TimeLevel::Normal,
            expiry_reported: false,
        }
    }

    /// Start the first game.
    pub fn start(&mut self, board: Board, now: Instant) -> Result<(), GameError> {
        if self.state != SessionState::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        self.begin(board, now);
        Ok(())
    }

    /// Start the next game once the time is up.
    ///
    /// The words found during the previous game can be found again.
    pub fn restart(&mut self, board: Board, now: Instant) -> Result<(), GameError> {
        if self.state != SessionState::Expired {
            return Err(GameError::NotExpired);
        }
        self.begin(board, now);
        Ok(())
    }

    /// Start a game whatever the current state is. A running game is ended first.
    pub fn new_game(&mut self, board: Board, now: Instant) {
        self.end();
        self.begin(board, now);
    }

    /// End a running game before its time is up.
    pub fn end(&mut self) {
        if self.state == SessionState::Running {
            debug!("Ending the game, score = {}", self.score.get());
            self.expire();
        }
    }

    fn begin(&mut self, board: Board, now: Instant) {
        // Found words only go back to the pool now, so that they cannot be found twice in the
        // same game.
        self.pool.restore(self.found.drain(..).map(|f| f.word));
        self.score.reset();
        self.path.clear();
        self.board = Some(board);
        self.clock = Some(SessionClock::start(self.duration, now));
        self.level = TimeLevel::Normal;
        self.expiry_reported = false;
        self.state = SessionState::Running;
        debug!(
            "Game started: {}s, {} words in the pool",
            self.duration.as_secs(),
            self.pool.len()
        );
    }

    fn expire(&mut self) {
        self.state = SessionState::Expired;
        self.level = TimeLevel::Expired;
        self.path.clear();
        self.clock = None;
    }

    /// Expire the game if its deadline has passed.
    fn expire_if_due(&mut self, now: Instant) {
        if self.state == SessionState::Running
            && self.clock.as_ref().is_some_and(|c| c.is_expired(now))
        {
            debug!("Time is up, final score = {}", self.score.get());
            self.expire();
        }
    }

    /// Whether the player can interact with the board, without looking at the clock.
    fn is_playable(&self) -> bool {
        self.state == SessionState::Running && !self.is_paused()
    }

    /// Verify that the player can interact with the board at `now`.
    ///
    /// An event that arrives after the deadline expires the game, even if no tick did it yet.
    fn ensure_playable(&mut self, now: Instant) -> Result<(), GameError> {
        self.expire_if_due(now);
        if self.state != SessionState::Running {
            return Err(GameError::NotRunning);
        }
        if self.is_paused() {
            return Err(GameError::Paused);
        }
        Ok(())
    }

    /// Process a click on a cell: add the cell to the path, or remove it if it is the last cell.
    ///
    /// Return which of the two happened.
    pub fn click(&mut self, cell: Cell, now: Instant) -> Result<Move, GameError> {
        self.ensure_playable(now)?;
        let board: &Board = self.board.as_ref().ok_or(GameError::NotRunning)?;
        match adjacency::classify(board, &self.path, cell) {
            Ok(Move::Unwind) => {
                self.deselect(cell, now)?;
                Ok(Move::Unwind)
            }
            Ok(m) => {
                self.select(cell, now)?;
                Ok(m)
            }
            Err(reason) => {
                debug!("Click on {cell} rejected: {reason}");
                Err(GameError::IllegalSelection(cell, reason))
            }
        }
    }

    /// Add a cell to the path.
    pub fn select(&mut self, cell: Cell, now: Instant) -> Result<(), GameError> {
        self.ensure_playable(now)?;
        let board: &Board = self.board.as_ref().ok_or(GameError::NotRunning)?;
        let letter: char = match adjacency::classify(board, &self.path, cell) {
            Ok(Move::Start | Move::Extend) => board
                .letter(cell)
                .ok_or(GameError::IllegalSelection(cell, Illegal::OutOfBounds))?,
            Ok(Move::Unwind) => {
                return Err(GameError::IllegalSelection(cell, Illegal::AlreadySelected));
            }
            Err(reason) => return Err(GameError::IllegalSelection(cell, reason)),
        };
        self.path.push(cell, letter);
        debug!("Selected {cell}: current word = {}", self.path.word());
        Ok(())
    }

    /// Remove the last cell from the path.
    pub fn deselect(&mut self, cell: Cell, now: Instant) -> Result<(), GameError> {
        self.ensure_playable(now)?;
        if self.path.last() != Some(cell) {
            return Err(GameError::IllegalSelection(cell, Illegal::NotLast));
        }
        self.path.pop();
        debug!("Deselected {cell}: current word = {}", self.path.word());
        Ok(())
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self, now: Instant) -> Result<(), GameError> {
        self.ensure_playable(now)?;
        self.path.clear();
        Ok(())
    }

    /// Check whether the current word is in the dictionary.
    ///
    /// A found word is removed from the dictionary, is added to the found words, and earns
    /// points. The path is then cleared.
    pub fn check(&mut self, now: Instant) -> Result<CheckOutcome, GameError> {
        self.ensure_playable(now)?;
        let word: String = self.path.word().to_string();
        let cells: Vec<Cell> = self.path.cells().to_vec();

        if !self.pool.take(&word) {
            debug!("No match for {word:?}");
            return Ok(CheckOutcome::NoMatch { word, cells });
        }

        let points: u32 = self.score.add(self.path.len());
        self.found.push(FoundWord {
            word: word.clone(),
            points,
        });
        self.path.clear();
        debug!(
            "Match for {word:?}: +{points} points, score = {}",
            self.score.get()
        );
        Ok(CheckOutcome::Match {
            word,
            points,
            cells,
        })
    }

    /// Update the clock. The game expires when the time is up.
    pub fn tick(&mut self, now: Instant) -> ClockStatus {
        let remaining_secs: u64 = self.remaining_secs(now);
        self.expire_if_due(now);

        // The game may also have expired on a player event since the previous tick
        let expired_now: bool = self.state == SessionState::Expired && !self.expiry_reported;
        if expired_now {
            self.expiry_reported = true;
        }

        let level: TimeLevel = match self.state {
            SessionState::Expired => TimeLevel::Expired,
            _ => TimeLevel::from_secs(remaining_secs.max(1)),
        };
        if level != self.level {
            debug!("Clock level changed to {level} ({remaining_secs}s remaining)");
            self.level = level;
        }

        ClockStatus {
            remaining_secs: if self.state == SessionState::Expired {
                0
            } else {
                remaining_secs
            },
            level,
            expired_now,
        }
    }

    /// Return the remaining time in whole seconds, rounded up.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        match (self.state, self.clock.as_ref()) {
            (SessionState::NotStarted, _) | (_, None) => self.duration.as_secs(),
            (SessionState::Expired, _) => 0,
            (SessionState::Running, Some(c)) => c.remaining_secs(now),
        }
    }

    /// Pause the game: the clock stops and the board cannot be played.
    pub fn pause(&mut self, now: Instant) -> Result<(), GameError> {
        self.expire_if_due(now);
        if self.state != SessionState::Running {
            return Err(GameError::NotRunning);
        }
        if let Some(clock) = self.clock.as_mut() {
            clock.pause(now);
            debug!("Game paused, {}s remaining", clock.remaining_secs(now));
        }
        Ok(())
    }

    /// Resume the game.
    pub fn resume(&mut self, now: Instant) -> Result<(), GameError> {
        if self.state != SessionState::Running {
            return Err(GameError::NotRunning);
        }
        if let Some(clock) = self.clock.as_mut() {
            clock.resume(now);
            debug!("Game resumed");
        }
        Ok(())
    }

    pub fn is_paused(&self) -> bool {
        self.clock.as_ref().is_some_and(|c| c.is_paused())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    #[cfg(test)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the word spelled by the selected cells.
    pub fn current_word(&self) -> &str {
        self.path.word()
    }

    pub fn score(&self) -> u32 {
        self.score.get()
    }

    pub fn found_words(&self) -> &[FoundWord] {
        &self.found
    }

    /// Return the words that can still be found.
    #[cfg(test)]
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Return what the grid must display for a cell, or None if the cell is not on the board.
    pub fn cell_view(&self, cell: Cell) -> Option<CellView> {
        let board: &Board = self.board.as_ref()?;
        let letter: char = board.letter(cell)?;
        let last: Option<Cell> = self.path.last();

        let highlight: Highlight = if last == Some(cell) {
            Highlight::Last
        } else if self.path.contains(cell) {
            Highlight::Previous
        } else {
            Highlight::Idle
        };
        let selectable: bool = self.is_playable()
            && (last == Some(cell) || adjacency::legal_moves(board, &self.path).contains(&cell));

        Some(CellView {
            cell,
            letter,
            selectable,
            highlight,
        })
    }

    /// Return what the grid must display for all the cells, row by row.
    pub fn cell_views(&self) -> Vec<CellView> {
        match self.board.as_ref() {
            Some(board) => board.cells().filter_map(|c| self.cell_view(c)).collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    fn board_2x2() -> Board {
        Board::from_rows(vec![vec!['A', 'B'], vec!['C', 'D']]).unwrap()
    }

    fn running_game(words: &[&str]) -> (Game, Instant) {
        let t0 = Instant::now();
        let mut game = Game::new(WordPool::from_words(words), Duration::from_secs(180));
        game.start(board_2x2(), t0).unwrap();
        (game, t0)
    }

    // One letter per cell, so the path length is the word length
    fn assert_score_invariant(game: &Game) {
        for f in game.found_words() {
            let len = f.word.chars().count() as u32;
            assert_eq!(f.points, len * len);
        }
        let sum: u32 = game.found_words().iter().map(|f| f.points).sum();
        assert_eq!(game.score(), sum);
    }

    fn assert_path_invariant(game: &Game) {
        let cells = game.path().cells();
        for pair in cells.windows(2) {
            assert!(pair[0].is_adjacent(&pair[1]));
        }
        let mut sorted = cells.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), cells.len());
    }

    #[test]
    fn match_scores_and_removes_word() {
        let (mut game, t0) = running_game(&["AB", "AD"]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();
        assert_eq!(game.current_word(), "AB");

        let outcome = game.check(t0).unwrap();
        assert_eq!(
            outcome,
            CheckOutcome::Match {
                word: "AB".to_string(),
                points: 4,
                cells: vec![Cell::new(0, 0), Cell::new(0, 1)],
            }
        );
        assert_eq!(game.score(), 4);
        assert_eq!(game.found_words().len(), 1);
        assert_eq!(game.found_words()[0].word, "AB");
        assert!(!game.pool().contains("AB"));
        assert!(game.pool().contains("AD"));
        assert_eq!(game.pool().len(), 1);
        assert!(game.path().is_empty());
        assert_eq!(game.current_word(), "");
        assert_score_invariant(&game);
    }

    #[test]
    fn diagonal_path_matches() {
        let (mut game, t0) = running_game(&["AB", "AD"]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(1, 1), t0).unwrap();
        assert_eq!(game.current_word(), "AD");
        assert!(matches!(game.check(t0), Ok(CheckOutcome::Match { .. })));
        assert_score_invariant(&game);
    }

    #[test]
    fn deselect_single_cell_empties_path() {
        let (mut game, t0) = running_game(&["AB"]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.deselect(Cell::new(0, 0), t0).unwrap();
        assert!(game.path().is_empty());
        assert_eq!(game.current_word(), "");
    }

    #[test]
    fn no_match_keeps_path_and_score() {
        let board = Board::from_rows(vec![vec!['Z', 'Z'], vec!['C', 'D']]).unwrap();
        let mut game = Game::new(WordPool::from_words(["AB"]), Duration::from_secs(60));
        let t0 = Instant::now();
        game.start(board, t0).unwrap();
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();

        let outcome = game.check(t0).unwrap();
        assert!(matches!(outcome, CheckOutcome::NoMatch { ref word, .. } if word == "ZZ"));
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_word(), "ZZ");
        assert_eq!(game.path().len(), 2);
    }

    #[test]
    fn word_cannot_be_scored_twice() {
        let (mut game, t0) = running_game(&["AB"]);
        for _ in 0..2 {
            game.select(Cell::new(0, 0), t0).unwrap();
            game.select(Cell::new(0, 1), t0).unwrap();
            game.check(t0).unwrap();
        }
        assert_eq!(game.score(), 4);
        assert_eq!(game.found_words().len(), 1);
        assert_eq!(game.current_word(), "AB");
    }

    #[test]
    fn empty_and_single_letter_words_are_looked_up() {
        let (mut game, t0) = running_game(&["A"]);
        assert!(matches!(game.check(t0), Ok(CheckOutcome::NoMatch { ref word, .. }) if word.is_empty()));
        game.select(Cell::new(0, 0), t0).unwrap();
        assert!(matches!(game.check(t0), Ok(CheckOutcome::Match { points: 1, .. })));
    }

    #[test]
    fn click_selects_then_unwinds() {
        let (mut game, t0) = running_game(&[]);
        assert_eq!(game.click(Cell::new(0, 0), t0), Ok(Move::Start));
        assert_eq!(game.click(Cell::new(1, 0), t0), Ok(Move::Extend));
        assert_eq!(game.click(Cell::new(1, 1), t0), Ok(Move::Extend));
        assert_eq!(game.current_word(), "ACD");
        assert_path_invariant(&game);

        assert_eq!(
            game.click(Cell::new(0, 0), t0),
            Err(GameError::IllegalSelection(
                Cell::new(0, 0),
                Illegal::AlreadySelected
            ))
        );
        assert_eq!(game.click(Cell::new(1, 1), t0), Ok(Move::Unwind));
        assert_eq!(game.current_word(), "AC");
        assert_eq!(game.path().last(), Some(Cell::new(1, 0)));
    }

    #[test]
    fn illegal_selections_do_not_mutate() {
        let board = Board::from_rows(vec![
            vec!['A', 'B', 'C'],
            vec!['D', 'E', 'F'],
            vec!['G', 'H', 'I'],
        ])
        .unwrap();
        let mut game = Game::new(WordPool::default(), Duration::from_secs(60));
        let t0 = Instant::now();
        game.start(board, t0).unwrap();
        game.select(Cell::new(0, 0), t0).unwrap();

        assert_eq!(
            game.select(Cell::new(2, 2), t0),
            Err(GameError::IllegalSelection(Cell::new(2, 2), Illegal::NotAdjacent))
        );
        assert_eq!(
            game.select(Cell::new(5, 0), t0),
            Err(GameError::IllegalSelection(Cell::new(5, 0), Illegal::OutOfBounds))
        );
        assert_eq!(
            game.select(Cell::new(0, 0), t0),
            Err(GameError::IllegalSelection(
                Cell::new(0, 0),
                Illegal::AlreadySelected
            ))
        );
        game.select(Cell::new(1, 1), t0).unwrap();
        assert_eq!(
            game.deselect(Cell::new(0, 0), t0),
            Err(GameError::IllegalSelection(Cell::new(0, 0), Illegal::NotLast))
        );
        assert_eq!(game.current_word(), "AE");
        assert_path_invariant(&game);
    }

    #[test]
    fn deselect_removes_last_cell_and_letter() {
        let (mut game, t0) = running_game(&[]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();
        game.select(Cell::new(1, 0), t0).unwrap();
        let before: Vec<Cell> = game.path().cells().to_vec();
        game.deselect(Cell::new(1, 0), t0).unwrap();
        assert_eq!(game.path().cells(), &before[..2]);
        assert_eq!(game.current_word(), "AB");
    }

    #[test]
    fn clear_resets_selection() {
        let (mut game, t0) = running_game(&[]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();
        game.clear(t0).unwrap();
        assert!(game.path().is_empty());
        assert_eq!(game.current_word(), "");
        assert!(game.cell_views().iter().all(|v| v.selectable));
    }

    #[test]
    fn cell_views_follow_path() {
        let board = Board::from_rows(vec![
            vec!['A', 'B', 'C'],
            vec!['D', 'E', 'F'],
            vec!['G', 'H', 'I'],
        ])
        .unwrap();
        let mut game = Game::new(WordPool::default(), Duration::from_secs(60));
        let t0 = Instant::now();
        game.start(board, t0).unwrap();
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();

        let view = |r, c| game.cell_view(Cell::new(r, c)).unwrap();
        assert_eq!(view(0, 0).highlight, Highlight::Previous);
        assert!(!view(0, 0).selectable);
        assert_eq!(view(0, 1).highlight, Highlight::Last);
        assert!(view(0, 1).selectable);
        assert!(view(1, 2).selectable);
        assert!(view(1, 0).selectable);
        assert!(!view(2, 2).selectable);
        assert_eq!(view(2, 2).highlight, Highlight::Idle);
        assert_eq!(view(1, 1).letter, 'E');
        assert_eq!(game.cell_views().len(), 9);
    }

    #[test]
    fn expires_exactly_once_at_deadline() {
        let t0 = Instant::now();
        let mut game = Game::new(WordPool::from_words(["AB"]), Duration::from_secs(30));
        game.start(board_2x2(), t0).unwrap();

        let s = game.tick(t0 + 5 * SEC);
        assert_eq!(s.remaining_secs, 25);
        assert_eq!(s.level, TimeLevel::Normal);

        let s = game.tick(t0 + 15 * SEC);
        assert_eq!(s.remaining_secs, 15);
        assert_eq!(s.level, TimeLevel::Low);
        assert!(!s.expired_now);

        let s = game.tick(t0 + Duration::from_millis(29_999));
        assert_eq!(s.remaining_secs, 1);
        assert_eq!(s.level, TimeLevel::Critical);
        assert!(!s.expired_now);
        assert!(game.is_running());

        let s = game.tick(t0 + 30 * SEC);
        assert_eq!(s.remaining_secs, 0);
        assert_eq!(s.level, TimeLevel::Expired);
        assert!(s.expired_now);
        assert_eq!(game.state(), SessionState::Expired);

        let s = game.tick(t0 + 31 * SEC);
        assert!(!s.expired_now);
        assert_eq!(s.level, TimeLevel::Expired);
    }

    #[test]
    fn remaining_time_decreases() {
        let (mut game, t0) = running_game(&[]);
        let mut previous = u64::MAX;
        for i in 0..=180u64 {
            let s = game.tick(t0 + Duration::from_secs(i));
            assert!(s.remaining_secs <= previous);
            assert_eq!(s.remaining_secs, 180 - i);
            previous = s.remaining_secs;
        }
        assert_eq!(game.state(), SessionState::Expired);
    }

    #[test]
    fn input_rejected_after_expiry() {
        let (mut game, t0) = running_game(&["AB"]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();
        game.check(t0).unwrap();
        game.tick(t0 + 200 * SEC);

        assert_eq!(game.select(Cell::new(0, 0), t0), Err(GameError::NotRunning));
        assert_eq!(game.click(Cell::new(0, 0), t0), Err(GameError::NotRunning));
        assert_eq!(game.check(t0), Err(GameError::NotRunning));
        assert!(game.cell_views().iter().all(|v| !v.selectable));
        // Final results stay available
        assert_eq!(game.score(), 4);
        assert_eq!(game.found_words()[0].word, "AB");
    }

    #[test]
    fn restart_returns_found_words_to_pool() {
        let (mut game, t0) = running_game(&["AB", "AD"]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();
        game.check(t0).unwrap();
        assert!(!game.pool().contains("AB"));

        assert_eq!(game.restart(board_2x2(), t0), Err(GameError::NotExpired));
        game.tick(t0 + 180 * SEC);
        // Not merged back before the next game starts
        assert!(!game.pool().contains("AB"));

        let t1 = t0 + 300 * SEC;
        game.restart(board_2x2(), t1).unwrap();
        assert!(game.is_running());
        assert_eq!(game.score(), 0);
        assert!(game.found_words().is_empty());
        assert!(game.path().is_empty());
        assert!(game.pool().contains("AB"));
        assert!(game.pool().contains("AD"));
        assert_eq!(game.tick(t1).remaining_secs, 180);
    }

    #[test]
    fn start_only_once() {
        let (mut game, t0) = running_game(&[]);
        assert_eq!(game.start(board_2x2(), t0), Err(GameError::AlreadyStarted));
    }

    #[test]
    fn new_game_ends_running_game() {
        let (mut game, t0) = running_game(&["AB"]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0).unwrap();
        game.check(t0).unwrap();
        game.new_game(board_2x2(), t0 + 10 * SEC);
        assert!(game.is_running());
        assert_eq!(game.score(), 0);
        assert!(game.pool().contains("AB"));
    }

    #[test]
    fn not_started_game_rejects_input() {
        let t0 = Instant::now();
        let mut game = Game::new(WordPool::from_words(["AB"]), Duration::from_secs(90));
        assert_eq!(game.state(), SessionState::NotStarted);
        assert_eq!(game.click(Cell::new(0, 0), t0), Err(GameError::NotRunning));
        assert_eq!(game.remaining_secs(t0), 90);
        assert!(game.cell_views().is_empty());
    }

    #[test]
    fn pause_blocks_input_and_freezes_clock() {
        let (mut game, t0) = running_game(&[]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.pause(t0 + 10 * SEC).unwrap();
        assert!(game.is_paused());

        let t = t0 + 20 * SEC;
        assert_eq!(game.click(Cell::new(0, 1), t), Err(GameError::Paused));
        assert_eq!(game.check(t), Err(GameError::Paused));
        assert_eq!(game.clear(t), Err(GameError::Paused));
        assert_eq!(game.current_word(), "A");
        assert!(game.cell_views().iter().all(|v| !v.selectable));
        assert!(!game.tick(t0 + 1_000 * SEC).expired_now);
        assert_eq!(game.remaining_secs(t0 + 1_000 * SEC), 170);

        game.resume(t0 + 1_000 * SEC).unwrap();
        assert!(game.click(Cell::new(0, 1), t0 + 1_001 * SEC).is_ok());
        assert_eq!(game.current_word(), "AB");
        assert_eq!(game.remaining_secs(t0 + 1_010 * SEC), 160);
    }

    #[test]
    fn input_after_deadline_expires_without_tick() {
        let (mut game, t0) = running_game(&["AB"]);
        let late = t0 + 200 * SEC;

        assert_eq!(game.click(Cell::new(0, 0), late), Err(GameError::NotRunning));
        assert_eq!(game.state(), SessionState::Expired);
        assert_eq!(game.select(Cell::new(0, 1), late), Err(GameError::NotRunning));
        assert_eq!(game.check(late), Err(GameError::NotRunning));
        assert_eq!(game.clear(late), Err(GameError::NotRunning));
        assert_eq!(game.score(), 0);
        assert!(game.found_words().is_empty());
        assert!(game.cell_views().iter().all(|v| !v.selectable));

        // The next tick still reports the end of the game, once
        let s = game.tick(late);
        assert!(s.expired_now);
        assert_eq!(s.remaining_secs, 0);
        assert_eq!(s.level, TimeLevel::Expired);
        assert!(!game.tick(late + SEC).expired_now);
    }

    #[test]
    fn check_at_deadline_does_not_score() {
        let (mut game, t0) = running_game(&["AB"]);
        game.select(Cell::new(0, 0), t0).unwrap();
        game.select(Cell::new(0, 1), t0 + 179 * SEC).unwrap();

        assert_eq!(game.check(t0 + 180 * SEC), Err(GameError::NotRunning));
        assert_eq!(game.score(), 0);
        assert_eq!(game.current_word(), "");
    }

    #[test]
    fn clear_is_rejected_once_expired() {
        let (mut game, t0) = running_game(&[]);
        game.tick(t0 + 180 * SEC);
        assert_eq!(game.clear(t0 + 181 * SEC), Err(GameError::NotRunning));
    }

    #[test]
    fn score_never_decreases_within_a_game() {
        let board = Board::from_rows(vec![
            vec!['C', 'A', 'T'],
            vec!['O', 'R', 'S'],
            vec!['D', 'E', 'N'],
        ])
        .unwrap();
        let mut game = Game::new(
            WordPool::from_words(["CAT", "CATS", "ARE", "RED", "NOPE"]),
            Duration::from_secs(60),
        );
        let t0 = Instant::now();
        game.start(board, t0).unwrap();
        let words: [&[(usize, usize)]; 4] = [
            &[(0, 0), (0, 1), (0, 2)],
            &[(0, 0), (0, 1), (0, 2), (1, 2)],
            &[(0, 1), (1, 1), (2, 1)],
            &[(1, 1), (2, 1), (2, 0)],
        ];
        let mut previous = 0;
        for w in words {
            for (r, c) in w {
                game.select(Cell::new(*r, *c), t0).unwrap();
            }
            game.check(t0).unwrap();
            assert!(game.score() >= previous);
            previous = game.score();
            assert_score_invariant(&game);
        }
        assert_eq!(game.score(), 9 + 16 + 9 + 9);
    }
}
