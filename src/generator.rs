/*
generator.rs

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

//! Generate random boards.
//!
//! A board is produced the way it is with the physical game: the sixteen dice are shaken into
//! random positions of the 4x4 grid, and each die shows one of its six faces.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::board::{Board, BoardError};
use crate::config::BOARD_SIZE;

/// A six-face letter die.
pub type Die = [char; 6];

/// The sixteen dice of the classic game.
pub const CLASSIC_DICE: [Die; BOARD_SIZE * BOARD_SIZE] = [
    ['A', 'E', 'A', 'N', 'E', 'G'],
    ['A', 'H', 'S', 'P', 'C', 'O'],
    ['A', 'S', 'P', 'F', 'F', 'K'],
    ['O', 'B', 'J', 'O', 'A', 'B'],
    ['I', 'O', 'T', 'M', 'U', 'C'],
    ['R', 'Y', 'V', 'D', 'E', 'L'],
    ['L', 'R', 'E', 'I', 'X', 'D'],
    ['E', 'I', 'U', 'N', 'E', 'S'],
    ['W', 'N', 'G', 'E', 'E', 'H'],
    ['L', 'N', 'H', 'N', 'R', 'Z'],
    ['T', 'S', 'T', 'I', 'Y', 'D'],
    ['O', 'W', 'T', 'O', 'A', 'T'],
    ['E', 'R', 'T', 'T', 'Y', 'L'],
    ['T', 'O', 'E', 'S', 'S', 'I'],
    ['T', 'E', 'R', 'W', 'H', 'V'],
    ['N', 'U', 'I', 'H', 'M', 'Q'],
];

/// Shake the classic dice into a new board.
pub fn roll_board<R: Rng>(rng: &mut R) -> Board {
    roll_dice(&CLASSIC_DICE, BOARD_SIZE, rng).expect("The classic dice always fill the board")
}

/// Shake the given dice into a board of `size` rows and columns.
///
/// The dice are reused in turn if there are fewer dice than cells.
///
/// # Errors
///
/// The method returns an error if there are no dice or if the size is zero.
pub fn roll_dice<R: Rng>(
    dice: &[Die],
    size: usize,
    rng: &mut R,
) -> Result<Board, BoardError> {
    if dice.is_empty() {
        return Err(BoardError::Empty);
    }
    let mut order: Vec<&Die> = dice.iter().collect();
    order.shuffle(rng);

    let rows: Vec<Vec<char>> = (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    let die: &Die = order[(row * size + col) % order.len()];
                    die[rng.random_range(0..die.len())]
                })
                .collect()
        })
        .collect();

    let board: Board = Board::from_rows(rows)?;
    debug!("New board:\n{board}");
    Ok(board)
}
