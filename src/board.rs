/*
board.rs

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

//! Letter grid of a game and cell coordinates.
//!
//! The [`Board`] is created once per session, either by the [`crate::generator`] module or from
//! explicit rows, and is never modified afterwards.

use std::error::Error;
use std::fmt;

/// Relative offsets of the eight cells around a cell (Moore neighborhood).
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Position of a cell in the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, starting at 0 at the top.
    pub row: usize,

    /// Column index, starting at 0 on the left.
    pub col: usize,
}

impl Cell {
    /// Create a [`Cell`] object.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the two cells touch horizontally, vertically, or diagonally.
    ///
    /// A cell is not adjacent to itself.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        let d_row: usize = self.row.abs_diff(other.row);
        let d_col: usize = self.col.abs_diff(other.col);
        d_row.max(d_col) == 1
    }

    /// Return the cell at the given offset, or None if it would have a negative coordinate.
    fn offset(&self, d_row: isize, d_col: isize) -> Option<Cell> {
        Some(Cell {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Type of errors when building a board.
#[derive(Debug, PartialEq)]
pub enum BoardError {
    /// The board has no rows.
    Empty,

    /// A row does not have as many letters as there are rows.
    NotSquare { row: usize, len: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::Empty => write!(f, "the board has no rows"),
            BoardError::NotSquare { row, len } => {
                write!(f, "row {row} has {len} letters, the board must be square")
            }
        }
    }
}

impl Error for BoardError {}

/// Square grid of letters.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Number of rows (and of columns).
    size: usize,

    /// Letters, row by row.
    letters: Vec<Vec<char>>,
}

impl Board {
    /// Create a [`Board`] object from its rows.
    ///
    /// # Errors
    ///
    /// The rows must form a non-empty square.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        let size: usize = rows.len();
        if size == 0 {
            return Err(BoardError::Empty);
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(BoardError::NotSquare { row, len: r.len() });
        }
        Ok(Self {
            size,
            letters: rows
                .into_iter()
                .map(|r| r.into_iter().map(|c| c.to_ascii_uppercase()).collect())
                .collect(),
        })
    }

    /// Number of rows, which is also the number of columns.
    #[cfg(test)]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell is inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Return the letter at the given cell, or None if the cell is outside the grid.
    pub fn letter(&self, cell: Cell) -> Option<char> {
        self.letters.get(cell.row)?.get(cell.col).copied()
    }

    /// Iterate over all the cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Cell::new(row, col)))
    }

    /// Iterate over the cells around the given cell that are inside the grid.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        MOORE_OFFSETS
            .iter()
            .filter_map(move |(d_row, d_col)| cell.offset(*d_row, *d_col))
            .filter(move |c| self.contains(*c))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.letters {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
