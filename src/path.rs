/*
path.rs

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

//! Cells that the player is currently selecting, and the word they spell.

use std::collections::HashSet;

use crate::board::Cell;

/// Path object.
///
/// The word is only modified together with the cell list, so that it always spells the letters
/// of the cells in order.
/// Legality of the cells is not verified here. See [`crate::adjacency`].
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    cells: Vec<Cell>,

    /// Instead of looking for the cell in the [`Path::cells`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Cell>,

    /// Letters of the cells, in order.
    word: String,
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.visited.clear();
        self.word.clear();
    }

    /// Add a cell and its letter to the end of the path.
    pub fn push(&mut self, cell: Cell, letter: char) {
        self.cells.push(cell);
        self.visited.insert(cell);
        self.word.push(letter);
    }

    /// Remove the last cell and its letter. Return the removed cell.
    pub fn pop(&mut self) -> Option<Cell> {
        let cell: Cell = self.cells.pop()?;
        self.visited.remove(&cell);
        self.word.pop();
        Some(cell)
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: Cell) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the cells in selection order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Return the last cell in the path.
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Return the word spelled by the path.
    pub fn word(&self) -> &str {
        &self.word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_keep_word_in_sync() {
        let mut p = Path::new();
        p.push(Cell::new(0, 0), 'A');
        p.push(Cell::new(0, 1), 'B');
        p.push(Cell::new(1, 1), 'D');
        assert_eq!(p.word(), "ABD");
        assert_eq!(p.len(), 3);
        assert_eq!(p.last(), Some(Cell::new(1, 1)));

        assert_eq!(p.pop(), Some(Cell::new(1, 1)));
        assert_eq!(p.word(), "AB");
        assert!(!p.contains(Cell::new(1, 1)));
        assert!(p.contains(Cell::new(0, 1)));
    }

    #[test]
    fn pop_on_empty_path() {
        let mut p = Path::new();
        assert_eq!(p.pop(), None);
        assert_eq!(p.word(), "");
        assert!(p.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut p = Path::new();
        p.push(Cell::new(2, 2), 'Z');
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.word(), "");
        assert!(!p.contains(Cell::new(2, 2)));
        assert_eq!(p.last(), None);
    }
}
