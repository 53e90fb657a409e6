/*
adjacency.rs

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

//! Decide which cells the player can select next.
//!
//! Any cell can start a path.
//! After that, only the cells around the last selected cell that are not already in the path can
//! extend it, and only the last cell can be removed (the path unwinds from its end).

use std::fmt;

use crate::board::{Board, Cell};
use crate::path::Path;

/// What clicking a cell would do to the path.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Move {
    /// The path is empty and the cell starts a new one.
    Start,

    /// The cell is around the last cell and extends the path.
    Extend,

    /// The cell is the last cell of the path and is removed.
    Unwind,
}

/// Why a cell cannot be clicked.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Illegal {
    /// The cell is outside the grid.
    OutOfBounds,

    /// The cell is not around the last cell of the path.
    NotAdjacent,

    /// The cell is already in the path, but is not the last one.
    AlreadySelected,

    /// Only the last cell of the path can be removed.
    NotLast,
}

impl fmt::Display for Illegal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg: &str = match self {
            Illegal::OutOfBounds => "outside the grid",
            Illegal::NotAdjacent => "not next to the last selected cell",
            Illegal::AlreadySelected => "already selected",
            Illegal::NotLast => "not the last selected cell",
        };
        f.write_str(msg)
    }
}

/// Return what clicking the given cell would do.
///
/// # Errors
///
/// Return the reason why the cell cannot be clicked.
pub fn classify(board: &Board, path: &Path, cell: Cell) -> Result<Move, Illegal> {
    if !board.contains(cell) {
        return Err(Illegal::OutOfBounds);
    }
    let last: Cell = match path.last() {
        None => return Ok(Move::Start),
        Some(c) => c,
    };
    if cell == last {
        Ok(Move::Unwind)
    } else if path.contains(cell) {
        Err(Illegal::AlreadySelected)
    } else if cell.is_adjacent(&last) {
        Ok(Move::Extend)
    } else {
        Err(Illegal::NotAdjacent)
    }
}

/// Return the cells that can be added to the path.
pub fn legal_moves(board: &Board, path: &Path) -> Vec<Cell> {
    match path.last() {
        None => board.cells().collect(),
        Some(last) => board
            .neighbors(last)
            .filter(|c| !path.contains(*c))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::from_rows(vec![
            vec!['A', 'B', 'C'],
            vec!['D', 'E', 'F'],
            vec!['G', 'H', 'I'],
        ])
        .unwrap()
    }

    fn path_of(board: &Board, cells: &[(usize, usize)]) -> Path {
        let mut p = Path::new();
        for (r, c) in cells {
            let cell = Cell::new(*r, *c);
            p.push(cell, board.letter(cell).unwrap());
        }
        p
    }

    #[test]
    fn any_cell_starts_a_path() {
        let b = board();
        let p = Path::new();
        for cell in b.cells() {
            assert_eq!(classify(&b, &p, cell), Ok(Move::Start));
        }
        assert_eq!(legal_moves(&b, &p).len(), 9);
    }

    #[test]
    fn out_of_bounds_is_illegal() {
        let b = board();
        assert_eq!(
            classify(&b, &Path::new(), Cell::new(3, 0)),
            Err(Illegal::OutOfBounds)
        );
    }

    #[test]
    fn extends_diagonally_and_rejects_far_cells() {
        let b = board();
        let p = path_of(&b, &[(0, 0)]);
        assert_eq!(classify(&b, &p, Cell::new(1, 1)), Ok(Move::Extend));
        assert_eq!(classify(&b, &p, Cell::new(0, 1)), Ok(Move::Extend));
        assert_eq!(classify(&b, &p, Cell::new(2, 2)), Err(Illegal::NotAdjacent));
        assert_eq!(classify(&b, &p, Cell::new(0, 2)), Err(Illegal::NotAdjacent));
    }

    #[test]
    fn only_last_cell_unwinds() {
        let b = board();
        let p = path_of(&b, &[(0, 0), (1, 1), (1, 2)]);
        assert_eq!(classify(&b, &p, Cell::new(1, 2)), Ok(Move::Unwind));
        assert_eq!(
            classify(&b, &p, Cell::new(1, 1)),
            Err(Illegal::AlreadySelected)
        );
        assert!(!legal_moves(&b, &p).contains(&Cell::new(1, 2)));
    }

    #[test]
    fn legal_moves_skip_path_cells() {
        let b = board();
        let p = path_of(&b, &[(0, 0), (1, 1)]);
        let moves = legal_moves(&b, &p);
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Cell::new(0, 0)));
        assert!(!moves.contains(&Cell::new(1, 1)));
        assert!(
            moves
                .iter()
                .all(|c| classify(&b, &p, *c) == Ok(Move::Extend))
        );
    }
}
