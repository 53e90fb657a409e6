/*
score.rs

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

//! Score of the game in progress.
//!
//! A found word is worth the square of the number of cells in its path, so that long words are
//! rewarded more than several short ones.

/// Return the points for a path of the given length.
pub fn points(path_len: usize) -> u32 {
    let len: u32 = u32::try_from(path_len).unwrap_or(u32::MAX);
    len.saturating_mul(len)
}

/// Running total of the points.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    total: u32,
}

impl Score {
    /// Create a [`Score`] object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the points for a path of the given length and return these points.
    pub fn add(&mut self, path_len: usize) -> u32 {
        let p: u32 = points(path_len);
        self.total = self.total.saturating_add(p);
        p
    }

    /// Return the total.
    pub fn get(&self) -> u32 {
        self.total
    }

    /// Reset the total to zero.
    pub fn reset(&mut self) {
        self.total = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_squared_length() {
        assert_eq!(points(0), 0);
        assert_eq!(points(1), 1);
        assert_eq!(points(2), 4);
        assert_eq!(points(5), 25);
        assert_eq!(points(16), 256);
    }

    #[test]
    fn total_accumulates_and_resets() {
        let mut s = Score::new();
        assert_eq!(s.add(3), 9);
        assert_eq!(s.add(4), 16);
        assert_eq!(s.get(), 25);
        s.reset();
        assert_eq!(s.get(), 0);
    }
}
