/*
  Fiddler, a UCI-compatible chess engine.
  Copyright (C) 2022 The Fiddler Authors (see AUTHORS.md file)

  Fiddler is free software: you can redistribute it and/or modify
  it under the terms of the GNU General Public License as published by
  the Free Software Foundation, either version 3 of the License, or
  (at your option) any later version.

  Fiddler is distributed in the hope that it will be useful,
  but WITHOUT ANY WARRANTY; without even the implied warranty of
  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
  GNU General Public License for more details.

  You should have received a copy of the GNU General Public License
  along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/

//! The history heuristic, used to score quiet moves.

use crate::{movegen::CAPTURE_BASE, Color, Move};

/// The largest value any history entry may take. Quiet moves are scored by
/// their history entry, so keeping this below `CAPTURE_BASE` keeps every
/// quiet move ordered after every capture.
pub const HISTORY_MAX: i32 = CAPTURE_BASE - 64;

#[derive(Clone, Debug, PartialEq, Eq)]
/// A table of how often each quiet move, by color, from-square, and
/// to-square, has caused a beta cutoff.
pub struct History {
    table: Box<[[[i32; 64]; 64]; 2]>,
}

impl History {
    #[must_use]
    /// Construct an empty history table.
    pub fn new() -> History {
        History {
            table: Box::new([[[0; 64]; 64]; 2]),
        }
    }

    /// Record that `m`, played by `color`, caused a cutoff in a search of
    /// depth `depth`. The bonus is `depth * depth`.
    pub fn record_cutoff(&mut self, color: Color, m: Move, depth: u8) {
        let bonus = i32::from(depth) * i32::from(depth);
        let entry = self.entry_mut(color, m);
        *entry = entry.saturating_add(bonus).min(HISTORY_MAX);
    }

    #[inline(always)]
    #[must_use]
    /// Get the history score of `m` played by `color`. Always in
    /// `0..=HISTORY_MAX`.
    pub fn score(&self, color: Color, m: Move) -> i32 {
        self.table[color as usize][m.from_square() as usize][m.to_square() as usize]
    }

    /// Halve every entry, so that old results matter less than new ones.
    pub fn age(&mut self) {
        for entry in self.table.iter_mut().flatten().flatten() {
            *entry /= 2;
        }
    }

    /// Reset every entry to zero.
    pub fn clear(&mut self) {
        for entry in self.table.iter_mut().flatten().flatten() {
            *entry = 0;
        }
    }

    fn entry_mut(&mut self, color: Color, m: Move) -> &mut i32 {
        &mut self.table[color as usize][m.from_square() as usize][m.to_square() as usize]
    }
}

impl Default for History {
    fn default() -> History {
        History::new()
    }
}
