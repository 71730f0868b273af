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

//! Fixed-capacity buffers of scored moves, filled once per generation call.

use super::{Move, MoveKind, Piece, Square};

use std::slice::Iter;

/// The most moves a `MoveList` can hold. No reachable chess position has more
/// than 218 legal moves, and pseudo-legal generation stays below this bound.
pub const MAX_MOVES: usize = 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A candidate move paired with its ordering heuristic. Higher scores should
/// be tried earlier.
pub struct ScoredMove {
    /// The move.
    pub m: Move,
    /// The ordering score of the move.
    pub score: i32,
}

#[derive(Clone, Debug)]
/// An append-only list of at most `MAX_MOVES` scored moves. The backing array
/// is inline, so clearing and refilling a list never allocates.
///
/// Moves are kept in the order they were added; nothing here sorts by score.
pub struct MoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    /// Create an empty list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [ScoredMove {
                m: Move::from_val(0),
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline(always)]
    /// Append a move with its score.
    ///
    /// # Panics
    ///
    /// Panics if the list is already full. A full list means the generator or
    /// the position is broken, and silently dropping a move would be worse.
    pub fn add(&mut self, m: Move, score: i32) {
        assert!(self.len < MAX_MOVES, "move list capacity exceeded");
        self.moves[self.len] = ScoredMove { m, score };
        self.len += 1;
    }

    #[inline(always)]
    /// Encode a move from its fields and append it with its score.
    ///
    /// # Panics
    ///
    /// Panics if the list is already full, like `MoveList::add`.
    pub fn add_encoded(
        &mut self,
        from_square: Square,
        to_square: Square,
        kind: MoveKind,
        promote_type: Option<Piece>,
        score: i32,
    ) {
        self.add(
            Move::encode(from_square, to_square, kind, promote_type),
            score,
        );
    }

    #[inline(always)]
    /// Remove every move from the list, keeping its storage.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    #[inline(always)]
    #[must_use]
    /// Get the number of moves in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether the list holds no moves.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    #[must_use]
    /// View the moves in insertion order.
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    #[inline(always)]
    /// Iterate over the moves in insertion order.
    pub fn iter(&self) -> Iter<'_, ScoredMove> {
        self.as_slice().iter()
    }

    #[must_use]
    /// Determine whether `m` is in this list, regardless of its score.
    pub fn contains(&self, m: Move) -> bool {
        self.iter().any(|sm| sm.m == m)
    }

    #[must_use]
    /// Look up the score assigned to `m`, if it is in the list.
    pub fn score_of(&self, m: Move) -> Option<i32> {
        self.iter().find(|sm| sm.m == m).map(|sm| sm.score)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a ScoredMove;
    type IntoIter = Iter<'a, ScoredMove>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
