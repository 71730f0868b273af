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

//! The read-only view of a chess position that move generation consumes.

use crate::{AttackTables, Bitboard, CastleRights, Color, Piece, Square};

/// A snapshot of a chess position, as far as move generation is concerned.
///
/// Implementors only need to expose their bitboards and a few scalars; the
/// derived queries have default implementations in terms of those. Move
/// generation never mutates a position.
pub trait Position {
    /// Get the squares occupied by pieces of type `piece`, of either color.
    fn pieces(&self, piece: Piece) -> Bitboard;

    /// Get the squares occupied by pieces of color `color`.
    fn color(&self, color: Color) -> Bitboard;

    /// Get the color of the player to move.
    fn side_to_move(&self) -> Color;

    /// Get the castling rights still held by both players.
    fn castle_rights(&self) -> CastleRights;

    /// Get the square a pawn would land on when capturing en passant, if the
    /// previous move was a double push.
    fn en_passant_square(&self) -> Option<Square>;

    #[inline(always)]
    /// Get the squares occupied by pieces of color `color` and type `piece`.
    fn colored(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces(piece) & self.color(color)
    }

    #[inline(always)]
    /// Get the squares occupied by pieces.
    fn occupancy(&self) -> Bitboard {
        self.color(Color::White) | self.color(Color::Black)
    }

    #[inline(always)]
    /// Get the squares with no piece on them.
    fn empty(&self) -> Bitboard {
        !self.occupancy()
    }

    /// Get the type of the piece occupying a given square, or `None` if the
    /// square is empty.
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        Piece::ALL.into_iter().find(|&pt| self.pieces(pt).contains(sq))
    }

    #[inline(always)]
    /// Get the square of the king of color `color`. If there are several, the
    /// one nearest A1 is returned.
    fn king_square(&self, color: Color) -> Option<Square> {
        self.colored(color, Piece::King).next()
    }

    /// Get the pieces checking the king of the player to move.
    fn checkers(&self, tables: &AttackTables) -> Bitboard {
        tables.checkers(self)
    }
}
