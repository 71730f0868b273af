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

//! The packed representation of a single move.

use super::{Piece, Square};

use std::fmt::{Display, Formatter};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The special-move code attached to every `Move`.
pub enum MoveKind {
    /// Any move which needs no extra handling.
    Normal = 0,
    /// A pawn moving two squares forward from its starting rank.
    DoublePush = 1,
    /// A pawn capturing en passant. The captured pawn sits beside the moving
    /// pawn, on the to-square's file.
    EnPassant = 2,
    /// A king castling towards the H file.
    CastleKingside = 3,
    /// A king castling towards the A file.
    CastleQueenside = 4,
    /// A pawn reaching its last rank. The promote type is stored separately.
    Promotion = 5,
}

impl MoveKind {
    /// Every kind, in code order.
    pub const ALL: [MoveKind; 6] = [
        MoveKind::Normal,
        MoveKind::DoublePush,
        MoveKind::EnPassant,
        MoveKind::CastleKingside,
        MoveKind::CastleQueenside,
        MoveKind::Promotion,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// The information of one move, containing its from- and to-squares, its
/// special-move code, and its promote type, in one integer.
/// From LSB to MSB:
/// * 6 bits: from-square
/// * 6 bits: to-square
/// * 3 bits: kind (see `MoveKind`)
/// * 3 bits: promote type (0 for none, otherwise the piece's code plus one)
///
/// The remaining bits are always zero, so two moves are equal exactly when
/// all four fields are equal.
pub struct Move(u32);

impl Move {
    /// The shift of the to-square field.
    const TO_SHIFT: u32 = 6;

    /// The shift of the kind field.
    const KIND_SHIFT: u32 = 12;

    /// The shift of the promote type field.
    const PROMOTE_SHIFT: u32 = 15;

    #[inline(always)]
    #[must_use]
    /// Pack a move from its fields. The caller must supply a promote type
    /// exactly when `kind` is `MoveKind::Promotion`, and that type must be a
    /// knight, bishop, rook, or queen; nothing is checked outside debug builds.
    pub const fn encode(
        from_square: Square,
        to_square: Square,
        kind: MoveKind,
        promote_type: Option<Piece>,
    ) -> Move {
        let mut bits = from_square as u32;
        bits |= (to_square as u32) << Move::TO_SHIFT;
        bits |= (kind as u32) << Move::KIND_SHIFT;
        if let Some(p) = promote_type {
            debug_assert!((p as u8) < Piece::Pawn as u8);
            bits |= (p as u32 + 1) << Move::PROMOTE_SHIFT;
        }

        Move(bits)
    }

    #[inline(always)]
    #[must_use]
    /// Unpack this move into its from-square, to-square, kind, and promote
    /// type. This is the exact inverse of `Move::encode`.
    pub fn decode(self) -> (Square, Square, MoveKind, Option<Piece>) {
        (
            self.from_square(),
            self.to_square(),
            self.kind(),
            self.promote_type(),
        )
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` with no special flags.
    pub const fn normal(from_square: Square, to_square: Square) -> Move {
        Move::encode(from_square, to_square, MoveKind::Normal, None)
    }

    #[inline(always)]
    #[must_use]
    /// Create a pawn double push.
    pub const fn double_push(from_square: Square, to_square: Square) -> Move {
        Move::encode(from_square, to_square, MoveKind::DoublePush, None)
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` with the given promotion type. The promote type must
    /// not be a pawn or a king.
    pub const fn promoting(from_square: Square, to_square: Square, promote_type: Piece) -> Move {
        Move::encode(
            from_square,
            to_square,
            MoveKind::Promotion,
            Some(promote_type),
        )
    }

    #[inline(always)]
    #[must_use]
    /// Create a `Move` which is tagged as an en passant capture.
    pub const fn en_passant(from_square: Square, to_square: Square) -> Move {
        Move::encode(from_square, to_square, MoveKind::EnPassant, None)
    }

    #[inline(always)]
    #[must_use]
    /// Create a king move which castles. The side is derived from the
    /// direction the king travels.
    pub const fn castling(from_square: Square, to_square: Square) -> Move {
        let kind = if (to_square as u8) > (from_square as u8) {
            MoveKind::CastleKingside
        } else {
            MoveKind::CastleQueenside
        };
        Move::encode(from_square, to_square, kind, None)
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    /// Get the square that a piece moves from to execute this move.
    pub const fn from_square(self) -> Square {
        Square::from_index(self.0 as u8)
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    /// Get the target square of this move.
    pub const fn to_square(self) -> Square {
        Square::from_index((self.0 >> Move::TO_SHIFT) as u8)
    }

    #[inline(always)]
    #[must_use]
    /// Get the special-move code of this move.
    pub fn kind(self) -> MoveKind {
        match (self.0 >> Move::KIND_SHIFT) & 7 {
            0 => MoveKind::Normal,
            1 => MoveKind::DoublePush,
            2 => MoveKind::EnPassant,
            3 => MoveKind::CastleKingside,
            4 => MoveKind::CastleQueenside,
            5 => MoveKind::Promotion,
            // only reachable through `Move::from_val` on a foreign value
            _ => unreachable!("undefined move kind code"),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the promotion type of this move. The resulting type will never be a
    /// pawn or a king.
    pub fn promote_type(self) -> Option<Piece> {
        match (self.0 >> Move::PROMOTE_SHIFT) & 7 {
            0 => None,
            1 => Some(Piece::Knight),
            2 => Some(Piece::Bishop),
            3 => Some(Piece::Rook),
            4 => Some(Piece::Queen),
            _ => unreachable!("undefined promote type code"),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this move is marked as a promotion.
    pub fn is_promotion(self) -> bool {
        self.kind() == MoveKind::Promotion
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this move is marked as a castle.
    pub fn is_castle(self) -> bool {
        matches!(
            self.kind(),
            MoveKind::CastleKingside | MoveKind::CastleQueenside
        )
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether this move is marked as an en passant capture.
    pub fn is_en_passant(self) -> bool {
        self.kind() == MoveKind::EnPassant
    }

    #[must_use]
    /// Construct a UCI string version of this move.
    pub fn to_uci(self) -> String {
        match self.promote_type() {
            None => format!("{}{}", self.from_square(), self.to_square()),
            Some(p) => format!(
                "{}{}{}",
                self.from_square(),
                self.to_square(),
                p.code().to_lowercase()
            ),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get a number representing this move uniquely. The value may change from
    /// version to version.
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline(always)]
    #[must_use]
    /// Reconstruct a move based on its `value`. Should only be used with
    /// values returned from `Move::value()`.
    pub const fn from_val(val: u32) -> Move {
        Move(val)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.promote_type() {
            None => write!(f, "{} -> {}", self.from_square(), self.to_square())?,
            Some(p) => write!(f, "{} -> {} ={}", self.from_square(), self.to_square(), p)?,
        };
        if self.is_en_passant() {
            write!(f, " [e.p.]")?;
        }
        if self.is_castle() {
            write!(f, " [castle]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bitboard;

    #[test]
    /// Test that decoding inverts encoding for every combination of fields a
    /// generator can produce.
    fn decode_inverts_encode() {
        let promotions = [
            None,
            Some(Piece::Knight),
            Some(Piece::Bishop),
            Some(Piece::Rook),
            Some(Piece::Queen),
        ];
        for from_sq in Bitboard::ALL {
            for to_sq in Bitboard::ALL {
                for kind in MoveKind::ALL {
                    for promote in promotions {
                        let m = Move::encode(from_sq, to_sq, kind, promote);
                        assert_eq!(m.decode(), (from_sq, to_sq, kind, promote));
                    }
                }
            }
        }
    }

    #[test]
    fn equality_is_fieldwise() {
        assert_eq!(
            Move::normal(Square::E2, Square::E4),
            Move::encode(Square::E2, Square::E4, MoveKind::Normal, None)
        );
        assert_ne!(
            Move::normal(Square::E2, Square::E4),
            Move::double_push(Square::E2, Square::E4)
        );
        assert_ne!(
            Move::promoting(Square::B7, Square::B8, Piece::Queen),
            Move::promoting(Square::B7, Square::B8, Piece::Knight)
        );
    }

    #[test]
    fn castle_side_from_direction() {
        assert_eq!(
            Move::castling(Square::E1, Square::G1).kind(),
            MoveKind::CastleKingside
        );
        assert_eq!(
            Move::castling(Square::E8, Square::C8).kind(),
            MoveKind::CastleQueenside
        );
    }

    #[test]
    fn uci_strings() {
        assert_eq!(Move::double_push(Square::E2, Square::E4).to_uci(), "e2e4");
        assert_eq!(
            Move::promoting(Square::B7, Square::B8, Piece::Queen).to_uci(),
            "b7b8q"
        );
        assert_eq!(
            Move::en_passant(Square::E5, Square::F6).to_string(),
            "e5 -> f6 [e.p.]"
        );
    }
}
