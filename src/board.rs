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

//! A concrete position with enough bookkeeping to play moves, used to drive
//! the generator in tests, perft, and benchmarks.

use crate::{
    error::FenError, Bitboard, CastleRights, Color, Move, MoveKind, Piece, Position, Square,
};

use std::{
    fmt::{Display, Formatter},
    ops::Index,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// A representation of a position. Does not handle repetition or move clocks.
pub struct Board {
    /// The squares occupied by White and Black, respectively.
    sides: [Bitboard; 2],
    /// The squares occupied by (in order) knights, bishops, rooks,
    /// queens, pawns, and kings.
    pieces: [Bitboard; Piece::NUM_TYPES],
    /// The color of the player to move.
    pub player: Color,
    /// The square which can be moved to by a pawn in en passant. Will be
    /// `None` when a pawn has not moved two squares in the previous move.
    pub en_passant_square: Option<Square>,
    /// The rights of each player for castling.
    pub castle_rights: CastleRights,
}

impl Board {
    /// The FEN of the standard starting position.
    pub const START_FEN: &'static str =
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Create an empty board with no pieces or castle rights.
    const fn empty() -> Board {
        Board {
            sides: [Bitboard::EMPTY; 2],
            pieces: [Bitboard::EMPTY; Piece::NUM_TYPES],
            player: Color::White,
            en_passant_square: None,
            castle_rights: CastleRights::NO_RIGHTS,
        }
    }

    /// Create a Board populated from some FEN and load it. The halfmove and
    /// fullmove clocks may be omitted, and are ignored if present.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the FEN is malformed or describes a board without
    /// exactly one king per side.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiddler_movegen::{Board, Color, Position};
    ///
    /// let b = Board::from_fen("7k/8/8/8/8/8/8/K7 b - - 0 1").unwrap();
    /// assert_eq!(b.side_to_move(), Color::Black);
    /// assert_eq!(b.occupancy().len(), 2);
    /// ```
    pub fn from_fen(fen: &str) -> Result<Board, FenError> {
        let mut board = Board::empty();
        let mut fields = fen.split_whitespace();

        let placement = fields
            .next()
            .ok_or(FenError::UnexpectedEnd("piece placement"))?;
        let mut rank = 7;
        let mut file = 0;
        for chr in placement.chars() {
            match chr {
                '/' => {
                    if file != 8 || rank == 0 {
                        return Err(FenError::UnexpectedChar {
                            found: chr,
                            section: "piece placement",
                        });
                    }
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += usize::from(chr as u8 - b'0');
                    if file > 8 {
                        return Err(FenError::Overflow);
                    }
                }
                _ => {
                    let pt = Piece::from_code(chr.to_ascii_uppercase()).ok_or(
                        FenError::UnexpectedChar {
                            found: chr,
                            section: "piece placement",
                        },
                    )?;
                    let sq = Square::new(rank, file).ok_or(FenError::Overflow)?;
                    let color = if chr.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    board.add_piece(sq, pt, color);
                    file += 1;
                }
            }
        }
        if (rank, file) != (0, 8) {
            return Err(FenError::UnexpectedEnd("piece placement"));
        }

        board.player = match fields.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(s) => return Err(FenError::SideToMove(s.to_string())),
            None => return Err(FenError::UnexpectedEnd("player to move")),
        };

        let castling = fields
            .next()
            .ok_or(FenError::UnexpectedEnd("castle rights"))?;
        if castling != "-" {
            for chr in castling.chars() {
                board.castle_rights |= match chr {
                    'K' => CastleRights::king_castle(Color::White),
                    'Q' => CastleRights::queen_castle(Color::White),
                    'k' => CastleRights::king_castle(Color::Black),
                    'q' => CastleRights::queen_castle(Color::Black),
                    _ => {
                        return Err(FenError::UnexpectedChar {
                            found: chr,
                            section: "castle rights",
                        })
                    }
                };
            }
        }

        let ep = fields
            .next()
            .ok_or(FenError::UnexpectedEnd("en passant square"))?;
        if ep != "-" {
            board.en_passant_square = Some(Square::from_algebraic(ep)?);
        }

        // ignore move clocks
        if !board.is_valid() {
            return Err(FenError::IllegalBoard);
        }
        Ok(board)
    }

    #[inline(always)]
    #[must_use]
    /// Get the type of the piece occupying a given square.
    /// Returns `None` if there are no pieces occupying the square.
    pub fn type_at_square(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq)
    }

    #[inline(always)]
    #[must_use]
    /// Get the color of a piece occupying a current square.
    /// Returns `None` if there are no pieces occupying the square.
    pub fn color_at_square(&self, sq: Square) -> Option<Color> {
        Color::ALL.into_iter().find(|&c| self[c].contains(sq))
    }

    #[must_use]
    /// Check if the state of this board is valid: no square is claimed twice,
    /// every piece has both a type and a color, and each side has exactly one
    /// king.
    pub fn is_valid(&self) -> bool {
        if !(self.sides[0] & self.sides[1]).is_empty() {
            return false;
        }
        let mut seen = Bitboard::EMPTY;
        for bb in self.pieces {
            if !(seen & bb).is_empty() {
                return false;
            }
            seen |= bb;
        }
        if seen != self.occupancy() {
            return false;
        }

        Color::ALL
            .into_iter()
            .all(|c| self.colored(c, Piece::King).has_single_bit())
    }

    /// Apply the given move to the board. The move is assumed to be
    /// pseudo-legal for this position; if there is no piece on its
    /// from-square, the board is left unchanged.
    pub fn make_move(&mut self, m: Move) {
        let (from_sq, to_sq, kind, promote_type) = m.decode();
        let player = self.player;
        let opponent = !player;
        let Some(mover_type) = self.type_at_square(from_sq) else {
            return;
        };

        /* Core move functionality */
        if let Some(captured) = self.type_at_square(to_sq) {
            self.remove_known_piece(to_sq, captured, opponent);
        }
        self.remove_known_piece(from_sq, mover_type, player);
        self.add_piece(to_sq, promote_type.unwrap_or(mover_type), player);

        match kind {
            MoveKind::EnPassant => {
                // the captured pawn is beside the mover, on the target file
                if let Some(capturee_sq) = Square::new(from_sq.rank(), to_sq.file()) {
                    self.remove_known_piece(capturee_sq, Piece::Pawn, opponent);
                }
            }
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let (rook_from_file, rook_to_file) = if kind == MoveKind::CastleKingside {
                    (7, 5)
                } else {
                    (0, 3)
                };
                let rank = player.back_rank();
                if let (Some(rook_from_sq), Some(rook_to_sq)) =
                    (Square::new(rank, rook_from_file), Square::new(rank, rook_to_file))
                {
                    self.remove_known_piece(rook_from_sq, Piece::Rook, player);
                    self.add_piece(rook_to_sq, Piece::Rook, player);
                }
            }
            _ => (),
        }

        self.en_passant_square =
            if mover_type == Piece::Pawn && from_sq.rank().abs_diff(to_sq.rank()) == 2 {
                Square::new((from_sq.rank() + to_sq.rank()) / 2, from_sq.file())
            } else {
                None
            };

        /* Castle rights */
        let mut rights_to_remove = if mover_type == Piece::King {
            CastleRights::color_rights(player)
        } else {
            CastleRights::NO_RIGHTS
        };
        // moving or capturing a rook on its home square removes its right
        for sq in [from_sq, to_sq] {
            rights_to_remove |= match sq {
                Square::A1 => CastleRights::queen_castle(Color::White),
                Square::H1 => CastleRights::king_castle(Color::White),
                Square::A8 => CastleRights::queen_castle(Color::Black),
                Square::H8 => CastleRights::king_castle(Color::Black),
                _ => CastleRights::NO_RIGHTS,
            };
        }
        self.castle_rights &= !rights_to_remove;

        self.player = opponent;
    }

    #[inline(always)]
    /// Remove a piece of a known type and color from a square.
    fn remove_known_piece(&mut self, sq: Square, pt: Piece, color: Color) {
        self.pieces[pt as usize].remove(sq);
        self.sides[color as usize].remove(sq);
    }

    #[inline(always)]
    /// Add a piece to the square at a given place on the board. The square
    /// must be empty beforehand.
    fn add_piece(&mut self, sq: Square, pt: Piece, color: Color) {
        self.pieces[pt as usize].insert(sq);
        self.sides[color as usize].insert(sq);
    }
}

impl Position for Board {
    #[inline(always)]
    fn pieces(&self, piece: Piece) -> Bitboard {
        self[piece]
    }

    #[inline(always)]
    fn color(&self, color: Color) -> Bitboard {
        self[color]
    }

    #[inline(always)]
    fn side_to_move(&self) -> Color {
        self.player
    }

    #[inline(always)]
    fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline(always)]
    fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }
}

impl Display for Board {
    /// Display this board in a console-ready format. Expresses as a series of 8
    /// lines, where the topmost line is the 8th rank and the bottommost is the
    /// 1st. White pieces are represented with capital letters, while black
    /// pieces have lowercase.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let sq = Square::from_index(rank * 8 + file);
                match (self.type_at_square(sq), self.color_at_square(sq)) {
                    (Some(p), Some(Color::White)) => write!(f, "{p} ")?,
                    (Some(p), _) => write!(f, "{} ", p.code().to_lowercase())?,
                    (None, _) => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Index<Piece> for Board {
    type Output = Bitboard;

    #[inline(always)]
    /// Get the squares occupied by the given piece.
    fn index(&self, index: Piece) -> &Self::Output {
        &self.pieces[index as usize]
    }
}

impl Index<Color> for Board {
    type Output = Bitboard;

    #[inline(always)]
    /// Get the squares occupied by the given color.
    fn index(&self, index: Color) -> &Self::Output {
        &self.sides[index as usize]
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            sides: [
                Bitboard::new(0x0000_0000_0000_FFFF), // white
                Bitboard::new(0xFFFF_0000_0000_0000), // black
            ],
            pieces: [
                Bitboard::new(0x4200_0000_0000_0042), // knight
                Bitboard::new(0x2400_0000_0000_0024), // bishop
                Bitboard::new(0x8100_0000_0000_0081), // rook
                Bitboard::new(0x0800_0000_0000_0008), // queen
                Bitboard::new(0x00FF_0000_0000_FF00), // pawn
                Bitboard::new(0x1000_0000_0000_0010), // king
            ],
            player: Color::White,
            en_passant_square: None,
            castle_rights: CastleRights::ALL_RIGHTS,
        }
    }
}
