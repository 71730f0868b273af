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

//! Precomputed attack tables for every piece type, and the queries built on
//! them.
//!
//! All tables live in one `AttackTables` value. A process builds it once with
//! `initialize_tables()` before generating any moves, after which it is
//! immutable and may be read from any number of threads.

use std::time::Instant;

use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::{
    config::{MagicSource, TableConfig},
    error::TableError,
    magic::MagicTable,
    Bitboard, Color, Piece, Position, Square,
};

/// The process-wide attack tables.
static TABLES: OnceCell<AttackTables> = OnceCell::new();

/// The (rank, file) steps of a knight.
const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

/// The (rank, file) steps of a king.
const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

#[derive(Clone, Debug)]
/// Every lookup table needed for move generation: step attacks for knights,
/// kings, and pawns, the magic tables for sliders, and the between and line
/// tables for pins and checks.
pub struct AttackTables {
    /// A bitboard of all the squares a knight can move to if its position is
    /// the index of the list.
    knight: [Bitboard; 64],
    /// A bitboard of all the squares a king can move to if its position is
    /// the index of the list.
    king: [Bitboard; 64],
    /// The squares which a pawn on the given square can attack. The first
    /// index is for White's pawn attacks, the second is for Black's.
    pawn: [[Bitboard; 64]; 2],
    /// Sliding attacks for bishops and rooks.
    magic: MagicTable,
    /// `between[A1][A3]` contains only A2.
    between: Vec<[Bitboard; 64]>,
    /// `line[A1][B2]` contains the whole main diagonal.
    line: Vec<[Bitboard; 64]>,
}

#[must_use]
/// Build the attack tables with the default configuration, or return the
/// tables built by an earlier call. This must be called once before the first
/// `MoveGenerator` is constructed; calling it again is cheap and returns the
/// same tables.
///
/// # Panics
///
/// This function will panic if the tables cannot be built. Move generation is
/// impossible without them, so there is nothing to recover to.
pub fn initialize_tables() -> &'static AttackTables {
    initialize_tables_with(&TableConfig::default())
}

#[must_use]
/// Build the attack tables with `config`, or return the tables built by an
/// earlier call. Only the first call's configuration has any effect.
///
/// # Panics
///
/// This function will panic if the tables cannot be built.
pub fn initialize_tables_with(config: &TableConfig) -> &'static AttackTables {
    TABLES.get_or_init(|| match AttackTables::build(config) {
        Ok(tables) => tables,
        Err(e) => {
            error!(error = %e, "failed to build attack tables");
            panic!("failed to build attack tables: {e}");
        }
    })
}

impl AttackTables {
    /// Construct a fresh set of attack tables.
    ///
    /// # Errors
    ///
    /// Returns an error if the sliding-piece tables could not be built; see
    /// `TableError`.
    pub fn build(config: &TableConfig) -> Result<AttackTables, TableError> {
        let tic = Instant::now();
        let magic = match config.source {
            MagicSource::Saved => MagicTable::load()?,
            MagicSource::Search { seed } => {
                let rng = fastrand::Rng::with_seed(seed);
                MagicTable::make(&rng, config.max_attempts)?
            }
        };

        let mut tables = AttackTables {
            knight: create_step_attacks(&KNIGHT_STEPS),
            king: create_step_attacks(&KING_STEPS),
            pawn: [
                create_step_attacks(&[(1, 1), (1, -1)]),
                create_step_attacks(&[(-1, 1), (-1, -1)]),
            ],
            magic,
            between: vec![[Bitboard::EMPTY; 64]; 64],
            line: vec![[Bitboard::EMPTY; 64]; 64],
        };
        tables.fill_lines();

        info!(
            source = ?config.source,
            magic_entries = tables.magic.num_entries(),
            elapsed_ms = tic.elapsed().as_millis(),
            "built attack tables"
        );
        Ok(tables)
    }

    #[must_use]
    /// Get the process-wide tables, if `initialize_tables()` has run.
    pub fn get() -> Option<&'static AttackTables> {
        TABLES.get()
    }

    /// Populate the between and line tables from the sliding attacks on an
    /// empty board.
    fn fill_lines(&mut self) {
        for sq1 in Bitboard::ALL {
            let bishop_1 = self.bishop_attacks(sq1, Bitboard::EMPTY);
            let rook_1 = self.rook_attacks(sq1, Bitboard::EMPTY);
            for sq2 in Bitboard::ALL {
                let ends = Bitboard::from(sq1) | Bitboard::from(sq2);
                let (i, j) = (sq1 as usize, sq2 as usize);
                if bishop_1.contains(sq2) {
                    let bishop_2 = self.bishop_attacks(sq2, Bitboard::EMPTY);
                    let inner = self.bishop_attacks(sq1, Bitboard::from(sq2))
                        & self.bishop_attacks(sq2, Bitboard::from(sq1));
                    self.line[i][j] |= ends | (bishop_1 & bishop_2);
                    self.between[i][j] |= inner;
                }
                if rook_1.contains(sq2) {
                    let rook_2 = self.rook_attacks(sq2, Bitboard::EMPTY);
                    let inner = self.rook_attacks(sq1, Bitboard::from(sq2))
                        & self.rook_attacks(sq2, Bitboard::from(sq1));
                    self.line[i][j] |= ends | (rook_1 & rook_2);
                    self.between[i][j] |= inner;
                }
            }
        }
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares a knight on `sq` attacks.
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight[sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares a king on `sq` attacks.
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares a pawn of color `color` standing on `sq` attacks.
    pub fn pawn_attacks(&self, color: Color, sq: Square) -> Bitboard {
        self.pawn[color as usize][sq as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares a bishop on `sq` attacks, given the full board
    /// occupancy.
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.magic.bishop_attacks(sq, occupancy)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares a rook on `sq` attacks, given the full board
    /// occupancy.
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.magic.rook_attacks(sq, occupancy)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares a queen on `sq` attacks: the union of the bishop and
    /// rook attacks from `sq`.
    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy)
    }

    #[inline(always)]
    #[must_use]
    /// Get the squares strictly between `sq1` and `sq2` along a rook or
    /// bishop line. Empty if the squares are not aligned or are adjacent.
    pub fn between(&self, sq1: Square, sq2: Square) -> Bitboard {
        self.between[sq1 as usize][sq2 as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Get the full line through `sq1` and `sq2`, edge to edge. Empty if the
    /// squares are not aligned.
    pub fn line(&self, sq1: Square, sq2: Square) -> Bitboard {
        self.line[sq1 as usize][sq2 as usize]
    }

    #[inline(always)]
    #[must_use]
    /// Determine whether three squares lie on one rook or bishop line.
    pub fn aligned(&self, sq1: Square, sq2: Square, sq3: Square) -> bool {
        self.line(sq1, sq2).contains(sq3)
    }

    #[must_use]
    /// Get the squares of every piece of color `color` which attacks `sq`,
    /// with sliders blocked according to `occupancy` rather than the
    /// position's own occupancy. Pawn pushes are not attacks.
    pub fn square_attackers<P: Position + ?Sized>(
        &self,
        pos: &P,
        sq: Square,
        color: Color,
        occupancy: Bitboard,
    ) -> Bitboard {
        let queens = pos.pieces(Piece::Queen);
        let mut attackers = self.pawn_attacks(!color, sq) & pos.pieces(Piece::Pawn);
        attackers |= self.knight_attacks(sq) & pos.pieces(Piece::Knight);
        attackers |= self.rook_attacks(sq, occupancy) & (queens | pos.pieces(Piece::Rook));
        attackers |= self.bishop_attacks(sq, occupancy) & (queens | pos.pieces(Piece::Bishop));
        attackers |= self.king_attacks(sq) & pos.pieces(Piece::King);

        attackers & pos.color(color)
    }

    #[inline(always)]
    #[must_use]
    /// In a given position, is a square attacked by the given color?
    pub fn is_square_attacked_by<P: Position + ?Sized>(
        &self,
        pos: &P,
        sq: Square,
        color: Color,
    ) -> bool {
        !self
            .square_attackers(pos, sq, color, pos.occupancy())
            .is_empty()
    }

    #[must_use]
    /// Get the pieces giving check to the side to move. Empty if the side to
    /// move has no king.
    pub fn checkers<P: Position + ?Sized>(&self, pos: &P) -> Bitboard {
        let player = pos.side_to_move();
        match pos.king_square(player) {
            Some(king_sq) => self.square_attackers(pos, king_sq, !player, pos.occupancy()),
            None => Bitboard::EMPTY,
        }
    }
}

/// Get the step attacks that could be made by moving by each of `steps` from
/// each square. Steps which would leave the board are dropped.
fn create_step_attacks(steps: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (sq, item) in Bitboard::ALL.zip(attacks.iter_mut()) {
        for &(rank_step, file_step) in steps {
            if let Some(target_sq) = sq.offset(rank_step, file_step) {
                item.insert(target_sq);
            }
        }
    }

    attacks
}
