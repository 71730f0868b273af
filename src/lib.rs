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

//! Bitboard move generation for chess.
//!
//! Sliding-piece attacks are looked up through magic bitboards, and every
//! other piece's attacks through precomputed step tables. All tables are
//! built once, by `initialize_tables()`, and then shared immutably by every
//! generator in the process.
//!
//! ```
//! use fiddler_movegen::{initialize_tables, Board, GenType, MoveGenerator};
//!
//! let tables = initialize_tables();
//! let board = Board::from_fen(
//!     "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
//! )
//! .unwrap();
//! let mut generator = MoveGenerator::new(tables, &board);
//!
//! // the only capture is exd5
//! let captures = generator.generate(GenType::Captures);
//! assert_eq!(captures.len(), 1);
//! assert_eq!(captures.as_slice()[0].m.to_uci(), "e4d5");
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::inline_always, clippy::module_name_repetitions)]

// Many module elements are re-exported to make names more ergonomic to access.

mod attacks;
pub use attacks::{initialize_tables, initialize_tables_with, AttackTables};

mod bitboard;
pub use bitboard::Bitboard;

mod board;
pub use board::Board;

mod castling;
pub use castling::CastleRights;

mod color;
pub use color::Color;

mod config;
pub use config::{MagicSource, TableConfig};

pub mod error;
pub use error::{FenError, SquareParseError, TableError};

mod history;
pub use history::{History, HISTORY_MAX};

pub mod magic;

pub mod movegen;
pub use movegen::{GenType, MoveGenerator, CAPTURE_BASE};

mod movelist;
pub use movelist::{MoveList, ScoredMove, MAX_MOVES};

mod moves;
pub use moves::{Move, MoveKind};

mod perft;
pub use perft::{divide, perft};

mod piece;
pub use piece::Piece;

mod position;
pub use position::Position;

mod square;
pub use square::Square;
