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

//! Error types for the fallible, non-hot-path parts of the crate: parsing
//! positions and building the attack tables.

use crate::{magic::Slider, Square};

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
/// A failure to interpret a string or integer as a square.
pub enum SquareParseError {
    #[error("square name {0:?} must be exactly 2 characters")]
    Length(String),
    #[error("illegal file in square name {0:?}")]
    File(String),
    #[error("illegal rank in square name {0:?}")]
    Rank(String),
    #[error("square index {0} is out of bounds")]
    OutOfRange(u8),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
/// A failure to load a board from a FEN string.
pub enum FenError {
    #[error("reached end of FEN while parsing {0}")]
    UnexpectedEnd(&'static str),
    #[error("unexpected character {found:?} while parsing {section}")]
    UnexpectedChar { found: char, section: &'static str },
    #[error("piece placement runs off the board")]
    Overflow,
    #[error("unrecognized player to move {0:?}")]
    SideToMove(String),
    #[error(transparent)]
    Square(#[from] SquareParseError),
    #[error("board state after loading was illegal")]
    IllegalBoard,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
/// A failure to construct the sliding-piece attack tables. Any of these is
/// fatal: move generation cannot proceed without a complete table.
pub enum TableError {
    #[error("no collision-free {slider} magic found for {square} after {attempts} attempts")]
    MagicNotFound {
        square: Square,
        slider: Slider,
        attempts: u64,
    },
    #[error("saved {slider} magic for {square} maps two occupancies with different attacks to one index")]
    Collision { square: Square, slider: Slider },
}
