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

//! Squares, which are positions on a board.

use crate::error::SquareParseError;

use std::{
    convert::TryFrom,
    fmt::{Display, Formatter},
    mem::transmute,
};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// A square: one of 64 spots on a board that a piece can occupy.
///
/// Internally, `Square`s are represented as a single integer to maintain a
/// small size. From MSB to LSB, each square is composed of:
/// * 2 unused bits
/// * 3 bits for the rank
/// * 3 bits for the file
pub enum Square {
    A1 = 0,
    B1 = 1,
    C1 = 2,
    D1 = 3,
    E1 = 4,
    F1 = 5,
    G1 = 6,
    H1 = 7,
    A2 = 8,
    B2 = 9,
    C2 = 10,
    D2 = 11,
    E2 = 12,
    F2 = 13,
    G2 = 14,
    H2 = 15,
    A3 = 16,
    B3 = 17,
    C3 = 18,
    D3 = 19,
    E3 = 20,
    F3 = 21,
    G3 = 22,
    H3 = 23,
    A4 = 24,
    B4 = 25,
    C4 = 26,
    D4 = 27,
    E4 = 28,
    F4 = 29,
    G4 = 30,
    H4 = 31,
    A5 = 32,
    B5 = 33,
    C5 = 34,
    D5 = 35,
    E5 = 36,
    F5 = 37,
    G5 = 38,
    H5 = 39,
    A6 = 40,
    B6 = 41,
    C6 = 42,
    D6 = 43,
    E6 = 44,
    F6 = 45,
    G6 = 46,
    H6 = 47,
    A7 = 48,
    B7 = 49,
    C7 = 50,
    D7 = 51,
    E7 = 52,
    F7 = 53,
    G7 = 54,
    H7 = 55,
    A8 = 56,
    B8 = 57,
    C8 = 58,
    D8 = 59,
    E8 = 60,
    F8 = 61,
    G8 = 62,
    H8 = 63,
}

impl Square {
    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    /// Create a Square from the given rank and file. The ranks run from 0 to 7
    /// (instead of 1 through 8), and the files run from A to H. Returns `None`
    /// if either coordinate is off the board.
    pub fn new(rank: usize, file: usize) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square::from_index(((rank << 3) | file) as u8))
        } else {
            None
        }
    }

    #[inline(always)]
    #[must_use]
    /// Construct the square with index `idx`. Only the lowest six bits of
    /// `idx` are used, so every input maps to some square.
    pub const fn from_index(idx: u8) -> Square {
        // SAFETY: masking with 63 keeps the value in the range of the enum's
        // discriminants.
        unsafe { transmute(idx & 63) }
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the rank (0 -> 1, ...) of this square.
    pub const fn rank(self) -> usize {
        (self as u8 >> 3u8) as usize
    }

    #[inline(always)]
    #[must_use]
    /// Get the integer representing the file (0 -> A, ...) of this square.
    pub const fn file(self) -> usize {
        (self as u8 & 7u8) as usize
    }

    #[inline(always)]
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    /// Get the square reached by moving `rank_step` ranks and `file_step`
    /// files from this square. Returns `None` if the destination would leave
    /// the board; the rank and file are checked separately, so a step can
    /// never wrap around from one side of the board to the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use fiddler_movegen::Square;
    ///
    /// assert_eq!(Square::B1.offset(2, -1), Some(Square::A3));
    /// assert_eq!(Square::A1.offset(0, -1), None);
    /// ```
    pub fn offset(self, rank_step: i8, file_step: i8) -> Option<Square> {
        let rank = self.rank() as i8 + rank_step;
        let file = self.file() as i8 + file_step;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Square::new(rank as usize, file as usize)
        } else {
            None
        }
    }

    /// Convert an algebraic string (such as 'e7') to a square.
    /// To get an `Ok` result, the string must be two characters.
    /// The file must be in lowercase.
    ///
    /// # Errors
    ///
    /// This function will return an `Err` if `s` is not a legal algebraic
    /// square.
    pub fn from_algebraic(s: &str) -> Result<Square, SquareParseError> {
        let mut chars = s.chars();
        let (Some(file_chr), Some(rank_chr), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareParseError::Length(s.to_string()));
        };
        let file = "abcdefgh"
            .find(file_chr)
            .ok_or_else(|| SquareParseError::File(s.to_string()))?;
        let rank = match rank_chr.to_digit(10) {
            Some(n @ 1..=8) => n as usize - 1,
            _ => return Err(SquareParseError::Rank(s.to_string())),
        };

        Square::new(rank, file).ok_or_else(|| SquareParseError::Rank(s.to_string()))
    }

    #[must_use]
    /// Get the name of the file of this square. For instance, the square
    /// representing A1 will have the name "a".
    pub fn file_name(self) -> &'static str {
        ["a", "b", "c", "d", "e", "f", "g", "h"][self.file()]
    }
}

impl Display for Square {
    #[inline(always)]
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_name(), self.rank() + 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareParseError;

    #[inline(always)]
    fn try_from(x: u8) -> Result<Square, Self::Error> {
        if x <= Square::H8 as u8 {
            Ok(Square::from_index(x))
        } else {
            Err(SquareParseError::OutOfRange(x))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("e4"), Ok(Square::E4));
        assert_eq!(Square::from_algebraic("f7"), Ok(Square::F7));
        assert_eq!(Square::from_algebraic("h8"), Ok(Square::H8));
    }

    #[test]
    fn bad_algebraic() {
        assert!(Square::from_algebraic("e").is_err());
        assert!(Square::from_algebraic("e44").is_err());
        assert!(Square::from_algebraic("i4").is_err());
        assert!(Square::from_algebraic("e9").is_err());
        assert!(Square::from_algebraic("e0").is_err());
    }

    #[test]
    /// Test that steps which would leave the board are rejected instead of
    /// wrapping around.
    fn offset_edges() {
        assert_eq!(Square::H4.offset(0, 1), None);
        assert_eq!(Square::A4.offset(1, -1), None);
        assert_eq!(Square::H8.offset(1, 0), None);
        assert_eq!(Square::E4.offset(-1, 1), Some(Square::F3));
    }

    #[test]
    fn rank_and_file() {
        assert_eq!(Square::C5.rank(), 4);
        assert_eq!(Square::C5.file(), 2);
        assert_eq!(Square::new(4, 2), Some(Square::C5));
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::try_from(64), Err(SquareParseError::OutOfRange(64)));
    }

    #[test]
    fn display() {
        assert_eq!(Square::A1.to_string(), "a1");
        assert_eq!(Square::G7.to_string(), "g7");
    }
}
