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

//! Castling rights management.

use super::Color;

use std::{
    fmt::{Display, Formatter},
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A simple struct to store the castling rights of both players.
/// The internal bits are used to represent castling rights.
/// From MSB to LSB:
/// * 4 unused bits
/// * Black queenside castling
/// * Black kingside castling
/// * White queenside castling
/// * White kingside castling
pub struct CastleRights(pub u8);

impl CastleRights {
    /// A `CastleRights` where all rights are available.
    pub const ALL_RIGHTS: CastleRights = CastleRights(15);

    /// A `CastleRights` where no rights are available.
    pub const NO_RIGHTS: CastleRights = CastleRights(0);

    #[inline(always)]
    #[must_use]
    /// Create a `CastleRights` for kingside castling on one side.
    pub const fn king_castle(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights(1),
            Color::Black => CastleRights(4),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Create a `CastleRights` for queenside castling on one side.
    pub const fn queen_castle(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights(2),
            Color::Black => CastleRights(8),
        }
    }

    #[must_use]
    /// Get the full rights for one color.
    pub const fn color_rights(color: Color) -> CastleRights {
        match color {
            Color::White => CastleRights(3),
            Color::Black => CastleRights(12),
        }
    }

    #[inline(always)]
    #[must_use]
    /// Does `color` still hold the right to castle kingside?
    pub const fn has_kingside(self, color: Color) -> bool {
        self.0 & CastleRights::king_castle(color).0 != 0
    }

    #[inline(always)]
    #[must_use]
    /// Does `color` still hold the right to castle queenside?
    pub const fn has_queenside(self, color: Color) -> bool {
        self.0 & CastleRights::queen_castle(color).0 != 0
    }
}

impl BitOr<CastleRights> for CastleRights {
    type Output = CastleRights;
    #[inline(always)]
    fn bitor(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }
}

impl BitOrAssign<CastleRights> for CastleRights {
    #[inline(always)]
    fn bitor_assign(&mut self, other: CastleRights) {
        self.0 |= other.0;
    }
}

impl BitAnd<CastleRights> for CastleRights {
    type Output = CastleRights;
    #[inline(always)]
    fn bitand(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & other.0)
    }
}

impl BitAndAssign<CastleRights> for CastleRights {
    #[inline(always)]
    fn bitand_assign(&mut self, other: CastleRights) {
        self.0 &= other.0;
    }
}

impl Not for CastleRights {
    type Output = CastleRights;
    #[inline(always)]
    fn not(self) -> CastleRights {
        CastleRights(self.0 ^ 15)
    }
}

impl Display for CastleRights {
    /// Write these rights in the style of the castling field of a FEN.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if *self == CastleRights::NO_RIGHTS {
            return write!(f, "-");
        }
        for (color, king, queen) in [(Color::White, "K", "Q"), (Color::Black, "k", "q")] {
            if self.has_kingside(color) {
                write!(f, "{king}")?;
            }
            if self.has_queenside(color) {
                write!(f, "{queen}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rights_by_color() {
        let rights = CastleRights::king_castle(Color::White) | CastleRights::queen_castle(Color::Black);
        assert!(rights.has_kingside(Color::White));
        assert!(!rights.has_queenside(Color::White));
        assert!(!rights.has_kingside(Color::Black));
        assert!(rights.has_queenside(Color::Black));
        assert_eq!(rights.to_string(), "Kq");
    }

    #[test]
    fn remove_color_rights() {
        let rights = CastleRights::ALL_RIGHTS & !CastleRights::color_rights(Color::White);
        assert_eq!(rights, CastleRights::color_rights(Color::Black));
        assert_eq!(CastleRights::NO_RIGHTS.to_string(), "-");
    }
}
