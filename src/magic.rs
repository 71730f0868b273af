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

//! Magic bitboards, a perfect-hashing scheme used for looking up the attacks
//! of bishops, rooks, and queens under any occupancy.

use super::{Bitboard, Square};

use crate::error::TableError;

use std::fmt::{Display, Formatter};

use tracing::debug;

/// The default number of times to try generating a magic for one square
/// before giving up.
pub const NUM_MAGIC_TRIES: u64 = 10_000_000;

/// A saved list of magics for rooks created using the generator. Some magics
/// for sizes below the required bitshift amount were taken from the
/// Chessprogramming Wiki.
const SAVED_ROOK_MAGICS: [u64; 64] = [
    0x4080_0020_4000_1480, // a1
    0x0040_0010_0140_2000, // b1
    0x0300_2000_1810_4100, // c1
    0x2100_0409_0110_0120, // d1
    0x8a00_0600_0408_2070, // e1
    0x0080_0144_0002_0080, // f1
    0x1100_2500_208a_0004, // g1
    0x0900_0042_2201_8100, // h1
    0x0208_8002_28c0_0081, // a2
    0x2280_4010_0340_2000, // b2
    0x0008_8010_0020_0184, // c2
    0x0001_0020_1000_0900, // d2
    0x0182_0006_0010_6008, // e2
    0x2058_8004_0080_0200, // f2
    0x0004_8002_0080_0900, // g2
    0x052d_0012_0040_a100, // h2
    0x0540_0880_0080_24c1, // a3
    0x2000_8480_4002_2000, // b3
    0x0400_4100_1100_6000, // c3
    0x0040_a100_3001_0108, // d3
    0x1204_8080_0800_0402, // e3
    0x0802_8080_0400_2201, // f3
    0x1002_8080_5200_0500, // g3
    0x0004_0a00_2112_4184, // h3
    0x0640_0128_8008_8040, // a4
    0x8410_4000_8020_008a, // b4
    0x0400_2008_8010_0080, // c4
    0x2001_0121_0009_1004, // d4
    0x1200_0d01_0008_0010, // e4
    0x6004_0004_0120_1008, // f4
    0x7500_aa04_0008_4110, // g4
    0x0100_0052_0004_0981, // h4
    0x0040_8040_0280_0020, // a5
    0x0470_0020_0640_0240, // b5
    0x0001_2000_8080_1000, // c5
    0x0000_0812_0200_2040, // d5
    0x00c0_8044_0080_0800, // e5
    0x9000_800a_0080_0400, // f5
    0x0001_0004_0100_0600, // g5
    0x0042_1088_ca00_2401, // h5
    0x0000_c000_228d_8000, // a6
    0x6410_0420_1440_4001, // b6
    0x1002_0040_8226_0014, // c6
    0x206a_0088_11c2_0021, // d6
    0x0002_0018_1022_0024, // e6
    0x2001_0200_0400_8080, // f6
    0x1000_0801_100c_001a, // g6
    0x0048_0082_5402_0011, // h6
    0x48ff_fe99_fecf_aa00, // a7
    0x48ff_fe99_fecf_aa00, // b7
    0x497f_ffad_ff9c_2e00, // c7
    0x613f_ffdd_ffce_9200, // d7
    0xffff_ffe9_ffe7_ce00, // e7
    0xffff_fff5_fff3_e600, // f7
    0x0003_ff95_e5e6_a4c0, // g7
    0x510f_fff5_f63c_96a0, // h7
    0xebff_ffb9_ff9f_c526, // a8
    0x61ff_fedd_feed_aeae, // b8
    0x53bf_ffed_ffde_b1a2, // c8
    0x127f_ffb9_ffdf_b5f6, // d8
    0x411f_ffdd_ffdb_f4d6, // e8
    0x0822_0024_0810_4502, // f8
    0x0003_ffef_27ee_be74, // g8
    0x7645_fffe_cbfe_a79e, // h8
];

/// A saved list of magics for bishops created using the generator. Some magics
/// for sizes below the required bitshift amount were taken from the
/// Chessprogramming Wiki.
const SAVED_BISHOP_MAGICS: [u64; 64] = [
    0xffed_f9fd_7cfc_ffff, // a1
    0xfc09_6285_4a77_f576, // b1
    0x0012_2808_c102_a004, // c1
    0x2851_2400_8240_0440, // d1
    0x0011_1040_1100_0202, // e1
    0x0008_2208_2000_0010, // f1
    0xfc0a_66c6_4a7e_f576, // g1
    0x7ffd_fdfc_bd79_ffff, // h1
    0xfc08_46a6_4a34_fff6, // a2
    0xfc08_7a87_4a3c_f7f6, // b2
    0x0009_8802_0420_a000, // c2
    0x8000_4404_0080_8200, // d2
    0x208c_8450_c001_3407, // e2
    0x1980_1105_2010_8030, // f2
    0xfc08_64ae_59b4_ff76, // g2
    0x3c08_60af_4b35_ff76, // h2
    0x73c0_1af5_6cf4_cffb, // a3
    0x41a0_1cfa_d64a_affc, // b3
    0x0604_0002_04a2_0202, // c3
    0x0002_8208_0602_4000, // d3
    0x008a_0024_2201_0201, // e3
    0x2082_0040_8801_0802, // f3
    0x7c0c_028f_5b34_ff76, // g3
    0xfc0a_028e_5ab4_df76, // h3
    0x0810_0420_d104_1080, // a4
    0x0904_5100_0210_0100, // b4
    0x0202_2808_0406_4403, // c4
    0x004c_0040_0c03_0082, // d4
    0x0602_0010_0200_5011, // e4
    0x7209_0200_c108_9000, // f4
    0x4211_4104_2400_8805, // g4
    0x0002_8484_2126_0804, // h4
    0xc001_0412_1121_2004, // a5
    0x0208_0188_0004_4800, // b5
    0x0080_2064_1058_0800, // c5
    0x0000_2011_0008_0084, // d5
    0x0208_0034_0009_4100, // e5
    0x2190_4102_0000_4058, // f5
    0x0188_8214_0180_8080, // g5
    0x2006_0a02_0000_c4c0, // h5
    0xdcef_d9b5_4bfc_c09f, // a6
    0xf95f_fa76_5afd_602b, // b6
    0x200a_1041_1000_2040, // c6
    0x0800_000c_0831_0c00, // d6
    0x0218_0401_0a01_0400, // e6
    0x1092_2004_0022_4100, // f6
    0x43ff_9a5c_f4ca_0c01, // g6
    0x4bff_cd8e_7c58_7601, // h6
    0xfc0f_f286_5334_f576, // a7
    0xfc0b_f6ce_5924_f576, // b7
    0x8052_2060_8c30_0001, // c7
    0x2084_1050_4202_0400, // d7
    0xe018_8010_2206_0220, // e7
    0x0001_1220_4901_0200, // f7
    0xc3ff_b7dc_36ca_8c89, // g7
    0xc3ff_8a54_f4ca_2c89, // h7
    0xffff_fcfc_fd79_edff, // a8
    0xfc08_63fc_cb14_7576, // b8
    0x40a0_0400_6213_3000, // c8
    0x0142_0280_0084_0400, // d8
    0x0009_0900_1006_1200, // e8
    0x0800_8445_2810_0308, // f8
    0xfc08_7e8e_4bb2_f736, // g8
    0x43ff_9e4e_f4ca_2c89, // h8
];

/// The number of bits used to express the saved magic lookups for rooks at
/// each square.
const ROOK_BITS: [u8; 64] = [
    12, 11, 11, 11, 11, 11, 11, 12, // rank 1
    11, 10, 10, 10, 10, 10, 10, 11, // 2
    11, 10, 10, 10, 10, 10, 10, 11, // 3
    11, 10, 10, 10, 10, 10, 10, 11, // 4
    11, 10, 10, 10, 10, 10, 10, 11, // 5
    11, 10, 10, 10, 10, 10, 10, 11, // 6
    10, 9, 9, 9, 9, 9, 9, 10, // 7
    11, 10, 10, 10, 10, 11, 10, 11, // 8
];

/// The number of bits used to express the saved magic lookups for bishops at
/// each square.
const BISHOP_BITS: [u8; 64] = [
    5, 4, 5, 5, 5, 5, 4, 5, // rank 1
    4, 4, 5, 5, 5, 5, 4, 4, // 2
    4, 4, 7, 7, 7, 7, 4, 4, // 3
    5, 5, 7, 9, 9, 7, 5, 5, // 4
    5, 5, 7, 9, 9, 7, 5, 5, // 5
    4, 4, 7, 7, 7, 7, 4, 4, // 6
    4, 4, 5, 5, 5, 5, 4, 4, // 7
    5, 4, 5, 5, 5, 5, 4, 5, // 8
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// A class of sliding piece. Queens are not a class of their own: their
/// attacks are the union of both.
pub enum Slider {
    /// Diagonal movement, like a bishop.
    Bishop,
    /// Orthogonal movement, like a rook.
    Rook,
}

impl Slider {
    /// Get the (rank, file) steps of each ray this slider travels along.
    const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
        }
    }
}

impl Display for Slider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Slider::Bishop => write!(f, "bishop"),
            Slider::Rook => write!(f, "rook"),
        }
    }
}

#[derive(Clone, Debug)]
/// A complete magic table which can generate moves for rooks and bishops.
pub struct MagicTable {
    rook_table: Vec<SquareAttacks>,
    bishop_table: Vec<SquareAttacks>,
}

impl MagicTable {
    /// Create a `MagicTable` from the saved magics, checking every occupancy
    /// of every square for destructive collisions along the way.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Collision` if any saved magic fails to separate
    /// two occupancies with different attack sets.
    pub fn load() -> Result<MagicTable, TableError> {
        Ok(MagicTable {
            rook_table: load_magic_helper(Slider::Rook)?,
            bishop_table: load_magic_helper(Slider::Bishop)?,
        })
    }

    /// Create a `MagicTable` from scratch, searching for new magics with
    /// random numbers from `rng`. Each table index uses exactly as many bits
    /// as the square's mask has squares.
    ///
    /// # Errors
    ///
    /// Returns `TableError::MagicNotFound` if some square has no working
    /// magic after `max_tries` candidates.
    pub fn make(rng: &fastrand::Rng, max_tries: u64) -> Result<MagicTable, TableError> {
        Ok(MagicTable {
            rook_table: make_magic_helper(Slider::Rook, rng, max_tries)?,
            bishop_table: make_magic_helper(Slider::Bishop, rng, max_tries)?,
        })
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a rook on `sq` could make when the board is
    /// occupied by `occupancy`. Squares outside the rook's mask are ignored,
    /// so the full board occupancy may be passed.
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        get_attacks(occupancy, sq, &self.rook_table)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks that a bishop on `sq` could make when the board is
    /// occupied by `occupancy`.
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        get_attacks(occupancy, sq, &self.bishop_table)
    }

    #[inline(always)]
    #[must_use]
    /// Get the attacks of a slider of class `slider` on `sq`.
    pub fn attacks(&self, slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
        match slider {
            Slider::Bishop => self.bishop_attacks(sq, occupancy),
            Slider::Rook => self.rook_attacks(sq, occupancy),
        }
    }

    #[must_use]
    /// Get the total number of attack entries stored across every square.
    pub fn num_entries(&self) -> usize {
        self.rook_table
            .iter()
            .chain(&self.bishop_table)
            .map(|sa| sa.attacks.len())
            .sum()
    }
}

/// A structure containing all the information needed to generate moves for a
/// rook or bishop from one square.
#[derive(Clone, Debug)]
struct SquareAttacks {
    /// A mask which, when &ed with the occupancy bitboard, will give only the
    /// bits that matter when computing moves.
    mask: Bitboard,
    /// The magic number to multiply to hash the current board effectively.
    magic: Bitboard,
    /// A lookup vector of squares attacked.
    attacks: Vec<Bitboard>,
    /// The shift related to this square.
    shift: u8,
}

/// Load the saved magics for one class of slider.
fn load_magic_helper(slider: Slider) -> Result<Vec<SquareAttacks>, TableError> {
    let (magics, bits) = match slider {
        Slider::Rook => (&SAVED_ROOK_MAGICS, &ROOK_BITS),
        Slider::Bishop => (&SAVED_BISHOP_MAGICS, &BISHOP_BITS),
    };
    let mut table = Vec::with_capacity(64);
    for sq in Bitboard::ALL {
        let i = sq as usize;
        let mask = relevant_mask(sq, slider);
        let magic = Bitboard::new(magics[i]);
        let shift = 64 - bits[i];
        let mut attacks = vec![Bitboard::EMPTY; 1 << bits[i]];
        for j in 0..(1 << mask.len()) {
            let occupancy = index_to_occupancy(j, mask);
            let attack = directional_attacks(sq, slider, occupancy);
            let key = compute_magic_key(occupancy, magic, shift);
            // a slider always attacks at least one square, so an empty entry
            // has not been written yet
            if attacks[key].is_empty() {
                attacks[key] = attack;
            } else if attacks[key] != attack {
                return Err(TableError::Collision { square: sq, slider });
            }
        }
        table.push(SquareAttacks {
            mask,
            magic,
            attacks,
            shift,
        });
    }

    Ok(table)
}

/// Search for magics for every square for one class of slider.
fn make_magic_helper(
    slider: Slider,
    rng: &fastrand::Rng,
    max_tries: u64,
) -> Result<Vec<SquareAttacks>, TableError> {
    let mut table = Vec::with_capacity(64);
    // we know that there are at most 12 squares that will matter when it
    // comes to attack lookups
    let mut occupancies = Vec::with_capacity(1 << 12);
    let mut attacks = Vec::with_capacity(1 << 12);
    let mut used = vec![Bitboard::EMPTY; 1 << 12];

    for sq in Bitboard::ALL {
        let mask = relevant_mask(sq, slider);
        // number of squares where occupancy matters
        let num_points = mask.len();
        let shift = 64 - num_points;

        // compute every possible occupancy arrangement for attacking
        occupancies.clear();
        attacks.clear();
        for j in 0..(1 << num_points) {
            let occupancy = index_to_occupancy(j, mask);
            occupancies.push(occupancy);
            attacks.push(directional_attacks(sq, slider, occupancy));
        }

        // try random magics until one works
        let mut found = None;
        for attempt in 1..=max_tries {
            let magic = random_sparse_bitboard(rng);
            // a magic which pushes few mask bits into the top byte is
            // very unlikely to hash well
            if ((mask * magic) >> 56).len() < 6 {
                continue;
            }

            // repopulate the usage table with zeros
            used[..1 << num_points].fill(Bitboard::EMPTY);
            let mut collided = false;
            for (&occupancy, &attack) in occupancies.iter().zip(&attacks) {
                let key = compute_magic_key(occupancy, magic, shift);
                if used[key].is_empty() {
                    used[key] = attack;
                } else if used[key] != attack {
                    collided = true;
                    break;
                }
            }

            if !collided {
                debug!(square = %sq, %slider, attempt, "found magic");
                found = Some(magic);
                break;
            }
        }

        let Some(magic) = found else {
            return Err(TableError::MagicNotFound {
                square: sq,
                slider,
                attempts: max_tries,
            });
        };
        table.push(SquareAttacks {
            mask,
            magic,
            attacks: used[..1 << num_points].to_vec(),
            shift,
        });
    }

    Ok(table)
}

#[inline(always)]
/// Get the attacks a square has, given a magic lookup table and the current
/// occupancy.
fn get_attacks(occupancy: Bitboard, sq: Square, table: &[SquareAttacks]) -> Bitboard {
    // SAFETY: every table has exactly 64 entries and `sq` is a valid square.
    // The key is shifted down so that it fits the attack vector.
    let magic_data = unsafe { table.get_unchecked(sq as usize) };
    let masked_occupancy = occupancy & magic_data.mask;
    let key = compute_magic_key(masked_occupancy, magic_data.magic, magic_data.shift);

    unsafe { *magic_data.attacks.get_unchecked(key) }
}

#[inline(always)]
/// Use magic hashing to get the index to look up attacks in a bitboard.
fn compute_magic_key(occupancy: Bitboard, magic: Bitboard, shift: u8) -> usize {
    usize::from((occupancy * magic) >> shift)
}

#[must_use]
/// Create the mask of squares whose occupancy can change the attacks of a
/// slider on `sq`. The last square of each ray is left out, since a blocker
/// there cannot hide anything further along the ray.
pub fn relevant_mask(sq: Square, slider: Slider) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for (rank_step, file_step) in slider.directions() {
        let mut current = sq;
        while let Some(next) = current.offset(rank_step, file_step) {
            if next.offset(rank_step, file_step).is_none() {
                break;
            }
            mask.insert(next);
            current = next;
        }
    }

    mask
}

/// Given some mask, create the occupancy bitboard according to this index.
/// `index` must be less than 2 ^ (number of ones in `mask`).
///
/// For instance: if `mask` represented a board like the following:
/// ```text
/// 8 | . . . . . . . .
/// 7 | . . . . . . . .
/// 6 | . . . . . . . .
/// 5 | . . . . . . . .
/// 4 | . . . . . . . .
/// 3 | . . . . . . . .
/// 2 | . 1 . . . . . .
/// 1 | 1 . . . . . . .
/// - + - - - - - - - -
/// . | A B C D E F G H
/// ```
///
/// and the given index were `0b10`, then the output would contain only B2.
fn index_to_occupancy(index: usize, mask: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for (i, sq) in mask.enumerate() {
        if (index & (1 << i)) != 0 {
            result.insert(sq);
        }
    }

    result
}

#[must_use]
/// Construct the squares attacked by a slider on `sq` when the board is
/// occupied by the pieces in `occupancy`. Each ray stops at (and includes) the
/// first occupied square. This is slow and should only be used for building
/// and checking magic tables, not for move generation.
pub fn directional_attacks(sq: Square, slider: Slider, occupancy: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for (rank_step, file_step) in slider.directions() {
        let mut current = sq;
        while let Some(next) = current.offset(rank_step, file_step) {
            result.insert(next);
            if occupancy.contains(next) {
                break;
            }
            current = next;
        }
    }

    result
}

#[inline(always)]
/// Generate a random, mostly-empty bitboard.
fn random_sparse_bitboard(rng: &fastrand::Rng) -> Bitboard {
    let mut result = Bitboard::new(rng.u64(..));
    for _ in 0..2 {
        result &= Bitboard::new(rng.u64(..));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Check every occupancy subset of every square's mask against the slow
    /// ray walk, with and without unrelated pieces elsewhere on the board.
    fn assert_exhaustively_correct(table: &MagicTable) {
        let rng = fastrand::Rng::with_seed(0xF1DD);
        for slider in [Slider::Bishop, Slider::Rook] {
            for sq in Bitboard::ALL {
                let mask = relevant_mask(sq, slider);
                for j in 0..(1 << mask.len()) {
                    let occupancy = index_to_occupancy(j, mask);
                    let expected = directional_attacks(sq, slider, occupancy);
                    assert_eq!(table.attacks(slider, sq, occupancy), expected);

                    let noise = Bitboard::new(rng.u64(..)) & !mask;
                    assert_eq!(table.attacks(slider, sq, occupancy | noise), expected);
                }
            }
        }
    }

    #[test]
    fn rook_mask() {
        assert_eq!(
            relevant_mask(Square::A1, Slider::Rook),
            Bitboard::new(0x0001_0101_0101_017E)
        );
        assert_eq!(
            relevant_mask(Square::E1, Slider::Rook),
            Bitboard::new(0x0010_1010_1010_106E)
        );
        assert_eq!(
            relevant_mask(Square::E5, Slider::Rook),
            Bitboard::new(0x0010_106E_1010_1000)
        );
    }

    #[test]
    fn bishop_mask() {
        assert_eq!(
            relevant_mask(Square::A1, Slider::Bishop),
            Bitboard::new(0x0040_2010_0804_0200)
        );
        assert_eq!(
            relevant_mask(Square::E1, Slider::Bishop),
            Bitboard::new(0x0000_0000_0244_2800)
        );
        assert_eq!(
            relevant_mask(Square::E5, Slider::Bishop),
            Bitboard::new(0x0044_2800_2844_0200)
        );
    }

    #[test]
    fn mask_sizes() {
        assert_eq!(relevant_mask(Square::A1, Slider::Rook).len(), 12);
        assert_eq!(relevant_mask(Square::D4, Slider::Rook).len(), 10);
        assert_eq!(relevant_mask(Square::A1, Slider::Bishop).len(), 6);
        assert_eq!(relevant_mask(Square::D4, Slider::Bishop).len(), 9);
    }

    #[test]
    fn valid_index_to_occupancy() {
        let mask = Bitboard::new(0b1111);
        for i in 0..16 {
            let occu = index_to_occupancy(i, mask);
            assert_eq!(occu, Bitboard::new(i as u64));
        }
    }

    #[test]
    fn slow_bishop_attacks() {
        // cases in order:
        // bishop on A1 is blocked by piece on B2, so it only has 1 attack
        // bishop on A8 is blocked by piece on B7, so it only has 1 attack
        // bishop is in board start position on C1
        // bishop in board start position on F1
        let occupancies = [
            Bitboard::new(0x0000_0000_0000_0201),
            Bitboard::new(0x0102_0000_0000_0000),
            Bitboard::new(0xFFFF_0000_0000_FFFF),
            Bitboard::new(0xFFFF_0000_0000_FFFF),
        ];
        let squares = [Square::A1, Square::A8, Square::C1, Square::F1];
        let attacks = [
            Bitboard::new(0x0000_0000_0000_0200),
            Bitboard::new(0x0002_0000_0000_0000),
            Bitboard::new(0x0000_0000_0000_0A00),
            Bitboard::new(0x0000_0000_0000_5000),
        ];
        for i in 0..4 {
            assert_eq!(
                directional_attacks(squares[i], Slider::Bishop, occupancies[i]),
                attacks[i]
            );
        }
    }

    #[test]
    fn magic_rook_attacks() {
        let table = MagicTable::load().unwrap();
        // rook on A1 blocked by other pieces, so it only attacks its neighbors
        assert_eq!(
            table.rook_attacks(Square::A1, Bitboard::new(0x103)),
            Bitboard::new(0x102)
        );
        // likewise, but there are other pieces on the board to be masked out
        assert_eq!(
            table.rook_attacks(Square::A1, Bitboard::new(0x1FC3)),
            Bitboard::new(0x102)
        );
        // an empty board gives the full cross
        assert_eq!(table.rook_attacks(Square::D4, Bitboard::EMPTY).len(), 14);
    }

    #[test]
    fn magic_bishop_attacks() {
        let table = MagicTable::load().unwrap();
        let start = Bitboard::new(0xFFFF_0000_0000_FFFF);
        assert_eq!(
            table.bishop_attacks(Square::C1, start),
            Bitboard::new(0x0000_0000_0000_0A00)
        );
        assert_eq!(
            table.bishop_attacks(Square::F1, start),
            Bitboard::new(0x0000_0000_0000_5000)
        );
        assert_eq!(table.bishop_attacks(Square::D4, Bitboard::EMPTY).len(), 13);
    }

    #[test]
    /// Test that the saved magics agree with the ray walk on every occupancy.
    fn saved_magics_exhaustive() {
        assert_exhaustively_correct(&MagicTable::load().unwrap());
    }

    #[test]
    /// Test that freshly searched magics agree with the ray walk on every
    /// occupancy.
    fn searched_magics_exhaustive() {
        let rng = fastrand::Rng::with_seed(12345);
        let table = MagicTable::make(&rng, NUM_MAGIC_TRIES).unwrap();
        assert_exhaustively_correct(&table);
    }

    #[test]
    /// Test that a search which cannot try any candidates fails cleanly.
    fn exhausted_search_fails() {
        let rng = fastrand::Rng::with_seed(1);
        assert!(matches!(
            MagicTable::make(&rng, 0),
            Err(TableError::MagicNotFound {
                square: Square::A1,
                slider: Slider::Rook,
                attempts: 0,
            })
        ));
    }
}
