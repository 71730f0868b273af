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

//! Configuration for building the attack tables.

use crate::magic::NUM_MAGIC_TRIES;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the multipliers for the sliding-piece tables come from.
pub enum MagicSource {
    /// Use the multipliers shipped with this crate. They are still checked
    /// against every occupancy while loading.
    Saved,
    /// Search for fresh multipliers with a random number generator seeded
    /// with `seed`. The same seed always produces the same tables.
    Search { seed: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Configuration options for constructing an `AttackTables`.
pub struct TableConfig {
    /// The source of magic multipliers.
    pub source: MagicSource,
    /// The number of candidate multipliers to try for each square before
    /// giving up. Only used when searching.
    pub max_attempts: u64,
}

impl TableConfig {
    #[must_use]
    /// Get the default configuration, which loads the saved magics.
    pub const fn new() -> TableConfig {
        TableConfig {
            source: MagicSource::Saved,
            max_attempts: NUM_MAGIC_TRIES,
        }
    }

    #[must_use]
    /// Get a configuration which searches for magics with the given seed.
    pub const fn searching(seed: u64) -> TableConfig {
        TableConfig {
            source: MagicSource::Search { seed },
            max_attempts: NUM_MAGIC_TRIES,
        }
    }
}

impl Default for TableConfig {
    fn default() -> TableConfig {
        TableConfig::new()
    }
}
