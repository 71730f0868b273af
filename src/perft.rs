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

//! Performance tests: counting the leaves of the legal move tree to a fixed
//! depth, to check the generator against known node counts.

use crate::{AttackTables, Board, GenType, Move, MoveGenerator, Piece, Position};

#[must_use]
/// Count the number of legal move sequences of length `depth` from `board`.
///
/// The generator's pseudo-legal output is filtered by playing each move and
/// discarding those which leave the mover's king attacked.
///
/// # Examples
///
/// ```
/// use fiddler_movegen::{initialize_tables, perft, Board};
///
/// let tables = initialize_tables();
/// assert_eq!(perft(tables, &Board::default(), 2), 400);
/// ```
pub fn perft(tables: &AttackTables, board: &Board, depth: u8) -> u64 {
    perft_search(tables, board, depth, GenType::Evasions)
}

#[must_use]
/// Count the legal move sequences of length `depth` beginning with each legal
/// move from `board`. The counts sum to `perft(tables, board, depth)`.
/// Returns nothing if `depth` is 0.
pub fn divide(tables: &AttackTables, board: &Board, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let mut generator = MoveGenerator::new(tables, board);
    generator
        .generate(GenType::Evasions)
        .iter()
        .filter_map(|sm| {
            legal_child(tables, board, sm.m)
                .map(|child| (sm.m, perft_search(tables, &child, depth - 1, GenType::Evasions)))
        })
        .collect()
}

/// The core search algorithm for perft.
fn perft_search(tables: &AttackTables, board: &Board, depth: u8, gen_type: GenType) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut generator = MoveGenerator::new(tables, board);
    let moves = generator.generate(gen_type);
    let mut total = 0;
    for sm in moves {
        if let Some(child) = legal_child(tables, board, sm.m) {
            total += if depth == 1 {
                1
            } else {
                perft_search(tables, &child, depth - 1, gen_type)
            };
        }
    }

    total
}

/// Play `m` on a copy of `board`, returning the result only if the mover's
/// king is not left attacked.
fn legal_child(tables: &AttackTables, board: &Board, m: Move) -> Option<Board> {
    let player = board.side_to_move();
    let mut child = *board;
    child.make_move(m);
    let king_safe = child
        .colored(player, Piece::King)
        .all(|king_sq| !tables.is_square_attacked_by(&child, king_sq, !player));

    king_safe.then_some(child)
}
