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

//! Perft node counts on the standard reference positions.

use fiddler_movegen::{divide, initialize_tables, perft, Board};

/// Check the node counts of `fen` at each depth from 1 onward.
fn perft_assistant(fen: &str, node_counts: &[u64]) {
    let tables = initialize_tables();
    let b = Board::from_fen(fen).unwrap();
    for (i, num) in node_counts.iter().enumerate() {
        let depth = u8::try_from(i + 1).unwrap();
        assert_eq!(perft(tables, &b, depth), *num, "depth {depth} of {fen}");
    }
}

#[test]
fn perft_start_position() {
    perft_assistant(Board::START_FEN, &[20, 400, 8_902, 197_281]);
}

#[test]
fn perft_kiwipete() {
    perft_assistant(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        &[48, 2_039, 97_862],
    );
}

#[test]
/// An endgame with many en passant and check situations.
fn perft_endgame() {
    perft_assistant(
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        &[14, 191, 2_812, 43_238],
    );
}

#[test]
/// A position full of promotions and checks.
fn perft_unbalanced() {
    perft_assistant(
        "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
        &[6, 264, 9_467, 422_333],
    );
}

#[test]
/// The mirrored version of the unbalanced position, with Black to move.
fn perft_unbalanced_mirrored() {
    perft_assistant(
        "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        &[6, 264, 9_467],
    );
}

#[test]
fn perft_edwards() {
    perft_assistant(
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        &[44, 1_486, 62_379],
    );
}

#[test]
fn perft_edwards2() {
    perft_assistant(
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
        &[46, 2_079, 89_890],
    );
}

#[test]
/// Test the divide output of Kiwipete against its published split.
fn divide_kiwipete() {
    let tables = initialize_tables();
    let b = Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
        .unwrap();
    let split = divide(tables, &b, 2);
    assert_eq!(split.len(), 48);
    let count_of = |uci: &str| {
        split
            .iter()
            .find(|(m, _)| m.to_uci() == uci)
            .map(|&(_, n)| n)
    };
    assert_eq!(count_of("e1g1"), Some(43));
    assert_eq!(count_of("e1c1"), Some(43));
    assert_eq!(count_of("d5e6"), Some(46));
    assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
}
