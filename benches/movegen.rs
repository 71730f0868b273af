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

//! Benchmarks for move generation, perft, and table construction.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fiddler_movegen::{
    initialize_tables, perft, AttackTables, Board, GenType, MoveGenerator, TableConfig,
};

/// Positions to generate from, by name.
const POSITIONS: [(&str, &str); 3] = [
    ("start", Board::START_FEN),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    (
        "position5",
        "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    ),
];

fn bench_generate(c: &mut Criterion) {
    let tables = initialize_tables();
    let mut group = c.benchmark_group("generate");

    for (name, fen) in POSITIONS {
        let board = Board::from_fen(fen).unwrap();
        let mut generator = MoveGenerator::new(tables, &board);
        for gen_type in [
            GenType::All,
            GenType::Captures,
            GenType::Quiets,
            GenType::Evasions,
        ] {
            group.bench_function(BenchmarkId::new(name, format!("{gen_type:?}")), |b| {
                b.iter(|| black_box(generator.generate(black_box(gen_type)).len()));
            });
        }
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let tables = initialize_tables();
    let mut group = c.benchmark_group("perft");
    group.warm_up_time(Duration::from_secs(1));
    group.sample_size(20);

    for (name, fen, depth, expected) in [
        ("start", Board::START_FEN, 4, 197_281),
        (
            "kiwipete",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            3,
            97_862,
        ),
    ] {
        let board = Board::from_fen(fen).unwrap();
        assert_eq!(perft(tables, &board, depth), expected, "{name}");

        group.throughput(Throughput::Elements(expected));
        group.bench_function(BenchmarkId::new(name, depth), |b| {
            b.iter(|| perft(tables, black_box(&board), black_box(depth)));
        });
    }

    group.finish();
}

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    group.sample_size(10);
    group.bench_function("load_saved", |b| {
        b.iter(|| AttackTables::build(black_box(&TableConfig::default())).unwrap());
    });
    group.finish();
}

criterion_group!(movegen_benches, bench_generate, bench_perft, bench_tables);
criterion_main!(movegen_benches);
