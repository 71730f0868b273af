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

//! A command-line perft tool, used to check move generation against known
//! node counts and to measure its speed.
//!
//! ```text
//! perft [--fen <FEN>] [--divide] [--search-magics] [--seed <SEED>] <DEPTH>
//! ```
//!
//! Log verbosity is controlled with `RUST_LOG`, defaulting to `info`.

use std::{process::ExitCode, time::Instant};

use clap::Parser;
use fiddler_movegen::{divide, initialize_tables_with, perft, Board, TableConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Count the leaves of the legal move tree")]
struct Args {
    /// The depth of the tree, in plies.
    depth: u8,
    /// The position to start from.
    #[arg(long, default_value = Board::START_FEN)]
    fen: String,
    /// Print the node count below each legal first move.
    #[arg(long)]
    divide: bool,
    /// Search for new magic numbers instead of loading the saved ones.
    #[arg(long)]
    search_magics: bool,
    /// The seed for the magic number search.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let board = match Board::from_fen(&args.fen) {
        Ok(b) => b,
        Err(e) => {
            error!(fen = %args.fen, "could not load position: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = if args.search_magics {
        TableConfig::searching(args.seed)
    } else {
        TableConfig::default()
    };
    let tables = initialize_tables_with(&config);

    let tic = Instant::now();
    let num_nodes = if args.divide {
        let split = divide(tables, &board, args.depth);
        for (m, count) in &split {
            println!("{}: {count}", m.to_uci());
        }
        split.iter().map(|(_, count)| count).sum()
    } else {
        perft(tables, &board, args.depth)
    };
    let elapsed = tic.elapsed();

    #[allow(clippy::cast_precision_loss)]
    let speed = num_nodes as f64 / elapsed.as_secs_f64();
    info!(
        depth = args.depth,
        secs = elapsed.as_secs_f64(),
        nodes_per_sec = speed as u64,
        "perft finished"
    );
    println!("{num_nodes}");

    ExitCode::SUCCESS
}
