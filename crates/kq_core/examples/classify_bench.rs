//! Classifier benchmark for profiling with cargo-flamegraph.
//!
//! Runs the full check / checkmate / stalemate classification repeatedly on
//! positions of growing board size; the cost is dominated by the
//! pieces x squares legality sweep.
//!
//! Usage:
//!   cargo flamegraph --example classify_bench -p kq_core

use kq_core::{Color, legal_moves, parse_board, status};
use std::time::Instant;

/// Positions covering small, medium and maximal boards
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("3x3 mate", "3\nQb2, Ka1\nKc3"),
    ("8x8 stalemate", "8\nKc7, Qb6\nKa8"),
    ("8x8 open", "8\nKa1, Qd4\nKh8, Qe7"),
    ("12x12 queens", "12\nKa1, Qf6, Qg7\nKl12, Qb11, Qk2"),
    ("26x26 kings", "26\nKa1\nKz26"),
    ("26x26 queens", "26\nKa1, Qm13, Qn14\nKz26, Qb25, Qy2"),
];

const ITERATIONS: usize = 200;

fn main() {
    println!("=== Classification Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let board = match parse_board(text) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_found = 0usize;

        for _ in 0..ITERATIONS {
            for side in [Color::White, Color::Black] {
                if status(side, &board).is_err() {
                    eprintln!("{name}: inconsistent kings");
                    return;
                }
                moves_found += legal_moves(side, &board).map_or(0, |m| m.len());
            }
        }

        let elapsed = start.elapsed();
        total_time += elapsed;

        let moves_per_pos = moves_found as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>6.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_time:.3?}");
}
