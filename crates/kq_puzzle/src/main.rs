//! Puzzle CLI
//!
//! Plays White from stdin against the random engine.

use anyhow::Context;
use kq_puzzle::{Outcome, PuzzleConfig, Session};
use random_engine::RandomEngine;
use std::env;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("King-and-Queen chess puzzle");
    println!();
    println!("Usage:");
    println!("  kq_puzzle [--config <file>] [--seed N] [--ascii]");
    println!();
    println!("Options:");
    println!("  --config <file>  TOML settings (default: ./kq_puzzle.toml if present)");
    println!("  --seed N         fixed seed for Black's random moves");
    println!("  --ascii          draw boards with K Q k q . instead of chess symbols");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;
    let mut ascii = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args.get(i).context("--config needs a file name")?;
                config_path = Some(PathBuf::from(path));
            }
            "--seed" | "-s" => {
                i += 1;
                let raw = args.get(i).context("--seed needs a number")?;
                seed = Some(raw.parse().with_context(|| format!("Invalid seed {raw:?}"))?);
            }
            "--ascii" => ascii = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                print_usage();
                anyhow::bail!("Unknown argument: {other}");
            }
        }
        i += 1;
    }

    let mut config = PuzzleConfig::resolve(config_path.as_deref())?;
    if seed.is_some() {
        config.seed = seed;
    }
    config.ascii |= ascii;

    // Logs go to stderr so stdout stays the game transcript.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .context("Invalid log_level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(?config, "starting");

    let engine = match config.seed {
        Some(s) => RandomEngine::with_seed(s),
        None => RandomEngine::new(),
    };

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), engine, config.glyphs());
    let outcome = session.run()?;
    tracing::info!(?outcome, "session finished");
    if outcome == Outcome::EndOfInput {
        println!();
    }
    Ok(())
}
