//! King-and-Queen chess puzzle driver
//!
//! This crate provides:
//! - The interactive session: load a board, play White against a random
//!   Black, save on `QUIT`
//! - TOML configuration for the opponent seed, glyphs and log level
//!
//! # Usage
//!
//! ```bash
//! cargo run -p kq_puzzle -- --seed 7 --ascii
//! ```

mod config;
mod session;

pub use config::*;
pub use session::*;
