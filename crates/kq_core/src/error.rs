//! Error types for the rules engine
//!
//! Illegal moves are not errors: legality queries answer `false`. The types
//! here cover malformed input (locations, files, move text) and boards that
//! break the one-King-per-side invariant.

use thiserror::Error;

use crate::types::Color;

/// Failures of the location codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("invalid location: {0:?}")]
    InvalidLocation(String),

    #[error("coordinates out of range 1..=26: ({x}, {y})")]
    InvalidCoordinates { x: u8, y: u8 },
}

/// Structural problems detected while building a `Board`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board size {0} is outside 3..=26")]
    InvalidSize(u8),

    #[error("piece at ({x}, {y}) lies outside a {size}x{size} board")]
    OutOfBounds { x: u8, y: u8, size: u8 },

    #[error("more than one piece on ({x}, {y})")]
    SquareTaken { x: u8, y: u8 },
}

/// Internal-consistency failures of the classifier.
///
/// A board loaded through `setup` and advanced with `Piece::move_to` never
/// produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    #[error("no {0} king on the board")]
    MissingKing(Color),

    #[error("more than one {0} king on the board")]
    MultipleKings(Color),
}

/// Errors from reading or writing the board file format.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BoardError> for SetupError {
    fn from(e: BoardError) -> Self {
        SetupError::InvalidConfiguration(e.to_string())
    }
}

impl From<LocationError> for SetupError {
    fn from(e: LocationError) -> Self {
        SetupError::InvalidConfiguration(e.to_string())
    }
}

/// Errors from parsing move text such as `a1b2`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid move format: {0:?}")]
    InvalidMoveFormat(String),

    #[error(transparent)]
    Location(#[from] LocationError),
}
