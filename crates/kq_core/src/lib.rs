pub mod attacks;
pub mod board;
pub mod error;
pub mod movegen;
pub mod notation;
pub mod render;
pub mod setup;
pub mod status;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use attacks::*;
pub use board::*;
pub use error::*;
pub use movegen::*;
pub use notation::*;
pub use render::*;
pub use setup::*;
pub use status::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by automated opponents
// =============================================================================

/// Trait for anything that can pick a move for a side.
///
/// Callers must rule out checkmate and stalemate before asking; an engine
/// facing a side without legal moves reports an error.
pub trait Engine {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Chooses a legal move for `side` on `board`.
    ///
    /// # Returns
    /// The piece to move and its destination square.
    fn choose_move(&mut self, side: Color, board: &Board) -> Result<(Piece, u8, u8), Self::Error>;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Returns the engine's author
    fn author(&self) -> &str {
        "kq-puzzle"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
