//! The interactive game loop.
//!
//! White is the human, reading moves from `input`; Black is the engine. All
//! transcript text goes to `out`, diagnostics go through `tracing`.

use anyhow::Context;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use kq_core::{
    Board, Color, Engine, GameStatus, Glyphs, Move, move_to_string, parse_move, read_board,
    render_with, save_board, status, try_move,
};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    WhiteWins,
    BlackWins,
    Stalemate,
    /// `QUIT` at the move prompt; the board was written here.
    Saved(PathBuf),
    /// `QUIT` at the file prompt.
    Quit,
    /// Input ran out before the game finished.
    EndOfInput,
}

pub struct Session<R, W, E> {
    input: R,
    out: W,
    engine: E,
    glyphs: Glyphs,
}

impl<R: BufRead, W: Write, E: Engine> Session<R, W, E> {
    pub fn new(input: R, out: W, engine: E, glyphs: Glyphs) -> Self {
        Self {
            input,
            out,
            engine,
            glyphs,
        }
    }

    /// Returns the output sink, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> anyhow::Result<Outcome> {
        let Some(mut board) = self.load_initial()? else {
            return Ok(Outcome::Quit);
        };

        self.engine.new_game();
        writeln!(self.out, "The initial configuration is:")?;
        self.show(&board)?;

        loop {
            let Some(line) = self.prompt("Next move of White: ")? else {
                return Ok(Outcome::EndOfInput);
            };
            if line == "QUIT" {
                return self.save(&board);
            }

            let next = match parse_move(&line) {
                Ok(mv) => try_move(Color::White, mv, &board)?,
                Err(e) => {
                    debug!(input = %line, error = %e, "unparsable move");
                    None
                }
            };
            let Some(next) = next else {
                write!(self.out, "This is not a valid move. ")?;
                continue;
            };
            debug!(mv = %line, "white moved");
            board = next;
            writeln!(self.out, "The configuration after White's move is:")?;
            self.show(&board)?;

            let black_status = status(Color::Black, &board)?;
            debug!(side = %Color::Black, status = ?black_status, "position after move");
            match black_status {
                GameStatus::Checkmate => {
                    writeln!(self.out, "Game over. White wins.")?;
                    return Ok(Outcome::WhiteWins);
                }
                GameStatus::Stalemate => {
                    writeln!(self.out, "Game over. Stalemate.")?;
                    return Ok(Outcome::Stalemate);
                }
                _ => {}
            }

            let (piece, x, y) = self
                .engine
                .choose_move(Color::Black, &board)
                .with_context(|| format!("{} found no reply", self.engine.name()))?;
            let text = move_to_string(Move::new(piece.square(), (x, y)))?;
            debug!(mv = %text, engine = self.engine.name(), "black moved");
            board = piece.move_to(x, y, &board);
            writeln!(
                self.out,
                "Next move of Black is {text}. The configuration after Black's move is:"
            )?;
            self.show(&board)?;

            let white_status = status(Color::White, &board)?;
            debug!(side = %Color::White, status = ?white_status, "position after move");
            match white_status {
                GameStatus::Checkmate => {
                    writeln!(self.out, "Game over. Black wins.")?;
                    return Ok(Outcome::BlackWins);
                }
                GameStatus::Stalemate => {
                    writeln!(self.out, "Game over. Stalemate.")?;
                    return Ok(Outcome::Stalemate);
                }
                _ => {}
            }
        }
    }

    /// Asks for a board file until one loads. `None` on `QUIT` or end of input.
    fn load_initial(&mut self) -> anyhow::Result<Option<Board>> {
        loop {
            let Some(name) = self.prompt("File name for initial configuration: ")? else {
                return Ok(None);
            };
            if name == "QUIT" {
                return Ok(None);
            }
            match read_board(&name) {
                Ok(board) => {
                    debug!(file = %name, size = board.size(), "loaded board");
                    return Ok(Some(board));
                }
                Err(e) => {
                    warn!(file = %name, error = %e, "rejected board file");
                    write!(self.out, "This is not a valid file. ")?;
                }
            }
        }
    }

    fn save(&mut self, board: &Board) -> anyhow::Result<Outcome> {
        let Some(name) = self.prompt("File name to store the configuration: ")? else {
            return Ok(Outcome::EndOfInput);
        };
        save_board(&name, board).with_context(|| format!("Failed to save {name}"))?;
        writeln!(self.out, "The game configuration saved.")?;
        Ok(Outcome::Saved(PathBuf::from(name)))
    }

    fn show(&mut self, board: &Board) -> anyhow::Result<()> {
        writeln!(self.out, "{}", render_with(board, &self.glyphs))?;
        Ok(())
    }

    /// Writes `text`, flushes, and reads one trimmed line.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
