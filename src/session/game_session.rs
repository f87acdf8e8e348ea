//! Interactive text session: menu, move prompt, result reporting.
//!
//! The session owns the only [`Board`] and drives it one line at a time.
//! Input and output are generic so the loop can be driven from tests.

use std::io::{BufRead, Write};

use log::debug;

use crate::board_errors::SessionError;
use crate::game_state::board::{new_board, Board};
use crate::game_state::board_types::{Color, MoveOutcome, Square, Variant};
use crate::session::session_config::SessionConfig;
use crate::utils::algebraic::{parse_move, square_to_notation};
use crate::utils::render_board::render;

const MOVE_PROMPT: &str = "Enter a move (for example A7 A6): ";

/// How a session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    GameOver { winner: Color },
    /// Input ran out or the player typed `quit`.
    Quit,
}

pub struct GameSession<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Pick a variant (from config or the menu) and play it to the end.
    pub fn run(&mut self) -> Result<SessionEnd, SessionError> {
        let variant = match self.config.variant {
            Some(variant) => variant,
            None => match self.choose_variant()? {
                Some(variant) => variant,
                None => return Ok(SessionEnd::Quit),
            },
        };
        let mut board = new_board(variant);
        self.play(&mut board)
    }

    /// Ask until a valid menu entry is given. `None` on end of input.
    pub fn choose_variant(&mut self) -> Result<Option<Variant>, SessionError> {
        loop {
            writeln!(self.output, "Choose a game:")?;
            for variant in Variant::ALL {
                writeln!(self.output, "{} - {}", variant.menu_index(), variant.title())?;
            }
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.parse::<Variant>() {
                Ok(variant) => return Ok(Some(variant)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    /// Read and apply moves until the game ends or input stops.
    pub fn play(&mut self, board: &mut Board) -> Result<SessionEnd, SessionError> {
        write!(self.output, "{}", render(board))?;

        loop {
            write!(self.output, "{MOVE_PROMPT}")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(SessionEnd::Quit);
            };
            if matches!(line.to_ascii_lowercase().as_str(), "quit" | "exit") {
                return Ok(SessionEnd::Quit);
            }

            let (start, end) = match parse_move(&line) {
                Ok(squares) => squares,
                Err(err) => {
                    writeln!(self.output, "Bad input: {err}")?;
                    continue;
                }
            };

            let mover = board.current_turn();
            let outcome = match board.submit_move(start, end) {
                Ok(outcome) => outcome,
                Err(rejection) => {
                    debug!("rejected {line:?}: {rejection:?}");
                    writeln!(self.output, "Move rejected: {rejection}")?;
                    continue;
                }
            };

            self.report(mover, start, end, &outcome, board)?;
            if let MoveOutcome::GameOver { winner, .. } = outcome {
                write!(self.output, "{}", render(board))?;
                return Ok(SessionEnd::GameOver { winner });
            }
            if self.config.show_board_after_move {
                write!(self.output, "{}", render(board))?;
            }
        }
    }

    fn report(
        &mut self,
        mover: Color,
        start: Square,
        end: Square,
        outcome: &MoveOutcome,
        board: &Board,
    ) -> Result<(), SessionError> {
        let moved = board
            .piece_at(end)
            .map(|piece| piece.symbol())
            .unwrap_or('?');
        if let Some(taken) = outcome.captured() {
            // Checkers captures take the jumped cell, not the destination.
            let at = if board.variant() == Variant::Checkers {
                start.midpoint(end)
            } else {
                end
            };
            writeln!(
                self.output,
                "{moved} {mover} takes {} {} at {}",
                taken.symbol(),
                taken.color,
                square_to_notation(at)
            )?;
        }
        if let MoveOutcome::Applied {
            displaced: Some(overwritten),
            ..
        } = outcome
        {
            writeln!(
                self.output,
                "{moved} {mover} overwrote {} {} at {}",
                overwritten.symbol(),
                overwritten.color,
                square_to_notation(end)
            )?;
        }
        if let MoveOutcome::GameOver { winner, captured } = outcome {
            if board.variant() == Variant::Checkers {
                writeln!(self.output, "{} has no pieces left. {winner} wins!", captured.color)?;
            } else {
                writeln!(self.output, "The {} king is captured. {winner} wins!", captured.color)?;
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
