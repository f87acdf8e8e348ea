//! Turn state machine for the chess variants.
//!
//! Moves are checked against the piece's geometric rule only. There is no
//! check detection and no path blocking; the game ends when a king is
//! actually taken.

use log::{debug, info, warn};

use crate::board_errors::MoveRejection;
use crate::game_state::board_layouts::starting_grid;
use crate::game_state::board_types::{Color, GameStatus, MoveOutcome, Square, Variant};
use crate::game_state::piece_grid::PieceGrid;
use crate::game_state::pieces::{Piece, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessBoard {
    grid: PieceGrid,
    current_turn: Color,
    move_count: u32,
    status: GameStatus,
}

impl ChessBoard {
    pub fn standard() -> Self {
        Self::from_grid(starting_grid(Variant::StandardChess), Color::White)
    }

    pub fn custom() -> Self {
        Self::from_grid(starting_grid(Variant::CustomChess), Color::White)
    }

    /// Start from an arbitrary arrangement with `turn` to move.
    pub fn from_grid(grid: PieceGrid, turn: Color) -> Self {
        Self {
            grid,
            current_turn: turn,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn grid(&self) -> &PieceGrid {
        &self.grid
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    /// Number of moves applied so far, both colors together.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Apply `start -> end` for the side on move.
    ///
    /// Taking the opposing king ends the game. A destination held by the
    /// mover's own color does not block the move; that piece is overwritten
    /// and returned as `displaced`.
    pub fn submit_move(
        &mut self,
        start: Square,
        end: Square,
    ) -> Result<MoveOutcome, MoveRejection> {
        if self.status.is_over() {
            return Err(MoveRejection::GameAlreadyOver);
        }
        let piece = self.grid.mover(start, self.current_turn)?;
        if !piece.is_legal_move(start, end) {
            return Err(MoveRejection::IllegalGeometry);
        }

        let mover = self.current_turn;
        let target = self.grid.relocate(start, end);
        self.move_count += 1;

        let (captured, displaced) = match target {
            Some(other) if other.color != mover => (Some(other), None),
            Some(own) => {
                warn!(
                    "{} {} at {start} overwrote own {} at {end}",
                    mover,
                    piece.kind.name(),
                    own.kind.name()
                );
                (None, Some(own))
            }
            None => (None, None),
        };

        if let Some(taken) = captured {
            info!("{} {} takes {} {} at {end}", mover, piece.symbol(), taken.color, taken.symbol());
            if taken.kind == PieceKind::King {
                info!("{} king captured, {} wins", taken.color, mover);
                self.status = GameStatus::Won(mover);
                return Ok(MoveOutcome::GameOver {
                    winner: mover,
                    captured: taken,
                });
            }
        }

        debug!("{} {} {start} -> {end}", mover, piece.kind.name());
        self.current_turn = mover.opposite();
        Ok(MoveOutcome::Applied {
            captured,
            displaced,
        })
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid.view(square)
    }
}
