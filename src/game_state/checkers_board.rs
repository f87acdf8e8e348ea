//! Turn state machine for the checkers variant.
//!
//! Plain moves step one cell diagonally forward. Captures jump an adjacent
//! opponent in any diagonal direction. Captures are optional and single:
//! there is no forced capture and no chained jump.

use log::{debug, info, warn};

use crate::board_errors::MoveRejection;
use crate::game_state::board_layouts::starting_grid;
use crate::game_state::board_types::{Color, GameStatus, MoveOutcome, Square, Variant};
use crate::game_state::piece_grid::PieceGrid;
use crate::game_state::pieces::Piece;
use crate::moves::checker_moves::checker_jump_shape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckersBoard {
    grid: PieceGrid,
    current_turn: Color,
    status: GameStatus,
}

impl Default for CheckersBoard {
    fn default() -> Self {
        Self::from_grid(starting_grid(Variant::Checkers), Color::White)
    }
}

impl CheckersBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_grid(grid: PieceGrid, turn: Color) -> Self {
        Self {
            grid,
            current_turn: turn,
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

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.grid.view(square)
    }

    /// Whether `piece` standing on `start` can jump to `end` over an opponent.
    ///
    /// Only the jumped cell is inspected; a jump may land on an occupied cell,
    /// whose occupant is then overwritten.
    pub fn can_capture(&self, piece: Piece, start: Square, end: Square) -> bool {
        let (dr, dc) = start.delta_to(end);
        if !checker_jump_shape(dr, dc) {
            return false;
        }
        matches!(
            self.grid.view(start.midpoint(end)),
            Some(middle) if middle.color != piece.color
        )
    }

    /// Apply `start -> end` for the side on move.
    ///
    /// A plain step onto an empty cell is tried first, then a capture. A
    /// capture landing on an occupied cell overwrites that piece and returns
    /// it as `displaced`. Emptying the opponent's side ends the game with the
    /// mover as winner.
    pub fn submit_move(
        &mut self,
        start: Square,
        end: Square,
    ) -> Result<MoveOutcome, MoveRejection> {
        if self.status.is_over() {
            return Err(MoveRejection::GameAlreadyOver);
        }
        let piece = self.grid.mover(start, self.current_turn)?;
        let mover = self.current_turn;
        if piece.is_legal_move(start, end) && self.grid.view(end).is_none() {
            self.grid.relocate(start, end);
            debug!("{} checker {start} -> {end}", mover);
            self.current_turn = mover.opposite();
            return Ok(MoveOutcome::Applied {
                captured: None,
                displaced: None,
            });
        }

        if !self.can_capture(piece, start, end) {
            return Err(MoveRejection::IllegalGeometry);
        }

        let jumped = start.midpoint(end);
        let captured = self
            .grid
            .take(jumped)
            .ok_or(MoveRejection::IllegalGeometry)?;
        let displaced = self.grid.relocate(start, end);
        info!("{} checker {start} -> {end} takes {jumped}", mover);
        if let Some(overwritten) = displaced {
            warn!(
                "{} checker landed on {} {} at {end}",
                mover,
                overwritten.color,
                overwritten.kind.name()
            );
        }

        let remaining = self.grid.count(mover.opposite());
        if remaining == 0 {
            info!("{} has no checkers left, {} wins", mover.opposite(), mover);
            self.status = GameStatus::Won(mover);
            return Ok(MoveOutcome::GameOver {
                winner: mover,
                captured,
            });
        }

        self.current_turn = mover.opposite();
        Ok(MoveOutcome::Applied {
            captured: Some(captured),
            displaced,
        })
    }
}
