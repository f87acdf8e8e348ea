//! Crate root module declarations for the Plum Boards rules engine.
//!
//! The rules core (piece movement, the two board state machines, notation)
//! is usable on its own; the `session` modules wrap it in the text loop used
//! by the `plum_boards` binary.

pub mod board_errors;

pub mod game_state {
    pub mod board;
    pub mod board_layouts;
    pub mod board_types;
    pub mod checkers_board;
    pub mod chess_board;
    pub mod piece_grid;
    pub mod pieces;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod checker_moves;
    pub mod custom_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod session {
    pub mod game_session;
    pub mod logging;
    pub mod session_config;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}
