//! End-to-end rule scenarios driven through the public board interface.

use plum_boards::board_errors::MoveRejection;
use plum_boards::game_state::board::new_board;
use plum_boards::game_state::board_types::{Color, GameStatus, MoveOutcome, Square, Variant};
use plum_boards::game_state::checkers_board::CheckersBoard;
use plum_boards::game_state::chess_board::ChessBoard;
use plum_boards::game_state::piece_grid::PieceGrid;
use plum_boards::game_state::pieces::{Piece, PieceKind};
use plum_boards::utils::algebraic::parse_move;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row, col).expect("test squares are on the board")
}

// =============================================================================
// Chess
// =============================================================================

#[test]
fn standard_opening_exchange() {
    let mut board = new_board(Variant::StandardChess);

    assert_eq!(
        board.submit_move(sq(6, 0), sq(5, 0)),
        Ok(MoveOutcome::Applied {
            captured: None,
            displaced: None
        })
    );
    assert_eq!(board.current_turn(), Color::Black);

    // Black's pawn on the h-file answers.
    assert!(board.submit_move(sq(1, 7), sq(2, 7)).is_ok());
    assert_eq!(board.current_turn(), Color::White);

    assert_eq!(
        board.submit_move(sq(5, 0), sq(5, 0)),
        Err(MoveRejection::IllegalGeometry)
    );
}

#[test]
fn notation_drives_the_same_moves() {
    let mut board = new_board(Variant::StandardChess);
    let (start, end) = parse_move("a7 a6").expect("valid move line");
    assert_eq!((start, end), (sq(6, 0), sq(5, 0)));
    assert!(board.submit_move(start, end).is_ok());
}

#[test]
fn slider_legality_ignores_blockers() {
    let file_line = (sq(7, 0), sq(0, 0));
    let diagonal = (sq(7, 0), sq(0, 7));
    let cases = [
        (PieceKind::Rook, vec![file_line]),
        (PieceKind::Bishop, vec![diagonal]),
        (PieceKind::Queen, vec![file_line, diagonal]),
    ];

    for (kind, moves) in cases {
        let slider = Piece::new(kind, Color::White);
        let mut open = PieceGrid::default();
        open.place(sq(7, 0), slider);
        let mut blocked = open.clone();
        // One piece in the middle of each line.
        blocked.place(sq(4, 0), Piece::new(PieceKind::Pawn, Color::Black));
        blocked.place(sq(4, 3), Piece::new(PieceKind::Pawn, Color::White));

        for (start, end) in moves {
            for grid in [&open, &blocked] {
                let mut board = ChessBoard::from_grid(grid.clone(), Color::White);
                assert_eq!(
                    board.submit_move(start, end),
                    Ok(MoveOutcome::Applied {
                        captured: None,
                        displaced: None
                    }),
                    "{} {start} -> {end}",
                    kind.name()
                );
                assert_eq!(board.piece_at(end), Some(slider));
                assert_eq!(board.piece_at(start), None);
            }
        }
    }
}

#[test]
fn rook_takes_king_and_black_wins() {
    let mut grid = PieceGrid::default();
    grid.place(sq(3, 2), Piece::new(PieceKind::Rook, Color::Black));
    grid.place(sq(3, 6), Piece::new(PieceKind::King, Color::White));
    grid.place(sq(0, 4), Piece::new(PieceKind::King, Color::Black));
    grid.place(sq(7, 0), Piece::new(PieceKind::Rook, Color::White));
    let mut board = ChessBoard::from_grid(grid, Color::White);

    // White wastes a move first.
    assert!(board.submit_move(sq(7, 0), sq(7, 1)).is_ok());
    assert_eq!(
        board.submit_move(sq(3, 2), sq(3, 6)),
        Ok(MoveOutcome::GameOver {
            winner: Color::Black,
            captured: Piece::new(PieceKind::King, Color::White),
        })
    );
    assert_eq!(board.status(), GameStatus::Won(Color::Black));
    assert_eq!(board.move_count(), 2);
    assert_eq!(
        board.submit_move(sq(7, 1), sq(7, 2)),
        Err(MoveRejection::GameAlreadyOver)
    );
}

#[test]
fn custom_pieces_follow_their_rules() {
    let mut board = new_board(Variant::CustomChess);

    // Pawn out of the way, then the Scandic jumps two diagonally.
    assert!(board.submit_move(sq(6, 1), sq(5, 1)).is_ok());
    assert!(board.submit_move(sq(1, 0), sq(2, 0)).is_ok());
    assert_eq!(
        board.submit_move(sq(7, 0), sq(6, 1)),
        Err(MoveRejection::IllegalGeometry)
    );
    assert!(board.submit_move(sq(7, 0), sq(5, 2)).is_ok());

    // Black's Dag steps one square down onto its own pawn.
    let outcome = board.submit_move(sq(0, 7), sq(1, 7)).expect("dag step");
    assert_eq!(
        outcome,
        MoveOutcome::Applied {
            captured: None,
            displaced: Some(Piece::new(PieceKind::Pawn, Color::Black)),
        }
    );
}

// =============================================================================
// Checkers
// =============================================================================

#[test]
fn checkers_forward_move_then_empty_jump() {
    let mut board = new_board(Variant::Checkers);
    assert!(board.submit_move(sq(5, 0), sq(4, 1)).is_ok());
    assert!(board.submit_move(sq(2, 7), sq(3, 6)).is_ok());

    // White tries to jump from (5, 2) to (3, 4) over the empty (4, 3).
    assert_eq!(
        board.submit_move(sq(5, 2), sq(3, 4)),
        Err(MoveRejection::IllegalGeometry)
    );
    assert_eq!(board.current_turn(), Color::White);
}

#[test]
fn successive_captures_eliminate_a_side() {
    let mut grid = PieceGrid::default();
    let white = Piece::new(PieceKind::Checker, Color::White);
    let black = Piece::new(PieceKind::Checker, Color::Black);
    grid.place(sq(6, 1), white);
    grid.place(sq(5, 2), black);
    grid.place(sq(2, 5), black);
    grid.place(sq(0, 7), white);
    let mut board = CheckersBoard::from_grid(grid, Color::White);

    assert_eq!(
        board.submit_move(sq(6, 1), sq(4, 3)),
        Ok(MoveOutcome::Applied {
            captured: Some(black),
            displaced: None
        })
    );
    // Black steps forward next to the white checker on (4, 3).
    assert!(board.submit_move(sq(2, 5), sq(3, 4)).is_ok());
    assert_eq!(
        board.submit_move(sq(4, 3), sq(2, 5)),
        Ok(MoveOutcome::GameOver {
            winner: Color::White,
            captured: black,
        })
    );
    assert_eq!(board.grid().count(Color::Black), 0);
    assert_eq!(board.status(), GameStatus::Won(Color::White));
}
