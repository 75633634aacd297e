//! Serde round trips for the public value types.

use super::sq;
use crate::board::{generate_moves, Board, Color, MoveSet, Piece, PieceKind, Square};

#[test]
fn test_piece_round_trip() {
    let board = Board::new();
    let knight = board.piece_at(sq("g1")).unwrap();

    let json = serde_json::to_string(&knight).unwrap();
    let restored: Piece = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, knight);
    assert_eq!(restored.color, Color::White);
    assert_eq!(restored.kind, PieceKind::Knight);
}

#[test]
fn test_move_set_round_trip() {
    let board = Board::from_fen("8/8/8/8/8/2p1r3/3P4/8");
    let pawn = board.piece_at(sq("d2")).unwrap();
    let moves = generate_moves(&pawn, &board);

    let json = serde_json::to_string(&moves).unwrap();
    let restored: MoveSet = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, moves);
    assert_eq!(restored.len(), 4);
}

#[test]
fn test_square_serializes_as_row_col_pair() {
    let json = serde_json::to_string(&sq("e2")).unwrap();
    assert_eq!(json, "[6,4]");
    assert_eq!(serde_json::from_str::<Square>("[6,4]").unwrap(), sq("e2"));
}

#[test]
fn test_off_board_square_is_rejected() {
    assert!(serde_json::from_str::<Square>("[9,9]").is_err());
    assert!(serde_json::from_str::<Square>("[8,0]").is_err());
    assert!(serde_json::from_str::<Square>("[0,8]").is_err());

    let piece = r#"{"color":"White","kind":"Knight","square":[9,9]}"#;
    assert!(serde_json::from_str::<Piece>(piece).is_err());
}

#[test]
fn test_move_set_with_off_board_square_is_rejected() {
    assert!(serde_json::from_str::<MoveSet>(r#"{"squares":[[1,1],[8,3]]}"#).is_err());
}
