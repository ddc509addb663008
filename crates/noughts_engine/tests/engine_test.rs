//! Tests for the game engine state machine.

use noughts_engine::{
    Board, Cell, EngineError, GameEngine, GameStatus, LineKind, Mark, Position, SelectionEffect,
};

fn play(engine: &mut GameEngine, indices: &[i64]) {
    for index in indices {
        engine.select_cell(*index).expect("Valid index");
    }
}

#[test]
fn test_turns_alternate_until_terminal() {
    let mut engine = GameEngine::new();
    let mut expected = Mark::Cross;

    for index in [4, 0, 8, 2, 1, 7, 3, 5, 6] {
        let result = engine.select_cell(index).unwrap();
        assert_eq!(result.effect.mark(), Some(expected));
        expected = expected.opponent();
        assert_eq!(result.snapshot.to_move, expected);
        if result.snapshot.status.is_terminal() {
            break;
        }
    }
    assert!(engine.is_over());
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 4]);
    let before = engine.snapshot();

    for index in [0, 4] {
        let result = engine.select_cell(index).unwrap();
        assert!(matches!(result.effect, SelectionEffect::Ignored { .. }));
        assert_eq!(result.snapshot, before);
    }
    assert_eq!(engine.to_move(), Mark::Cross);
}

#[test]
fn test_top_row_wins_for_cross() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    match engine.status() {
        GameStatus::Won { mark, lines } => {
            assert_eq!(*mark, Mark::Cross);
            assert_eq!(lines.len(), 1);
            assert_eq!(lines[0].indices(), [0, 1, 2]);
            assert_eq!(lines[0].kind(), LineKind::Row(0));
        }
        other => panic!("Expected win, got {:?}", other),
    }
}

#[test]
fn test_nought_can_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 2, 1, 4, 8, 6]);
    assert_eq!(engine.status().winner(), Some(Mark::Nought));
    assert_eq!(engine.status().winning_lines()[0].kind(), LineKind::AntiDiagonal);
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = GameEngine::new();
    // X O X / X O O / O X X
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(engine.status(), &GameStatus::Draw);
    assert!(engine.valid_positions().is_empty());
}

#[test]
fn test_reset_from_any_state() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0, 8]);

    let snapshot = engine.reset();
    assert_eq!(snapshot.board, Board::new());
    assert_eq!(snapshot.to_move, Mark::Cross);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert!(snapshot.moves.is_empty());

    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert!(engine.is_over());
    let snapshot = engine.reset();
    assert_eq!(snapshot, GameEngine::new().snapshot());
}

#[test]
fn test_out_of_range_leaves_state_unchanged() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4]);
    let before = engine.clone();

    assert_eq!(engine.select_cell(-1), Err(EngineError::OutOfRange(-1)));
    assert_eq!(engine.select_cell(9), Err(EngineError::OutOfRange(9)));
    assert_eq!(engine, before);
}

#[test]
fn test_out_of_range_after_game_end_does_not_restart() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);
    assert!(engine.select_cell(42).is_err());
    assert!(engine.is_over());
}

#[test]
fn test_double_line_win_reports_both() {
    let mut engine = GameEngine::new();
    // X: 1 2 3 6, O: 4 5 8 7, then X closes corner 0.
    play(&mut engine, &[1, 4, 2, 5, 3, 8, 6, 7, 0]);

    let kinds: Vec<_> = engine
        .status()
        .winning_lines()
        .iter()
        .map(|line| line.kind())
        .collect();
    assert_eq!(kinds, vec![LineKind::Row(0), LineKind::Column(0)]);
}

#[test]
fn test_selection_after_win_restarts_without_placing() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    let result = engine.select_cell(5).unwrap();
    assert_eq!(result.effect, SelectionEffect::Restarted);
    assert_eq!(result.snapshot.board.get(Position::MiddleRight), Cell::Empty);
    assert_eq!(result.snapshot.status, GameStatus::InProgress);

    // The next selection places Cross again.
    let result = engine.select_cell(5).unwrap();
    assert_eq!(result.effect.mark(), Some(Mark::Cross));
}

#[test]
fn test_selection_after_draw_restarts() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    let result = engine.select_cell(0).unwrap();
    assert_eq!(result.effect, SelectionEffect::Restarted);
    assert!(engine.moves().is_empty());
}

#[test]
fn test_snapshot_serializes_to_json() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4]);

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["to_move"], "Nought");
    assert_eq!(json["status"], "InProgress");
    assert_eq!(json["moves"][0]["position"], "Center");
}
