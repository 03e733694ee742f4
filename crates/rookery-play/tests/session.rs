//! Integration tests driving a whole session through text input.

use rookery_core::{GameStatus, Side};
use rookery_play::{Session, SessionConfig};

fn run(session: &mut Session, script: &str) -> Vec<String> {
    let mut out = Vec::new();
    session.run(script.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn fools_mate_session() {
    let mut session = Session::new();
    let lines = run(&mut session, "f2f3\ne7e5\ng2g4\nd8h4\nhistory\na2a3\n");

    assert!(lines.contains(&"played Qh4#".to_string()));
    assert!(lines.contains(&"status Checkmate! black wins!".to_string()));
    assert!(lines.contains(&"history 1. f3 e5 2. g4 Qh4#".to_string()));
    assert_eq!(
        lines.last().map(String::as_str),
        Some("illegal game is over (checkmate)")
    );
    assert_eq!(session.game().status(), GameStatus::Checkmate);
}

#[test]
fn check_is_announced() {
    let mut session = Session::new();
    let lines = run(&mut session, "e2e4\nf7f6\nd1h5\n");
    assert!(lines.contains(&"played Qh5+".to_string()));
    assert!(lines.contains(&"status black is in check!".to_string()));
}

#[test]
fn undo_and_new() {
    let mut session = Session::new();
    let lines = run(&mut session, "e2e4\nundo\nundo\n");
    assert_eq!(
        lines[2],
        "fen rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    );
    assert_eq!(lines[3], "illegal nothing to undo");

    run(&mut session, "d2d4\nnew\n");
    assert!(session.game().history().is_empty());
    assert_eq!(session.game().side_to_move(), Side::White);
}

#[test]
fn moves_lists_legal_moves_only() {
    let mut session = Session::new();
    let lines = run(
        &mut session,
        "position fen 4k3/8/8/8/8/8/3r4/4K3 w - - 0 1\nmoves\n",
    );
    let listed = lines.last().unwrap();
    assert_eq!(listed, "moves e1d2 e1f1");
}

#[test]
fn show_board_prints_grid() {
    let mut session = Session::with_config(SessionConfig {
        show_board: true,
        auto_queen: false,
    });
    let lines = run(&mut session, "g1f3\n");
    assert!(lines.iter().any(|l| l == "1  R N B Q K B . R"));
    assert!(lines.iter().any(|l| l == "3  . . . . . N . ."));
}

#[test]
fn stalemate_session() {
    let mut session = Session::new();
    let lines = run(
        &mut session,
        "position fen 7k/5K2/8/6Q1/8/8/8/8 w - - 0 1\ng5g6\nstatus\n",
    );
    assert!(lines.contains(&"status Stalemate! Game is drawn.".to_string()));
    assert_eq!(lines.last().map(String::as_str), Some("status stalemate"));
}
