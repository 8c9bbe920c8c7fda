//! Text rendering of a match

use chess_match_core::{Color, MatchSnapshot, MoveMatrix, PieceView, Position};
use std::fmt::Write;

use crate::input::square_name;

fn symbol(piece: &PieceView) -> char {
    let symbol = piece.kind.symbol();
    match piece.color {
        Color::White => symbol,
        Color::Black => symbol.to_ascii_lowercase(),
    }
}

/// The board with rank numbers on the left and files underneath. Squares
/// marked in `highlight` are bracketed.
pub fn render_board(snapshot: &MatchSnapshot, highlight: Option<&MoveMatrix>) -> String {
    let rows = snapshot.board.len();
    let mut out = String::new();

    for (row, cells) in snapshot.board.iter().enumerate() {
        let _ = write!(out, "{} ", rows - row);
        for (column, cell) in cells.iter().enumerate() {
            let at = Position::new(row as i32, column as i32);
            let c = cell.as_ref().map(symbol).unwrap_or('-');
            if highlight.is_some_and(|m| m.is_marked(at)) {
                let _ = write!(out, "[{}]", c);
            } else {
                let _ = write!(out, " {} ", c);
            }
        }
        out.push('\n');
    }

    out.push_str("  ");
    for column in 0..snapshot.board.first().map_or(0, |r| r.len()) {
        let file = square_name(Position::new(0, column as i32));
        let _ = write!(out, " {} ", &file[..1]);
    }
    out.push('\n');
    out
}

fn captured_list(snapshot: &MatchSnapshot, color: Color) -> String {
    let symbols: Vec<String> = snapshot
        .captured
        .iter()
        .filter(|p| p.color == color)
        .map(|p| symbol(p).to_string())
        .collect();
    format!("[{}]", symbols.join(", "))
}

/// Board, captured pieces and whose turn it is.
pub fn render_match(snapshot: &MatchSnapshot) -> String {
    let mut out = render_board(snapshot, None);

    out.push('\n');
    out.push_str("Captured pieces:\n");
    let _ = writeln!(out, "White: {}", captured_list(snapshot, Color::White));
    let _ = writeln!(out, "Black: {}", captured_list(snapshot, Color::Black));
    out.push('\n');
    let _ = writeln!(out, "Turn: {}", snapshot.turn);

    if snapshot.check_mate {
        out.push_str("CHECKMATE!\n");
        let _ = writeln!(out, "Winner: {}", snapshot.current_player);
    } else {
        let _ = writeln!(out, "Waiting player: {}", snapshot.current_player);
        if snapshot.check {
            out.push_str("CHECK!\n");
        }
    }

    out
}
