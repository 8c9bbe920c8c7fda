//! Initial piece placements

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::color::Color;
use crate::pieces::PieceKind;

pub const BOARD_ROWS: usize = 8;
pub const BOARD_COLUMNS: usize = 8;

/// One piece to put on the board when a match starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub kind: PieceKind,
    pub color: Color,
}

impl Placement {
    pub fn new(kind: PieceKind, color: Color, row: i32, column: i32) -> Self {
        Self {
            position: Position::new(row, column),
            kind,
            color,
        }
    }
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard opening position. Black occupies rows 0-1, White rows 6-7.
pub fn standard_setup() -> Vec<Placement> {
    let mut placements = Vec::with_capacity(32);

    for (color, back, pawns) in [(Color::Black, 0, 1), (Color::White, 7, 6)] {
        for (column, kind) in BACK_RANK.iter().enumerate() {
            placements.push(Placement::new(*kind, color, back, column as i32));
            placements.push(Placement::new(PieceKind::Pawn, color, pawns, column as i32));
        }
    }

    placements
}
