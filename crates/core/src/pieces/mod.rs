//! Chess pieces and their move generators

mod movegen;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::{Board, MoveMatrix, Placeable, Position};
use crate::color::Color;

pub use movegen::{castling_rook_shift, RookShift};

/// Stable identity of a piece for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'P',
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        }
    }
}

/// A piece in play or captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessPiece {
    id: PieceId,
    kind: PieceKind,
    color: Color,
    position: Option<Position>,
    move_count: u32,
}

impl ChessPiece {
    pub fn new(id: PieceId, kind: PieceKind, color: Color) -> Self {
        Self {
            id,
            kind,
            color,
            position: None,
            move_count: 0,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub(crate) fn increase_move_count(&mut self) {
        self.move_count += 1;
    }

    pub(crate) fn decrease_move_count(&mut self) {
        self.move_count = self.move_count.saturating_sub(1);
    }

    /// Every square this piece could move to, ignoring whether that exposes
    /// its own king. `in_check` is the match-level check flag and only gates
    /// castling.
    pub fn possible_moves(&self, board: &Board<ChessPiece>, in_check: bool) -> MoveMatrix {
        movegen::possible_moves(self, board, in_check)
    }

    pub fn possible_move(&self, board: &Board<ChessPiece>, in_check: bool, target: Position) -> bool {
        self.possible_moves(board, in_check).is_marked(target)
    }
}

impl Placeable for ChessPiece {
    fn position(&self) -> Option<Position> {
        self.position
    }

    fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
}

impl fmt::Display for ChessPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.symbol();
        match self.color {
            Color::White => write!(f, "{}", symbol),
            Color::Black => write!(f, "{}", symbol.to_ascii_lowercase()),
        }
    }
}
