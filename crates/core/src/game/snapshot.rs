//! Read-only views of a match for rendering

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::pieces::{ChessPiece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    InProgress,
    /// The side to move is in check.
    Check,
    CheckMate,
}

impl MatchState {
    pub fn is_over(&self) -> bool {
        matches!(self, MatchState::CheckMate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceView {
    pub kind: PieceKind,
    pub color: Color,
}

impl From<&ChessPiece> for PieceView {
    fn from(piece: &ChessPiece) -> Self {
        Self {
            kind: piece.kind(),
            color: piece.color(),
        }
    }
}

/// Everything an outer layer needs to draw the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub turn: u32,
    pub current_player: Color,
    pub state: MatchState,
    pub check: bool,
    pub check_mate: bool,
    /// Rows x columns, row 0 first.
    pub board: Vec<Vec<Option<PieceView>>>,
    pub captured: Vec<PieceView>,
}

impl MatchSnapshot {
    pub fn piece_count(&self) -> usize {
        self.board.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn captured_by(&self, color: Color) -> impl Iterator<Item = &PieceView> + '_ {
        self.captured.iter().filter(move |p| p.color != color)
    }
}
