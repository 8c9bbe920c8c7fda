//! Error types for chess-match-core

use thiserror::Error;

use crate::board::Position;
use crate::color::Color;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error creating board: there must be at least 1 row and 1 column (got {rows}x{columns})")]
    InvalidDimensions { rows: usize, columns: usize },

    #[error("Position {0} is not on the board")]
    OutOfBounds(Position),

    #[error("There is already a piece on position {0}")]
    CellOccupied(Position),

    #[error("There is no piece on the given position")]
    NoPieceAtSource,

    #[error("There is no possible moves for the chosen piece")]
    NoLegalMoves,

    #[error("The chosen piece is not yours")]
    NotYourPiece,

    #[error("The chosen piece can not be moved to target position")]
    IllegalTarget,

    #[error("You can not put yourself in check")]
    SelfCheck,

    #[error("The match is over")]
    MatchOver,

    #[error("There is no {0} king on the board")]
    MissingKing(Color),

    #[error("Invalid setup: {0}")]
    InvalidSetup(String),

    #[error("Move rollback failed: {0}")]
    Rollback(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for chess-rule violations the player can correct by picking
    /// another move. These never leave the match modified.
    pub fn is_rule_violation(&self) -> bool {
        matches!(
            self,
            Error::OutOfBounds(_)
                | Error::NoPieceAtSource
                | Error::NoLegalMoves
                | Error::NotYourPiece
                | Error::IllegalTarget
                | Error::SelfCheck
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
