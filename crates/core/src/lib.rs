//! Chess Match Core Library
//!
//! Rules engine for a two-player chess match: board state, per-piece move
//! generation, check and checkmate detection, and move application with
//! exact rollback.

pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod pieces;

pub use board::{Board, MoveMatrix, Placeable, Position};
pub use color::Color;
pub use config::{MatchConfig, SetupConfig};
pub use error::{Error, Result};
pub use game::{ChessMatch, MatchSnapshot, MatchState, PieceView, Placement};
pub use pieces::{ChessPiece, PieceId, PieceKind};
