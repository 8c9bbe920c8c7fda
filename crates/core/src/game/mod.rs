//! Match orchestration

mod check;
mod chess_match;
mod rollback;
mod setup;
mod snapshot;

pub use chess_match::ChessMatch;
pub use setup::{standard_setup, Placement, BOARD_COLUMNS, BOARD_ROWS};
pub use snapshot::{MatchSnapshot, MatchState, PieceView};
