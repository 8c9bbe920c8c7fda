//! Algebraic square names ("e2") to board positions

use chess_match_core::Position;
use thiserror::Error;

const FILES: &str = "abcdefgh";
const RANKS: i32 = 8;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid square '{0}'. Valid values are from a1 to h8.")]
    InvalidSquare(String),
}

/// Rank 8 is row 0 and file a is column 0.
pub fn parse_square(text: &str) -> Result<Position, InputError> {
    let trimmed = text.trim().to_ascii_lowercase();
    let invalid = || InputError::InvalidSquare(text.trim().to_string());

    let mut chars = trimmed.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let column = FILES.find(file).ok_or_else(invalid)? as i32;
    let rank = rank
        .to_digit(10)
        .map(|r| r as i32)
        .filter(|r| (1..=RANKS).contains(r))
        .ok_or_else(invalid)?;

    Ok(Position::new(RANKS - rank, column))
}

pub fn square_name(at: Position) -> String {
    let file = FILES.chars().nth(at.column as usize).unwrap_or('?');
    format!("{}{}", file, RANKS - at.row)
}
