//! Check and checkmate detection

use super::chess_match::ChessMatch;
use crate::board::Position;
use crate::color::Color;
use crate::error::{Error, Result};
use crate::pieces::PieceKind;

impl ChessMatch {
    fn king_position(&self, color: Color) -> Result<Position> {
        self.board
            .occupants()
            .find(|(_, p)| p.color() == color && p.kind() == PieceKind::King)
            .map(|(at, _)| at)
            .ok_or(Error::MissingKing(color))
    }

    /// Whether any opposing piece could move onto `color`'s king.
    pub fn test_check(&self, color: Color) -> Result<bool> {
        let king = self.king_position(color)?;
        Ok(self
            .board
            .occupants()
            .filter(|(_, p)| p.color() != color)
            .any(|(_, p)| p.possible_move(&self.board, self.check, king)))
    }

    /// Whether `color` is in check with no move that gets it out.
    ///
    /// Tries every raw move of every piece of `color` and reverts each one, so
    /// the match is unchanged afterward.
    pub fn test_check_mate(&mut self, color: Color) -> Result<bool> {
        if !self.test_check(color)? {
            return Ok(false);
        }

        let sources: Vec<Position> = self
            .board
            .occupants()
            .filter(|(_, p)| p.color() == color)
            .map(|(at, _)| at)
            .collect();

        for source in sources {
            let moves = match self.board.piece(source)? {
                Some(piece) => piece.possible_moves(&self.board, self.check),
                None => continue,
            };

            for target in moves.marked() {
                let applied = self.make_move(source, target)?;
                let still_in_check = self.test_check(color);
                self.undo_move(applied)?;
                if !still_in_check? {
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}
