//! Speculative move application and its exact inverse
//!
//! Self-check rejection, checkmate search and legal-move filtering all go
//! through this pair, so `undo_move` must restore everything `make_move`
//! touched: occupancy, move counts, captured bookkeeping and the rook half of
//! a castling move.

use tracing::trace;

use super::chess_match::ChessMatch;
use crate::board::Position;
use crate::error::{Error, Result};
use crate::pieces::{castling_rook_shift, PieceId, PieceKind, RookShift};

/// Record of a move applied by [`ChessMatch::make_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AppliedMove {
    pub source: Position,
    pub target: Position,
    pub captured: Option<PieceId>,
    pub rook_shift: Option<RookShift>,
}

impl ChessMatch {
    pub(crate) fn make_move(&mut self, source: Position, target: Position) -> Result<AppliedMove> {
        if !self.board.position_exists(target) {
            return Err(Error::OutOfBounds(target));
        }

        let mut mover = self
            .board
            .remove_piece(source)?
            .ok_or(Error::NoPieceAtSource)?;
        mover.increase_move_count();
        let is_king = mover.kind() == PieceKind::King;
        let color = mover.color();

        let captured = self.board.remove_piece(target)?;
        self.board.place_piece(mover, target)?;

        let captured = captured.map(|piece| {
            let id = piece.id();
            self.captured.push(piece);
            id
        });

        let rook_shift = match castling_rook_shift(source, target).filter(|_| is_king) {
            Some(shift) => {
                let rook_in_place = self.board.piece(shift.from).ok().flatten().is_some_and(|rook| {
                    rook.kind() == PieceKind::Rook && rook.color() == color
                });
                if rook_in_place {
                    let mut rook = self
                        .board
                        .remove_piece(shift.from)?
                        .ok_or_else(|| Error::Rollback(format!("castling rook vanished from {}", shift.from)))?;
                    rook.increase_move_count();
                    self.board.place_piece(rook, shift.to)?;
                    Some(shift)
                } else {
                    None
                }
            }
            None => None,
        };

        trace!(%source, %target, ?captured, castling = rook_shift.is_some(), "applied move");

        Ok(AppliedMove {
            source,
            target,
            captured,
            rook_shift,
        })
    }

    pub(crate) fn undo_move(&mut self, applied: AppliedMove) -> Result<()> {
        let AppliedMove {
            source,
            target,
            captured,
            rook_shift,
        } = applied;

        if let Some(shift) = rook_shift {
            let mut rook = self
                .board
                .remove_piece(shift.to)?
                .ok_or_else(|| Error::Rollback(format!("no castled rook on {}", shift.to)))?;
            rook.decrease_move_count();
            self.board.place_piece(rook, shift.from)?;
        }

        let mut mover = self
            .board
            .remove_piece(target)?
            .ok_or_else(|| Error::Rollback(format!("no moved piece on {}", target)))?;
        mover.decrease_move_count();
        self.board.place_piece(mover, source)?;

        if let Some(id) = captured {
            let index = self
                .captured
                .iter()
                .rposition(|p| p.id() == id)
                .ok_or_else(|| Error::Rollback(format!("captured piece {:?} is missing", id)))?;
            let piece = self.captured.remove(index);
            self.board.place_piece(piece, target)?;
        }

        trace!(%source, %target, "undid move");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Placeable;
    use crate::color::Color;
    use crate::game::Placement;

    fn fingerprint(m: &ChessMatch) -> Vec<(Position, PieceId, u32)> {
        m.pieces_on_board()
            .map(|(at, p)| (at, p.id(), p.move_count()))
            .collect()
    }

    fn sample() -> ChessMatch {
        ChessMatch::from_setup(
            &[
                Placement::new(PieceKind::King, Color::White, 7, 4),
                Placement::new(PieceKind::Rook, Color::White, 7, 7),
                Placement::new(PieceKind::Rook, Color::White, 7, 0),
                Placement::new(PieceKind::Knight, Color::White, 4, 4),
                Placement::new(PieceKind::King, Color::Black, 0, 4),
                Placement::new(PieceKind::Bishop, Color::Black, 2, 3),
            ],
            Color::White,
        )
        .unwrap()
    }

    #[test]
    fn test_capture_round_trip() {
        let mut m = sample();
        let before = fingerprint(&m);

        let applied = m.make_move(Position::new(4, 4), Position::new(2, 3)).unwrap();
        assert!(applied.captured.is_some());
        assert_eq!(m.captured_pieces().len(), 1);
        assert_eq!(m.captured_pieces()[0].position(), None);
        assert_eq!(m.board().len(), 5);

        m.undo_move(applied).unwrap();
        assert_eq!(fingerprint(&m), before);
        assert!(m.captured_pieces().is_empty());
    }

    #[test]
    fn test_king_side_castling_round_trip() {
        let mut m = sample();
        let before = fingerprint(&m);

        let applied = m.make_move(Position::new(7, 4), Position::new(7, 6)).unwrap();
        let rook = m.board().piece(Position::new(7, 5)).unwrap().unwrap();
        assert_eq!(rook.kind(), PieceKind::Rook);
        assert_eq!(rook.move_count(), 1);
        assert!(m.board().piece(Position::new(7, 7)).unwrap().is_none());

        m.undo_move(applied).unwrap();
        assert_eq!(fingerprint(&m), before);
    }

    #[test]
    fn test_queen_side_castling_round_trip() {
        let mut m = sample();
        let before = fingerprint(&m);

        let applied = m.make_move(Position::new(7, 4), Position::new(7, 2)).unwrap();
        assert_eq!(
            applied.rook_shift,
            Some(RookShift {
                from: Position::new(7, 0),
                to: Position::new(7, 3)
            })
        );
        assert!(m.board().there_is_a_piece(Position::new(7, 3)).unwrap());

        m.undo_move(applied).unwrap();
        assert_eq!(fingerprint(&m), before);
    }

    #[test]
    fn test_make_move_from_empty_square_changes_nothing() {
        let mut m = sample();
        let before = fingerprint(&m);

        assert!(matches!(
            m.make_move(Position::new(3, 3), Position::new(3, 4)),
            Err(Error::NoPieceAtSource)
        ));
        assert!(matches!(
            m.make_move(Position::new(7, 4), Position::new(8, 4)),
            Err(Error::OutOfBounds(_))
        ));
        assert_eq!(fingerprint(&m), before);
    }
}
