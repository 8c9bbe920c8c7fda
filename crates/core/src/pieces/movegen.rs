//! Raw move generation per piece kind

use super::{ChessPiece, PieceKind};
use crate::board::{Board, MoveMatrix, Position};

const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const BISHOP_DIRS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

const QUEEN_DIRS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
];

const KING_DELTAS: [(i32, i32); 8] = QUEEN_DIRS;

/// Columns from the king to its rook before castling.
const KING_SIDE_ROOK_OFFSET: i32 = 3;
const QUEEN_SIDE_ROOK_OFFSET: i32 = -4;

/// The rook's half of a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RookShift {
    pub from: Position,
    pub to: Position,
}

/// Rook movement implied by a king travelling from `source` to `target`, if
/// that travel is a castling move (two columns along the same row).
pub fn castling_rook_shift(source: Position, target: Position) -> Option<RookShift> {
    if source.row != target.row {
        return None;
    }
    match target.column - source.column {
        2 => Some(RookShift {
            from: source.offset(0, KING_SIDE_ROOK_OFFSET),
            to: source.offset(0, 1),
        }),
        -2 => Some(RookShift {
            from: source.offset(0, QUEEN_SIDE_ROOK_OFFSET),
            to: source.offset(0, -1),
        }),
        _ => None,
    }
}

pub(super) fn possible_moves(piece: &ChessPiece, board: &Board<ChessPiece>, in_check: bool) -> MoveMatrix {
    let mut matrix = MoveMatrix::new(board.rows(), board.columns());
    let Some(from) = piece.position else {
        return matrix;
    };

    match piece.kind {
        PieceKind::Rook => slide(piece, board, from, &ROOK_DIRS, &mut matrix),
        PieceKind::Bishop => slide(piece, board, from, &BISHOP_DIRS, &mut matrix),
        PieceKind::Queen => slide(piece, board, from, &QUEEN_DIRS, &mut matrix),
        PieceKind::Knight => leap(piece, board, from, &KNIGHT_DELTAS, &mut matrix),
        PieceKind::King => {
            leap(piece, board, from, &KING_DELTAS, &mut matrix);
            if piece.move_count == 0 && !in_check {
                castling(piece, board, from, &mut matrix);
            }
        }
        PieceKind::Pawn => pawn(piece, board, from, &mut matrix),
    }

    matrix
}

fn occupant(board: &Board<ChessPiece>, at: Position) -> Option<&ChessPiece> {
    board.piece(at).ok().flatten()
}

/// Empty, or held by an opponent.
fn can_move(piece: &ChessPiece, board: &Board<ChessPiece>, at: Position) -> bool {
    occupant(board, at).map_or(true, |other| other.color != piece.color)
}

fn is_there_opponent_piece(piece: &ChessPiece, board: &Board<ChessPiece>, at: Position) -> bool {
    occupant(board, at).is_some_and(|other| other.color != piece.color)
}

fn is_empty(board: &Board<ChessPiece>, at: Position) -> bool {
    board.position_exists(at) && occupant(board, at).is_none()
}

fn slide(
    piece: &ChessPiece,
    board: &Board<ChessPiece>,
    from: Position,
    dirs: &[(i32, i32)],
    matrix: &mut MoveMatrix,
) {
    for &(dr, dc) in dirs {
        let mut p = from.offset(dr, dc);
        while is_empty(board, p) {
            matrix.mark(p);
            p = p.offset(dr, dc);
        }
        if board.position_exists(p) && is_there_opponent_piece(piece, board, p) {
            matrix.mark(p);
        }
    }
}

fn leap(
    piece: &ChessPiece,
    board: &Board<ChessPiece>,
    from: Position,
    deltas: &[(i32, i32)],
    matrix: &mut MoveMatrix,
) {
    for &(dr, dc) in deltas {
        let p = from.offset(dr, dc);
        if board.position_exists(p) && can_move(piece, board, p) {
            matrix.mark(p);
        }
    }
}

fn rook_ready_for_castling(king: &ChessPiece, board: &Board<ChessPiece>, at: Position) -> bool {
    board.position_exists(at)
        && occupant(board, at).is_some_and(|rook| {
            rook.kind == PieceKind::Rook && rook.color == king.color && rook.move_count == 0
        })
}

fn castling(king: &ChessPiece, board: &Board<ChessPiece>, from: Position, matrix: &mut MoveMatrix) {
    if rook_ready_for_castling(king, board, from.offset(0, KING_SIDE_ROOK_OFFSET))
        && (1..KING_SIDE_ROOK_OFFSET).all(|c| is_empty(board, from.offset(0, c)))
    {
        matrix.mark(from.offset(0, 2));
    }

    if rook_ready_for_castling(king, board, from.offset(0, QUEEN_SIDE_ROOK_OFFSET))
        && (QUEEN_SIDE_ROOK_OFFSET + 1..0).all(|c| is_empty(board, from.offset(0, c)))
    {
        matrix.mark(from.offset(0, -2));
    }
}

// Promotion and en passant are not supported.
fn pawn(piece: &ChessPiece, board: &Board<ChessPiece>, from: Position, matrix: &mut MoveMatrix) {
    let forward = piece.color.forward();

    let one = from.offset(forward, 0);
    if is_empty(board, one) {
        matrix.mark(one);

        let two = from.offset(2 * forward, 0);
        if piece.move_count == 0 && is_empty(board, two) {
            matrix.mark(two);
        }
    }

    for side in [-1, 1] {
        let diagonal = from.offset(forward, side);
        if board.position_exists(diagonal) && is_there_opponent_piece(piece, board, diagonal) {
            matrix.mark(diagonal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::pieces::PieceId;

    struct Setup {
        board: Board<ChessPiece>,
        next_id: u16,
    }

    impl Setup {
        fn new() -> Self {
            Self {
                board: Board::new(8, 8).unwrap(),
                next_id: 0,
            }
        }

        fn put(&mut self, kind: PieceKind, color: Color, row: i32, column: i32) -> Position {
            let at = Position::new(row, column);
            let piece = ChessPiece::new(PieceId(self.next_id), kind, color);
            self.next_id += 1;
            self.board.place_piece(piece, at).unwrap();
            at
        }

        fn moves(&self, at: Position, in_check: bool) -> MoveMatrix {
            self.board
                .piece(at)
                .unwrap()
                .unwrap()
                .possible_moves(&self.board, in_check)
        }

        fn bump(&mut self, at: Position) {
            let mut piece = self.board.remove_piece(at).unwrap().unwrap();
            piece.increase_move_count();
            self.board.place_piece(piece, at).unwrap();
        }
    }

    fn squares(matrix: &MoveMatrix) -> Vec<(i32, i32)> {
        matrix.marked().map(|p| (p.row, p.column)).collect()
    }

    #[test]
    fn test_rook_in_corner_covers_row_and_column() {
        let mut s = Setup::new();
        let rook = s.put(PieceKind::Rook, Color::White, 7, 0);

        let m = s.moves(rook, false);
        assert_eq!(m.count(), 14);
        for p in m.marked() {
            assert!(p.row == 7 || p.column == 0);
            assert_ne!(p, rook);
        }
    }

    #[test]
    fn test_rook_stops_at_blockers() {
        let mut s = Setup::new();
        let rook = s.put(PieceKind::Rook, Color::White, 4, 4);
        s.put(PieceKind::Pawn, Color::White, 2, 4);
        s.put(PieceKind::Pawn, Color::Black, 4, 6);

        let m = s.moves(rook, false);
        assert!(m.is_marked(Position::new(3, 4)));
        assert!(!m.is_marked(Position::new(2, 4)));
        assert!(!m.is_marked(Position::new(1, 4)));
        assert!(m.is_marked(Position::new(4, 5)));
        assert!(m.is_marked(Position::new(4, 6)));
        assert!(!m.is_marked(Position::new(4, 7)));
        // 1 up, 3 down, 4 left, 2 right
        assert_eq!(m.count(), 10);
    }

    #[test]
    fn test_bishop_slides_diagonally() {
        let mut s = Setup::new();
        let bishop = s.put(PieceKind::Bishop, Color::Black, 0, 2);
        s.put(PieceKind::Knight, Color::White, 3, 5);

        let m = s.moves(bishop, false);
        assert_eq!(squares(&m), vec![(1, 1), (1, 3), (2, 0), (2, 4), (3, 5)]);
    }

    #[test]
    fn test_queen_combines_rook_and_bishop() {
        let mut s = Setup::new();
        let queen = s.put(PieceKind::Queen, Color::White, 3, 3);
        assert_eq!(s.moves(queen, false).count(), 27);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let mut s = Setup::new();
        let knight = s.put(PieceKind::Knight, Color::White, 7, 1);
        s.put(PieceKind::Pawn, Color::White, 6, 1);
        s.put(PieceKind::Pawn, Color::White, 6, 3);
        s.put(PieceKind::Pawn, Color::Black, 5, 0);

        let m = s.moves(knight, false);
        assert_eq!(squares(&m), vec![(5, 0), (5, 2)]);
    }

    #[test]
    fn test_king_steps_one_square() {
        let mut s = Setup::new();
        let king = s.put(PieceKind::King, Color::White, 0, 0);
        s.put(PieceKind::Pawn, Color::White, 0, 1);
        s.put(PieceKind::Pawn, Color::Black, 1, 1);

        let m = s.moves(king, false);
        assert_eq!(squares(&m), vec![(1, 0), (1, 1)]);
    }

    #[test]
    fn test_castling_both_sides() {
        let mut s = Setup::new();
        let king = s.put(PieceKind::King, Color::White, 7, 4);
        s.put(PieceKind::Rook, Color::White, 7, 0);
        s.put(PieceKind::Rook, Color::White, 7, 7);

        let m = s.moves(king, false);
        assert!(m.is_marked(Position::new(7, 6)));
        assert!(m.is_marked(Position::new(7, 2)));
    }

    #[test]
    fn test_castling_gates() {
        let mut s = Setup::new();
        let king = s.put(PieceKind::King, Color::White, 7, 4);
        s.put(PieceKind::Rook, Color::White, 7, 0);
        let king_rook = s.put(PieceKind::Rook, Color::White, 7, 7);
        s.put(PieceKind::Knight, Color::White, 7, 1);

        let m = s.moves(king, false);
        assert!(m.is_marked(Position::new(7, 6)));
        assert!(!m.is_marked(Position::new(7, 2)), "queen side path blocked");

        assert!(!s.moves(king, true).is_marked(Position::new(7, 6)), "in check");

        s.bump(king_rook);
        assert!(!s.moves(king, false).is_marked(Position::new(7, 6)), "rook moved");
    }

    #[test]
    fn test_moved_king_cannot_castle() {
        let mut s = Setup::new();
        let king = s.put(PieceKind::King, Color::Black, 0, 4);
        s.put(PieceKind::Rook, Color::Black, 0, 7);
        s.bump(king);

        assert!(!s.moves(king, false).is_marked(Position::new(0, 6)));
    }

    #[test]
    fn test_castling_needs_own_rook() {
        let mut s = Setup::new();
        let king = s.put(PieceKind::King, Color::White, 7, 4);
        s.put(PieceKind::Rook, Color::Black, 7, 7);
        s.put(PieceKind::Bishop, Color::White, 7, 0);

        let m = s.moves(king, false);
        assert!(!m.is_marked(Position::new(7, 6)));
        assert!(!m.is_marked(Position::new(7, 2)));
    }

    #[test]
    fn test_castling_near_edge_does_not_probe_off_board() {
        let mut s = Setup::new();
        let king = s.put(PieceKind::King, Color::White, 7, 6);
        s.put(PieceKind::Rook, Color::White, 7, 7);

        let m = s.moves(king, false);
        assert_eq!(squares(&m), vec![(6, 5), (6, 6), (6, 7), (7, 5)]);
    }

    #[test]
    fn test_pawn_advances() {
        let mut s = Setup::new();
        let white = s.put(PieceKind::Pawn, Color::White, 6, 4);
        let black = s.put(PieceKind::Pawn, Color::Black, 1, 3);

        assert_eq!(squares(&s.moves(white, false)), vec![(4, 4), (5, 4)]);
        assert_eq!(squares(&s.moves(black, false)), vec![(2, 3), (3, 3)]);

        s.bump(white);
        assert_eq!(squares(&s.moves(white, false)), vec![(5, 4)]);
    }

    #[test]
    fn test_pawn_blocked_and_captures() {
        let mut s = Setup::new();
        let pawn = s.put(PieceKind::Pawn, Color::White, 6, 4);
        s.put(PieceKind::Knight, Color::Black, 5, 4);
        s.put(PieceKind::Knight, Color::Black, 5, 5);
        s.put(PieceKind::Knight, Color::White, 5, 3);

        assert_eq!(squares(&s.moves(pawn, false)), vec![(5, 5)]);
    }

    #[test]
    fn test_pawn_double_step_needs_clear_path() {
        let mut s = Setup::new();
        let pawn = s.put(PieceKind::Pawn, Color::Black, 1, 0);
        s.put(PieceKind::Rook, Color::White, 3, 0);

        assert_eq!(squares(&s.moves(pawn, false)), vec![(2, 0)]);
    }

    #[test]
    fn test_pawn_on_last_row_is_stuck() {
        let mut s = Setup::new();
        let pawn = s.put(PieceKind::Pawn, Color::White, 0, 3);
        assert!(!s.moves(pawn, false).any());
    }

    #[test]
    fn test_castling_rook_shift() {
        let king = Position::new(7, 4);
        assert_eq!(
            castling_rook_shift(king, Position::new(7, 6)),
            Some(RookShift {
                from: Position::new(7, 7),
                to: Position::new(7, 5)
            })
        );
        assert_eq!(
            castling_rook_shift(king, Position::new(7, 2)),
            Some(RookShift {
                from: Position::new(7, 0),
                to: Position::new(7, 3)
            })
        );
        assert_eq!(castling_rook_shift(king, Position::new(7, 5)), None);
        assert_eq!(castling_rook_shift(king, Position::new(6, 6)), None);
    }

    #[test]
    fn test_unplaced_piece_has_no_moves() {
        let board = Board::new(8, 8).unwrap();
        let piece = ChessPiece::new(PieceId(0), PieceKind::Queen, Color::White);
        assert!(!piece.possible_moves(&board, false).any());
    }
}
