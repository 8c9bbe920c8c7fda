//! Match controller: turn sequencing, validation and game-ending detection

use tracing::{debug, info};

use super::setup::{standard_setup, Placement, BOARD_COLUMNS, BOARD_ROWS};
use super::snapshot::{MatchSnapshot, MatchState, PieceView};
use crate::board::{Board, MoveMatrix, Position};
use crate::color::Color;
use crate::config::MatchConfig;
use crate::error::{Error, Result};
use crate::pieces::{ChessPiece, PieceId, PieceKind};

/// A two-player match on an 8x8 board.
///
/// Pieces in play are owned by the board; captured pieces are kept here so a
/// speculative capture can be reverted.
#[derive(Debug, Clone)]
pub struct ChessMatch {
    pub(super) board: Board<ChessPiece>,
    pub(super) turn: u32,
    pub(super) current_player: Color,
    pub(super) check: bool,
    pub(super) check_mate: bool,
    pub(super) captured: Vec<ChessPiece>,
}

impl ChessMatch {
    /// Creates a match from the standard opening position, White to move.
    pub fn new() -> Result<Self> {
        Self::from_setup(&standard_setup(), Color::White)
    }

    pub fn from_config(config: &MatchConfig) -> Result<Self> {
        Self::from_setup(&config.setup.placements(), config.first_player)
    }

    /// Creates a match from arbitrary placements.
    ///
    /// Each color needs exactly one king, the side not to move may not start
    /// in check, and the side to move may not start checkmated.
    pub fn from_setup(placements: &[Placement], first_player: Color) -> Result<Self> {
        let mut board = Board::new(BOARD_ROWS, BOARD_COLUMNS)?;
        for (i, placement) in placements.iter().enumerate() {
            let piece = ChessPiece::new(PieceId(i as u16), placement.kind, placement.color);
            board.place_piece(piece, placement.position)?;
        }

        let mut chess_match = Self {
            board,
            turn: 1,
            current_player: first_player,
            check: false,
            check_mate: false,
            captured: Vec::new(),
        };

        for color in [Color::White, Color::Black] {
            let kings = chess_match
                .board
                .occupants()
                .filter(|(_, p)| p.color() == color && p.kind() == PieceKind::King)
                .count();
            match kings {
                0 => return Err(Error::MissingKing(color)),
                1 => {}
                n => return Err(Error::InvalidSetup(format!("{} has {} kings", color, n))),
            }
        }

        if chess_match.test_check(first_player.opponent())? {
            return Err(Error::InvalidSetup(format!(
                "{} is in check but {} moves first",
                first_player.opponent(),
                first_player
            )));
        }

        chess_match.check = chess_match.test_check(first_player)?;
        if chess_match.test_check_mate(first_player)? {
            return Err(Error::InvalidSetup(format!(
                "{} is already checkmated",
                first_player
            )));
        }

        debug!(
            pieces = chess_match.board.len(),
            first_player = %first_player,
            check = chess_match.check,
            "match created"
        );

        Ok(chess_match)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn check(&self) -> bool {
        self.check
    }

    pub fn check_mate(&self) -> bool {
        self.check_mate
    }

    pub fn state(&self) -> MatchState {
        if self.check_mate {
            MatchState::CheckMate
        } else if self.check {
            MatchState::Check
        } else {
            MatchState::InProgress
        }
    }

    pub fn board(&self) -> &Board<ChessPiece> {
        &self.board
    }

    pub fn piece_at(&self, at: Position) -> Result<Option<&ChessPiece>> {
        self.board.piece(at)
    }

    pub fn pieces_on_board(&self) -> impl Iterator<Item = (Position, &ChessPiece)> + '_ {
        self.board.occupants()
    }

    pub fn captured_pieces(&self) -> &[ChessPiece] {
        &self.captured
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let mut grid = vec![vec![None; self.board.columns()]; self.board.rows()];
        for (at, piece) in self.board.occupants() {
            grid[at.row as usize][at.column as usize] = Some(PieceView::from(piece));
        }

        MatchSnapshot {
            turn: self.turn,
            current_player: self.current_player,
            state: self.state(),
            check: self.check,
            check_mate: self.check_mate,
            board: grid,
            captured: self.captured.iter().map(PieceView::from).collect(),
        }
    }

    fn next_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opponent();
    }

    fn ensure_on_board(&self, at: Position) -> Result<()> {
        if self.board.position_exists(at) {
            Ok(())
        } else {
            Err(Error::OutOfBounds(at))
        }
    }

    /// Checks the selected piece and returns its raw moves.
    fn validate_source_position(&self, source: Position) -> Result<MoveMatrix> {
        let piece = self.board.piece(source)?.ok_or(Error::NoPieceAtSource)?;

        let moves = piece.possible_moves(&self.board, self.check);
        if !moves.any() {
            return Err(Error::NoLegalMoves);
        }
        if piece.color() != self.current_player {
            return Err(Error::NotYourPiece);
        }
        Ok(moves)
    }

    /// Squares the piece on `source` could reach, without filtering moves
    /// that would leave its own king in check.
    pub fn possible_moves(&self, source: Position) -> Result<MoveMatrix> {
        self.ensure_on_board(source)?;
        self.validate_source_position(source)
    }

    /// Like [`possible_moves`](Self::possible_moves), minus every square that
    /// would leave the mover in check.
    pub fn legal_moves(&mut self, source: Position) -> Result<MoveMatrix> {
        let mut moves = self.possible_moves(source)?;
        let color = self.current_player;

        let targets: Vec<Position> = moves.marked().collect();
        for target in targets {
            let applied = self.make_move(source, target)?;
            let exposed = self.test_check(color);
            self.undo_move(applied)?;
            if exposed? {
                moves.unmark(target);
            }
        }

        Ok(moves)
    }

    /// Moves the piece on `source` to `target` and returns whatever it
    /// captured.
    ///
    /// Any error leaves the match exactly as it was.
    pub fn perform_chess_move(&mut self, source: Position, target: Position) -> Result<Option<ChessPiece>> {
        if self.check_mate {
            return Err(Error::MatchOver);
        }
        self.ensure_on_board(source)?;
        self.ensure_on_board(target)?;

        let moves = self.validate_source_position(source)?;
        if !moves.is_marked(target) {
            return Err(Error::IllegalTarget);
        }

        let applied = self.make_move(source, target)?;
        if self.test_check(self.current_player)? {
            self.undo_move(applied)?;
            debug!(%source, %target, player = %self.current_player, "rejected move into check");
            return Err(Error::SelfCheck);
        }

        let captured = match applied.captured {
            Some(id) => self.captured.iter().rev().find(|p| p.id() == id).cloned(),
            None => None,
        };

        debug!(
            turn = self.turn,
            player = %self.current_player,
            %source,
            %target,
            captured = ?captured.as_ref().map(|p| p.kind()),
            "move performed"
        );

        let opponent = self.current_player.opponent();
        self.check = self.test_check(opponent)?;

        if self.test_check_mate(opponent)? {
            self.check_mate = true;
            info!(winner = %self.current_player, turn = self.turn, "checkmate");
        } else {
            if self.check {
                info!(player = %opponent, "check");
            }
            self.next_turn();
        }

        Ok(captured)
    }
}
