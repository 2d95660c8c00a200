//! Game session.
//!
//! A [`GameSession`] owns the board, the side to move and the pending selection of one game. Moves are made in
//! two steps: [`GameSession::select`] marks the origin square, [`GameSession::move_to`] names the destination.
//! A move either applies completely (board updated, turn flipped, selection cleared) or leaves the session as
//! it was.
//!
//! The session is a plain owned value. Callers that share one between threads wrap it in a lock.

use serde::Serialize;

use crate::board::Board;
use crate::config::SessionConfig;
use crate::error::{FenError, InvalidSquare, MoveError, PlayError};
use crate::movegen::legal_targets;
use crate::moves::{Move, MoveRecord};
use crate::notation::{parse_move, parse_square};
use crate::types::{Cell, Color, Square, Turn};
use crate::zobrist::zobrist_keys;

/// Read-only view of a session for renderers. Borrows the board instead of copying it.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub board: &'a [[Cell; 8]; 8],
    pub turn: Turn,
    pub selected: Option<Square>,
    /// Squares the selected piece may move to, for highlighting.
    pub targets: Vec<Square>,
    pub last_move: Option<Move>,
    /// Position key covering the placement and the side to move.
    pub key: u64,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    turn: Turn,
    selected: Option<Square>,
    config: SessionConfig,
    history: Vec<MoveRecord>,
}

/// Standard setup, White to move, nothing selected, default configuration.
pub fn new_session() -> GameSession {
    GameSession::new()
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self { board: Board::standard_setup(), turn: Color::White, selected: None, config, history: Vec::new() }
    }

    /// Starts from a FEN piece placement, optionally followed by the side to move (`w` or `b`).
    /// Further FEN fields are ignored.
    pub fn from_fen(fen: &str, config: SessionConfig) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::MissingPlacement)?;
        let side_part = parts.next().unwrap_or("w");

        let board = Board::from_fen(placement)?;
        let turn = match side_part {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_owned())),
        };

        Ok(Self { board, turn, selected: None, config, history: Vec::new() })
    }

    /// Placement and side to move, in FEN.
    pub fn to_fen(&self) -> String {
        let side = match self.turn {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{} {}", self.board.to_fen(), side)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Moves applied so far, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn position_key(&self) -> u64 {
        self.board.key() ^ zobrist_keys().side(self.turn)
    }

    /// Marks a square as the origin of the next move. Any on-board square can be selected, and a new selection
    /// replaces the previous one. On error the current selection is kept.
    pub fn select(&mut self, text: &str) -> Result<(), InvalidSquare> {
        let square = parse_square(text).map_err(|source| InvalidSquare { text: text.to_owned(), source })?;
        self.selected = Some(square);
        tracing::debug!(square = %square, "square selected");
        Ok(())
    }

    /// Moves the selected piece to the square named by `text`.
    pub fn move_to(&mut self, text: &str) -> Result<MoveRecord, MoveError> {
        let from = self.selected.ok_or(MoveError::NoSelectionActive)?;
        let to = parse_square(text).map_err(|source| InvalidSquare { text: text.to_owned(), source })?;
        self.apply(from, to)
    }

    /// Selects and moves in one call, from text like `e2e4`. Nothing changes unless the move is applied,
    /// the current selection included.
    pub fn play(&mut self, text: &str) -> Result<MoveRecord, PlayError> {
        let m = parse_move(text)?;
        Ok(self.apply(m.from(), m.to())?)
    }

    fn apply(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let illegal = || MoveError::IllegalMove { from, to };

        let Some(piece) = self.board.piece_at(from) else {
            tracing::debug!(%from, %to, "rejected move from an empty square");
            return Err(illegal());
        };
        if self.config.enforce_turn && piece.color != self.turn {
            tracing::debug!(%from, %to, turn = %self.turn, "rejected move out of turn");
            return Err(illegal());
        }
        let Some(kind) = self.config.rules.classify(&self.board, from, to) else {
            tracing::debug!(%from, %to, piece = ?piece.piece_type, "rejected illegal move");
            return Err(illegal());
        };

        let captured = self.board.make_move(from, to);
        let record = MoveRecord { mv: Move::new(from, to), piece, captured, kind };
        self.history.push(record);
        self.turn = !self.turn;
        self.selected = None;

        tracing::info!(mv = %record.mv, kind = ?kind, next = %self.turn, "move applied");
        Ok(record)
    }

    /// Takes back the last applied move. Clears the selection.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;
        self.board.unmake_move(record.mv.from(), record.mv.to(), record.piece, record.captured);
        self.turn = !self.turn;
        self.selected = None;
        tracing::info!(mv = %record.mv, next = %self.turn, "move taken back");
        Some(record)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let targets = match self.selected {
            Some(from) if self.can_move_from(from) => {
                legal_targets(self.config.rules, &self.board, from).squares().collect()
            }
            _ => Vec::new(),
        };

        Snapshot {
            board: self.board.cells(),
            turn: self.turn,
            selected: self.selected,
            targets,
            last_move: self.history.last().map(|r| r.mv),
            key: self.position_key(),
        }
    }

    fn can_move_from(&self, from: Square) -> bool {
        match self.board.piece_at(from) {
            Some(piece) => !self.config.enforce_turn || piece.color == self.turn,
            None => false,
        }
    }
}
