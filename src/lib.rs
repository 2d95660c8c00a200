//! Chess rules engine.
//!
//! Owns the board of one game, decides whether moves are legal and advances the turn. Rendering and input
//! handling are left to the caller, which feeds square text (`e2`) into a [`GameSession`] and draws the
//! [`Snapshot`] it gets back.
//!
//! ```
//! use chessgame::{Color, new_session};
//!
//! let mut session = new_session();
//! session.select("e2").unwrap();
//! session.move_to("e4").unwrap();
//! assert_eq!(session.turn(), Color::Black);
//! ```

pub mod attack;
pub mod bitboard;
pub mod board;
pub mod config;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod session;
pub mod slider;
pub mod types;
pub mod zobrist;

pub use board::Board;
pub use config::SessionConfig;
pub use error::{ConfigError, FenError, InvalidSquare, MoveError, ParseMoveError, ParseSquareError, PlayError};
pub use moves::{Move, MoveKind, MoveRecord};
pub use notation::{parse_move, parse_square};
pub use rules::{RuleSet, is_legal};
pub use session::{GameSession, Snapshot, new_session};
pub use types::{Cell, Color, Piece, PieceType, Square, Turn};
