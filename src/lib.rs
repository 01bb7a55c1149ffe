//! A rules engine for chess on an 8×8×8×8 board.
//!
//! Pieces move by pure geometric predicates over 4D deltas. Threat queries
//! are brute-force scans of all 4096 cells.

pub mod board;
pub mod chess;
pub mod core;
pub mod positions;
pub mod rules;

pub use board::{Board, BoardError, MoveOutcome, RejectReason, Square, BOARD_SIZE};
pub use chess::config::{EscapeSearch, QueenGeometry, RulesConfig};
pub use chess::piece::{Piece, PieceKind};
pub use crate::core::color::Color;
pub use crate::core::coord::{Coord, Delta};
