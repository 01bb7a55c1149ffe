use std::fmt;

use crate::board::square::Square;
use crate::core::color::Color;
use crate::core::coord::Coord;

/// Structured errors returned by board operations.
///
/// Geometric rejections are not errors; they come back as `Ok(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate outside `[0, 7]^4` was used to address a cell.
    OutOfBounds { coord: Coord },
    /// Placement onto a cell that already holds a piece.
    Occupied { square: Square },
    /// Move requested from an empty cell.
    EmptySource { square: Square },
    /// Check or checkmate asked for a color that has no king on the board.
    NoKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { coord } => write!(f, "coordinate {coord} is off the board"),
            BoardError::Occupied { square } => {
                write!(f, "there is already a piece at {square}")
            }
            BoardError::EmptySource { square } => write!(f, "no piece at source {square}"),
            BoardError::NoKing { color } => write!(f, "no {color} king found"),
        }
    }
}

impl std::error::Error for BoardError {}
