use crate::board::{Board, BoardError, Square};
use crate::chess::piece::PieceKind;
use crate::core::color::Color;

use super::attacks::is_square_danger;

/// The first king of `color` in scan order.
pub fn find_king(board: &Board, color: Color) -> Result<Square, BoardError> {
    board
        .pieces()
        .find(|(_, p)| p.color == color && p.kind == PieceKind::King)
        .map(|(sq, _)| sq)
        .ok_or(BoardError::NoKing { color })
}

pub fn is_check(board: &Board, color: Color) -> Result<bool, BoardError> {
    let king = find_king(board, color)?;
    Ok(is_square_danger(board, king.coord(), color))
}
