//! Built-in positions (compile-time setups).

use crate::board::{Board, BoardError};
use crate::chess::config::RulesConfig;
use crate::chess::piece::Piece;
use crate::core::color::Color;
use crate::core::coord::Coord;

fn board_from_pieces(
    config: RulesConfig,
    pieces: &[(Coord, Piece)],
) -> Result<Board, BoardError> {
    let mut board = Board::with_config(config);
    for &(c, p) in pieces {
        board.place_piece(c, p)?;
    }
    Ok(board)
}

/// The 32-piece starting arrangement in the `z = 0, w = 0` plane.
pub fn standard(config: RulesConfig) -> Board {
    let mut board = Board::with_config(config);
    board.initialize();
    board
}

/// A White king alone on its home square.
pub fn lone_king(config: RulesConfig) -> Result<Board, BoardError> {
    board_from_pieces(config, &[(Coord::new(4, 0, 0, 0), Piece::king(Color::White))])
}

/// White king checked by a Black rook along `y`.
///
/// Not mate: the king can step sideways off the rook's line.
pub fn rook_check(config: RulesConfig) -> Result<Board, BoardError> {
    board_from_pieces(
        config,
        &[
            (Coord::new(4, 0, 0, 0), Piece::king(Color::White)),
            (Coord::new(4, 7, 0, 0), Piece::rook(Color::Black)),
        ],
    )
}

/// White king mated in the origin corner by two queens.
///
/// The queen on `(0,0,0,2)` gives check; together the two queens cover all 81
/// cells around the king, the off-board ones included. Neither queen stands
/// next to the king.
pub fn corner_mate(config: RulesConfig) -> Result<Board, BoardError> {
    board_from_pieces(
        config,
        &[
            (Coord::ORIGIN, Piece::king(Color::White)),
            (Coord::new(0, 0, 0, 2), Piece::queen(Color::Black)),
            (Coord::new(2, 1, 0, 7), Piece::queen(Color::Black)),
        ],
    )
}

/// White king in the origin corner with every on-board neighbour covered.
///
/// The far-corner queen covers every neighbour whose coordinates have an
/// equal adjacent pair; the two rooks cover `(1,0,1,0)` and `(0,1,0,1)`.
/// Cells such as `(-1,0,-1,0)` stay safe, so this is mate only under
/// [`RulesConfig::bounded_king_escape`].
pub fn wall_mate(config: RulesConfig) -> Result<Board, BoardError> {
    board_from_pieces(
        config,
        &[
            (Coord::ORIGIN, Piece::king(Color::White)),
            (Coord::new(7, 7, 7, 7), Piece::queen(Color::Black)),
            (Coord::new(1, 7, 1, 0), Piece::rook(Color::Black)),
            (Coord::new(0, 7, 0, 1), Piece::rook(Color::Black)),
        ],
    )
}

pub fn by_name(name: &str, config: RulesConfig) -> Result<Option<Board>, BoardError> {
    match name {
        "standard" => Ok(Some(standard(config))),
        "empty" => Ok(Some(Board::with_config(config))),
        "lone_king" => Ok(Some(lone_king(config)?)),
        "rook_check" => Ok(Some(rook_check(config)?)),
        "corner_mate" => Ok(Some(corner_mate(config)?)),
        "wall_mate" => Ok(Some(wall_mate(config)?)),
        _ => Ok(None),
    }
}

/// Names of all built-in positions.
pub fn names() -> &'static [&'static str] {
    &[
        "standard",
        "empty",
        "lone_king",
        "rook_check",
        "corner_mate",
        "wall_mate",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_builds() {
        for name in names() {
            let board = by_name(name, RulesConfig::default()).unwrap();
            assert!(board.is_some(), "{name} should be a built-in position");
        }
        assert!(by_name("nope", RulesConfig::default()).unwrap().is_none());
    }
}
