//! Brute-force checkmate detection.
//!
//! Once the king is known to stand on a dangerous square, mate holds unless
//! some escape is found. Two escape searches exist (see [`EscapeSearch`]):
//!
//! - `CurrentBoard`: a king step, then any move by any defending piece, escapes
//!   when its destination is safe on the board *as it is now*. Nothing is
//!   played, so captures of the checking piece and discovered lines are not
//!   seen. King steps are taken over all 81 offsets, off-board cells included,
//!   unless [`bounded_king_escape`] is set. Worst case is
//!   `4096 × 4096` danger queries.
//! - `ScratchBoard`: every legal candidate move is played on a scratch copy,
//!   the defending king's square is re-tested, and the move is undone. Only
//!   on-board destinations are ever played.

//!
//! [`bounded_king_escape`]: crate::chess::config::RulesConfig::bounded_king_escape

use rustc_hash::FxHashMap;

use crate::board::{Board, BoardError, Square};
use crate::chess::config::EscapeSearch;
use crate::chess::piece::Piece;
use crate::core::color::Color;
use crate::core::coord::{king_offsets, Coord};

use super::attacks::{is_square_danger, piece_attacks};
use super::check::find_king;

/// Danger answers for one defender on one unchanging board.
struct DangerMemo<'a> {
    board: &'a Board,
    defender: Color,
    seen: FxHashMap<Coord, bool>,
}

impl<'a> DangerMemo<'a> {
    fn new(board: &'a Board, defender: Color) -> Self {
        Self {
            board,
            defender,
            seen: FxHashMap::default(),
        }
    }

    fn is_danger(&mut self, c: Coord) -> bool {
        let (board, defender) = (self.board, self.defender);
        *self
            .seen
            .entry(c)
            .or_insert_with(|| is_square_danger(board, c, defender))
    }
}

pub fn is_checkmate(board: &Board, color: Color) -> Result<bool, BoardError> {
    let king_sq = find_king(board, color)?;
    let mut danger = DangerMemo::new(board, color);
    if !danger.is_danger(king_sq.coord()) {
        return Ok(false);
    }

    let escape = match board.config().escape_search {
        EscapeSearch::CurrentBoard => king_escape(board, king_sq, &mut danger)
            .or_else(|| any_piece_escape(board, color, &mut danger)),
        EscapeSearch::ScratchBoard => scratch_escape(board, color, king_sq),
    };

    match escape {
        Some((from, to)) => {
            log::debug!("{color} not mated: {from} -> {to} escapes");
            Ok(false)
        }
        None => Ok(true),
    }
}

/// A one-step king move onto a safe cell.
fn king_escape(
    board: &Board,
    king_sq: Square,
    danger: &mut DangerMemo<'_>,
) -> Option<(Coord, Coord)> {
    let king = board.piece_on(king_sq)?;
    let rules = board.config();
    let from = king_sq.coord();
    king_offsets()
        .map(|d| from + d)
        .filter(|&to| !rules.bounded_king_escape || Square::from_coord(to).is_some())
        .find(|&to| king.is_valid_move_with(from, to, rules) && !danger.is_danger(to))
        .map(|to| (from, to))
}

/// Any defending piece with a move onto a square that is safe right now.
fn any_piece_escape(
    board: &Board,
    color: Color,
    danger: &mut DangerMemo<'_>,
) -> Option<(Coord, Coord)> {
    let defenders: Vec<(Square, Piece)> =
        board.pieces().filter(|(_, p)| p.color == color).collect();
    for (from_sq, piece) in defenders {
        let from = from_sq.coord();
        for to in Square::all().map(Square::coord) {
            if piece_attacks(board, piece, from, to) && !danger.is_danger(to) {
                return Some((from, to));
            }
        }
    }
    None
}

/// Any legal defending move after which the king is no longer attacked.
fn scratch_escape(board: &Board, color: Color, king_sq: Square) -> Option<(Coord, Coord)> {
    let mut scratch = board.clone();
    let defenders: Vec<(Square, Piece)> =
        board.pieces().filter(|(_, p)| p.color == color).collect();

    for (from_sq, piece) in defenders {
        let from = from_sq.coord();
        for to_sq in Square::all() {
            let to = to_sq.coord();
            if scratch.move_rejection(piece, from, to).is_some() {
                continue;
            }
            let captured = scratch.relocate(from_sq, to_sq);
            let king_at: Coord = if from_sq == king_sq { to } else { king_sq.coord() };
            let safe = !is_square_danger(&scratch, king_at, color);
            scratch.unrelocate(from_sq, to_sq, captured);
            if safe {
                return Some((from, to));
            }
        }
    }
    None
}
