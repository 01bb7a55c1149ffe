use crate::board::{Board, Square, BOARD_SIZE};
use crate::chess::geometry::straight_line;
use crate::chess::piece::Piece;
use crate::core::color::Color;
use crate::core::coord::Coord;

/// True iff no cell strictly between `from` and `to` is occupied.
///
/// Moves that are not straight lines (knight jumps, bent legacy-queen moves)
/// have no intermediate cells and are always clear. `from` is a piece's cell,
/// so once the ray leaves the board nothing further along it can block.
pub fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let Some((step, dist)) = straight_line(from.delta_to(to)) else {
        return true;
    };
    let mut at = from;
    for _ in 1..dist {
        at = at + step;
        if !at.in_range(BOARD_SIZE) {
            return true;
        }
        if board.is_occupied(at) {
            return false;
        }
    }
    true
}

/// Does `piece`, standing on `from`, reach `target` under the board's rules?
#[inline]
pub fn piece_attacks(board: &Board, piece: Piece, from: Coord, target: Coord) -> bool {
    let rules = board.config();
    if !piece.is_valid_move_with(from, target, rules) {
        return false;
    }
    !(rules.path_blocking && piece.kind.is_slider()) || path_clear(board, from, target)
}

/// The first attacker of `target` in scan order, if any.
///
/// Uses the raw move predicate, so a pawn threatens both its forward cell and
/// its capturing diagonal, and a piece "threatens" its own cell when its
/// geometry admits the null move.
pub fn first_attacker(board: &Board, target: Coord, defender: Color) -> Option<(Square, Piece)> {
    let attacker = defender.other();
    board
        .pieces()
        .filter(|(_, p)| p.color == attacker)
        .find(|&(sq, p)| piece_attacks(board, p, sq.coord(), target))
}

/// Is `target` reachable by any piece not of `defender`'s color?
///
/// `target` may lie off the board; the predicates are evaluated all the same.
pub fn is_square_danger(board: &Board, target: Coord, defender: Color) -> bool {
    first_attacker(board, target, defender).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::config::RulesConfig;

    #[test]
    fn path_clear_sees_blockers_only_between_endpoints() {
        let mut board = Board::with_config(RulesConfig::default().with_path_blocking(true));
        board
            .place_piece(Coord::new(2, 2, 2, 2), Piece::pawn(Color::White))
            .unwrap();
        assert!(!path_clear(&board, Coord::ORIGIN, Coord::new(4, 4, 4, 4)));
        assert!(path_clear(&board, Coord::ORIGIN, Coord::new(2, 2, 2, 2)));
        assert!(path_clear(&board, Coord::ORIGIN, Coord::new(1, 2, 1, 2)));
    }

    #[test]
    fn far_off_board_targets_are_answered_without_overflow() {
        // Legacy queens reach all of these through an equal adjacent pair of deltas.
        let reached = [
            Coord::new(i32::MIN, 0, 0, 0),
            Coord::new(i32::MAX, 0, 0, 0),
            Coord::new(0, i32::MAX, 0, 0),
            Coord::new(i32::MIN, i32::MIN, i32::MIN, i32::MIN),
        ];
        let unreached = Coord::new(0, i32::MIN, i32::MAX, 0);

        let mut board = Board::standard();
        for blocking in [false, true] {
            board.set_config(RulesConfig::default().with_path_blocking(blocking));
            for color in Color::ALL {
                for c in reached {
                    assert!(is_square_danger(&board, c, color), "{c} {color}");
                }
                assert!(!is_square_danger(&board, unreached, color));
            }
        }
    }
}
