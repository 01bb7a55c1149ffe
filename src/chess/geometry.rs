//! Pure move geometry, one predicate per piece kind.
//!
//! Every predicate takes the exact delta `from.delta_to(to)` and knows nothing
//! about the board: no occupancy, no blockers, no bounds.

use crate::chess::config::QueenGeometry;
use crate::core::color::Color;
use crate::core::coord::{Coord, Delta};

#[inline]
pub fn king_step(d: Delta) -> bool {
    d.chebyshev_norm() <= 1
}

#[inline]
pub fn queen_move(d: Delta, geometry: QueenGeometry) -> bool {
    match geometry {
        QueenGeometry::Legacy => queen_legacy(d),
        QueenGeometry::Diagonal => queen_diagonal(d),
    }
}

/// Adjacent pairs of absolute deltas: any equal pair admits the move.
#[inline]
pub fn queen_legacy(d: Delta) -> bool {
    let a = d.abs();
    a.x == a.y || a.y == a.z || a.z == a.w
}

/// All nonzero absolute deltas share one value.
#[inline]
pub fn queen_diagonal(d: Delta) -> bool {
    let mut len = 0;
    for c in d.abs().components() {
        if c == 0 {
            continue;
        }
        if len != 0 && c != len {
            return false;
        }
        len = c;
    }
    true
}

#[inline]
pub fn rook_line(d: Delta) -> bool {
    d.nonzero_axes() == 1
}

#[inline]
pub fn bishop_diagonal(d: Delta) -> bool {
    let a = d.abs();
    a.x == a.y && a.y == a.z && a.z == a.w
}

#[inline]
pub fn knight_jump(d: Delta) -> bool {
    let a = d.abs();
    let l_shape = |p: i64, q: i64| (p == 1 && q == 2) || (p == 2 && q == 1);
    l_shape(a.x, a.y) && l_shape(a.z, a.w)
}

/// Forward along `x` (+1 for White, -1 for Black), optionally with the same
/// step along `w` for the capturing diagonal.
#[inline]
pub fn pawn_step(color: Color, d: Delta) -> bool {
    let fwd = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    d.x == fwd && d.y == 0 && d.z == 0 && (d.w == 0 || d.w == fwd)
}

/// Unit direction and distance if `d` is a straight line in the lattice
/// (every nonzero component has the same magnitude).
#[inline]
pub fn straight_line(d: Delta) -> Option<(Coord, i64)> {
    if d == Delta::ZERO || !queen_diagonal(d) {
        return None;
    }
    Some((d.signum(), d.chebyshev_norm()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_rejects_bent_moves() {
        assert_eq!(
            straight_line(Delta::new(3, -3, 0, 3)),
            Some((Coord::new(1, -1, 0, 1), 3))
        );
        assert_eq!(straight_line(Delta::new(1, 2, 0, 0)), None);
        assert_eq!(straight_line(Delta::ZERO), None);
    }

    #[test]
    fn legacy_queen_accepts_plane_moves_with_equal_trailing_axes() {
        // z and w both zero, so any (x, y) step is admitted.
        let d = Delta::from(Coord::new(1, 7, 0, 0));
        assert!(queen_legacy(d));
        assert!(!queen_diagonal(d));
        assert!(!queen_legacy(Delta::new(1, 2, 3, 4)));
    }

    #[test]
    fn deltas_wider_than_i32_keep_their_geometry() {
        let span = i64::from(u32::MAX);
        assert!(rook_line(Delta::new(span, 0, 0, 0)));
        assert!(queen_legacy(Delta::new(-span, 7, 0, 0)));
        assert!(bishop_diagonal(Delta::new(span, -span, span, span)));
        assert!(!king_step(Delta::new(span, 0, 0, 0)));
    }
}
