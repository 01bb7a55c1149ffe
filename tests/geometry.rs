use four_d_chess::chess::config::{QueenGeometry, RulesConfig};
use four_d_chess::chess::piece::{Piece, PieceKind};
use four_d_chess::core::color::Color;
use four_d_chess::core::coord::Coord;

/// Every delta in `[-7, 7]^4`: the full range of differences between two cells.
fn all_deltas() -> Vec<Coord> {
    let mut out = Vec::with_capacity(15usize.pow(4));
    for x in -7..=7 {
        for y in -7..=7 {
            for z in -7..=7 {
                for w in -7..=7 {
                    out.push(Coord::new(x, y, z, w));
                }
            }
        }
    }
    out
}

/// Moves are checked from the middle of the board so the delta is the only input.
fn accepts(piece: Piece, d: Coord, rules: &RulesConfig) -> bool {
    let from = Coord::new(3, 4, 3, 4);
    piece.is_valid_move_with(from, from + d, rules)
}

fn check_kind(
    kind: PieceKind,
    color: Color,
    rules: RulesConfig,
    reference: impl Fn(Coord) -> bool,
) {
    let piece = Piece::new(color, kind);
    for d in all_deltas() {
        assert_eq!(
            accepts(piece, d, &rules),
            reference(d),
            "{piece} with delta {d}"
        );
    }
}

#[test]
fn king_moves_one_step_on_every_axis() {
    check_kind(PieceKind::King, Color::White, RulesConfig::default(), |d| {
        d.x.abs() <= 1 && d.y.abs() <= 1 && d.z.abs() <= 1 && d.w.abs() <= 1
    });
}

#[test]
fn legacy_queen_matches_the_historical_disjunction() {
    check_kind(PieceKind::Queen, Color::Black, RulesConfig::default(), |d| {
        let (dx, dy, dz, dw) = (d.x.abs(), d.y.abs(), d.z.abs(), d.w.abs());
        (dx == dy && dy == dz && dz == dw)
            || (dx == dy && dy == dz && dz != dw)
            || (dx == dy && dy != dz && dz == dw)
            || (dx == dy && dy != dz && dz != dw)
            || (dx != dy && dy == dz && dz == dw)
            || (dx != dy && dy == dz && dz != dw)
            || (dx != dy && dy != dz && dz == dw)
    });
}

#[test]
fn diagonal_queen_needs_equal_nonzero_deltas() {
    let rules = RulesConfig::default().with_queen(QueenGeometry::Diagonal);
    check_kind(PieceKind::Queen, Color::White, rules, |d| {
        let nonzero: Vec<i32> = d
            .components()
            .into_iter()
            .map(i32::abs)
            .filter(|&c| c != 0)
            .collect();
        nonzero.windows(2).all(|w| w[0] == w[1])
    });
}

#[test]
fn rook_moves_along_exactly_one_axis() {
    check_kind(PieceKind::Rook, Color::White, RulesConfig::default(), |d| {
        let zeros = d.components().iter().filter(|&&c| c == 0).count();
        zeros == 3
    });
}

#[test]
fn bishop_moves_on_full_diagonals_only() {
    check_kind(PieceKind::Bishop, Color::Black, RulesConfig::default(), |d| {
        let a = d.abs();
        a.x == a.y && a.y == a.z && a.z == a.w
    });
}

#[test]
fn knight_pairs_xy_and_zw_l_shapes() {
    check_kind(PieceKind::Knight, Color::White, RulesConfig::default(), |d| {
        let a = d.abs();
        matches!(
            (a.x, a.y, a.z, a.w),
            (1, 2, 1, 2) | (1, 2, 2, 1) | (2, 1, 1, 2) | (2, 1, 2, 1)
        )
    });
}

#[test]
fn pawns_step_forward_along_x_or_capture_along_w() {
    check_kind(PieceKind::Pawn, Color::White, RulesConfig::default(), |d| {
        d == Coord::new(1, 0, 0, 0) || d == Coord::new(1, 0, 0, 1)
    });
    check_kind(PieceKind::Pawn, Color::Black, RulesConfig::default(), |d| {
        d == Coord::new(-1, 0, 0, 0) || d == Coord::new(-1, 0, 0, -1)
    });
}

#[test]
fn null_move_is_admitted_by_king_queen_and_bishop_only() {
    let rules = RulesConfig::default();
    for kind in PieceKind::ALL {
        let expected = matches!(kind, PieceKind::King | PieceKind::Queen | PieceKind::Bishop);
        assert_eq!(
            accepts(Piece::new(Color::White, kind), Coord::ORIGIN, &rules),
            expected,
            "{kind}"
        );
    }
}

#[test]
fn predicates_ignore_board_bounds() {
    // Off-board endpoints are still judged purely by their delta.
    let rook = Piece::rook(Color::White);
    assert!(rook.is_valid_move(Coord::new(0, 0, 0, 0), Coord::new(0, 0, 0, -3)));
    let king = Piece::king(Color::Black);
    assert!(king.is_valid_move(Coord::new(7, 7, 7, 7), Coord::new(8, 8, 8, 8)));
}
