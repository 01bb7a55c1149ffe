use std::fmt;

use crate::board::{Board, BOARD_SIZE};
use crate::core::coord::Coord;

/// Text picture of the `(x, y)` plane at fixed `(z, w)`.
///
/// `y` runs top (7) to bottom (0), `x` left to right. White pieces are
/// uppercase, Black lowercase, empty cells `-`.
#[derive(Debug, Clone, Copy)]
pub struct Slice<'a> {
    board: &'a Board,
    z: i32,
    w: i32,
}

impl fmt::Display for Slice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "slice z={} w={}", self.z, self.w)?;
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{y} ")?;
            for x in 0..BOARD_SIZE {
                let ch = self
                    .board
                    .piece_at(Coord::new(x, y, self.z, self.w))
                    .map_or('-', |p| p.symbol());
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for x in 0..BOARD_SIZE {
            write!(f, "{x}")?;
        }
        writeln!(f)
    }
}

impl Board {
    pub fn slice(&self, z: i32, w: i32) -> Slice<'_> {
        Slice { board: self, z, w }
    }

    pub fn render_slice(&self, z: i32, w: i32) -> String {
        self.slice(z, w).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::piece::Piece;
    use crate::core::color::Color;

    #[test]
    fn standard_home_slice_shows_both_armies() {
        let text = Board::standard().render_slice(0, 0);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "slice z=0 w=0");
        assert_eq!(lines[1], "7 rnbqkbnr");
        assert_eq!(lines[2], "6 pppppppp");
        assert_eq!(lines[7], "1 PPPPPPPP");
        assert_eq!(lines[8], "0 RNBQKBNR");
        assert_eq!(lines[9], "  01234567");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn other_slices_start_empty() {
        let text = Board::standard().render_slice(3, 1);
        assert!(text.lines().skip(1).take(8).all(|l| l.ends_with("--------")));
    }

    #[test]
    fn slice_view_formats_in_place() {
        let mut board = Board::new();
        board
            .place_piece(Coord::new(6, 2, 4, 5), Piece::knight(Color::Black))
            .unwrap();
        let shown = format!("{}", board.slice(4, 5));
        assert_eq!(shown, board.render_slice(4, 5));
        assert_eq!(shown.lines().nth(6), Some("2 ------n-"));
    }
}
