use std::fmt;

use crate::board::BOARD_SIZE;
use crate::core::coord::Coord;

/// Number of cells on the board.
pub const NUM_SQUARES: usize = (BOARD_SIZE * BOARD_SIZE * BOARD_SIZE * BOARD_SIZE) as usize;

/// An on-board cell packed into a dense index.
///
/// The index is `((x * 8 + y) * 8 + z) * 8 + w`, so iterating indices in order
/// visits `x` outermost and `w` innermost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u16);

impl Square {
    /// `None` if any component lies outside `0..BOARD_SIZE`.
    #[inline]
    pub fn from_coord(c: Coord) -> Option<Square> {
        if !c.in_range(BOARD_SIZE) {
            return None;
        }
        let idx = ((c.x * BOARD_SIZE + c.y) * BOARD_SIZE + c.z) * BOARD_SIZE + c.w;
        Some(Square(idx as u16))
    }

    #[inline]
    pub fn coord(self) -> Coord {
        let i = self.0 as i32;
        Coord::new(
            i / (BOARD_SIZE * BOARD_SIZE * BOARD_SIZE),
            i / (BOARD_SIZE * BOARD_SIZE) % BOARD_SIZE,
            i / BOARD_SIZE % BOARD_SIZE,
            i % BOARD_SIZE,
        )
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Every square in scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u16).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coord(), f)
    }
}
