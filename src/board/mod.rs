//! The 8×8×8×8 board: dense cell storage, placement and move execution.
//!
//! Pieces are owned by value in their cells. Moving transfers the value
//! between cells; capturing drops it.

pub mod error;
pub mod render;
pub mod square;

use rustc_hash::FxHashMap;

use crate::chess::config::RulesConfig;
use crate::chess::piece::{Piece, PieceKind};
use crate::core::color::Color;
use crate::core::coord::Coord;
use crate::rules::{attacks, check, checkmate};

pub use error::BoardError;
pub use render::Slice;
pub use square::{Square, NUM_SQUARES};

/// Cells per axis.
pub const BOARD_SIZE: i32 = 8;

const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The piece's geometry does not allow the move.
    Geometry,
    /// A sliding piece would pass over an occupied cell (path blocking only).
    Blocked,
    /// The destination holds a piece of the mover's color.
    OwnPiece,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Captured(Piece),
    Rejected(RejectReason),
}

impl MoveOutcome {
    #[inline]
    pub fn is_applied(self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Box<[Option<Piece>]>,
    config: RulesConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board under the default rules.
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            cells: vec![None; NUM_SQUARES].into_boxed_slice(),
            config,
        }
    }

    /// The standard starting position under the default rules.
    pub fn standard() -> Self {
        let mut board = Self::new();
        board.initialize();
        board
    }

    #[inline]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RulesConfig) {
        self.config = config;
    }

    /// Reset to the starting arrangement, embedded in the `z = 0, w = 0` plane.
    pub fn initialize(&mut self) {
        self.clear();
        for x in 0..BOARD_SIZE {
            let kind = BACK_RANK[x as usize];
            self.put(Coord::new(x, 0, 0, 0), Piece::new(Color::White, kind));
            self.put(Coord::new(x, 1, 0, 0), Piece::pawn(Color::White));
            self.put(Coord::new(x, 6, 0, 0), Piece::pawn(Color::Black));
            self.put(Coord::new(x, 7, 0, 0), Piece::new(Color::Black, kind));
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    #[inline]
    fn square(c: Coord) -> Result<Square, BoardError> {
        Square::from_coord(c).ok_or(BoardError::OutOfBounds { coord: c })
    }

    fn put(&mut self, c: Coord, piece: Piece) {
        if let Some(sq) = Square::from_coord(c) {
            self.cells[sq.index()] = Some(piece);
        }
    }

    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// The piece at `c`, or `None` for empty and off-board cells.
    #[inline]
    pub fn piece_at(&self, c: Coord) -> Option<Piece> {
        Square::from_coord(c).and_then(|sq| self.piece_on(sq))
    }

    #[inline]
    pub fn is_occupied(&self, c: Coord) -> bool {
        self.piece_at(c).is_some()
    }

    /// Put `piece` on an empty on-board cell. Rejections leave the board untouched.
    pub fn place_piece(&mut self, c: Coord, piece: Piece) -> Result<(), BoardError> {
        let sq = Self::square(c).map_err(|e| {
            log::warn!("invalid coordinates for placing {piece}: {e}");
            e
        })?;
        if self.cells[sq.index()].is_some() {
            let e = BoardError::Occupied { square: sq };
            log::warn!("cannot place {piece}: {e}");
            return Err(e);
        }
        self.cells[sq.index()] = Some(piece);
        Ok(())
    }

    pub fn remove_piece(&mut self, c: Coord) -> Option<Piece> {
        let sq = Square::from_coord(c)?;
        self.cells[sq.index()].take()
    }

    /// Occupied cells in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_on(sq).map(|p| (sq, p)))
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn material(&self) -> FxHashMap<(Color, PieceKind), usize> {
        let mut counts = FxHashMap::default();
        for (_, p) in self.pieces() {
            *counts.entry((p.color, p.kind)).or_insert(0) += 1;
        }
        counts
    }

    /// Why `piece` standing on `from` may not move to `to`, if anything.
    ///
    /// Geometry is checked first, then path blocking, then the destination.
    pub(crate) fn move_rejection(
        &self,
        piece: Piece,
        from: Coord,
        to: Coord,
    ) -> Option<RejectReason> {
        if !piece.is_valid_move_with(from, to, &self.config) {
            return Some(RejectReason::Geometry);
        }
        if self.config.path_blocking
            && piece.kind.is_slider()
            && !attacks::path_clear(self, from, to)
        {
            return Some(RejectReason::Blocked);
        }
        match self.piece_at(to) {
            Some(target) if target.color == piece.color => Some(RejectReason::OwnPiece),
            _ => None,
        }
    }

    /// Transfer the piece on `from` to `to`, returning whatever stood on `to`.
    /// No legality checks.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mover = self.cells[from.index()].take();
        std::mem::replace(&mut self.cells[to.index()], mover)
    }

    /// Reverse of [`Board::relocate`].
    pub(crate) fn unrelocate(&mut self, from: Square, to: Square, captured: Option<Piece>) {
        let mover = std::mem::replace(&mut self.cells[to.index()], captured);
        self.cells[from.index()] = mover;
    }

    /// Attempt a move and report exactly what happened.
    ///
    /// No turn order and no check filtering: a move that leaves the mover's
    /// own king attacked is still played.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, BoardError> {
        let from_sq = Self::square(from)?;
        let to_sq = Self::square(to)?;
        let piece = self
            .piece_on(from_sq)
            .ok_or(BoardError::EmptySource { square: from_sq })?;

        if let Some(reason) = self.move_rejection(piece, from, to) {
            if reason == RejectReason::OwnPiece {
                log::warn!("cannot capture your own piece at {to_sq}");
            }
            return Ok(MoveOutcome::Rejected(reason));
        }

        match self.relocate(from_sq, to_sq) {
            Some(captured) => {
                log::debug!("{piece} {from_sq} -> {to_sq} captures {captured}");
                Ok(MoveOutcome::Captured(captured))
            }
            None => {
                log::trace!("{piece} {from_sq} -> {to_sq}");
                Ok(MoveOutcome::Moved)
            }
        }
    }

    /// `Ok(true)` if the piece moved (capturing or not), `Ok(false)` if the
    /// move was rejected.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> Result<bool, BoardError> {
        Ok(self.apply_move(from, to)?.is_applied())
    }

    /// Can any piece of the other color reach `c`?
    pub fn is_square_danger(&self, c: Coord, defender: Color) -> bool {
        attacks::is_square_danger(self, c, defender)
    }

    pub fn find_king(&self, color: Color) -> Result<Square, BoardError> {
        check::find_king(self, color)
    }

    pub fn is_check(&self, color: Color) -> Result<bool, BoardError> {
        check::is_check(self, color)
    }

    pub fn is_checkmate(&self, color: Color) -> Result<bool, BoardError> {
        checkmate::is_checkmate(self, color)
    }
}
