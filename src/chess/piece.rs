use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::config::RulesConfig;
use crate::chess::geometry;
use crate::core::color::Color;
use crate::core::coord::Coord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Pieces whose moves cross intermediate cells.
    #[inline]
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop)
    }

    #[inline]
    pub fn letter(self) -> char {
        use PieceKind::*;
        match self {
            King => 'K',
            Queen => 'Q',
            Rook => 'R',
            Bishop => 'B',
            Knight => 'N',
            Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PieceKind::*;
        let name = match self {
            King => "KING",
            Queen => "QUEEN",
            Rook => "ROOK",
            Bishop => "BISHOP",
            Knight => "KNIGHT",
            Pawn => "PAWN",
        };
        f.write_str(name)
    }
}

/// A colored piece. Its square is wherever the board stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub const fn king(color: Color) -> Self {
        Self::new(color, PieceKind::King)
    }

    pub const fn queen(color: Color) -> Self {
        Self::new(color, PieceKind::Queen)
    }

    pub const fn rook(color: Color) -> Self {
        Self::new(color, PieceKind::Rook)
    }

    pub const fn bishop(color: Color) -> Self {
        Self::new(color, PieceKind::Bishop)
    }

    pub const fn knight(color: Color) -> Self {
        Self::new(color, PieceKind::Knight)
    }

    pub const fn pawn(color: Color) -> Self {
        Self::new(color, PieceKind::Pawn)
    }

    /// Move geometry under the default rules.
    #[inline]
    pub fn is_valid_move(&self, from: Coord, to: Coord) -> bool {
        self.is_valid_move_with(from, to, &RulesConfig::default())
    }

    pub fn is_valid_move_with(&self, from: Coord, to: Coord, rules: &RulesConfig) -> bool {
        let d = from.delta_to(to);
        use PieceKind::*;
        match self.kind {
            King => geometry::king_step(d),
            Queen => geometry::queen_move(d, rules.queen),
            Rook => geometry::rook_line(d),
            Bishop => geometry::bishop_diagonal(d),
            Knight => geometry::knight_jump(d),
            Pawn => geometry::pawn_step(self.color, d),
        }
    }

    /// Board glyph: uppercase for White, lowercase for Black.
    #[inline]
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
