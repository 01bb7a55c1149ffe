//! Pieces and their board-independent movement rules.

pub mod config;
pub mod geometry;
pub mod piece;
