//! Threat, check and checkmate analysis over the whole board.
//!
//! Every query rescans the board; nothing is cached between calls.

pub mod attacks;
pub mod check;
pub mod checkmate;
