use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Which moves a queen may make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueenGeometry {
    /// Any move where an adjacent pair of absolute deltas (x/y, y/z or z/w)
    /// is equal. This is the historical rule and is far more permissive than
    /// a true 4D queen.
    #[default]
    Legacy,
    /// Every nonzero absolute delta is equal: any straight line in the lattice.
    Diagonal,
}

/// How checkmate looks for escapes once the king is in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeSearch {
    /// A move escapes if its destination is safe on the unmodified board.
    #[default]
    CurrentBoard,
    /// A move escapes if, after playing it on a scratch copy, the king is safe.
    ScratchBoard,
}

/// Rule variants a board is played under. `Default` reproduces the
/// historical behaviour exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RulesConfig {
    pub queen: QueenGeometry,
    /// Sliding pieces may not pass over occupied cells.
    pub path_blocking: bool,
    pub escape_search: EscapeSearch,
    /// King escape steps that leave the board are skipped. By default they
    /// are evaluated like any other cell, and an unattacked one refutes mate.
    pub bounded_king_escape: bool,
}

impl RulesConfig {
    pub fn with_queen(mut self, queen: QueenGeometry) -> Self {
        self.queen = queen;
        self
    }

    pub fn with_path_blocking(mut self, enabled: bool) -> Self {
        self.path_blocking = enabled;
        self
    }

    pub fn with_escape_search(mut self, search: EscapeSearch) -> Self {
        self.escape_search = search;
        self
    }

    pub fn with_bounded_king_escape(mut self, enabled: bool) -> Self {
        self.bounded_king_escape = enabled;
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse {
            error: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        let cfg = Self::from_json_str(&text)?;
        log::debug!("loaded rules from {}: {cfg:?}", path.display());
        Ok(cfg)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io { path: String, error: String },
    Parse { error: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, error } => write!(f, "cannot read rules file {path}: {error}"),
            ConfigError::Parse { error } => write!(f, "invalid rules json: {error}"),
        }
    }
}

impl std::error::Error for ConfigError {}
