use std::path::PathBuf;

use thiserror::Error;

use crate::game::TileId;

/// Failure to obtain a usable tile inventory. The session stays unplayable
/// until a later load succeeds.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read tile inventory from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed tile inventory: {0}")]
    Format(#[from] serde_json::Error),

    #[error("letter '{0}' appears more than once in the tile inventory")]
    DuplicateLetter(char),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no tile with id {0}")]
    UnknownTile(TileId),

    #[error("slot {index} is outside the board (length {len})")]
    UnknownSlot { index: usize, len: usize },

    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

pub type GameResult<T> = Result<T, GameError>;
