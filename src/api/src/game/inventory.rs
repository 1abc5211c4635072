use std::path::Path;

use tracing::info;

use crate::error::LoadError;
use crate::game::conversion::SerializablePieces;

/// One distinct letter of the tile distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileKind {
    pub letter: char,
    pub value: u32,
    pub remaining: u32,
}

/// The tile bag, kept as per-letter counts.
///
/// Letters are few (27 for the English set) so lookups scan the list instead
/// of hashing, and the list order is the order the document defined them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    kinds: Vec<TileKind>,
}

impl Inventory {
    pub fn new(kinds: Vec<TileKind>) -> Result<Self, LoadError> {
        for (i, kind) in kinds.iter().enumerate() {
            if kinds[..i].iter().any(|k| k.letter == kind.letter) {
                return Err(LoadError::DuplicateLetter(kind.letter));
            }
        }
        Ok(Self { kinds })
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let document: SerializablePieces = serde_json::from_str(json)?;
        Self::new(document.pieces.iter().map(TileKind::from).collect())
    }

    /// Reads and validates the tile document at `path`.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let inventory = Self::from_json(&json)?;
        info!(
            "Loaded {} letters ({} tiles) from {}",
            inventory.letter_count(),
            inventory.remaining(),
            path.display()
        );
        Ok(inventory)
    }

    pub fn kinds(&self) -> &[TileKind] {
        &self.kinds
    }

    pub fn letter_count(&self) -> usize {
        self.kinds.len()
    }

    pub fn get(&self, letter: char) -> Option<&TileKind> {
        self.kinds.iter().find(|kind| kind.letter == letter)
    }

    pub fn value_of(&self, letter: char) -> Option<u32> {
        self.get(letter).map(|kind| kind.value)
    }

    pub fn remaining(&self) -> u32 {
        self.kinds.iter().map(|kind| kind.remaining).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Removes one copy of `letter` from the bag, returning its point value.
    /// `None` when the letter is unknown or has run out.
    pub fn take(&mut self, letter: char) -> Option<u32> {
        let kind = self.kinds.iter_mut().find(|kind| kind.letter == letter)?;
        if kind.remaining == 0 {
            return None;
        }
        kind.remaining -= 1;
        Some(kind.value)
    }
}
