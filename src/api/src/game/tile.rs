use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dealt copy of a letter. It sits either in the rack or in one board slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub letter: char,
    pub value: u32,
}

impl Tile {
    pub fn new(id: TileId, letter: char, value: u32) -> Self {
        Self { id, letter, value }
    }

    /// Path of the tile artwork, relative to the served asset root.
    pub fn image_path(&self) -> String {
        image_path_for(self.letter)
    }
}

pub fn image_path_for(letter: char) -> String {
    format!("graphics_data/Scrabble_Tiles/Scrabble_Tile_{}.jpg", letter)
}
