use core::fmt;
use std::str::FromStr;

use crate::error::{GameError, GameResult};
use crate::game::tile::{Tile, TileId};

/// Standard top row of a Scrabble board.
pub const DEFAULT_LAYOUT: &str =
    "triple-word,,,double-letter,,,,triple-word,,,,double-letter,,,triple-word";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bonus {
    DoubleLetter,
    TripleWord,
    /// Any other tag. Kept so it can be shown, but it never changes a score.
    Other(String),
}

impl Bonus {
    pub fn as_str(&self) -> &str {
        match self {
            Bonus::DoubleLetter => "double-letter",
            Bonus::TripleWord => "triple-word",
            Bonus::Other(tag) => tag,
        }
    }
}

impl FromStr for Bonus {
    type Err = std::convert::Infallible;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Ok(match tag {
            "double-letter" => Bonus::DoubleLetter,
            "triple-word" => Bonus::TripleWord,
            other => Bonus::Other(other.to_string()),
        })
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub bonus: Option<Bonus>,
    pub tile: Option<Tile>,
}

impl Slot {
    pub fn is_occupied(&self) -> bool {
        self.tile.is_some()
    }
}

/// A single row of slots that words are built on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    slots: Vec<Slot>,
}

impl Default for Board {
    fn default() -> Self {
        Self::from_tags(DEFAULT_LAYOUT)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            match &slot.tile {
                Some(tile) => write!(f, "[{}]", tile.letter)?,
                None => match slot.bonus {
                    Some(Bonus::DoubleLetter) => write!(f, "[2L]")?,
                    Some(Bonus::TripleWord) => write!(f, "[3W]")?,
                    _ => write!(f, "[ ]")?,
                },
            }
        }
        Ok(())
    }
}

impl Board {
    /// A board of `len` plain slots.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![
                Slot {
                    bonus: None,
                    tile: None,
                };
                len
            ],
        }
    }

    /// Parses a comma separated list of bonus tags, one entry per slot.
    /// Empty entries are plain slots: `"triple-word,,double-letter"` is three slots.
    pub fn from_layout(layout: &str) -> GameResult<Self> {
        if layout.trim().is_empty() {
            return Err(GameError::InvalidLayout(
                "layout must describe at least one slot".to_string(),
            ));
        }
        Ok(Self::from_tags(layout))
    }

    fn from_tags(layout: &str) -> Self {
        let slots = layout
            .split(',')
            .map(|tag| {
                let tag = tag.trim();
                Slot {
                    bonus: if tag.is_empty() {
                        None
                    } else {
                        tag.parse().ok()
                    },
                    tile: None,
                }
            })
            .collect();
        Self { slots }
    }

    #[cfg(test)]
    pub(crate) fn with_bonus(mut self, index: usize, bonus: Bonus) -> Self {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.bonus = Some(bonus);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// True when no slot holds a tile.
    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(Slot::is_occupied)
    }

    #[cfg(test)]
    pub(crate) fn placed(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    fn is_occupied(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(Slot::is_occupied)
    }

    pub fn check_index(&self, index: usize) -> GameResult<()> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(GameError::UnknownSlot {
                index,
                len: self.slots.len(),
            })
        }
    }

    /// Whether a tile may be dropped on `index` right now: the slot is free
    /// and either nothing is on the board or a neighbour is taken.
    pub fn accepts(&self, index: usize) -> bool {
        if index >= self.slots.len() || self.is_occupied(index) {
            return false;
        }
        if self.is_empty() {
            return true;
        }
        let has_left = index > 0 && self.is_occupied(index - 1);
        let has_right = self.is_occupied(index + 1);
        has_left || has_right
    }

    /// Puts `tile` into a free slot, handing it back if the slot is taken or missing.
    pub fn put(&mut self, index: usize, tile: Tile) -> Result<(), Tile> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.tile.is_none() => {
                slot.tile = Some(tile);
                Ok(())
            }
            _ => Err(tile),
        }
    }

    pub fn position_of(&self, id: TileId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.tile.as_ref().is_some_and(|tile| tile.id == id))
    }

    /// Lifts a tile off the board, leaving its slot empty.
    pub fn take(&mut self, id: TileId) -> Option<Tile> {
        let index = self.position_of(id)?;
        self.slots[index].tile.take()
    }

    /// Empties every slot, returning how many tiles were removed.
    pub fn clear(&mut self) -> usize {
        self.slots
            .iter_mut()
            .filter_map(|slot| slot.tile.take())
            .count()
    }

    /// Reads the word off the board: leading empty slots are skipped, and the
    /// first empty slot after a letter ends the word.
    pub fn current_word(&self) -> String {
        self.slots
            .iter()
            .skip_while(|slot| !slot.is_occupied())
            .map_while(|slot| slot.tile.as_ref().map(|tile| tile.letter))
            .collect()
    }
}
