use crate::game::tile::{Tile, TileId};

pub const RACK_SIZE: usize = 7;

/// The player's holding area. Order is arrival order and carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rack {
    tiles: Vec<Tile>,
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// How many tiles it takes to get back to [`RACK_SIZE`].
    pub fn needed(&self) -> usize {
        RACK_SIZE.saturating_sub(self.tiles.len())
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|tile| tile.id == id)
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn extend<I: IntoIterator<Item = Tile>>(&mut self, tiles: I) {
        self.tiles.extend(tiles);
    }

    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let position = self.tiles.iter().position(|tile| tile.id == id)?;
        Some(self.tiles.remove(position))
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(id: u32, letter: char) -> Tile {
        Tile::new(TileId(id), letter, 1)
    }

    #[test]
    fn test_needed_counts_down_to_zero() {
        let mut rack = Rack::new();
        assert_eq!(rack.needed(), RACK_SIZE);

        rack.extend((0..5).map(|i| tile(i, 'A')));
        assert_eq!(rack.needed(), 2);

        rack.extend((5..9).map(|i| tile(i, 'B')));
        assert_eq!(rack.len(), 9);
        assert_eq!(rack.needed(), 0);
    }

    #[test]
    fn test_remove_takes_only_the_named_tile() {
        let mut rack = Rack::new();
        rack.push(tile(1, 'C'));
        rack.push(tile(2, 'A'));
        rack.push(tile(3, 'T'));

        let removed = rack.remove(TileId(2)).unwrap();
        assert_eq!(removed.letter, 'A');
        assert!(!rack.contains(TileId(2)));
        assert_eq!(rack.len(), 2);
        assert!(rack.remove(TileId(2)).is_none());
    }

    #[test]
    fn test_clear_empties_the_rack() {
        let mut rack = Rack::new();
        rack.push(tile(1, 'C'));
        rack.clear();
        assert!(rack.is_empty());
    }
}
