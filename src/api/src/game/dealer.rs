use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::game::inventory::Inventory;
use crate::game::tile::{Tile, TileId};

/// Upper bound on draws per deal so an empty or nearly empty bag cannot spin forever.
pub const DEFAULT_DEAL_ATTEMPTS: usize = 1000;

/// Draws tiles out of an [`Inventory`].
///
/// Each attempt picks one of the *defined* letters uniformly, ignoring how
/// many copies are left, and keeps it only if a copy remains. Letters that
/// have run out still get picked and simply burn the attempt.
#[derive(Debug, Clone)]
pub struct Dealer {
    max_attempts: usize,
    next_id: u32,
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new(DEFAULT_DEAL_ATTEMPTS)
    }
}

impl Dealer {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            max_attempts,
            next_id: 0,
        }
    }

    /// Deals up to `n` tiles. Fewer come back when the bag or the attempt
    /// budget runs out first.
    pub fn deal<R: Rng + ?Sized>(
        &mut self,
        inventory: &mut Inventory,
        n: usize,
        rng: &mut R,
    ) -> Vec<Tile> {
        let mut dealt = Vec::with_capacity(n);
        let mut attempts = 0;

        while dealt.len() < n && attempts < self.max_attempts {
            attempts += 1;

            let letter = match inventory.kinds().choose(rng) {
                Some(kind) => kind.letter,
                None => break,
            };

            if let Some(value) = inventory.take(letter) {
                dealt.push(Tile::new(self.allocate_id(), letter, value));
            }
        }

        if dealt.len() < n {
            warn!(
                "Dealt {} of {} requested tiles after {} attempts ({} left in the bag)",
                dealt.len(),
                n,
                attempts,
                inventory.remaining()
            );
        } else {
            debug!("Dealt {} tiles in {} attempts", dealt.len(), attempts);
        }

        dealt
    }

    fn allocate_id(&mut self) -> TileId {
        let id = TileId(self.next_id);
        self.next_id += 1;
        id
    }
}
