use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{GameError, GameResult, LoadError};
use crate::game::board::Board;
use crate::game::dealer::Dealer;
use crate::game::inventory::Inventory;
use crate::game::rack::Rack;
use crate::game::scoring;
use crate::game::tile::{Tile, TileId};

/// Where a dragged tile was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropTarget {
    Rack,
    Slot(usize),
}

/// Identifies one requested inventory load. Only the most recent ticket is
/// honoured, so a slow load finishing after a newer reset is thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

#[derive(Debug)]
pub enum Event {
    InventoryLoaded {
        ticket: LoadTicket,
        result: Result<Inventory, LoadError>,
    },
    TileDropped {
        tile: TileId,
        target: DropTarget,
    },
    NextWordRequested,
    ResetRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub round_score: u32,
    pub cleared: usize,
    pub dealt: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Loaded { dealt: usize },
    LoadFailed,
    StaleLoad,
    Placed,
    Reverted,
    RoundAdvanced(RoundSummary),
    ReloadRequested(LoadTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Rack,
    Slot(usize),
}

/// All mutable game state: bag, rack, board and the three score counters.
///
/// The session does no I/O. Loading the inventory is split in two: a reset
/// (or [`GameSession::begin_load`]) hands out a [`LoadTicket`], the caller
/// reads the tile document however it likes, and the result comes back in as
/// [`Event::InventoryLoaded`].
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    rack: Rack,
    inventory: Option<Inventory>,
    dealer: Dealer,
    rng: StdRng,
    round_score: u32,
    total_score: u32,
    highest_score: u32,
    generation: u64,
    pending_load: Option<LoadTicket>,
}

impl GameSession {
    pub fn new(board: Board, dealer: Dealer, rng: StdRng) -> Self {
        Self {
            board,
            rack: Rack::new(),
            inventory: None,
            dealer,
            rng,
            round_score: 0,
            total_score: 0,
            highest_score: 0,
            generation: 0,
            pending_load: None,
        }
    }

    pub fn handle(&mut self, event: Event) -> GameResult<Outcome> {
        match event {
            Event::InventoryLoaded { ticket, result } => Ok(self.finish_load(ticket, result)),
            Event::TileDropped { tile, target } => self.drop_tile(tile, target),
            Event::NextWordRequested => Ok(Outcome::RoundAdvanced(self.advance_round())),
            Event::ResetRequested => Ok(Outcome::ReloadRequested(self.reset())),
        }
    }

    /// Starts a new load generation. Any ticket handed out earlier goes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        let ticket = LoadTicket(self.generation);
        self.pending_load = Some(ticket);
        debug!("Inventory load {} requested", self.generation);
        ticket
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Inventory, LoadError>,
    ) -> Outcome {
        if self.pending_load != Some(ticket) {
            warn!(
                "Discarding inventory load {} (current load is {})",
                ticket.0, self.generation
            );
            return Outcome::StaleLoad;
        }
        self.pending_load = None;

        match result {
            Ok(inventory) => {
                self.inventory = Some(inventory);
                let dealt = self.replenish();
                info!(
                    "Inventory ready, dealt {} tiles, {} left in the bag",
                    dealt,
                    self.remaining_tiles()
                );
                Outcome::Loaded { dealt }
            }
            Err(e) => {
                error!("Failed to load tile inventory: {}", e);
                self.inventory = None;
                Outcome::LoadFailed
            }
        }
    }

    /// Moves a tile to `target` if the placement rules allow it. A refused
    /// drop leaves everything where it was and reports [`Outcome::Reverted`].
    pub fn drop_tile(&mut self, id: TileId, target: DropTarget) -> GameResult<Outcome> {
        let origin = self.locate(id).ok_or(GameError::UnknownTile(id))?;

        let index = match target {
            DropTarget::Rack => {
                let tile = self.lift(id, origin)?;
                self.rack.push(tile);
                debug!("Tile {} returned to the rack", id);
                return Ok(Outcome::Placed);
            }
            DropTarget::Slot(index) => index,
        };

        self.board.check_index(index)?;
        // Checked while the tile still sits at its origin, the same board a
        // player sees mid-drag.
        if !self.board.accepts(index) {
            debug!("Tile {} refused by slot {}: {}", id, index, self.board);
            return Ok(Outcome::Reverted);
        }

        let tile = self.lift(id, origin)?;
        if let Err(tile) = self.board.put(index, tile) {
            self.restore(origin, tile);
            return Ok(Outcome::Reverted);
        }
        debug!("Tile {} placed on slot {}: {}", id, index, self.board);
        Ok(Outcome::Placed)
    }

    /// Banks the board's score, clears the board and tops the rack back up.
    pub fn advance_round(&mut self) -> RoundSummary {
        let round_score = scoring::score(&self.board);
        let word = self.board.current_word();
        self.round_score = round_score;
        self.total_score = self.total_score.saturating_add(round_score);
        let cleared = self.board.clear();
        let dealt = self.replenish();

        info!(
            "Round scored {} for \"{}\", total {}, dealt {}",
            round_score, word, self.total_score, dealt
        );

        RoundSummary {
            round_score,
            cleared,
            dealt,
        }
    }

    /// Ends the game: records the high score, empties board and rack, zeroes
    /// the total and asks for a fresh inventory.
    pub fn reset(&mut self) -> LoadTicket {
        if self.total_score > self.highest_score {
            info!("New highest score {}", self.total_score);
            self.highest_score = self.total_score;
        }
        self.board.clear();
        self.rack.clear();
        self.total_score = 0;
        self.round_score = 0;
        self.inventory = None;
        self.begin_load()
    }

    /// Deals enough tiles to bring the rack back to seven. Returns how many were dealt.
    pub fn replenish(&mut self) -> usize {
        let needed = self.rack.needed();
        if needed == 0 {
            return 0;
        }
        let Some(inventory) = self.inventory.as_mut() else {
            debug!("No inventory loaded, rack left at {} tiles", self.rack.len());
            return 0;
        };
        if inventory.is_exhausted() {
            debug!("Bag is empty, rack left at {} tiles", self.rack.len());
            return 0;
        }
        let tiles = self.dealer.deal(inventory, needed, &mut self.rng);
        let dealt = tiles.len();
        self.rack.extend(tiles);
        dealt
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rack(&self) -> &Rack {
        &self.rack
    }

    pub fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_ref()
    }

    pub fn is_playable(&self) -> bool {
        self.inventory.is_some()
    }

    pub fn current_word(&self) -> String {
        self.board.current_word()
    }

    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn highest_score(&self) -> u32 {
        self.highest_score
    }

    pub fn remaining_tiles(&self) -> u32 {
        self.inventory.as_ref().map_or(0, Inventory::remaining)
    }

    fn locate(&self, id: TileId) -> Option<Location> {
        if self.rack.contains(id) {
            Some(Location::Rack)
        } else {
            self.board.position_of(id).map(Location::Slot)
        }
    }

    fn lift(&mut self, id: TileId, origin: Location) -> GameResult<Tile> {
        let tile = match origin {
            Location::Rack => self.rack.remove(id),
            Location::Slot(_) => self.board.take(id),
        };
        tile.ok_or(GameError::UnknownTile(id))
    }

    fn restore(&mut self, origin: Location, tile: Tile) {
        match origin {
            Location::Slot(index) => {
                if let Err(tile) = self.board.put(index, tile) {
                    self.rack.push(tile);
                }
            }
            Location::Rack => self.rack.push(tile),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_scores(&mut self, total: u32, highest: u32) {
        self.total_score = total;
        self.highest_score = highest;
    }
}
