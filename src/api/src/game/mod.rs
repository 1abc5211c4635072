pub mod board;
pub mod conversion;
pub mod dealer;
pub mod inventory;
pub mod rack;
pub mod scoring;
pub mod session;
pub mod tile;

pub use board::{Board, Bonus, Slot, DEFAULT_LAYOUT};
pub use conversion::*;
pub use dealer::{Dealer, DEFAULT_DEAL_ATTEMPTS};
pub use inventory::{Inventory, TileKind};
pub use rack::{Rack, RACK_SIZE};
pub use session::{DropTarget, Event, GameSession, LoadTicket, Outcome, RoundSummary};
pub use tile::{Tile, TileId};
