use crate::game::inventory::{Inventory, TileKind};
use serde::{Deserialize, Serialize};

/// On-disk shape of the tile distribution document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializablePieces {
    pub pieces: Vec<SerializablePiece>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializablePiece {
    pub letter: char,
    pub value: u32,
    pub amount: u32,
}

impl From<&SerializablePiece> for TileKind {
    fn from(piece: &SerializablePiece) -> Self {
        TileKind {
            letter: piece.letter,
            value: piece.value,
            remaining: piece.amount,
        }
    }
}

impl From<&Inventory> for SerializablePieces {
    fn from(inventory: &Inventory) -> Self {
        Self {
            pieces: inventory
                .kinds()
                .iter()
                .map(|kind| SerializablePiece {
                    letter: kind.letter,
                    value: kind.value,
                    amount: kind.remaining,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_parses_single_letter() {
        let piece: SerializablePiece =
            serde_json::from_str(r#"{"letter":"Q","value":10,"amount":1}"#).unwrap();
        let kind = TileKind::from(&piece);
        assert_eq!(kind.letter, 'Q');
        assert_eq!(kind.value, 10);
        assert_eq!(kind.remaining, 1);
    }

    #[test]
    fn test_piece_rejects_negative_amount() {
        let result: Result<SerializablePiece, _> =
            serde_json::from_str(r#"{"letter":"A","value":1,"amount":-2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_piece_rejects_multi_character_letter() {
        let result: Result<SerializablePiece, _> =
            serde_json::from_str(r#"{"letter":"AB","value":1,"amount":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_inventory_snapshot_reflects_remaining_counts() {
        let mut inventory = Inventory::from_json(
            r#"{"pieces":[{"letter":"A","value":1,"amount":2},{"letter":"B","value":3,"amount":1}]}"#,
        )
        .unwrap();
        inventory.take('A');

        let snapshot = SerializablePieces::from(&inventory);
        assert_eq!(snapshot.pieces.len(), 2);
        assert_eq!(snapshot.pieces[0].letter, 'A');
        assert_eq!(snapshot.pieces[0].amount, 1);
        assert_eq!(snapshot.pieces[1].amount, 1);
    }
}
