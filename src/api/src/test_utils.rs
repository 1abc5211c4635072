#[cfg(test)]
pub mod test_utils {
    use crate::config::GameConfig;
    use crate::game::{Board, Dealer, GameSession, Inventory, Tile, TileId};
    use crate::http_api::{create_router, ApiState};
    use axum::Router;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// A small 26 tile bag: A×9, B×2, C×2, E×12, Z×1.
    pub const TEST_PIECES_JSON: &str = r#"{
        "pieces": [
            { "letter": "A", "value": 1, "amount": 9 },
            { "letter": "B", "value": 3, "amount": 2 },
            { "letter": "C", "value": 3, "amount": 2 },
            { "letter": "E", "value": 1, "amount": 12 },
            { "letter": "Z", "value": 10, "amount": 1 }
        ]
    }"#;

    pub fn create_test_inventory() -> Inventory {
        Inventory::from_json(TEST_PIECES_JSON).unwrap()
    }

    /// Writes [`TEST_PIECES_JSON`] to a temporary file and returns it.
    pub fn create_test_pieces_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", TEST_PIECES_JSON).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn letter_value(letter: char) -> u32 {
        match letter {
            'B' | 'C' => 3,
            'D' | 'G' => 2,
            'Z' => 10,
            _ => 1,
        }
    }

    pub fn tile(id: u32, letter: char, value: u32) -> Tile {
        Tile::new(TileId(id), letter, value)
    }

    /// Builds a plain board from a pattern where `_` is an empty slot and any
    /// other character is a placed tile, e.g. `"A_BC_"`.
    pub fn create_test_board(pattern: &str) -> Board {
        let mut board = Board::new(pattern.chars().count());
        for (index, letter) in pattern.chars().enumerate() {
            if letter != '_' {
                board
                    .put(index, tile(index as u32, letter, letter_value(letter)))
                    .unwrap();
            }
        }
        board
    }

    /// A session with a fixed seed and no inventory loaded yet.
    pub fn create_test_session(board: Board) -> GameSession {
        GameSession::new(board, Dealer::default(), StdRng::seed_from_u64(42))
    }

    pub fn create_test_config(pieces_path: &std::path::Path) -> GameConfig {
        GameConfig {
            pieces_path: pieces_path.to_path_buf(),
            deal_seed: Some("test".to_string()),
            ..GameConfig::default()
        }
    }

    /// Router over a session that has already loaded the test bag.
    pub async fn setup_app() -> (ApiState, Router, NamedTempFile) {
        let pieces = create_test_pieces_file();
        let config = create_test_config(pieces.path());
        let state = ApiState::new(config).unwrap();
        state.load_inventory().await.unwrap();
        let app = create_router(state.clone());
        (state, app, pieces)
    }
}
