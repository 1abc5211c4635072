use std::env;
use std::path::PathBuf;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_seeder::Seeder;
use tracing::warn;

use crate::error::GameResult;
use crate::game::{Board, Dealer, GameSession, DEFAULT_DEAL_ATTEMPTS, DEFAULT_LAYOUT};

#[derive(Clone, Debug)]
pub struct GameConfig {
    pub server_host: String,
    pub http_port: u16,
    pub pieces_path: PathBuf,
    pub assets_dir: PathBuf,
    pub board_layout: String,
    pub deal_attempts: usize,
    /// Fixes the deal order when set. Any string works; it is hashed into a seed.
    pub deal_seed: Option<String>,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub max_request_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            http_port: 3001,
            pieces_path: PathBuf::from("data/pieces.json"),
            assets_dir: PathBuf::from("graphics_data"),
            board_layout: DEFAULT_LAYOUT.to_string(),
            deal_attempts: DEFAULT_DEAL_ATTEMPTS,
            deal_seed: None,
            allowed_origins: vec!["*".to_string()],
            request_timeout: Duration::from_secs(30),
            max_request_size: 16 * 1024,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("SERVER_HOST") {
            config.server_host = host;
        }

        if let Some(port) = parse_var("HTTP_PORT") {
            config.http_port = port;
        }

        if let Ok(path) = env::var("PIECES_PATH") {
            config.pieces_path = PathBuf::from(path);
        }

        if let Ok(dir) = env::var("ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }

        if let Ok(layout) = env::var("BOARD_LAYOUT") {
            config.board_layout = layout;
        }

        if let Some(attempts) = parse_var("DEAL_ATTEMPTS") {
            config.deal_attempts = attempts;
        }

        if let Ok(seed) = env::var("DEAL_SEED") {
            config.deal_seed = Some(seed);
        }

        if let Ok(origins) = env::var("ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        if let Some(seconds) = parse_var("REQUEST_TIMEOUT") {
            config.request_timeout = Duration::from_secs(seconds);
        }

        if let Some(bytes) = parse_var("MAX_REQUEST_SIZE") {
            config.max_request_size = bytes;
        }

        config
    }

    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.http_port)
    }

    pub fn rng(&self) -> StdRng {
        match &self.deal_seed {
            Some(seed) => StdRng::from_seed(Seeder::from(seed.as_str()).make_seed()),
            None => StdRng::from_entropy(),
        }
    }

    /// A session over the configured board, with nothing loaded yet.
    pub fn new_session(&self) -> GameResult<GameSession> {
        let board = Board::from_layout(&self.board_layout)?;
        Ok(GameSession::new(
            board,
            Dealer::new(self.deal_attempts),
            self.rng(),
        ))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", name, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_config_builds_standard_board() {
        let config = GameConfig::default();
        let session = config.new_session().unwrap();
        assert_eq!(session.board().len(), 15);
        assert_eq!(config.http_addr(), "127.0.0.1:3001");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = GameConfig {
            deal_seed: Some("classroom".to_string()),
            ..GameConfig::default()
        };
        let mut a = config.rng();
        let mut b = config.rng();
        for _ in 0..8 {
            assert_eq!(a.gen::<u32>(), b.gen::<u32>());
        }
    }

    #[test]
    fn test_blank_layout_fails_session_creation() {
        let config = GameConfig {
            board_layout: String::new(),
            ..GameConfig::default()
        };
        assert!(config.new_session().is_err());
    }
}
