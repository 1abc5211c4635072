use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use scrabble_rack::config::GameConfig;
use scrabble_rack::game::Outcome;
use scrabble_rack::http_api;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting scrabble rack server");

    let config = GameConfig::from_env();
    let http_addr = config.http_addr();

    info!("Creating game session");
    let api_state = http_api::ApiState::new(config)?;

    // A failed load is not fatal; the game stays unplayable until "New Game" succeeds.
    info!("Loading tile inventory from {}", api_state.config.pieces_path.display());
    if api_state.load_inventory().await? == Outcome::LoadFailed {
        warn!("Serving without a tile inventory");
    }

    let http_router = http_api::create_router(api_state);

    info!("Starting HTTP API server on {}", http_addr);
    axum::serve(tokio::net::TcpListener::bind(&http_addr).await?, http_router)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
