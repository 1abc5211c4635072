use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tracing::{error, info};

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::game::{
    DropTarget, Event, GameSession, Inventory, LoadTicket, Outcome, SerializablePieces, Slot, Tile,
    TileId,
};

// HTTP API types
#[derive(Serialize, Deserialize, Debug)]
pub struct ApiGame {
    pub word: String,
    pub round_score: u32,
    pub total_score: u32,
    pub highest_score: u32,
    pub remaining_tiles: u32,
    pub playable: bool,
    pub rack: Vec<ApiTile>,
    pub board: Vec<ApiSlot>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiTile {
    pub id: TileId,
    pub letter: char,
    pub value: u32,
    pub image: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApiSlot {
    pub index: usize,
    pub bonus: Option<String>,
    pub tile: Option<ApiTile>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DropRequest {
    pub tile_id: TileId,
    pub target: DropTarget,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DropResponse {
    pub accepted: bool,
    pub game: ApiGame,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RoundResponse {
    pub round_score: u32,
    pub dealt: usize,
    pub game: ApiGame,
}

impl From<&Tile> for ApiTile {
    fn from(tile: &Tile) -> Self {
        ApiTile {
            id: tile.id,
            letter: tile.letter,
            value: tile.value,
            image: format!("/{}", tile.image_path()),
        }
    }
}

impl ApiSlot {
    fn new(index: usize, slot: &Slot) -> Self {
        ApiSlot {
            index,
            bonus: slot.bonus.as_ref().map(|bonus| bonus.to_string()),
            tile: slot.tile.as_ref().map(ApiTile::from),
        }
    }
}

impl From<&GameSession> for ApiGame {
    fn from(session: &GameSession) -> Self {
        ApiGame {
            word: session.current_word(),
            round_score: session.round_score(),
            total_score: session.total_score(),
            highest_score: session.highest_score(),
            remaining_tiles: session.remaining_tiles(),
            playable: session.is_playable(),
            rack: session.rack().tiles().iter().map(ApiTile::from).collect(),
            board: session
                .board()
                .slots()
                .iter()
                .enumerate()
                .map(|(index, slot)| ApiSlot::new(index, slot))
                .collect(),
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = match &self {
            GameError::UnknownTile(_) | GameError::UnknownSlot { .. } => StatusCode::NOT_FOUND,
            GameError::InvalidLayout(_) => {
                error!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

#[derive(Clone)]
pub struct ApiState {
    pub session: Arc<Mutex<GameSession>>,
    pub config: Arc<GameConfig>,
}

impl ApiState {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        let session = config.new_session()?;
        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            config: Arc::new(config),
        })
    }

    /// Starts a fresh load generation and runs it to completion.
    pub async fn load_inventory(&self) -> GameResult<Outcome> {
        let ticket = self.session.lock().await.begin_load();
        self.complete_load(ticket).await
    }

    // The file is read without holding the session lock. If another reset
    // lands meanwhile, this ticket is stale by the time it comes back.
    async fn complete_load(&self, ticket: LoadTicket) -> GameResult<Outcome> {
        let result = Inventory::load(&self.config.pieces_path).await;
        self.session
            .lock()
            .await
            .handle(Event::InventoryLoaded { ticket, result })
    }
}

pub fn create_router(state: ApiState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/health", get(health))
        .route("/api/game", get(get_game))
        .route("/api/inventory", get(get_inventory))
        .route("/api/drop", post(drop_tile))
        .route("/api/next-word", post(next_word))
        .route("/api/new-game", post(new_game))
        .nest_service("/graphics_data", ServeDir::new(&config.assets_dir))
        .layer(RequestBodyLimitLayer::new(config.max_request_size))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(cors_layer(&config))
        .with_state(state)
}

fn cors_layer(config: &GameConfig) -> CorsLayer {
    let origin = if config.allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|origin| HeaderValue::from_str(origin).ok()),
        )
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

// Route handlers
async fn health() -> &'static str {
    "ok"
}

async fn get_game(State(state): State<ApiState>) -> Json<ApiGame> {
    let session = state.session.lock().await;
    Json(ApiGame::from(&*session))
}

async fn get_inventory(
    State(state): State<ApiState>,
) -> Result<Json<SerializablePieces>, StatusCode> {
    let session = state.session.lock().await;
    session
        .inventory()
        .map(|inventory| Json(SerializablePieces::from(inventory)))
        .ok_or(StatusCode::SERVICE_UNAVAILABLE)
}

async fn drop_tile(
    State(state): State<ApiState>,
    Json(request): Json<DropRequest>,
) -> Result<Json<DropResponse>, GameError> {
    let mut session = state.session.lock().await;
    let outcome = session.handle(Event::TileDropped {
        tile: request.tile_id,
        target: request.target,
    })?;

    Ok(Json(DropResponse {
        accepted: outcome == Outcome::Placed,
        game: ApiGame::from(&*session),
    }))
}

async fn next_word(State(state): State<ApiState>) -> Result<Json<RoundResponse>, GameError> {
    let mut session = state.session.lock().await;
    let (round_score, dealt) = match session.handle(Event::NextWordRequested)? {
        Outcome::RoundAdvanced(summary) => (summary.round_score, summary.dealt),
        _ => (0, 0),
    };

    Ok(Json(RoundResponse {
        round_score,
        dealt,
        game: ApiGame::from(&*session),
    }))
}

async fn new_game(State(state): State<ApiState>) -> Result<Json<ApiGame>, GameError> {
    let outcome = state.session.lock().await.handle(Event::ResetRequested)?;
    if let Outcome::ReloadRequested(ticket) = outcome {
        info!("New game requested, reloading tile inventory");
        state.complete_load(ticket).await?;
    }

    let session = state.session.lock().await;
    Ok(Json(ApiGame::from(&*session)))
}
