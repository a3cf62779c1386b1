use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::Uri;
use axum::{routing::get, Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::debug;

use cointoss_core::CoinRng;
use cointoss_shared::{ApiError, FlipResponse};

pub mod config;

pub struct AppState {
    coin: CoinRng,
    nonce: AtomicU64,
}

impl AppState {
    pub fn new(server_seed: impl Into<String>) -> Self {
        Self {
            coin: CoinRng::new(server_seed),
            nonce: AtomicU64::new(0),
        }
    }

    pub fn server_seed_hash(&self) -> String {
        self.coin.server_seed_hash_hex()
    }
}

/// Fresh 32-byte hex seed.
pub fn random_seed() -> String {
    let bytes: [u8; 32] = rand::random();
    hex::encode(bytes)
}

async fn route_flip(State(state): State<Arc<AppState>>) -> Json<FlipResponse> {
    let nonce = state.nonce.fetch_add(1, Ordering::Relaxed) + 1;
    let result = state.coin.outcome(nonce);
    debug!(nonce, %result, "flip");
    Json(FlipResponse { result })
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

pub fn router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let app = Router::new().route("/flip", get(route_flip));
    let app = match static_dir {
        Some(dir) => app.fallback_service(ServeDir::new(dir)),
        None => app.fallback(route_not_found),
    };
    app.with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
