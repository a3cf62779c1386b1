use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cointoss_server::{config::Settings, random_seed, router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env();
    let seed = settings.server_seed.clone().unwrap_or_else(random_seed);
    let state = Arc::new(AppState::new(seed));
    info!(server_seed_hash = %state.server_seed_hash(), "coin ready");

    match &settings.static_dir {
        Some(dir) => info!("serving static files from {}", dir.display()),
        None => info!("no STATIC_DIR set, serving /flip only"),
    }
    let app = router(state, settings.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(&settings.bind).await?;
    info!("listening on {}", settings.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
