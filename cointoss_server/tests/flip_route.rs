use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use cointoss_core::{CoinRng, FlipOutcome};
use cointoss_server::{random_seed, router, AppState};
use cointoss_shared::{ErrorBody, FlipResponse};

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn flip_returns_an_outcome() {
    let app = router(Arc::new(AppState::new("seed")), None);
    let (status, body) = get(app, "/flip").await;
    assert_eq!(status, StatusCode::OK);
    let parsed: FlipResponse = serde_json::from_slice(&body).expect("flip body");
    assert!(matches!(parsed.result, FlipOutcome::Heads | FlipOutcome::Tails));
}

#[tokio::test]
async fn flips_follow_the_seeded_coin() {
    let state = Arc::new(AppState::new("seed"));
    let app = router(Arc::clone(&state), None);
    let coin = CoinRng::new("seed");
    for nonce in 1..=8u64 {
        let (_, body) = get(app.clone(), "/flip").await;
        let parsed: FlipResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed.result, coin.outcome(nonce));
    }
}

#[tokio::test]
async fn both_outcomes_show_up() {
    let app = router(Arc::new(AppState::new(random_seed())), None);
    let mut seen = Vec::new();
    for _ in 0..64 {
        let (_, body) = get(app.clone(), "/flip").await;
        let parsed: FlipResponse = serde_json::from_slice(&body).unwrap();
        seen.push(parsed.result);
    }
    assert!(seen.contains(&FlipOutcome::Heads));
    assert!(seen.contains(&FlipOutcome::Tails));
}

#[tokio::test]
async fn unknown_path_is_json_404_without_static_dir() {
    let app = router(Arc::new(AppState::new("seed")), None);
    let (status, body) = get(app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let parsed: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed.error, "not found: /nope");
}

#[tokio::test]
async fn serves_page_from_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>coin</h1>").unwrap();
    let app = router(Arc::new(AppState::new("seed")), Some(dir.path()));

    let (status, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>coin</h1>");

    let (status, _) = get(app, "/flip").await;
    assert_eq!(status, StatusCode::OK);
}
