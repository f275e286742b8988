use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use super::handler;
use super::server::RelayState;
use super::util::now_unix_seconds;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app: &'static str,
    version: &'static str,
    ts: u64,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        app: "prompt-relay",
        version: env!("CARGO_PKG_VERSION"),
        ts: now_unix_seconds(),
    })
}

async fn root() -> &'static str {
    "prompt-relay is running"
}

pub(super) fn build_router(state: RelayState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/generate", post(handler::generate))
        .with_state(state)
}
