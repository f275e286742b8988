//! Usage: Relay server lifecycle (shared state, listener bind, graceful shutdown).

use super::audit::AuditLog;
use super::routes::build_router;
use crate::config::Config;
use std::sync::Arc;

#[derive(Clone)]
pub(super) struct RelayState {
    pub(super) client: reqwest::Client,
    pub(super) config: Arc<Config>,
    pub(super) audit: Arc<AuditLog>,
}

impl RelayState {
    pub(super) fn new(config: Config) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent(format!("prompt-relay/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| format!("RELAY_HTTP_CLIENT_INIT: {e}"))?;

        let audit = Arc::new(AuditLog::new(&config.log_dir));

        Ok(Self {
            client,
            config: Arc::new(config),
            audit,
        })
    }
}

pub async fn serve(config: Config) -> Result<(), String> {
    let listen_addr = config.listen_addr;
    let state = RelayState::new(config)?;

    let listener = tokio::net::TcpListener::bind(listen_addr)
        .await
        .map_err(|e| format!("RELAY_BIND: failed to bind {listen_addr}: {e}"))?;
    let local_addr = listener
        .local_addr()
        .map_err(|e| format!("RELAY_BIND: {e}"))?;
    tracing::info!(addr = %local_addr, "relay listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("RELAY_SERVE: {e}"))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("ctrl-c handler failed: {err}");
    }
}
