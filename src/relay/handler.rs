//! Usage: The forward-and-log pipeline behind POST /generate.

use super::audit::AuditEntry;
use super::errors;
use super::server::RelayState;
use super::upstream;
use super::util::new_trace_id;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Deserialize)]
pub(super) struct PromptRequest {
    pub(super) prompt: String,
}

#[derive(Debug, Serialize)]
pub(super) struct GenerateResponse {
    pub(super) response: String,
}

pub(super) async fn generate(
    State(state): State<RelayState>,
    payload: Result<Json<PromptRequest>, JsonRejection>,
) -> Response {
    let trace_id = new_trace_id();
    let started = Instant::now();

    let Json(PromptRequest { prompt }) = match payload {
        Ok(v) => v,
        Err(rejection) => {
            tracing::debug!(%trace_id, "rejected generate body: {}", rejection.body_text());
            return errors::validation_response(trace_id, rejection);
        }
    };

    let generated = match upstream::generate(&state.client, &state.config, &prompt).await {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(
                %trace_id,
                error_code = err.error_code(),
                duration_ms = started.elapsed().as_millis() as u64,
                "upstream call failed: {}",
                err.detail()
            );
            return errors::upstream_response(trace_id, &err);
        }
    };

    // The audit entry is written iff the upstream call succeeded, and the
    // append completes before the response is produced.
    if let Err(err) = state
        .audit
        .append(AuditEntry {
            prompt,
            response: generated.clone(),
        })
        .await
    {
        tracing::error!(%trace_id, "audit append failed: {err}");
        return errors::audit_response(trace_id, err);
    }

    tracing::info!(
        %trace_id,
        duration_ms = started.elapsed().as_millis() as u64,
        response_len = generated.len(),
        "generate completed"
    );
    Json(GenerateResponse {
        response: generated,
    })
    .into_response()
}
