//! Usage: Error classification + standardized relay error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

const UPSTREAM_DETAIL_PREFIX: &str = "Error communicating with Ollama";

#[derive(Debug, Serialize)]
struct RelayErrorResponse {
    trace_id: String,
    error_code: &'static str,
    detail: String,
}

#[derive(Debug)]
pub(super) enum UpstreamError {
    Timeout,
    Send(reqwest::Error),
    Status(reqwest::StatusCode),
    Body(serde_json::Error),
}

impl UpstreamError {
    pub(super) fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout => "RELAY_UPSTREAM_TIMEOUT",
            Self::Send(err) if err.is_timeout() => "RELAY_UPSTREAM_TIMEOUT",
            Self::Send(err) if err.is_connect() => "RELAY_UPSTREAM_CONNECT_FAILED",
            Self::Send(_) => "RELAY_UPSTREAM_SEND_FAILED",
            Self::Status(_) => "RELAY_UPSTREAM_STATUS",
            Self::Body(_) => "RELAY_UPSTREAM_BODY",
        }
    }

    pub(super) fn detail(&self) -> String {
        let cause = match self {
            Self::Timeout => "request timed out".to_string(),
            Self::Send(err) => err.to_string(),
            Self::Status(status) => format!("upstream returned status {status}"),
            Self::Body(err) => format!("invalid response body: {err}"),
        };
        format!("{UPSTREAM_DETAIL_PREFIX}: {cause}")
    }
}

pub(super) fn error_response(
    status: StatusCode,
    trace_id: String,
    error_code: &'static str,
    detail: String,
) -> Response {
    let payload = RelayErrorResponse {
        trace_id: trace_id.clone(),
        error_code,
        detail,
    };

    let mut resp = (status, Json(payload)).into_response();

    if let Ok(v) = HeaderValue::from_str(&trace_id) {
        resp.headers_mut().insert("x-trace-id", v);
    }

    resp
}

// Every body rejection (missing field, wrong type, syntax error) maps to 422.
pub(super) fn validation_response(trace_id: String, rejection: JsonRejection) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        trace_id,
        "RELAY_INVALID_BODY",
        rejection.body_text(),
    )
}

pub(super) fn upstream_response(trace_id: String, err: &UpstreamError) -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        trace_id,
        err.error_code(),
        err.detail(),
    )
}

pub(super) fn audit_response(trace_id: String, detail: String) -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        trace_id,
        "RELAY_AUDIT_WRITE",
        detail,
    )
}
