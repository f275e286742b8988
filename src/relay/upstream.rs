//! Usage: Outbound Ollama generate call (send-timeout aware).

use super::errors::UpstreamError;
use crate::config::Config;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

pub(super) async fn generate(
    client: &reqwest::Client,
    config: &Config,
    prompt: &str,
) -> Result<String, UpstreamError> {
    let body = OllamaGenerateRequest {
        model: &config.model,
        prompt,
        stream: false,
    };
    let send = client.post(config.generate_url()).json(&body).send();

    let resp = if let Some(timeout) = config.upstream_timeout() {
        match tokio::time::timeout(timeout, send).await {
            Ok(result) => result.map_err(UpstreamError::Send)?,
            Err(_) => return Err(UpstreamError::Timeout),
        }
    } else {
        send.await.map_err(UpstreamError::Send)?
    };

    let status = resp.status();
    if !status.is_success() {
        return Err(UpstreamError::Status(status));
    }

    let bytes = resp.bytes().await.map_err(UpstreamError::Send)?;
    let root: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(UpstreamError::Body)?;
    Ok(extract_response_text(&root))
}

/// A missing or non-string `response` field collapses to an empty string;
/// callers rely on this default rather than an error.
fn extract_response_text(root: &serde_json::Value) -> String {
    root.get("response")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_field_is_extracted() {
        let root = json!({"model": "llama2", "response": "Hi there!", "done": true});
        assert_eq!(extract_response_text(&root), "Hi there!");
    }

    #[test]
    fn missing_response_field_defaults_to_empty() {
        let root = json!({"model": "llama2", "done": true});
        assert_eq!(extract_response_text(&root), "");
    }

    #[test]
    fn non_string_response_field_defaults_to_empty() {
        let root = json!({"response": 42});
        assert_eq!(extract_response_text(&root), "");
    }

    #[test]
    fn generate_request_serializes_with_stream_disabled() {
        let body = OllamaGenerateRequest {
            model: "llama2",
            prompt: "Hello",
            stream: false,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"model": "llama2", "prompt": "Hello", "stream": false})
        );
    }
}
