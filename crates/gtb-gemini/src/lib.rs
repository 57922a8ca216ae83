//! Gemini adapter (text generation).
//!
//! Uses the `generateContent` REST endpoint. One attempt per call; the user
//! prompt goes in verbatim and the candidate text comes back trimmed.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use gtb_core::{errors::Error, ports::ModelClient, Result};

#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client build");
        Self {
            api_key: api_key.into(),
            model: model.into(),
            http,
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        debug!(model = %self.model, "gemini generate request");

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_request_error)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Model(format!(
                "gemini request failed: {status} {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let v: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| Error::Model(format!("gemini json error: {e}")))?;

        extract_text(&v)
            .ok_or_else(|| Error::Model("gemini response missing candidate text".to_string()))
    }
}

fn map_request_error(e: reqwest::Error) -> Error {
    if e.is_connect() {
        return Error::Network(e.to_string());
    }
    Error::Model(format!("gemini request error: {e}"))
}

/// Concatenated text of the first candidate's parts, trimmed.
///
/// `None` only when the candidate/content/parts structure is absent; parts
/// whose text is whitespace still yield `Some("")`.
fn extract_text(v: &serde_json::Value) -> Option<String> {
    let parts = v
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect::<Vec<_>>()
        .join("");

    Some(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_candidate_text() {
        let v = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "  Здравствуй!  " }] }
            }]
        });
        assert_eq!(extract_text(&v).as_deref(), Some("Здравствуй!"));
    }

    #[test]
    fn joins_multiple_parts() {
        let v = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] }
            }]
        });
        assert_eq!(extract_text(&v).as_deref(), Some("Hello, world"));
    }

    #[test]
    fn whitespace_only_reply_is_empty_not_missing() {
        let v = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "   \n  " }] }
            }]
        });
        assert_eq!(extract_text(&v).as_deref(), Some(""));
    }

    #[test]
    fn missing_candidates_is_none() {
        let v = serde_json::json!({ "promptFeedback": {} });
        assert_eq!(extract_text(&v), None);
    }
}
