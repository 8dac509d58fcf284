use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::Request;
use log::info;
use serde::Deserialize;

use crate::api::http::with_timeout;
use crate::config;
use crate::error::SiteError;
use crate::growth::{GenerationRequest, StrategyGenerator};

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct GeminiGenerator {
    model: String,
    timeout_ms: u32,
}

impl GeminiGenerator {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            model: config::GEMINI_MODEL.to_string(),
            timeout_ms,
        }
    }

    async fn call(&self, request: &GenerationRequest) -> Result<String, SiteError> {
        info!("Calling {} for niche {:?}", self.model, request.niche);
        let response = Request::post(&config::gemini_endpoint(&self.model))
            .header("x-goog-api-key", &request.api_key)
            .json(&request.to_provider_body())?
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !response.ok() {
            return Err(provider_error(status, &body));
        }
        extract_text(&body)
    }
}

impl StrategyGenerator for GeminiGenerator {
    fn generate<'a>(&'a self, request: &'a GenerationRequest) -> LocalBoxFuture<'a, Result<String, SiteError>> {
        with_timeout(self.timeout_ms, self.call(request)).boxed_local()
    }
}

/// Concatenated text parts of the first candidate. Missing text yields an empty string.
pub fn extract_text(body: &str) -> Result<String, SiteError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)?;
    let text = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();
    Ok(text)
}

pub fn provider_error(status: u16, body: &str) -> SiteError {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => SiteError::Provider(envelope.error.message),
        Err(_) => SiteError::Provider(format!("The AI engine responded with status {}", status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_text_parts_of_first_candidate() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"[{\"a\":"},{"text":"1}]"}],"role":"model"}},
                       {"content":{"parts":[{"text":"ignored"}]}}]}"#;
        assert_eq!(extract_text(body), Ok("[{\"a\":1}]".to_string()));
    }

    #[test]
    fn no_candidates_is_empty_text() {
        assert_eq!(extract_text(r#"{"candidates":[]}"#), Ok(String::new()));
        assert_eq!(extract_text(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#), Ok(String::new()));
    }

    #[test]
    fn garbage_body_is_malformed() {
        assert!(matches!(extract_text("<html>"), Err(SiteError::MalformedResponse(_))));
    }

    #[test]
    fn provider_error_prefers_reported_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        assert_eq!(provider_error(400, body), SiteError::Provider("API key not valid.".into()));
        assert_eq!(
            provider_error(503, ""),
            SiteError::Provider("The AI engine responded with status 503".into())
        );
    }
}
