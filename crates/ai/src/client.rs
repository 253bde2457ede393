//! Client for the generative-language `generateContent` endpoint.
//!
//! One POST per plan request. The credential travels as a URL query
//! parameter, matching the provider's API-key wire format. The provider can
//! answer HTTP 200 with an error payload in the body, so the error field is
//! checked explicitly rather than relying on the status code alone. No retry
//! and no request timeout are configured; a hung request blocks the caller.

use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::AiError;

/// Environment variable holding the API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default model for plan generation.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Base URL for the generative-language API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

// ============================================================================
// Request/Response envelope types
// ============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

/// Provider response envelope. Candidate output is nested several levels
/// deep; every level is optional so a sparse envelope deserializes instead
/// of failing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    #[serde(default)]
    pub error: Option<ApiErrorPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Error payload the provider embeds in an error-bearing body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorPayload {
    #[serde(default)]
    pub message: String,
}

// ============================================================================
// Client
// ============================================================================

/// Client for the generative-language API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a client with an explicit key and model.
    pub fn new(api_key: String, model: String) -> Self {
        GeminiClient {
            client: Client::new(),
            api_key,
            model,
        }
    }

    /// Create a client from `GEMINI_API_KEY` with the default model.
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .map_err(|_| AiError::MissingApiKey(GEMINI_API_KEY_ENV.to_string()))?;
        Ok(Self::new(api_key, DEFAULT_MODEL.to_string()))
    }

    /// Issue one generation request and return the raw provider envelope.
    pub async fn generate_content(
        &self,
        prompt: &str,
    ) -> Result<GenerateContentResponse, AiError> {
        let url = format!(
            "{API_BASE_URL}/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("Requesting generation from model {}", self.model);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| AiError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AiError::Http(e.to_string()))?;

        decode_response(status, &body)
    }
}

/// Decode a response body into the envelope, surfacing provider errors.
///
/// The provider reports failures inside the body; a 200 response can still
/// carry an error payload, so the error field is checked regardless of
/// status.
fn decode_response(
    status: reqwest::StatusCode,
    body: &str,
) -> Result<GenerateContentResponse, AiError> {
    let envelope: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        if status.is_success() {
            AiError::Http(format!("failed to decode provider response: {e}"))
        } else {
            AiError::Provider(format!("HTTP {status}"))
        }
    })?;

    if let Some(error) = &envelope.error {
        return Err(AiError::Provider(error.message.clone()));
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_nested_text() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hello"}], "role": "model"}}
            ],
            "usageMetadata": {"promptTokenCount": 12}
        }"#;
        let envelope: GenerateContentResponse = serde_json::from_str(json).unwrap();
        let text = envelope.candidates.unwrap()[0]
            .content
            .as_ref()
            .unwrap()
            .parts[0]
            .text
            .clone();
        assert_eq!(text, Some("hello".to_string()));
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_envelope_deserializes_error_payload() {
        let json = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let envelope: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.error.unwrap().message, "API key not valid");
    }

    #[test]
    fn test_sparse_envelope_deserializes() {
        let envelope: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(envelope.candidates.is_none());
        assert!(envelope.error.is_none());
    }

    #[test]
    fn test_error_bearing_200_body_is_surfaced() {
        let body = r#"{"error": {"message": "quota exceeded"}}"#;
        let err = decode_response(reqwest::StatusCode::OK, body).unwrap_err();
        match err {
            AiError::Provider(message) => assert_eq!(message, "quota exceeded"),
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_undecodable_error_status_reports_status() {
        let err = decode_response(reqwest::StatusCode::BAD_GATEWAY, "<html>oops</html>")
            .unwrap_err();
        assert!(matches!(err, AiError::Provider(_)));
    }

    #[test]
    fn test_well_formed_body_decodes() {
        let body = r#"{"candidates": [{"content": {"parts": [{"text": "ok"}]}}]}"#;
        let envelope = decode_response(reqwest::StatusCode::OK, body).unwrap();
        assert!(envelope.candidates.is_some());
    }
}
