//! AI venue insights via the Gemini `generateContent` API.
//!
//! [`InsightClient::generate_venue_insight`] never fails: a missing key,
//! transport error or bad reply turns into a fixed message for the user and
//! an `error!` log line for the operator.

use crate::{
    config::app::InsightConfig,
    errors::{Error, Result},
};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Fixed system instruction sent with every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful and professional Venue Management \
Assistant. Your goal is to help venue managers analyze data, write descriptions, or suggest \
maintenance schedules. Keep answers concise and actionable.";

/// Reply when the model returns no text.
pub const NO_INSIGHT: &str = "No insight generated.";
/// Reply when no API key is configured.
pub const MISSING_KEY: &str = "API Key not configured.";
/// Reply on any request failure.
pub const REQUEST_FAILED: &str = "Failed to retrieve AI insight. Please try again.";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    // Concatenated text of the first candidate, `None` when empty.
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

/// Gemini API client
#[derive(Debug, Clone)]
pub struct InsightClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    model: String,
}

impl InsightClient {
    /// Create a new client with an explicit (possibly absent) API key
    #[must_use]
    pub fn new(api_key: Option<String>, config: &InsightConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Create a new client with the API key from `GEMINI_API_KEY`
    #[must_use]
    pub fn from_env(config: &InsightConfig) -> Self {
        Self::new(std::env::var(API_KEY_VAR).ok(), config)
    }

    /// Whether an API key is available.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends `prompt` and returns the model's text, `None` for an empty reply.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Insight`] when no key is configured or the API
    /// answers with a non-success status, [`Error::Http`] on transport or
    /// decoding failures.
    pub async fn generate(&self, prompt: &str) -> Result<Option<String>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| Error::Insight {
            message: format!("{API_KEY_VAR} is not set"),
        })?;

        let request = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.api_url, self.model
            ))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<GenerateResponse>().await?.text()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(Error::Insight {
                    message: format!("{status}: {body}"),
                })
            }
        }
    }

    /// Text insight for `prompt`, or one of the fixed fallback messages.
    pub async fn generate_venue_insight(&self, prompt: &str) -> String {
        if !self.is_configured() {
            return MISSING_KEY.to_string();
        }
        match self.generate(prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_INSIGHT.to_string(),
            Err(e) => {
                error!("Gemini API error: {e}");
                REQUEST_FAILED.to_string()
            }
        }
    }
}
