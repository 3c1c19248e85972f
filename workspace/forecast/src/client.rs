//! Generation invoker: one outbound call to a generative text model,
//! constrained to the forecast output schema. No retries and no repair of
//! malformed output; anything unusable surfaces as a single uniform error.

use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::error::{ForecastError, Result};
use crate::schema::{self, ForecastOutput};

const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Abstraction over the generative model call so the service function and
/// the API layer can run against test doubles.
///
/// `Ok(None)` means the call succeeded transport-wise but produced no
/// usable structured output. Every provider, network, or schema failure is
/// `ForecastError::Unavailable`.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Short provider label for health reporting.
    fn provider_name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<Option<ForecastOutput>>;
}

/// Configuration for the Gemini generation client.
#[derive(Clone)]
pub struct GenerationConfig {
    /// API key for the Generative Language API.
    pub api_key: String,
    /// Model to use for generation.
    pub model: String,
    /// Endpoint base, overridable for tests.
    pub base_url: String,
    /// Transport timeout for the single outbound call.
    pub timeout_secs: u64,
}

// Custom Debug implementation that redacts the API key
impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GenerationConfig {
    /// Create config from environment variables. Returns `None` when no
    /// API key is configured.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())?;

        Some(Self {
            api_key,
            model: std::env::var("PIVIEW_FORECAST_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            base_url: std::env::var("PIVIEW_FORECAST_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout_secs: std::env::var("PIVIEW_FORECAST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate part, if the provider produced one.
    fn candidate_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .filter(|t| !t.trim().is_empty())
    }
}

/// Client for the Generative Language API `generateContent` endpoint.
pub struct GeminiClient {
    config: GenerationConfig,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GenerationConfig) -> AnyResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client for generation")?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<Option<ForecastOutput>> {
        debug!(
            model = %self.config.model,
            chars = prompt.len(),
            "requesting schema-constrained generation"
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema::output_schema(),
            }
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let sanitized: String = error_text.chars().take(500).collect();
            warn!(%status, "generation provider returned an error");
            return Err(ForecastError::Unavailable {
                message: format!("provider returned {status}: {sanitized}"),
            });
        }

        let payload: GenerateContentResponse = response.json().await?;

        let Some(text) = payload.candidate_text() else {
            warn!("generation provider returned no candidate text");
            return Ok(None);
        };

        let output: ForecastOutput = serde_json::from_str(&text)?;
        output
            .conforms()
            .map_err(|message| ForecastError::Unavailable {
                message: format!("provider output failed schema validation: {message}"),
            })?;

        Ok(Some(output))
    }
}

/// Stand-in used when no provider is configured. Keeps the rest of the API
/// serving while every forecast request fails with a clear message.
pub struct Unconfigured;

#[async_trait]
impl GenerationClient for Unconfigured {
    fn provider_name(&self) -> &'static str {
        "unconfigured"
    }

    async fn generate(&self, _prompt: &str) -> Result<Option<ForecastOutput>> {
        Err(ForecastError::Unavailable {
            message: "GEMINI_API_KEY is not set".to_string(),
        })
    }
}
