//! AI mining-forecast pipeline: schema definitions, prompt rendering, the
//! generation invoker, and the service function that ties them together.
//!
//! The flow is a single stateless request/response: render the input into a
//! prompt, make one schema-constrained call to a generative model, validate
//! the shape, and hand the result back unchanged. No retries, no caching,
//! no shared state between requests.

pub mod client;
pub mod error;
pub mod prompt;
pub mod schema;
pub mod service;

pub use client::{GeminiClient, GenerationClient, GenerationConfig, Unconfigured};
pub use error::{ForecastError, Result};
pub use schema::{ForecastInput, ForecastOutput, RateProjection};
pub use service::generate_mining_forecast;

use std::sync::Arc;

/// Returns the generation client the service uses by default: the Gemini
/// client when `GEMINI_API_KEY` is present, otherwise a stand-in that fails
/// every request with a clear message so the rest of the API stays up.
pub fn default_client() -> anyhow::Result<Arc<dyn GenerationClient>> {
    match GenerationConfig::from_env() {
        Some(config) => Ok(Arc::new(GeminiClient::new(config)?)),
        None => Ok(Arc::new(Unconfigured)),
    }
}
