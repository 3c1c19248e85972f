//! The public entry point of the forecast pipeline.

use tracing::{debug, info};

use crate::client::GenerationClient;
use crate::error::{ForecastError, Result};
use crate::prompt;
use crate::schema::{ForecastInput, ForecastOutput};

/// Renders the input into a prompt, makes one generation call, and returns
/// the structured result unchanged.
///
/// The input is taken as already validated by the caller; this function
/// does not re-check numeric ranges. An empty generation becomes
/// [`ForecastError::EmptyGeneration`], distinguishable from a provider
/// failure. No retries, no caching: each call is independent, and two calls
/// with identical input may legitimately produce different text.
pub async fn generate_mining_forecast(
    client: &dyn GenerationClient,
    input: &ForecastInput,
) -> Result<ForecastOutput> {
    let rendered = prompt::render(input);
    debug!(
        provider = client.provider_name(),
        team_size = input.team_size,
        "submitting mining forecast request"
    );

    match client.generate(&rendered).await? {
        Some(output) => {
            info!(
                provider = client.provider_name(),
                steps = output.strategy.len(),
                "mining forecast generated"
            );
            Ok(output)
        }
        None => Err(ForecastError::EmptyGeneration),
    }
}
