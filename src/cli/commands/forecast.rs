use anyhow::Result;
use forecast::generate_mining_forecast;
use tracing::{debug, info, trace};
use validator::Validate;

use crate::schemas::ForecastRequest;

/// Run the forecast pipeline once and print the structured result.
pub async fn forecast(
    current_rate: f64,
    team_size: u32,
    active_members: u32,
    question: &str,
) -> Result<()> {
    trace!("Entering forecast function");
    info!("Generating a one-shot mining forecast");
    debug!(
        "Input: rate {} π/hr, team {}/{} active, question: {}",
        current_rate, active_members, team_size, question
    );

    // Same boundary validation the HTTP handler applies.
    let request = ForecastRequest {
        current_rate,
        team_size,
        active_team_members: active_members,
        question: question.to_string(),
    };
    request
        .validate()
        .map_err(|e| anyhow::anyhow!("invalid forecast input: {e}"))?;

    dotenvy::dotenv().ok();
    let client = forecast::default_client()?;
    debug!("Using generation provider: {}", client.provider_name());

    let output = generate_mining_forecast(client.as_ref(), &request.into()).await?;

    info!("Forecast generated successfully");
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
