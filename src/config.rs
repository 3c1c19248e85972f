use anyhow::Result;
use moka::future::Cache;
use std::time::Duration;

use crate::schemas::AppState;
use crate::simulation::Simulation;

/// Initialize application configuration and state
pub async fn initialize_app_state() -> Result<AppState> {
    // Load configuration
    dotenvy::dotenv().ok();

    let generation = forecast::default_client()?;
    tracing::info!(
        provider = generation.provider_name(),
        "generation client configured"
    );

    let simulation = Simulation::from_env();
    tracing::debug!(?simulation, "simulated network configured");

    // Snapshot cache: one consistent mock world per TTL window
    let cache = Cache::builder()
        .max_capacity(16)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    Ok(AppState {
        generation,
        simulation,
        cache,
    })
}
