//! Simulated network behavior for the mock data source. The dashboard has
//! no real backend; handlers fetch a synthesized snapshot through this
//! helper, which adds the latency and occasional failure a real API would
//! show. The configuration is an explicit value carried in `AppState`,
//! never process-global, so tests inject `Simulation::disabled()`.

use model::mock::DashboardSnapshot;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::schemas::AppState;

/// The simulated backend refused the request.
#[derive(Error, Debug)]
#[error("simulated network outage")]
pub struct SimulatedOutage;

/// Injectable delay + failure-rate configuration.
#[derive(Debug, Clone, Copy)]
pub struct Simulation {
    /// Artificial latency applied to every fetch, in milliseconds.
    pub delay_ms: u64,
    /// Probability in [0, 1] that a fetch fails.
    pub failure_rate: f64,
}

impl Simulation {
    /// Create config from environment variables, with the defaults the
    /// dashboard ships with.
    pub fn from_env() -> Self {
        Self {
            delay_ms: std::env::var("PIVIEW_SIM_DELAY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(150),
            failure_rate: std::env::var("PIVIEW_SIM_FAILURE_RATE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|rate| (0.0..=1.0).contains(rate))
                .unwrap_or(0.0),
        }
    }

    /// No latency, no failures. Used by tests.
    pub fn disabled() -> Self {
        Self {
            delay_ms: 0,
            failure_rate: 0.0,
        }
    }

    /// Pass `data` through the simulated network: sleep, then maybe fail.
    pub async fn fetch<T>(&self, data: T) -> Result<T, SimulatedOutage> {
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }

        if self.failure_rate > 0.0 && rand::thread_rng().r#gen::<f64>() < self.failure_rate {
            warn!("simulated network fetch failed");
            return Err(SimulatedOutage);
        }

        Ok(data)
    }
}

/// Load the dashboard snapshot through the simulated network. The snapshot
/// is cached so concurrent endpoints observe one consistent mock world.
pub async fn load_snapshot(state: &AppState) -> Result<DashboardSnapshot, SimulatedOutage> {
    let snapshot = state
        .cache
        .get_with("dashboard".to_string(), async {
            debug!("synthesizing a fresh dashboard snapshot");
            DashboardSnapshot::generate()
        })
        .await;

    state.simulation.fetch(snapshot).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_simulation_always_succeeds() {
        let sim = Simulation::disabled();
        for _ in 0..50 {
            assert!(sim.fetch(1).await.is_ok());
        }
    }

    #[tokio::test]
    async fn full_failure_rate_always_fails() {
        let sim = Simulation {
            delay_ms: 0,
            failure_rate: 1.0,
        };
        for _ in 0..50 {
            assert!(sim.fetch(1).await.is_err());
        }
    }

    #[tokio::test]
    async fn fetch_returns_the_data_unchanged() {
        let sim = Simulation::disabled();
        let fetched = sim.fetch("payload").await.unwrap();
        assert_eq!(fetched, "payload");
    }
}
