#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use crate::simulation::Simulation;
    use async_trait::async_trait;
    use axum::Router;
    use forecast::{ForecastError, ForecastOutput, GenerationClient, RateProjection};
    use moka::future::Cache;
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// What the stubbed generation client should do.
    #[derive(Clone)]
    pub enum StubBehavior {
        Succeed(ForecastOutput),
        Empty,
        Fail(String),
    }

    /// Test double standing in for the generation provider.
    pub struct StubGeneration {
        pub behavior: StubBehavior,
    }

    #[async_trait]
    impl GenerationClient for StubGeneration {
        fn provider_name(&self) -> &'static str {
            "stub"
        }

        async fn generate(&self, _prompt: &str) -> forecast::Result<Option<ForecastOutput>> {
            match &self.behavior {
                StubBehavior::Succeed(output) => Ok(Some(output.clone())),
                StubBehavior::Empty => Ok(None),
                StubBehavior::Fail(message) => Err(ForecastError::Unavailable {
                    message: message.clone(),
                }),
            }
        }
    }

    /// A well-formed forecast the stub can answer with.
    pub fn sample_forecast() -> ForecastOutput {
        ForecastOutput {
            insight: "You have strong team potential.".to_string(),
            strategy: vec![
                "Invite 5 more active members".to_string(),
                "Join a security circle".to_string(),
            ],
            forecast: RateProjection {
                new_mining_rate: "0.35 π/hr".to_string(),
                timeline: "within 6 weeks".to_string(),
            },
        }
    }

    /// Create AppState for testing: stubbed generation, no simulated
    /// latency or failures.
    pub fn setup_test_app_state(behavior: StubBehavior) -> AppState {
        AppState {
            generation: Arc::new(StubGeneration { behavior }),
            simulation: Simulation::disabled(),
            cache: Cache::new(16),
        }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app(behavior: StubBehavior) -> Router {
        let _ = init_test_tracing();

        let state = setup_test_app_state(behavior);
        create_router(state)
    }
}
