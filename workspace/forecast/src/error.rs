use thiserror::Error;

/// Error types for the forecast pipeline.
///
/// Exactly two kinds are visible to callers: the provider call failed
/// (network, non-success status, or output that does not match the schema),
/// or the call succeeded transport-wise but produced nothing usable. Each
/// failure is terminal for its request; there is no retry path.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// The generation provider could not be reached or returned an
    /// unusable response.
    #[error("generation unavailable: {message}")]
    Unavailable { message: String },

    /// The provider answered, but with no usable structured output.
    #[error("generation produced an empty result")]
    EmptyGeneration,
}

impl From<reqwest::Error> for ForecastError {
    fn from(err: reqwest::Error) -> Self {
        ForecastError::Unavailable {
            message: format!("HTTP request failed: {err}"),
        }
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::Unavailable {
            message: format!("response did not match the forecast schema: {err}"),
        }
    }
}

/// Type alias for Result with ForecastError
pub type Result<T> = std::result::Result<T, ForecastError>;
