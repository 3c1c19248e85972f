use common::{MiningSummary, NodeStatusDto, TeamMemberDto, TeamOverview, TransactionDto};
use forecast::{ForecastOutput, GenerationClient, RateProjection};
use model::mock::DashboardSnapshot;
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};
use validator::{Validate, ValidationError};

use crate::simulation::Simulation;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Generation client behind the forecast endpoint
    pub generation: Arc<dyn GenerationClient>,
    /// Simulated-network behavior for the mock data source
    pub simulation: Simulation,
    /// Cache holding the synthesized dashboard snapshot
    pub cache: Cache<String, DashboardSnapshot>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("generation", &self.generation.provider_name())
            .field("simulation", &self.simulation)
            .finish()
    }
}

/// Query parameters for the transactions endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct TransactionsQuery {
    /// Maximum number of rows to return (newest first)
    pub limit: Option<usize>,
}

/// Request body for the forecast endpoint. Field names are camelCase
/// because the wire contract pins them that way.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = validate_team_counts))]
pub struct ForecastRequest {
    /// Current mining rate in π per hour
    #[validate(range(min = 0.0))]
    pub current_rate: f64,
    /// Total referred members
    pub team_size: u32,
    /// Members currently mining
    pub active_team_members: u32,
    /// The pioneer's free-form goal
    #[validate(length(min = 1))]
    pub question: String,
}

fn validate_team_counts(request: &ForecastRequest) -> Result<(), ValidationError> {
    if request.active_team_members > request.team_size {
        return Err(ValidationError::new(
            "active_team_members_exceeds_team_size",
        ));
    }
    Ok(())
}

impl From<ForecastRequest> for forecast::ForecastInput {
    fn from(request: ForecastRequest) -> Self {
        Self {
            current_rate: request.current_rate,
            team_size: request.team_size,
            active_team_members: request.active_team_members,
            question: request.question,
        }
    }
}

/// API response wrapper
#[derive(Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Configured generation provider
    pub generation_provider: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::wallet::get_wallet,
        crate::handlers::team::get_team,
        crate::handlers::node::get_node,
        crate::handlers::transactions::get_transactions,
        crate::handlers::forecast::create_forecast,
    ),
    components(
        schemas(
            ApiResponse<MiningSummary>,
            ApiResponse<TeamOverview>,
            ApiResponse<NodeStatusDto>,
            ApiResponse<Vec<TransactionDto>>,
            ApiResponse<ForecastOutput>,
            ErrorResponse,
            HealthResponse,
            TransactionsQuery,
            ForecastRequest,
            ForecastOutput,
            RateProjection,
            MiningSummary,
            TeamOverview,
            TeamMemberDto,
            NodeStatusDto,
            TransactionDto,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "dashboard", description = "Wallet, team, node and transaction data"),
        (name = "forecast", description = "AI mining forecast"),
    ),
    info(
        title = "Pi Wallet View API",
        description = "Dynamic Pi Wallet View - mocked wallet, team, node and transaction data with an AI mining forecast",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
