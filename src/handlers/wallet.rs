use crate::schemas::{ApiResponse, AppState};
use crate::simulation::load_snapshot;
use axum::{extract::State, http::StatusCode, response::Json};
use common::MiningSummary;
use tracing::{debug, error, info, instrument, trace};

/// Get the wallet balance and mining-rate summary
#[utoipa::path(
    get,
    path = "/api/v1/wallet",
    tag = "dashboard",
    responses(
        (status = 200, description = "Wallet summary retrieved successfully", body = ApiResponse<MiningSummary>),
        (status = 503, description = "Simulated backend unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_wallet(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MiningSummary>>, StatusCode> {
    trace!("Entering get_wallet function");
    debug!("Fetching wallet summary from simulated backend");

    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(outage) => {
            error!("Failed to fetch wallet summary: {}", outage);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    let profile = &snapshot.profile;
    let summary = MiningSummary {
        username: profile.username.clone(),
        balance: profile.balance,
        mining_rate: profile.effective_rate(),
        base_rate: profile.base_rate,
        session_active: profile.session.active,
        session_ends_at: profile.session.active.then_some(profile.session.ends_at),
    };

    info!(
        "Wallet summary retrieved for {} (rate {} π/hr)",
        summary.username, summary.mining_rate
    );
    let response = ApiResponse {
        data: summary,
        message: "Wallet summary retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
