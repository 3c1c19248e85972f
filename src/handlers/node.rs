use crate::schemas::{ApiResponse, AppState};
use crate::simulation::load_snapshot;
use axum::{extract::State, http::StatusCode, response::Json};
use common::NodeStatusDto;
use tracing::{debug, error, info, instrument, trace};

/// Get the node status
#[utoipa::path(
    get,
    path = "/api/v1/node",
    tag = "dashboard",
    responses(
        (status = 200, description = "Node status retrieved successfully", body = ApiResponse<NodeStatusDto>),
        (status = 503, description = "Simulated backend unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_node(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<NodeStatusDto>>, StatusCode> {
    trace!("Entering get_node function");
    debug!("Fetching node status from simulated backend");

    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(outage) => {
            error!("Failed to fetch node status: {}", outage);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    let node = snapshot.node;
    let status = NodeStatusDto {
        running: node.running,
        version: node.version,
        uptime_percent: node.uptime_percent,
        last_seen: node.last_seen,
        bonus_rate: node.bonus_rate,
    };

    info!(
        "Node status retrieved: running={}, uptime {}%",
        status.running, status.uptime_percent
    );
    let response = ApiResponse {
        data: status,
        message: "Node status retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
