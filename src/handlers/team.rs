use crate::schemas::{ApiResponse, AppState};
use crate::simulation::load_snapshot;
use axum::{extract::State, http::StatusCode, response::Json};
use common::{TeamMemberDto, TeamOverview};
use model::entities::team::MemberStatus;
use tracing::{debug, error, info, instrument, trace};

/// Get the earning-team overview
#[utoipa::path(
    get,
    path = "/api/v1/team",
    tag = "dashboard",
    responses(
        (status = 200, description = "Team overview retrieved successfully", body = ApiResponse<TeamOverview>),
        (status = 503, description = "Simulated backend unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_team(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TeamOverview>>, StatusCode> {
    trace!("Entering get_team function");
    debug!("Fetching team overview from simulated backend");

    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(outage) => {
            error!("Failed to fetch team overview: {}", outage);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    let members: Vec<TeamMemberDto> = snapshot
        .team
        .iter()
        .map(|member| TeamMemberDto {
            name: member.name.clone(),
            status: member.status.to_string(),
            joined_at: member.joined_at,
            contribution_rate: member.contribution_rate,
        })
        .collect();

    let overview = TeamOverview {
        size: snapshot.team.len() as u32,
        active_members: snapshot.team.iter().filter(|m| m.is_active()).count() as u32,
        pending_members: snapshot
            .team
            .iter()
            .filter(|m| m.status == MemberStatus::Pending)
            .count() as u32,
        combined_boost: snapshot.profile.team_boost,
        members,
    };

    info!(
        "Team overview retrieved: {} members, {} active",
        overview.size, overview.active_members
    );
    let response = ApiResponse {
        data: overview,
        message: "Team overview retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
