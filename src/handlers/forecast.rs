use crate::schemas::{ApiResponse, AppState, ErrorResponse, ForecastRequest};
use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use forecast::{ForecastError, ForecastOutput, generate_mining_forecast};
use tracing::{debug, error, info, instrument, trace, warn};

/// Generate an AI mining forecast
///
/// One generation call per request: no retries, no caching, and no
/// server-side deduplication; suppressing double submission is the
/// client's job. Identical input may legitimately yield different text.
#[utoipa::path(
    post,
    path = "/api/v1/forecast",
    tag = "forecast",
    request_body = ForecastRequest,
    responses(
        (status = 200, description = "Forecast generated successfully", body = ApiResponse<ForecastOutput>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 502, description = "Generation failed or was empty", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn create_forecast(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<ForecastRequest>>,
) -> Result<Json<ApiResponse<ForecastOutput>>, (StatusCode, Json<ErrorResponse>)> {
    trace!("Entering create_forecast function");
    debug!(
        "Generating forecast: rate {} π/hr, team {}/{} active",
        request.current_rate, request.active_team_members, request.team_size
    );

    let input = request.into();
    match generate_mining_forecast(state.generation.as_ref(), &input).await {
        Ok(output) => {
            info!(
                "Forecast generated with {} strategy steps",
                output.strategy.len()
            );
            let response = ApiResponse {
                data: output,
                message: "Forecast generated successfully".to_string(),
                success: true,
            };
            Ok(Json(response))
        }
        Err(err @ ForecastError::EmptyGeneration) => {
            // Transport succeeded but the model produced nothing usable;
            // callers can tell this apart from the provider being down.
            warn!("Forecast generation returned an empty result");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: "EMPTY_GENERATION".to_string(),
                    success: false,
                }),
            ))
        }
        Err(err) => {
            error!("Forecast generation failed: {}", err);
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: err.to_string(),
                    code: "GENERATION_UNAVAILABLE".to_string(),
                    success: false,
                }),
            ))
        }
    }
}
