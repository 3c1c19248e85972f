use crate::schemas::{ApiResponse, AppState, TransactionsQuery};
use crate::simulation::load_snapshot;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use common::TransactionDto;
use tracing::{debug, error, info, instrument, trace};

/// Get recent wallet transactions, newest first
#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    tag = "dashboard",
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of rows to return"),
    ),
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = ApiResponse<Vec<TransactionDto>>),
        (status = 503, description = "Simulated backend unavailable", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_transactions(
    Query(query): Query<TransactionsQuery>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TransactionDto>>>, StatusCode> {
    trace!("Entering get_transactions function");
    debug!("Fetching transactions from simulated backend");

    let snapshot = match load_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(outage) => {
            error!("Failed to fetch transactions: {}", outage);
            return Err(StatusCode::SERVICE_UNAVAILABLE);
        }
    };

    let limit = query.limit.unwrap_or(usize::MAX);
    let rows: Vec<TransactionDto> = snapshot
        .transactions
        .iter()
        .take(limit)
        .map(|txn| TransactionDto {
            id: txn.id.clone(),
            timestamp: txn.timestamp,
            kind: txn.kind.to_string(),
            amount: txn.amount,
            status: txn.status.to_string(),
            memo: txn.memo.clone(),
            counterparty: txn.counterparty.clone(),
        })
        .collect();

    info!("Retrieved {} transactions", rows.len());
    let response = ApiResponse {
        data: rows,
        message: "Transactions retrieved successfully".to_string(),
        success: true,
    };
    Ok(Json(response))
}
