//! Transport-layer types shared between the piview backend and API consumers.
//! These structs mirror the backend handlers' response payloads so clients
//! can deserialize API responses without duplicating shapes.

mod dashboard;

pub use dashboard::{
    MiningSummary, NodeStatusDto, TeamMemberDto, TeamOverview, TransactionDto,
};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic API response wrapper used by the backend.
/// Note: The backend has its own definition in piview/src/schemas.rs with the
/// same field names. We mirror it here for clients to reuse.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}
