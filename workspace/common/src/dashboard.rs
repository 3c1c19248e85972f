use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wallet balance and mining-rate summary shown at the top of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MiningSummary {
    /// Username of the pioneer this summary belongs to.
    pub username: String,
    /// Current wallet balance in π.
    #[schema(value_type = String)]
    pub balance: Decimal,
    /// Effective mining rate in π per hour (base + team + node boosts).
    pub mining_rate: f64,
    /// Base mining rate in π per hour, before boosts.
    pub base_rate: f64,
    /// Whether a mining session is currently running.
    pub session_active: bool,
    /// End of the current mining session, if one is running.
    pub session_ends_at: Option<DateTime<Utc>>,
}

/// One referred member of the pioneer's earning team.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TeamMemberDto {
    pub name: String,
    /// "active", "inactive" or "pending".
    pub status: String,
    pub joined_at: NaiveDate,
    /// Boost this member contributes, in π per hour.
    pub contribution_rate: f64,
}

/// Earning-team overview: counts plus the member list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TeamOverview {
    /// Total referred members.
    pub size: u32,
    /// Members currently mining.
    pub active_members: u32,
    /// Members who accepted the invite but have not started mining.
    pub pending_members: u32,
    /// Combined team boost in π per hour.
    pub combined_boost: f64,
    pub members: Vec<TeamMemberDto>,
}

/// Status of the pioneer's node.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct NodeStatusDto {
    pub running: bool,
    pub version: String,
    /// Rolling uptime over the scoring window, 0-100.
    pub uptime_percent: f64,
    pub last_seen: DateTime<Utc>,
    /// Boost the node contributes, in π per hour.
    pub bonus_rate: f64,
}

/// A single wallet transaction row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TransactionDto {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// "mining_reward", "team_bonus", "node_bonus", "sent" or "received".
    pub kind: String,
    /// Signed amount in π (negative for outgoing transfers).
    #[schema(value_type = String)]
    pub amount: Decimal,
    /// "completed" or "pending".
    pub status: String,
    pub memo: String,
    /// Counterparty wallet name for transfers.
    pub counterparty: Option<String>,
}
