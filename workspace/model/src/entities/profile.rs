use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The pioneer's current mining session window. Sessions run for 24 hours
/// and must be restarted manually; an expired session means the base rate
/// is not being earned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiningSession {
    pub active: bool,
    pub started_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

/// A pioneer's wallet and mining state as the dashboard shows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PioneerProfile {
    pub username: String,
    pub display_name: String,
    /// Wallet balance in π.
    pub balance: Decimal,
    /// Base mining rate in π per hour, before boosts.
    pub base_rate: f64,
    /// Boost earned from active team members, in π per hour.
    pub team_boost: f64,
    /// Boost earned from running a node, in π per hour.
    pub node_boost: f64,
    pub session: MiningSession,
}

impl PioneerProfile {
    /// Effective mining rate: base plus all boosts. Zero when no session
    /// is running, matching how the dashboard displays a lapsed session.
    pub fn effective_rate(&self) -> f64 {
        if self.session.active {
            self.base_rate + self.team_boost + self.node_boost
        } else {
            0.0
        }
    }
}
