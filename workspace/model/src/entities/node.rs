use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of the pioneer's node as last reported to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub running: bool,
    pub version: String,
    /// Rolling uptime over the scoring window, 0-100.
    pub uptime_percent: f64,
    pub last_seen: DateTime<Utc>,
    /// Boost the node contributes while running, in π per hour.
    pub bonus_rate: f64,
}
