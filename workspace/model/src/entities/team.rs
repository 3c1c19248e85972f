use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a referred member is currently contributing to the team boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    /// Mining right now; contributes to the boost.
    Active,
    /// Joined but not mining at the moment.
    Inactive,
    /// Accepted the invite but never started a session.
    Pending,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "active"),
            MemberStatus::Inactive => write!(f, "inactive"),
            MemberStatus::Pending => write!(f, "pending"),
        }
    }
}

/// One referred member of the pioneer's earning team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub status: MemberStatus,
    pub joined_at: NaiveDate,
    /// Boost this member contributes when active, in π per hour.
    pub contribution_rate: f64,
}

impl TeamMember {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }
}
