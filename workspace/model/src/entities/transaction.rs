use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What produced a wallet movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    MiningReward,
    TeamBonus,
    NodeBonus,
    Sent,
    Received,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::MiningReward => write!(f, "mining_reward"),
            TransactionKind::TeamBonus => write!(f, "team_bonus"),
            TransactionKind::NodeBonus => write!(f, "node_bonus"),
            TransactionKind::Sent => write!(f, "sent"),
            TransactionKind::Received => write!(f, "received"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionStatus::Completed => write!(f, "completed"),
            TransactionStatus::Pending => write!(f, "pending"),
        }
    }
}

/// A single wallet transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    /// Signed amount in π (negative for outgoing transfers).
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub memo: String,
    /// Counterparty wallet name for transfers.
    pub counterparty: Option<String>,
}

impl Transaction {
    pub fn is_outgoing(&self) -> bool {
        self.kind == TransactionKind::Sent
    }
}
