//! Synthesized stand-in for the backend the dashboard would normally query.
//! One `DashboardSnapshot` is a mutually consistent world: the profile's
//! boosts follow from the team and node records, and the wallet balance is
//! the sum of the generated transaction history.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::entities::prelude::*;

/// Base mining rate of the sample pioneer, in π per hour.
const BASE_RATE: f64 = 0.12;

/// Everything one dashboard render needs, generated in one piece.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub profile: PioneerProfile,
    pub team: Vec<TeamMember>,
    pub node: NodeStatus,
    pub transactions: Vec<Transaction>,
}

impl DashboardSnapshot {
    pub fn generate() -> Self {
        let now = Utc::now();
        let team = sample_team(now);
        let node = sample_node(now);
        let transactions = sample_transactions(now, 30);
        let profile = sample_profile(now, &team, &node, &transactions);

        Self {
            profile,
            team,
            node,
            transactions,
        }
    }
}

pub fn sample_team(now: DateTime<Utc>) -> Vec<TeamMember> {
    let today = now.date_naive();

    vec![
        TeamMember {
            name: "maria_p".to_string(),
            status: MemberStatus::Active,
            joined_at: today - Duration::days(412),
            contribution_rate: 0.02,
        },
        TeamMember {
            name: "jchen".to_string(),
            status: MemberStatus::Active,
            joined_at: today - Duration::days(388),
            contribution_rate: 0.02,
        },
        TeamMember {
            name: "pi_miner_ke".to_string(),
            status: MemberStatus::Active,
            joined_at: today - Duration::days(301),
            contribution_rate: 0.02,
        },
        TeamMember {
            name: "solange.b".to_string(),
            status: MemberStatus::Active,
            joined_at: today - Duration::days(244),
            contribution_rate: 0.02,
        },
        TeamMember {
            name: "tomasz_w".to_string(),
            status: MemberStatus::Inactive,
            joined_at: today - Duration::days(230),
            contribution_rate: 0.02,
        },
        TeamMember {
            name: "anh.nguyen".to_string(),
            status: MemberStatus::Inactive,
            joined_at: today - Duration::days(175),
            contribution_rate: 0.02,
        },
        TeamMember {
            name: "dkw_2047".to_string(),
            status: MemberStatus::Pending,
            joined_at: today - Duration::days(31),
            contribution_rate: 0.02,
        },
        TeamMember {
            name: "luisa_m".to_string(),
            status: MemberStatus::Pending,
            joined_at: today - Duration::days(6),
            contribution_rate: 0.02,
        },
    ]
}

pub fn sample_node(now: DateTime<Utc>) -> NodeStatus {
    NodeStatus {
        running: true,
        version: "0.4.11".to_string(),
        uptime_percent: 97.3,
        last_seen: now - Duration::minutes(4),
        bonus_rate: 0.05,
    }
}

pub fn sample_profile(
    now: DateTime<Utc>,
    team: &[TeamMember],
    node: &NodeStatus,
    transactions: &[Transaction],
) -> PioneerProfile {
    let team_boost: f64 = team
        .iter()
        .filter(|m| m.is_active())
        .map(|m| m.contribution_rate)
        .sum();
    let node_boost = if node.running { node.bonus_rate } else { 0.0 };

    // Balance is whatever the history says it is, on top of a seed amount
    // that predates the generated window.
    let seed = Decimal::new(41_250, 3); // 41.250 π
    let balance = seed + transactions.iter().map(|t| t.amount).sum::<Decimal>();

    PioneerProfile {
        username: "pioneer_ada".to_string(),
        display_name: "Ada".to_string(),
        balance,
        base_rate: BASE_RATE,
        team_boost,
        node_boost,
        session: MiningSession {
            active: true,
            started_at: now - Duration::hours(7),
            ends_at: now + Duration::hours(17),
        },
    }
}

/// Walks backward day by day and emits the movements a pioneer with the
/// sample rates would have seen. Amounts carry a small arithmetic jitter so
/// the table does not look like a constant column.
pub fn sample_transactions(now: DateTime<Utc>, days: i64) -> Vec<Transaction> {
    let mut txns = Vec::new();

    for i in 0..days {
        let day = now - Duration::days(i);

        // Daily mining reward: base rate over a ~22-24h effective session.
        let mined_millis = (BASE_RATE * 24.0 * 1000.0) as i64 - (i * 37) % 180;
        txns.push(Transaction {
            id: format!("tx{}", txns.len() + 1),
            timestamp: day - Duration::hours(2),
            kind: TransactionKind::MiningReward,
            amount: Decimal::new(mined_millis, 3),
            status: if i == 0 {
                TransactionStatus::Pending
            } else {
                TransactionStatus::Completed
            },
            memo: "Daily mining reward".to_string(),
            counterparty: None,
        });

        // Team bonus settles every third day.
        if i % 3 == 0 {
            let bonus_millis = 240 + (i * 53) % 120;
            txns.push(Transaction {
                id: format!("tx{}", txns.len() + 1),
                timestamp: day - Duration::hours(3),
                kind: TransactionKind::TeamBonus,
                amount: Decimal::new(bonus_millis, 3),
                status: TransactionStatus::Completed,
                memo: "Earning team bonus".to_string(),
                counterparty: None,
            });
        }

        // Node bonus settles weekly.
        if i % 7 == 0 {
            txns.push(Transaction {
                id: format!("tx{}", txns.len() + 1),
                timestamp: day - Duration::hours(5),
                kind: TransactionKind::NodeBonus,
                amount: Decimal::new(840, 3),
                status: TransactionStatus::Completed,
                memo: "Node operation bonus".to_string(),
                counterparty: None,
            });
        }
    }

    // A couple of peer transfers so the table shows both directions.
    txns.push(Transaction {
        id: format!("tx{}", txns.len() + 1),
        timestamp: now - Duration::days(9) - Duration::hours(8),
        kind: TransactionKind::Sent,
        amount: Decimal::new(-2_500, 3),
        status: TransactionStatus::Completed,
        memo: "Marketplace purchase".to_string(),
        counterparty: Some("pi_bazaar".to_string()),
    });
    txns.push(Transaction {
        id: format!("tx{}", txns.len() + 1),
        timestamp: now - Duration::days(17) - Duration::hours(6),
        kind: TransactionKind::Received,
        amount: Decimal::new(1_200, 3),
        status: TransactionStatus::Completed,
        memo: "Repayment from teammate".to_string(),
        counterparty: Some("maria_p".to_string()),
    });

    txns.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    txns
}
