//! This file serves as the root for all domain entity modules.
//! We define the data records the wallet view presents here. There is no
//! persistence layer behind them: every record is synthesized per request
//! by the `mock` module and lives only as long as the response it feeds.

pub mod node;
pub mod profile;
pub mod team;
pub mod transaction;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::node::NodeStatus;
    pub use super::profile::{MiningSession, PioneerProfile};
    pub use super::team::{MemberStatus, TeamMember};
    pub use super::transaction::{Transaction, TransactionKind, TransactionStatus};
}
