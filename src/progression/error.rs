//! Error taxonomy for progression operations
//!
//! Every variant is an expected, user-facing condition. None of them leave the
//! engine in a broken state.

use super::tasks::TaskId;

/// Error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Not enough coins: need {needed}, have {balance} (short by {shortfall})")]
    InsufficientFunds {
        needed: u64,
        balance: u64,
        shortfall: u64,
    },

    #[error("Task '{0}' is not ready to claim")]
    TaskNotReady(TaskId),

    #[error("Task '{0}' was already claimed")]
    TaskAlreadyClaimed(TaskId),

    #[error("Unknown {what}: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("Giveaway #{0} has ended")]
    GiveawayClosed(u32),

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Giveaway draws need a running Tokio runtime")]
    NoRuntime,

    #[error("Draw ticket #{0} no longer belongs to this session")]
    StaleTicket(u64),
}

impl EngineError {
    pub(crate) fn not_found(what: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            what,
            id: id.to_string(),
        }
    }

    /// Shortfall in coins, if this is an insufficient-funds error
    pub fn shortfall(&self) -> Option<u64> {
        match self {
            Self::InsufficientFunds { shortfall, .. } => Some(*shortfall),
            _ => None,
        }
    }
}
