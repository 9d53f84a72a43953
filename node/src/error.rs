use thiserror::Error;

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("ledger error: {0}")]
    Ledger(#[from] keel_ledger::LedgerError),

    #[error("governance error: {0}")]
    Governance(#[from] keel_governance::GovernanceError),

    #[error("stability error: {0}")]
    Stability(#[from] keel_stability::StabilityError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
