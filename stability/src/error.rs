use keel_ledger::LedgerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StabilityError {
    #[error("no rebalance is due at this height")]
    RebalanceNotDue,

    #[error("supply expansion failed: {0}")]
    ExpansionFailed(#[source] LedgerError),

    #[error("supply contraction failed: {0}")]
    ContractionFailed(#[source] LedgerError),
}
