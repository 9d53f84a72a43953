use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("caller is not the sender and not an approved delegate")]
    NotAuthorized,

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    #[error("insufficient reserve: need {needed}, have {available}")]
    InsufficientReserve { needed: u128, available: u128 },

    #[error("arithmetic overflow")]
    Overflow,
}
