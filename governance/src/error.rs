use thiserror::Error;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("caller is not the administrator")]
    OwnerOnly,

    #[error("expansion threshold must be strictly positive")]
    ZeroExpansionThreshold,

    #[error("contraction threshold must be strictly positive")]
    ZeroContractionThreshold,

    #[error("max expansion rate must be strictly positive")]
    ZeroMaxExpansionRate,

    #[error("max contraction rate must be strictly positive")]
    ZeroMaxContractionRate,

    #[error("rebalance cooldown must be strictly positive")]
    ZeroCooldown,
}
