//! Genesis initialization — the whole initial supply starts at the reserve.

use keel_types::{AccountId, INITIAL_SUPPLY};

use crate::ledger::Ledger;

/// Configuration for initializing a fresh ledger.
#[derive(Clone, Debug)]
pub struct GenesisConfig {
    /// The administrator account, which doubles as the contraction reserve.
    pub administrator: AccountId,
    /// Raw units credited to the administrator at genesis.
    pub initial_supply: u128,
}

impl GenesisConfig {
    /// Standard configuration: the protocol's initial supply.
    pub fn new(administrator: AccountId) -> Self {
        Self {
            administrator,
            initial_supply: INITIAL_SUPPLY,
        }
    }
}

/// Create a ledger holding exactly the genesis supply, all at the
/// administrator account.
pub fn genesis_ledger(config: &GenesisConfig) -> Ledger {
    let mut ledger = Ledger::new();
    ledger
        .mint(&config.administrator, config.initial_supply)
        .expect("genesis mint starts from zero supply and cannot overflow");
    ledger
}
