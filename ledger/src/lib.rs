//! Account-balance ledger.
//!
//! One balance table, one total-supply scalar. Mint and burn are reserved
//! for the stability engine; transfers conserve supply. The conservation
//! invariant `sum(balances) == total_supply` holds after every call.

pub mod delegates;
pub mod error;
pub mod genesis;
pub mod ledger;
pub mod snapshot;

pub use delegates::DelegateSet;
pub use error::LedgerError;
pub use genesis::{genesis_ledger, GenesisConfig};
pub use ledger::Ledger;
pub use snapshot::{AccountSnapshot, LedgerSnapshot};
