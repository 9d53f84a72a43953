//! Administrator capability check.
//!
//! Operations that mutate governed state ask the policy whether the caller
//! holds the administrator capability, rather than comparing against a
//! hard-coded identity. A future multi-key policy can replace
//! [`SingleAdmin`] without touching engine logic.

use keel_types::AccountId;

/// Capability check for administrator-only operations.
pub trait AdminPolicy {
    /// Whether `caller` holds the administrator capability.
    fn is_administrator(&self, caller: &AccountId) -> bool;
}

/// The shipped policy: exactly one administrator key.
#[derive(Clone, Debug)]
pub struct SingleAdmin {
    administrator: AccountId,
}

impl SingleAdmin {
    pub fn new(administrator: AccountId) -> Self {
        Self { administrator }
    }

    /// The administrator account, which also serves as the reserve.
    pub fn administrator(&self) -> &AccountId {
        &self.administrator
    }
}

impl AdminPolicy for SingleAdmin {
    fn is_administrator(&self, caller: &AccountId) -> bool {
        caller == &self.administrator
    }
}
