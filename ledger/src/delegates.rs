//! Administrator-managed transfer delegation.
//!
//! A delegate approved here may invoke `transfer` on behalf of any
//! account; there are no per-account delegation scopes. The set is managed
//! by the administrator through the node facade.

use std::collections::HashSet;

use keel_types::AccountId;
use serde::{Deserialize, Serialize};

/// The set of accounts approved to transfer on behalf of others.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DelegateSet {
    approved: HashSet<AccountId>,
}

impl DelegateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Approve or revoke a delegate. Returns whether the account was
    /// approved before the call.
    pub fn set_approved(&mut self, delegate: &AccountId, approved: bool) -> bool {
        if approved {
            !self.approved.insert(delegate.clone())
        } else {
            self.approved.remove(delegate)
        }
    }

    /// Whether `account` is an approved delegate.
    pub fn is_approved(&self, account: &AccountId) -> bool {
        self.approved.contains(account)
    }

    /// Number of approved delegates.
    pub fn len(&self) -> usize {
        self.approved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approved.is_empty()
    }
}
