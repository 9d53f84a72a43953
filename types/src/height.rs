//! Logical clock height used by the rebalance cooldown.
//!
//! Heights are supplied by an external collaborator and are monotonic by
//! the caller's convention; nothing here enforces ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical ledger height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Height(u64);

impl Height {
    /// Height zero (genesis).
    pub const ZERO: Self = Self(0);

    pub fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Heights elapsed since `earlier`, saturating at zero.
    pub fn since(&self, earlier: Height) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
