//! Account identifier with `keel_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A KEEL account identifier, always prefixed with `keel_`.
///
/// The ledger treats this as an opaque unique key; no key material is
/// derived from it here.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// The standard prefix for all KEEL account identifiers.
    pub const PREFIX: &'static str = "keel_";

    /// Create a new account identifier from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `keel_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "account id must start with keel_");
        Self(s)
    }

    /// Return the raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this identifier is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
