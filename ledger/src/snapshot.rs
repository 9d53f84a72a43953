//! Ledger snapshots — capture every balance at a point in time.
//!
//! The snapshot hash is computed deterministically from the entries so a
//! consumer can verify integrity after the bytes cross a trust boundary.

use serde::{Deserialize, Serialize};

use keel_types::{AccountId, Height};

use crate::ledger::Ledger;

/// A ledger snapshot — all balances plus the supply scalar at a height.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Blake2b-256 of the serialized entries.
    pub hash: [u8; 32],
    /// Logical height at which the snapshot was taken.
    pub height: Height,
    /// Account entries, sorted by account id for determinism.
    pub accounts: Vec<AccountSnapshot>,
    /// Total supply at snapshot time.
    pub total_supply: u128,
    /// Snapshot version for compatibility.
    pub version: u32,
}

/// The state of a single account captured in a snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub account: AccountId,
    pub balance: u128,
}

impl LedgerSnapshot {
    /// Capture the current ledger state at `height`.
    pub fn capture(ledger: &Ledger, height: Height) -> Self {
        let mut accounts: Vec<AccountSnapshot> = ledger
            .accounts()
            .map(|(account, balance)| AccountSnapshot {
                account: account.clone(),
                balance,
            })
            .collect();
        accounts.sort_by(|a, b| a.account.as_str().cmp(b.account.as_str()));

        let mut snap = Self {
            hash: [0u8; 32],
            height,
            accounts,
            total_supply: ledger.total_supply(),
            version: 1,
        };
        snap.hash = snap.compute_hash();
        snap
    }

    /// Compute the Blake2b-256 hash of this snapshot deterministically.
    fn compute_hash(&self) -> [u8; 32] {
        use blake2::digest::consts::U32;
        use blake2::{Blake2b, Digest};

        let mut hasher = Blake2b::<U32>::new();
        for entry in &self.accounts {
            hasher.update(entry.account.as_str().as_bytes());
            hasher.update(entry.balance.to_le_bytes());
        }
        hasher.update(self.total_supply.to_le_bytes());
        hasher.update(self.height.value().to_le_bytes());

        let result = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&result);
        out
    }

    /// Verify the snapshot hash matches the entries.
    pub fn verify(&self) -> bool {
        self.hash == self.compute_hash()
    }

    /// Serialize the snapshot to bytes (bincode).
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("snapshot serialization should not fail")
    }

    /// Deserialize a snapshot from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    /// Number of accounts in this snapshot.
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delegates::DelegateSet;

    fn test_account(n: u8) -> AccountId {
        AccountId::new(format!("keel_{:0>60}", n))
    }

    fn sample_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.mint(&test_account(1), 700).unwrap();
        ledger.mint(&test_account(2), 300).unwrap();
        ledger
    }

    #[test]
    fn test_capture_and_verify() {
        let snap = LedgerSnapshot::capture(&sample_ledger(), Height::new(100));

        assert!(snap.verify());
        assert_eq!(snap.height, Height::new(100));
        assert_eq!(snap.total_supply, 1000);
        assert_eq!(snap.account_count(), 2);
        assert_eq!(snap.version, 1);
    }

    #[test]
    fn test_tampered_snapshot_fails_verify() {
        let mut snap = LedgerSnapshot::capture(&sample_ledger(), Height::new(42));
        assert!(snap.verify());

        snap.total_supply = 999;
        assert!(!snap.verify());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let snap = LedgerSnapshot::capture(&sample_ledger(), Height::new(50));

        let bytes = snap.to_bytes();
        let restored = LedgerSnapshot::from_bytes(&bytes).expect("deserialization failed");

        assert_eq!(restored.hash, snap.hash);
        assert_eq!(restored.height, snap.height);
        assert_eq!(restored.account_count(), snap.account_count());
        assert!(restored.verify());
    }

    #[test]
    fn test_empty_ledger_snapshot() {
        let snap = LedgerSnapshot::capture(&Ledger::new(), Height::ZERO);
        assert!(snap.verify());
        assert_eq!(snap.account_count(), 0);
        assert_eq!(snap.total_supply, 0);
    }

    #[test]
    fn test_hash_is_insensitive_to_insertion_order() {
        let mut forward = Ledger::new();
        forward.mint(&test_account(1), 700).unwrap();
        forward.mint(&test_account(2), 300).unwrap();

        let mut reverse = Ledger::new();
        reverse.mint(&test_account(2), 300).unwrap();
        reverse.mint(&test_account(1), 700).unwrap();

        let a = LedgerSnapshot::capture(&forward, Height::new(7));
        let b = LedgerSnapshot::capture(&reverse, Height::new(7));
        assert_eq!(a.hash, b.hash);
    }

    #[test]
    fn test_hash_tracks_balance_changes() {
        let mut ledger = sample_ledger();
        let before = LedgerSnapshot::capture(&ledger, Height::new(7));

        let delegates = DelegateSet::new();
        ledger
            .transfer(&test_account(1), &test_account(1), &test_account(2), 100, &delegates)
            .unwrap();
        let after = LedgerSnapshot::capture(&ledger, Height::new(7));

        assert_ne!(before.hash, after.hash);
        assert_eq!(before.total_supply, after.total_supply);
    }
}
