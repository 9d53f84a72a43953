//! The balance ledger — one balance table plus the total-supply scalar.

use std::collections::HashMap;

use keel_types::AccountId;

use crate::delegates::DelegateSet;
use crate::error::LedgerError;

/// The account-balance ledger.
///
/// Balances are raw token units (u128). Every mutating call either fully
/// applies or fails without touching any entry, and maintains
/// `sum(balances) == total_supply`.
#[derive(Clone, Debug, Default)]
pub struct Ledger {
    balances: HashMap<AccountId, u128>,
    total_supply: u128,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current total supply.
    pub fn total_supply(&self) -> u128 {
        self.total_supply
    }

    /// Balance of an account; 0 for accounts with no recorded entry.
    pub fn balance_of(&self, account: &AccountId) -> u128 {
        self.balances.get(account).copied().unwrap_or(0)
    }

    /// Number of accounts with a recorded entry.
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    /// Iterate recorded (account, balance) entries.
    pub fn accounts(&self) -> impl Iterator<Item = (&AccountId, u128)> {
        self.balances.iter().map(|(account, balance)| (account, *balance))
    }

    /// Move `amount` from `from` to `to`. Total supply is unchanged.
    ///
    /// The caller must be `from` itself or an approved delegate; this is
    /// checked before any balance is read.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
        delegates: &DelegateSet,
    ) -> Result<(), LedgerError> {
        if caller != from && !delegates.is_approved(caller) {
            return Err(LedgerError::NotAuthorized);
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        // Self-transfer debits and credits the same entry; nothing to move.
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(from.clone(), available - amount);
        self.balances.insert(to.clone(), credited);
        Ok(())
    }

    /// Create `amount` of new supply and credit it to `to`.
    pub fn mint(&mut self, to: &AccountId, amount: u128) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        let credited = self
            .balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(to.clone(), credited);
        Ok(())
    }

    /// Destroy `amount` of supply held by `from`.
    pub fn burn(&mut self, from: &AccountId, amount: u128) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientReserve {
                needed: amount,
                available,
            });
        }
        let supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(from.clone(), available - amount);
        self.total_supply = supply;
        Ok(())
    }

    /// Verify the conservation invariant: the balance sum equals the
    /// recorded total supply.
    pub fn is_consistent(&self) -> bool {
        let mut sum: u128 = 0;
        for balance in self.balances.values() {
            sum = match sum.checked_add(*balance) {
                Some(s) => s,
                None => return false,
            };
        }
        sum == self.total_supply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account(n: u8) -> AccountId {
        AccountId::new(format!("keel_{:0>60}", n))
    }

    fn funded_ledger(owner: &AccountId, amount: u128) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.mint(owner, amount).unwrap();
        ledger
    }

    #[test]
    fn test_balance_of_unknown_account_is_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance_of(&test_account(1)), 0);
    }

    #[test]
    fn test_mint_credits_and_grows_supply() {
        let a = test_account(1);
        let mut ledger = Ledger::new();
        ledger.mint(&a, 1000).unwrap();

        assert_eq!(ledger.balance_of(&a), 1000);
        assert_eq!(ledger.total_supply(), 1000);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_burn_debits_and_shrinks_supply() {
        let a = test_account(1);
        let mut ledger = funded_ledger(&a, 1000);

        ledger.burn(&a, 400).unwrap();
        assert_eq!(ledger.balance_of(&a), 600);
        assert_eq!(ledger.total_supply(), 600);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_burn_more_than_balance_fails_with_reserve_error() {
        let a = test_account(1);
        let mut ledger = funded_ledger(&a, 300);

        let result = ledger.burn(&a, 500);
        match result.unwrap_err() {
            LedgerError::InsufficientReserve { needed, available } => {
                assert_eq!(needed, 500);
                assert_eq!(available, 300);
            }
            other => panic!("expected InsufficientReserve, got {other:?}"),
        }
        assert_eq!(ledger.balance_of(&a), 300);
        assert_eq!(ledger.total_supply(), 300);
    }

    #[test]
    fn test_transfer_moves_balance_and_keeps_supply() {
        let a = test_account(1);
        let b = test_account(2);
        let mut ledger = funded_ledger(&a, 1000);
        let delegates = DelegateSet::new();

        ledger.transfer(&a, &a, &b, 600, &delegates).unwrap();
        assert_eq!(ledger.balance_of(&a), 400);
        assert_eq!(ledger.balance_of(&b), 600);
        assert_eq!(ledger.total_supply(), 1000);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_transfer_insufficient_balance_leaves_state_unchanged() {
        let a = test_account(1);
        let b = test_account(2);
        let mut ledger = funded_ledger(&a, 100);
        let delegates = DelegateSet::new();

        let result = ledger.transfer(&a, &a, &b, 500, &delegates);
        match result.unwrap_err() {
            LedgerError::InsufficientBalance { needed, available } => {
                assert_eq!(needed, 500);
                assert_eq!(available, 100);
            }
            other => panic!("expected InsufficientBalance, got {other:?}"),
        }
        assert_eq!(ledger.balance_of(&a), 100);
        assert_eq!(ledger.balance_of(&b), 0);
    }

    #[test]
    fn test_transfer_by_stranger_is_not_authorized() {
        let a = test_account(1);
        let b = test_account(2);
        let mallory = test_account(3);
        let mut ledger = funded_ledger(&a, 1000);
        let delegates = DelegateSet::new();

        let result = ledger.transfer(&mallory, &a, &b, 100, &delegates);
        assert!(matches!(result.unwrap_err(), LedgerError::NotAuthorized));
        assert_eq!(ledger.balance_of(&a), 1000);
    }

    #[test]
    fn test_transfer_by_approved_delegate_succeeds() {
        let a = test_account(1);
        let b = test_account(2);
        let delegate = test_account(3);
        let mut ledger = funded_ledger(&a, 1000);
        let mut delegates = DelegateSet::new();
        delegates.set_approved(&delegate, true);

        ledger.transfer(&delegate, &a, &b, 250, &delegates).unwrap();
        assert_eq!(ledger.balance_of(&a), 750);
        assert_eq!(ledger.balance_of(&b), 250);
    }

    #[test]
    fn test_self_transfer_is_a_checked_noop() {
        let a = test_account(1);
        let mut ledger = funded_ledger(&a, 1000);
        let delegates = DelegateSet::new();

        ledger.transfer(&a, &a, &a, 400, &delegates).unwrap();
        assert_eq!(ledger.balance_of(&a), 1000);
        assert_eq!(ledger.total_supply(), 1000);

        // The balance precondition still applies.
        let result = ledger.transfer(&a, &a, &a, 2000, &delegates);
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InsufficientBalance { .. }
        ));
    }

    #[test]
    fn test_zero_amount_operations_are_valid() {
        let a = test_account(1);
        let b = test_account(2);
        let mut ledger = funded_ledger(&a, 100);
        let delegates = DelegateSet::new();

        ledger.transfer(&a, &a, &b, 0, &delegates).unwrap();
        ledger.mint(&b, 0).unwrap();
        ledger.burn(&a, 0).unwrap();
        assert_eq!(ledger.total_supply(), 100);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_mint_overflow_is_rejected_without_partial_effect() {
        let a = test_account(1);
        let mut ledger = funded_ledger(&a, u128::MAX);

        let result = ledger.mint(&a, 1);
        assert!(matches!(result.unwrap_err(), LedgerError::Overflow));
        assert_eq!(ledger.total_supply(), u128::MAX);
        assert!(ledger.is_consistent());
    }

    #[test]
    fn test_conservation_across_mixed_operations() {
        let a = test_account(1);
        let b = test_account(2);
        let mut ledger = funded_ledger(&a, 10_000);
        let delegates = DelegateSet::new();

        ledger.transfer(&a, &a, &b, 2_500, &delegates).unwrap();
        ledger.mint(&a, 1_000).unwrap();
        ledger.burn(&b, 500).unwrap();
        ledger.transfer(&b, &b, &a, 1_000, &delegates).unwrap();

        assert_eq!(ledger.total_supply(), 10_500);
        assert_eq!(
            ledger.balance_of(&a) + ledger.balance_of(&b),
            ledger.total_supply()
        );
        assert!(ledger.is_consistent());
    }
}
