use proptest::prelude::*;

use keel_ledger::{genesis_ledger, DelegateSet, GenesisConfig, Ledger, LedgerSnapshot};
use keel_types::{AccountId, Height};

fn account(n: u8) -> AccountId {
    AccountId::new(format!("keel_{:0>60}", n))
}

#[derive(Clone, Debug)]
enum Op {
    Transfer { from: u8, to: u8, amount: u128 },
    Mint { to: u8, amount: u128 },
    Burn { from: u8, amount: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, 0u8..4, 0u128..2_000)
            .prop_map(|(from, to, amount)| Op::Transfer { from, to, amount }),
        (0u8..4, 0u128..2_000).prop_map(|(to, amount)| Op::Mint { to, amount }),
        (0u8..4, 0u128..2_000).prop_map(|(from, amount)| Op::Burn { from, amount }),
    ]
}

proptest! {
    /// Conservation: sum(balances) == total_supply after every call,
    /// whether the call succeeds or fails.
    #[test]
    fn conservation_holds_over_arbitrary_sequences(
        ops in prop::collection::vec(op_strategy(), 1..64)
    ) {
        let admin = account(0);
        let mut ledger = genesis_ledger(&GenesisConfig {
            administrator: admin,
            initial_supply: 10_000,
        });
        let delegates = DelegateSet::new();

        for op in ops {
            match op {
                Op::Transfer { from, to, amount } => {
                    let _ = ledger.transfer(
                        &account(from),
                        &account(from),
                        &account(to),
                        amount,
                        &delegates,
                    );
                }
                Op::Mint { to, amount } => {
                    let _ = ledger.mint(&account(to), amount);
                }
                Op::Burn { from, amount } => {
                    let _ = ledger.burn(&account(from), amount);
                }
            }
            prop_assert!(ledger.is_consistent());
        }
    }

    /// A transfer that would overdraw the sender leaves both balances
    /// untouched.
    #[test]
    fn failed_transfer_is_atomic(
        balance in 0u128..1_000,
        excess in 1u128..10_000,
    ) {
        let a = account(1);
        let b = account(2);
        let mut ledger = Ledger::new();
        ledger.mint(&a, balance).unwrap();
        let delegates = DelegateSet::new();

        let amount = balance + excess;
        prop_assert!(ledger.transfer(&a, &a, &b, amount, &delegates).is_err());
        prop_assert_eq!(ledger.balance_of(&a), balance);
        prop_assert_eq!(ledger.balance_of(&b), 0);
        prop_assert!(ledger.is_consistent());
    }

    /// An unauthorized caller can never move funds, whatever the amounts.
    #[test]
    fn stranger_can_never_move_funds(
        balance in 0u128..100_000,
        amount in 0u128..100_000,
    ) {
        let owner = account(1);
        let receiver = account(2);
        let mallory = account(3);
        let mut ledger = Ledger::new();
        ledger.mint(&owner, balance).unwrap();
        let delegates = DelegateSet::new();

        prop_assert!(ledger
            .transfer(&mallory, &owner, &receiver, amount, &delegates)
            .is_err());
        prop_assert_eq!(ledger.balance_of(&owner), balance);
        prop_assert_eq!(ledger.balance_of(&receiver), 0);
    }

    /// Snapshots round-trip through bincode and still verify.
    #[test]
    fn snapshot_roundtrip(
        balances in prop::collection::vec(0u128..1_000_000, 0..8),
        height in any::<u64>(),
    ) {
        let mut ledger = Ledger::new();
        for (i, balance) in balances.iter().enumerate() {
            ledger.mint(&account(i as u8), *balance).unwrap();
        }

        let snap = LedgerSnapshot::capture(&ledger, Height::new(height));
        prop_assert!(snap.verify());

        let restored = LedgerSnapshot::from_bytes(&snap.to_bytes()).unwrap();
        prop_assert!(restored.verify());
        prop_assert_eq!(restored.total_supply, ledger.total_supply());
    }
}
