//! The main KEEL node struct — wires the core subsystems together.

use tracing::{debug, info};

use keel_governance::{AdminPolicy, GovernanceError, SingleAdmin, StabilityParams};
use keel_ledger::{genesis_ledger, DelegateSet, GenesisConfig, Ledger, LedgerSnapshot};
use keel_stability::{PriceState, RebalanceAction, RebalanceEngine, RebalanceOutcome};
use keel_types::{AccountId, Height, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};

use crate::clock::LogicalClock;
use crate::config::NodeConfig;
use crate::error::NodeError;
use crate::events::{EventBus, TokenEvent};

/// The KEEL context object.
///
/// Owns every piece of shared state — the balance table, delegate set,
/// stability parameters, price state, rebalance state, and the logical
/// clock — and exposes the public operation surface. State is mutated only
/// through these operations; there are no hidden statics.
pub struct Node {
    ledger: Ledger,
    delegates: DelegateSet,
    params: StabilityParams,
    price: PriceState,
    engine: RebalanceEngine,
    clock: LogicalClock,
    admin: SingleAdmin,
    events: EventBus,
}

impl Node {
    /// Build a node from config: a genesis ledger with the whole initial
    /// supply at the administrator, everything else at its defaults.
    pub fn new(config: NodeConfig) -> Self {
        let genesis = GenesisConfig {
            administrator: config.administrator.clone(),
            initial_supply: config.initial_supply,
        };
        info!(
            administrator = %config.administrator,
            initial_supply = config.initial_supply,
            target_price = config.target_price,
            "initializing node at genesis"
        );
        Self {
            ledger: genesis_ledger(&genesis),
            delegates: DelegateSet::new(),
            params: config.params,
            price: PriceState::new(config.target_price),
            engine: RebalanceEngine::new(),
            clock: LogicalClock::new(),
            admin: SingleAdmin::new(config.administrator),
            events: EventBus::new(),
        }
    }

    // ── Token metadata ───────────────────────────────────────────────────

    pub fn token_name(&self) -> &'static str {
        TOKEN_NAME
    }

    pub fn token_symbol(&self) -> &'static str {
        TOKEN_SYMBOL
    }

    pub fn token_decimals(&self) -> u8 {
        TOKEN_DECIMALS
    }

    // ── Read surface ─────────────────────────────────────────────────────

    pub fn total_supply(&self) -> u128 {
        self.ledger.total_supply()
    }

    pub fn balance_of(&self, account: &AccountId) -> u128 {
        self.ledger.balance_of(account)
    }

    pub fn current_price(&self) -> u64 {
        self.price.current_price()
    }

    pub fn price_deviation(&self) -> u64 {
        self.price.deviation()
    }

    pub fn needs_rebalance(&self) -> bool {
        self.engine
            .needs_rebalance(&self.price, &self.params, self.clock.height())
    }

    pub fn height(&self) -> Height {
        self.clock.height()
    }

    /// The administrator account (also the contraction reserve).
    pub fn administrator(&self) -> &AccountId {
        self.admin.administrator()
    }

    /// Current stability parameters.
    pub fn params(&self) -> &StabilityParams {
        &self.params
    }

    /// Subscribe to token events.
    pub fn subscribe(&mut self, listener: Box<dyn Fn(&TokenEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    /// Capture a verifiable snapshot of all balances at the current height.
    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot::capture(&self.ledger, self.clock.height())
    }

    // ── Transfers ────────────────────────────────────────────────────────

    /// Move `amount` from `from` to `to`; the caller must be `from` or an
    /// approved delegate. Emits a transfer event and, when a memo is
    /// present, a separate memo event.
    pub fn transfer(
        &mut self,
        caller: &AccountId,
        from: &AccountId,
        to: &AccountId,
        amount: u128,
        memo: Option<&str>,
    ) -> Result<(), NodeError> {
        self.ledger
            .transfer(caller, from, to, amount, &self.delegates)?;
        debug!(%from, %to, amount, "transfer applied");
        self.events.emit(&TokenEvent::Transfer {
            from: from.clone(),
            to: to.clone(),
            amount,
        });
        if let Some(memo) = memo {
            self.events.emit(&TokenEvent::Memo {
                from: from.clone(),
                to: to.clone(),
                memo: memo.to_string(),
            });
        }
        Ok(())
    }

    // ── Administrator operations ─────────────────────────────────────────

    fn require_admin(&self, caller: &AccountId) -> Result<(), GovernanceError> {
        if self.admin.is_administrator(caller) {
            Ok(())
        } else {
            Err(GovernanceError::OwnerOnly)
        }
    }

    /// Approve or revoke a transfer delegate.
    pub fn set_approved_delegate(
        &mut self,
        caller: &AccountId,
        delegate: &AccountId,
        approved: bool,
    ) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.delegates.set_approved(delegate, approved);
        info!(%delegate, approved, "delegate approval updated");
        Ok(())
    }

    /// Replace the reported price. No bounds checking: the oracle feed is
    /// trusted as-is.
    pub fn set_price(&mut self, caller: &AccountId, price: u64) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.price.set_price(price);
        debug!(price, "price updated");
        Ok(())
    }

    /// Push a new logical height. Monotonicity is the caller's convention.
    pub fn advance_clock(&mut self, caller: &AccountId, height: Height) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.clock.advance(height);
        Ok(())
    }

    pub fn set_expansion_threshold(
        &mut self,
        caller: &AccountId,
        value: u64,
    ) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.params.set_expansion_threshold(value)?;
        Ok(())
    }

    pub fn set_contraction_threshold(
        &mut self,
        caller: &AccountId,
        value: u64,
    ) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.params.set_contraction_threshold(value)?;
        Ok(())
    }

    pub fn set_max_expansion_rate(
        &mut self,
        caller: &AccountId,
        value: u128,
    ) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.params.set_max_expansion_rate(value)?;
        Ok(())
    }

    pub fn set_max_contraction_rate(
        &mut self,
        caller: &AccountId,
        value: u128,
    ) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.params.set_max_contraction_rate(value)?;
        Ok(())
    }

    pub fn set_cooldown(&mut self, caller: &AccountId, value: u64) -> Result<(), NodeError> {
        self.require_admin(caller)?;
        self.params.set_cooldown(value)?;
        Ok(())
    }

    // ── Rebalancing ──────────────────────────────────────────────────────

    /// Run one step of the stability state machine. Open to any caller;
    /// eligibility is enforced by the engine.
    pub fn rebalance(&mut self) -> Result<RebalanceOutcome, NodeError> {
        let height = self.clock.height();
        let outcome = self.engine.rebalance(
            &mut self.ledger,
            self.admin.administrator(),
            &self.price,
            &self.params,
            height,
        )?;
        match outcome.action {
            RebalanceAction::Expansion => self.events.emit(&TokenEvent::SupplyExpanded {
                amount: outcome.amount,
                height,
            }),
            RebalanceAction::Contraction => self.events.emit(&TokenEvent::SupplyContracted {
                amount: outcome.amount,
                height,
            }),
        }
        Ok(outcome)
    }
}
