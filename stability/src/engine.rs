//! The rebalancing state machine.
//!
//! The engine derives one of three implicit states from data — idle,
//! expansion due, contraction due — and on [`RebalanceEngine::rebalance`]
//! performs a single bounded supply adjustment against the reserve. All
//! arithmetic is unsigned integer floor division: a price deviation is
//! converted to a permille rate, capped by governance, and applied to the
//! current total supply.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use keel_governance::StabilityParams;
use keel_ledger::{Ledger, LedgerError};
use keel_types::{AccountId, Height};

use crate::error::StabilityError;
use crate::price::PriceState;

/// Direction of a completed supply adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebalanceAction {
    Expansion,
    Contraction,
}

/// The result of a successful rebalance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebalanceOutcome {
    pub action: RebalanceAction,
    /// Raw units minted or burned.
    pub amount: u128,
}

/// The rebalancing engine.
///
/// Owns only the last-rebalance height; price, parameters, clock, and
/// ledger are passed in per call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RebalanceEngine {
    last_rebalance_height: Height,
}

impl RebalanceEngine {
    pub fn new() -> Self {
        Self {
            last_rebalance_height: Height::ZERO,
        }
    }

    /// Height of the last successful rebalance.
    pub fn last_rebalance_height(&self) -> Height {
        self.last_rebalance_height
    }

    /// Whether a rebalance is currently due: the cooldown has elapsed and
    /// the price sits outside one of the bands.
    pub fn needs_rebalance(
        &self,
        price: &PriceState,
        params: &StabilityParams,
        height: Height,
    ) -> bool {
        let cooldown_passed =
            height.since(self.last_rebalance_height) >= params.rebalance_cooldown;
        cooldown_passed
            && (price.is_above_band(params.expansion_threshold)
                || price.is_below_band(params.contraction_threshold))
    }

    /// Units to mint for the current above-target deviation:
    /// `floor(supply * min(deviation_permille, max_expansion_rate) / 1000)`.
    pub fn expansion_amount(
        &self,
        price: &PriceState,
        params: &StabilityParams,
        total_supply: u128,
    ) -> Result<u128, LedgerError> {
        let over = u128::from(price.current_price().saturating_sub(price.target_price()));
        capped_adjustment(over, price.target_price(), params.max_expansion_rate, total_supply)
    }

    /// Units to burn for the current below-target deviation; mirrors
    /// [`Self::expansion_amount`] with `max_contraction_rate`.
    pub fn contraction_amount(
        &self,
        price: &PriceState,
        params: &StabilityParams,
        total_supply: u128,
    ) -> Result<u128, LedgerError> {
        let under = u128::from(price.target_price().saturating_sub(price.current_price()));
        capped_adjustment(under, price.target_price(), params.max_contraction_rate, total_supply)
    }

    /// Perform one supply adjustment against `reserve`.
    ///
    /// Expansion mints to the reserve; contraction burns from it, failing
    /// whole (no partial burn) when the reserve cannot cover the amount.
    /// The cooldown height is recorded only after the ledger call
    /// succeeds, so a failed contraction is retried on a later call as
    /// price or reserve change. The high band is tested first, so
    /// expansion wins if both bands somehow match.
    pub fn rebalance(
        &mut self,
        ledger: &mut Ledger,
        reserve: &AccountId,
        price: &PriceState,
        params: &StabilityParams,
        height: Height,
    ) -> Result<RebalanceOutcome, StabilityError> {
        if !self.needs_rebalance(price, params, height) {
            debug!(height = height.value(), "rebalance not due");
            return Err(StabilityError::RebalanceNotDue);
        }

        if price.is_above_band(params.expansion_threshold) {
            let amount = self
                .expansion_amount(price, params, ledger.total_supply())
                .map_err(StabilityError::ExpansionFailed)?;
            ledger
                .mint(reserve, amount)
                .map_err(StabilityError::ExpansionFailed)?;
            self.last_rebalance_height = height;
            info!(
                amount,
                height = height.value(),
                total_supply = ledger.total_supply(),
                "supply expanded"
            );
            Ok(RebalanceOutcome {
                action: RebalanceAction::Expansion,
                amount,
            })
        } else {
            let amount = self
                .contraction_amount(price, params, ledger.total_supply())
                .map_err(StabilityError::ContractionFailed)?;
            ledger
                .burn(reserve, amount)
                .map_err(StabilityError::ContractionFailed)?;
            self.last_rebalance_height = height;
            info!(
                amount,
                height = height.value(),
                total_supply = ledger.total_supply(),
                "supply contracted"
            );
            Ok(RebalanceOutcome {
                action: RebalanceAction::Contraction,
                amount,
            })
        }
    }
}

/// `floor(total_supply * min(deviation * 1000 / target, max_rate) / 1000)`
/// with checked arithmetic throughout.
fn capped_adjustment(
    deviation: u128,
    target: u64,
    max_rate: u128,
    total_supply: u128,
) -> Result<u128, LedgerError> {
    let target = u128::from(target);
    if target == 0 {
        return Err(LedgerError::Overflow);
    }
    let permille = deviation.checked_mul(1000).ok_or(LedgerError::Overflow)? / target;
    let rate = permille.min(max_rate);
    let amount = total_supply.checked_mul(rate).ok_or(LedgerError::Overflow)? / 1000;
    Ok(amount)
}

impl Default for RebalanceEngine {
    fn default() -> Self {
        Self::new()
    }
}
