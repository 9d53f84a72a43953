//! Reported market price against the fixed target.
//!
//! The current price is pushed by a trusted oracle and replaced
//! unconditionally; no bounds checking happens here. Direction relative to
//! the target is recovered at call sites, never stored.

use serde::{Deserialize, Serialize};

use keel_types::TARGET_PRICE;

/// Last-reported market price and the fixed target, in micro-units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PriceState {
    current_price: u64,
    target_price: u64,
}

impl PriceState {
    /// A price state pinned to `target_price`; the current price starts at
    /// the target (zero deviation) until the oracle reports.
    pub fn new(target_price: u64) -> Self {
        Self {
            current_price: target_price,
            target_price,
        }
    }

    pub fn current_price(&self) -> u64 {
        self.current_price
    }

    pub fn target_price(&self) -> u64 {
        self.target_price
    }

    /// Replace the current price with the oracle's report.
    pub fn set_price(&mut self, new_price: u64) {
        self.current_price = new_price;
    }

    /// Unsigned magnitude of the deviation from target.
    pub fn deviation(&self) -> u64 {
        self.current_price.abs_diff(self.target_price)
    }

    /// Whether the price sits at or above `target + threshold`.
    ///
    /// Evaluated in u128 so a threshold near `u64::MAX` cannot wrap.
    pub fn is_above_band(&self, threshold: u64) -> bool {
        u128::from(self.current_price) >= u128::from(self.target_price) + u128::from(threshold)
    }

    /// Whether the price sits at or below `target - threshold`.
    ///
    /// False when the threshold exceeds the target: no unsigned price can
    /// sit below zero.
    pub fn is_below_band(&self, threshold: u64) -> bool {
        match self.target_price.checked_sub(threshold) {
            Some(floor) => self.current_price <= floor,
            None => false,
        }
    }
}

/// Default is the protocol target with zero deviation.
impl Default for PriceState {
    fn default() -> Self {
        Self::new(TARGET_PRICE)
    }
}
