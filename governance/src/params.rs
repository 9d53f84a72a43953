//! Stability parameters — thresholds, rate caps, and the rebalance cooldown.
//!
//! Thresholds are price micro-units, rates are permille of total supply per
//! rebalance, and the cooldown counts logical-height units. Setters reject
//! zero but enforce no upper bound: the administrator is trusted.

use serde::{Deserialize, Serialize};

use crate::error::GovernanceError;

/// The governable parameter set consulted by the rebalance engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StabilityParams {
    /// Price must sit at or above `target + expansion_threshold` to expand.
    pub expansion_threshold: u64,

    /// Price must sit at or below `target - contraction_threshold` to
    /// contract.
    pub contraction_threshold: u64,

    /// Cap on a single expansion, in permille of total supply.
    pub max_expansion_rate: u128,

    /// Cap on a single contraction, in permille of total supply.
    pub max_contraction_rate: u128,

    /// Minimum logical heights between two successful rebalances.
    pub rebalance_cooldown: u64,
}

impl StabilityParams {
    /// KEEL defaults — the intended live configuration.
    pub fn keel_defaults() -> Self {
        Self {
            expansion_threshold: 50_000,   // 5% of the 1_000_000 target
            contraction_threshold: 50_000, // 5%
            max_expansion_rate: 100,       // 10% of supply
            max_contraction_rate: 100,     // 10%
            rebalance_cooldown: 144,       // ~one day of 10-minute heights
        }
    }

    pub fn set_expansion_threshold(&mut self, value: u64) -> Result<(), GovernanceError> {
        if value == 0 {
            return Err(GovernanceError::ZeroExpansionThreshold);
        }
        self.expansion_threshold = value;
        Ok(())
    }

    pub fn set_contraction_threshold(&mut self, value: u64) -> Result<(), GovernanceError> {
        if value == 0 {
            return Err(GovernanceError::ZeroContractionThreshold);
        }
        self.contraction_threshold = value;
        Ok(())
    }

    pub fn set_max_expansion_rate(&mut self, value: u128) -> Result<(), GovernanceError> {
        if value == 0 {
            return Err(GovernanceError::ZeroMaxExpansionRate);
        }
        self.max_expansion_rate = value;
        Ok(())
    }

    pub fn set_max_contraction_rate(&mut self, value: u128) -> Result<(), GovernanceError> {
        if value == 0 {
            return Err(GovernanceError::ZeroMaxContractionRate);
        }
        self.max_contraction_rate = value;
        Ok(())
    }

    pub fn set_cooldown(&mut self, value: u64) -> Result<(), GovernanceError> {
        if value == 0 {
            return Err(GovernanceError::ZeroCooldown);
        }
        self.rebalance_cooldown = value;
        Ok(())
    }
}

/// Default is the KEEL live configuration.
impl Default for StabilityParams {
    fn default() -> Self {
        Self::keel_defaults()
    }
}
