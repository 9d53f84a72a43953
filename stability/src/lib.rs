//! The stability core — price tracking and the rebalancing state machine.
//!
//! The engine expands or contracts total supply in bounded, deterministic
//! steps to steer the reported market price toward the fixed target.

pub mod engine;
pub mod error;
pub mod price;

pub use engine::{RebalanceAction, RebalanceEngine, RebalanceOutcome};
pub use error::StabilityError;
pub use price::PriceState;
