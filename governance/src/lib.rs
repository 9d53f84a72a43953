//! Governance — the administrator-tunable stability parameters.
//!
//! KEEL has a single trusted administrator rather than a voting process;
//! every parameter update is a direct, validated write.

pub mod admin;
pub mod error;
pub mod params;

pub use admin::{AdminPolicy, SingleAdmin};
pub use error::GovernanceError;
pub use params::StabilityParams;
