//! Token metadata and protocol constants.
//!
//! Amounts are fixed-point integers (u128 raw units) to avoid
//! floating-point error; one whole token is `UNIT` raw units. Prices are
//! quoted in micro-units of the reference currency.

/// Human-readable token name.
pub const TOKEN_NAME: &str = "Keel Dollar";

/// Ticker symbol.
pub const TOKEN_SYMBOL: &str = "KUSD";

/// Number of decimal places: 1 whole token = 10^6 raw units.
pub const TOKEN_DECIMALS: u8 = 6;

/// Raw units per whole token.
pub const UNIT: u128 = 1_000_000;

/// Total supply credited to the reserve at genesis: one million whole
/// tokens.
pub const INITIAL_SUPPLY: u128 = 1_000_000 * UNIT;

/// The fixed price target in micro-units (1_000_000 ≙ $1.00).
pub const TARGET_PRICE: u64 = 1_000_000;
