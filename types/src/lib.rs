//! Fundamental types for the KEEL protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account identifiers, the logical clock height, and the token
//! metadata constants.

pub mod address;
pub mod height;
pub mod token;

pub use address::AccountId;
pub use height::Height;
pub use token::{
    INITIAL_SUPPLY, TARGET_PRICE, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL, UNIT,
};
