//! Ethereum/EVM chain support for the chain-family resolver.
//!
//! This crate provides the address format check shared by every
//! EVM-compatible network: an optional `0x` prefix followed by exactly
//! 40 hexadecimal characters.

pub mod address;
pub mod error;

pub use address::{is_valid_address, validate_address, ADDRESS_HEX_LEN};
pub use error::EthError;
