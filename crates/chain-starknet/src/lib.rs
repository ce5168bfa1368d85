//! Starknet chain support for the chain-family resolver.
//!
//! A Starknet contract address is a field element below `2^251 - 256`.
//! [`validate_and_parse_address`] accepts hex (`0x`-prefixed) or decimal
//! input and returns the canonical 64-digit, zero-padded hex form.

pub mod address;
pub mod error;

pub use address::{address_bound, to_padded_hex, validate_and_parse_address, ADDRESS_HEX_LEN};
pub use error::StarknetError;
