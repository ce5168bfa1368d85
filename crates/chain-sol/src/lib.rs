//! Solana chain support for the chain-family resolver.
//!
//! Solana addresses are Base58-encoded 32-byte Ed25519 public keys. This
//! crate is the Solana wallet-SDK validator the resolver delegates to: it
//! only checks that an address decodes to a public key, it never touches
//! keys or the network.

pub mod address;
pub mod error;

pub use address::{address_to_bytes, is_valid_address, validate_address, PUBKEY_LEN};
pub use error::SolError;
