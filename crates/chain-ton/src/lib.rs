//! TON (The Open Network) chain support for the chain-family resolver.
//!
//! Two textual address forms are accepted:
//! - raw: `<workchain>:<64 hex chars>`, e.g. `0:83df...31a8`
//! - user-friendly: 48 characters of base64 or base64url wrapping
//!   `tag | workchain | hash[32] | crc16`
//!
//! This is the TON wallet-SDK validator the resolver delegates to.

pub mod address;
pub mod crc;
pub mod error;

pub use address::{is_valid_address, parse_address, validate_address, TonAddress};
pub use error::TonError;
