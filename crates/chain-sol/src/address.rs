//! Solana address validation.
//!
//! The canonical alphabet is the standard Bitcoin Base58 alphabet used by
//! the `bs58` crate. A public key is exactly 32 bytes once decoded.

use crate::error::SolError;

/// Length in bytes of a decoded Solana public key.
pub const PUBKEY_LEN: usize = 32;

/// Decode a Solana address string to its 32-byte representation.
///
/// Returns an error if the address is not valid Base58 or does not decode
/// to exactly 32 bytes.
pub fn address_to_bytes(address: &str) -> Result<[u8; PUBKEY_LEN], SolError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| SolError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: [u8; PUBKEY_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
        SolError::InvalidAddress(format!("expected {PUBKEY_LEN} bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Validate a Solana address string.
///
/// Returns `Ok(true)` if valid, or an error if decoding fails or the length
/// is wrong.
pub fn validate_address(address: &str) -> Result<bool, SolError> {
    if address.is_empty() {
        return Err(SolError::InvalidAddress("empty address".into()));
    }
    address_to_bytes(address).map(|_| true)
}

/// Boolean form of [`validate_address`]; never fails.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).unwrap_or(false)
}
