use crate::error::EthError;

/// Number of hex characters in an EVM address body (20 bytes).
pub const ADDRESS_HEX_LEN: usize = 40;

/// Validates an EVM address string.
///
/// Accepts an optional lowercase `0x` prefix followed by exactly 40 hex
/// characters. Case is not interpreted: mixed-case input is accepted without
/// an EIP-55 checksum check.
pub fn validate_address(address: &str) -> Result<bool, EthError> {
    let hex_part = address.strip_prefix("0x").unwrap_or(address);

    if hex_part.len() != ADDRESS_HEX_LEN {
        return Err(EthError::InvalidAddress(format!(
            "expected {ADDRESS_HEX_LEN} hex characters, got {}",
            hex_part.len()
        )));
    }

    hex::decode(hex_part)
        .map_err(|e| EthError::InvalidAddress(format!("hex decode failed: {e}")))?;

    Ok(true)
}

/// Boolean form of [`validate_address`]; never fails.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).unwrap_or(false)
}
