use alloy_primitives::U256;

use crate::error::StarknetError;

/// Number of hex digits in a padded Starknet address.
pub const ADDRESS_HEX_LEN: usize = 64;

/// Exclusive upper bound for contract addresses: `2^251 - 256`.
pub fn address_bound() -> U256 {
    (U256::from(1u64) << 251usize) - U256::from(256u64)
}

/// Parse a Starknet address and return it zero-padded to 64 hex digits.
///
/// `0x`/`0X`-prefixed input is read as hex, anything else as decimal.
/// Fails on empty input, stray characters, overflow, or a value outside
/// `[0, 2^251 - 256)`.
pub fn validate_and_parse_address(address: &str) -> Result<String, StarknetError> {
    let value = parse_felt(address.trim())?;

    if value >= address_bound() {
        return Err(StarknetError::OutOfRange(address.to_string()));
    }

    Ok(to_padded_hex(value))
}

/// Format a felt as `0x` followed by exactly 64 lowercase hex digits.
pub fn to_padded_hex(value: U256) -> String {
    format!("0x{:0>width$}", format!("{value:x}"), width = ADDRESS_HEX_LEN)
}

fn parse_felt(input: &str) -> Result<U256, StarknetError> {
    let (digits, radix) = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (input, 10),
    };

    if digits.is_empty() {
        return Err(StarknetError::InvalidAddress("no digits".into()));
    }
    let well_formed = match radix {
        16 => digits.chars().all(|c| c.is_ascii_hexdigit()),
        _ => digits.chars().all(|c| c.is_ascii_digit()),
    };
    if !well_formed {
        return Err(StarknetError::InvalidAddress(format!(
            "unexpected character in {input}"
        )));
    }

    U256::from_str_radix(digits, radix)
        .map_err(|e| StarknetError::InvalidAddress(format!("{input}: {e}")))
}
