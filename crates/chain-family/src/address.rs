use tracing::trace;

use crate::family::ChainFamily;

/// Starknet inputs this short are rejected before the parser runs.
const STARKNET_MIN_LEN: usize = 50;

/// Number of hex characters in a Fuel address body (32 bytes).
const FUEL_HEX_LEN: usize = 64;

/// Validate an address for a given family.
///
/// Total: delegated parse errors are traced and reported as `false`.
pub fn validate_address(address: &str, family: ChainFamily) -> bool {
    let valid = match family {
        ChainFamily::Evm => chain_eth::address::validate_address(address)
            .map_err(|e| e.to_string()),
        ChainFamily::Solana => chain_sol::address::validate_address(address)
            .map_err(|e| e.to_string()),
        ChainFamily::Ton => chain_ton::address::validate_address(address)
            .map_err(|e| e.to_string()),
        ChainFamily::Starknet => validate_starknet_address(address),
        ChainFamily::Fuel => validate_fuel_address(address),
        // No format rule exists for these yet; every address passes.
        ChainFamily::Fractal | ChainFamily::Aptos => Ok(true),
    };

    match valid {
        Ok(v) => v,
        Err(reason) => {
            trace!(%family, address, %reason, "address rejected");
            false
        }
    }
}

/// Optional `0x` prefix followed by exactly 64 hex characters.
///
/// Same shape as an EVM address but twice as long; a 40-character EVM
/// address is not a Fuel address.
pub fn validate_fuel_address(address: &str) -> Result<bool, String> {
    let hex_part = address.strip_prefix("0x").unwrap_or(address);
    if hex_part.len() != FUEL_HEX_LEN {
        return Err(format!(
            "expected {FUEL_HEX_LEN} hex characters, got {}",
            hex_part.len()
        ));
    }
    hex::decode(hex_part).map_err(|e| format!("hex decode failed: {e}"))?;
    Ok(true)
}

/// Length pre-filter, then the Starknet parser.
pub fn validate_starknet_address(address: &str) -> Result<bool, String> {
    if address.len() <= STARKNET_MIN_LEN {
        return Err(format!("shorter than {} characters", STARKNET_MIN_LEN + 1));
    }
    chain_starknet::validate_and_parse_address(address)
        .map(|_| true)
        .map_err(|e| e.to_string())
}
