use thiserror::Error;

use crate::chain_id::ChainId;
use crate::family::ChainFamily;

/// Failure reported by a family's connect trigger.
///
/// Passed through `open_connect_modal` untouched; retrying or surfacing it
/// is up to the caller.
#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("{family} connect rejected: {reason}")]
    Rejected { family: ChainFamily, reason: String },

    #[error("{family} wallet unavailable: {reason}")]
    Unavailable { family: ChainFamily, reason: String },
}

/// Chain id configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("chain id {id} is assigned to both {first} and {second}")]
    OverlappingFamilies {
        id: ChainId,
        first: ChainFamily,
        second: ChainFamily,
    },

    #[error("chain id for {0} must not be empty")]
    EmptyChainId(ChainFamily),
}
