use thiserror::Error;

/// Starknet chain operation errors.
#[derive(Debug, Error)]
pub enum StarknetError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("address out of range: {0}")]
    OutOfRange(String),
}
