use thiserror::Error;

/// TON chain operation errors.
#[derive(Debug, Error)]
pub enum TonError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("checksum mismatch: expected {expected:04x}, got {actual:04x}")]
    ChecksumMismatch { expected: u16, actual: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = TonError::InvalidAddress("bad tag".into());
        assert_eq!(err.to_string(), "invalid address: bad tag");
    }

    #[test]
    fn display_checksum_mismatch() {
        let err = TonError::ChecksumMismatch {
            expected: 0x1d8d,
            actual: 0x00ff,
        };
        assert_eq!(err.to_string(), "checksum mismatch: expected 1d8d, got 00ff");
    }
}
