use thiserror::Error;

/// Ethereum chain operation errors.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = EthError::InvalidAddress("bad length".into());
        assert_eq!(err.to_string(), "invalid address: bad length");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(EthError::InvalidAddress("test".into()));
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn debug_format_works() {
        let err = EthError::InvalidAddress("x".into());
        let debug = format!("{:?}", err);
        assert!(debug.contains("InvalidAddress"));
    }
}
