use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::Engine;

use crate::crc::crc16;
use crate::error::TonError;

const FRIENDLY_LEN: usize = 48;
const FRIENDLY_BYTES: usize = 36;
const HASH_LEN: usize = 32;

const TAG_BOUNCEABLE: u8 = 0x11;
const TAG_NON_BOUNCEABLE: u8 = 0x51;
const TAG_TEST_FLAG: u8 = 0x80;

/// A parsed TON address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TonAddress {
    pub workchain: i32,
    pub hash: [u8; HASH_LEN],
    /// `None` for raw addresses, which carry no flags.
    pub bounceable: Option<bool>,
    pub test_only: bool,
}

/// Parse either a raw or a user-friendly TON address.
pub fn parse_address(address: &str) -> Result<TonAddress, TonError> {
    if address.contains(':') {
        parse_raw(address)
    } else {
        parse_friendly(address)
    }
}

/// Validate a TON address string.
pub fn validate_address(address: &str) -> Result<bool, TonError> {
    parse_address(address).map(|_| true)
}

/// Boolean form of [`validate_address`]; never fails.
pub fn is_valid_address(address: &str) -> bool {
    validate_address(address).unwrap_or(false)
}

fn parse_raw(address: &str) -> Result<TonAddress, TonError> {
    let (wc, hash_hex) = address
        .split_once(':')
        .ok_or_else(|| TonError::InvalidAddress("missing ':' separator".into()))?;

    let workchain: i32 = wc
        .parse()
        .map_err(|_| TonError::InvalidAddress(format!("bad workchain: {wc}")))?;

    if hash_hex.len() != HASH_LEN * 2 {
        return Err(TonError::InvalidAddress(format!(
            "expected {} hex characters, got {}",
            HASH_LEN * 2,
            hash_hex.len()
        )));
    }

    let mut hash = [0u8; HASH_LEN];
    hex::decode_to_slice(hash_hex, &mut hash)
        .map_err(|e| TonError::InvalidAddress(format!("hex decode failed: {e}")))?;

    Ok(TonAddress {
        workchain,
        hash,
        bounceable: None,
        test_only: false,
    })
}

fn parse_friendly(address: &str) -> Result<TonAddress, TonError> {
    if address.len() != FRIENDLY_LEN {
        return Err(TonError::InvalidAddress(format!(
            "expected {FRIENDLY_LEN} characters, got {}",
            address.len()
        )));
    }

    let engine = if address.contains(['-', '_']) {
        &URL_SAFE
    } else {
        &STANDARD
    };
    let bytes = engine
        .decode(address)
        .map_err(|e| TonError::InvalidAddress(format!("base64 decode failed: {e}")))?;

    if bytes.len() != FRIENDLY_BYTES {
        return Err(TonError::InvalidAddress(format!(
            "expected {FRIENDLY_BYTES} bytes, got {}",
            bytes.len()
        )));
    }

    let expected = crc16(&bytes[..34]);
    let actual = u16::from_be_bytes([bytes[34], bytes[35]]);
    if expected != actual {
        return Err(TonError::ChecksumMismatch { expected, actual });
    }

    let mut tag = bytes[0];
    let test_only = tag & TAG_TEST_FLAG != 0;
    if test_only {
        tag ^= TAG_TEST_FLAG;
    }
    let bounceable = match tag {
        TAG_BOUNCEABLE => true,
        TAG_NON_BOUNCEABLE => false,
        other => {
            return Err(TonError::InvalidAddress(format!("unknown tag: {other:#04x}")));
        }
    };

    let mut hash = [0u8; HASH_LEN];
    hash.copy_from_slice(&bytes[2..34]);

    Ok(TonAddress {
        workchain: bytes[1] as i8 as i32,
        hash,
        bounceable: Some(bounceable),
        test_only,
    })
}
