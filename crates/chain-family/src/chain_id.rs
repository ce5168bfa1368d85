//! Chain identifiers and the loose numeric coercion used to classify them.
//!
//! Identifiers arrive either as plain chain ids (`1`, `42161`) or as named
//! network keys (`"SN_MAIN"`, `"zksync"`). Named keys that happen to look
//! like numbers (`"324"`, `"0x144"`) still count as numeric for the EVM
//! fallback, which is why coercion lives here instead of in `FromStr`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque network identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChainId {
    Numeric(u64),
    Named(String),
}

impl ChainId {
    /// Whether this identifier counts as absent: `0` or the empty string.
    pub fn is_unset(&self) -> bool {
        match self {
            ChainId::Numeric(n) => *n == 0,
            ChainId::Named(s) => s.is_empty(),
        }
    }

    /// Case-insensitive comparison of the textual forms.
    pub fn eq_ignore_case(&self, other: &ChainId) -> bool {
        self.to_string().to_lowercase() == other.to_string().to_lowercase()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainId::Numeric(n) => write!(f, "{n}"),
            ChainId::Named(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ChainId {
    fn from(n: u64) -> Self {
        ChainId::Numeric(n)
    }
}

impl From<&str> for ChainId {
    fn from(s: &str) -> Self {
        ChainId::Named(s.to_string())
    }
}

impl From<String> for ChainId {
    fn from(s: String) -> Self {
        ChainId::Named(s)
    }
}

/// Values that can be read as a number the way loosely typed callers
/// expect: numbers as-is, numeric-looking strings parsed, anything else NaN.
pub trait NumberLike {
    fn to_number(&self) -> f64;
}

impl NumberLike for ChainId {
    fn to_number(&self) -> f64 {
        match self {
            ChainId::Numeric(n) => *n as f64,
            ChainId::Named(s) => coerce_str(s),
        }
    }
}

impl NumberLike for str {
    fn to_number(&self) -> f64 {
        coerce_str(self)
    }
}

impl NumberLike for String {
    fn to_number(&self) -> f64 {
        coerce_str(self)
    }
}

impl<T: NumberLike + ?Sized> NumberLike for &T {
    fn to_number(&self) -> f64 {
        (**self).to_number()
    }
}

impl<T: NumberLike> NumberLike for Option<T> {
    fn to_number(&self) -> f64 {
        self.as_ref().map_or(f64::NAN, NumberLike::to_number)
    }
}

macro_rules! number_like_primitive {
    ($($t:ty),*) => {
        $(impl NumberLike for $t {
            fn to_number(&self) -> f64 {
                *self as f64
            }
        })*
    };
}

number_like_primitive!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

/// Parse a string as a number.
///
/// Surrounding whitespace is ignored and the empty string is `0`. Accepts
/// `0x`/`0o`/`0b` radix prefixes (unsigned only), signed decimal with an
/// optional fraction and exponent, and `Infinity`. Everything else is NaN.
pub fn coerce_str(input: &str) -> f64 {
    let s = input.trim();
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix)
                .map(|n| n as f64)
                .unwrap_or(f64::NAN);
        }
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust also accepts "inf" and "nan" spellings; keep to plain decimals.
    let decimal_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_chars || !s.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// True when the value reads as a number other than `0` or NaN.
pub fn is_truthy_number<T: NumberLike + ?Sized>(value: &T) -> bool {
    let n = value.to_number();
    n != 0.0 && !n.is_nan()
}
