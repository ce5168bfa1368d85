use crate::chain_id::NumberLike;

/// True when `decimals` reads as exactly 8 or 9.
///
/// Tokens with these precisions get a shorter amount display. Accepts
/// numbers, numeric strings and `Option`s of either; missing or
/// non-numeric input is false.
pub fn is_middle_decimals<T: NumberLike + ?Sized>(decimals: &T) -> bool {
    let d = decimals.to_number();
    d == 8.0 || d == 9.0
}
