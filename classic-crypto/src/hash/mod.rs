//! Toy digit-folding digest used by the signature scenario.
//!
//! Not remotely collision resistant; it exists so signing has something
//! message-shaped to compress into the tiny modulus.

/// Capacity of the digit buffer; an `i64` has at most 19 decimal digits.
const MAX_DIGITS: usize = 19;

/// Folds the decimal digits of `value` into a single small digest.
///
/// Digits are collected right-to-left into a fixed buffer, with zero
/// digits replaced by 1 so they never collapse the product. The fold then
/// walks left-to-right: multiply the accumulator (starting at 1) by the
/// next digit and keep the last decimal digit of the product, unless that
/// digit is 0, in which case the leading digit(s) of the product are kept
/// instead.
///
/// Values below 10 (including negatives) are returned unchanged.
///
/// # Example
///
/// ```
/// # use classic_crypto::hash::digit_hash;
/// assert_eq!(digit_hash(947829), 8);
/// assert_eq!(digit_hash(7), 7);
/// ```
pub fn digit_hash(value: i64) -> i64 {
    if value < 10 {
        return value;
    }

    let mut digits = [0i64; MAX_DIGITS];
    let mut start = MAX_DIGITS;
    let mut rest = value;
    while rest > 0 {
        start -= 1;
        let digit = rest % 10;
        digits[start] = if digit == 0 { 1 } else { digit };
        rest /= 10;
    }

    let mut result = 1;
    for &digit in &digits[start..] {
        result *= digit;

        let leading = result / 10;
        let last = result % 10;
        result = if last == 0 { leading } else { last };
    }

    result
}
