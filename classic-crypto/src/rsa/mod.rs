//! # RSA Module
//!
//! Textbook RSA over small integers: key material derived from two primes
//! and a chosen private exponent, plus the symmetric modular-power
//! transform both directions share.

pub mod keys;

use crate::errors::ClassicCryptoError;
use crate::ring::Ring;

pub use keys::{PrivateKey, PublicKey};

/// Euler's totient specialized to a two-prime modulus: `(p - 1) * (q - 1)`.
///
/// Primality of `p` and `q` is the caller's responsibility; nothing here
/// validates it.
///
/// # Example
///
/// ```
/// # use classic_crypto::rsa::totient;
/// assert_eq!(totient(7, 11).unwrap(), 60);
/// ```
pub fn totient(p: i64, q: i64) -> Result<i64, ClassicCryptoError> {
    let p1 = p.checked_sub(1).ok_or(ClassicCryptoError::CalculationOverflow)?;
    let q1 = q.checked_sub(1).ok_or(ClassicCryptoError::CalculationOverflow)?;

    p1.checked_mul(q1)
        .ok_or(ClassicCryptoError::CalculationOverflow)
}

/// The RSA transform: `message ^ key mod modulus`.
///
/// Textbook RSA encryption and decryption are the same operation with
/// different exponents, so this is used symmetrically for both
/// directions.
pub fn transform(message: i64, key: i64, modulus: i64) -> Result<i64, ClassicCryptoError> {
    if modulus <= 1 {
        return Err(ClassicCryptoError::InvalidModulus(format!(
            "Modulus must be greater than 1, got {}",
            modulus
        )));
    }

    Ring::try_with(modulus as u64)?.pow(message, key)
}
