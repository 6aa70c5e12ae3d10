#[derive(thiserror::Error, Debug)]
pub enum ClassicCryptoError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, n) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (n <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when a modular power is requested with a negative exponent.
    #[error("NegativeExponent: {0}")]
    NegativeExponent(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Overflow during calculation")]
    CalculationOverflow,
}
