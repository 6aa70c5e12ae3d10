//! The hardcoded textbook values the demonstration scenarios run against.
//!
//! Small enough to follow by hand; every derived quantity (n, totient,
//! public exponent, shared keys) is pinned by the theory tests.

/// RSA round-trip scenario: primes, private exponent and message.
pub const ROUND_TRIP_P: i64 = 3;
pub const ROUND_TRIP_Q: i64 = 11;
pub const ROUND_TRIP_D: i64 = 7;
pub const ROUND_TRIP_MESSAGE: i64 = 14;

/// Signature scenario: primes, private exponent and a multi-digit message
/// worth digesting.
pub const SIGNATURE_P: i64 = 7;
pub const SIGNATURE_Q: i64 = 11;
pub const SIGNATURE_D: i64 = 17;
pub const SIGNATURE_MESSAGE: i64 = 947_829;

/// Key-agreement group: public base and modulus.
pub const GROUP_BASE: i64 = 7;
pub const GROUP_MODULUS: i64 = 71;

/// Private exponents of the three key-agreement parties.
pub const SECRET_A: i64 = 5;
pub const SECRET_B: i64 = 12;
pub const SECRET_Z: i64 = 3;
