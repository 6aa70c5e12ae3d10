//! # Key Exchange Module
//!
//! Diffie-Hellman key agreement over Z_q: each party raises the public
//! base to its private exponent, and any two parties derive the same
//! shared key from each other's public values. A third party composes
//! the same operations for the three-party variant.

use crate::errors::ClassicCryptoError;
use crate::ring::{Ring, gcd};

use rand::Rng;

use serde::{Deserialize, Serialize};

/// Public group parameters for key agreement: base `alpha` and modulus `q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupParams {
    pub alpha: i64,
    pub q: i64,
}

impl GroupParams {
    /// Creates group parameters after validating them.
    ///
    /// Requires `q > 2`, `1 < alpha < q` and `gcd(alpha, q) == 1`.
    /// Primality of `q` is not checked.
    pub fn try_with(alpha: i64, q: i64) -> Result<Self, ClassicCryptoError> {
        if q <= 2 {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "Group modulus must be greater than 2, got {}",
                q
            )));
        }
        if alpha <= 1 || alpha >= q {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "Base must satisfy 1 < alpha < q, got alpha={}, q={}",
                alpha, q
            )));
        }
        let g = gcd(alpha, q);
        if g != 1 {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "gcd(alpha, q) = gcd({}, {}) = {} != 1",
                alpha, q, g
            )));
        }

        Ok(GroupParams { alpha, q })
    }

    /// Computes the value a party publishes: `alpha ^ secret mod q`.
    pub fn public_value(&self, secret: i64) -> Result<i64, ClassicCryptoError> {
        self.ring()?.pow(self.alpha, secret)
    }

    /// Derives the shared key `their_public ^ secret mod q`.
    pub fn shared_secret(&self, their_public: i64, secret: i64) -> Result<i64, ClassicCryptoError> {
        self.ring()?.pow(their_public, secret)
    }

    /// Draws a fresh private exponent from `[1, q - 1)`.
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(1..self.q - 1)
    }

    fn ring(&self) -> Result<Ring, ClassicCryptoError> {
        Ring::try_with(self.q as u64)
    }
}

/// One party of a key agreement. Holds the private exponent, so avoid
/// cloning or logging it.
#[derive(Debug)]
pub struct Participant {
    params: GroupParams,
    secret: i64,
    public: i64,
}

impl Participant {
    /// Creates a party from its private exponent, precomputing the value
    /// it publishes.
    pub fn try_with(params: GroupParams, secret: i64) -> Result<Self, ClassicCryptoError> {
        let public = params.public_value(secret)?;

        Ok(Self {
            params,
            secret,
            public,
        })
    }

    /// The value this party publishes.
    pub fn public_value(&self) -> i64 {
        self.public
    }

    /// Derives the key shared with the party that published `their_public`.
    pub fn agree(&self, their_public: i64) -> Result<i64, ClassicCryptoError> {
        self.params.shared_secret(their_public, self.secret)
    }
}
