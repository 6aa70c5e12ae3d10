//! Implementation of ring ops using modular arithmetic.

use crate::errors::ClassicCryptoError;

use super::extended_gcd;

use serde::{Deserialize, Serialize};

/// Represents a finite ring Z_n using modular arithmetic.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1 and fit in a signed 64-bit
    /// value, since all element arithmetic runs on `i64`.
    pub fn try_with(modulus: u64) -> Result<Self, ClassicCryptoError> {
        if modulus <= 1 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }
        if modulus > i64::MAX as u64 {
            return Err(ClassicCryptoError::InvalidModulus(format!(
                "Modulus must fit in i64, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(33).unwrap();
    /// assert_eq!(ring.modulus(), 33);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        let rem = value % m;
        if rem < 0 {
            return rem + m;
        }

        rem
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally so the intermediate product cannot overflow
    /// before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(-2, 6), 8); // -12 mod 10 = 8
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes `base ^ exponent mod modulus` by right-to-left binary
    /// exponentiation: the base is squared at each bit and multiplied into
    /// the accumulator on odd bits, reducing at every multiplication.
    ///
    /// An exponent of 0 returns 1 regardless of base. A negative exponent
    /// is a disallowed input, not a value error.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NegativeExponent` if `exponent < 0`.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(71).unwrap();
    /// assert_eq!(ring.pow(7, 5).unwrap(), 51);
    /// assert_eq!(ring.pow(7, 0).unwrap(), 1);
    /// assert!(ring.pow(7, -1).is_err());
    /// ```
    pub fn pow(&self, base: i64, exponent: i64) -> Result<i64, ClassicCryptoError> {
        if exponent < 0 {
            return Err(ClassicCryptoError::NegativeExponent(format!(
                "Exponent must be non-negative, got {}",
                exponent
            )));
        }

        let mut result = 1i64;
        let mut square = self.normalize(base);
        let mut remaining = exponent as u64;

        while remaining != 0 {
            if remaining & 1 == 1 {
                result = self.mul(result, square);
            }
            square = self.mul(square, square);
            remaining >>= 1;
        }

        Ok(result)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`. Uses the
    /// extended Euclidean algorithm; a negative coefficient is normalized
    /// into `[0, modulus)`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NoInverse` if the inverse does not
    /// exist (i.e., `gcd(a, modulus) != 1`), or if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(20).unwrap();
    /// assert_eq!(ring.inv(7).unwrap(), 3); // 7 * 3 = 21 = 1 mod 20
    /// assert!(ring.inv(4).is_err()); // gcd(4, 20) = 4
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, ClassicCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(ClassicCryptoError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        let (g, x) = extended_gcd(a_norm, self.modulus as i64);
        if g != 1 {
            return Err(ClassicCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a_norm, self.modulus, g
            )));
        }

        Ok(self.normalize(x))
    }
}
