use crate::errors::ClassicCryptoError;
use crate::hash::digit_hash;
use crate::ring::Ring;
use crate::rsa::{totient, transform};

use serde::{Deserialize, Serialize};

/// RSA private key material derived from two primes and a chosen private
/// exponent. Keeps the totient so the matching public exponent can be
/// derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivateKey {
    pub modulus: i64,
    pub private_exponent: i64,
    pub totient: i64,
}

/// The public half: modulus and public exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub modulus: i64,
    pub public_exponent: i64,
}

impl PrivateKey {
    /// Derives key material from primes `p`, `q` and private exponent `d`.
    ///
    /// Validates up front that `d` is invertible modulo `(p - 1)(q - 1)`,
    /// so a missing inverse surfaces here and nowhere else.
    ///
    /// # Errors
    ///
    /// Returns [`ClassicCryptoError::NoInverse`] when
    /// `gcd(d, (p - 1)(q - 1)) != 1`. This is the one recoverable failure
    /// of the whole scheme; callers are expected to report it and move on
    /// to their next scenario.
    pub fn try_with(p: i64, q: i64, d: i64) -> Result<Self, ClassicCryptoError> {
        if p < 2 || q < 2 {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "Prime factors must be greater than 1, got p={}, q={}",
                p, q
            )));
        }

        let modulus = p
            .checked_mul(q)
            .ok_or(ClassicCryptoError::CalculationOverflow)?;
        let z = totient(p, q)?;

        Ring::try_with(z as u64)?.inv(d)?;

        Ok(Self {
            modulus,
            private_exponent: d,
            totient: z,
        })
    }

    /// Derives the public key: `e = d^-1 mod (p - 1)(q - 1)`.
    pub fn get_public_key(&self) -> Result<PublicKey, ClassicCryptoError> {
        let e = Ring::try_with(self.totient as u64)?.inv(self.private_exponent)?;

        Ok(PublicKey {
            modulus: self.modulus,
            public_exponent: e,
        })
    }

    /// Applies the private transform: `ciphertext ^ d mod n`.
    pub fn decrypt(&self, ciphertext: i64) -> Result<i64, ClassicCryptoError> {
        transform(ciphertext, self.private_exponent, self.modulus)
    }

    /// Signs a message by digesting it with [`digit_hash`] and applying
    /// the private transform to the digest.
    pub fn sign(&self, message: i64) -> Result<i64, ClassicCryptoError> {
        transform(digit_hash(message), self.private_exponent, self.modulus)
    }
}

impl PublicKey {
    /// Applies the public transform: `message ^ e mod n`.
    pub fn encrypt(&self, message: i64) -> Result<i64, ClassicCryptoError> {
        transform(message, self.public_exponent, self.modulus)
    }

    /// Verifies a signature by recovering the digest with the public
    /// transform and comparing it against a fresh digest of the message.
    pub fn verify(&self, message: i64, signature: i64) -> Result<bool, ClassicCryptoError> {
        let recovered = transform(signature, self.public_exponent, self.modulus)?;

        Ok(recovered == digit_hash(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation() -> Result<(), ClassicCryptoError> {
        let private_key = PrivateKey::try_with(3, 11, 7)?;
        assert_eq!(private_key.modulus, 33);
        assert_eq!(private_key.totient, 20);

        let public_key = private_key.get_public_key()?;
        assert_eq!(public_key.modulus, 33);
        assert_eq!(public_key.public_exponent, 3);
        Ok(())
    }

    #[test]
    fn test_key_derivation_fails_without_inverse() {
        // gcd(5, 20) != 1, so no public exponent exists for d=5
        assert!(matches!(
            PrivateKey::try_with(3, 11, 5),
            Err(ClassicCryptoError::NoInverse(_))
        ));
    }

    #[test]
    fn test_key_derivation_rejects_tiny_factors() {
        assert!(PrivateKey::try_with(1, 11, 7).is_err());
        assert!(PrivateKey::try_with(3, 0, 7).is_err());
        assert!(PrivateKey::try_with(-3, 11, 7).is_err());
    }

    #[test]
    fn test_encrypt_decrypt_round_trip() -> Result<(), ClassicCryptoError> {
        let private_key = PrivateKey::try_with(3, 11, 7)?;
        let public_key = private_key.get_public_key()?;

        let cipher = public_key.encrypt(14)?;
        assert_eq!(cipher, 5);
        assert_eq!(private_key.decrypt(cipher)?, 14);
        Ok(())
    }

    #[test]
    fn test_sign_verify_round_trip() -> Result<(), ClassicCryptoError> {
        let private_key = PrivateKey::try_with(7, 11, 17)?;
        let public_key = private_key.get_public_key()?;
        assert_eq!(public_key.public_exponent, 53);

        let signature = private_key.sign(947_829)?;
        assert!(public_key.verify(947_829, signature)?);
        assert!(!public_key.verify(12, signature)?);
        Ok(())
    }
}
