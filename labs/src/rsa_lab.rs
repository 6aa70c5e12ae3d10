//! RSA lab: a round trip through both transform directions, then a
//! hash-then-sign scenario.

use classic_crypto::errors::ClassicCryptoError;
use classic_crypto::hash::digit_hash;
use classic_crypto::preset::textbook;
use classic_crypto::rsa::{self, PrivateKey};

use log::error;

pub fn run() {
    if let Err(e) = round_trip_scenario() {
        error!("RSA round-trip scenario abandoned: {e}");
    }
    println!("\n");
    if let Err(e) = signature_scenario() {
        error!("signature scenario abandoned: {e}");
    }
}

fn round_trip_scenario() -> Result<(), ClassicCryptoError> {
    println!("------------- RSA round trip --------------");

    let p = textbook::ROUND_TRIP_P;
    let q = textbook::ROUND_TRIP_Q;
    let d = textbook::ROUND_TRIP_D;
    let message = textbook::ROUND_TRIP_MESSAGE;

    let private_key = PrivateKey::try_with(p, q, d)?;
    let public_key = private_key.get_public_key()?;
    let n = private_key.modulus;
    let e = public_key.public_exponent;

    println!(
        "p={}, q={}, d={}, M={}, n={}, z={}, e={}",
        p, q, d, message, n, private_key.totient, e
    );

    // Public exponent first, private second
    let c1 = public_key.encrypt(message)?;
    let m1 = private_key.decrypt(c1)?;
    println!("public first: C1={}, M1={}", c1, m1);

    // Private exponent first, public second
    let c2 = rsa::transform(message, d, n)?;
    let m2 = rsa::transform(c2, e, n)?;
    println!("private first: C2={}, M2={}", c2, m2);

    Ok(())
}

fn signature_scenario() -> Result<(), ClassicCryptoError> {
    println!("----------------- signature -----------------");

    let p = textbook::SIGNATURE_P;
    let q = textbook::SIGNATURE_Q;
    let d = textbook::SIGNATURE_D;
    let message = textbook::SIGNATURE_MESSAGE;

    let private_key = PrivateKey::try_with(p, q, d)?;
    let public_key = private_key.get_public_key()?;

    println!(
        "M={}, p={}, q={}, e={}, d={}, n={}, z={}",
        message,
        p,
        q,
        public_key.public_exponent,
        d,
        private_key.modulus,
        private_key.totient
    );

    let digest = digit_hash(message);
    println!("hash={}", digest);

    let signature = private_key.sign(message)?;
    println!("signature={}", signature);

    let recovered = rsa::transform(signature, public_key.public_exponent, public_key.modulus)?;
    println!("recovered={}, hash={}", recovered, digest);
    println!("verified={}", public_key.verify(message, signature)?);

    Ok(())
}
