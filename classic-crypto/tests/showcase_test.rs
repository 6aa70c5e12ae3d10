use classic_crypto::errors::ClassicCryptoError;
use classic_crypto::keyexchange::GroupParams;
use classic_crypto::preset::textbook;
use classic_crypto::rsa::PrivateKey;

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new("info"))
            .unwrap();
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(false)
            .with_file(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .init();
    });
}

#[test]
fn showcase_rsa_and_key_agreement_flow() -> Result<(), ClassicCryptoError> {
    init_tracing();

    // Full RSA flow on the round-trip preset
    let private_key = PrivateKey::try_with(
        textbook::ROUND_TRIP_P,
        textbook::ROUND_TRIP_Q,
        textbook::ROUND_TRIP_D,
    )?;
    let public_key = private_key.get_public_key()?;

    let cipher = public_key.encrypt(textbook::ROUND_TRIP_MESSAGE)?;
    let recovered = private_key.decrypt(cipher)?;

    dbg!(cipher, recovered);
    assert_eq!(recovered, textbook::ROUND_TRIP_MESSAGE);

    // Key agreement between a fixed party and a freshly drawn secret
    let params = GroupParams::try_with(textbook::GROUP_BASE, textbook::GROUP_MODULUS)?;
    let mut rng = rand::rng();
    let secret = params.random_secret(&mut rng);

    let fixed_public = params.public_value(textbook::SECRET_A)?;
    let fresh_public = params.public_value(secret)?;

    let shared_fresh_side = params.shared_secret(fixed_public, secret)?;
    let shared_fixed_side = params.shared_secret(fresh_public, textbook::SECRET_A)?;

    dbg!(secret, shared_fresh_side, shared_fixed_side);
    assert_eq!(shared_fresh_side, shared_fixed_side);

    Ok(())
}
