//! Key-agreement lab: pairwise Diffie-Hellman, then the three-party
//! variant where both outer parties also agree with a middle party.
#![allow(non_snake_case)] // Xa/Ya naming follows the textbook

use classic_crypto::errors::ClassicCryptoError;
use classic_crypto::keyexchange::{GroupParams, Participant};
use classic_crypto::preset::textbook;

use log::error;

pub fn run() {
    if let Err(e) = two_party_scenario() {
        error!("two-party key-agreement scenario abandoned: {e}");
    }
    println!("\n");
    if let Err(e) = three_party_scenario() {
        error!("three-party key-agreement scenario abandoned: {e}");
    }
}

fn two_party_scenario() -> Result<(), ClassicCryptoError> {
    println!("---------- two-party key agreement -----------");

    let params = GroupParams::try_with(textbook::GROUP_BASE, textbook::GROUP_MODULUS)?;
    println!(
        "alpha={}, q={}, Xa={}, Xb={}",
        params.alpha,
        params.q,
        textbook::SECRET_A,
        textbook::SECRET_B
    );

    let alice = Participant::try_with(params, textbook::SECRET_A)?;
    let bob = Participant::try_with(params, textbook::SECRET_B)?;

    let Ya = alice.public_value();
    let Yb = bob.public_value();
    println!("Ya={}, Yb={}", Ya, Yb);

    let Ka = alice.agree(Yb)?;
    let Kb = bob.agree(Ya)?;
    println!("Ka = Kb, {} = {}", Ka, Kb);

    Ok(())
}

fn three_party_scenario() -> Result<(), ClassicCryptoError> {
    println!("---------- three-party key agreement -----------");

    let params = GroupParams::try_with(textbook::GROUP_BASE, textbook::GROUP_MODULUS)?;
    println!(
        "alpha={}, q={}, Xa={}, Xb={}, Xz={}",
        params.alpha,
        params.q,
        textbook::SECRET_A,
        textbook::SECRET_B,
        textbook::SECRET_Z
    );

    let alice = Participant::try_with(params, textbook::SECRET_A)?;
    let bob = Participant::try_with(params, textbook::SECRET_B)?;
    let zed = Participant::try_with(params, textbook::SECRET_Z)?;

    let Ya = alice.public_value();
    let Yb = bob.public_value();
    let Yz = zed.public_value();
    println!("Ya={}, Yb={}, Yz={}", Ya, Yb, Yz);

    let Ka = alice.agree(Yz)?;
    let Kza = zed.agree(Ya)?;
    println!("Ka = Kza, {} = {}", Ka, Kza);

    let Kb = bob.agree(Yz)?;
    let Kzb = zed.agree(Yb)?;
    println!("Kb = Kzb, {} = {}", Kb, Kzb);

    Ok(())
}
