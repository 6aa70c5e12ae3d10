//! Runs the two demonstration labs in sequence, RSA transforms first and
//! Diffie-Hellman key agreement second, printing every intermediate value
//! as `key=value` lines. Always exits 0; a failed scenario only logs.

mod key_exchange_lab;
mod rsa_lab;

fn main() {
    env_logger::init();

    rsa_lab::run();
    println!("\n");
    key_exchange_lab::run();
}
