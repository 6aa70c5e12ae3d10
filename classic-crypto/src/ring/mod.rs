//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing the finite ring Z_n and
//! performing modular arithmetic, plus the gcd helpers behind modular
//! inversion.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
