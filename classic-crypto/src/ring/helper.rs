/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Finds (g, x) such that x * a ≡ g (mod b), where |g| = gcd(a, b).
///
/// Iterative extended Euclidean algorithm tracking only the first Bézout
/// coefficient: starting from x0 = 1, x1 = 0, each reduction step
/// (a, b) -> (b, a % b) with quotient q updates the pair via
/// x2 = x0 - q * x1.
///
/// Division truncates toward zero, so for negative inputs the returned g
/// carries the sign of the last non-zero remainder. The congruence
/// x * a ≡ g (mod b) holds for any sign combination; callers needing the
/// canonical non-negative gcd take `g.abs()`.
pub fn extended_gcd(mut a: i64, mut b: i64) -> (i64, i64) {
    let mut x0: i64 = 1;
    let mut x1: i64 = 0;

    while b != 0 {
        let quotient = a / b;
        let remainder = a % b;

        let x2 = x0 - quotient * x1;
        x0 = x1;
        x1 = x2;
        a = b;
        b = remainder;
    }

    (a, x0)
}
