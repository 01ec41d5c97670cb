//! Integer helpers: greatest common divisor, least common multiple, perfect squares, and
//! square-root simplification through prime factorization.

use crate::error::DivisionByZero;
use std::{collections::BTreeMap, fmt::{self, Display, Formatter}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the greatest common divisor of `a` and `b`, computed with the Euclidean algorithm on
/// their absolute values.
///
/// `gcd(0, n) = |n|` and `gcd(0, 0) = 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

/// Returns the least common multiple of `a` and `b`, `|a·b| / gcd(a, b)`.
///
/// Returns [`DivisionByZero`] if both inputs are zero.
pub fn lcm(a: i64, b: i64) -> Result<i64, DivisionByZero> {
    match gcd(a, b) {
        0 => Err(DivisionByZero { divisor: "greatest common divisor" }),
        g => Ok((a / g * b).abs()),
    }
}

/// Returns the integer square root of `n`, the largest `r` such that `r² ≤ n`.
pub fn isqrt(n: u64) -> u64 {
    let mut r = (n as f64).sqrt() as u64;
    while r.checked_mul(r).map_or(true, |sq| sq > n) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= n) {
        r += 1;
    }
    r
}

/// Returns true if `n` is a perfect square. Negative numbers are never perfect squares.
pub fn is_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let r = isqrt(n as u64);
    r * r == n as u64
}

/// Computes the prime factorization of `n`, mapping each prime factor to its exponent.
///
/// `0` and `1` have no prime factors.
pub fn prime_factorization(mut n: u64) -> BTreeMap<u64, u32> {
    let mut factors = BTreeMap::new();
    if n < 2 {
        return factors;
    }

    let mut i = 2;
    while i * i <= n {
        while n % i == 0 {
            *factors.entry(i).or_insert(0) += 1;
            n /= i;
        }
        i += 1;
    }

    if n > 1 {
        *factors.entry(n).or_insert(0) += 1;
    }

    factors
}

/// A square root with an integer coefficient, `outside·√inside`.
///
/// After [`simplify_square_root`], `inside` has no perfect-square factor other than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareRoot {
    /// The coefficient in front of the root.
    pub outside: i64,

    /// The radicand.
    pub inside: u64,
}

impl SquareRoot {
    /// Creates the root `outside·√inside`, without simplifying it.
    pub const fn new(outside: i64, inside: u64) -> Self {
        Self { outside, inside }
    }

    /// Returns true if the root is an integer, that is, if the radicand is 0 or 1.
    pub fn is_integer(&self) -> bool {
        self.inside <= 1
    }

    /// The value of the root.
    pub fn value(&self) -> f64 {
        self.outside as f64 * (self.inside as f64).sqrt()
    }

    /// Extracts every perfect square from the radicand. See [`simplify_square_root`].
    pub fn simplify(&self) -> Self {
        let root = simplify_square_root(self.inside);
        Self::new(self.outside * root.outside, root.inside)
    }
}

impl Display for SquareRoot {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&crate::fmt::format_sqrt(self.outside, self.inside))
    }
}

/// Simplifies `√n` to `outside·√inside`, where `inside` is square-free.
///
/// For each prime factor `p` of `n` with exponent `e`, `p^(e/2)` moves outside the root and
/// `p^(e%2)` stays inside. `√0` is returned as `0·√1`.
pub fn simplify_square_root(n: u64) -> SquareRoot {
    if n == 0 {
        return SquareRoot::new(0, 1);
    }

    prime_factorization(n)
        .into_iter()
        .fold(SquareRoot::new(1, 1), |root, (p, e)| SquareRoot {
            outside: root.outside * (p as i64).pow(e / 2),
            inside: root.inside * p.pow(e % 2),
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn gcd_of_zero() {
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(0, -7), 7);
        assert_eq!(gcd(12, 0), 12);
    }

    #[test]
    fn gcd_ignores_sign() {
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(12, -18), 6);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn lcm_of_zeros() {
        assert!(lcm(0, 0).is_err());
        assert_eq!(lcm(0, 5), Ok(0));
    }

    #[test]
    fn lcm_times_gcd() {
        for a in -20..=20i64 {
            for b in -20..=20i64 {
                if a == 0 || b == 0 {
                    continue;
                }
                assert_eq!(lcm(a, b).unwrap() * gcd(a, b), (a * b).abs(), "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn squares() {
        assert!(is_square(0));
        assert!(is_square(1));
        assert!(is_square(49));
        assert!(!is_square(50));
        assert!(!is_square(-4));
        assert!(is_square(1 << 52));
    }

    #[test]
    fn integer_square_root() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(15), 3);
        assert_eq!(isqrt(16), 4);
        assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn factorization() {
        let factors = prime_factorization(360);
        assert_eq!(factors.into_iter().collect::<Vec<_>>(), vec![(2, 3), (3, 2), (5, 1)]);
        assert!(prime_factorization(1).is_empty());
        assert_eq!(prime_factorization(97).into_iter().collect::<Vec<_>>(), vec![(97, 1)]);
    }

    #[test]
    fn simplify_72() {
        assert_eq!(simplify_square_root(72), SquareRoot::new(6, 2));
    }

    #[test]
    fn simplify_needs_more_than_one_square() {
        // 4·9·2
        assert_eq!(simplify_square_root(72 * 25), SquareRoot::new(30, 2));
        assert_eq!(simplify_square_root(144), SquareRoot::new(12, 1));
        assert_eq!(simplify_square_root(7), SquareRoot::new(1, 7));
        assert_eq!(simplify_square_root(0), SquareRoot::new(0, 1));
    }

    #[test]
    fn simplification_is_idempotent() {
        for n in 1..=500 {
            let root = simplify_square_root(n);
            assert_eq!(simplify_square_root(root.inside), SquareRoot::new(1, root.inside), "n = {}", n);
            assert_eq!(root.outside * root.outside * root.inside as i64, n as i64);
        }
    }
}
