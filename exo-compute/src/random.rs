//! Bounded random sampling of integers and coefficients.
//!
//! Every function takes the random number generator as a parameter, so callers can use a seeded
//! generator to reproduce an exercise.

use crate::error::{EmptyPool, InvalidRange};
use log::trace;
use rand::{seq::SliceRandom, Rng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The probability with which [`CoefRange::sample`] negates a value when negative values are
/// allowed.
pub const NEGATION_PROBABILITY: f64 = 0.3;

/// Returns a uniformly distributed integer in `[min, max]`. The bounds may be given in any
/// order.
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min.min(max)..=min.max(max))
}

/// Returns a uniformly chosen element of `pool`.
pub fn choose<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    pool: &'a [T],
    name: &'static str,
) -> Result<&'a T, EmptyPool> {
    pool.choose(rng).ok_or(EmptyPool { name })
}

/// The range and sign constraints of a random coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoefRange {
    /// Lower bound, inclusive.
    pub min: i64,

    /// Upper bound, inclusive.
    pub max: i64,

    /// Whether a sampled value may be negated.
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_negative: bool,

    /// Whether zero must be rejected.
    #[cfg_attr(feature = "serde", serde(default = "default_avoid_zero"))]
    pub avoid_zero: bool,
}

#[cfg(feature = "serde")]
fn default_avoid_zero() -> bool {
    true
}

impl CoefRange {
    /// A range of positive, nonzero coefficients.
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max, allow_negative: false, avoid_zero: true }
    }

    /// Allows the sampled value to be negated.
    pub const fn signed(mut self) -> Self {
        self.allow_negative = true;
        self
    }

    /// Allows the sampled value to be zero.
    pub const fn with_zero(mut self) -> Self {
        self.avoid_zero = false;
        self
    }

    /// Checks that the range can produce at least one acceptable value.
    pub fn validate(&self) -> Result<(), InvalidRange> {
        let empty = self.min > self.max;
        let only_zero = self.avoid_zero && self.min == 0 && self.max == 0;
        if empty || only_zero {
            Err(InvalidRange { min: self.min, max: self.max })
        } else {
            Ok(())
        }
    }

    /// Samples an integer in `[min, max]`, negates it with probability
    /// [`NEGATION_PROBABILITY`] if negative values are allowed, and samples again while the
    /// result is zero and zero is to be avoided.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64, InvalidRange> {
        self.validate()?;
        loop {
            let mut value = rng.gen_range(self.min..=self.max);
            if self.allow_negative && rng.gen_bool(NEGATION_PROBABILITY) {
                value = -value;
            }

            if !self.avoid_zero || value != 0 {
                return Ok(value);
            }
            trace!("rejected zero coefficient from [{}, {}]", self.min, self.max);
        }
    }
}

/// Samples a coefficient, see [`CoefRange::sample`].
pub fn rand_coef<R: Rng + ?Sized>(
    rng: &mut R,
    min: i64,
    max: i64,
    allow_negative: bool,
    avoid_zero: bool,
) -> Result<i64, InvalidRange> {
    CoefRange { min, max, allow_negative, avoid_zero }.sample(rng)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn rand_int_is_inclusive() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let n = rand_int(&mut rng, 1, 3);
            assert!((1..=3).contains(&n));
            seen[(n - 1) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn rand_int_accepts_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert!((-2..=5).contains(&rand_int(&mut rng, 5, -2)));
        }
    }

    #[test]
    fn coefficients_avoid_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let range = CoefRange::new(-10, 10);
        for _ in 0..500 {
            assert_ne!(range.sample(&mut rng).unwrap(), 0);
        }
    }

    #[test]
    fn positive_range_is_negated_sometimes() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = CoefRange::new(1, 10).signed();
        let values = (0..500).map(|_| range.sample(&mut rng).unwrap()).collect::<Vec<_>>();
        assert!(values.iter().any(|&v| v < 0));
        assert!(values.iter().any(|&v| v > 0));
        assert!(values.iter().all(|&v| (1..=10).contains(&v.abs())));
    }

    #[test]
    fn unsigned_range_stays_positive() {
        let mut rng = StdRng::seed_from_u64(3);
        let range = CoefRange::new(1, 5);
        assert!((0..200).all(|_| range.sample(&mut rng).unwrap() > 0));
    }

    #[test]
    fn zero_only_range_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(CoefRange::new(0, 0).sample(&mut rng), Err(InvalidRange { min: 0, max: 0 }));
        assert_eq!(CoefRange::new(0, 0).with_zero().sample(&mut rng), Ok(0));
        assert!(CoefRange::new(4, 2).validate().is_err());
    }

    #[test]
    fn choose_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [u64; 0] = [];
        assert_eq!(choose(&mut rng, &empty, "radicands"), Err(EmptyPool { name: "radicands" }));
        assert_eq!(choose(&mut rng, &[5], "radicands"), Ok(&5));
    }
}
