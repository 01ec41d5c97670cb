//! Exact rational arithmetic, and step-by-step operations on fractions.

use crate::{
    error::DivisionByZero,
    fmt::{format_fraction, format_number},
    number::gcd,
    step::{Rule, Step},
    step_collector::StepCollector,
};
use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fraction in lowest terms, with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawFraction"))]
pub struct Fraction {
    num: i64,
    den: i64,
}

/// A deserialized fraction, not yet reduced.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawFraction {
    num: i64,
    den: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFraction> for Fraction {
    type Error = DivisionByZero;

    fn try_from(raw: RawFraction) -> Result<Self, Self::Error> {
        Self::new(raw.num, raw.den)
    }
}

impl Fraction {
    /// The fraction `0/1`.
    pub const ZERO: Self = Self { num: 0, den: 1 };

    /// The fraction `1/1`.
    pub const ONE: Self = Self { num: 1, den: 1 };

    /// Creates the fraction `num/den` in lowest terms.
    pub fn new(num: i64, den: i64) -> Result<Self, DivisionByZero> {
        if den == 0 {
            Err(DivisionByZero::DENOMINATOR)
        } else {
            Ok(Self::reduced(num, den))
        }
    }

    /// Creates the fraction `n/1`.
    pub const fn integer(n: i64) -> Self {
        Self { num: n, den: 1 }
    }

    /// Reduces `num/den`, where `den` is nonzero.
    fn reduced(num: i64, den: i64) -> Self {
        let g = gcd(num, den);
        let sign = den.signum();
        Self { num: sign * num / g, den: sign * den / g }
    }

    /// The numerator, which carries the sign of the fraction.
    pub fn num(&self) -> i64 {
        self.num
    }

    /// The denominator, which is always positive.
    pub fn den(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// The value of the fraction.
    pub fn value(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Returns `den/num`.
    pub fn recip(self) -> Result<Self, DivisionByZero> {
        Self::new(self.den, self.num)
    }

    /// Returns `self / rhs`.
    pub fn checked_div(self, rhs: Self) -> Result<Self, DivisionByZero> {
        Ok(self * rhs.recip()?)
    }

    /// Returns `self / rhs` for an integer `rhs`.
    pub fn div_int(self, rhs: i64) -> Result<Self, DivisionByZero> {
        Self::new(self.num, self.den * rhs)
    }

    /// Formats the fraction as a factor of a product, parenthesizing it if it is not a
    /// nonnegative integer.
    pub fn as_factor(&self) -> String {
        if self.is_integer() && self.num >= 0 {
            self.to_string()
        } else {
            format!("({})", self)
        }
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::integer(n)
    }
}

impl Add for Fraction {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let g = gcd(self.den, rhs.den);
        let den = self.den / g * rhs.den;
        Self::reduced(self.num * (den / self.den) + rhs.num * (den / rhs.den), den)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        // cross-reduce first to keep the products small
        let g1 = gcd(self.num, rhs.den);
        let g2 = gcd(rhs.num, self.den);
        Self::reduced((self.num / g1) * (rhs.num / g2), (self.den / g2) * (rhs.den / g1))
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self {
        Self { num: -self.num, den: self.den }
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.num as i128 * other.den as i128).cmp(&(other.num as i128 * self.den as i128))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

/// An arithmetic operation between two fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "×",
            Self::Div => "÷",
        })
    }
}

/// Formats `num/den` as written, without reducing it.
fn raw((num, den): (i64, i64)) -> String {
    format!("{}/{}", num, den)
}

/// Reports the final reduction of `num/den`.
fn reduce_with_steps(num: i64, den: i64, steps: &mut dyn StepCollector<Step>) -> Result<Fraction, DivisionByZero> {
    let result = Fraction::new(num, den)?;
    let g = gcd(num, den);
    if g > 1 {
        steps.push(Step::new(
            Rule::DivideByGcd { gcd: g },
            format!("{}/{} = {}", num, den, result),
        ));
    } else if den < 0 {
        steps.push(Step::new(Rule::Simplify, format!("{}/{} = {}", num, den, result)));
    }
    Ok(result)
}

/// Adds or subtracts two fractions given as `(num, den)` pairs, over their least common
/// denominator.
fn add_sub(
    lhs: (i64, i64),
    op: Operation,
    rhs: (i64, i64),
    steps: &mut dyn StepCollector<Step>,
) -> Result<Fraction, DivisionByZero> {
    let ((n1, d1), (n2, d2)) = (lhs, rhs);
    if d1 == 0 || d2 == 0 {
        return Err(DivisionByZero::DENOMINATOR);
    }
    let combine = |a: i64, b: i64| if op == Operation::Sub { a - b } else { a + b };

    steps.push(Step::new(Rule::Given, format!("{} {} {}", raw(lhs), op, raw(rhs))));

    let den = if d1 == d2 {
        d1
    } else {
        let g = gcd(d1, d2);
        (d1 / g * d2).abs()
    };
    let (m1, m2) = (den / d1, den / d2);
    let (s1, s2) = (n1 * m1, n2 * m2);

    if d1 != d2 {
        steps.push(Step::new(
            Rule::CommonDenominator { lcm: den },
            format!("lcm({}, {}) = {}", d1, d2, den),
        ));
        steps.push(Step::new(
            Rule::ScaleNumerators,
            format!(
                "({} × {})/({} × {}) {} ({} × {})/({} × {}) = {}/{} {} {}/{}",
                n1, m1, d1, m1, op, n2, m2, d2, m2,
                s1, den, op, s2, den,
            ),
        ));
    }

    let num = combine(s1, s2);
    steps.push(Step::new(
        Rule::CombineNumerators,
        format!("({} {} {})/{} = {}/{}", s1, op, s2, den, num, den),
    ));

    reduce_with_steps(num, den, steps)
}

/// Adds two fractions given as `(num, den)` pairs.
///
/// ```
/// use exo_compute::fraction::{add, Fraction};
///
/// assert_eq!(add((2, 3), (1, 4), &mut ()), Fraction::new(11, 12));
/// ```
pub fn add(lhs: (i64, i64), rhs: (i64, i64), steps: &mut dyn StepCollector<Step>) -> Result<Fraction, DivisionByZero> {
    add_sub(lhs, Operation::Add, rhs, steps)
}

/// Subtracts two fractions given as `(num, den)` pairs.
pub fn subtract(lhs: (i64, i64), rhs: (i64, i64), steps: &mut dyn StepCollector<Step>) -> Result<Fraction, DivisionByZero> {
    add_sub(lhs, Operation::Sub, rhs, steps)
}

/// Multiplies two fractions given as `(num, den)` pairs.
pub fn multiply(lhs: (i64, i64), rhs: (i64, i64), steps: &mut dyn StepCollector<Step>) -> Result<Fraction, DivisionByZero> {
    let ((n1, d1), (n2, d2)) = (lhs, rhs);
    if d1 == 0 || d2 == 0 {
        return Err(DivisionByZero::DENOMINATOR);
    }

    steps.push(Step::new(Rule::Given, format!("{} × {}", raw(lhs), raw(rhs))));
    let (num, den) = (n1 * n2, d1 * d2);
    steps.push(Step::new(
        Rule::MultiplyAcross,
        format!("({} × {})/({} × {}) = {}/{}", n1, n2, d1, d2, num, den),
    ));
    reduce_with_steps(num, den, steps)
}

/// Divides two fractions given as `(num, den)` pairs, by multiplying by the reciprocal of the
/// divisor.
///
/// Returns [`DivisionByZero`] if a denominator is zero or if the divisor is zero.
pub fn divide(lhs: (i64, i64), rhs: (i64, i64), steps: &mut dyn StepCollector<Step>) -> Result<Fraction, DivisionByZero> {
    let ((n1, d1), (n2, d2)) = (lhs, rhs);
    if d1 == 0 || d2 == 0 || n2 == 0 {
        return Err(DivisionByZero::DENOMINATOR);
    }

    steps.push(Step::new(Rule::Given, format!("{} ÷ {}", raw(lhs), raw(rhs))));
    steps.push(Step::new(
        Rule::MultiplyByReciprocal,
        format!("{} × {}", raw(lhs), raw((d2, n2))),
    ));
    let (num, den) = (n1 * d2, d1 * n2);
    steps.push(Step::new(
        Rule::MultiplyAcross,
        format!("({} × {})/({} × {}) = {}/{}", n1, d2, d1, n2, num, den),
    ));
    reduce_with_steps(num, den, steps)
}

/// Reduces the fraction `num/den` to lowest terms.
pub fn simplify(num: i64, den: i64, steps: &mut dyn StepCollector<Step>) -> Result<Fraction, DivisionByZero> {
    if den == 0 {
        return Err(DivisionByZero::DENOMINATOR);
    }

    steps.push(Step::new(Rule::Given, format!("{}/{}", num, den)));
    let g = gcd(num, den);
    if g > 1 {
        steps.push(Step::new(
            Rule::DivideByGcd { gcd: g },
            format!("gcd({}, {}) = {}: ({} ÷ {})/({} ÷ {})", num.abs(), den.abs(), g, num, g, den, g),
        ));
    } else {
        steps.push(Step::new(Rule::Irreducible, format!("gcd({}, {}) = 1", num.abs(), den.abs())));
    }

    let result = Fraction::new(num, den)?;
    steps.push(Step::new(Rule::Simplify, format_fraction(num, den)));
    if !result.is_integer() {
        steps.push(Step::new(Rule::Decimal, format!("{} ≈ {}", result, format_number(result.value()))));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn frac(num: i64, den: i64) -> Fraction {
        Fraction::new(num, den).unwrap()
    }

    #[test]
    fn normalizes_sign_and_terms() {
        assert_eq!(frac(6, -8), frac(-3, 4));
        assert_eq!(frac(-6, -8).num(), 3);
        assert_eq!(frac(-6, -8).den(), 4);
        assert_eq!(frac(0, -5), Fraction::ZERO);
        assert_eq!(Fraction::new(1, 0), Err(DivisionByZero::DENOMINATOR));
    }

    #[test]
    fn add_thirds_and_quarters() {
        let mut steps = Vec::new();
        assert_eq!(add((2, 3), (1, 4), &mut steps), Ok(frac(11, 12)));
        assert_eq!(
            steps.iter().map(|s| s.rule.clone()).collect::<Vec<_>>(),
            vec![
                Rule::Given,
                Rule::CommonDenominator { lcm: 12 },
                Rule::ScaleNumerators,
                Rule::CombineNumerators,
            ],
        );
        assert_eq!(steps[2].expression, "(2 × 4)/(3 × 4) + (1 × 3)/(4 × 3) = 8/12 + 3/12");
    }

    #[test]
    fn same_denominator_skips_lcm() {
        let mut steps = Vec::new();
        assert_eq!(add((1, 6), (3, 6), &mut steps), Ok(frac(2, 3)));
        assert!(!steps.iter().any(|s| matches!(s.rule, Rule::CommonDenominator { .. })));
        assert_eq!(steps.last().unwrap().rule, Rule::DivideByGcd { gcd: 2 });
    }

    #[test]
    fn subtract_below_zero() {
        assert_eq!(subtract((1, 4), (1, 2), &mut ()), Ok(frac(-1, 4)));
    }

    #[test]
    fn multiply_and_divide() {
        assert_eq!(multiply((2, 3), (9, 4), &mut ()), Ok(frac(3, 2)));
        assert_eq!(divide((2, 3), (4, 9), &mut ()), Ok(frac(3, 2)));
        assert_eq!(divide((2, 3), (0, 9), &mut ()), Err(DivisionByZero::DENOMINATOR));
        assert_eq!(multiply((2, 0), (1, 1), &mut ()), Err(DivisionByZero::DENOMINATOR));
    }

    #[test]
    fn simplify_with_gcd() {
        let mut steps = Vec::new();
        assert_eq!(simplify(12, 18, &mut steps), Ok(frac(2, 3)));
        assert_eq!(steps[1].rule, Rule::DivideByGcd { gcd: 6 });
        assert_eq!(steps[2].expression, "2/3");

        let mut steps = Vec::new();
        assert_eq!(simplify(5, 7, &mut steps), Ok(frac(5, 7)));
        assert_eq!(steps[1].rule, Rule::Irreducible);
    }

    #[test]
    fn times_reciprocal_is_one() {
        for num in -12..=12 {
            for den in 1..=12 {
                if num == 0 {
                    continue;
                }
                let f = frac(num, den);
                assert_eq!(f * f.recip().unwrap(), Fraction::ONE);
            }
        }
    }

    #[test]
    fn operators() {
        assert_eq!(frac(1, 2) + frac(1, 3), frac(5, 6));
        assert_eq!(frac(1, 2) - frac(1, 3), frac(1, 6));
        assert_eq!(frac(-2, 3) * frac(3, 4), frac(-1, 2));
        assert_eq!(frac(1, 2).checked_div(Fraction::ZERO), Err(DivisionByZero::DENOMINATOR));
        assert!(frac(1, 3) < frac(1, 2));
        assert!(frac(-1, 2) < Fraction::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(frac(4, 2).to_string(), "2");
        assert_eq!(frac(-3, 9).to_string(), "-1/3");
        assert_eq!(frac(-3, 9).as_factor(), "(-1/3)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_fractions_are_reduced() {
        let f: Fraction = toml::from_str("num = 4\nden = -6\n").unwrap();
        assert_eq!(f, frac(-2, 3));
        assert_eq!((f.num(), f.den()), (-2, 3));

        let err = toml::from_str::<Fraction>("num = 1\nden = 0\n").unwrap_err();
        assert!(err.to_string().contains("the denominator is zero"));
    }
}
