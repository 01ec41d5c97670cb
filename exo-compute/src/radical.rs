//! Square roots: simplification, sums, products and rationalization of denominators.

pub use crate::number::{simplify_square_root, SquareRoot};

use crate::{
    error::{DivisionByZero, Overflow},
    fmt::{format_sqrt, format_term},
    number::gcd,
    step::{Rule, Step},
    step_collector::StepCollector,
};
use exo_error::Error;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Formats a root as a later term of a sum, such as ` + 3√2` or ` - √5`.
fn signed_sqrt(coef: i64, radicand: u64) -> String {
    let magnitude = format_sqrt(coef.abs(), radicand);
    if coef < 0 {
        format!(" - {}", magnitude)
    } else {
        format!(" + {}", magnitude)
    }
}

/// Formats `coef·√radicand + constant`.
fn binomial_text(coef: i64, radicand: u64, constant: i64) -> String {
    match (coef, constant) {
        (0, constant) => constant.to_string(),
        (coef, 0) => format_sqrt(coef, radicand),
        (coef, constant) => format!("{}{}", format_sqrt(coef, radicand), format_term(constant, "", false)),
    }
}

/// Describes the extraction of perfect squares from `√n`, such as `√(36 × 2) = 6√2`. Returns
/// [`None`] if there is nothing to extract.
fn extraction_text(n: u64, root: SquareRoot) -> Option<String> {
    match (root.outside, root.inside) {
        (1, _) => None,
        (_, 1) => Some(format!("√{} = {}", n, root.outside)),
        (outside, inside) => Some(format!("√({} × {}) = {}", outside * outside, inside, root)),
    }
}

/// Simplifies `√n`.
pub fn simplify(n: u64, steps: &mut dyn StepCollector<Step>) -> SquareRoot {
    steps.push(Step::new(Rule::Given, format!("√{}", n)));
    let root = simplify_square_root(n);
    match extraction_text(n, root) {
        Some(text) => steps.push(Step::new(Rule::ExtractSquares, text)),
        None => steps.push(Step::new(Rule::Irreducible, root.to_string())),
    }
    root
}

/// The result of adding two roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RadicalSum {
    /// The roots had the same radicand after simplification and were combined.
    Like(SquareRoot),

    /// The radicands differ, so the sum cannot be reduced further.
    Unlike(SquareRoot, SquareRoot),
}

impl Display for RadicalSum {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Like(root) => write!(f, "{}", root),
            Self::Unlike(lhs, rhs) => write!(f, "{}{}", lhs, signed_sqrt(rhs.outside, rhs.inside)),
        }
    }
}

/// Adds `p√r + q√s`. Subtraction is expressed with a negative `q`.
///
/// Both roots are simplified first; they are combined only if their radicands are then equal.
pub fn combine(p: i64, r: u64, q: i64, s: u64, steps: &mut dyn StepCollector<Step>) -> RadicalSum {
    steps.push(Step::new(Rule::Given, format!("{}{}", format_sqrt(p, r), signed_sqrt(q, s))));

    let lhs = SquareRoot::new(p, r).simplify();
    let rhs = SquareRoot::new(q, s).simplify();
    if lhs != SquareRoot::new(p, r) || rhs != SquareRoot::new(q, s) {
        steps.push(Step::new(Rule::ExtractSquares, format!("{}{}", lhs, signed_sqrt(rhs.outside, rhs.inside))));
    }

    if lhs.inside != rhs.inside {
        return RadicalSum::Unlike(lhs, rhs);
    }

    let coef = lhs.outside + rhs.outside;
    let sum = if coef == 0 { SquareRoot::new(0, 1) } else { SquareRoot::new(coef, lhs.inside) };
    let grouped = format!("{}{}", lhs.outside, format_term(rhs.outside, "", false));
    let text = if lhs.inside == 1 {
        format!("{} = {}", grouped, sum)
    } else {
        format!("({})√{} = {}", grouped, lhs.inside, sum)
    };
    steps.push(Step::new(Rule::CombineLikeRadicals, text));
    RadicalSum::Like(sum)
}

/// Multiplies `√a × √b` and simplifies the product.
pub fn product(a: u64, b: u64, steps: &mut dyn StepCollector<Step>) -> SquareRoot {
    steps.push(Step::new(Rule::Given, format!("√{} × √{}", a, b)));
    let n = a * b;
    steps.push(Step::new(Rule::RadicalProduct, format!("√({} × {}) = √{}", a, b, n)));

    let root = simplify_square_root(n);
    if let Some(text) = extraction_text(n, root) {
        steps.push(Step::new(Rule::ExtractSquares, text));
    }
    root
}

/// A quotient `numerator / denominator` whose denominator is an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadicalQuotient {
    pub numerator: SquareRoot,

    /// Always positive.
    pub denominator: i64,
}

impl RadicalQuotient {
    pub fn value(&self) -> f64 {
        self.numerator.value() / self.denominator as f64
    }
}

impl Display for RadicalQuotient {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// Rationalizes `k/√n` into `k√n / n`, simplifying the root and the quotient.
pub fn rationalize(k: i64, n: u64, steps: &mut dyn StepCollector<Step>) -> Result<RadicalQuotient, DivisionByZero> {
    if n == 0 {
        return Err(DivisionByZero::DENOMINATOR);
    }

    steps.push(Step::new(Rule::Given, format!("{}/√{}", k, n)));
    let root = simplify_square_root(n);
    let root_text = if root.outside != 1 && root.inside != 1 {
        format!("({})", root)
    } else {
        root.to_string()
    };
    if root.outside != 1 {
        steps.push(Step::new(Rule::ExtractSquares, format!("{}/{}", k, root_text)));
    }

    let (numerator, denominator) = if root.inside == 1 {
        (SquareRoot::new(k, 1), root.outside)
    } else {
        let denominator = root.outside * root.inside as i64;
        let text = format!(
            "({} × √{})/({} × √{}) = {}/{}",
            k,
            root.inside,
            root_text,
            root.inside,
            format_sqrt(k, root.inside),
            denominator,
        );
        steps.push(Step::new(Rule::MultiplyByRadical, text));
        (SquareRoot::new(k, root.inside), denominator)
    };

    let g = gcd(numerator.outside, denominator).max(1);
    let quotient = RadicalQuotient {
        numerator: SquareRoot::new(numerator.outside / g, numerator.inside),
        denominator: denominator / g,
    };
    if g > 1 {
        steps.push(Step::new(Rule::DivideByGcd { gcd: g }, quotient.to_string()));
    }
    Ok(quotient)
}

/// The quotient `(radical·√radicand + constant) / denominator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConjugateQuotient {
    pub radical: i64,
    pub radicand: u64,
    pub constant: i64,

    /// Always positive.
    pub denominator: i64,
}

impl ConjugateQuotient {
    pub fn value(&self) -> f64 {
        (self.radical as f64 * (self.radicand as f64).sqrt() + self.constant as f64) / self.denominator as f64
    }
}

impl Display for ConjugateQuotient {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let numerator = binomial_text(self.radical, self.radicand, self.constant);
        match (self.denominator, self.radical == 0 || self.constant == 0) {
            (1, _) => write!(f, "{}", numerator),
            (den, true) => write!(f, "{}/{}", numerator, den),
            (den, false) => write!(f, "({})/{}", numerator, den),
        }
    }
}

/// Rationalizes `k/(√a + b)` by multiplying by the conjugate `√a - b`, which gives
/// `k(√a - b) / (a - b²)`.
///
/// The sign is moved to the numerator, perfect squares are taken out of `√a`, and the quotient is
/// reduced by the common divisor of its three integers. Fails with [`DivisionByZero`] if `a = b²`,
/// or with [`Overflow`] if an intermediate value does not fit in an `i64`.
pub fn rationalize_conjugate(
    k: i64,
    a: u64,
    b: i64,
    steps: &mut dyn StepCollector<Step>,
) -> Result<ConjugateQuotient, Error> {
    let overflow = |quantity| Error::new(Vec::new(), Overflow { quantity });
    let denominator = i64::try_from(a)
        .ok()
        .zip(b.checked_mul(b))
        .and_then(|(a, b_squared)| a.checked_sub(b_squared))
        .ok_or_else(|| overflow("denominator"))?;
    if denominator == 0 {
        return Err(Error::new(Vec::new(), DivisionByZero::DENOMINATOR));
    }

    steps.push(Step::new(Rule::Given, format!("{}/(√{}{})", k, a, format_term(b, "", false))));
    steps.push(Step::new(
        Rule::MultiplyByConjugate,
        format!(
            "{} × (√{}{})/((√{})² - {}²)",
            k,
            a,
            format_term(-b, "", false),
            a,
            b.unsigned_abs(),
        ),
    ));

    let sign = denominator.signum();
    let radical = k.checked_mul(sign).ok_or_else(|| overflow("numerator"))?;
    let constant = k
        .checked_mul(b)
        .and_then(|kb| kb.checked_mul(-sign))
        .ok_or_else(|| overflow("numerator"))?;
    let raw = ConjugateQuotient { radical, radicand: a, constant, denominator: sign * denominator };
    steps.push(Step::new(Rule::Simplify, raw.to_string()));

    let root = simplify_square_root(a);
    let extracted = if root.outside == 1 {
        raw
    } else {
        let radical = radical.checked_mul(root.outside).ok_or_else(|| overflow("numerator"))?;
        let extracted = if root.inside == 1 {
            let constant = constant.checked_add(radical).ok_or_else(|| overflow("numerator"))?;
            ConjugateQuotient { radical: 0, radicand: 1, constant, ..raw }
        } else {
            ConjugateQuotient { radical, radicand: root.inside, ..raw }
        };
        steps.push(Step::new(Rule::ExtractSquares, extracted.to_string()));
        extracted
    };

    let g = gcd(gcd(extracted.radical, extracted.constant), extracted.denominator).max(1);
    if g == 1 {
        return Ok(extracted);
    }

    let reduced = ConjugateQuotient {
        radical: extracted.radical / g,
        radicand: extracted.radicand,
        constant: extracted.constant / g,
        denominator: extracted.denominator / g,
    };
    steps.push(Step::new(Rule::DivideByGcd { gcd: g }, reduced.to_string()));
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    fn expressions(steps: &[Step]) -> Vec<&str> {
        steps.iter().map(|s| s.expression.as_str()).collect()
    }

    #[test]
    fn simplify_steps() {
        let mut steps = Vec::new();
        assert_eq!(simplify(72, &mut steps), SquareRoot::new(6, 2));
        assert_eq!(expressions(&steps), vec!["√72", "√(36 × 2) = 6√2"]);

        let mut steps = Vec::new();
        assert_eq!(simplify(15, &mut steps), SquareRoot::new(1, 15));
        assert_eq!(steps[1].rule, Rule::Irreducible);

        assert_eq!(simplify(49, &mut ()), SquareRoot::new(7, 1));
    }

    #[test]
    fn combine_like() {
        let mut steps = Vec::new();
        let sum = combine(1, 8, 1, 18, &mut steps);
        assert_eq!(sum, RadicalSum::Like(SquareRoot::new(5, 2)));
        assert_eq!(expressions(&steps), vec!["√8 + √18", "2√2 + 3√2", "(2 + 3)√2 = 5√2"]);

        let difference = combine(1, 8, -1, 18, &mut ());
        assert_eq!(difference.to_string(), "-√2");
    }

    #[test]
    fn combine_to_zero() {
        assert_eq!(combine(3, 12, -2, 27, &mut ()), RadicalSum::Like(SquareRoot::new(0, 1)));
    }

    #[test]
    fn combine_unlike() {
        let sum = combine(1, 2, -1, 3, &mut ());
        assert_eq!(sum, RadicalSum::Unlike(SquareRoot::new(1, 2), SquareRoot::new(-1, 3)));
        assert_eq!(sum.to_string(), "√2 - √3");
    }

    #[test]
    fn product_steps() {
        let mut steps = Vec::new();
        assert_eq!(product(6, 12, &mut steps), SquareRoot::new(6, 2));
        assert_eq!(expressions(&steps), vec!["√6 × √12", "√(6 × 12) = √72", "√(36 × 2) = 6√2"]);
    }

    #[test]
    fn rationalize_simple() {
        let quotient = rationalize(1, 2, &mut ()).unwrap();
        assert_eq!(quotient.to_string(), "√2/2");
        assert_abs_diff_eq!(quotient.value(), 1.0 / 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn rationalize_with_extraction() {
        let mut steps = Vec::new();
        let quotient = rationalize(3, 12, &mut steps).unwrap();
        assert_eq!(quotient, RadicalQuotient { numerator: SquareRoot::new(1, 3), denominator: 2 });
        assert_eq!(
            expressions(&steps),
            vec!["3/√12", "3/(2√3)", "(3 × √3)/((2√3) × √3) = 3√3/6", "√3/2"],
        );
    }

    #[test]
    fn rationalize_zero() {
        assert_eq!(rationalize(1, 0, &mut ()), Err(DivisionByZero::DENOMINATOR));
    }

    #[test]
    fn conjugate() {
        let mut steps = Vec::new();
        let quotient = rationalize_conjugate(2, 3, 1, &mut steps).unwrap();
        assert_eq!(quotient, ConjugateQuotient { radical: 1, radicand: 3, constant: -1, denominator: 1 });
        assert_eq!(quotient.to_string(), "√3 - 1");
        assert_eq!(steps[2].expression, "(2√3 - 2)/2");
        assert_eq!(steps[3].rule, Rule::DivideByGcd { gcd: 2 });
    }

    #[test]
    fn conjugate_negative_denominator() {
        let quotient = rationalize_conjugate(1, 2, -3, &mut ()).unwrap();
        assert_eq!(quotient.to_string(), "(-√2 - 3)/7");
        assert_abs_diff_eq!(quotient.value(), 1.0 / (2f64.sqrt() - 3.0), epsilon = 1e-12);
    }

    #[test]
    fn conjugate_zero_denominator() {
        let err = rationalize_conjugate(1, 4, 2, &mut ()).unwrap_err();
        assert_eq!(err.downcast_ref::<DivisionByZero>(), Some(&DivisionByZero::DENOMINATOR));
    }

    #[test]
    fn conjugate_extracts_squares() {
        let mut steps = Vec::new();
        let quotient = rationalize_conjugate(1, 8, 1, &mut steps).unwrap();
        assert_eq!(quotient, ConjugateQuotient { radical: 2, radicand: 2, constant: -1, denominator: 7 });
        assert_eq!(
            expressions(&steps),
            vec!["1/(√8 + 1)", "1 × (√8 - 1)/((√8)² - 1²)", "(√8 - 1)/7", "(2√2 - 1)/7"],
        );
        assert_eq!(steps[3].rule, Rule::ExtractSquares);

        let quotient = rationalize_conjugate(2, 12, 2, &mut ()).unwrap();
        assert_eq!(quotient.to_string(), "(√3 - 1)/2");
        assert_abs_diff_eq!(quotient.value(), 2.0 / (12f64.sqrt() + 2.0), epsilon = 1e-12);
    }

    #[test]
    fn conjugate_of_perfect_square() {
        let quotient = rationalize_conjugate(1, 9, 1, &mut ()).unwrap();
        assert_eq!(quotient.to_string(), "1/4");
        assert_abs_diff_eq!(quotient.value(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn conjugate_overflow() {
        let err = rationalize_conjugate(1, u64::MAX, 1, &mut ()).unwrap_err();
        assert_eq!(err.downcast_ref::<Overflow>(), Some(&Overflow { quantity: "denominator" }));

        let err = rationalize_conjugate(i64::MAX, 2, 3, &mut ()).unwrap_err();
        assert!(err.is::<Overflow>());
    }
}
