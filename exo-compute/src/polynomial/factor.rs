//! Factoring with a common factor and with the binomial identities.

use super::{expand, squared_text, Poly};
use crate::{
    error::NotFactorable,
    fmt::{format_coef_var, format_sum},
    number::{gcd, is_square, isqrt},
    step::{Rule, Step},
    step_collector::StepCollector,
};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A factoring identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Identity {
    CommonFactor,
    DifferenceOfSquares,
    PerfectSquare,
}

impl Identity {
    /// The general form of the identity.
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::CommonFactor => "ka + kb = k(a + b)",
            Self::DifferenceOfSquares => "a² - b² = (a + b)(a - b)",
            Self::PerfectSquare => "a² ± 2ab + b² = (a ± b)²",
        }
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::CommonFactor => "product with a common factor",
            Self::DifferenceOfSquares => "difference of squares",
            Self::PerfectSquare => "perfect square",
        })
    }
}

/// An expression to factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Factorable {
    /// `ax + b`, factored by `gcd(a, b)`.
    CommonFactor { a: i64, b: i64 },

    /// `lead·x² + constant`, factored as a difference of squares.
    DifferenceOfSquares { lead: i64, constant: i64 },

    /// `ax² + bx + c`, factored as a perfect square.
    PerfectSquare { a: i64, b: i64, c: i64 },
}

impl Factorable {
    /// The expanded polynomial.
    pub fn poly(&self) -> Poly {
        match *self {
            Self::CommonFactor { a, b } => Poly::linear(a, b),
            Self::DifferenceOfSquares { lead, constant } => Poly::new(lead, 0, constant),
            Self::PerfectSquare { a, b, c } => Poly::new(a, b, c),
        }
    }
}

impl Display for Factorable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.poly())
    }
}

/// A factored expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Factorization {
    /// `factor·(inner_a·x + inner_b)`
    CommonFactor { factor: i64, inner_a: i64, inner_b: i64 },

    /// `(a·x + b)(a·x - b)`
    DifferenceOfSquares { a: i64, b: i64 },

    /// `(a·x + b)²`, where `b` carries the sign.
    PerfectSquare { a: i64, b: i64 },
}

impl Factorization {
    /// Expands the factored expression back.
    pub fn expand(&self) -> Poly {
        match *self {
            Self::CommonFactor { factor, inner_a, inner_b } => expand::distribute(factor, inner_a, inner_b),
            Self::DifferenceOfSquares { a, b } => expand::difference_of_squares(a, b),
            Self::PerfectSquare { a, b } => expand::square_of_sum(a, b),
        }
    }
}

impl Display for Factorization {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Self::CommonFactor { factor, inner_a, inner_b } => {
                write!(f, "{}({})", factor, format_sum(&[(inner_a, "x"), (inner_b, "")]))
            },
            Self::DifferenceOfSquares { a, b } => write!(
                f,
                "({})({})",
                format_sum(&[(a, "x"), (b, "")]),
                format_sum(&[(a, "x"), (-b, "")]),
            ),
            Self::PerfectSquare { a, b } => write!(f, "({})²", format_sum(&[(a, "x"), (b, "")])),
        }
    }
}

/// Factors `ax + b` as `g(a/g·x + b/g)` with `g = gcd(a, b)`.
///
/// ```
/// use exo_compute::polynomial::factor::{factor_common, Factorization};
///
/// assert_eq!(
///     factor_common(6, 9, &mut ()),
///     Ok(Factorization::CommonFactor { factor: 3, inner_a: 2, inner_b: 3 }),
/// );
/// ```
///
/// Returns [`NotFactorable`] if both coefficients are zero.
pub fn factor_common(a: i64, b: i64, steps: &mut dyn StepCollector<Step>) -> Result<Factorization, NotFactorable> {
    let g = gcd(a, b);
    if g == 0 {
        return Err(NotFactorable { identity: Identity::CommonFactor });
    }

    steps.push(Step::new(Rule::Given, Poly::linear(a, b).to_string()));
    let (inner_a, inner_b) = (a / g, b / g);
    let sign = if inner_b < 0 { " - " } else { " + " };
    steps.push(Step::new(
        Rule::CommonFactor { factor: g },
        format!("{} × {}{}{} × {}", g, format_coef_var(inner_a, "x"), sign, g, inner_b.abs()),
    ));

    let result = Factorization::CommonFactor { factor: g, inner_a, inner_b };
    steps.push(Step::new(Rule::Simplify, result.to_string()));
    Ok(result)
}

/// Factors `lead·x² + constant` as `(ax + b)(ax - b)`.
///
/// Returns [`NotFactorable`] unless `lead` and `-constant` are both nonzero perfect squares.
pub fn factor_difference_of_squares(
    lead: i64,
    constant: i64,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Factorization, NotFactorable> {
    if lead <= 0 || constant >= 0 || !is_square(lead) || !is_square(-constant) {
        return Err(NotFactorable { identity: Identity::DifferenceOfSquares });
    }

    steps.push(Step::new(Rule::Given, Poly::new(lead, 0, constant).to_string()));
    let (a, b) = (isqrt(lead as u64) as i64, isqrt(-constant as u64) as i64);
    steps.push(Step::new(Rule::DifferenceOfSquares, format!("{} - {}", squared_text(a, "x"), squared_text(b, ""))));

    let result = Factorization::DifferenceOfSquares { a, b };
    steps.push(Step::new(Rule::Simplify, result.to_string()));
    Ok(result)
}

/// Factors `ax² + bx + c` as `(√a·x ± √c)²`.
///
/// Returns [`NotFactorable`] unless `a` and `c` are perfect squares, `a` is nonzero, and `b` is
/// exactly `±2√a√c`.
pub fn factor_perfect_square(a: i64, b: i64, c: i64, steps: &mut dyn StepCollector<Step>) -> Result<Factorization, NotFactorable> {
    let not_factorable = Err(NotFactorable { identity: Identity::PerfectSquare });
    if a <= 0 || !is_square(a) || !is_square(c) {
        return not_factorable;
    }

    let (p, q) = (isqrt(a as u64) as i64, isqrt(c as u64) as i64);
    let q = if b == 2 * p * q {
        q
    } else if b == -2 * p * q {
        -q
    } else {
        return not_factorable;
    };

    steps.push(Step::new(Rule::Given, Poly::new(a, b, c).to_string()));
    let sign = if q < 0 { '-' } else { '+' };
    steps.push(Step::new(
        Rule::PerfectSquare,
        format!("{} {} 2 × {} × {} + {}", squared_text(p, "x"), sign, format_coef_var(p, "x"), q.abs(), squared_text(q.abs(), "")),
    ));

    let result = Factorization::PerfectSquare { a: p, b: q };
    steps.push(Step::new(Rule::Simplify, result.to_string()));
    Ok(result)
}

/// Factors the given expression with its identity.
pub fn factor(expr: &Factorable, steps: &mut dyn StepCollector<Step>) -> Result<Factorization, NotFactorable> {
    match *expr {
        Factorable::CommonFactor { a, b } => factor_common(a, b, steps),
        Factorable::DifferenceOfSquares { lead, constant } => factor_difference_of_squares(lead, constant, steps),
        Factorable::PerfectSquare { a, b, c } => factor_perfect_square(a, b, c, steps),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn common_factor() {
        let mut steps = Vec::new();
        let result = factor_common(6, 9, &mut steps).unwrap();
        assert_eq!(result, Factorization::CommonFactor { factor: 3, inner_a: 2, inner_b: 3 });
        assert_eq!(result.to_string(), "3(2x + 3)");
        assert_eq!(steps[1].expression, "3 × 2x + 3 × 3");
        assert_eq!(factor_common(0, 0, &mut ()), Err(NotFactorable { identity: Identity::CommonFactor }));
    }

    #[test]
    fn common_factor_negative() {
        let result = factor_common(-8, 12, &mut ()).unwrap();
        assert_eq!(result.to_string(), "4(-2x + 3)");
        assert_eq!(result.expand(), Poly::linear(-8, 12));
    }

    #[test]
    fn difference_of_squares() {
        let result = factor_difference_of_squares(4, -9, &mut ()).unwrap();
        assert_eq!(result, Factorization::DifferenceOfSquares { a: 2, b: 3 });
        assert_eq!(result.to_string(), "(2x + 3)(2x - 3)");
        assert_eq!(result.expand(), Poly::new(4, 0, -9));
    }

    #[test]
    fn not_a_difference_of_squares() {
        let err = Err(NotFactorable { identity: Identity::DifferenceOfSquares });
        assert_eq!(factor_difference_of_squares(4, 9, &mut ()), err);
        assert_eq!(factor_difference_of_squares(5, -9, &mut ()), err);
        assert_eq!(factor_difference_of_squares(4, -8, &mut ()), err);
    }

    #[test]
    fn perfect_squares() {
        let mut steps = Vec::new();
        let result = factor_perfect_square(4, -12, 9, &mut steps).unwrap();
        assert_eq!(result, Factorization::PerfectSquare { a: 2, b: -3 });
        assert_eq!(result.to_string(), "(2x - 3)²");
        assert_eq!(steps[1].expression, "(2x)² - 2 × 2x × 3 + 3²");

        let result = factor_perfect_square(1, 10, 25, &mut ()).unwrap();
        assert_eq!(result.to_string(), "(x + 5)²");
        assert_eq!(result.expand(), Poly::new(1, 10, 25));
    }

    #[test]
    fn not_a_perfect_square() {
        let err = Err(NotFactorable { identity: Identity::PerfectSquare });
        assert_eq!(factor_perfect_square(4, 11, 9, &mut ()), err);
        assert_eq!(factor_perfect_square(3, 6, 3, &mut ()), err);
        assert_eq!(factor_perfect_square(-4, 12, -9, &mut ()), err);
    }

    #[test]
    fn dispatch() {
        let expr = Factorable::PerfectSquare { a: 9, b: 6, c: 1 };
        assert_eq!(expr.to_string(), "9x² + 6x + 1");
        assert_eq!(factor(&expr, &mut ()), Ok(Factorization::PerfectSquare { a: 3, b: 1 }));
    }
}
