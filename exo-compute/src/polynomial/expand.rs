//! Expansion by distributivity and with the binomial identities.

use super::{factor_text, squared_text, Poly};
use crate::{
    fmt::{format_coef_var, format_sum},
    step::{Rule, Step},
    step_collector::StepCollector,
};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product to expand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expansion {
    /// `k(ax + b)`
    Simple { k: i64, a: i64, b: i64 },

    /// `(ax + b)(cx + d)`
    Double { a: i64, b: i64, c: i64, d: i64 },

    /// `(ax + b)²`
    SquareOfSum { a: i64, b: i64 },

    /// `(ax - b)²`
    SquareOfDifference { a: i64, b: i64 },

    /// `(ax + b)(ax - b)`
    DifferenceOfSquares { a: i64, b: i64 },
}

/// Formats `(ax + b)`.
fn binomial(a: i64, b: i64) -> String {
    format!("({})", format_sum(&[(a, "x"), (b, "")]))
}

impl Display for Expansion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Simple { k, a, b } => {
                let k = match k {
                    1 => String::new(),
                    -1 => "-".to_string(),
                    k => k.to_string(),
                };
                write!(f, "{}{}", k, binomial(a, b))
            },
            Self::Double { a, b, c, d } => write!(f, "{}{}", binomial(a, b), binomial(c, d)),
            Self::SquareOfSum { a, b } => write!(f, "{}²", binomial(a, b)),
            Self::SquareOfDifference { a, b } => write!(f, "{}²", binomial(a, -b)),
            Self::DifferenceOfSquares { a, b } => write!(f, "{}{}", binomial(a, b), binomial(a, -b)),
        }
    }
}

/// `k(ax + b) = ka·x + kb`
pub fn distribute(k: i64, a: i64, b: i64) -> Poly {
    Poly::linear(k * a, k * b)
}

/// `(ax + b)(cx + d) = ac·x² + (ad + bc)·x + bd`
pub fn multiply_binomials(a: i64, b: i64, c: i64, d: i64) -> Poly {
    Poly::new(a * c, a * d + b * c, b * d)
}

/// `(ax + b)² = a²·x² + 2ab·x + b²`
pub fn square_of_sum(a: i64, b: i64) -> Poly {
    Poly::new(a * a, 2 * a * b, b * b)
}

/// `(ax - b)² = a²·x² - 2ab·x + b²`
pub fn square_of_difference(a: i64, b: i64) -> Poly {
    Poly::new(a * a, -2 * a * b, b * b)
}

/// `(ax + b)(ax - b) = a²·x² - b²`
pub fn difference_of_squares(a: i64, b: i64) -> Poly {
    Poly::new(a * a, 0, -b * b)
}

/// Expands the given product.
pub fn expand(expansion: &Expansion, steps: &mut dyn StepCollector<Step>) -> Poly {
    steps.push(Step::new(Rule::Given, expansion.to_string()));

    let result = match *expansion {
        Expansion::Simple { k, a, b } => {
            steps.push(Step::new(
                Rule::Distribute,
                format!("{} × {} + {} × {}", k, factor_text(a, "x"), k, factor_text(b, "")),
            ));
            distribute(k, a, b)
        },
        Expansion::Double { a, b, c, d } => {
            steps.push(Step::new(
                Rule::DoubleDistribute,
                format!(
                    "{} × {} + {} × {} + {} × {} + {} × {}",
                    factor_text(a, "x"), factor_text(c, "x"),
                    factor_text(a, "x"), factor_text(d, ""),
                    factor_text(b, ""), factor_text(c, "x"),
                    factor_text(b, ""), factor_text(d, ""),
                ),
            ));
            steps.push(Step::new(
                Rule::Simplify,
                format_sum(&[(a * c, "x²"), (a * d, "x"), (b * c, "x"), (b * d, "")]),
            ));
            multiply_binomials(a, b, c, d)
        },
        Expansion::SquareOfSum { a, b } => {
            steps.push(Step::new(
                Rule::SquareOfSum,
                format!("{} + 2 × {} × {} + {}", squared_text(a, "x"), format_coef_var(a, "x"), factor_text(b, ""), squared_text(b, "")),
            ));
            square_of_sum(a, b)
        },
        Expansion::SquareOfDifference { a, b } => {
            steps.push(Step::new(
                Rule::SquareOfDifference,
                format!("{} - 2 × {} × {} + {}", squared_text(a, "x"), format_coef_var(a, "x"), factor_text(b, ""), squared_text(b, "")),
            ));
            square_of_difference(a, b)
        },
        Expansion::DifferenceOfSquares { a, b } => {
            steps.push(Step::new(
                Rule::DifferenceOfSquares,
                format!("{} - {}", squared_text(a, "x"), squared_text(b, "")),
            ));
            difference_of_squares(a, b)
        },
    };

    let rule = if matches!(expansion, Expansion::Double { .. }) { Rule::CollectLikeTerms } else { Rule::Simplify };
    steps.push(Step::new(rule, result.to_string()));
    result
}
