//! Polynomials of degree at most 2 with integer coefficients: expansion, factoring and reduction.

pub mod expand;
pub mod factor;
pub mod reduce;

use crate::fmt::{format_coef_var, format_sum};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The polynomial `x2·x² + x1·x + x0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Poly {
    pub x2: i64,
    pub x1: i64,
    pub x0: i64,
}

impl Poly {
    pub const fn new(x2: i64, x1: i64, x0: i64) -> Self {
        Self { x2, x1, x0 }
    }

    /// The polynomial `a·x + b`.
    pub const fn linear(a: i64, b: i64) -> Self {
        Self { x2: 0, x1: a, x0: b }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Evaluates the polynomial at `x`.
    pub fn eval(&self, x: i64) -> i64 {
        (self.x2 * x + self.x1) * x + self.x0
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", format_sum(&[(self.x2, "x²"), (self.x1, "x"), (self.x0, "")]))
    }
}

/// Formats `coef·var` as a factor of a product, parenthesizing negative values.
pub(crate) fn factor_text(coef: i64, var: &str) -> String {
    let text = format_coef_var(coef, var);
    if coef < 0 {
        format!("({})", text)
    } else {
        text
    }
}

/// Formats `(coef·var)²`, without parentheses when the coefficient is 1.
pub(crate) fn squared_text(coef: i64, var: &str) -> String {
    if coef == 1 && !var.is_empty() {
        format!("{}²", var)
    } else if var.is_empty() && coef >= 0 {
        format!("{}²", coef)
    } else {
        format!("({})²", format_coef_var(coef, var))
    }
}
