//! Exponent rules and scientific notation.

use crate::{
    error::DivisionByZero,
    fmt::{format_number, format_power, format_scientific, format_term},
    step::{Rule, Step},
    step_collector::StepCollector,
};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest exponent for which a power is evaluated in the steps.
pub const MAX_EVALUATED_EXP: i64 = 10;

/// The largest absolute value of a power evaluated in the steps.
pub const MAX_EVALUATED_VALUE: i64 = 100_000;

/// The power `base^exp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Power {
    pub base: i64,
    pub exp: i64,
}

impl Power {
    pub const fn new(base: i64, exp: i64) -> Self {
        Self { base, exp }
    }

    /// Evaluates the power, if the exponent is in `[0, 10]` and the value does not exceed
    /// `100000` in absolute value.
    pub fn evaluate(&self) -> Option<i64> {
        if !(0..=MAX_EVALUATED_EXP).contains(&self.exp) {
            return None;
        }

        self.base
            .checked_pow(self.exp as u32)
            .filter(|value| value.abs() <= MAX_EVALUATED_VALUE)
    }

    /// The base, parenthesized if negative.
    fn base_text(&self) -> String {
        format_power(self.base, 1)
    }
}

impl Display for Power {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let base = if self.base < 0 { format!("({})", self.base) } else { self.base.to_string() };
        if self.exp < 0 {
            write!(f, "{}^({})", base, self.exp)
        } else {
            write!(f, "{}^{}", base, self.exp)
        }
    }
}

/// Formats `p - q`, parenthesizing a negative `q`.
fn difference_text(p: i64, q: i64) -> String {
    if q < 0 {
        format!("{} - ({})", p, q)
    } else {
        format!("{} - {}", p, q)
    }
}

/// Pushes an evaluation step for the power, if it is small enough.
fn evaluate_step(power: Power, steps: &mut dyn StepCollector<Step>) {
    if let Some(value) = power.evaluate() {
        steps.push(Step::new(Rule::Evaluate, format!("{} = {}", power, value)));
    }
}

/// Applies `aᵖ × aᑫ = aᵖ⁺ᑫ`.
pub fn product(base: i64, p: i64, q: i64, steps: &mut dyn StepCollector<Step>) -> Power {
    let result = Power::new(base, p + q);
    steps.push(Step::new(Rule::Given, format!("{} × {}", Power::new(base, p), Power::new(base, q))));
    steps.push(Step::new(
        Rule::AddExponents,
        format!("{}^({}{}) = {}", result.base_text(), p, format_term(q, "", false), result),
    ));
    evaluate_step(result, steps);
    result
}

/// Applies `aᵖ / aᑫ = aᵖ⁻ᑫ`.
pub fn quotient(base: i64, p: i64, q: i64, steps: &mut dyn StepCollector<Step>) -> Power {
    let result = Power::new(base, p - q);
    steps.push(Step::new(Rule::Given, format!("{} / {}", Power::new(base, p), Power::new(base, q))));
    steps.push(Step::new(
        Rule::SubtractExponents,
        format!("{}^({}) = {}", result.base_text(), difference_text(p, q), result),
    ));
    evaluate_step(result, steps);
    result
}

/// Applies `(aᵖ)ᑫ = aᵖᑫ`.
pub fn power_of_power(base: i64, p: i64, q: i64, steps: &mut dyn StepCollector<Step>) -> Power {
    let result = Power::new(base, p * q);
    let q_text = if q < 0 { format!("({})", q) } else { q.to_string() };
    steps.push(Step::new(Rule::Given, format!("({})^{}", Power::new(base, p), q_text)));
    steps.push(Step::new(
        Rule::MultiplyExponents,
        format!("{}^({} × {}) = {}", result.base_text(), p, q_text, result),
    ));
    evaluate_step(result, steps);
    result
}

/// Applies `(ab)ᵖ = aᵖbᵖ`, returning `aᵖ` and `bᵖ`.
pub fn power_of_product(a: i64, b: i64, p: i64, steps: &mut dyn StepCollector<Step>) -> [Power; 2] {
    let (lhs, rhs) = (Power::new(a, p), Power::new(b, p));
    steps.push(Step::new(Rule::Given, format!("({} × {})^{}", lhs.base_text(), rhs.base_text(), p)));
    steps.push(Step::new(Rule::DistributeExponent, format!("{} × {}", lhs, rhs)));

    if let (Some(l), Some(r)) = (lhs.evaluate(), rhs.evaluate()) {
        if let Some(value) = l.checked_mul(r).filter(|value| value.abs() <= MAX_EVALUATED_VALUE) {
            steps.push(Step::new(Rule::Evaluate, format!("{} × {} = {}", l, r, value)));
        }
    }
    [lhs, rhs]
}

/// Applies `aᵖ × aᑫ / aʳ = aᵖ⁺ᑫ⁻ʳ`.
pub fn combined(base: i64, p: i64, q: i64, r: i64, steps: &mut dyn StepCollector<Step>) -> Power {
    let numerator = Power::new(base, p + q);
    let result = Power::new(base, p + q - r);
    steps.push(Step::new(
        Rule::Given,
        format!("{} × {} / {}", Power::new(base, p), Power::new(base, q), Power::new(base, r)),
    ));
    steps.push(Step::new(
        Rule::AddExponents,
        format!(
            "{}^({}{}) / {} = {} / {}",
            numerator.base_text(),
            p,
            format_term(q, "", false),
            Power::new(base, r),
            numerator,
            Power::new(base, r),
        ),
    ));
    steps.push(Step::new(
        Rule::SubtractExponents,
        format!("{}^({}) = {}", result.base_text(), difference_text(numerator.exp, r), result),
    ));
    evaluate_step(result, steps);
    result
}

/// A number `coef × 10^exp`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scientific {
    pub coef: f64,
    pub exp: i64,
}

/// Rounds away the floating point noise left by repeated scaling.
fn round_noise(n: f64) -> f64 {
    (n * 1e12).round() / 1e12
}

/// Multiplies `n` by `10^places`. The factor is split in two so that it stays finite for
/// subnormal `n`.
fn scale(n: f64, places: i32) -> f64 {
    let half = places / 2;
    n * 10f64.powi(half) * 10f64.powi(places - half)
}

impl Scientific {
    pub const fn new(coef: f64, exp: i64) -> Self {
        Self { coef, exp }
    }

    /// Returns true if `1 ≤ |coef| < 10`.
    pub fn is_normalized(&self) -> bool {
        (1.0..10.0).contains(&self.coef.abs())
    }

    /// Moves the decimal point until `1 ≤ |coef| < 10`, returning the normalized number and the
    /// number of places the exponent was shifted by.
    ///
    /// Zero and non-finite coefficients are returned unchanged.
    pub fn normalize(self) -> (Self, i32) {
        if self.coef == 0.0 || !self.coef.is_finite() {
            return (self, 0);
        }

        let mut shift = self.coef.abs().log10().floor() as i32;
        let mut coef = round_noise(scale(self.coef, -shift));
        if coef.abs() >= 10.0 {
            coef = round_noise(coef / 10.0);
            shift += 1;
        } else if coef.abs() < 1.0 {
            coef = round_noise(coef * 10.0);
            shift -= 1;
        }
        let exp = self.exp + i64::from(shift);
        (Self::new(coef, exp), shift)
    }

    pub fn value(&self) -> f64 {
        self.coef * 10f64.powi(self.exp as i32)
    }
}

impl Display for Scientific {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", format_scientific(self.coef, self.exp))
    }
}

/// Pushes the normalization step, if one is needed.
fn normalize_step(raw: Scientific, steps: &mut dyn StepCollector<Step>) -> Scientific {
    let (normalized, shift) = raw.normalize();
    if shift != 0 {
        steps.push(Step::new(Rule::Normalize { shift }, normalized.to_string()));
    }
    normalized
}

/// Multiplies two numbers in scientific notation.
pub fn multiply(lhs: Scientific, rhs: Scientific, steps: &mut dyn StepCollector<Step>) -> Scientific {
    steps.push(Step::new(Rule::Given, format!("({}) × ({})", lhs, rhs)));
    let raw = Scientific::new(round_noise(lhs.coef * rhs.coef), lhs.exp + rhs.exp);
    steps.push(Step::new(
        Rule::CombineCoefficients,
        format!(
            "({} × {}) × 10^({}{}) = {}",
            format_number(lhs.coef),
            format_number(rhs.coef),
            lhs.exp,
            format_term(rhs.exp, "", false),
            raw,
        ),
    ));
    normalize_step(raw, steps)
}

/// Divides two numbers in scientific notation.
pub fn divide(
    lhs: Scientific,
    rhs: Scientific,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Scientific, DivisionByZero> {
    if rhs.coef == 0.0 {
        return Err(DivisionByZero::DENOMINATOR);
    }

    steps.push(Step::new(Rule::Given, format!("({}) / ({})", lhs, rhs)));
    let raw = Scientific::new(round_noise(lhs.coef / rhs.coef), lhs.exp - rhs.exp);
    steps.push(Step::new(
        Rule::CombineCoefficients,
        format!(
            "({} / {}) × 10^({}) = {}",
            format_number(lhs.coef),
            format_number(rhs.coef),
            difference_text(lhs.exp, rhs.exp),
            raw,
        ),
    ));
    Ok(normalize_step(raw, steps))
}
