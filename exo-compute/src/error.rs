//! Error kinds reported by the solvers and generators.
//!
//! Each kind implements [`exo_error::ErrorKind`], so it can be wrapped in an [`exo_error::Error`]
//! together with the spans of the statement it refers to.

use ariadne::Fmt;
use exo_attrs::ErrorKind;
use exo_error::EXPR;
use crate::polynomial::factor::Identity;
use std::fmt::{self, Display, Formatter};

/// The leading coefficient of an equation is zero, so the equation is of a lower degree than the
/// method requires.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("the {} coefficient of this equation is zero", self.term),
    labels = ["this equation"],
    help = format!("without its `{}` term, this is not a {} equation", (&self.term).fg(EXPR), self.expected),
)]
pub struct DegenerateEquation {
    /// The term whose coefficient is zero, such as `x²`.
    pub term: &'static str,

    /// The kind of equation the method expected, such as `quadratic`.
    pub expected: &'static str,
}

impl DegenerateEquation {
    /// A quadratic equation whose `x²` coefficient is zero.
    pub const QUADRATIC: Self = Self { term: "x²", expected: "quadratic" };
}

impl Display for DegenerateEquation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "the {} coefficient of a {} equation is zero", self.term, self.expected)
    }
}

/// A computation required dividing by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "cannot divide by zero",
    labels = [format!("the {} is zero", self.divisor)],
)]
pub struct DivisionByZero {
    /// What was zero, such as `denominator` or `determinant`.
    pub divisor: &'static str,
}

impl DivisionByZero {
    /// A fraction with a zero denominator.
    pub const DENOMINATOR: Self = Self { divisor: "denominator" };

    /// A linear system with a zero determinant.
    pub const DETERMINANT: Self = Self { divisor: "determinant" };

    /// A percentage change of -100%, which cannot be undone.
    pub const MULTIPLIER: Self = Self { divisor: "multiplier" };

    /// A ratio whose total is zero.
    pub const TOTAL: Self = Self { divisor: "total" };
}

impl Display for DivisionByZero {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "cannot divide by zero: the {} is zero", self.divisor)
    }
}

/// The expression does not match the requested factoring identity.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("this expression cannot be factored as a {}", self.identity),
    labels = ["this expression"],
    help = format!("the identity has the form {}", self.identity.pattern().fg(EXPR)),
)]
pub struct NotFactorable {
    /// The identity that was requested.
    pub identity: Identity,
}

/// A coefficient range cannot produce a value satisfying its constraints.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("cannot draw a coefficient from [{}, {}]", self.min, self.max),
    labels = ["this range"],
    help = if self.min > self.max {
        "the lower bound must not exceed the upper bound".to_string()
    } else {
        "the range must contain a nonzero value".to_string()
    },
)]
pub struct InvalidRange {
    /// The lower bound of the range.
    pub min: i64,

    /// The upper bound of the range.
    pub max: i64,
}

/// A list of candidate values is empty.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("the `{}` setting has no values to choose from", self.name),
    labels = ["this setting"],
)]
pub struct EmptyPool {
    /// The name of the setting.
    pub name: &'static str,
}

/// The topic does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("there is no `{}` topic", self.name),
    labels = ["this topic"],
    help = if self.suggestions.is_empty() {
        "type `topics` for a list of available topics".to_string()
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` topic?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these topics? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UnknownTopic {
    /// The name that was given.
    pub name: String,

    /// Similarly named topics, if any.
    pub suggestions: Vec<String>,
}

/// No random draw satisfied a generator's constraint within the allowed number of attempts.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = format!("could not draw {} after {} attempts", self.constraint, self.attempts),
    labels = ["this topic"],
    help = format!("widen the `{}` setting so that more values qualify", (&self.setting).fg(EXPR)),
)]
pub struct UnsatisfiedConstraint {
    /// What the generator was looking for, such as `a non-proportional system`.
    pub constraint: &'static str,

    /// The setting whose values were rejected.
    pub setting: &'static str,

    /// The number of draws made.
    pub attempts: usize,
}

/// An intermediate value does not fit in a 64-bit integer.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[error(
    message = "this computation overflows",
    labels = [format!("the {} is too large", self.quantity)],
    help = "use smaller values",
)]
pub struct Overflow {
    /// The value that could not be computed, such as `denominator`.
    pub quantity: &'static str,
}
