//! Exercises: their statements, their solutions, and their random generation.
//!
//! An [`Exercise`] carries exactly the parameters its solver needs. [`Exercise::solve`]
//! dispatches it to the matching solver and collects the derivation steps; expected failures
//! are wrapped into an [`exo_error::Error`] whose span covers the whole
//! [statement](Exercise::statement), so a front end can report them against it.

mod generate;
mod topic;

pub use generate::generate;
pub use topic::{similar_topics, Topic};

use crate::{
    fmt::{format_number, format_sum, format_term},
    fraction::{self, Fraction, Operation},
    linear::{self, InequalitySolution, LinearEquation, LinearInequality, LinearSolution},
    percent::{self, Change, PercentChange},
    polynomial::{
        expand::{self, Expansion},
        factor::{self, Factorable, Factorization},
        reduce::{self, Reduction},
        Poly,
    },
    power::{self, Power, Scientific},
    quadratic::{self, sign, DiscriminantSolution, ParticularForm, Roots, Vieta},
    radical::{self, ConjugateQuotient, RadicalQuotient, RadicalSum, SquareRoot},
    set::{Comparison, SolutionSet},
    step::Step,
    system::{self, LinearSystem, Method, SystemSolution},
};
use exo_error::{Error, ErrorKind};
use log::trace;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The quadratic equation exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum QuadraticExercise {
    /// Solve `ax² + bx + c = 0` with the discriminant.
    Discriminant { a: i64, b: i64, c: i64 },

    /// Solve `ax² + bx + c = 0` with the canonical form.
    Canonical { a: i64, b: i64, c: i64 },

    /// Solve an equation of a particular form.
    Particular(ParticularForm),

    /// Find the sum and the product of the roots of `ax² + bx + c`.
    SumAndProduct { a: i64, b: i64, c: i64 },
}

/// The fraction exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FractionExercise {
    /// Simplify `num/den`.
    Simplify { num: i64, den: i64 },

    /// Compute `lhs op rhs`, each fraction given as `(num, den)`.
    Arithmetic { lhs: (i64, i64), op: Operation, rhs: (i64, i64) },
}

/// The percentage exercises.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PercentExercise {
    /// Compute `percent% of value`.
    Of { percent: f64, value: f64 },

    /// Find the percentage that `part` represents of `total`.
    Ratio { part: f64, total: f64 },

    /// Apply a change of `percent%` to `value`.
    Change { value: f64, percent: f64, change: Change },

    /// Find the value that, changed by `percent%`, gives `result`.
    Reverse { result: f64, percent: f64, change: Change },
}

/// The power exercises.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PowerExercise {
    /// `base^p × base^q`
    Product { base: i64, p: i64, q: i64 },

    /// `base^p / base^q`
    Quotient { base: i64, p: i64, q: i64 },

    /// `(base^p)^q`
    PowerOfPower { base: i64, p: i64, q: i64 },

    /// `(a × b)^p`
    PowerOfProduct { a: i64, b: i64, p: i64 },

    /// `base^p × base^q / base^r`
    Combined { base: i64, p: i64, q: i64, r: i64 },

    /// `lhs × rhs`, or `lhs / rhs` if `divide` is set.
    Scientific { lhs: Scientific, rhs: Scientific, divide: bool },
}

/// The square root exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RadicalExercise {
    /// Simplify `√n`.
    Simplify { n: u64 },

    /// Reduce `p√r + q√s`.
    Sum { p: i64, r: u64, q: i64, s: u64 },

    /// Simplify `√a × √b`.
    Product { a: u64, b: u64 },

    /// Rationalize `k/√n`.
    Rationalize { k: i64, n: u64 },

    /// Rationalize `k/(√a + b)`.
    Conjugate { k: i64, a: u64, b: i64 },
}

/// An exercise, with the parameters needed to solve it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Exercise {
    LinearEquation(LinearEquation),
    LinearInequality(LinearInequality),
    Quadratic(QuadraticExercise),

    /// `ax² + bx + c cmp 0`
    QuadraticInequality { a: i64, b: i64, c: i64, cmp: Comparison },

    System { system: LinearSystem, method: Method },
    Expansion(Expansion),
    Factoring(Factorable),
    Reduction(Reduction),
    Fraction(FractionExercise),
    Percentage(PercentExercise),
    Power(PowerExercise),
    Radical(RadicalExercise),
}

/// The final result of an exercise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Answer {
    Linear(LinearSolution),
    Inequality(InequalitySolution),
    Set(SolutionSet),
    Discriminant(DiscriminantSolution),
    Roots(Roots),
    Vieta(Vieta),
    System(SystemSolution),
    Polynomial(Poly),
    Factorization(Factorization),
    Fraction(Fraction),
    Number(f64),
    Percentage(f64),
    Change(PercentChange),
    Power(Power),
    Powers([Power; 2]),
    Scientific(Scientific),
    Root(SquareRoot),
    RadicalSum(RadicalSum),
    RadicalQuotient(RadicalQuotient),
    ConjugateQuotient(ConjugateQuotient),
}

impl Display for Answer {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Linear(solution) => write!(f, "{}", solution),
            Self::Inequality(solution) => write!(f, "{}", solution),
            Self::Set(set) => write!(f, "x ∈ {}", set),
            Self::Discriminant(solution) => write!(f, "{}", solution),
            Self::Roots(roots) => write!(f, "{}", roots),
            Self::Vieta(vieta) => write!(f, "{}", vieta),
            Self::System(solution) => write!(f, "{}", solution),
            Self::Polynomial(poly) => write!(f, "{}", poly),
            Self::Factorization(factorization) => write!(f, "{}", factorization),
            Self::Fraction(fraction) => write!(f, "{}", fraction),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::Percentage(p) => write!(f, "{}%", format_number(*p)),
            Self::Change(change) => write!(
                f,
                "{} (change of {}, multiplier {})",
                format_number(change.result),
                format_number(change.amount),
                format_number(change.multiplier),
            ),
            Self::Power(power) => write!(f, "{}", power),
            Self::Powers([lhs, rhs]) => write!(f, "{} × {}", lhs, rhs),
            Self::Scientific(n) => write!(f, "{}", n),
            Self::Root(root) => write!(f, "{}", root),
            Self::RadicalSum(sum) => write!(f, "{}", sum),
            Self::RadicalQuotient(quotient) => write!(f, "{}", quotient),
            Self::ConjugateQuotient(quotient) => write!(f, "{}", quotient),
        }
    }
}

/// The solution of an exercise: the derivation steps and the final answer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    pub steps: Vec<Step>,
    pub answer: Answer,
}

impl Exercise {
    /// The topic of the exercise.
    pub fn topic(&self) -> Topic {
        match self {
            Self::LinearEquation(_) => Topic::LinearEquation,
            Self::LinearInequality(_) => Topic::LinearInequality,
            Self::Quadratic(_) => Topic::QuadraticEquation,
            Self::QuadraticInequality { .. } => Topic::QuadraticInequality,
            Self::System { .. } => Topic::System,
            Self::Expansion(_) => Topic::Expansion,
            Self::Factoring(_) => Topic::Factoring,
            Self::Reduction(_) => Topic::Reduction,
            Self::Fraction(_) => Topic::Fraction,
            Self::Percentage(_) => Topic::Percentage,
            Self::Power(_) => Topic::Power,
            Self::Radical(_) => Topic::Radical,
        }
    }

    /// Renders the exercise as plain text.
    pub fn statement(&self) -> String {
        match self {
            Self::LinearEquation(eq) => format!("solve {}", eq),
            Self::LinearInequality(ineq) => format!("solve {}", ineq),
            Self::Quadratic(QuadraticExercise::Discriminant { a, b, c }) => {
                format!("solve {} = 0 with the discriminant", trinomial(*a, *b, *c))
            },
            Self::Quadratic(QuadraticExercise::Canonical { a, b, c }) => {
                format!("solve {} = 0 with the canonical form", trinomial(*a, *b, *c))
            },
            Self::Quadratic(QuadraticExercise::Particular(form)) => format!("solve {}", form),
            Self::Quadratic(QuadraticExercise::SumAndProduct { a, b, c }) => {
                format!("find the sum and the product of the roots of {}", trinomial(*a, *b, *c))
            },
            Self::QuadraticInequality { a, b, c, cmp } => format!("solve {} {} 0", trinomial(*a, *b, *c), cmp),
            Self::System { system, method } => {
                let method = match method {
                    Method::Substitution => "substitution",
                    Method::Elimination => "elimination",
                };
                format!("solve {} by {}", system, method)
            },
            Self::Expansion(expansion) => format!("expand {}", expansion),
            Self::Factoring(expr) => format!("factor {}", expr),
            Self::Reduction(reduction) => format!("reduce {}", reduction),
            Self::Fraction(FractionExercise::Simplify { num, den }) => format!("simplify {}/{}", num, den),
            Self::Fraction(FractionExercise::Arithmetic { lhs, op, rhs }) => {
                format!("compute {}/{} {} {}/{}", lhs.0, lhs.1, op, rhs.0, rhs.1)
            },
            Self::Percentage(PercentExercise::Of { percent, value }) => {
                format!("compute {}% of {}", format_number(*percent), format_number(*value))
            },
            Self::Percentage(PercentExercise::Ratio { part, total }) => {
                format!("what percentage of {} is {}?", format_number(*total), format_number(*part))
            },
            Self::Percentage(PercentExercise::Change { value, percent, change }) => {
                format!("{} {} by {}%", change, format_number(*value), format_number(*percent))
            },
            Self::Percentage(PercentExercise::Reverse { result, percent, change }) => format!(
                "after a {} of {}%, a value is {}: find the original value",
                change,
                format_number(*percent),
                format_number(*result),
            ),
            Self::Power(exercise) => match *exercise {
                PowerExercise::Product { base, p, q } => {
                    format!("simplify {} × {}", Power::new(base, p), Power::new(base, q))
                },
                PowerExercise::Quotient { base, p, q } => {
                    format!("simplify {} / {}", Power::new(base, p), Power::new(base, q))
                },
                PowerExercise::PowerOfPower { base, p, q } => format!("simplify ({})^{}", Power::new(base, p), q),
                PowerExercise::PowerOfProduct { a, b, p } => format!("expand ({} × {})^{}", a, b, p),
                PowerExercise::Combined { base, p, q, r } => format!(
                    "simplify {} × {} / {}",
                    Power::new(base, p),
                    Power::new(base, q),
                    Power::new(base, r),
                ),
                PowerExercise::Scientific { lhs, rhs, divide } => {
                    format!("compute ({}) {} ({})", lhs, if divide { "/" } else { "×" }, rhs)
                },
            },
            Self::Radical(exercise) => match *exercise {
                RadicalExercise::Simplify { n } => format!("simplify √{}", n),
                RadicalExercise::Sum { p, r, q, s } => format!(
                    "reduce {}",
                    RadicalSum::Unlike(SquareRoot::new(p, r), SquareRoot::new(q, s)),
                ),
                RadicalExercise::Product { a, b } => format!("simplify √{} × √{}", a, b),
                RadicalExercise::Rationalize { k, n } => format!("rationalize {}/√{}", k, n),
                RadicalExercise::Conjugate { k, a, b } => format!(
                    "rationalize {}/(√{}{})",
                    k,
                    a,
                    format_term(b, "", false),
                ),
            },
        }
    }

    /// Solves the exercise, collecting every step of the derivation.
    pub fn solve(&self) -> Result<Solution, Error> {
        trace!("solving {:?}", self);
        let mut steps = Vec::new();
        let answer = self.answer(&mut steps).map_err(|kind| kind.into_error(self.statement()))?;
        Ok(Solution { steps, answer })
    }

    /// Dispatches the exercise to its solver.
    fn answer(&self, steps: &mut Vec<Step>) -> Result<Answer, Failure> {
        Ok(match self {
            Self::LinearEquation(eq) => Answer::Linear(linear::solve(eq, steps)),
            Self::LinearInequality(ineq) => Answer::Inequality(linear::solve_inequality(ineq, steps)),
            Self::Quadratic(exercise) => match *exercise {
                QuadraticExercise::Discriminant { a, b, c } => {
                    Answer::Discriminant(quadratic::solve_by_discriminant(a, b, c, steps)?)
                },
                QuadraticExercise::Canonical { a, b, c } => {
                    Answer::Roots(quadratic::solve_by_canonical_form(a, b, c, steps)?)
                },
                QuadraticExercise::Particular(form) => Answer::Roots(quadratic::solve_particular(&form, steps)?),
                QuadraticExercise::SumAndProduct { a, b, c } => {
                    Answer::Vieta(quadratic::sum_and_product(a, b, c, steps)?)
                },
            },
            Self::QuadraticInequality { a, b, c, cmp } => Answer::Set(sign::solve_inequality(*a, *b, *c, *cmp, steps)?),
            Self::System { system: sys, method } => Answer::System(system::solve(sys, *method, steps)?),
            Self::Expansion(expansion) => Answer::Polynomial(expand::expand(expansion, steps)),
            Self::Factoring(expr) => Answer::Factorization(factor::factor(expr, steps)?),
            Self::Reduction(reduction) => Answer::Polynomial(reduce::reduce(reduction, steps)),
            Self::Fraction(FractionExercise::Simplify { num, den }) => {
                Answer::Fraction(fraction::simplify(*num, *den, steps)?)
            },
            Self::Fraction(FractionExercise::Arithmetic { lhs, op, rhs }) => Answer::Fraction(match op {
                Operation::Add => fraction::add(*lhs, *rhs, steps)?,
                Operation::Sub => fraction::subtract(*lhs, *rhs, steps)?,
                Operation::Mul => fraction::multiply(*lhs, *rhs, steps)?,
                Operation::Div => fraction::divide(*lhs, *rhs, steps)?,
            }),
            Self::Percentage(exercise) => match *exercise {
                PercentExercise::Of { percent, value } => Answer::Number(percent::percent_of(percent, value, steps)),
                PercentExercise::Ratio { part, total } => Answer::Percentage(percent::ratio(part, total, steps)?),
                PercentExercise::Change { value, percent, change } => {
                    Answer::Change(percent::apply_change(value, percent, change, steps))
                },
                PercentExercise::Reverse { result, percent, change } => {
                    Answer::Number(percent::reverse(result, percent, change, steps)?)
                },
            },
            Self::Power(exercise) => match *exercise {
                PowerExercise::Product { base, p, q } => Answer::Power(power::product(base, p, q, steps)),
                PowerExercise::Quotient { base, p, q } => Answer::Power(power::quotient(base, p, q, steps)),
                PowerExercise::PowerOfPower { base, p, q } => Answer::Power(power::power_of_power(base, p, q, steps)),
                PowerExercise::PowerOfProduct { a, b, p } => Answer::Powers(power::power_of_product(a, b, p, steps)),
                PowerExercise::Combined { base, p, q, r } => Answer::Power(power::combined(base, p, q, r, steps)),
                PowerExercise::Scientific { lhs, rhs, divide: false } => {
                    Answer::Scientific(power::multiply(lhs, rhs, steps))
                },
                PowerExercise::Scientific { lhs, rhs, divide: true } => {
                    Answer::Scientific(power::divide(lhs, rhs, steps)?)
                },
            },
            Self::Radical(exercise) => match *exercise {
                RadicalExercise::Simplify { n } => Answer::Root(radical::simplify(n, steps)),
                RadicalExercise::Sum { p, r, q, s } => Answer::RadicalSum(radical::combine(p, r, q, s, steps)),
                RadicalExercise::Product { a, b } => Answer::Root(radical::product(a, b, steps)),
                RadicalExercise::Rationalize { k, n } => {
                    Answer::RadicalQuotient(radical::rationalize(k, n, steps)?)
                },
                RadicalExercise::Conjugate { k, a, b } => {
                    Answer::ConjugateQuotient(
                        radical::rationalize_conjugate(k, a, b, steps).map_err(|err| Failure(err.kind))?,
                    )
                },
            },
        })
    }
}

/// Formats `ax² + bx + c` without checking the leading coefficient.
fn trinomial(a: i64, b: i64, c: i64) -> String {
    format_sum(&[(a, "x²"), (b, "x"), (c, "")])
}

/// An error kind returned by a solver, before it is attached to a statement.
struct Failure(Box<dyn ErrorKind>);

impl Failure {
    fn into_error(self, statement: String) -> Error {
        Error { spans: vec![0..statement.chars().count()], kind: self.0 }
    }
}

impl<K: ErrorKind + 'static> From<K> for Failure {
    fn from(kind: K) -> Self {
        Self(Box::new(kind))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::{DegenerateEquation, DivisionByZero, NotFactorable};

    #[test]
    fn statement_and_answer() {
        let exercise = Exercise::Quadratic(QuadraticExercise::Discriminant { a: 1, b: -5, c: 6 });
        assert_eq!(exercise.topic(), Topic::QuadraticEquation);
        assert_eq!(exercise.statement(), "solve x² - 5x + 6 = 0 with the discriminant");

        let solution = exercise.solve().unwrap();
        assert_eq!(
            solution.answer,
            Answer::Discriminant(DiscriminantSolution { delta: 1, roots: Roots::Two { x1: 3.0, x2: 2.0 } }),
        );
        assert_eq!(solution.steps[0].expression, "x² - 5x + 6 = 0");
    }

    #[test]
    fn degenerate_quadratic_is_reported() {
        let exercise = Exercise::QuadraticInequality { a: 0, b: 2, c: 1, cmp: Comparison::Greater };
        let statement = exercise.statement();
        let err = exercise.solve().unwrap_err();
        assert_eq!(err.spans, vec![0..statement.chars().count()]);
        assert_eq!(err.downcast_ref::<DegenerateEquation>(), Some(&DegenerateEquation::QUADRATIC));
    }

    #[test]
    fn proportional_system_is_reported() {
        let system = LinearSystem { a1: 1, b1: 2, c1: 3, a2: 2, b2: 4, c2: 6 };
        let err = Exercise::System { system, method: Method::Elimination }.solve().unwrap_err();
        assert_eq!(err.downcast_ref::<DivisionByZero>(), Some(&DivisionByZero::DETERMINANT));
    }

    #[test]
    fn not_factorable_is_reported() {
        let exercise = Exercise::Factoring(Factorable::DifferenceOfSquares { lead: 2, constant: -9 });
        let err = exercise.solve().unwrap_err();
        assert!(err.is::<NotFactorable>());
    }

    #[test]
    fn fraction_statement() {
        let exercise = Exercise::Fraction(FractionExercise::Arithmetic { lhs: (2, 3), op: Operation::Add, rhs: (1, 4) });
        assert_eq!(exercise.statement(), "compute 2/3 + 1/4");
        assert_eq!(exercise.solve().unwrap().answer, Answer::Fraction(Fraction::new(11, 12).unwrap()));
    }

    #[test]
    fn answers_display() {
        let exercise = Exercise::Radical(RadicalExercise::Conjugate { k: 2, a: 3, b: 1 });
        assert_eq!(exercise.statement(), "rationalize 2/(√3 + 1)");
        assert_eq!(exercise.solve().unwrap().answer.to_string(), "√3 - 1");

        let exercise = Exercise::Percentage(PercentExercise::Ratio { part: 30.0, total: 120.0 });
        assert_eq!(exercise.solve().unwrap().answer.to_string(), "25%");
    }
}
