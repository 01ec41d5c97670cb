//! Linear equations and inequalities in one unknown.

use crate::{
    fmt::{format_coef_var, format_number, format_sum, format_term},
    fraction::Fraction,
    set::{Comparison, SolutionSet},
    step::{Rule, Step},
    step_collector::StepCollector,
};
use log::trace;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The linear equation `ax + b = cx + d`.
///
/// The one-sided form `ax + b = c` has no `x` term on the right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearEquation {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl LinearEquation {
    /// The equation `ax + b = c`.
    pub const fn one_sided(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c: 0, d: c }
    }

    /// The equation `ax + b = cx + d`.
    pub const fn two_sided(a: i64, b: i64, c: i64, d: i64) -> Self {
        Self { a, b, c, d }
    }
}

impl Display for LinearEquation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} = {}", side(self.a, self.b), side(self.c, self.d))
    }
}

/// The linear inequality `ax + b op cx + d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearInequality {
    pub a: i64,
    pub b: i64,
    pub cmp: Comparison,
    pub c: i64,
    pub d: i64,
}

impl LinearInequality {
    /// The inequality `ax + b op c`.
    pub const fn one_sided(a: i64, b: i64, cmp: Comparison, c: i64) -> Self {
        Self { a, b, cmp, c: 0, d: c }
    }

    /// The inequality `ax + b op cx + d`.
    pub const fn two_sided(a: i64, b: i64, cmp: Comparison, c: i64, d: i64) -> Self {
        Self { a, b, cmp, c, d }
    }
}

impl Display for LinearInequality {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {} {}", side(self.a, self.b), self.cmp, side(self.c, self.d))
    }
}

/// Formats one side `ax + b` of an equation.
fn side(a: i64, b: i64) -> String {
    format_sum(&[(a, "x"), (b, "")])
}

/// The solution of a linear equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LinearSolution {
    /// Exactly one value is a solution.
    Unique(Fraction),

    /// The unknown cancels and the remaining statement is true: every value is a solution.
    AlwaysTrue,

    /// The unknown cancels and the remaining statement is false.
    NoSolution,
}

impl Display for LinearSolution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Unique(x) => write!(f, "x = {}", x),
            Self::AlwaysTrue => write!(f, "every real number is a solution"),
            Self::NoSolution => write!(f, "no solution"),
        }
    }
}

/// The solution of a linear inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InequalitySolution {
    /// The solutions are the values `x` with `x cmp boundary`.
    Bounded { boundary: Fraction, cmp: Comparison },

    /// Every value is a solution.
    AllReals,

    /// No value is a solution.
    Empty,
}

impl InequalitySolution {
    /// The solution set as intervals.
    pub fn to_set(&self) -> SolutionSet {
        match self {
            Self::Bounded { boundary, cmp } => cmp.solution_set(boundary.value()),
            Self::AllReals => SolutionSet::AllReals,
            Self::Empty => SolutionSet::Empty,
        }
    }
}

impl Display for InequalitySolution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Bounded { boundary, cmp } => write!(f, "x {} {}, x ∈ {}", cmp, boundary, self.to_set()),
            Self::AllReals | Self::Empty => write!(f, "{}", self.to_set()),
        }
    }
}

/// Moves the `x` term to the left-hand side and the constant to the right-hand side of
/// `ax + b rel cx + d`, returning the reduced form `a'x rel d'`.
fn move_terms(
    (a, b, c, d): (i64, i64, i64, i64),
    rel: &str,
    steps: &mut dyn StepCollector<Step>,
) -> (i64, i64) {
    let a = if c != 0 {
        steps.push(Step::new(
            Rule::SubtractFromBothSides { term: format_coef_var(c, "x") },
            format!("{} {} {}", side(a - c, b), rel, d),
        ));
        a - c
    } else {
        a
    };

    if b != 0 {
        let rule = if b > 0 {
            Rule::SubtractFromBothSides { term: b.to_string() }
        } else {
            Rule::AddToBothSides { term: (-b).to_string() }
        };
        steps.push(Step::new(
            rule,
            format!("{} {} {}{} = {}", format_coef_var(a, "x"), rel, d, format_term(-b, "", false), d - b),
        ));
    }

    (a, d - b)
}

/// Formats the evaluation of `ax + b` at `x`, such as `3 × 2 - 1`.
fn evaluation(a: i64, b: i64, x: Fraction) -> String {
    let product = format!("{} × {}", a, x.as_factor());
    if b == 0 {
        product
    } else {
        format!("{}{}", product, format_term(b, "", false))
    }
}

/// Solves `ax + b = c`.
///
/// If `a = 0`, every value is a solution when `b = c` and none otherwise.
pub fn solve_one_sided(a: i64, b: i64, c: i64, steps: &mut dyn StepCollector<Step>) -> LinearSolution {
    solve(&LinearEquation::one_sided(a, b, c), steps)
}

/// Solves `ax + b = cx + d` by reducing it to `(a - c)x + b = d`.
pub fn solve_two_sided(a: i64, b: i64, c: i64, d: i64, steps: &mut dyn StepCollector<Step>) -> LinearSolution {
    solve(&LinearEquation::two_sided(a, b, c, d), steps)
}

/// Solves the given linear equation.
pub fn solve(eq: &LinearEquation, steps: &mut dyn StepCollector<Step>) -> LinearSolution {
    trace!("solving linear equation {}", eq);
    steps.push(Step::new(Rule::Given, eq.to_string()));
    let (a, rhs) = move_terms((eq.a, eq.b, eq.c, eq.d), "=", steps);

    if a == 0 {
        let holds = rhs == 0;
        steps.push(Step::new(Rule::ConstantStatement { holds }, format!("0 = {}", rhs)));
        return if holds { LinearSolution::AlwaysTrue } else { LinearSolution::NoSolution };
    }

    let x = Fraction::integer(rhs).div_int(a).unwrap_or(Fraction::ZERO);
    if a != 1 {
        steps.push(Step::new(
            Rule::DivideBothSides { divisor: a, reverses: false },
            format!("x = {}/{} = {}", rhs, a, x),
        ));
    }
    if !x.is_integer() {
        steps.push(Step::new(Rule::Decimal, format!("x ≈ {}", format_number(x.value()))));
    }

    let value = Fraction::from(eq.a) * x + Fraction::from(eq.b);
    let check = if eq.c == 0 {
        format!("{} = {}", evaluation(eq.a, eq.b, x), value)
    } else {
        format!("{} = {} = {}", evaluation(eq.a, eq.b, x), evaluation(eq.c, eq.d, x), value)
    };
    steps.push(Step::new(Rule::Verify, check));

    LinearSolution::Unique(x)
}

/// Solves `ax + b op c`.
///
/// Dividing by a negative `a` reverses the comparison. If `a = 0`, the constant inequality
/// `b op c` decides between every value and no value.
pub fn solve_one_sided_inequality(
    a: i64,
    b: i64,
    cmp: Comparison,
    c: i64,
    steps: &mut dyn StepCollector<Step>,
) -> InequalitySolution {
    solve_inequality(&LinearInequality::one_sided(a, b, cmp, c), steps)
}

/// Solves the given linear inequality.
pub fn solve_inequality(ineq: &LinearInequality, steps: &mut dyn StepCollector<Step>) -> InequalitySolution {
    trace!("solving linear inequality {}", ineq);
    steps.push(Step::new(Rule::Given, ineq.to_string()));
    let rel = ineq.cmp.to_string();
    let (a, rhs) = move_terms((ineq.a, ineq.b, ineq.c, ineq.d), &rel, steps);

    if a == 0 {
        let holds = ineq.cmp.holds(0, rhs);
        steps.push(Step::new(
            Rule::ConstantStatement { holds },
            format!("0 {} {}", ineq.cmp, rhs),
        ));
        return if holds { InequalitySolution::AllReals } else { InequalitySolution::Empty };
    }

    let reverses = a < 0;
    let cmp = if reverses { ineq.cmp.reverse() } else { ineq.cmp };
    let boundary = Fraction::integer(rhs).div_int(a).unwrap_or(Fraction::ZERO);
    if a != 1 {
        steps.push(Step::new(
            Rule::DivideBothSides { divisor: a, reverses },
            format!("x {} {}/{} = {}", cmp, rhs, a, boundary),
        ));
    }
    if !boundary.is_integer() {
        steps.push(Step::new(Rule::Decimal, format!("x {} {}", cmp, format_number(boundary.value()))));
    }

    InequalitySolution::Bounded { boundary, cmp }
}
