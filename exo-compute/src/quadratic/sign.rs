//! Sign analysis of a trinomial, and quadratic inequalities.

use super::{discriminant_steps, Quadratic, Roots};
use crate::{
    error::DegenerateEquation,
    fmt::format_number,
    set::{Bound, Comparison, Interval, SolutionSet},
    step::{Rule, Step},
    step_collector::StepCollector,
};
use log::trace;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The sign of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// The sign of an integer.
    pub fn of(n: i64) -> Self {
        match n.signum() {
            1 => Self::Positive,
            -1 => Self::Negative,
            _ => Self::Zero,
        }
    }

    /// The opposite sign.
    pub fn opposite(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Negative => "-",
            Self::Zero => "0",
            Self::Positive => "+",
        })
    }
}

/// Where a trinomial is positive, negative or zero.
///
/// A trinomial has the sign of its leading coefficient outside its roots, and the opposite sign
/// between them. With a double root, only the root itself breaks the sign; with no real root, the
/// sign is constant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignTable {
    /// The sign of the leading coefficient.
    pub leading: Sign,

    /// The real roots of the trinomial.
    pub roots: Roots,
}

impl SignTable {
    /// Builds the sign table of the given trinomial.
    pub fn new(q: &Quadratic) -> Self {
        Self { leading: Sign::of(q.a()), roots: q.roots() }
    }

    /// The sign of the trinomial at `x`.
    pub fn sign_at(&self, x: f64) -> Sign {
        match self.roots {
            Roots::None => self.leading,
            Roots::One { x0 } if x == x0 => Sign::Zero,
            Roots::One { .. } => self.leading,
            Roots::Two { x1, x2 } if x == x1 || x == x2 => Sign::Zero,
            Roots::Two { x1, x2 } if x2 < x && x < x1 => self.leading.opposite(),
            Roots::Two { .. } => self.leading,
        }
    }

    /// The values `x` for which `ax² + bx + c op 0` holds.
    pub fn solution_set(&self, cmp: Comparison) -> SolutionSet {
        let wanted = if cmp.is_greater() { Sign::Positive } else { Sign::Negative };
        let closed = !cmp.is_strict();
        let bound = |value| Some(Bound { value, closed });

        match self.roots {
            Roots::None if self.leading == wanted => SolutionSet::AllReals,
            Roots::None => SolutionSet::Empty,
            Roots::One { .. } if self.leading == wanted && closed => SolutionSet::AllReals,
            Roots::One { x0 } if self.leading == wanted => SolutionSet::Union(vec![
                Interval { lower: None, upper: bound(x0) },
                Interval { lower: bound(x0), upper: None },
            ]),
            Roots::One { x0 } if closed => SolutionSet::Points(vec![x0]),
            Roots::One { .. } => SolutionSet::Empty,
            Roots::Two { x1, x2 } if self.leading == wanted => SolutionSet::Union(vec![
                Interval { lower: None, upper: bound(x2) },
                Interval { lower: bound(x1), upper: None },
            ]),
            Roots::Two { x1, x2 } => SolutionSet::Union(vec![Interval { lower: bound(x2), upper: bound(x1) }]),
        }
    }
}

impl Display for SignTable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.roots {
            Roots::None => write!(f, "x ∈ ℝ: {}", self.leading),
            Roots::One { x0 } => {
                let x0 = format_number(x0);
                write!(f, "x < {}: {} | x = {}: 0 | x > {}: {}", x0, self.leading, x0, x0, self.leading)
            },
            Roots::Two { x1, x2 } => {
                let (lo, hi) = (format_number(x2), format_number(x1));
                write!(
                    f,
                    "x < {}: {} | x = {}: 0 | {} < x < {}: {} | x = {}: 0 | x > {}: {}",
                    lo, self.leading, lo, lo, hi, self.leading.opposite(), hi, hi, self.leading,
                )
            },
        }
    }
}

/// The inequality `ax² + bx + c op 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuadraticInequality {
    pub quadratic: Quadratic,
    pub cmp: Comparison,
}

impl Display for QuadraticInequality {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} {} 0", self.quadratic, self.cmp)
    }
}

/// Solves `ax² + bx + c op 0` from the sign table of the trinomial.
///
/// Boundary roots belong to the solution set only for `≤` and `≥`.
pub fn solve_inequality(
    a: i64,
    b: i64,
    c: i64,
    cmp: Comparison,
    steps: &mut dyn StepCollector<Step>,
) -> Result<SolutionSet, DegenerateEquation> {
    let ineq = QuadraticInequality { quadratic: Quadratic::new(a, b, c)?, cmp };
    trace!("solving {}", ineq);
    steps.push(Step::new(Rule::Given, ineq.to_string()));
    discriminant_steps(&ineq.quadratic, steps);

    let table = SignTable::new(&ineq.quadratic);
    steps.push(Step::new(Rule::SignTable, table.to_string()));

    let set = table.solution_set(cmp);
    steps.push(Step::new(Rule::SelectIntervals { cmp }, format!("x ∈ {}", set)));
    Ok(set)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn solve(a: i64, b: i64, c: i64, cmp: Comparison) -> SolutionSet {
        solve_inequality(a, b, c, cmp, &mut ()).unwrap()
    }

    #[test]
    fn outside_the_roots() {
        assert_eq!(solve(1, -5, 6, Comparison::Greater).to_string(), "(-∞, 2) ∪ (3, +∞)");
        assert_eq!(solve(1, -5, 6, Comparison::GreaterEq).to_string(), "(-∞, 2] ∪ [3, +∞)");
    }

    #[test]
    fn between_the_roots() {
        assert_eq!(solve(1, -5, 6, Comparison::Less).to_string(), "(2, 3)");
        assert_eq!(solve(-1, 5, -6, Comparison::GreaterEq).to_string(), "[2, 3]");
    }

    #[test]
    fn double_root() {
        assert_eq!(solve(1, -4, 4, Comparison::Greater).to_string(), "ℝ \\ {2}");
        assert_eq!(solve(1, -4, 4, Comparison::GreaterEq), SolutionSet::AllReals);
        assert_eq!(solve(1, -4, 4, Comparison::Less), SolutionSet::Empty);
        assert_eq!(solve(1, -4, 4, Comparison::LessEq), SolutionSet::Points(vec![2.0]));
    }

    #[test]
    fn no_root() {
        assert_eq!(solve(1, 2, 5, Comparison::Greater), SolutionSet::AllReals);
        assert_eq!(solve(1, 2, 5, Comparison::LessEq), SolutionSet::Empty);
        assert_eq!(solve(-2, 0, -1, Comparison::Less), SolutionSet::AllReals);
    }

    #[test]
    fn degenerate() {
        assert_eq!(
            solve_inequality(0, 1, 1, Comparison::Less, &mut ()),
            Err(DegenerateEquation::QUADRATIC),
        );
    }

    #[test]
    fn set_agrees_with_evaluation() {
        let samples = (-80..=80).map(|i| i as f64 / 8.0 + 0.0625).collect::<Vec<_>>();
        for a in [-3, -1, 1, 2] {
            for b in -6..=6 {
                for c in -6..=6 {
                    let q = Quadratic::new(a, b, c).unwrap();
                    let table = SignTable::new(&q);
                    for cmp in Comparison::ALL {
                        let set = table.solution_set(cmp);
                        for &x in &samples {
                            let y = q.eval(x);
                            if y.abs() < 1e-9 {
                                continue;
                            }
                            assert_eq!(set.contains(x), cmp.holds(y, 0.0), "{} {} 0 at x = {}", q, cmp, x);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn sign_at_roots() {
        let table = SignTable::new(&Quadratic::new(1, -5, 6).unwrap());
        assert_eq!(table.sign_at(2.0), Sign::Zero);
        assert_eq!(table.sign_at(2.5), Sign::Negative);
        assert_eq!(table.sign_at(10.0), Sign::Positive);
        assert_eq!(table.to_string(), "x < 2: + | x = 2: 0 | 2 < x < 3: - | x = 3: 0 | x > 3: +");
    }
}
