//! Systems of two linear equations in two unknowns, solved by substitution or by elimination.

use crate::{
    error::DivisionByZero,
    fmt::{format_factor, format_sum, format_term},
    fraction::Fraction,
    number::gcd,
    step::{Rule, Step},
    step_collector::StepCollector,
};
use log::trace;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The system `a1·x + b1·y = c1`, `a2·x + b2·y = c2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearSystem {
    pub a1: i64,
    pub b1: i64,
    pub c1: i64,
    pub a2: i64,
    pub b2: i64,
    pub c2: i64,
}

impl LinearSystem {
    /// The determinant `a1·b2 - a2·b1`. The system has a unique solution if and only if it is
    /// nonzero.
    pub fn determinant(&self) -> i64 {
        self.a1 * self.b2 - self.a2 * self.b1
    }

    /// The same system with the roles of the unknowns exchanged.
    fn transposed(&self) -> Self {
        Self { a1: self.b1, b1: self.a1, c1: self.c1, a2: self.b2, b2: self.a2, c2: self.c2 }
    }

    /// The same system with the equations exchanged.
    fn swapped(&self) -> Self {
        Self { a1: self.a2, b1: self.b2, c1: self.c2, a2: self.a1, b2: self.b1, c2: self.c1 }
    }

    /// Formats the equations with the given names for the unknowns, `x` first.
    fn equations(&self, (u, v): (char, char)) -> (String, String) {
        let (u, v) = (u.to_string(), v.to_string());
        let equation = |a: i64, b: i64, c: i64| {
            let terms = if u == "x" { [(a, u.as_str()), (b, v.as_str())] } else { [(b, v.as_str()), (a, u.as_str())] };
            format!("{} = {}", format_sum(&terms), c)
        };
        (equation(self.a1, self.b1, self.c1), equation(self.a2, self.b2, self.c2))
    }
}

impl Display for LinearSystem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let (first, second) = self.equations(('x', 'y'));
        write!(f, "{}; {}", first, second)
    }
}

/// The method used to solve a [`LinearSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    Substitution,
    Elimination,
}

/// The unique solution of a [`LinearSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SystemSolution {
    pub x: Fraction,
    pub y: Fraction,
}

impl Display for SystemSolution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "x = {}, y = {}", self.x, self.y)
    }
}

/// Checks the determinant of the system.
fn check_determinant(sys: &LinearSystem, steps: &mut dyn StepCollector<Step>) -> Result<i64, DivisionByZero> {
    steps.push(Step::new(Rule::Given, sys.to_string()));
    let det = sys.determinant();
    steps.push(Step::new(
        Rule::Determinant,
        format!(
            "{} × {} - {} × {} = {}",
            format_factor(sys.a1),
            format_factor(sys.b2),
            format_factor(sys.a2),
            format_factor(sys.b1),
            det,
        ),
    ));
    if det == 0 {
        trace!("system {} is proportional", sys);
        Err(DivisionByZero::DETERMINANT)
    } else {
        Ok(det)
    }
}

/// Solves the system by isolating an unknown in one equation and substituting it into the other.
///
/// The first nonzero coefficient among `a1`, `b1`, `a2`, `b2` is used as the pivot.
///
/// Returns [`DivisionByZero`] if the determinant is zero.
pub fn solve_by_substitution(sys: &LinearSystem, steps: &mut dyn StepCollector<Step>) -> Result<SystemSolution, DivisionByZero> {
    check_determinant(sys, steps)?;

    // a nonzero determinant guarantees a nonzero coefficient in each column and each row
    let (oriented, names, transposed) = if sys.a1 != 0 {
        (*sys, ('x', 'y'), false)
    } else if sys.b1 != 0 {
        (sys.transposed(), ('y', 'x'), true)
    } else if sys.a2 != 0 {
        (sys.swapped(), ('x', 'y'), false)
    } else {
        (sys.swapped().transposed(), ('y', 'x'), true)
    };
    let (u, v) = substitute(&oriented, names, steps)?;

    Ok(if transposed { SystemSolution { x: v, y: u } } else { SystemSolution { x: u, y: v } })
}

/// Substitution where `a1` is nonzero, returning the values of the first and second unknowns.
fn substitute(
    sys: &LinearSystem,
    (u, v): (char, char),
    steps: &mut dyn StepCollector<Step>,
) -> Result<(Fraction, Fraction), DivisionByZero> {
    let LinearSystem { a1: p, b1: q, c1: r, a2: s, b2: t, c2: w } = *sys;
    let v_name = v.to_string();

    let isolated = format!("({})/{}", format_sum(&[(r, ""), (-q, &v_name)]), format_factor(p));
    steps.push(Step::new(Rule::IsolateVariable { var: u }, format!("{} = {}", u, isolated)));
    steps.push(Step::new(
        Rule::Substitute,
        format!("{} × {}{} = {}", format_factor(s), isolated, format_term(t, &v_name, false), w),
    ));

    // multiplying by p: s(r - qv) + ptv = pw
    let (coef, constant) = (p * t - s * q, p * w - s * r);
    steps.push(Step::new(Rule::Simplify, format!("{} = {}", format_sum(&[(coef, &v_name)]), constant)));
    let v_value = Fraction::integer(constant).div_int(coef)?;
    steps.push(Step::new(
        Rule::DivideBothSides { divisor: coef, reverses: false },
        format!("{} = {}", v, v_value),
    ));

    let u_value = (Fraction::integer(r) - Fraction::integer(q) * v_value).div_int(p)?;
    steps.push(Step::new(
        Rule::BackSubstitute,
        format!("{} = ({} - {} × {})/{} = {}", u, r, format_factor(q), v_value.as_factor(), format_factor(p), u_value),
    ));
    Ok((u_value, v_value))
}

/// Solves the system by scaling the equations so that one unknown cancels when they are added.
///
/// The unknown whose coefficients have the smaller sum of absolute values is eliminated.
///
/// Returns [`DivisionByZero`] if the determinant is zero.
pub fn solve_by_elimination(sys: &LinearSystem, steps: &mut dyn StepCollector<Step>) -> Result<SystemSolution, DivisionByZero> {
    check_determinant(sys, steps)?;

    let eliminate_y = sys.b1.abs() + sys.b2.abs() <= sys.a1.abs() + sys.a2.abs();
    Ok(if eliminate_y {
        let (x, y) = eliminate(sys, ('x', 'y'), steps)?;
        SystemSolution { x, y }
    } else {
        let (y, x) = eliminate(&sys.transposed(), ('y', 'x'), steps)?;
        SystemSolution { x, y }
    })
}

/// Elimination of the second unknown, returning the values of the first and second unknowns.
fn eliminate(
    sys: &LinearSystem,
    names: (char, char),
    steps: &mut dyn StepCollector<Step>,
) -> Result<(Fraction, Fraction), DivisionByZero> {
    let g = gcd(sys.b1, sys.b2).max(1);
    let (mut m1, mut m2) = (sys.b2 / g, -sys.b1 / g);
    if m1 < 0 {
        (m1, m2) = (-m1, -m2);
    }

    let scaled = LinearSystem {
        a1: m1 * sys.a1, b1: m1 * sys.b1, c1: m1 * sys.c1,
        a2: m2 * sys.a2, b2: m2 * sys.b2, c2: m2 * sys.c2,
    };
    let (first, second) = scaled.equations(names);
    steps.push(Step::new(Rule::ScaleEquations { first: m1, second: m2 }, format!("{}; {}", first, second)));

    let (coef, constant) = (scaled.a1 + scaled.a2, scaled.c1 + scaled.c2);
    let u_name = names.0.to_string();
    steps.push(Step::new(Rule::AddEquations, format!("{} = {}", format_sum(&[(coef, &u_name)]), constant)));
    let u = Fraction::integer(constant).div_int(coef)?;
    steps.push(Step::new(
        Rule::DivideBothSides { divisor: coef, reverses: false },
        format!("{} = {}", names.0, u),
    ));

    // a nonzero determinant guarantees one of the eliminated coefficients is nonzero
    let (a, b, c) = if sys.b1 != 0 { (sys.a1, sys.b1, sys.c1) } else { (sys.a2, sys.b2, sys.c2) };
    let v = (Fraction::integer(c) - Fraction::integer(a) * u).div_int(b)?;
    steps.push(Step::new(
        Rule::BackSubstitute,
        format!("{} = ({} - {} × {})/{} = {}", names.1, c, format_factor(a), u.as_factor(), format_factor(b), v),
    ));
    Ok((u, v))
}

/// Solves the system with the given method.
pub fn solve(sys: &LinearSystem, method: Method, steps: &mut dyn StepCollector<Step>) -> Result<SystemSolution, DivisionByZero> {
    trace!("solving {} by {:?}", sys, method);
    match method {
        Method::Substitution => solve_by_substitution(sys, steps),
        Method::Elimination => solve_by_elimination(sys, steps),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn system(a1: i64, b1: i64, c1: i64, a2: i64, b2: i64, c2: i64) -> LinearSystem {
        LinearSystem { a1, b1, c1, a2, b2, c2 }
    }

    fn int(n: i64) -> Fraction {
        Fraction::integer(n)
    }

    #[test]
    fn both_methods() {
        let sys = system(3, 5, 21, 2, -1, 1);
        let expected = SystemSolution { x: int(2), y: int(3) };
        assert_eq!(solve_by_substitution(&sys, &mut ()), Ok(expected));
        assert_eq!(solve_by_elimination(&sys, &mut ()), Ok(expected));
    }

    #[test]
    fn fractional_solution() {
        let sys = system(3, 5, 22, 2, -1, 1);
        let expected = SystemSolution { x: Fraction::new(27, 13).unwrap(), y: Fraction::new(41, 13).unwrap() };
        assert_eq!(solve_by_substitution(&sys, &mut ()), Ok(expected));
        assert_eq!(solve_by_elimination(&sys, &mut ()), Ok(expected));
    }

    #[test]
    fn methods_agree() {
        let coefs = [-3, -1, 0, 2, 5];
        for a1 in coefs {
            for b1 in coefs {
                for a2 in coefs {
                    for b2 in coefs {
                        let sys = system(a1, b1, 7, a2, b2, -4);
                        if sys.determinant() == 0 {
                            continue;
                        }
                        let by_substitution = solve_by_substitution(&sys, &mut ()).unwrap();
                        let by_elimination = solve_by_elimination(&sys, &mut ()).unwrap();
                        assert_eq!(by_substitution, by_elimination, "{}", sys);

                        let SystemSolution { x, y } = by_substitution;
                        assert_eq!(int(a1) * x + int(b1) * y, int(7));
                        assert_eq!(int(a2) * x + int(b2) * y, int(-4));
                    }
                }
            }
        }
    }

    #[test]
    fn zero_pivot() {
        let sys = system(0, 2, 6, 3, 1, 9);
        assert_eq!(solve_by_substitution(&sys, &mut ()), Ok(SystemSolution { x: int(2), y: int(3) }));
    }

    #[test]
    fn proportional() {
        let sys = system(1, 2, 3, 2, 4, 6);
        assert_eq!(solve_by_substitution(&sys, &mut ()), Err(DivisionByZero::DETERMINANT));
        assert_eq!(solve_by_elimination(&sys, &mut ()), Err(DivisionByZero::DETERMINANT));
        assert_eq!(solve_by_elimination(&system(1, 2, 3, 2, 4, 7), &mut ()), Err(DivisionByZero::DETERMINANT));
    }

    #[test]
    fn substitution_steps() {
        let mut steps = Vec::new();
        solve(&system(3, 5, 21, 2, -1, 1), Method::Substitution, &mut steps).unwrap();
        assert_eq!(
            steps.iter().map(|s| s.expression.as_str()).collect::<Vec<_>>(),
            vec![
                "3x + 5y = 21; 2x - y = 1",
                "3 × (-1) - 2 × 5 = -13",
                "x = (21 - 5y)/3",
                "2 × (21 - 5y)/3 - y = 1",
                "-13y = -39",
                "y = 3",
                "x = (21 - 5 × 3)/3 = 2",
            ],
        );
    }

    #[test]
    fn elimination_picks_smaller_coefficients() {
        let mut steps = Vec::new();
        solve(&system(3, 5, 21, 2, -1, 1), Method::Elimination, &mut steps).unwrap();
        // |3| + |2| < |5| + |-1|, so x is eliminated
        assert_eq!(steps[2].rule, Rule::ScaleEquations { first: 2, second: -3 });
        assert_eq!(steps[2].expression, "6x + 10y = 42; -6x + 3y = -3");
        assert_eq!(steps[3].expression, "13y = 39");
        assert_eq!(steps[5].expression, "x = (21 - 5 × 3)/3 = 2");
    }

    #[test]
    fn negative_factors_are_parenthesized() {
        let mut steps = Vec::new();
        solve(&system(-2, 3, 4, 1, 1, 3), Method::Substitution, &mut steps).unwrap();
        assert_eq!(steps[1].expression, "(-2) × 1 - 1 × 3 = -5");
        assert_eq!(steps[2].expression, "x = (4 - 3y)/(-2)");
        assert_eq!(steps[3].expression, "1 × (4 - 3y)/(-2) + y = 3");
    }
}
