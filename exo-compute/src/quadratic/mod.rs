//! Quadratic equations `ax² + bx + c = 0`: discriminant, roots, canonical form, particular forms
//! and the sum and product of the roots.
//!
//! Roots are always reported in decreasing order: `x1` is the larger root and `x2` the smaller
//! one, whatever the sign of `a`.

pub mod sign;

use crate::{
    error::DegenerateEquation,
    fmt::{format_number, format_sum},
    fraction::Fraction,
    number::{is_square, isqrt, simplify_square_root},
    set::SolutionSet,
    step::{Rule, Step},
    step_collector::StepCollector,
};
use log::trace;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The trinomial `ax² + bx + c`, with `a ≠ 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawQuadratic"))]
pub struct Quadratic {
    a: i64,
    b: i64,
    c: i64,
}

/// The coefficients of a [`Quadratic`] as they are deserialized, before `a ≠ 0` is checked.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawQuadratic {
    a: i64,
    b: i64,
    c: i64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawQuadratic> for Quadratic {
    type Error = DegenerateEquation;

    fn try_from(raw: RawQuadratic) -> Result<Self, Self::Error> {
        Self::new(raw.a, raw.b, raw.c)
    }
}

impl Quadratic {
    /// Creates the trinomial `ax² + bx + c`.
    ///
    /// Returns [`DegenerateEquation`] if `a = 0`.
    pub fn new(a: i64, b: i64, c: i64) -> Result<Self, DegenerateEquation> {
        if a == 0 {
            Err(DegenerateEquation::QUADRATIC)
        } else {
            Ok(Self { a, b, c })
        }
    }

    pub fn a(&self) -> i64 {
        self.a
    }

    pub fn b(&self) -> i64 {
        self.b
    }

    pub fn c(&self) -> i64 {
        self.c
    }

    /// The discriminant `Δ = b² - 4ac`.
    pub fn discriminant(&self) -> i64 {
        self.b * self.b - 4 * self.a * self.c
    }

    /// The real roots of the trinomial, determined by the sign of the discriminant.
    pub fn roots(&self) -> Roots {
        let delta = self.discriminant();
        match delta.signum() {
            1 => {
                let sqrt_delta = (delta as f64).sqrt();
                let denom = 2.0 * self.a as f64;
                let plus = (-self.b as f64 + sqrt_delta) / denom;
                let minus = (-self.b as f64 - sqrt_delta) / denom;
                Roots::Two { x1: plus.max(minus), x2: plus.min(minus) }
            },
            0 => Roots::One { x0: self.double_root().value() },
            _ => Roots::None,
        }
    }

    /// The value `-b / 2a`, which is the root when the discriminant is zero.
    fn double_root(&self) -> Fraction {
        Fraction::integer(-self.b).div_int(2 * self.a).unwrap_or(Fraction::ZERO)
    }

    /// The canonical form `a(x - α)² + β`, with `α = -b/2a` and `β = c - b²/4a`.
    pub fn canonical_form(&self) -> CanonicalForm {
        let four_a = 4 * self.a;
        let beta = Fraction::integer(four_a * self.c - self.b * self.b)
            .div_int(four_a)
            .unwrap_or(Fraction::ZERO);
        CanonicalForm { a: self.a, alpha: self.double_root(), beta }
    }

    /// The sum `-b/a` and the product `c/a` of the roots.
    pub fn vieta(&self) -> Vieta {
        let sum = Fraction::integer(-self.b).div_int(self.a).unwrap_or(Fraction::ZERO);
        let product = Fraction::integer(self.c).div_int(self.a).unwrap_or(Fraction::ZERO);
        Vieta { sum, product, roots: self.roots() }
    }

    /// Evaluates the trinomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        (self.a as f64 * x + self.b as f64) * x + self.c as f64
    }
}

impl Display for Quadratic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", format_sum(&[(self.a, "x²"), (self.b, "x"), (self.c, "")]))
    }
}

/// The real roots of a quadratic equation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Roots {
    /// Two distinct roots, with `x1 > x2`.
    Two { x1: f64, x2: f64 },

    /// One double root.
    One { x0: f64 },

    /// No real root.
    None,
}

impl Roots {
    /// The number of distinct real roots.
    pub fn count(&self) -> usize {
        match self {
            Self::Two { .. } => 2,
            Self::One { .. } => 1,
            Self::None => 0,
        }
    }

    /// The roots as a set, in increasing order.
    pub fn to_set(&self) -> SolutionSet {
        match *self {
            Self::Two { x1, x2 } => SolutionSet::Points(vec![x2, x1]),
            Self::One { x0 } => SolutionSet::Points(vec![x0]),
            Self::None => SolutionSet::Empty,
        }
    }

    /// The two roots `center ± √k`, or the double root `center` when `k = 0`.
    fn around(center: Fraction, k: Fraction) -> Self {
        if k.is_zero() {
            Self::One { x0: center.value() }
        } else if k > Fraction::ZERO {
            let offset = k.value().sqrt();
            Self::Two { x1: center.value() + offset, x2: center.value() - offset }
        } else {
            Self::None
        }
    }
}

impl Display for Roots {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Two { x1, x2 } => write!(f, "x1 = {}, x2 = {}", format_number(x1), format_number(x2)),
            Self::One { x0 } => write!(f, "x0 = {}", format_number(x0)),
            Self::None => write!(f, "no real root"),
        }
    }
}

/// The canonical form `a(x - α)² + β` of a trinomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CanonicalForm {
    pub a: i64,
    pub alpha: Fraction,
    pub beta: Fraction,
}

impl Display for CanonicalForm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.a {
            1 => {},
            -1 => write!(f, "-")?,
            a => write!(f, "{}", a)?,
        }
        write!(f, "{}", shifted_square(self.alpha))?;
        if self.beta > Fraction::ZERO {
            write!(f, " + {}", self.beta)
        } else if self.beta < Fraction::ZERO {
            write!(f, " - {}", -self.beta)
        } else {
            Ok(())
        }
    }
}

/// Formats `x - h`.
fn shifted(h: Fraction) -> String {
    if h > Fraction::ZERO {
        format!("x - {}", h)
    } else if h < Fraction::ZERO {
        format!("x + {}", -h)
    } else {
        "x".to_string()
    }
}

/// Formats `(x - h)²`.
fn shifted_square(h: Fraction) -> String {
    if h.is_zero() {
        "x²".to_string()
    } else {
        format!("({})²", shifted(h))
    }
}

/// Parenthesizes negative numbers.
fn paren(n: i64) -> String {
    if n < 0 {
        format!("({})", n)
    } else {
        n.to_string()
    }
}

/// Formats `√k` as exactly as possible: a fraction if `k` is the square of a fraction, a
/// simplified root if `k` is an integer.
fn sqrt_text(k: Fraction) -> String {
    let (num, den) = (k.num(), k.den());
    if is_square(num) && is_square(den) {
        Fraction::new(isqrt(num as u64) as i64, isqrt(den as u64) as i64)
            .map(|r| r.to_string())
            .unwrap_or_default()
    } else if den == 1 {
        simplify_square_root(num as u64).to_string()
    } else {
        format!("√({})", k)
    }
}

/// The result of solving a quadratic equation with its discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscriminantSolution {
    pub delta: i64,
    pub roots: Roots,
}

impl Display for DiscriminantSolution {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Δ = {}, {}", self.delta, self.roots)
    }
}

/// Returns the discriminant `b² - 4ac` of `ax² + bx + c`.
///
/// Returns [`DegenerateEquation`] if `a = 0`.
pub fn discriminant(a: i64, b: i64, c: i64) -> Result<i64, DegenerateEquation> {
    Ok(Quadratic::new(a, b, c)?.discriminant())
}

/// Returns the canonical form of `ax² + bx + c`.
///
/// Returns [`DegenerateEquation`] if `a = 0`.
pub fn canonical_form(a: i64, b: i64, c: i64) -> Result<CanonicalForm, DegenerateEquation> {
    Ok(Quadratic::new(a, b, c)?.canonical_form())
}

/// Formats `(-b ± √Δ) / 2a` with its value.
fn root_text(q: &Quadratic, delta: i64, sign: char) -> (String, f64) {
    let value = (-q.b as f64 + if sign == '+' { 1.0 } else { -1.0 } * (delta as f64).sqrt()) / (2.0 * q.a as f64);
    let (eq, shown) = if is_square(delta) { ('=', isqrt(delta as u64).to_string()) } else { ('≈', format!("√{}", delta)) };
    let text = format!("({} {} {})/{} {} {}", -q.b, sign, shown, 2 * q.a, eq, format_number(value));
    (text, value)
}

/// Computes the discriminant and the roots, without the statement step.
pub(crate) fn discriminant_steps(q: &Quadratic, steps: &mut dyn StepCollector<Step>) -> DiscriminantSolution {
    let delta = q.discriminant();
    steps.push(Step::new(
        Rule::Discriminant,
        format!("Δ = {}² - 4 × {} × {} = {}", paren(q.b), paren(q.a), paren(q.c), delta),
    ));

    let roots = q.roots();
    match roots {
        Roots::Two { .. } if steps.is_collecting() => {
            let (mut hi, mut lo) = (root_text(q, delta, '+'), root_text(q, delta, '-'));
            if hi.1 < lo.1 {
                std::mem::swap(&mut hi, &mut lo);
            }
            steps.push(Step::new(Rule::RootFormula, format!("x1 = {}, x2 = {}", hi.0, lo.0)));
        },
        Roots::Two { .. } => {},
        Roots::One { .. } => {
            steps.push(Step::new(
                Rule::DoubleRoot,
                format!("x0 = {}/{} = {}", -q.b, 2 * q.a, q.double_root()),
            ));
        },
        Roots::None => steps.push(Step::new(Rule::NoRealRoot, format!("Δ = {} < 0", delta))),
    }

    DiscriminantSolution { delta, roots }
}

/// Solves `ax² + bx + c = 0` with the discriminant.
///
/// ```
/// use exo_compute::quadratic::{solve_by_discriminant, Roots};
///
/// let solution = solve_by_discriminant(1, -5, 6, &mut ()).unwrap();
/// assert_eq!(solution.delta, 1);
/// assert_eq!(solution.roots, Roots::Two { x1: 3.0, x2: 2.0 });
/// ```
pub fn solve_by_discriminant(
    a: i64,
    b: i64,
    c: i64,
    steps: &mut dyn StepCollector<Step>,
) -> Result<DiscriminantSolution, DegenerateEquation> {
    let q = Quadratic::new(a, b, c)?;
    trace!("solving {} = 0 with the discriminant", q);
    steps.push(Step::new(Rule::Given, format!("{} = 0", q)));
    Ok(discriminant_steps(&q, steps))
}

/// Solves `(x - h)² = k`, pushing the final steps.
fn solve_square(h: Fraction, k: Fraction, steps: &mut dyn StepCollector<Step>) -> Roots {
    let unknown = shifted(h);
    let roots = Roots::around(h, k);
    match roots {
        Roots::Two { x1, x2 } => {
            steps.push(Step::new(Rule::SquareRoot, format!("{} = ±{}", unknown, sqrt_text(k))));
            steps.push(Step::new(
                Rule::Simplify,
                format!("x1 = {}, x2 = {}", format_number(x1), format_number(x2)),
            ));
        },
        Roots::One { .. } => steps.push(Step::new(Rule::DoubleRoot, format!("{} = 0, x0 = {}", unknown, h))),
        Roots::None => steps.push(Step::new(
            Rule::NoRealRoot,
            format!("a square cannot equal {} < 0", k),
        )),
    }
    roots
}

/// Solves `ax² + bx + c = 0` by completing the square: `(x - α)² = -β/a`.
pub fn solve_by_canonical_form(
    a: i64,
    b: i64,
    c: i64,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Roots, DegenerateEquation> {
    let q = Quadratic::new(a, b, c)?;
    trace!("solving {} = 0 with the canonical form", q);
    steps.push(Step::new(Rule::Given, format!("{} = 0", q)));

    let form = q.canonical_form();
    steps.push(Step::new(Rule::CanonicalForm, format!("{} = 0", form)));

    let k = (-form.beta).div_int(a).unwrap_or(Fraction::ZERO);
    steps.push(Step::new(Rule::IsolateSquare, format!("{} = {}", shifted_square(form.alpha), k)));
    Ok(solve_square(form.alpha, k, steps))
}

/// Quadratic equations that can be solved without the discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParticularForm {
    /// `ax² + c = 0`
    NoLinearTerm { a: i64, c: i64 },

    /// `ax² + bx = 0`
    NoConstant { a: i64, b: i64 },

    /// `(x - h)² = k`
    ShiftedSquare { h: i64, k: i64 },
}

impl Display for ParticularForm {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Self::NoLinearTerm { a, c } => write!(f, "{} = 0", format_sum(&[(a, "x²"), (c, "")])),
            Self::NoConstant { a, b } => write!(f, "{} = 0", format_sum(&[(a, "x²"), (b, "x")])),
            Self::ShiftedSquare { h, k } => write!(f, "{} = {}", shifted_square(Fraction::integer(h)), k),
        }
    }
}

/// Solves a quadratic equation of a particular form.
///
/// Returns [`DegenerateEquation`] if the `x²` coefficient is zero.
pub fn solve_particular(form: &ParticularForm, steps: &mut dyn StepCollector<Step>) -> Result<Roots, DegenerateEquation> {
    trace!("solving {}", form);
    match *form {
        ParticularForm::NoLinearTerm { a, c } => {
            Quadratic::new(a, 0, c)?;
            steps.push(Step::new(Rule::Given, form.to_string()));
            let k = Fraction::integer(-c).div_int(a).unwrap_or(Fraction::ZERO);
            steps.push(Step::new(Rule::IsolateSquare, format!("x² = {}/{} = {}", -c, a, k)));
            Ok(solve_square(Fraction::ZERO, k, steps))
        },
        ParticularForm::NoConstant { a, b } => {
            Quadratic::new(a, b, 0)?;
            steps.push(Step::new(Rule::Given, form.to_string()));
            steps.push(Step::new(Rule::FactorOutX, format!("x({}) = 0", format_sum(&[(a, "x"), (b, "")]))));

            let other = Fraction::integer(-b).div_int(a).unwrap_or(Fraction::ZERO);
            steps.push(Step::new(
                Rule::ZeroProduct,
                format!("x = 0 or {} = 0, so x = 0 or x = {}", format_sum(&[(a, "x"), (b, "")]), other),
            ));

            let other = other.value();
            Ok(if b == 0 {
                Roots::One { x0: 0.0 }
            } else {
                Roots::Two { x1: other.max(0.0), x2: other.min(0.0) }
            })
        },
        ParticularForm::ShiftedSquare { h, k } => {
            steps.push(Step::new(Rule::Given, form.to_string()));
            Ok(solve_square(Fraction::integer(h), Fraction::integer(k), steps))
        },
    }
}

/// The sum and the product of the roots of a trinomial.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vieta {
    pub sum: Fraction,
    pub product: Fraction,
    pub roots: Roots,
}

impl Display for Vieta {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.roots {
            Roots::One { x0 } => write!(
                f,
                "double root x0 = {}: 2x0 = {}, x0² = {}",
                format_number(x0),
                self.sum,
                self.product,
            ),
            _ => write!(f, "S = {}, P = {}", self.sum, self.product),
        }
    }
}

/// Computes the sum `S = -b/a` and the product `P = c/a` of the roots of `ax² + bx + c`.
///
/// With a double root `x0`, `S = 2x0` and `P = x0²`.
pub fn sum_and_product(a: i64, b: i64, c: i64, steps: &mut dyn StepCollector<Step>) -> Result<Vieta, DegenerateEquation> {
    let q = Quadratic::new(a, b, c)?;
    steps.push(Step::new(Rule::Given, format!("{} = 0", q)));
    let DiscriminantSolution { roots, .. } = discriminant_steps(&q, steps);
    let vieta = q.vieta();

    match roots {
        Roots::One { .. } => {
            steps.push(Step::new(Rule::SumOfRoots, format!("2x0 = {}/{} = {}", -b, a, vieta.sum)));
            steps.push(Step::new(Rule::ProductOfRoots, format!("x0² = {}/{} = {}", c, a, vieta.product)));
        },
        _ => {
            steps.push(Step::new(Rule::SumOfRoots, format!("S = x1 + x2 = {}/{} = {}", -b, a, vieta.sum)));
            steps.push(Step::new(Rule::ProductOfRoots, format!("P = x1 × x2 = {}/{} = {}", c, a, vieta.product)));
        },
    }

    Ok(vieta)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn two_roots() {
        let solution = solve_by_discriminant(1, -5, 6, &mut ()).unwrap();
        assert_eq!(solution, DiscriminantSolution { delta: 1, roots: Roots::Two { x1: 3.0, x2: 2.0 } });
        assert_eq!(solution.roots.count(), 2);
    }

    #[test]
    fn no_root() {
        let solution = solve_by_discriminant(1, 2, 5, &mut ()).unwrap();
        assert_eq!(solution, DiscriminantSolution { delta: -16, roots: Roots::None });
        assert_eq!(solution.roots.count(), 0);
    }

    #[test]
    fn double_root() {
        let solution = solve_by_discriminant(1, -4, 4, &mut ()).unwrap();
        assert_eq!(solution.roots, Roots::One { x0: 2.0 });
    }

    #[test]
    fn degenerate() {
        assert_eq!(solve_by_discriminant(0, 2, 1, &mut ()), Err(DegenerateEquation::QUADRATIC));
        assert_eq!(discriminant(0, 1, 1), Err(DegenerateEquation::QUADRATIC));
        assert!(solve_particular(&ParticularForm::NoConstant { a: 0, b: 3 }, &mut ()).is_err());
    }

    #[test]
    fn larger_root_first_for_negative_leading_coefficient() {
        // -x² + 5x - 6 has the roots 2 and 3; the `+√Δ` root is 2 here
        let solution = solve_by_discriminant(-1, 5, -6, &mut ()).unwrap();
        assert_eq!(solution.roots, Roots::Two { x1: 3.0, x2: 2.0 });
    }

    #[test]
    fn discriminant_matches_canonical_form() {
        for a in -5..=5i64 {
            for b in -10..=10 {
                for c in -10..=10 {
                    if a == 0 {
                        continue;
                    }
                    let form = canonical_form(a, b, c).unwrap();
                    let delta = discriminant(a, b, c).unwrap();
                    assert_eq!(Fraction::integer(delta), Fraction::integer(-4 * a) * form.beta);
                }
            }
        }
    }

    #[test]
    fn vieta_matches_roots() {
        for (a, b, c) in [(1, -5, 6), (2, 3, -7), (-3, 4, 5), (5, -10, -1)] {
            let q = Quadratic::new(a, b, c).unwrap();
            let Roots::Two { x1, x2 } = q.roots() else {
                panic!("expected two roots");
            };
            let vieta = q.vieta();
            assert!(x1 > x2);
            assert_float_relative_eq!(x1 + x2, vieta.sum.value(), 1e-9);
            assert_float_relative_eq!(x1 * x2, vieta.product.value(), 1e-9);
        }
    }

    #[test]
    fn vieta_with_double_root() {
        let mut steps = Vec::new();
        let vieta = sum_and_product(4, -12, 9, &mut steps).unwrap();
        assert_eq!(vieta.roots, Roots::One { x0: 1.5 });
        assert_eq!(vieta.sum, Fraction::new(3, 1).unwrap());
        assert_eq!(vieta.product, Fraction::new(9, 4).unwrap());
        assert!(steps.iter().any(|s| s.expression == "2x0 = 12/4 = 3"));
    }

    #[test]
    fn canonical_form_display() {
        assert_eq!(canonical_form(1, -5, 6).unwrap().to_string(), "(x - 5/2)² - 1/4");
        assert_eq!(canonical_form(2, 4, 5).unwrap().to_string(), "2(x + 1)² + 3");
        assert_eq!(canonical_form(-1, 0, 0).unwrap().to_string(), "-x²");
    }

    #[test]
    fn canonical_solving_agrees_with_discriminant() {
        for (a, b, c) in [(1, -5, 6), (2, 3, -7), (1, 2, 5), (1, -4, 4), (-2, 1, 3)] {
            let by_canonical = solve_by_canonical_form(a, b, c, &mut ()).unwrap();
            let by_discriminant = solve_by_discriminant(a, b, c, &mut ()).unwrap().roots;
            match (by_canonical, by_discriminant) {
                (Roots::Two { x1, x2 }, Roots::Two { x1: y1, x2: y2 }) => {
                    assert_float_relative_eq!(x1, y1, 1e-9);
                    assert_float_relative_eq!(x2, y2, 1e-9);
                },
                (left, right) => assert_eq!(left, right),
            }
        }
    }

    #[test]
    fn canonical_steps() {
        let mut steps = Vec::new();
        solve_by_canonical_form(1, -5, 6, &mut steps).unwrap();
        assert_eq!(
            steps.iter().map(|s| s.expression.as_str()).collect::<Vec<_>>(),
            vec![
                "x² - 5x + 6 = 0",
                "(x - 5/2)² - 1/4 = 0",
                "(x - 5/2)² = 1/4",
                "x - 5/2 = ±1/2",
                "x1 = 3, x2 = 2",
            ],
        );
    }

    #[test]
    fn particular_forms() {
        let roots = solve_particular(&ParticularForm::NoLinearTerm { a: 2, c: -18 }, &mut ()).unwrap();
        assert_eq!(roots, Roots::Two { x1: 3.0, x2: -3.0 });

        let roots = solve_particular(&ParticularForm::NoLinearTerm { a: 1, c: 4 }, &mut ()).unwrap();
        assert_eq!(roots, Roots::None);

        let roots = solve_particular(&ParticularForm::NoConstant { a: 2, b: 6 }, &mut ()).unwrap();
        assert_eq!(roots, Roots::Two { x1: 0.0, x2: -3.0 });

        let roots = solve_particular(&ParticularForm::ShiftedSquare { h: -1, k: 0 }, &mut ()).unwrap();
        assert_eq!(roots, Roots::One { x0: -1.0 });

        let roots = solve_particular(&ParticularForm::ShiftedSquare { h: 2, k: 9 }, &mut ()).unwrap();
        assert_eq!(roots, Roots::Two { x1: 5.0, x2: -1.0 });
    }

    #[test]
    fn particular_display() {
        assert_eq!(ParticularForm::NoLinearTerm { a: 3, c: -12 }.to_string(), "3x² - 12 = 0");
        assert_eq!(ParticularForm::NoConstant { a: -1, b: 4 }.to_string(), "-x² + 4x = 0");
        assert_eq!(ParticularForm::ShiftedSquare { h: -2, k: 7 }.to_string(), "(x + 2)² = 7");
    }

    #[test]
    fn irrational_roots_are_approximated() {
        let mut steps = Vec::new();
        solve_by_discriminant(1, -1, -1, &mut steps).unwrap();
        assert_eq!(steps[2].expression, "x1 = (1 + √5)/2 ≈ 1.618, x2 = (1 - √5)/2 ≈ -0.618");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_rejects_zero_leading_coefficient() {
        let q: Quadratic = toml::from_str("a = 2\nb = -3\nc = 1\n").unwrap();
        assert_eq!(q, Quadratic::new(2, -3, 1).unwrap());

        let err = toml::from_str::<Quadratic>("a = 0\nb = -3\nc = 1\n").unwrap_err();
        assert!(err.to_string().contains("x² coefficient"));
    }
}
