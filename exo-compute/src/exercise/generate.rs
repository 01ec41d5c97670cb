//! Random generation of well-posed exercises.

use super::{
    Exercise,
    Failure,
    FractionExercise,
    PercentExercise,
    PowerExercise,
    QuadraticExercise,
    RadicalExercise,
    Topic,
};
use crate::{
    config::GeneratorConfig,
    error::UnsatisfiedConstraint,
    fraction::Operation,
    linear::{LinearEquation, LinearInequality},
    percent::Change,
    polynomial::{
        expand::Expansion,
        factor::Factorable,
        reduce::{DegreeClass, PolynomialTerms, Reduction, Term},
    },
    power::Scientific,
    quadratic::ParticularForm,
    random::{choose, rand_int, CoefRange},
    set::Comparison,
    system::{LinearSystem, Method},
};
use exo_error::Error;
use log::debug;
use rand::Rng;

/// The number of candidates drawn before a generator gives up on a constraint.
const MAX_ATTEMPTS: usize = 100;

/// Draws candidates until one is accepted.
///
/// Returns [`UnsatisfiedConstraint`] if none of [`MAX_ATTEMPTS`] candidates is accepted.
fn draw_until<R: Rng + ?Sized, T>(
    rng: &mut R,
    constraint: &'static str,
    setting: &'static str,
    mut candidate: impl FnMut(&mut R) -> Result<T, Failure>,
    mut accept: impl FnMut(&T, &mut R) -> bool,
) -> Result<T, Failure> {
    for attempt in 1..=MAX_ATTEMPTS {
        let value = candidate(rng)?;
        if accept(&value, rng) {
            return Ok(value);
        }
        debug!("rejected candidate for {} (attempt {})", constraint, attempt);
    }
    Err(UnsatisfiedConstraint { constraint, setting, attempts: MAX_ATTEMPTS }.into())
}

/// Clamps a configured probability to `[0, 1]`.
fn probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Draws a random exercise of the given topic.
///
/// The exercise satisfies the constraints that keep it well-posed: nonzero leading
/// coefficients, systems with a unique integer solution, radicands that simplify, and so on.
/// Fails if the configuration has an empty range or pool, or if its ranges are too narrow to
/// satisfy a constraint.
pub fn generate<R: Rng + ?Sized>(topic: Topic, config: &GeneratorConfig, rng: &mut R) -> Result<Exercise, Error> {
    draw(topic, config, rng).map_err(|failure| Error { spans: Vec::new(), kind: failure.0 })
}

fn draw<R: Rng + ?Sized>(topic: Topic, config: &GeneratorConfig, rng: &mut R) -> Result<Exercise, Failure> {
    let exercise = match topic {
        Topic::LinearEquation => Exercise::LinearEquation(linear_equation(config, rng)?),
        Topic::LinearInequality => Exercise::LinearInequality(linear_inequality(config, rng)?),
        Topic::QuadraticEquation => Exercise::Quadratic(quadratic(config, rng)?),
        Topic::QuadraticInequality => {
            let q = &config.quadratic;
            Exercise::QuadraticInequality {
                a: q.leading.sample(rng)?,
                b: q.coefficient.sample(rng)?,
                c: q.coefficient.sample(rng)?,
                cmp: *choose(rng, &Comparison::ALL, "comparison")?,
            }
        },
        Topic::System => {
            let method = if rng.gen_bool(0.5) { Method::Substitution } else { Method::Elimination };
            Exercise::System { system: system(config, rng)?, method }
        },
        Topic::Expansion => Exercise::Expansion(expansion(config, rng)?),
        Topic::Factoring => Exercise::Factoring(factorable(config, rng)?),
        Topic::Reduction => Exercise::Reduction(reduction(config, rng)?),
        Topic::Fraction => Exercise::Fraction(fraction(config, rng)?),
        Topic::Percentage => Exercise::Percentage(percentage(config, rng)?),
        Topic::Power => Exercise::Power(power(config, rng)?),
        Topic::Radical => Exercise::Radical(radical(config, rng)?),
    };
    debug!("generated `{}`", exercise.statement());
    Ok(exercise)
}

fn linear_equation<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<LinearEquation, Failure> {
    let l = &config.linear;
    let a = l.leading.sample(rng)?;
    if rng.gen_bool(0.5) {
        return Ok(LinearEquation::one_sided(a, l.constant.sample(rng)?, l.constant.sample(rng)?));
    }

    // occasionally keep an equation whose `x` terms cancel
    let keep_degenerate = probability(l.degenerate_probability);
    let c = draw_until(
        rng,
        "a second `x` coefficient",
        "linear.leading",
        |rng| Ok(l.leading.sample(rng)?),
        |&c, rng| a != c || rng.gen_bool(keep_degenerate),
    )?;
    Ok(LinearEquation::two_sided(a, l.constant.sample(rng)?, c, l.constant.sample(rng)?))
}

fn linear_inequality<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<LinearInequality, Failure> {
    let l = &config.linear;
    let a = l.leading.sample(rng)?;
    let cmp = *choose(rng, &Comparison::ALL, "comparison")?;
    if rng.gen_bool(0.5) {
        return Ok(LinearInequality::one_sided(a, l.constant.sample(rng)?, cmp, l.constant.sample(rng)?));
    }

    let c = draw_until(
        rng,
        "an inequality whose `x` terms do not cancel",
        "linear.leading",
        |rng| Ok(l.leading.sample(rng)?),
        |&c, _| a != c,
    )?;
    Ok(LinearInequality::two_sided(a, l.constant.sample(rng)?, cmp, c, l.constant.sample(rng)?))
}

fn quadratic<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<QuadraticExercise, Failure> {
    let q = &config.quadratic;
    Ok(match rng.gen_range(0..4) {
        0 => QuadraticExercise::Discriminant {
            a: q.leading.sample(rng)?,
            b: q.coefficient.sample(rng)?,
            c: q.coefficient.sample(rng)?,
        },
        1 => QuadraticExercise::Canonical {
            a: q.canonical_leading.sample(rng)?,
            b: q.coefficient.sample(rng)?,
            c: q.coefficient.sample(rng)?,
        },
        2 => QuadraticExercise::Particular(match rng.gen_range(0..3) {
            0 => ParticularForm::NoLinearTerm { a: q.leading.sample(rng)?, c: q.particular_constant.sample(rng)? },
            1 => {
                let b = CoefRange { avoid_zero: true, ..q.coefficient };
                ParticularForm::NoConstant { a: q.leading.sample(rng)?, b: b.sample(rng)? }
            },
            _ => ParticularForm::ShiftedSquare { h: q.shift.sample(rng)?, k: q.square.sample(rng)? },
        }),
        _ => QuadraticExercise::SumAndProduct {
            a: 1,
            b: q.vieta_coefficient.sample(rng)?,
            c: q.vieta_coefficient.sample(rng)?,
        },
    })
}

/// Builds a system from a chosen integer solution, so that both constants are integers.
fn system<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<LinearSystem, Failure> {
    let s = &config.system;
    let (x, y) = (s.solution.sample(rng)?, s.solution.sample(rng)?);
    let (a1, b1) = (s.coefficient.sample(rng)?, s.coefficient.sample(rng)?);
    let (a2, b2) = draw_until(
        rng,
        "a system with a unique solution",
        "system.coefficient",
        |rng| Ok((s.coefficient.sample(rng)?, s.coefficient.sample(rng)?)),
        |&(a2, b2), _| a1 * b2 != a2 * b1,
    )?;

    Ok(LinearSystem {
        a1,
        b1,
        c1: a1 * x + b1 * y,
        a2,
        b2,
        c2: a2 * x + b2 * y,
    })
}

fn expansion<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Expansion, Failure> {
    let e = &config.expansion;
    Ok(match rng.gen_range(0..5) {
        0 => Expansion::Simple { k: e.factor.sample(rng)?, a: e.leading.sample(rng)?, b: e.constant.sample(rng)? },
        1 => Expansion::Double {
            a: e.double_leading.sample(rng)?,
            b: e.constant.sample(rng)?,
            c: e.double_leading.sample(rng)?,
            d: e.constant.sample(rng)?,
        },
        kind => {
            let (a, b) = (e.identity_leading.sample(rng)?, e.identity_constant.sample(rng)?);
            match kind {
                2 => Expansion::SquareOfSum { a, b },
                3 => Expansion::SquareOfDifference { a, b },
                _ => Expansion::DifferenceOfSquares { a, b },
            }
        },
    })
}

fn factorable<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Factorable, Failure> {
    let f = &config.factoring;
    Ok(match rng.gen_range(0..3) {
        0 => {
            let factor = f.common_factor.sample(rng)?;
            Factorable::CommonFactor { a: factor * f.inner.sample(rng)?, b: factor * f.inner.sample(rng)? }
        },
        1 => {
            let (r, s) = (f.root_leading.sample(rng)?, f.difference_constant.sample(rng)?);
            Factorable::DifferenceOfSquares { lead: r * r, constant: -s * s }
        },
        _ => {
            let (r, s) = (f.root_leading.sample(rng)?, f.square_constant.sample(rng)?);
            let sign = if rng.gen_bool(0.5) { 1 } else { -1 };
            Factorable::PerfectSquare { a: r * r, b: sign * 2 * r * s, c: s * s }
        },
    })
}

fn reduction<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<Reduction, Failure> {
    let r = &config.reduction;
    let kind = rng.gen_range(0..3);
    if kind == 2 {
        return Ok(Reduction::Parenthesized {
            a: r.factor.sample(rng)?,
            b: r.inner.sample(rng)?,
            c: r.inner.sample(rng)?,
            d: r.coefficient.sample(rng)?,
            e: r.coefficient.sample(rng)?,
        });
    }

    let (linear_p, square_p) = (probability(r.linear_probability), probability(r.square_probability));
    let terms = draw_until(
        rng,
        "a sum of terms that does not reduce to zero",
        "reduction.coefficient",
        |rng| {
            let mut terms = Vec::with_capacity(r.terms);
            for _ in 0..r.terms {
                let class = if kind == 0 {
                    if rng.gen_bool(linear_p) { DegreeClass::Linear } else { DegreeClass::Constant }
                } else {
                    let roll = rng.gen::<f64>();
                    if roll < square_p {
                        DegreeClass::Square
                    } else if roll < 2.0 * square_p {
                        DegreeClass::Linear
                    } else {
                        DegreeClass::Constant
                    }
                };
                terms.push(Term::new(r.coefficient.sample(rng)?, class));
            }
            Ok(terms)
        },
        |terms, _| !PolynomialTerms::collect(terms).is_empty(),
    )?;
    Ok(Reduction::Terms(terms))
}

fn fraction<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<FractionExercise, Failure> {
    let f = &config.fraction;
    let op = match rng.gen_range(0..5) {
        0 => {
            let factor = f.simplify_factor.sample(rng)?;
            return Ok(FractionExercise::Simplify {
                num: f.simplify_numerator.sample(rng)? * factor,
                den: f.simplify_denominator.sample(rng)? * factor,
            });
        },
        1 => Operation::Add,
        2 => Operation::Sub,
        3 => Operation::Mul,
        _ => Operation::Div,
    };

    let denominators = match op {
        Operation::Add | Operation::Sub => &f.sum_denominator,
        Operation::Mul | Operation::Div => &f.product_denominator,
    };
    let mut lhs = (f.numerator.sample(rng)?, denominators.sample(rng)?);
    let mut rhs = (f.numerator.sample(rng)?, denominators.sample(rng)?);

    // keep differences nonnegative
    if op == Operation::Sub && rhs.0 * lhs.1 > lhs.0 * rhs.1 {
        let adjusted = lhs.0 * rhs.1 / lhs.1;
        if adjusted >= 1 {
            debug!("adjusted subtrahend numerator from {} to {}", rhs.0, adjusted);
            rhs.0 = adjusted;
        } else {
            debug!("swapped the operands of {}/{} - {}/{}", lhs.0, lhs.1, rhs.0, rhs.1);
            std::mem::swap(&mut lhs, &mut rhs);
        }
    }
    Ok(FractionExercise::Arithmetic { lhs, op, rhs })
}

fn random_change<R: Rng + ?Sized>(rng: &mut R) -> Change {
    if rng.gen_bool(0.5) {
        Change::Increase
    } else {
        Change::Decrease
    }
}

fn percentage<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<PercentExercise, Failure> {
    let p = &config.percent;
    Ok(match rng.gen_range(0..4) {
        0 => PercentExercise::Of {
            percent: *choose(rng, &p.percentages, "percent.percentages")? as f64,
            value: (p.value_tens.sample(rng)? * 10) as f64,
        },
        1 => {
            let total = p.value_tens.sample(rng)? * 10;
            let part = rand_int(rng, 1, (total / 5).max(1)) * 5;
            PercentExercise::Ratio { part: part as f64, total: total as f64 }
        },
        2 => PercentExercise::Change {
            value: (p.change_tens.sample(rng)? * 10) as f64,
            percent: *choose(rng, &p.change_percentages, "percent.change_percentages")? as f64,
            change: random_change(rng),
        },
        _ => {
            let original = (p.reverse_tens.sample(rng)? * 10) as f64;
            let percent = *choose(rng, &p.reverse_percentages, "percent.reverse_percentages")? as f64;
            let change = random_change(rng);
            PercentExercise::Reverse { result: original * change.multiplier(percent), percent, change }
        },
    })
}

fn power<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<PowerExercise, Failure> {
    let p = &config.power;
    Ok(match rng.gen_range(0..6) {
        0 => PowerExercise::Product { base: p.base.sample(rng)?, p: p.exp.sample(rng)?, q: p.exp.sample(rng)? },
        1 => {
            let exp1 = p.quotient_exp.sample(rng)?;
            let exp2 = rand_int(rng, p.exp.min.min(exp1 - 1), exp1 - 1);
            PowerExercise::Quotient { base: p.base.sample(rng)?, p: exp1, q: exp2 }
        },
        2 => PowerExercise::PowerOfPower {
            base: p.small_base.sample(rng)?,
            p: p.small_exp.sample(rng)?,
            q: p.small_exp.sample(rng)?,
        },
        3 => PowerExercise::PowerOfProduct {
            a: p.small_base.sample(rng)?,
            b: p.small_base.sample(rng)?,
            p: p.product_exp.sample(rng)?,
        },
        4 => PowerExercise::Combined {
            base: p.small_base.sample(rng)?,
            p: p.small_exp.sample(rng)?,
            q: p.small_exp.sample(rng)?,
            r: p.divisor_exp.sample(rng)?,
        },
        _ => {
            let mut scientific = || -> Result<Scientific, Failure> {
                Ok(Scientific::new(p.scientific_tenths.sample(rng)? as f64 / 10.0, p.scientific_exp.sample(rng)?))
            };
            let (lhs, rhs) = (scientific()?, scientific()?);
            PowerExercise::Scientific { lhs, rhs, divide: rng.gen_bool(0.5) }
        },
    })
}

fn radical<R: Rng + ?Sized>(config: &GeneratorConfig, rng: &mut R) -> Result<RadicalExercise, Failure> {
    let r = &config.radical;
    Ok(match rng.gen_range(0..5) {
        0 => {
            let square = *choose(rng, &r.perfect_squares, "radical.perfect_squares")?;
            RadicalExercise::Simplify { n: square * r.cofactor.sample(rng)?.unsigned_abs() }
        },
        1 => {
            let radicand = *choose(rng, &r.like_radicands, "radical.like_radicands")?;
            RadicalExercise::Sum {
                p: r.like_coef.sample(rng)?,
                r: radicand,
                q: r.like_coef.sample(rng)?,
                s: radicand,
            }
        },
        2 => RadicalExercise::Product {
            a: r.product_operand.sample(rng)?.unsigned_abs(),
            b: r.product_operand.sample(rng)?.unsigned_abs(),
        },
        3 => RadicalExercise::Rationalize { k: 1, n: *choose(rng, &r.radicands, "radical.radicands")? },
        _ => {
            let k = if rng.gen_bool(0.5) { 1 } else { r.numerator.sample(rng)? };
            let a = *choose(rng, &r.radicands, "radical.radicands")?;
            let b = r.conjugate_constant.sample(rng)?;
            RadicalExercise::Conjugate { k, a, b: if rng.gen_bool(0.5) { b } else { -b } }
        },
    })
}
