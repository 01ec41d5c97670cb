use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
use exo_compute::{
    exercise::{Answer, QuadraticExercise},
    fraction::{self, Fraction},
    linear::{self, InequalitySolution, LinearEquation, LinearInequality, LinearSolution},
    number::{gcd, lcm, simplify_square_root, SquareRoot},
    polynomial::factor::{factor_common, Factorization},
    quadratic::{canonical_form, discriminant, solve_by_discriminant, DiscriminantSolution, Roots},
    set::Comparison,
    system::{self, LinearSystem, Method},
    Exercise,
};
use pretty_assertions::assert_eq;

#[test]
fn discriminant_two_roots() {
    let solution = solve_by_discriminant(1, -5, 6, &mut ()).unwrap();
    assert_eq!(solution, DiscriminantSolution { delta: 1, roots: Roots::Two { x1: 3.0, x2: 2.0 } });
    assert_eq!(solution.roots.count(), 2);
}

#[test]
fn discriminant_no_root() {
    let solution = solve_by_discriminant(1, 2, 5, &mut ()).unwrap();
    assert_eq!(solution.delta, -16);
    assert_eq!(solution.roots, Roots::None);
    assert_eq!(solution.roots.count(), 0);
}

#[test]
fn common_factor() {
    assert_eq!(
        factor_common(6, 9, &mut ()),
        Ok(Factorization::CommonFactor { factor: 3, inner_a: 2, inner_b: 3 }),
    );
}

#[test]
fn add_fractions() {
    let sum = fraction::add((2, 3), (1, 4), &mut ()).unwrap();
    assert_eq!((sum.num(), sum.den()), (11, 12));
}

#[test]
fn simplify_72() {
    assert_eq!(simplify_square_root(72), SquareRoot::new(6, 2));
}

#[test]
fn system_both_methods() {
    let sys = LinearSystem { a1: 3, b1: 5, c1: 21, a2: 2, b2: -1, c2: 1 };
    for method in [Method::Substitution, Method::Elimination] {
        let solution = system::solve(&sys, method, &mut ()).unwrap();
        assert_eq!((solution.x, solution.y), (Fraction::from(2), Fraction::from(3)));
    }

    let sys = LinearSystem { c1: 22, ..sys };
    let by_substitution = system::solve(&sys, Method::Substitution, &mut ()).unwrap();
    let by_elimination = system::solve(&sys, Method::Elimination, &mut ()).unwrap();
    assert_eq!(by_substitution, by_elimination);
    assert_eq!(by_substitution.x, Fraction::new(27, 13).unwrap());
    assert_eq!(by_substitution.y, Fraction::new(41, 13).unwrap());
}

#[test]
fn linear_solutions_satisfy_equations() {
    for a in -6..=6 {
        for b in -4..=4 {
            for c in [-7, 0, 5] {
                match linear::solve(&LinearEquation::one_sided(a, b, c), &mut ()) {
                    LinearSolution::Unique(x) => {
                        assert_ne!(a, 0);
                        assert_eq!(Fraction::from(a) * x + Fraction::from(b), Fraction::from(c));
                    },
                    LinearSolution::AlwaysTrue => assert!(a == 0 && b == c),
                    LinearSolution::NoSolution => assert!(a == 0 && b != c),
                }

                let eq = LinearEquation::two_sided(a, b, 2, c);
                if let LinearSolution::Unique(x) = linear::solve(&eq, &mut ()) {
                    assert_eq!(Fraction::from(a) * x + Fraction::from(b), Fraction::from(2) * x + Fraction::from(c));
                }
            }
        }
    }
}

#[test]
fn dividing_by_a_negative_flips_the_comparison() {
    for a in -5..=-1 {
        let ineq = LinearInequality::one_sided(a, 3, Comparison::Greater, 13);
        let solution = linear::solve_inequality(&ineq, &mut ());
        let LinearSolution::Unique(boundary) = linear::solve(&LinearEquation::one_sided(a, 3, 13), &mut ()) else {
            unreachable!();
        };
        assert_eq!(solution, InequalitySolution::Bounded { boundary, cmp: Comparison::Less });
    }
}

#[test]
fn discriminant_matches_canonical_form() {
    for a in [-3, -1, 1, 2, 5] {
        for b in -6..=6 {
            for c in -6..=6 {
                let delta = discriminant(a, b, c).unwrap();
                let form = canonical_form(a, b, c).unwrap();
                assert_eq!(Fraction::from(delta), Fraction::from(-4 * a) * form.beta);
            }
        }
    }
}

#[test]
fn vieta_holds_for_two_roots() {
    for (a, b, c) in [(1, -5, 6), (2, 3, -7), (-3, 4, 9), (5, 1, -1)] {
        let Roots::Two { x1, x2 } = solve_by_discriminant(a, b, c, &mut ()).unwrap().roots else {
            unreachable!();
        };
        assert!(x1 > x2);
        assert_float_relative_eq!(x1 + x2, -b as f64 / a as f64, 1e-9);
        assert_float_relative_eq!(x1 * x2, c as f64 / a as f64, 1e-9);
    }
}

#[test]
fn reciprocal_product_is_one() {
    for (num, den) in [(2, 3), (-7, 4), (12, -18), (5, 1)] {
        let f = Fraction::new(num, den).unwrap();
        let product = fraction::multiply((f.num(), f.den()), (f.den(), f.num()), &mut ()).unwrap();
        assert_eq!(product, Fraction::ONE);
    }
}

#[test]
fn lcm_times_gcd() {
    for a in [-12, -5, 1, 4, 6, 9, 35] {
        for b in [-8, 3, 6, 10, 49] {
            assert_eq!(lcm(a, b).unwrap() * gcd(a, b), (a * b).abs());
        }
    }
}

#[test]
fn simplified_radicands_are_square_free() {
    for n in 1..500 {
        let inside = simplify_square_root(n).inside;
        assert_eq!(simplify_square_root(inside), SquareRoot::new(1, inside));
    }
}

#[test]
fn solve_through_exercise() {
    let exercise = Exercise::Quadratic(QuadraticExercise::Discriminant { a: 1, b: -5, c: 6 });
    let solution = exercise.solve().unwrap();
    assert_eq!(solution.answer.to_string(), "Δ = 1, x1 = 3, x2 = 2");
    assert!(matches!(solution.answer, Answer::Discriminant(_)));
    assert!(!solution.steps.is_empty());
}
