//! Settings of the exercise generators.
//!
//! [`GeneratorConfig::default`] holds the ranges and value pools used for classroom exercises.
//! With the `serde` feature, every struct can be deserialized from a partial document: missing
//! fields keep their default value.

use crate::random::CoefRange;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings of every exercise generator, one group per topic.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    pub linear: LinearConfig,
    pub quadratic: QuadraticConfig,
    pub system: SystemConfig,
    pub expansion: ExpansionConfig,
    pub factoring: FactoringConfig,
    pub reduction: ReductionConfig,
    pub fraction: FractionConfig,
    pub percent: PercentConfig,
    pub power: PowerConfig,
    pub radical: RadicalConfig,
}

/// Linear equations and inequalities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LinearConfig {
    /// The coefficients of `x`.
    pub leading: CoefRange,

    /// The constant terms.
    pub constant: CoefRange,

    /// The probability of keeping a two-sided equation whose `x` terms cancel.
    pub degenerate_probability: f64,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            leading: CoefRange::new(1, 10).signed(),
            constant: CoefRange::new(-10, 10).with_zero(),
            degenerate_probability: 0.15,
        }
    }
}

/// Quadratic equations and inequalities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadraticConfig {
    /// The `x²` coefficient of trinomials solved with the discriminant.
    pub leading: CoefRange,

    /// The `x²` coefficient of trinomials solved with the canonical form.
    pub canonical_leading: CoefRange,

    /// The `x` and constant coefficients.
    pub coefficient: CoefRange,

    /// The constant of `ax² + c = 0`.
    pub particular_constant: CoefRange,

    /// The shift `h` of `(x - h)² = k`.
    pub shift: CoefRange,

    /// The right-hand side `k` of `(x - h)² = k`.
    pub square: CoefRange,

    /// The `x` and constant coefficients of sum and product exercises.
    pub vieta_coefficient: CoefRange,
}

impl Default for QuadraticConfig {
    fn default() -> Self {
        Self {
            leading: CoefRange::new(1, 5),
            canonical_leading: CoefRange::new(1, 3),
            coefficient: CoefRange::new(-10, 10).with_zero(),
            particular_constant: CoefRange::new(-20, 20),
            shift: CoefRange::new(-5, 5),
            square: CoefRange::new(1, 25),
            vieta_coefficient: CoefRange::new(-10, 10),
        }
    }
}

/// Systems of two linear equations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SystemConfig {
    /// The values of the solution `(x, y)`.
    pub solution: CoefRange,

    /// The coefficients of the unknowns.
    pub coefficient: CoefRange,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            solution: CoefRange::new(-5, 5),
            coefficient: CoefRange::new(1, 5),
        }
    }
}

/// Expansion of products.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExpansionConfig {
    /// The factor `k` of `k(ax + b)`.
    pub factor: CoefRange,

    /// The coefficient `a` of `k(ax + b)`.
    pub leading: CoefRange,

    /// The coefficients of `x` in `(ax + b)(cx + d)`.
    pub double_leading: CoefRange,

    /// The constant terms of the binomials.
    pub constant: CoefRange,

    /// The coefficient `a` of the notable identities.
    pub identity_leading: CoefRange,

    /// The constant `b` of the notable identities.
    pub identity_constant: CoefRange,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            factor: CoefRange::new(2, 5).signed(),
            leading: CoefRange::new(1, 5).signed(),
            double_leading: CoefRange::new(1, 4).signed(),
            constant: CoefRange::new(-5, 5),
            identity_leading: CoefRange::new(1, 4),
            identity_constant: CoefRange::new(1, 5),
        }
    }
}

/// Factoring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FactoringConfig {
    /// The common factor of `ka·x + kb`.
    pub common_factor: CoefRange,

    /// The terms `a` and `b` left after factoring out the common factor.
    pub inner: CoefRange,

    /// The square root of the `x²` coefficient of the identities.
    pub root_leading: CoefRange,

    /// The square root of the constant of a difference of squares.
    pub difference_constant: CoefRange,

    /// The square root of the constant of a perfect square.
    pub square_constant: CoefRange,
}

impl Default for FactoringConfig {
    fn default() -> Self {
        Self {
            common_factor: CoefRange::new(2, 5),
            inner: CoefRange::new(1, 5).signed(),
            root_leading: CoefRange::new(1, 4),
            difference_constant: CoefRange::new(1, 6),
            square_constant: CoefRange::new(1, 5),
        }
    }
}

/// Reduction of sums.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReductionConfig {
    /// The number of terms of a sum.
    pub terms: usize,

    /// The coefficients of the terms.
    pub coefficient: CoefRange,

    /// The probability that a term of a linear sum has an `x`.
    pub linear_probability: f64,

    /// The probability that a term of a quadratic sum has an `x²`. A term has an `x` with the
    /// same probability.
    pub square_probability: f64,

    /// The factor `a` of `a(bx + c) + dx + e`.
    pub factor: CoefRange,

    /// The terms `b` and `c` of `a(bx + c) + dx + e`.
    pub inner: CoefRange,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            terms: 4,
            coefficient: CoefRange::new(-10, 10),
            linear_probability: 0.6,
            square_probability: 0.35,
            factor: CoefRange::new(2, 5).signed(),
            inner: CoefRange::new(-5, 5),
        }
    }
}

/// Fraction arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FractionConfig {
    /// The common factor of a fraction to simplify.
    pub simplify_factor: CoefRange,

    /// The numerator of a fraction to simplify, before multiplying by the factor.
    pub simplify_numerator: CoefRange,

    /// The denominator of a fraction to simplify, before multiplying by the factor.
    pub simplify_denominator: CoefRange,

    /// The numerators of the operands.
    pub numerator: CoefRange,

    /// The denominators of the operands of a sum or a difference.
    pub sum_denominator: CoefRange,

    /// The denominators of the operands of a product or a quotient.
    pub product_denominator: CoefRange,
}

impl Default for FractionConfig {
    fn default() -> Self {
        Self {
            simplify_factor: CoefRange::new(2, 6),
            simplify_numerator: CoefRange::new(1, 8),
            simplify_denominator: CoefRange::new(2, 8),
            numerator: CoefRange::new(1, 9),
            sum_denominator: CoefRange::new(2, 10),
            product_denominator: CoefRange::new(2, 9),
        }
    }
}

/// Percentages.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PercentConfig {
    /// The percentages of `p% of v` exercises.
    pub percentages: Vec<i64>,

    /// The percentages of increases and decreases.
    pub change_percentages: Vec<i64>,

    /// The percentages of exercises finding the original value.
    pub reverse_percentages: Vec<i64>,

    /// The value of `p% of v`, in tens. Also the total of ratio exercises.
    pub value_tens: CoefRange,

    /// The value to increase or decrease, in tens.
    pub change_tens: CoefRange,

    /// The original value of reverse exercises, in tens.
    pub reverse_tens: CoefRange,
}

impl Default for PercentConfig {
    fn default() -> Self {
        Self {
            percentages: vec![5, 10, 15, 20, 25, 30, 40, 50, 75],
            change_percentages: vec![5, 10, 15, 20, 25, 30, 50],
            reverse_percentages: vec![10, 20, 25, 50],
            value_tens: CoefRange::new(2, 20),
            change_tens: CoefRange::new(5, 50),
            reverse_tens: CoefRange::new(5, 30),
        }
    }
}

/// Powers and scientific notation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerConfig {
    /// The base of products and quotients.
    pub base: CoefRange,

    /// The base of the other rules.
    pub small_base: CoefRange,

    /// The exponents of products.
    pub exp: CoefRange,

    /// The exponent of the dividend of quotients. The divisor's exponent is smaller.
    pub quotient_exp: CoefRange,

    /// The exponents of powers of powers and of the combined rule.
    pub small_exp: CoefRange,

    /// The exponent of powers of products.
    pub product_exp: CoefRange,

    /// The exponent of the divisor of the combined rule.
    pub divisor_exp: CoefRange,

    /// The coefficients of scientific numbers, in tenths.
    pub scientific_tenths: CoefRange,

    /// The exponents of scientific numbers.
    pub scientific_exp: CoefRange,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            base: CoefRange::new(2, 10),
            small_base: CoefRange::new(2, 5),
            exp: CoefRange::new(2, 6),
            quotient_exp: CoefRange::new(5, 10),
            small_exp: CoefRange::new(2, 4),
            product_exp: CoefRange::new(2, 5),
            divisor_exp: CoefRange::new(1, 3),
            scientific_tenths: CoefRange::new(10, 99),
            scientific_exp: CoefRange::new(-3, 8).with_zero(),
        }
    }
}

/// Square roots.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RadicalConfig {
    /// The perfect squares hidden in radicands to simplify.
    pub perfect_squares: Vec<u64>,

    /// The square-free part of radicands to simplify.
    pub cofactor: CoefRange,

    /// The radicands of sums.
    pub like_radicands: Vec<u64>,

    /// The coefficients of sums.
    pub like_coef: CoefRange,

    /// The operands of products.
    pub product_operand: CoefRange,

    /// The radicands of denominators.
    pub radicands: Vec<u64>,

    /// The constant of conjugate denominators.
    pub conjugate_constant: CoefRange,

    /// The numerator of quotients with a conjugate denominator.
    pub numerator: CoefRange,
}

impl Default for RadicalConfig {
    fn default() -> Self {
        Self {
            perfect_squares: vec![4, 9, 16, 25, 36, 49],
            cofactor: CoefRange::new(2, 8),
            like_radicands: vec![2, 3, 5, 6, 7],
            like_coef: CoefRange::new(2, 7),
            product_operand: CoefRange::new(2, 12),
            radicands: vec![2, 3, 5, 7],
            conjugate_constant: CoefRange::new(1, 5),
            numerator: CoefRange::new(2, 8),
        }
    }
}
