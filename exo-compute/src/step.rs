//! Derivation steps reported by the solvers.

use crate::{fmt::format_number, set::Comparison};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single step of a derivation: the expression obtained after applying a [`Rule`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step {
    /// The expression obtained after applying the rule, as plain text.
    pub expression: String,

    /// The rule that was applied.
    pub rule: Rule,
}

impl Step {
    /// Creates a new step.
    pub fn new(rule: Rule, expression: impl Into<String>) -> Self {
        Self { expression: expression.into(), rule }
    }

    /// A short, default explanation of the rule applied in this step.
    pub fn explanation(&self) -> String {
        self.rule.to_string()
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}  ({})", self.expression, self.rule)
    }
}

/// The transformation applied in a [`Step`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rule {
    /// The exercise as it was given.
    Given,

    /// `12/18 = 2/3`
    Simplify,

    /// `2^5 = 32`
    Evaluate,

    /// `7/3 ≈ 2.333`
    Decimal,

    /// Substituting the solution back into the statement.
    Verify,

    /// `lcm(4, 6) = 12`
    CommonDenominator { lcm: i64 },

    /// `1/4 + 1/6 = 3/12 + 2/12`
    ScaleNumerators,

    /// `3/12 + 2/12 = 5/12`
    CombineNumerators,

    /// `a/b × c/d = ac/bd`
    MultiplyAcross,

    /// `a/b ÷ c/d = a/b × d/c`
    MultiplyByReciprocal,

    /// `12/18 = (12÷6)/(18÷6)`
    DivideByGcd { gcd: i64 },

    /// `gcd(num, den) = 1`
    Irreducible,

    /// `3x + 2 = 11` becomes `3x = 11 - 2`
    SubtractFromBothSides { term: String },

    /// `3x - 2 = 7` becomes `3x = 7 + 2`
    AddToBothSides { term: String },

    /// `3x = 9` becomes `x = 9/3`
    ///
    /// Dividing by a negative number reverses an inequality.
    DivideBothSides { divisor: i64, reverses: bool },

    /// `0x + 2 = 2`: the variable vanished, leaving a constant statement.
    ConstantStatement { holds: bool },

    /// `Δ = b² - 4ac`
    Discriminant,

    /// `x = (-b ± √Δ) / 2a`
    RootFormula,

    /// `x0 = -b / 2a`
    DoubleRoot,

    /// `Δ < 0`
    NoRealRoot,

    /// `ax² + bx + c = a(x - α)² + β`
    CanonicalForm,

    /// `a(x - α)² + β = 0` becomes `(x - α)² = -β/a`
    IsolateSquare,

    /// `X² = k` gives `X = ±√k`
    SquareRoot,

    /// `ax² + bx = x(ax + b)`
    FactorOutX,

    /// `AB = 0` if and only if `A = 0` or `B = 0`
    ZeroProduct,

    /// `x1 + x2 = -b/a`
    SumOfRoots,

    /// `x1 × x2 = c/a`
    ProductOfRoots,

    /// A trinomial has the sign of `a` outside its roots.
    SignTable,

    /// Keeping the intervals where the trinomial satisfies the comparison with zero.
    SelectIntervals { cmp: Comparison },

    /// `det = a1b2 - a2b1`
    Determinant,

    /// `x = (c1 - b1y) / a1`
    IsolateVariable { var: char },

    /// Replacing a variable by its expression in the other equation.
    Substitute,

    /// Replacing the solved variable to find the other one.
    BackSubstitute,

    /// Multiplying each equation so one variable cancels.
    ScaleEquations { first: i64, second: i64 },

    /// Adding the scaled equations.
    AddEquations,

    /// `k(a + b) = ka + kb`
    Distribute,

    /// `(a + b)(c + d) = ac + ad + bc + bd`
    DoubleDistribute,

    /// `(a + b)² = a² + 2ab + b²`
    SquareOfSum,

    /// `(a - b)² = a² - 2ab + b²`
    SquareOfDifference,

    /// `(a + b)(a - b) = a² - b²`
    DifferenceOfSquares,

    /// `2x + 3x = 5x`
    CollectLikeTerms,

    /// `ka + kb = k(a + b)`
    CommonFactor { factor: i64 },

    /// `a² ± 2ab + b² = (a ± b)²`
    PerfectSquare,

    /// `√(a²b) = a√b`
    ExtractSquares,

    /// `p√r + q√r = (p + q)√r`
    CombineLikeRadicals,

    /// `√a × √b = √(ab)`
    RadicalProduct,

    /// `k/√n = k√n / n`
    MultiplyByRadical,

    /// `k/(√a + b) = k(√a - b) / (a - b²)`
    MultiplyByConjugate,

    /// `aᵖ × aᑫ = aᵖ⁺ᑫ`
    AddExponents,

    /// `aᵖ / aᑫ = aᵖ⁻ᑫ`
    SubtractExponents,

    /// `(aᵖ)ᑫ = aᵖᑫ`
    MultiplyExponents,

    /// `(ab)ᵖ = aᵖbᵖ`
    DistributeExponent,

    /// Combining the coefficients and the powers of ten separately.
    CombineCoefficients,

    /// Moving the decimal point until `1 ≤ c < 10`.
    Normalize { shift: i32 },

    /// `p% of v = p/100 × v`
    PercentOf,

    /// `part / total × 100`
    Ratio,

    /// Increasing by `p%` multiplies by `1 + p/100`.
    Multiplier { factor: f64 },

    /// Undoing a percentage change divides by its multiplier.
    DivideByMultiplier { factor: f64 },
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Given => write!(f, "given"),
            Self::Simplify => write!(f, "simplify"),
            Self::Evaluate => write!(f, "evaluate"),
            Self::Decimal => write!(f, "decimal value"),
            Self::Verify => write!(f, "check by substituting the solution"),
            Self::CommonDenominator { lcm } => write!(f, "the least common denominator is {}", lcm),
            Self::ScaleNumerators => write!(f, "rewrite each fraction over the common denominator"),
            Self::CombineNumerators => write!(f, "combine the numerators"),
            Self::MultiplyAcross => write!(f, "multiply the numerators and the denominators"),
            Self::MultiplyByReciprocal => write!(f, "multiply by the reciprocal of the divisor"),
            Self::DivideByGcd { gcd } => write!(f, "divide the numerator and the denominator by {}", gcd),
            Self::Irreducible => write!(f, "the fraction is already in lowest terms"),
            Self::SubtractFromBothSides { term } => write!(f, "subtract {} from both sides", term),
            Self::AddToBothSides { term } => write!(f, "add {} to both sides", term),
            Self::DivideBothSides { divisor, reverses: false } => write!(f, "divide both sides by {}", divisor),
            Self::DivideBothSides { divisor, reverses: true } => write!(
                f,
                "divide both sides by {}, which is negative, so the inequality is reversed",
                divisor,
            ),
            Self::ConstantStatement { holds: true } => write!(f, "the variable cancels and the statement is always true"),
            Self::ConstantStatement { holds: false } => write!(f, "the variable cancels and the statement is never true"),
            Self::Discriminant => write!(f, "compute the discriminant Δ = b² - 4ac"),
            Self::RootFormula => write!(f, "Δ > 0, so there are two roots x = (-b ± √Δ) / 2a"),
            Self::DoubleRoot => write!(f, "Δ = 0, so there is one double root x = -b / 2a"),
            Self::NoRealRoot => write!(f, "Δ < 0, so there is no real root"),
            Self::CanonicalForm => write!(f, "complete the square to get the canonical form a(x - α)² + β"),
            Self::IsolateSquare => write!(f, "isolate the square"),
            Self::SquareRoot => write!(f, "take the square root of both sides"),
            Self::FactorOutX => write!(f, "factor out x"),
            Self::ZeroProduct => write!(f, "a product is zero when one of its factors is zero"),
            Self::SumOfRoots => write!(f, "the sum of the roots is -b/a"),
            Self::ProductOfRoots => write!(f, "the product of the roots is c/a"),
            Self::SignTable => write!(f, "the trinomial has the sign of a outside its roots"),
            Self::SelectIntervals { cmp } => write!(f, "keep the values where the trinomial is {} 0", cmp),
            Self::Determinant => write!(f, "compute the determinant a1b2 - a2b1"),
            Self::IsolateVariable { var } => write!(f, "isolate {} in one equation", var),
            Self::Substitute => write!(f, "substitute into the other equation"),
            Self::BackSubstitute => write!(f, "substitute the value found to get the other unknown"),
            Self::ScaleEquations { first, second } => write!(
                f,
                "multiply the first equation by {} and the second by {}",
                first,
                second,
            ),
            Self::AddEquations => write!(f, "add the equations"),
            Self::Distribute => write!(f, "distribute"),
            Self::DoubleDistribute => write!(f, "distribute each term of the first factor"),
            Self::SquareOfSum => write!(f, "(a + b)² = a² + 2ab + b²"),
            Self::SquareOfDifference => write!(f, "(a - b)² = a² - 2ab + b²"),
            Self::DifferenceOfSquares => write!(f, "(a + b)(a - b) = a² - b²"),
            Self::CollectLikeTerms => write!(f, "collect like terms"),
            Self::CommonFactor { factor } => write!(f, "factor out the common factor {}", factor),
            Self::PerfectSquare => write!(f, "a² ± 2ab + b² = (a ± b)²"),
            Self::ExtractSquares => write!(f, "take perfect squares out of the root"),
            Self::CombineLikeRadicals => write!(f, "combine roots with the same radicand"),
            Self::RadicalProduct => write!(f, "√a × √b = √(ab)"),
            Self::MultiplyByRadical => write!(f, "multiply the numerator and the denominator by the root"),
            Self::MultiplyByConjugate => write!(f, "multiply the numerator and the denominator by the conjugate"),
            Self::AddExponents => write!(f, "aᵖ × aᑫ = aᵖ⁺ᑫ"),
            Self::SubtractExponents => write!(f, "aᵖ / aᑫ = aᵖ⁻ᑫ"),
            Self::MultiplyExponents => write!(f, "(aᵖ)ᑫ = aᵖᑫ"),
            Self::DistributeExponent => write!(f, "(ab)ᵖ = aᵖbᵖ"),
            Self::CombineCoefficients => write!(f, "combine the coefficients and the powers of ten"),
            Self::Normalize { shift } => write!(f, "move the decimal point by {} place(s)", shift),
            Self::PercentOf => write!(f, "p% of v is p/100 × v"),
            Self::Ratio => write!(f, "divide the part by the total and multiply by 100"),
            Self::Multiplier { factor } => write!(f, "multiply by {}", format_number(*factor)),
            Self::DivideByMultiplier { factor } => write!(f, "divide by {}", format_number(*factor)),
        }
    }
}
