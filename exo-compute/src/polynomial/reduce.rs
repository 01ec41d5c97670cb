//! Reduction of a sum of terms by collecting them by degree.

use super::{expand::distribute, Poly};
use crate::{
    fmt::{format_sum, format_term},
    step::{Rule, Step},
    step_collector::StepCollector,
};
use std::{collections::BTreeMap, fmt::{self, Display, Formatter}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The degree of a term, used to group like terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegreeClass {
    /// `x²`
    Square,

    /// `x`
    Linear,

    /// A constant.
    Constant,
}

impl DegreeClass {
    /// The variable part of a term of this degree.
    pub fn var(&self) -> &'static str {
        match self {
            Self::Square => "x²",
            Self::Linear => "x",
            Self::Constant => "",
        }
    }
}

/// A term `coef·var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    pub coef: i64,
    pub class: DegreeClass,
}

impl Term {
    pub const fn new(coef: i64, class: DegreeClass) -> Self {
        Self { coef, class }
    }
}

/// Formats a list of terms as a sum, in the given order.
pub fn format_terms(terms: &[Term]) -> String {
    let pairs = terms.iter().map(|t| (t.coef, t.class.var())).collect::<Vec<_>>();
    format_sum(&pairs)
}

/// The coefficient of each degree class of a sum.
///
/// Classes whose coefficients add up to zero are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolynomialTerms(BTreeMap<DegreeClass, i64>);

impl PolynomialTerms {
    /// Adds up the coefficients of the given terms by degree class.
    pub fn collect(terms: &[Term]) -> Self {
        let mut map = terms.iter().fold(BTreeMap::new(), |mut map, term| {
            *map.entry(term.class).or_insert(0) += term.coef;
            map
        });
        map.retain(|_, coef| *coef != 0);
        Self(map)
    }

    /// The coefficient of the given class.
    pub fn get(&self, class: DegreeClass) -> i64 {
        self.0.get(&class).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_poly(&self) -> Poly {
        Poly::new(self.get(DegreeClass::Square), self.get(DegreeClass::Linear), self.get(DegreeClass::Constant))
    }
}

/// An expression to reduce.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Reduction {
    /// A sum of terms.
    Terms(Vec<Term>),

    /// `a(bx + c) + dx + e`
    Parenthesized { a: i64, b: i64, c: i64, d: i64, e: i64 },
}

impl Display for Reduction {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Terms(terms) => write!(f, "{}", format_terms(terms)),
            Self::Parenthesized { a, b, c, d, e } => write!(
                f,
                "{}({}){}{}",
                a,
                format_sum(&[(*b, "x"), (*c, "")]),
                format_term(*d, "x", false),
                format_term(*e, "", false),
            ),
        }
    }
}

/// Formats the grouping of like terms, such as `(3 - 5)x + 2`.
fn grouping(terms: &[Term]) -> String {
    let classes = [DegreeClass::Square, DegreeClass::Linear, DegreeClass::Constant];
    let mut out = String::new();
    for class in classes {
        let coefs = terms.iter().filter(|t| t.class == class).map(|t| t.coef).collect::<Vec<_>>();
        match coefs.as_slice() {
            [] => (),
            [coef] => out.push_str(&format_term(*coef, class.var(), out.is_empty())),
            [first, rest @ ..] => {
                let sum = rest.iter().fold(first.to_string(), |acc, c| acc + &format_term(*c, "", false));
                if !out.is_empty() {
                    out.push_str(" + ");
                }
                out.push_str(&format!("({}){}", sum, class.var()));
            },
        }
    }
    out
}

/// Reduces a sum of terms by collecting like terms.
pub fn reduce_terms(terms: &[Term], steps: &mut dyn StepCollector<Step>) -> Poly {
    steps.push(Step::new(Rule::Given, format_terms(terms)));
    collect_with_steps(terms, steps)
}

fn collect_with_steps(terms: &[Term], steps: &mut dyn StepCollector<Step>) -> Poly {
    steps.push(Step::new(Rule::CollectLikeTerms, grouping(terms)));
    let result = PolynomialTerms::collect(terms).to_poly();
    steps.push(Step::new(Rule::Simplify, result.to_string()));
    result
}

/// Reduces the given expression.
pub fn reduce(reduction: &Reduction, steps: &mut dyn StepCollector<Step>) -> Poly {
    match *reduction {
        Reduction::Terms(ref terms) => reduce_terms(terms, steps),
        Reduction::Parenthesized { a, b, c, d, e } => {
            steps.push(Step::new(Rule::Given, reduction.to_string()));
            let inner = distribute(a, b, c);
            let terms = [
                Term::new(inner.x1, DegreeClass::Linear),
                Term::new(inner.x0, DegreeClass::Constant),
                Term::new(d, DegreeClass::Linear),
                Term::new(e, DegreeClass::Constant),
            ];
            steps.push(Step::new(Rule::Distribute, format_terms(&terms)));
            collect_with_steps(&terms, steps)
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use DegreeClass::*;

    #[test]
    fn collect_by_class() {
        let terms = [Term::new(3, Linear), Term::new(2, Constant), Term::new(-5, Linear), Term::new(1, Square)];
        let collected = PolynomialTerms::collect(&terms);
        assert_eq!(collected.get(Square), 1);
        assert_eq!(collected.get(Linear), -2);
        assert_eq!(collected.get(Constant), 2);
    }

    #[test]
    fn zero_sums_vanish() {
        let terms = [Term::new(3, Linear), Term::new(4, Constant), Term::new(-3, Linear)];
        let collected = PolynomialTerms::collect(&terms);
        assert_eq!(collected.get(Linear), 0);
        assert_eq!(collected.to_poly().to_string(), "4");

        let all_zero = [Term::new(2, Square), Term::new(-2, Square)];
        assert!(PolynomialTerms::collect(&all_zero).is_empty());
        assert_eq!(reduce_terms(&all_zero, &mut ()).to_string(), "0");
    }

    #[test]
    fn order_is_irrelevant() {
        let terms = [Term::new(3, Linear), Term::new(2, Constant), Term::new(-7, Square)];
        let mut reversed = terms;
        reversed.reverse();
        assert_eq!(PolynomialTerms::collect(&terms), PolynomialTerms::collect(&reversed));
    }

    #[test]
    fn steps() {
        let mut steps = Vec::new();
        let terms = [Term::new(3, Linear), Term::new(2, Constant), Term::new(-5, Linear), Term::new(-4, Constant)];
        assert_eq!(reduce_terms(&terms, &mut steps), Poly::linear(-2, -2));
        assert_eq!(
            steps.iter().map(|s| s.expression.as_str()).collect::<Vec<_>>(),
            vec!["3x + 2 - 5x - 4", "(3 - 5)x + (2 - 4)", "-2x - 2"],
        );
    }

    #[test]
    fn parenthesized() {
        let reduction = Reduction::Parenthesized { a: 2, b: 3, c: -1, d: 4, e: 5 };
        assert_eq!(reduction.to_string(), "2(3x - 1) + 4x + 5");

        let mut steps = Vec::new();
        assert_eq!(reduce(&reduction, &mut steps), Poly::linear(10, 3));
        assert_eq!(steps[1].expression, "6x - 2 + 4x + 5");
        assert_eq!(steps[3].expression, "10x + 3");
    }
}
