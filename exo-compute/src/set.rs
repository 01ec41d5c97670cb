//! Comparison operators and the solution sets of equations and inequalities.

use crate::fmt::format_number;
use std::{fmt::{self, Display, Formatter}, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The comparison operator of an inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Comparison {
    /// `<`
    Less,

    /// `≤`
    LessEq,

    /// `>`
    Greater,

    /// `≥`
    GreaterEq,
}

impl Comparison {
    /// All comparison operators.
    pub const ALL: [Self; 4] = [Self::Less, Self::LessEq, Self::Greater, Self::GreaterEq];

    /// Returns the operator obtained when multiplying or dividing both sides by a negative number.
    pub fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::LessEq => Self::GreaterEq,
            Self::Greater => Self::Less,
            Self::GreaterEq => Self::LessEq,
        }
    }

    /// Returns true for `<` and `>`.
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Less | Self::Greater)
    }

    /// Returns true for `>` and `≥`.
    pub fn is_greater(self) -> bool {
        matches!(self, Self::Greater | Self::GreaterEq)
    }

    /// Evaluates `lhs op rhs`.
    pub fn holds<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Self::Less => lhs < rhs,
            Self::LessEq => lhs <= rhs,
            Self::Greater => lhs > rhs,
            Self::GreaterEq => lhs >= rhs,
        }
    }

    /// The solution set of `x op value`.
    pub fn solution_set(self, value: f64) -> SolutionSet {
        let bound = Bound { value, closed: !self.is_strict() };
        let interval = if self.is_greater() {
            Interval { lower: Some(bound), upper: None }
        } else {
            Interval { lower: None, upper: Some(bound) }
        };
        SolutionSet::Union(vec![interval])
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Less => "<",
            Self::LessEq => "≤",
            Self::Greater => ">",
            Self::GreaterEq => "≥",
        })
    }
}

/// The string is not a comparison operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseComparisonError;

impl FromStr for Comparison {
    type Err = ParseComparisonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::Less),
            "<=" | "≤" => Ok(Self::LessEq),
            ">" => Ok(Self::Greater),
            ">=" | "≥" => Ok(Self::GreaterEq),
            _ => Err(ParseComparisonError),
        }
    }
}

/// A finite endpoint of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bound {
    /// The value of the endpoint.
    pub value: f64,

    /// Whether the endpoint belongs to the interval.
    pub closed: bool,
}

/// An interval of the real line. A missing bound stands for infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Interval {
    /// Returns true if `x` belongs to the interval.
    pub fn contains(&self, x: f64) -> bool {
        let above = self.lower.map_or(true, |b| if b.closed { x >= b.value } else { x > b.value });
        let below = self.upper.map_or(true, |b| if b.closed { x <= b.value } else { x < b.value });
        above && below
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self.lower {
            Some(Bound { value, closed }) => write!(f, "{}{}", if closed { '[' } else { '(' }, format_number(value))?,
            None => write!(f, "(-∞")?,
        }
        write!(f, ", ")?;
        match self.upper {
            Some(Bound { value, closed }) => write!(f, "{}{}", format_number(value), if closed { ']' } else { ')' }),
            None => write!(f, "+∞)"),
        }
    }
}

/// The set of solutions of an equation or an inequality.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolutionSet {
    /// No value is a solution.
    Empty,

    /// Every real number is a solution.
    AllReals,

    /// A finite set of values.
    Points(Vec<f64>),

    /// A union of disjoint intervals, in increasing order.
    Union(Vec<Interval>),
}

impl SolutionSet {
    /// Returns true if `x` belongs to the set.
    pub fn contains(&self, x: f64) -> bool {
        match self {
            Self::Empty => false,
            Self::AllReals => true,
            Self::Points(points) => points.contains(&x),
            Self::Union(intervals) => intervals.iter().any(|i| i.contains(x)),
        }
    }

    /// If the set is the real line without one point, returns that point.
    fn excluded_point(&self) -> Option<f64> {
        let Self::Union(intervals) = self else {
            return None;
        };
        match intervals.as_slice() {
            [Interval { lower: None, upper: Some(a) }, Interval { lower: Some(b), upper: None }]
                if !a.closed && !b.closed && a.value == b.value => Some(a.value),
            _ => None,
        }
    }
}

impl Display for SolutionSet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if let Some(point) = self.excluded_point() {
            return write!(f, "ℝ \\ {{{}}}", format_number(point));
        }

        match self {
            Self::Empty => write!(f, "∅"),
            Self::AllReals => write!(f, "ℝ"),
            Self::Points(points) => write!(
                f,
                "{{{}}}",
                points.iter().map(|p| format_number(*p)).collect::<Vec<_>>().join(", "),
            ),
            Self::Union(intervals) => write!(
                f,
                "{}",
                intervals.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ∪ "),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn reverse_twice() {
        for cmp in Comparison::ALL {
            assert_eq!(cmp.reverse().reverse(), cmp);
            assert_eq!(cmp.reverse().is_strict(), cmp.is_strict());
            assert_ne!(cmp.reverse().is_greater(), cmp.is_greater());
        }
    }

    #[test]
    fn parse_comparison() {
        assert_eq!("<=".parse(), Ok(Comparison::LessEq));
        assert_eq!("≥".parse(), Ok(Comparison::GreaterEq));
        assert_eq!("=".parse::<Comparison>(), Err(ParseComparisonError));
    }

    #[test]
    fn half_lines() {
        assert_eq!(Comparison::Less.solution_set(3.0).to_string(), "(-∞, 3)");
        assert_eq!(Comparison::LessEq.solution_set(3.0).to_string(), "(-∞, 3]");
        assert_eq!(Comparison::Greater.solution_set(-0.5).to_string(), "(-0.5, +∞)");
        assert_eq!(Comparison::GreaterEq.solution_set(2.0).to_string(), "[2, +∞)");
    }

    #[test]
    fn membership() {
        let set = Comparison::GreaterEq.solution_set(2.0);
        assert!(set.contains(2.0));
        assert!(!set.contains(1.999));
        assert!(!Comparison::Greater.solution_set(2.0).contains(2.0));
    }

    #[test]
    fn punctured_line() {
        let set = SolutionSet::Union(vec![
            Interval { lower: None, upper: Some(Bound { value: 1.0, closed: false }) },
            Interval { lower: Some(Bound { value: 1.0, closed: false }), upper: None },
        ]);
        assert_eq!(set.to_string(), "ℝ \\ {1}");
        assert!(!set.contains(1.0));
        assert!(set.contains(1.5));
    }
}
