use crate::error::UnknownTopic;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::{
    collections::{BTreeSet, HashMap},
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest edit distance between an unknown name and a suggested topic name.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// A family of exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Topic {
    LinearEquation,
    LinearInequality,
    QuadraticEquation,
    QuadraticInequality,
    System,
    Expansion,
    Factoring,
    Reduction,
    Fraction,
    Percentage,
    Power,
    Radical,
}

impl Topic {
    /// Every topic.
    pub const ALL: [Self; 12] = [
        Self::LinearEquation,
        Self::LinearInequality,
        Self::QuadraticEquation,
        Self::QuadraticInequality,
        Self::System,
        Self::Expansion,
        Self::Factoring,
        Self::Reduction,
        Self::Fraction,
        Self::Percentage,
        Self::Power,
        Self::Radical,
    ];

    /// The name of the topic.
    pub fn name(&self) -> &'static str {
        match self {
            Self::LinearEquation => "linear",
            Self::LinearInequality => "linear-inequality",
            Self::QuadraticEquation => "quadratic",
            Self::QuadraticInequality => "quadratic-inequality",
            Self::System => "system",
            Self::Expansion => "expand",
            Self::Factoring => "factor",
            Self::Reduction => "reduce",
            Self::Fraction => "fraction",
            Self::Percentage => "percent",
            Self::Power => "power",
            Self::Radical => "radical",
        }
    }

    /// Other names the topic can be looked up by.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::LinearEquation => &["equation", "lin"],
            Self::LinearInequality => &["inequality", "ineq"],
            Self::QuadraticEquation => &["quad", "discriminant"],
            Self::QuadraticInequality => &["quad-ineq", "sign"],
            Self::System => &["systems", "sys"],
            Self::Expansion => &["expansion", "develop"],
            Self::Factoring => &["factoring", "factorize"],
            Self::Reduction => &["reduction", "collect"],
            Self::Fraction => &["fractions", "frac"],
            Self::Percentage => &["percentage", "%"],
            Self::Power => &["powers", "exponent", "scientific"],
            Self::Radical => &["radicals", "sqrt", "root"],
        }
    }

    /// A one-line description of the exercises of the topic.
    pub fn description(&self) -> &'static str {
        match self {
            Self::LinearEquation => "ax + b = c and ax + b = cx + d",
            Self::LinearInequality => "ax + b < c and ax + b < cx + d, with every comparison",
            Self::QuadraticEquation => "discriminant, canonical form, particular forms, sum and product",
            Self::QuadraticInequality => "ax² + bx + c compared with 0, from a sign table",
            Self::System => "two linear equations in x and y, by substitution or elimination",
            Self::Expansion => "distributivity and notable identities",
            Self::Factoring => "common factor, difference of squares, perfect square",
            Self::Reduction => "collecting like terms, with or without parentheses",
            Self::Fraction => "simplification, sums, differences, products and quotients",
            Self::Percentage => "proportions, increases, decreases and their reversal",
            Self::Power => "exponent rules and scientific notation",
            Self::Radical => "simplification, sums, products and rationalization",
        }
    }
}

impl Display for Topic {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every name and alias, mapped to its topic.
static TOPIC_NAMES: Lazy<HashMap<&'static str, Topic>> = Lazy::new(|| {
    Topic::ALL
        .iter()
        .flat_map(|&topic| std::iter::once(topic.name()).chain(topic.aliases().iter().copied()).map(move |name| (name, topic)))
        .collect()
});

/// Returns the names of the topics with a name or alias similar to the given name.
pub fn similar_topics(name: &str) -> Vec<String> {
    TOPIC_NAMES
        .iter()
        .filter(|(n, _)| levenshtein(n, name) <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, topic)| topic.name())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

impl FromStr for Topic {
    type Err = UnknownTopic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace(['_', ' '], "-");
        TOPIC_NAMES.get(name.as_str()).copied().ok_or_else(|| UnknownTopic {
            suggestions: similar_topics(&name),
            name: s.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn names_and_aliases() {
        assert_eq!("quadratic".parse(), Ok(Topic::QuadraticEquation));
        assert_eq!("Quadratic Inequality".parse(), Ok(Topic::QuadraticInequality));
        assert_eq!("sqrt".parse(), Ok(Topic::Radical));
        assert_eq!("linear_inequality".parse(), Ok(Topic::LinearInequality));
    }

    #[test]
    fn every_name_round_trips() {
        for topic in Topic::ALL {
            assert_eq!(topic.name().parse(), Ok(topic));
        }
    }

    #[test]
    fn names_are_unique() {
        let count = Topic::ALL.iter().map(|t| 1 + t.aliases().len()).sum::<usize>();
        assert_eq!(TOPIC_NAMES.len(), count);
    }

    #[test]
    fn unknown_topic_suggestions() {
        let err = "fractoin".parse::<Topic>().unwrap_err();
        assert_eq!(err.name, "fractoin");
        assert_eq!(err.suggestions, vec!["fraction".to_string()]);

        let err = "calculus".parse::<Topic>().unwrap_err();
        assert!(err.suggestions.is_empty());
    }
}
