//! Percentages: proportions, increases and decreases, and their reversal.

use crate::{
    error::DivisionByZero,
    fmt::format_number,
    step::{Rule, Step},
    step_collector::StepCollector,
};
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The direction of a percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Change {
    Increase,
    Decrease,
}

impl Change {
    /// The multiplier `1 ± p/100` applying a change of `p%`.
    pub fn multiplier(self, percent: f64) -> f64 {
        match self {
            Self::Increase => 1.0 + percent / 100.0,
            Self::Decrease => 1.0 - percent / 100.0,
        }
    }

    fn sign(self) -> char {
        match self {
            Self::Increase => '+',
            Self::Decrease => '-',
        }
    }
}

impl Display for Change {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Increase => write!(f, "increase"),
            Self::Decrease => write!(f, "decrease"),
        }
    }
}

/// Computes `p% of v`.
pub fn percent_of(percent: f64, value: f64, steps: &mut dyn StepCollector<Step>) -> f64 {
    let result = percent / 100.0 * value;
    steps.push(Step::new(Rule::Given, format!("{}% of {}", format_number(percent), format_number(value))));
    steps.push(Step::new(
        Rule::PercentOf,
        format!("{}/100 × {} = {}", format_number(percent), format_number(value), format_number(result)),
    ));
    result
}

/// Computes the percentage that `part` represents of `total`.
pub fn ratio(part: f64, total: f64, steps: &mut dyn StepCollector<Step>) -> Result<f64, DivisionByZero> {
    if total == 0.0 {
        return Err(DivisionByZero::TOTAL);
    }

    let result = part / total * 100.0;
    steps.push(Step::new(Rule::Given, format!("{} out of {}", format_number(part), format_number(total))));
    steps.push(Step::new(
        Rule::Ratio,
        format!("{}/{} × 100 = {}%", format_number(part), format_number(total), format_number(result)),
    ));
    Ok(result)
}

/// The outcome of changing a value by a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PercentChange {
    /// The amount added or removed, always nonnegative for a nonnegative value.
    pub amount: f64,

    /// The value after the change.
    pub result: f64,

    /// The multiplier `1 ± p/100`.
    pub multiplier: f64,
}

/// Changes `value` by `percent`%.
pub fn apply_change(
    value: f64,
    percent: f64,
    change: Change,
    steps: &mut dyn StepCollector<Step>,
) -> PercentChange {
    let multiplier = change.multiplier(percent);
    let amount = percent / 100.0 * value;
    let result = value * multiplier;

    steps.push(Step::new(
        Rule::Given,
        format!("{} {} by {}%", change, format_number(value), format_number(percent)),
    ));
    steps.push(Step::new(
        Rule::PercentOf,
        format!("{}/100 × {} = {}", format_number(percent), format_number(value), format_number(amount)),
    ));
    steps.push(Step::new(
        Rule::Multiplier { factor: multiplier },
        format!("{} × {} = {}", format_number(value), format_number(multiplier), format_number(result)),
    ));
    PercentChange { amount, result, multiplier }
}

/// Increases `value` by `percent`%.
pub fn increase(value: f64, percent: f64, steps: &mut dyn StepCollector<Step>) -> PercentChange {
    apply_change(value, percent, Change::Increase, steps)
}

/// Decreases `value` by `percent`%.
pub fn decrease(value: f64, percent: f64, steps: &mut dyn StepCollector<Step>) -> PercentChange {
    apply_change(value, percent, Change::Decrease, steps)
}

/// Finds the value that, changed by `percent`%, gives `result`.
///
/// Fails for a decrease of 100%, which maps every value to zero.
pub fn reverse(
    result: f64,
    percent: f64,
    change: Change,
    steps: &mut dyn StepCollector<Step>,
) -> Result<f64, DivisionByZero> {
    let multiplier = change.multiplier(percent);
    if multiplier == 0.0 {
        return Err(DivisionByZero::MULTIPLIER);
    }

    let original = result / multiplier;
    steps.push(Step::new(
        Rule::Given,
        format!("after a {} of {}%, the value is {}", change, format_number(percent), format_number(result)),
    ));
    steps.push(Step::new(
        Rule::Multiplier { factor: multiplier },
        format!("1 {} {}/100 = {}", change.sign(), format_number(percent), format_number(multiplier)),
    ));
    steps.push(Step::new(
        Rule::DivideByMultiplier { factor: multiplier },
        format!("{} / {} = {}", format_number(result), format_number(multiplier), format_number(original)),
    ));
    Ok(original)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn percent_of_value() {
        let mut steps = Vec::new();
        assert_float_relative_eq!(percent_of(15.0, 80.0, &mut steps), 12.0);
        assert_eq!(steps[1].expression, "15/100 × 80 = 12");
    }

    #[test]
    fn ratio_of_total() {
        let mut steps = Vec::new();
        assert_float_relative_eq!(ratio(30.0, 120.0, &mut steps).unwrap(), 25.0);
        assert_eq!(steps[1].expression, "30/120 × 100 = 25%");
        assert_eq!(ratio(3.0, 0.0, &mut ()), Err(DivisionByZero::TOTAL));
    }

    #[test]
    fn increase_and_decrease() {
        let up = increase(200.0, 15.0, &mut ());
        assert_float_relative_eq!(up.amount, 30.0);
        assert_float_relative_eq!(up.result, 230.0);
        assert_float_relative_eq!(up.multiplier, 1.15);

        let mut steps = Vec::new();
        let down = decrease(80.0, 25.0, &mut steps);
        assert_float_relative_eq!(down.result, 60.0);
        assert_eq!(steps[2].expression, "80 × 0.75 = 60");
    }

    #[test]
    fn reverse_change() {
        let mut steps = Vec::new();
        assert_float_relative_eq!(reverse(96.0, 20.0, Change::Decrease, &mut steps).unwrap(), 120.0);
        assert_eq!(steps[1].expression, "1 - 20/100 = 0.8");
        assert_eq!(steps[2].expression, "96 / 0.8 = 120");

        let original = reverse(increase(40.0, 30.0, &mut ()).result, 30.0, Change::Increase, &mut ()).unwrap();
        assert_float_relative_eq!(original, 40.0);
    }

    #[test]
    fn reverse_full_decrease() {
        assert_eq!(reverse(0.0, 100.0, Change::Decrease, &mut ()), Err(DivisionByZero::MULTIPLIER));
    }
}
