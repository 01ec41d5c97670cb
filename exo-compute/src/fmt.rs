//! Plain-text formatting of numbers and terms, used to build statements and step expressions.

use crate::number::gcd;
use std::fmt::Display;

/// Formats a term `coef·var` of a sum.
///
/// The first term of a sum carries its sign directly (`-3x`); later terms are prefixed with
/// `" + "` or `" - "`. A coefficient of `±1` is hidden in front of a variable. A zero coefficient
/// formats as `"0"` if it is the first term and as nothing otherwise.
pub fn format_term(coef: i64, var: &str, is_first: bool) -> String {
    if coef == 0 {
        return if is_first { "0".to_string() } else { String::new() };
    }

    let magnitude = coef.unsigned_abs();
    let body = if magnitude == 1 && !var.is_empty() {
        var.to_string()
    } else {
        format!("{}{}", magnitude, var)
    };

    match (is_first, coef < 0) {
        (true, false) => body,
        (true, true) => format!("-{}", body),
        (false, false) => format!(" + {}", body),
        (false, true) => format!(" - {}", body),
    }
}

/// Formats a sum of terms, skipping the ones with a zero coefficient. Formats as `"0"` if every
/// coefficient is zero.
///
/// ```
/// use exo_compute::fmt::format_sum;
///
/// assert_eq!(format_sum(&[(2, "x²"), (0, "x"), (-5, "")]), "2x² - 5");
/// assert_eq!(format_sum(&[(0, "x"), (0, "")]), "0");
/// ```
pub fn format_sum(terms: &[(i64, &str)]) -> String {
    let mut out = String::new();
    for &(coef, var) in terms.iter().filter(|(coef, _)| *coef != 0) {
        out.push_str(&format_term(coef, var, out.is_empty()));
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Formats a coefficient multiplying a variable, such as `3x`, `-x` or `0`.
pub fn format_coef_var(coef: i64, var: &str) -> String {
    format_term(coef, var, true)
}

/// Formats an integer used as a factor of a product, wrapping negative values in parentheses,
/// such as `(-3)` in `2 × (-3)`.
pub fn format_factor(n: i64) -> String {
    if n < 0 {
        format!("({})", n)
    } else {
        n.to_string()
    }
}

/// Formats a number rounded to 3 decimal places, without trailing zeros.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let rounded = (n * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        // also catches -0
        "0".to_string()
    } else if rounded.fract() == 0.0 && rounded.abs() < 1e15 {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// Formats the fraction `num/den` in lowest terms, with the sign on the numerator. A denominator
/// of 1 formats as an integer.
pub fn format_fraction(num: i64, den: i64) -> String {
    if den == 0 {
        return format!("{}/0", num);
    }

    let g = gcd(num, den);
    let sign = if den < 0 { -1 } else { 1 };
    let (num, den) = (sign * num / g, sign * den / g);
    if den == 1 {
        num.to_string()
    } else {
        format!("{}/{}", num, den)
    }
}

/// Formats `coef·√radicand`. A radicand of 1 formats as the coefficient alone, and a coefficient
/// of `±1` is hidden.
pub fn format_sqrt(coef: i64, radicand: u64) -> String {
    match (coef, radicand) {
        (0, _) | (_, 0) => "0".to_string(),
        (coef, 1) => coef.to_string(),
        (1, radicand) => format!("√{}", radicand),
        (-1, radicand) => format!("-√{}", radicand),
        (coef, radicand) => format!("{}√{}", coef, radicand),
    }
}

/// Formats `base^exp`. An exponent of 0 formats as `1` and an exponent of 1 as the base alone.
/// Negative bases are parenthesized.
pub fn format_power(base: impl Display, exp: i64) -> String {
    let base = base.to_string();
    let base = if base.starts_with('-') { format!("({})", base) } else { base };
    match exp {
        0 => "1".to_string(),
        1 => base,
        exp => format!("{}^{}", base, exp),
    }
}

/// Formats `coef × 10^exp`. An exponent of 0 formats as the coefficient alone.
pub fn format_scientific(coef: f64, exp: i64) -> String {
    if exp == 0 {
        format_number(coef)
    } else {
        format!("{} × {}", format_number(coef), format_power(10, exp))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_terms() {
        assert_eq!(format_term(3, "x", true), "3x");
        assert_eq!(format_term(-1, "x", true), "-x");
        assert_eq!(format_term(1, "x²", true), "x²");
        assert_eq!(format_term(0, "x", true), "0");
        assert_eq!(format_term(-1, "", true), "-1");
    }

    #[test]
    fn factors() {
        assert_eq!(format_factor(4), "4");
        assert_eq!(format_factor(0), "0");
        assert_eq!(format_factor(-3), "(-3)");
    }

    #[test]
    fn later_terms() {
        assert_eq!(format_term(4, "", false), " + 4");
        assert_eq!(format_term(-4, "", false), " - 4");
        assert_eq!(format_term(-1, "x", false), " - x");
        assert_eq!(format_term(0, "x", false), "");
    }

    #[test]
    fn sums() {
        assert_eq!(format_sum(&[(1, "x²"), (-5, "x"), (6, "")]), "x² - 5x + 6");
        assert_eq!(format_sum(&[(0, "x²"), (-1, "x"), (1, "")]), "-x + 1");
        assert_eq!(format_sum(&[]), "0");
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(2.0 / 3.0), "0.667");
        assert_eq!(format_number(-1.5), "-1.5");
        assert_eq!(format_number(14.400000000000002), "14.4");
    }

    #[test]
    fn fractions() {
        assert_eq!(format_fraction(6, 8), "3/4");
        assert_eq!(format_fraction(3, -6), "-1/2");
        assert_eq!(format_fraction(-4, -2), "2");
        assert_eq!(format_fraction(0, 5), "0");
    }

    #[test]
    fn roots() {
        assert_eq!(format_sqrt(1, 2), "√2");
        assert_eq!(format_sqrt(3, 5), "3√5");
        assert_eq!(format_sqrt(-1, 7), "-√7");
        assert_eq!(format_sqrt(6, 1), "6");
    }

    #[test]
    fn powers() {
        assert_eq!(format_power(2, 5), "2^5");
        assert_eq!(format_power(7, 1), "7");
        assert_eq!(format_power(7, 0), "1");
        assert_eq!(format_power(-3, 2), "(-3)^2");
        assert_eq!(format_power("a", 4), "a^4");
    }

    #[test]
    fn scientific() {
        assert_eq!(format_scientific(5.0, 0), "5");
        assert_eq!(format_scientific(3.2, 4), "3.2 × 10^4");
        assert_eq!(format_scientific(1.5, -3), "1.5 × 10^-3");
    }
}
