//! Shortest-form decimal output for `f64`.
//!
//! Both the SVG map and the plain-text answers print numbers with a fixed
//! number of significant digits and no trailing zeros:
//!
//! ```text
//! 12345.67   → 12345.7
//! 1.2345678  → 1.23457
//! 3600.0     → 3600
//! 0.00001234 → 1.234e-05
//! 2500000.0  → 2.5e+06
//! ```

use std::fmt;

/// Default number of significant digits.
pub const SIGNIFICANT_DIGITS: usize = 6;

/// `Display` wrapper printing `self.0` with [`SIGNIFICANT_DIGITS`]
/// significant digits, or the formatter's precision when one is given
/// (`{:.3}`).
///
/// Values whose decimal exponent is below `-4` or at least the digit count
/// switch to exponent form with a signed, at-least-two-digit exponent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Significant(pub f64);

impl fmt::Display for Significant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = f.precision().unwrap_or(SIGNIFICANT_DIGITS).max(1);
        f.write_str(&general(self.0, digits))
    }
}

fn general(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Round once in exponent form; the exponent of the rounded value picks
    // the layout.
    let sci = format!("{:.*e}", digits - 1, x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    let max_exp = i32::try_from(digits).unwrap_or(i32::MAX);
    if exp < -4 || exp >= max_exp {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_zeros(mantissa), exp.unsigned_abs())
    } else {
        let decimals = usize::try_from(max_exp - 1 - exp).unwrap_or(0);
        trim_zeros(&format!("{x:.decimals$}")).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
