//! Cost type for budget lines
//!
//! Costs are kept as the exact decimal text the user typed. They are only
//! converted to floating point when a running total is computed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BudgetError;

/// A validated cost string such as `"5.00"`, `"-5.5"` or `"12."`
///
/// Accepted shape: optional leading minus, one or more ASCII digits, a
/// decimal point, then zero to two digits. Deserialization does not
/// re-validate stored text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(String);

impl Cost {
    /// Parse and validate a cost string
    pub fn parse(s: &str) -> Result<Self, BudgetError> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(BudgetError::InvalidCost(s.to_string()))
        }
    }

    /// Check a string against the cost pattern without allocating
    pub fn is_valid(s: &str) -> bool {
        let unsigned = s.strip_prefix('-').unwrap_or(s);

        let Some((whole, fraction)) = unsigned.split_once('.') else {
            return false;
        };

        !whole.is_empty()
            && whole.bytes().all(|b| b.is_ascii_digit())
            && fraction.len() <= 2
            && fraction.bytes().all(|b| b.is_ascii_digit())
    }

    /// The cost text as entered
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Floating-point value used for totals
    ///
    /// Text that is not a number (only possible for hand-edited storage)
    /// yields `NaN`, which then poisons the total.
    pub fn as_f64(&self) -> f64 {
        self.0.parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sum the costs and format with exactly two decimals behind `symbol`
///
/// Negative totals print the sign after the symbol (`$-5.50`).
pub fn format_total<'a, I>(costs: I, symbol: &str) -> String
where
    I: IntoIterator<Item = &'a Cost>,
{
    // Fold from +0.0; `Sum for f64` starts at -0.0 and would print "$-0.00"
    let sum = costs.into_iter().fold(0.0_f64, |acc, c| acc + c.as_f64());
    format!("{}{:.2}", symbol, sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_to_two_decimals() {
        for ok in ["5.00", "-5.5", "5.1", "5.", "0.05", "1200.00"] {
            assert!(Cost::parse(ok).is_ok(), "expected {ok} to be accepted");
        }
    }

    #[test]
    fn test_rejects_bad_formats() {
        for bad in ["5", "5.000", "abc", "", "-", ".50", "5.0a", "+5.00", "5,00", " 5.00"] {
            assert!(Cost::parse(bad).is_err(), "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn test_preserves_text() {
        let cost = Cost::parse("5.1").unwrap();
        assert_eq!(cost.as_str(), "5.1");
        assert_eq!(cost.to_string(), "5.1");
    }

    #[test]
    fn test_total_formatting() {
        let costs = [Cost::parse("5.00").unwrap(), Cost::parse("3.50").unwrap()];
        assert_eq!(format_total(&costs, "$"), "$8.50");
        assert_eq!(format_total(&Vec::<Cost>::new(), "$"), "$0.00");

        let negative = [Cost::parse("-5.5").unwrap()];
        assert_eq!(format_total(&negative, "$"), "$-5.50");
    }

    #[test]
    fn test_zero_total_has_no_sign() {
        assert_eq!(format_total(std::iter::empty::<&Cost>(), "$"), "$0.00");

        let negative_zero = [Cost::parse("-0.00").unwrap()];
        assert_eq!(format_total(&negative_zero, "$"), "$0.00");

        let cancelling = [Cost::parse("-5.50").unwrap(), Cost::parse("5.50").unwrap()];
        assert_eq!(format_total(&cancelling, "$"), "$0.00");
    }

    #[test]
    fn test_unparseable_stored_cost_is_nan() {
        let cost: Cost = serde_json::from_str("\"abc\"").unwrap();
        assert!(cost.as_f64().is_nan());
        assert_eq!(format_total([&cost], "$"), "$NaN");
    }
}
