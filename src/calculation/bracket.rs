//! Salary bracket classification for distribution reporting.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A basic-salary range used to build the salary distribution.
///
/// Brackets are half-open: the lower bound is inclusive and the upper bound
/// exclusive, except for [`SalaryBracket::From200k`] which is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SalaryBracket {
    /// Below 25,000.
    #[serde(rename = "<25k")]
    Under25k,
    /// 25,000 up to 50,000.
    #[serde(rename = "25k-50k")]
    From25kTo50k,
    /// 50,000 up to 100,000.
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    /// 100,000 up to 200,000.
    #[serde(rename = "100k-200k")]
    From100kTo200k,
    /// 200,000 and above.
    #[serde(rename = ">=200k")]
    From200k,
}

impl SalaryBracket {
    /// Every bracket, lowest salary range first.
    pub const ALL: [SalaryBracket; 5] = [
        SalaryBracket::Under25k,
        SalaryBracket::From25kTo50k,
        SalaryBracket::From50kTo100k,
        SalaryBracket::From100kTo200k,
        SalaryBracket::From200k,
    ];

    /// Selects the bracket for a basic salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::calculation::SalaryBracket;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(SalaryBracket::for_basic(Decimal::new(2499999, 2)).label(), "<25k");
    /// assert_eq!(SalaryBracket::for_basic(Decimal::new(25000, 0)).label(), "25k-50k");
    /// ```
    pub fn for_basic(basic_salary: Decimal) -> Self {
        if basic_salary < Decimal::new(25_000, 0) {
            SalaryBracket::Under25k
        } else if basic_salary < Decimal::new(50_000, 0) {
            SalaryBracket::From25kTo50k
        } else if basic_salary < Decimal::new(100_000, 0) {
            SalaryBracket::From50kTo100k
        } else if basic_salary < Decimal::new(200_000, 0) {
            SalaryBracket::From100kTo200k
        } else {
            SalaryBracket::From200k
        }
    }

    /// Returns the label written to the distribution table.
    pub fn label(self) -> &'static str {
        match self {
            SalaryBracket::Under25k => "<25k",
            SalaryBracket::From25kTo50k => "25k-50k",
            SalaryBracket::From50kTo100k => "50k-100k",
            SalaryBracket::From100kTo200k => "100k-200k",
            SalaryBracket::From200k => ">=200k",
        }
    }

    /// Looks a bracket up by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|bracket| bracket.label() == label)
    }
}

impl fmt::Display for SalaryBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_boundaries_are_exclusive_on_the_upper_side() {
        assert_eq!(SalaryBracket::for_basic(dec("24999.99")), SalaryBracket::Under25k);
        assert_eq!(SalaryBracket::for_basic(dec("25000")), SalaryBracket::From25kTo50k);
        assert_eq!(SalaryBracket::for_basic(dec("49999.99")), SalaryBracket::From25kTo50k);
        assert_eq!(SalaryBracket::for_basic(dec("50000")), SalaryBracket::From50kTo100k);
        assert_eq!(SalaryBracket::for_basic(dec("99999.99")), SalaryBracket::From50kTo100k);
        assert_eq!(SalaryBracket::for_basic(dec("100000")), SalaryBracket::From100kTo200k);
        assert_eq!(SalaryBracket::for_basic(dec("199999.99")), SalaryBracket::From100kTo200k);
        assert_eq!(SalaryBracket::for_basic(dec("200000")), SalaryBracket::From200k);
    }

    #[test]
    fn test_zero_and_huge_salaries() {
        assert_eq!(SalaryBracket::for_basic(Decimal::ZERO), SalaryBracket::Under25k);
        assert_eq!(SalaryBracket::for_basic(dec("9999999999")), SalaryBracket::From200k);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = SalaryBracket::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["<25k", "25k-50k", "50k-100k", "100k-200k", ">=200k"]);
    }

    #[test]
    fn test_label_lookup_round_trips() {
        for bracket in SalaryBracket::ALL {
            assert_eq!(SalaryBracket::from_label(bracket.label()), Some(bracket));
        }
        assert_eq!(SalaryBracket::from_label("10k-20k"), None);
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&SalaryBracket::From100kTo200k).unwrap(),
            "\"100k-200k\""
        );
        assert_eq!(SalaryBracket::From200k.to_string(), ">=200k");
    }
}
