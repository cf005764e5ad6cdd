//! Money in smallest currency units.
//!
//! Prices and totals are integers of minor units (e.g. pence), so totals add
//! up exactly and verification never depends on floating point rounding.

use core::fmt;
use core::iter::Sum;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_object::ValueObject;

const MINOR_PER_MAJOR: u64 = 100;

/// Non-negative amount of money, stored in minor units.
///
/// Parses from and displays as a two-place decimal string (`"8.99"`).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor(self) -> u64 {
        self.0
    }

    /// `self × quantity`, saturating at `u64::MAX` minor units.
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}

impl FromStr for Money {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (major, minor) = match s.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (s, None),
        };

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!("invalid amount: {s:?}")));
        }

        let minor_units = match minor {
            None => 0,
            Some(digits)
                if (1..=2).contains(&digits.len())
                    && digits.bytes().all(|b| b.is_ascii_digit()) =>
            {
                let value: u64 = digits
                    .parse()
                    .map_err(|_| DomainError::validation(format!("invalid amount: {s:?}")))?;
                if digits.len() == 1 { value * 10 } else { value }
            }
            Some(_) => {
                return Err(DomainError::validation(format!(
                    "amount must have at most two decimal places: {s:?}"
                )));
            }
        };

        major
            .parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(MINOR_PER_MAJOR))
            .and_then(|m| m.checked_add(minor_units))
            .map(Money)
            .ok_or_else(|| DomainError::validation(format!("amount out of range: {s:?}")))
    }
}

impl TryFrom<String> for Money {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("8.99".parse::<Money>().unwrap(), Money::from_minor(899));
        assert_eq!("10".parse::<Money>().unwrap(), Money::from_minor(1000));
        assert_eq!("10.5".parse::<Money>().unwrap(), Money::from_minor(1050));
        assert_eq!(" 0.07 ".parse::<Money>().unwrap(), Money::from_minor(7));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for input in ["", "-1", "1.234", "abc", ".5", "1.", "1.x", "1,50"] {
            assert!(
                matches!(input.parse::<Money>(), Err(DomainError::Validation(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_amounts_that_overflow() {
        let err = "184467440737095516.16".parse::<Money>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("out of range")));
    }

    #[test]
    fn displays_two_decimal_places() {
        assert_eq!(Money::from_minor(899).to_string(), "8.99");
        assert_eq!(Money::from_minor(1000).to_string(), "10.00");
        assert_eq!(Money::from_minor(5).to_string(), "0.05");
    }

    #[test]
    fn times_and_sum_add_up_exactly() {
        let total: Money = [Money::from_minor(899).times(2), Money::from_minor(1000).times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_minor(2798));
        assert_eq!(total.to_string(), "27.98");
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(Money::from_minor(u64::MAX).times(2).minor(), u64::MAX);
        let total: Money = [Money::from_minor(u64::MAX), Money::from_minor(1)]
            .into_iter()
            .sum();
        assert_eq!(total.minor(), u64::MAX);
    }

    #[test]
    fn serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_minor(899)).unwrap();
        assert_eq!(json, "\"8.99\"");
        let back: Money = serde_json::from_str("\"10.00\"").unwrap();
        assert_eq!(back, Money::from_minor(1000));
        assert!(serde_json::from_str::<Money>("\"-2\"").is_err());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the displayed form parses back to the same amount.
            #[test]
            fn display_is_parseable(minor in 0u64..10_000_000_000) {
                let money = Money::from_minor(minor);
                prop_assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
            }

            /// Property: summing is order-independent.
            #[test]
            fn sum_is_order_independent(prices in proptest::collection::vec(0u64..100_000, 0..20)) {
                let forward: Money = prices.iter().copied().map(Money::from_minor).sum();
                let backward: Money = prices.iter().rev().copied().map(Money::from_minor).sum();
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
