use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amount in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// `None` when the whole-unit amount does not fit in cents.
    pub fn from_major(units: i64) -> Option<Self> {
        units.checked_mul(100).map(Self)
    }

    /// Converts a major-unit decimal such as `332.50`. Amounts with more than
    /// two decimal places, or outside the `i64` cent range, yield `None`.
    pub fn from_decimal(amount: Decimal) -> Option<Self> {
        let cents = amount.checked_mul(Decimal::ONE_HUNDRED)?;
        if !cents.fract().is_zero() {
            return None;
        }
        cents.to_i64().map(Self)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    pub fn is_negative(self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn checked_mul_quantity(self, quantity: i64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }
}

pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl fmt::Display for Money {
    /// `$3,325,000` for whole amounts, `$1,234.50` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (major, minor) = (abs / 100, abs % 100);
        if minor == 0 {
            write!(f, "{}${}", sign, group_thousands(major))
        } else {
            write!(f, "{}${}.{:02}", sign, group_thousands(major), minor)
        }
    }
}

/// A percentage already rounded to a fixed number of decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    pub fn decimals(self) -> u32 {
        self.0.scale()
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// One license category within a scenario.
///
/// Construction never validates: a negative quantity or unit cost is
/// representable and is rejected when the subtotal is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseTier {
    pub name: String,
    pub quantity: i64,
    pub unit_cost: Money,
}

impl LicenseTier {
    pub fn new(name: impl Into<String>, quantity: i64, unit_cost: Money) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_cost,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    pub tiers: Vec<LicenseTier>,
}

impl Scenario {
    pub fn new(label: impl Into<String>, tiers: Vec<LicenseTier>) -> Self {
        Self {
            label: label.into(),
            tiers,
        }
    }
}

/// A baseline/proposed pair of scenarios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub title: String,
    pub subtitle: Option<String>,
    pub baseline: Scenario,
    pub proposed: Scenario,
}

impl Comparison {
    pub fn new(title: impl Into<String>, baseline: Scenario, proposed: Scenario) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            baseline,
            proposed,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierFigure {
    pub name: String,
    pub quantity: i64,
    pub unit_cost: Money,
    pub subtotal: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioFigures<T> {
    pub baseline: T,
    pub proposed: T,
}

/// Flat set of computed figures handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub title: String,
    pub subtitle: Option<String>,
    pub labels: ScenarioFigures<String>,
    pub tier_subtotals: ScenarioFigures<Vec<TierFigure>>,
    pub scenario_totals: ScenarioFigures<Money>,
    pub savings: Money,
    pub reduction_percent: Percentage,
    pub cost_increased: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_groups_thousands() {
        assert_eq!(Money::from_cents(0).to_string(), "$0");
        assert_eq!(Money::from_cents(95_000).to_string(), "$950");
        assert_eq!(Money::from_cents(332_500_000).to_string(), "$3,325,000");
        assert_eq!(Money::from_cents(123_450).to_string(), "$1,234.50");
        assert_eq!(Money::from_cents(-500).to_string(), "-$5");
        assert_eq!(Money::from_cents(-100_001).to_string(), "-$1,000.01");
    }

    #[test]
    fn test_money_from_major_and_decimal() {
        assert_eq!(Money::from_major(950), Some(Money::from_cents(95_000)));
        assert_eq!(Money::from_major(i64::MAX), None);

        assert_eq!(
            Money::from_decimal(Decimal::new(33250, 2)),
            Some(Money::from_cents(33_250))
        );
        assert_eq!(Money::from_decimal(Decimal::new(333, 0)), Some(Money::from_cents(33_300)));
        assert_eq!(Money::from_decimal(Decimal::new(1005, 3)), None);
        assert_eq!(Money::from_cents(33_250).to_decimal(), Decimal::new(33250, 2));
    }

    #[test]
    fn test_money_checked_arithmetic() {
        let a = Money::from_cents(i64::MAX);
        assert_eq!(a.checked_add(Money::from_cents(1)), None);
        assert_eq!(a.checked_mul_quantity(2), None);
        assert_eq!(
            Money::from_cents(100).checked_sub(Money::from_cents(250)),
            Some(Money::from_cents(-150))
        );
    }

    #[test]
    fn test_percentage_display_keeps_scale() {
        assert_eq!(Percentage::new(Decimal::new(690, 1)).to_string(), "69.0%");
        assert_eq!(Percentage::new(Decimal::new(69, 0)).to_string(), "69%");
        assert_eq!(Percentage::new(Decimal::new(690, 1)).decimals(), 1);
    }
}
