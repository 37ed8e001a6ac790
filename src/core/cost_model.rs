use crate::domain::model::{
    Comparison, ComparisonReport, LicenseTier, Money, Percentage, Scenario, ScenarioFigures,
    TierFigure,
};
use crate::utils::error::{CostError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

pub const DEFAULT_PRECISION: u32 = 1;
pub const MAX_PRECISION: u32 = 6;

/// Derives subtotals, totals, savings and the reduction percentage from a
/// [`Comparison`]. Every operation is pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostComparisonModel {
    precision: u32,
}

impl Default for CostComparisonModel {
    fn default() -> Self {
        Self::new()
    }
}

impl CostComparisonModel {
    pub fn new() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }

    /// Precision above [`MAX_PRECISION`] is clamped.
    pub fn with_precision(decimals: u32) -> Self {
        Self {
            precision: decimals.min(MAX_PRECISION),
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn compute_subtotal(&self, tier: &LicenseTier) -> Result<Money> {
        if tier.quantity < 0 {
            return Err(CostError::InvalidInput {
                tier: tier.name.clone(),
                field: "quantity",
                value: tier.quantity,
            });
        }
        if tier.unit_cost.is_negative() {
            return Err(CostError::InvalidInput {
                tier: tier.name.clone(),
                field: "unit_cost",
                value: tier.unit_cost.cents(),
            });
        }

        tier.unit_cost
            .checked_mul_quantity(tier.quantity)
            .ok_or_else(|| CostError::overflow(format!("subtotal of tier '{}'", tier.name)))
    }

    /// Sums tier subtotals in order. An empty scenario costs zero.
    pub fn compute_scenario_total(&self, scenario: &Scenario) -> Result<Money> {
        scenario.tiers.iter().try_fold(Money::ZERO, |total, tier| {
            let subtotal = self.compute_subtotal(tier)?;
            total
                .checked_add(subtotal)
                .ok_or_else(|| CostError::overflow(format!("total of '{}'", scenario.label)))
        })
    }

    /// Negative when the proposed mix costs more than the baseline.
    pub fn compute_savings(&self, comparison: &Comparison) -> Result<Money> {
        let baseline = self.compute_scenario_total(&comparison.baseline)?;
        let proposed = self.compute_scenario_total(&comparison.proposed)?;
        baseline
            .checked_sub(proposed)
            .ok_or_else(|| CostError::overflow("savings"))
    }

    /// `savings / baseline × 100`, rounded half-to-even at the model precision.
    pub fn compute_reduction_percent(&self, comparison: &Comparison) -> Result<Percentage> {
        let baseline = self.compute_scenario_total(&comparison.baseline)?;
        let proposed = self.compute_scenario_total(&comparison.proposed)?;
        if baseline.is_zero() {
            return Err(CostError::DivisionByZero);
        }
        let savings = baseline
            .checked_sub(proposed)
            .ok_or_else(|| CostError::overflow("savings"))?;
        self.reduction_of(savings, baseline)
    }

    fn reduction_of(&self, savings: Money, baseline: Money) -> Result<Percentage> {
        let ratio = Decimal::from(savings.cents())
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|scaled| scaled.checked_div(Decimal::from(baseline.cents())))
            .ok_or_else(|| CostError::overflow("reduction percentage"))?;

        let mut rounded =
            ratio.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(self.precision);
        Ok(Percentage::new(rounded))
    }

    fn tier_figures(&self, scenario: &Scenario) -> Result<Vec<TierFigure>> {
        scenario
            .tiers
            .iter()
            .map(|tier| -> Result<TierFigure> {
                Ok(TierFigure {
                    name: tier.name.clone(),
                    quantity: tier.quantity,
                    unit_cost: tier.unit_cost,
                    subtotal: self.compute_subtotal(tier)?,
                })
            })
            .collect()
    }

    /// Computes every figure of the comparison. The first failure is returned;
    /// a zero baseline fails with [`CostError::DivisionByZero`].
    pub fn evaluate(&self, comparison: &Comparison) -> Result<ComparisonReport> {
        let baseline_tiers = self.tier_figures(&comparison.baseline)?;
        let proposed_tiers = self.tier_figures(&comparison.proposed)?;

        let baseline_total = self.compute_scenario_total(&comparison.baseline)?;
        let proposed_total = self.compute_scenario_total(&comparison.proposed)?;
        tracing::debug!(
            "Scenario totals - {}: {}, {}: {}",
            comparison.baseline.label,
            baseline_total,
            comparison.proposed.label,
            proposed_total
        );

        if baseline_total.is_zero() {
            return Err(CostError::DivisionByZero);
        }
        let savings = baseline_total
            .checked_sub(proposed_total)
            .ok_or_else(|| CostError::overflow("savings"))?;
        let reduction_percent = self.reduction_of(savings, baseline_total)?;

        Ok(ComparisonReport {
            title: comparison.title.clone(),
            subtitle: comparison.subtitle.clone(),
            labels: ScenarioFigures {
                baseline: comparison.baseline.label.clone(),
                proposed: comparison.proposed.label.clone(),
            },
            tier_subtotals: ScenarioFigures {
                baseline: baseline_tiers,
                proposed: proposed_tiers,
            },
            scenario_totals: ScenarioFigures {
                baseline: baseline_total,
                proposed: proposed_total,
            },
            savings,
            reduction_percent,
            cost_increased: savings.is_negative(),
        })
    }
}
