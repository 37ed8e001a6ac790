use crate::core::cost_model::CostComparisonModel;
use crate::core::{ComparisonReport, ComparisonSource};
use crate::utils::error::Result;

pub struct ComparisonEngine<S: ComparisonSource> {
    source: S,
    model: CostComparisonModel,
}

impl<S: ComparisonSource> ComparisonEngine<S> {
    pub fn new(source: S) -> Self {
        let model = CostComparisonModel::with_precision(source.precision());
        Self { source, model }
    }

    pub fn model(&self) -> &CostComparisonModel {
        &self.model
    }

    pub fn run(&self) -> Result<ComparisonReport> {
        tracing::info!("Loading comparison...");
        let comparison = self.source.load_comparison()?;
        tracing::info!(
            "Loaded '{}': {} baseline tiers, {} proposed tiers",
            comparison.title,
            comparison.baseline.tiers.len(),
            comparison.proposed.tiers.len()
        );

        tracing::info!("Computing figures (precision: {})...", self.model.precision());
        let report = self.model.evaluate(&comparison)?;

        if report.cost_increased {
            tracing::warn!(
                "Proposed mix costs more than the baseline: savings {}",
                report.savings
            );
        } else {
            tracing::info!(
                "Savings {} ({} reduction)",
                report.savings,
                report.reduction_percent
            );
        }

        Ok(report)
    }
}
