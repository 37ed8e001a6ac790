use crate::domain::model::{Comparison, ComparisonReport};
use crate::utils::error::Result;

/// Supplies the comparison to evaluate.
pub trait ComparisonSource {
    fn load_comparison(&self) -> Result<Comparison>;

    /// Decimal places for the reduction percentage.
    fn precision(&self) -> u32 {
        crate::core::cost_model::DEFAULT_PRECISION
    }
}

pub trait Renderer {
    fn render(&self, report: &ComparisonReport) -> Result<String>;
}

impl ComparisonSource for Comparison {
    fn load_comparison(&self) -> Result<Comparison> {
        Ok(self.clone())
    }
}
