use crate::core::{ComparisonReport, Renderer};
use crate::domain::model::{group_thousands, TierFigure};
use crate::utils::error::Result;
use std::fmt::Write;

/// Plain-text summary, one block per scenario followed by the savings lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRenderer;

fn format_quantity(quantity: i64) -> String {
    let sign = if quantity < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(quantity.unsigned_abs()))
}

fn write_scenario(out: &mut String, label: &str, tiers: &[TierFigure], total: &str) {
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", label);
    for tier in tiers {
        let _ = writeln!(
            out,
            "  {}: {} × {} = {}",
            tier.name,
            format_quantity(tier.quantity),
            tier.unit_cost,
            tier.subtotal
        );
    }
    let _ = writeln!(out, "  Annual Cost: {}", total);
}

impl Renderer for SummaryRenderer {
    fn render(&self, report: &ComparisonReport) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{}", report.title);
        if let Some(subtitle) = &report.subtitle {
            let _ = writeln!(out, "{}", subtitle);
        }
        out.push('\n');

        write_scenario(
            &mut out,
            &report.labels.baseline,
            &report.tier_subtotals.baseline,
            &report.scenario_totals.baseline.to_string(),
        );
        out.push('\n');
        write_scenario(
            &mut out,
            &report.labels.proposed,
            &report.tier_subtotals.proposed,
            &report.scenario_totals.proposed.to_string(),
        );
        out.push('\n');

        if report.cost_increased {
            let _ = writeln!(out, "Annual Savings: {} (cost increase)", report.savings);
        } else {
            let _ = writeln!(out, "Annual Savings: {}", report.savings);
        }
        let _ = writeln!(out, "Cost Reduction: {}", report.reduction_percent);
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &ComparisonReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}
