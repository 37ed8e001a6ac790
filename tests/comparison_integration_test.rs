use license_savings::utils::validation::Validate;
use license_savings::{
    Comparison, ComparisonEngine, CostComparisonModel, CostError, LicenseTier, Money, Renderer,
    Scenario, SummaryRenderer, TomlConfig,
};
use rust_decimal::Decimal;
use std::io::Write;
use tempfile::NamedTempFile;

fn bundled_config() -> TomlConfig {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("license-comparison.toml");
    TomlConfig::from_file(path).unwrap()
}

fn config_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file
}

fn dollars(units: i64) -> Money {
    Money::from_major(units).unwrap()
}

#[test]
fn test_bundled_comparison_reproduces_slide_figures() {
    let config = bundled_config();
    assert!(config.validate().is_ok());

    let report = ComparisonEngine::new(config).run().unwrap();

    assert_eq!(report.scenario_totals.baseline, dollars(3_325_000));
    assert_eq!(report.scenario_totals.proposed, dollars(1_031_800));
    assert_eq!(report.savings, dollars(2_293_200));
    assert_eq!(report.reduction_percent.value(), Decimal::new(690, 1));
    assert!(!report.cost_increased);

    let summary = SummaryRenderer.render(&report).unwrap();
    assert!(summary.contains("Annual Savings: $2,293,200"));
    assert!(summary.contains("Cost Reduction: 69.0%"));
}

#[test]
fn test_scenario_total_matches_sum_of_products() {
    let model = CostComparisonModel::new();
    let mixes: [&[(i64, i64)]; 4] = [
        &[],
        &[(1, 100)],
        &[(3500, 95_000), (0, 33_300)],
        &[(7, 1), (11, 13), (17, 19), (23, 29)],
    ];

    for mix in mixes {
        let tiers = mix
            .iter()
            .enumerate()
            .map(|(i, (qty, cents))| {
                LicenseTier::new(format!("Tier {}", i), *qty, Money::from_cents(*cents))
            })
            .collect();
        let expected: i64 = mix.iter().map(|(qty, cents)| qty * cents).sum();

        let total = model
            .compute_scenario_total(&Scenario::new("Mix", tiers))
            .unwrap();
        assert_eq!(total.cents(), expected);
    }
}

#[test]
fn test_savings_is_difference_of_totals_in_both_directions() {
    let model = CostComparisonModel::new();
    for (baseline_qty, proposed_qty) in [(10, 4), (4, 10), (6, 6)] {
        let comparison = Comparison::new(
            "Direction",
            Scenario::new("Current State", vec![LicenseTier::new("Seat", baseline_qty, dollars(50))]),
            Scenario::new("Proposed State", vec![LicenseTier::new("Seat", proposed_qty, dollars(50))]),
        );
        let savings = model.compute_savings(&comparison).unwrap();
        assert_eq!(savings, dollars((baseline_qty - proposed_qty) * 50));
    }
}

#[test]
fn test_zero_baseline_file_fails_with_division_by_zero() {
    let file = config_file(
        r#"
[comparison]
title = "Greenfield"

[baseline]

[proposed]
[[proposed.tiers]]
name = "Consumer"
quantity = 2100
unit_cost = 333
"#,
    );
    let config = TomlConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());

    let err = ComparisonEngine::new(config).run().unwrap_err();
    assert!(matches!(err, CostError::DivisionByZero));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_negative_unit_cost_file_fails_with_invalid_input() {
    let file = config_file(
        r#"
[comparison]
title = "Refund"

[baseline]
[[baseline.tiers]]
name = "Analyst"
quantity = 3500
unit_cost = 950

[proposed]
[[proposed.tiers]]
name = "Consumer"
quantity = 10
unit_cost = "-333"
"#,
    );
    let config = TomlConfig::from_file(file.path()).unwrap();
    let err = ComparisonEngine::new(config).run().unwrap_err();
    match err {
        CostError::InvalidInput { tier, field, value } => {
            assert_eq!(tier, "Consumer");
            assert_eq!(field, "unit_cost");
            assert_eq!(value, -33_300);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let result = TomlConfig::from_file("/nonexistent/license-comparison.toml");
    assert!(matches!(result, Err(CostError::IoError(_))));
}
