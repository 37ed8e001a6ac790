use crate::core::cost_model::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::core::{Comparison, ComparisonSource, LicenseTier, Money, Scenario};
use crate::utils::error::{CostError, Result};
use crate::utils::validation::{self, Validate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASELINE_LABEL: &str = "Current State";
pub const DEFAULT_PROPOSED_LABEL: &str = "Proposed State";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub comparison: ComparisonSection,
    pub baseline: ScenarioSection,
    pub proposed: ScenarioSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonSection {
    pub title: String,
    pub subtitle: Option<String>,
    pub precision: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSection {
    pub label: Option<String>,
    #[serde(default)]
    pub tiers: Vec<TierEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierEntry {
    pub name: String,
    pub quantity: i64,
    /// Major units; integer, float or string in the file.
    pub unit_cost: Decimal,
}

impl TomlConfig {
    /// 從 TOML 檔案載入比較設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${ANALYST_SEATS})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CostError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn precision(&self) -> u32 {
        self.comparison.precision.unwrap_or(DEFAULT_PRECISION)
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("comparison.title", &self.comparison.title)?;
        validation::validate_range("comparison.precision", self.precision(), 0, MAX_PRECISION)?;

        for (section, scenario) in [("baseline", &self.baseline), ("proposed", &self.proposed)] {
            if let Some(label) = &scenario.label {
                validation::validate_non_empty_string(&format!("{}.label", section), label)?;
            }
            for (index, tier) in scenario.tiers.iter().enumerate() {
                validation::validate_non_empty_string(
                    &format!("{}.tiers[{}].name", section, index),
                    &tier.name,
                )?;
                unit_cost_to_money(section, index, tier)?;
            }
            validation::validate_unique_names(
                &format!("{}.tiers", section),
                scenario.tiers.iter().map(|tier| tier.name.as_str()),
            )?;
        }

        Ok(())
    }

    pub fn to_comparison(&self) -> Result<Comparison> {
        let baseline = scenario_from_section("baseline", &self.baseline, DEFAULT_BASELINE_LABEL)?;
        let proposed = scenario_from_section("proposed", &self.proposed, DEFAULT_PROPOSED_LABEL)?;

        let comparison = Comparison::new(self.comparison.title.clone(), baseline, proposed);
        Ok(match &self.comparison.subtitle {
            Some(subtitle) => comparison.with_subtitle(subtitle.clone()),
            None => comparison,
        })
    }
}

fn unit_cost_to_money(section: &str, index: usize, tier: &TierEntry) -> Result<Money> {
    Money::from_decimal(tier.unit_cost).ok_or_else(|| CostError::InvalidConfigValueError {
        field: format!("{}.tiers[{}].unit_cost", section, index),
        value: tier.unit_cost.to_string(),
        reason: "Unit cost must have at most two decimal places and fit in cents".to_string(),
    })
}

fn scenario_from_section(
    section: &str,
    scenario: &ScenarioSection,
    default_label: &str,
) -> Result<Scenario> {
    let tiers = scenario
        .tiers
        .iter()
        .enumerate()
        .map(|(index, tier)| {
            let unit_cost = unit_cost_to_money(section, index, tier)?;
            Ok(LicenseTier::new(tier.name.trim(), tier.quantity, unit_cost))
        })
        .collect::<Result<Vec<_>>>()?;

    let label = scenario.label.as_deref().unwrap_or(default_label);
    Ok(Scenario::new(label, tiers))
}

impl ComparisonSource for TomlConfig {
    fn load_comparison(&self) -> Result<Comparison> {
        self.to_comparison()
    }

    fn precision(&self) -> u32 {
        self.precision()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
