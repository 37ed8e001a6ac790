pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputFormat};

pub use adapters::render::{JsonRenderer, SummaryRenderer};
pub use config::TomlConfig;
pub use core::{cost_model::CostComparisonModel, engine::ComparisonEngine};
pub use domain::model::{
    Comparison, ComparisonReport, LicenseTier, Money, Percentage, Scenario, ScenarioFigures,
    TierFigure,
};
pub use domain::ports::{ComparisonSource, Renderer};
pub use utils::error::{CostError, Result};
