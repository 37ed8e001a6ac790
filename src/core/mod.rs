pub mod cost_model;
pub mod engine;

pub use crate::domain::model::{Comparison, ComparisonReport, LicenseTier, Money, Percentage, Scenario};
pub use crate::domain::ports::{ComparisonSource, Renderer};
pub use crate::utils::error::Result;
