use crate::adapters::render::{JsonRenderer, SummaryRenderer};
use crate::core::Renderer;
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl OutputFormat {
    pub fn renderer(self) -> Box<dyn Renderer> {
        match self {
            OutputFormat::Summary => Box::new(SummaryRenderer),
            OutputFormat::Json => Box::new(JsonRenderer::default()),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "license-savings")]
#[command(about = "Compare the annual cost of a current and a proposed license mix")]
pub struct CliConfig {
    /// Path to the TOML comparison file
    #[arg(short, long, default_value = "license-comparison.toml")]
    pub config: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,

    /// Override the reduction percentage precision from the file
    #[arg(long)]
    pub precision: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
