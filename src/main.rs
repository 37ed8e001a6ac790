use anyhow::Context;
use clap::Parser;
use license_savings::utils::{logger, validation::Validate};
use license_savings::{CliConfig, ComparisonEngine, CostError, TomlConfig};

fn exit_with(e: &CostError) -> ! {
    tracing::error!("❌ {} (exit code {})", e, e.exit_code());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.json_logs {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("📁 Loading comparison from: {}", args.config);
    tracing::debug!("CLI config: {:?}", args);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    if let Some(precision) = args.precision {
        config.comparison.precision = Some(precision);
        tracing::info!("🔧 Precision overridden to: {}", precision);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed");
        exit_with(&e);
    }

    let engine = ComparisonEngine::new(config);
    let report = match engine.run() {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    let output = args
        .format
        .renderer()
        .render(&report)
        .context("failed to render comparison report")?;
    println!("{}", output.trim_end());

    Ok(())
}
