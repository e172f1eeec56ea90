mod cli;

use std::fs;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use rankviet::domain::models::SeoScoreInput;
use rankviet::error::AppError;
use rankviet::service::{content_analytics, seo_score_engine};

/// Initialize logging with tracing_subscriber. Diagnostics go to stderr so
/// the JSON report on stdout stays machine-readable.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rankviet=info".parse().unwrap()),
        )
        .compact()
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .init();
}

fn read_draft(cli: &cli::Cli) -> Result<SeoScoreInput, AppError> {
    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&raw).map_err(|e| AppError::invalid_input(e.to_string()))
}

fn main() -> Result<()> {
    init_logging();
    let cli = cli::Cli::parse();

    let input = read_draft(&cli).with_context(|| "failed to load content draft")?;
    let report = seo_score_engine(&input);
    tracing::info!(
        score = report.overall_score,
        content_type = input.content_type.as_str(),
        "analysis complete"
    );

    let mut output = serde_json::to_value(&report)?;
    if cli.breakdown {
        output["breakdown"] = serde_json::to_value(report.breakdown())?;
    }
    if cli.analytics {
        output["analytics"] = serde_json::to_value(content_analytics(&input.content_html))?;
    }

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");

    Ok(())
}
