use clap::Parser;
use std::path::PathBuf;

/// Score a Vietnamese news or product draft for SEO and readability
#[derive(Parser, Debug)]
#[command(name = "rankviet", version, about)]
pub struct Cli {
    /// Path to a JSON file holding the content draft; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,

    /// Include the checklist breakdown in the output
    #[arg(long, default_value_t = false)]
    pub breakdown: bool,

    /// Include content analytics (word count, reading time) in the output
    #[arg(long, default_value_t = false)]
    pub analytics: bool,
}
