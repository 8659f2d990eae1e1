use clap::Args;
use serde_json::Value;

use sme_debt_core::funding::{match_programs, FundingQuery};

use crate::input;

/// Arguments for funding program matching
#[derive(Args)]
pub struct FundingArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Company size: small, medium or large
    #[arg(long)]
    pub company_size: Option<String>,

    /// Industry (informational, not a filter)
    #[arg(long, default_value = "")]
    pub industry: String,

    /// Funding purpose (informational, not a filter)
    #[arg(long, default_value = "")]
    pub purpose: String,
}

pub fn run(args: FundingArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let query: FundingQuery = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        FundingQuery {
            company_size: args
                .company_size
                .ok_or("--company-size is required (or provide --input)")?,
            industry: args.industry,
            purpose: args.purpose,
        }
    };

    let matches = match_programs(&query)?;
    Ok(serde_json::to_value(matches)?)
}
