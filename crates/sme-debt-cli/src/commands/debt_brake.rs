use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use sme_debt_core::debt_brake::{debt_brake_limit, DebtBrakeInput};

use crate::input;

/// Arguments for the debt brake calculation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct DebtBrakeArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Annual revenue
    #[arg(long)]
    pub revenue: Option<Decimal>,
}

pub fn run(args: DebtBrakeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let brake_input: DebtBrakeInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        DebtBrakeInput {
            revenue: args
                .revenue
                .ok_or("--revenue is required (or provide --input)")?,
        }
    };

    let result = debt_brake_limit(&brake_input)?;
    Ok(serde_json::to_value(result)?)
}
