use clap::Args;
use serde_json::Value;

use sme_debt_core::debt_snowball::{prioritize_debts, SnowballInput};

use crate::input;

/// Arguments for debt prioritization. The debt list only fits structured
/// input, so this command takes a file or piped JSON rather than flags.
#[derive(Args)]
pub struct SnowballArgs {
    /// Path to JSON input file
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run(args: SnowballArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let snowball_input: SnowballInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--input file (or piped JSON) is required for debt prioritization".into());
    };

    let output = prioritize_debts(&snowball_input)?;
    Ok(serde_json::to_value(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_from_input_file() {
        let path = std::env::temp_dir().join("smedebt_snowball_input.json");
        fs::write(
            &path,
            r#"{"debts": [
                {"principal": "30000", "interest_rate": "6.0", "minimum_payment": "800"},
                {"principal": "50000", "interest_rate": "8.0", "minimum_payment": "1000"}
            ]}"#,
        )
        .unwrap();

        let value = run(SnowballArgs {
            input: Some(path.to_string_lossy().into_owned()),
        })
        .unwrap();

        let debts = value["prioritized_debts"].as_array().unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0]["priority"], 1);
        assert_eq!(debts[0]["interest_rate"].as_str().unwrap(), "8.0");

        fs::remove_file(&path).ok();
    }
}
