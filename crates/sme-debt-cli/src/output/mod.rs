pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Fields whose values are arrays of records (one table row per entry).
pub(crate) fn record_list(value: &Value) -> Option<(&str, &Vec<Value>)> {
    let map = value.as_object()?;
    for key in ["prioritized_debts", "recommended_programs"] {
        if let Some(Value::Array(arr)) = map.get(key) {
            return Some((key, arr));
        }
    }
    None
}
